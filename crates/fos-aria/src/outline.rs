//! Landmark Outline
//!
//! Keyboard shortcut and landmark list behind the landmark navigation dialog.
//! Showing the dialog and moving focus are left to the host.

use std::fmt;
use std::str::FromStr;

use crate::element::{matched_role, DocumentView, ElementView};
use crate::kb::{KnowledgeBase, LANDMARK_ROLE};
use crate::names::accessible_name;
use crate::AriaError;

/// Key combination; unset Ctrl and Meta are ignored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    /// `KeyboardEvent.key`, lowercase
    pub key: String,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Default for Shortcut {
    /// Ctrl+M
    fn default() -> Self {
        Self {
            key: "m".to_string(),
            ctrl: true,
            alt: false,
            shift: false,
            meta: false,
        }
    }
}

/// Key press as reported by the host
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: String,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl KeyEvent {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ..Default::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

impl Shortcut {
    /// Alt must match exactly so AltGr layouts do not trigger the shortcut.
    /// Without Shift the key compares case-sensitively, so Shift+M is not M.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        let key = if self.shift {
            event.key.eq_ignore_ascii_case(&self.key)
        } else {
            event.key == self.key
        };
        key && event.alt == self.alt
            && (!self.ctrl || event.ctrl)
            && (!self.shift || event.shift)
            && (!self.meta || event.meta)
    }
}

impl FromStr for Shortcut {
    type Err = AriaError;

    /// Parse `"ctrl+m"`, `"Ctrl+Shift+L"` and similar
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AriaError::InvalidShortcut(s.to_string());
        let mut shortcut = Shortcut {
            key: String::new(),
            ctrl: false,
            alt: false,
            shift: false,
            meta: false,
        };

        for part in s.split('+').map(|p| p.trim().to_ascii_lowercase()) {
            match part.as_str() {
                "ctrl" | "control" => shortcut.ctrl = true,
                "alt" | "option" => shortcut.alt = true,
                "shift" => shortcut.shift = true,
                "meta" | "cmd" | "super" => shortcut.meta = true,
                "" => return Err(invalid()),
                key if shortcut.key.is_empty() => shortcut.key = key.to_string(),
                _ => return Err(invalid()),
            }
        }

        if shortcut.key.is_empty() {
            return Err(invalid());
        }
        Ok(shortcut)
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (held, name) in [
            (self.ctrl, "Ctrl"),
            (self.alt, "Alt"),
            (self.shift, "Shift"),
            (self.meta, "Meta"),
        ] {
            if held {
                write!(f, "{}+", name)?;
            }
        }
        write!(f, "{}", self.key.to_uppercase())
    }
}

/// One landmark of the outline
#[derive(Debug, Clone)]
pub struct OutlineEntry<E> {
    /// Concrete landmark role, e.g. `navigation`
    pub role: String,
    /// Accessible name; may be empty
    pub name: String,
    /// Element to focus when the entry is chosen
    pub element: E,
}

impl<E> OutlineEntry<E> {
    /// Text for the entry's link; the role when the landmark has no name
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.role
        } else {
            &self.name
        }
    }
}

/// Landmarks of a document in document order
#[derive(Debug, Clone)]
pub struct LandmarkOutline<E> {
    entries: Vec<OutlineEntry<E>>,
}

impl<E: ElementView> LandmarkOutline<E> {
    /// Collect every element with a landmark role
    pub fn collect<D>(kb: &KnowledgeBase, doc: &D) -> Self
    where
        D: DocumentView<Element = E>,
    {
        let entries: Vec<OutlineEntry<E>> = doc
            .elements()
            .into_iter()
            .filter_map(|element| {
                let role = matched_role(kb, &element, LANDMARK_ROLE)?;
                let name = accessible_name(doc, &element);
                Some(OutlineEntry { role, name, element })
            })
            .collect();

        tracing::debug!("Collected {} landmarks", entries.len());
        Self { entries }
    }

    /// Build the outline if `event` triggers `shortcut`
    pub fn on_key<D>(kb: &KnowledgeBase, shortcut: &Shortcut, doc: &D, event: &KeyEvent) -> Option<Self>
    where
        D: DocumentView<Element = E>,
    {
        shortcut.matches(event).then(|| Self::collect(kb, doc))
    }

    pub fn entries(&self) -> &[OutlineEntry<E>] {
        &self.entries
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(OutlineEntry::label).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::fake::{FakeDocument, FakeElement};

    #[test]
    fn test_default_shortcut() {
        let shortcut = Shortcut::default();
        assert!(shortcut.matches(&KeyEvent::new("m").with_ctrl()));
        assert!(!shortcut.matches(&KeyEvent::new("m")));
        assert!(!shortcut.matches(&KeyEvent::new("m").with_ctrl().with_alt()));
        assert!(!shortcut.matches(&KeyEvent::new("n").with_ctrl()));
        assert!(!shortcut.matches(&KeyEvent::new("M").with_ctrl().with_shift()));
        assert_eq!(shortcut.to_string(), "Ctrl+M");
    }

    #[test]
    fn test_parse_shortcut() {
        let shortcut: Shortcut = "Ctrl + Shift + L".parse().unwrap();
        assert_eq!(shortcut.key, "l");
        assert!(shortcut.ctrl && shortcut.shift && !shortcut.alt);
        assert!(shortcut.matches(&KeyEvent::new("L").with_ctrl().with_shift()));
        assert!(!shortcut.matches(&KeyEvent::new("l").with_ctrl()));

        assert!("ctrl+".parse::<Shortcut>().is_err());
        assert!("ctrl+shift".parse::<Shortcut>().is_err());
        assert!("a+b".parse::<Shortcut>().is_err());
    }

    fn document() -> FakeDocument {
        FakeDocument {
            elements: vec![
                FakeElement::new("body"),
                FakeElement::new("nav").attr("aria-label", "Primary"),
                FakeElement::new("div").attr("role", "search").text("  Find  "),
                FakeElement::new("main").text(""),
                FakeElement::new("section"),
                FakeElement::new("aside").attr("role", "note").text("aside"),
            ],
        }
    }

    #[test]
    fn test_collect() {
        let outline = LandmarkOutline::collect(KnowledgeBase::builtin(), &document());
        let roles: Vec<&str> = outline.entries().iter().map(|e| e.role.as_str()).collect();
        assert_eq!(roles, vec!["navigation", "search", "main"]);
        assert_eq!(outline.labels(), vec!["Primary", "Find", "main"]);
    }

    #[test]
    fn test_document_header_and_footer() {
        let doc = FakeDocument {
            elements: vec![
                FakeElement::new("header").matching("body > header"),
                FakeElement::new("main"),
                FakeElement::new("article").child(FakeElement::new("header")),
                FakeElement::new("header"),
                FakeElement::new("footer").matching("body > footer"),
            ],
        };
        let outline = LandmarkOutline::collect(KnowledgeBase::builtin(), &doc);
        let roles: Vec<&str> = outline.entries().iter().map(|e| e.role.as_str()).collect();
        assert_eq!(roles, vec!["banner", "main", "contentinfo"]);
    }

    #[test]
    fn test_on_key() {
        let kb = KnowledgeBase::builtin();
        let doc = document();
        let shortcut = Shortcut::default();
        assert!(LandmarkOutline::on_key(kb, &shortcut, &doc, &KeyEvent::new("m")).is_none());
        let outline = LandmarkOutline::on_key(kb, &shortcut, &doc, &KeyEvent::new("m").with_ctrl()).unwrap();
        assert_eq!(outline.len(), 3);
    }
}
