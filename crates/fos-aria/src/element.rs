//! Element Access
//!
//! Host-side views of document elements, and role matching over them.

use crate::kb::KnowledgeBase;

/// Read access to one element of the host document
pub trait ElementView: Clone {
    /// Lowercase tag name
    fn local_name(&self) -> String;

    /// Content attribute value
    fn attribute(&self, name: &str) -> Option<String>;

    /// Native (IDL) property rendered as markup, e.g. `"true"` for `checked`.
    /// `None` when the element has no such property.
    fn property(&self, name: &str) -> Option<String>;

    /// Whether the element matches a selector
    fn matches(&self, selector: &str) -> bool;

    fn text_content(&self) -> String;

    /// `<label>` elements associated with this element
    fn labels(&self) -> Vec<Self>;

    /// Element children in document order
    fn children(&self) -> Vec<Self>;
}

/// Read access to the host document
pub trait DocumentView {
    type Element: ElementView;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Every element in document order
    fn elements(&self) -> Vec<Self::Element>;
}

/// The sub-role of `role` that `element` carries, if any.
///
/// An explicit `role` attribute must equal a sub-role; without one, the
/// native selectors of each sub-role are tried in sub-role order. This is the
/// per-element form of [`KnowledgeBase::selector`].
pub fn matched_role<E: ElementView>(kb: &KnowledgeBase, element: &E, role: &str) -> Option<String> {
    let sub_roles = kb.sub_roles(role);
    match element.attribute("role") {
        Some(explicit) => sub_roles.iter().find(|r| *r == explicit).map(String::from),
        None => sub_roles
            .iter()
            .find(|sub_role| {
                kb.role(sub_role)
                    .is_some_and(|def| def.selectors.iter().any(|sel| element.matches(sel)))
            })
            .map(String::from),
    }
}

/// Whether `element` has `role` or one of its sub-roles
pub fn element_has_role<E: ElementView>(kb: &KnowledgeBase, element: &E, role: &str) -> bool {
    matched_role(kb, element, role).is_some()
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use std::collections::HashMap;

    /// Element whose selector matches are listed up front
    #[derive(Debug, Clone, Default)]
    pub struct FakeElement {
        pub tag: String,
        pub attrs: HashMap<String, String>,
        pub props: HashMap<String, String>,
        pub matches: Vec<String>,
        pub text: String,
        pub labels: Vec<FakeElement>,
        pub children: Vec<FakeElement>,
    }

    impl FakeElement {
        pub fn new(tag: &str) -> Self {
            Self {
                tag: tag.to_string(),
                matches: vec![tag.to_string()],
                ..Default::default()
            }
        }

        pub fn attr(mut self, name: &str, value: &str) -> Self {
            self.attrs.insert(name.to_string(), value.to_string());
            self
        }

        pub fn prop(mut self, name: &str, value: &str) -> Self {
            self.props.insert(name.to_string(), value.to_string());
            self
        }

        pub fn matching(mut self, selector: &str) -> Self {
            self.matches.push(selector.to_string());
            self
        }

        pub fn text(mut self, text: &str) -> Self {
            self.text = text.to_string();
            self
        }

        pub fn label(mut self, label: FakeElement) -> Self {
            self.labels.push(label);
            self
        }

        pub fn child(mut self, child: FakeElement) -> Self {
            self.children.push(child);
            self
        }
    }

    impl ElementView for FakeElement {
        fn local_name(&self) -> String {
            self.tag.clone()
        }

        fn attribute(&self, name: &str) -> Option<String> {
            self.attrs.get(name).cloned()
        }

        fn property(&self, name: &str) -> Option<String> {
            self.props.get(name).cloned()
        }

        fn matches(&self, selector: &str) -> bool {
            self.matches.iter().any(|s| s == selector)
        }

        fn text_content(&self) -> String {
            self.text.clone()
        }

        fn labels(&self) -> Vec<Self> {
            self.labels.clone()
        }

        fn children(&self) -> Vec<Self> {
            self.children.clone()
        }
    }

    #[derive(Debug, Default)]
    pub struct FakeDocument {
        pub elements: Vec<FakeElement>,
    }

    impl DocumentView for FakeDocument {
        type Element = FakeElement;

        fn element_by_id(&self, id: &str) -> Option<FakeElement> {
            self.elements
                .iter()
                .find(|el| el.attrs.get("id").is_some_and(|v| v == id))
                .cloned()
        }

        fn elements(&self) -> Vec<FakeElement> {
            self.elements.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeElement;
    use super::*;

    #[test]
    fn test_native_landmark() {
        let kb = KnowledgeBase::builtin();
        let nav = FakeElement::new("nav");
        assert_eq!(matched_role(kb, &nav, "landmark"), Some("navigation".to_string()));
        assert!(!element_has_role(kb, &FakeElement::new("div"), "landmark"));
    }

    #[test]
    fn test_explicit_role_wins() {
        let kb = KnowledgeBase::builtin();
        let nav = FakeElement::new("nav").attr("role", "presentation");
        assert!(!element_has_role(kb, &nav, "landmark"));

        let div = FakeElement::new("div").attr("role", "search");
        assert_eq!(matched_role(kb, &div, "landmark"), Some("search".to_string()));
    }

    #[test]
    fn test_labelled_section_is_region() {
        let kb = KnowledgeBase::builtin();
        let section = FakeElement::new("section").matching("section[aria-label]");
        assert_eq!(matched_role(kb, &section, "landmark"), Some("region".to_string()));
        assert!(!element_has_role(kb, &FakeElement::new("section"), "landmark"));
    }
}
