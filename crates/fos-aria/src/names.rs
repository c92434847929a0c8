//! Accessible Names
//!
//! Simplified text alternative computation.
//! See <https://www.w3.org/TR/accname-1.1/>.

use crate::element::{DocumentView, ElementView};

/// Elements that can be associated with a `<label>`
pub static LABELABLE: &[&str] = &[
    "button",
    r#"input:not([type="hidden"])"#,
    "keygen",
    "meter",
    "output",
    "progress",
    "select",
    "textarea",
];

/// Elements named by a specific child element
pub static NAME_FROM_DESCENDANT: &[(&str, &str)] = &[
    ("figure", "figcaption"),
    ("table", "caption"),
    ("fieldset", "legend"),
];

/// Names of elements that have nothing else to go on
pub static NAME_DEFAULTS: &[(&str, &str)] = &[
    (r#"input[type="submit"]"#, "Submit"),
    (r#"input[type="reset"]"#, "Reset"),
    ("summary", "Details"),
];

/// Compute the accessible name of `element`
pub fn accessible_name<D: DocumentView>(doc: &D, element: &D::Element) -> String {
    compute(doc, element, false)
}

/// Trim and collapse runs of whitespace
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// Targets of aria-labelledby do not follow their own aria-labelledby.
fn compute<D: DocumentView>(doc: &D, element: &D::Element, in_labelledby: bool) -> String {
    let labelledby = || {
        if in_labelledby {
            return None;
        }
        let ids = element.attribute("aria-labelledby")?;
        let names: Vec<String> = ids
            .split_whitespace()
            .filter_map(|id| doc.element_by_id(id))
            .map(|target| compute(doc, &target, true))
            .filter(|name| !name.is_empty())
            .collect();
        Some(names.join(" "))
    };
    let labels = || {
        if !LABELABLE.iter().any(|sel| element.matches(sel)) {
            return None;
        }
        let names: Vec<String> = element
            .labels()
            .iter()
            .map(|label| compute(doc, label, in_labelledby))
            .filter(|name| !name.is_empty())
            .collect();
        Some(names.join(" "))
    };
    let caption = || {
        let tag = element.local_name();
        let (_, child_tag) = NAME_FROM_DESCENDANT.iter().find(|(parent, _)| *parent == tag)?;
        element
            .children()
            .into_iter()
            .find(|child| child.local_name() == *child_tag)
            .map(|child| child.text_content())
    };
    let value = || element.property("value").or_else(|| element.attribute("value"));
    let fallback = || {
        NAME_DEFAULTS
            .iter()
            .find(|(sel, _)| element.matches(sel))
            .map(|(_, name)| name.to_string())
    };

    let steps: [&dyn Fn() -> Option<String>; 10] = [
        &labelledby,
        &|| element.attribute("aria-label"),
        &labels,
        &|| element.attribute("placeholder"),
        &caption,
        &|| element.attribute("alt"),
        &|| Some(element.text_content()),
        &|| element.attribute("title"),
        &value,
        &fallback,
    ];

    steps
        .iter()
        .filter_map(|step| step())
        .map(|name| normalize_whitespace(&name))
        .find(|name| !name.is_empty())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::fake::{FakeDocument, FakeElement};

    fn name(el: FakeElement) -> String {
        accessible_name(&FakeDocument::default(), &el)
    }

    #[test]
    fn test_whitespace() {
        assert_eq!(normalize_whitespace("  Main \n\t menu  "), "Main menu");
    }

    #[test]
    fn test_aria_label_over_text() {
        let nav = FakeElement::new("nav").attr("aria-label", " Site ").text("Home About");
        assert_eq!(name(nav), "Site");
    }

    #[test]
    fn test_labelledby() {
        let doc = FakeDocument {
            elements: vec![
                FakeElement::new("h2").attr("id", "t1").text("Primary"),
                FakeElement::new("span").attr("id", "t2").text(" links "),
            ],
        };
        let nav = FakeElement::new("nav")
            .attr("aria-labelledby", "t1 missing t2")
            .attr("aria-label", "ignored");
        assert_eq!(accessible_name(&doc, &nav), "Primary links");
    }

    #[test]
    fn test_labelledby_cycle() {
        let doc = FakeDocument {
            elements: vec![
                FakeElement::new("div")
                    .attr("id", "a")
                    .attr("aria-labelledby", "b")
                    .text("A"),
                FakeElement::new("div")
                    .attr("id", "b")
                    .attr("aria-labelledby", "a")
                    .text("B"),
            ],
        };
        let a = doc.elements[0].clone();
        assert_eq!(accessible_name(&doc, &a), "B");
    }

    #[test]
    fn test_labelledby_missing_falls_through() {
        let nav = FakeElement::new("nav").attr("aria-labelledby", "nope").attr("title", "Tip");
        assert_eq!(name(nav), "Tip");
    }

    #[test]
    fn test_labels_only_for_labelable() {
        let label = FakeElement::new("label").text("Email");
        let input = FakeElement::new("input")
            .matching(r#"input:not([type="hidden"])"#)
            .label(label.clone());
        assert_eq!(name(input), "Email");

        let div = FakeElement::new("div").label(label).attr("title", "Box");
        assert_eq!(name(div), "Box");
    }

    #[test]
    fn test_caption() {
        let figure = FakeElement::new("figure")
            .child(FakeElement::new("img"))
            .child(FakeElement::new("figcaption").text("A chart"))
            .text("ignored A chart");
        assert_eq!(name(figure), "A chart");
    }

    #[test]
    fn test_value_and_defaults() {
        let submit = FakeElement::new("input").matching(r#"input[type="submit"]"#);
        assert_eq!(name(submit.clone()), "Submit");
        assert_eq!(name(submit.prop("value", "Send")), "Send");
    }
}
