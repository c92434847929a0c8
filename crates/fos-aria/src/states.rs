//! Effective States
//!
//! Resolves an ARIA attribute from native properties, markup and role defaults.

use crate::attributes::{attribute_type, native_property, AttributeValue, MappingStrength};
use crate::element::ElementView;
use crate::kb::KnowledgeBase;

/// Effective value of `attribute` on an element with `role`.
///
/// Precedence: strong native property, `aria-*` attribute, weak native
/// property, role default. Values that do not parse are skipped.
pub fn attribute_value<E: ElementView>(
    kb: &KnowledgeBase,
    element: &E,
    role: &str,
    attribute: &str,
) -> Option<AttributeValue> {
    let attribute = attribute.strip_prefix("aria-").unwrap_or(attribute);
    let ty = attribute_type(attribute)?;
    let native = native_property(attribute);
    let from_property = |prop: &str| element.property(prop).and_then(|v| ty.parse(&v));

    if let Some((prop, MappingStrength::Strong)) = native {
        if let Some(value) = from_property(prop) {
            return Some(value);
        }
    }
    if let Some(value) = element
        .attribute(&format!("aria-{}", attribute))
        .and_then(|v| ty.parse(&v))
    {
        return Some(value);
    }
    if let Some((prop, MappingStrength::Weak)) = native {
        if let Some(value) = from_property(prop) {
            return Some(value);
        }
    }
    kb.default_value(role, attribute)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::Tristate;
    use crate::element::fake::FakeElement;

    #[test]
    fn test_role_default() {
        let kb = KnowledgeBase::builtin();
        let el = FakeElement::new("div");
        assert_eq!(
            attribute_value(kb, &el, "checkbox", "aria-checked"),
            Some(AttributeValue::Tristate(Tristate::False))
        );
        assert_eq!(attribute_value(kb, &el, "log", "live"), Some(AttributeValue::Token("polite".into())));
        assert_eq!(attribute_value(kb, &el, "button", "checked"), None);
    }

    #[test]
    fn test_weak_mapping_yields_to_markup() {
        let kb = KnowledgeBase::builtin();
        let el = FakeElement::new("input")
            .prop("checked", "true")
            .attr("aria-checked", "mixed");
        assert_eq!(
            attribute_value(kb, &el, "checkbox", "checked"),
            Some(AttributeValue::Tristate(Tristate::Mixed))
        );
        let el = FakeElement::new("input").prop("checked", "true");
        assert_eq!(
            attribute_value(kb, &el, "checkbox", "checked"),
            Some(AttributeValue::Tristate(Tristate::True))
        );
    }

    #[test]
    fn test_strong_mapping_overrides_markup() {
        let kb = KnowledgeBase::builtin();
        let el = FakeElement::new("input")
            .prop("readOnly", "false")
            .attr("aria-readonly", "true");
        assert_eq!(attribute_value(kb, &el, "textbox", "readonly"), Some(AttributeValue::Bool(false)));
    }

    #[test]
    fn test_unparsable_markup_falls_back() {
        let kb = KnowledgeBase::builtin();
        let el = FakeElement::new("h3").attr("aria-level", "high");
        assert_eq!(attribute_value(kb, &el, "heading", "level"), Some(AttributeValue::Int(2)));
        assert_eq!(attribute_value(kb, &el, "heading", "colour"), None);
    }
}
