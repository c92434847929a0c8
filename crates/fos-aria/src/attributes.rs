//! ARIA Attributes
//!
//! Attribute value types, parsing and native property mappings.

use serde::{Deserialize, Serialize};

/// Value type of an `aria-*` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttributeType {
    Token,
    TokenList,
    Tristate,
    Bool,
    BoolUndefined,
    String,
    Int,
    Number,
    Id,
    IdList,
}

/// Attribute types keyed by name without the `aria-` prefix
pub static ATTRIBUTES: &[(&str, AttributeType)] = &[
    // widget
    ("autocomplete", AttributeType::Token),
    ("checked", AttributeType::Tristate),
    ("current", AttributeType::Token),
    ("disabled", AttributeType::Bool),
    ("expanded", AttributeType::BoolUndefined),
    ("haspopup", AttributeType::Token),
    ("hidden", AttributeType::Bool),
    ("invalid", AttributeType::Token),
    ("keyshortcuts", AttributeType::String),
    ("label", AttributeType::String),
    ("level", AttributeType::Int),
    ("modal", AttributeType::Bool),
    ("multiline", AttributeType::Bool),
    ("multiselectable", AttributeType::Bool),
    ("orientation", AttributeType::Token),
    ("placeholder", AttributeType::String),
    ("pressed", AttributeType::Tristate),
    ("readonly", AttributeType::Bool),
    ("required", AttributeType::Bool),
    ("roledescription", AttributeType::String),
    ("selected", AttributeType::BoolUndefined),
    ("valuemax", AttributeType::Number),
    ("valuemin", AttributeType::Number),
    ("valuenow", AttributeType::Number),
    ("valuetext", AttributeType::String),
    // live
    ("atomic", AttributeType::Bool),
    ("busy", AttributeType::Bool),
    ("live", AttributeType::Token),
    ("relevant", AttributeType::TokenList),
    // drag and drop
    ("dropeffect", AttributeType::TokenList),
    ("grabbed", AttributeType::BoolUndefined),
    // relationship
    ("activedescendant", AttributeType::Id),
    ("colcount", AttributeType::Int),
    ("colindex", AttributeType::Int),
    ("colspan", AttributeType::Int),
    ("controls", AttributeType::IdList),
    ("describedby", AttributeType::IdList),
    ("details", AttributeType::Id),
    ("errormessage", AttributeType::Id),
    ("flowto", AttributeType::IdList),
    ("labelledby", AttributeType::IdList),
    ("owns", AttributeType::IdList),
    ("posinset", AttributeType::Int),
    ("rowcount", AttributeType::Int),
    ("rowindex", AttributeType::Int),
    ("rowspan", AttributeType::Int),
    ("setsize", AttributeType::Int),
    ("sort", AttributeType::Token),
];

/// Native properties that override the ARIA attribute
pub static STRONG_MAPPINGS: &[(&str, &str)] = &[
    ("disabled", "disabled"),
    ("placeholder", "placeholder"),
    ("readonly", "readOnly"),
    ("required", "required"),
];

/// Native properties used only when the ARIA attribute is absent
pub static WEAK_MAPPINGS: &[(&str, &str)] = &[
    ("checked", "checked"),
    ("colspan", "colSpan"),
    ("expanded", "open"),
    ("multiselectable", "multiple"),
    ("rowspan", "rowSpan"),
    ("selected", "selected"),
];

/// Look up an attribute type; accepts names with or without the `aria-` prefix
pub fn attribute_type(name: &str) -> Option<AttributeType> {
    let name = name.strip_prefix("aria-").unwrap_or(name);
    ATTRIBUTES
        .iter()
        .find(|(attr, _)| *attr == name)
        .map(|(_, ty)| *ty)
}

/// How a native property relates to an ARIA attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingStrength {
    Strong,
    Weak,
}

/// Native property backing an attribute, if any
pub fn native_property(name: &str) -> Option<(&'static str, MappingStrength)> {
    let name = name.strip_prefix("aria-").unwrap_or(name);
    let find = |table: &'static [(&'static str, &'static str)]| {
        table.iter().find(|(attr, _)| *attr == name).map(|(_, prop)| *prop)
    };
    find(STRONG_MAPPINGS)
        .map(|prop| (prop, MappingStrength::Strong))
        .or_else(|| find(WEAK_MAPPINGS).map(|prop| (prop, MappingStrength::Weak)))
}

/// Default literal from a role table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Bool(bool),
    Int(i64),
    Token(String),
}

impl DefaultValue {
    /// Render the literal the way it would appear in markup
    pub fn as_markup(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Int(n) => n.to_string(),
            Self::Token(t) => t.clone(),
        }
    }
}

/// Three-state value for `checked` and `pressed`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tristate {
    True,
    False,
    Mixed,
}

/// Parsed attribute value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    /// `bool-undefined` attributes set to `undefined`
    Undefined,
    Tristate(Tristate),
    Int(i64),
    Number(f64),
    Token(String),
    List(Vec<String>),
    String(String),
}

impl AttributeType {
    /// Parse a markup value
    pub fn parse(&self, value: &str) -> Option<AttributeValue> {
        let trimmed = value.trim();
        Some(match self {
            Self::Bool => AttributeValue::Bool(parse_bool(trimmed)?),
            Self::BoolUndefined => match trimmed {
                "undefined" => AttributeValue::Undefined,
                _ => AttributeValue::Bool(parse_bool(trimmed)?),
            },
            Self::Tristate => AttributeValue::Tristate(match trimmed {
                "true" => Tristate::True,
                "false" => Tristate::False,
                "mixed" => Tristate::Mixed,
                _ => return None,
            }),
            Self::Int => AttributeValue::Int(trimmed.parse().ok()?),
            Self::Number => AttributeValue::Number(trimmed.parse().ok()?),
            Self::Token | Self::Id => {
                if trimmed.is_empty() || trimmed.contains(char::is_whitespace) {
                    return None;
                }
                AttributeValue::Token(trimmed.to_string())
            }
            Self::TokenList | Self::IdList => {
                AttributeValue::List(trimmed.split_whitespace().map(String::from).collect())
            }
            Self::String => AttributeValue::String(value.to_string()),
        })
    }

    /// Whether a table default is a legal value of this type
    pub fn accepts(&self, value: &DefaultValue) -> bool {
        match (self, value) {
            (Self::Bool | Self::BoolUndefined | Self::Tristate, DefaultValue::Bool(_)) => true,
            (Self::Int | Self::Number, DefaultValue::Int(_)) => true,
            (_, DefaultValue::Token(t)) => self.parse(t).is_some(),
            _ => false,
        }
    }

    /// Convert a table default into a typed value
    pub fn from_default(&self, value: &DefaultValue) -> Option<AttributeValue> {
        match (self, value) {
            (Self::Tristate, DefaultValue::Bool(b)) => Some(AttributeValue::Tristate(if *b {
                Tristate::True
            } else {
                Tristate::False
            })),
            (Self::Bool | Self::BoolUndefined, DefaultValue::Bool(b)) => {
                Some(AttributeValue::Bool(*b))
            }
            (Self::Int, DefaultValue::Int(n)) => Some(AttributeValue::Int(*n)),
            (Self::Number, DefaultValue::Int(n)) => Some(AttributeValue::Number(*n as f64)),
            (_, DefaultValue::Token(t)) => self.parse(t),
            _ => None,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_type_lookup() {
        assert_eq!(attribute_type("checked"), Some(AttributeType::Tristate));
        assert_eq!(attribute_type("aria-labelledby"), Some(AttributeType::IdList));
        assert_eq!(attribute_type("colour"), None);
    }

    #[test]
    fn test_native_property() {
        assert_eq!(native_property("readonly"), Some(("readOnly", MappingStrength::Strong)));
        assert_eq!(native_property("aria-expanded"), Some(("open", MappingStrength::Weak)));
        assert_eq!(native_property("label"), None);
    }

    #[test]
    fn test_parse_values() {
        assert_eq!(
            AttributeType::Tristate.parse("mixed"),
            Some(AttributeValue::Tristate(Tristate::Mixed))
        );
        assert_eq!(AttributeType::BoolUndefined.parse("undefined"), Some(AttributeValue::Undefined));
        assert_eq!(AttributeType::Bool.parse("yes"), None);
        assert_eq!(AttributeType::Int.parse(" 3 "), Some(AttributeValue::Int(3)));
        assert_eq!(AttributeType::Number.parse("2.5"), Some(AttributeValue::Number(2.5)));
        assert_eq!(AttributeType::Token.parse("two words"), None);
        assert_eq!(
            AttributeType::IdList.parse("a  b"),
            Some(AttributeValue::List(vec!["a".into(), "b".into()]))
        );
    }

    #[test]
    fn test_accepts_defaults() {
        assert!(AttributeType::Tristate.accepts(&DefaultValue::Token("false".into())));
        assert!(AttributeType::Tristate.accepts(&DefaultValue::Bool(false)));
        assert!(AttributeType::Number.accepts(&DefaultValue::Int(50)));
        assert!(!AttributeType::Int.accepts(&DefaultValue::Bool(true)));
        assert!(!AttributeType::Bool.accepts(&DefaultValue::Token("maybe".into())));
    }

    #[test]
    fn test_from_default() {
        assert_eq!(
            AttributeType::Tristate.from_default(&DefaultValue::Bool(false)),
            Some(AttributeValue::Tristate(Tristate::False))
        );
        assert_eq!(
            AttributeType::Number.from_default(&DefaultValue::Int(100)),
            Some(AttributeValue::Number(100.0))
        );
    }
}
