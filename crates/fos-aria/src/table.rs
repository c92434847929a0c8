//! Role Table
//!
//! Owned, serializable role definitions and the graph built from them.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::attributes::DefaultValue;
use crate::hierarchy::RoleGraph;
use crate::roles::{StaticDefault, BUILTIN_ROLES, BUILTIN_VERSION};
use crate::AriaError;

/// One role of the table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoleDefinition {
    /// Native element selectors with this implicit role
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub selectors: Vec<String>,
    /// Directly specialized roles
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub child_roles: Vec<String>,
    /// Whether the accessible name may come from element contents
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub name_from_contents: bool,
    /// Implicit attribute values, keyed without the `aria-` prefix
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub defaults: BTreeMap<String, DefaultValue>,
}

/// Versioned collection of role definitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleTable {
    pub version: String,
    pub roles: BTreeMap<String, RoleDefinition>,
}

impl RoleTable {
    /// The table bundled with the crate
    pub fn builtin() -> Self {
        let roles = BUILTIN_ROLES
            .iter()
            .map(|spec| {
                let definition = RoleDefinition {
                    selectors: spec.selectors.iter().map(|s| s.to_string()).collect(),
                    child_roles: spec.child_roles.iter().map(|s| s.to_string()).collect(),
                    name_from_contents: spec.name_from_contents,
                    defaults: spec
                        .defaults
                        .iter()
                        .map(|(attr, value)| (attr.to_string(), DefaultValue::from(*value)))
                        .collect(),
                };
                (spec.name.to_string(), definition)
            })
            .collect();

        Self {
            version: BUILTIN_VERSION.to_string(),
            roles,
        }
    }

    /// Parse a table from JSON
    pub fn from_json(json: &str) -> Result<Self, AriaError> {
        let table: Self = serde_json::from_str(json)?;
        tracing::debug!("Loaded role table {} ({} roles)", table.version, table.roles.len());
        Ok(table)
    }

    /// Read a JSON table from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AriaError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    /// Serialize as pretty JSON
    pub fn to_json(&self) -> Result<String, AriaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Get a role definition
    pub fn get(&self, role: &str) -> Option<&RoleDefinition> {
        self.roles.get(role)
    }

    /// Number of defined roles
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Build the child-role graph. The table itself is left untouched.
    pub fn graph(&self) -> RoleGraph {
        self.roles
            .iter()
            .map(|(name, def)| (name.clone(), def.child_roles.clone()))
            .collect()
    }
}

impl From<StaticDefault> for DefaultValue {
    fn from(value: StaticDefault) -> Self {
        match value {
            StaticDefault::Bool(b) => Self::Bool(b),
            StaticDefault::Int(n) => Self::Int(n),
            StaticDefault::Token(t) => Self::Token(t.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table() {
        let table = RoleTable::builtin();
        assert_eq!(table.version, BUILTIN_VERSION);
        assert_eq!(table.len(), BUILTIN_ROLES.len());

        let slider = table.get("slider").unwrap();
        assert_eq!(slider.selectors, vec![r#"input[type="range"]"#.to_string()]);
        assert_eq!(slider.defaults.get("valuenow"), Some(&DefaultValue::Int(50)));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "version": "test",
            "roles": {
                "range": { "childRoles": ["slider"] },
                "slider": {
                    "selectors": ["input[type=\"range\"]"],
                    "nameFromContents": false,
                    "defaults": { "valuemin": 0, "orientation": "horizontal", "atomic": true }
                }
            }
        }"#;
        let table = RoleTable::from_json(json).unwrap();
        assert_eq!(table.len(), 2);
        let slider = table.get("slider").unwrap();
        assert_eq!(slider.defaults.get("valuemin"), Some(&DefaultValue::Int(0)));
        assert_eq!(slider.defaults.get("atomic"), Some(&DefaultValue::Bool(true)));
        assert_eq!(
            slider.defaults.get("orientation"),
            Some(&DefaultValue::Token("horizontal".into()))
        );
        assert_eq!(table.graph().children("range"), &["slider".to_string()]);
    }

    #[test]
    fn test_from_json_malformed() {
        let err = RoleTable::from_json("{ \"roles\": [] }").unwrap_err();
        assert!(matches!(err, AriaError::TableFormat(_)));
    }

    #[test]
    fn test_json_roundtrip_builtin() {
        let table = RoleTable::builtin();
        let json = table.to_json().unwrap();
        assert_eq!(RoleTable::from_json(&json).unwrap(), table);
    }
}
