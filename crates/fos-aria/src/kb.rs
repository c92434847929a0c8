//! Knowledge Base
//!
//! Role table plus its resolved hierarchy, built once.

use std::sync::OnceLock;

use crate::attributes::{attribute_type, AttributeType, AttributeValue};
use crate::config::{Config, ValidationMode};
use crate::hierarchy::{RoleHierarchy, SubRoleSet};
use crate::selector::role_selector;
use crate::table::{RoleDefinition, RoleTable};
use crate::validate::{validate, Severity, ValidationReport};
use crate::AriaError;

/// Abstract role whose sub-roles are navigation landmarks
pub const LANDMARK_ROLE: &str = "landmark";

/// Read-only ARIA role semantics
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    table: RoleTable,
    hierarchy: RoleHierarchy,
}

impl KnowledgeBase {
    /// Build without validating
    pub fn new(table: RoleTable) -> Self {
        let hierarchy = RoleHierarchy::build(table.graph());
        Self { table, hierarchy }
    }

    /// Validate according to `mode`, then build
    pub fn load(table: RoleTable, mode: ValidationMode) -> Result<Self, AriaError> {
        if mode != ValidationMode::Off {
            let report = validate(&table);
            log_report(&report);
            if mode == ValidationMode::Strict && report.has_errors() {
                return Err(AriaError::InvalidTable(report));
            }
        }
        Ok(Self::new(table))
    }

    /// Load the configured table, or the built-in one
    pub fn from_config(config: &Config) -> Result<Self, AriaError> {
        let table = match &config.table_path {
            Some(path) => RoleTable::from_path(path)?,
            None => RoleTable::builtin(),
        };
        Self::load(table, config.validation)
    }

    /// Process-wide knowledge base over the built-in table
    pub fn builtin() -> &'static KnowledgeBase {
        static BUILTIN: OnceLock<KnowledgeBase> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let kb = Self::new(RoleTable::builtin());
            tracing::debug!("Built-in ARIA knowledge base ready ({} roles)", kb.table.len());
            kb
        })
    }

    pub fn table(&self) -> &RoleTable {
        &self.table
    }

    pub fn hierarchy(&self) -> &RoleHierarchy {
        &self.hierarchy
    }

    /// Definition of a role, if the table has one
    pub fn role(&self, role: &str) -> Option<&RoleDefinition> {
        self.table.get(role)
    }

    /// The role and all roles specializing it
    pub fn sub_roles(&self, role: &str) -> SubRoleSet {
        self.hierarchy.sub_roles(role)
    }

    pub fn is_sub_role(&self, role: &str, sub_role: &str) -> bool {
        self.hierarchy.is_sub_role(role, sub_role)
    }

    /// Selector matching every element with `role` or one of its sub-roles
    pub fn selector(&self, role: &str) -> String {
        role_selector(&self.table, &self.hierarchy, role)
    }

    /// Landmark roles, starting with the abstract `landmark` role
    pub fn landmark_roles(&self) -> SubRoleSet {
        self.sub_roles(LANDMARK_ROLE)
    }

    pub fn attribute_type(&self, attribute: &str) -> Option<AttributeType> {
        attribute_type(attribute)
    }

    /// Implicit value of `attribute` for `role`
    pub fn default_value(&self, role: &str, attribute: &str) -> Option<AttributeValue> {
        let attribute = attribute.strip_prefix("aria-").unwrap_or(attribute);
        let value = self.role(role)?.defaults.get(attribute)?;
        attribute_type(attribute)?.from_default(value)
    }

    /// Whether elements with `role` may take their name from their contents
    pub fn name_from_contents(&self, role: &str) -> bool {
        self.role(role).is_some_and(|def| def.name_from_contents)
    }

    /// Validate the loaded table
    pub fn validate(&self) -> ValidationReport {
        validate(&self.table)
    }
}

fn log_report(report: &ValidationReport) {
    for issue in &report.issues {
        match issue.severity() {
            Severity::Error | Severity::Warning => {
                tracing::warn!("Role table {}: {}", issue.severity(), issue)
            }
            Severity::Notice => tracing::debug!("Role table notice: {}", issue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_shared() {
        let a = KnowledgeBase::builtin();
        let b = KnowledgeBase::builtin();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_range() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(
            kb.sub_roles("range"),
            ["range", "progressbar", "scrollbar", "slider", "spinbutton"]
        );
    }

    #[test]
    fn test_default_value() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.default_value("heading", "aria-level"), Some(AttributeValue::Int(2)));
        assert_eq!(kb.default_value("slider", "valuemax"), Some(AttributeValue::Number(100.0)));
        assert_eq!(kb.default_value("button", "level"), None);
    }

    #[test]
    fn test_strict_rejects_errors() {
        let mut table = RoleTable::builtin();
        table
            .roles
            .get_mut("range")
            .unwrap()
            .child_roles
            .retain(|r| r != "scrollbar");
        assert!(KnowledgeBase::load(table.clone(), ValidationMode::Warn).is_ok());
        let err = KnowledgeBase::load(table, ValidationMode::Strict).unwrap_err();
        assert!(matches!(err, AriaError::InvalidTable(_)));
    }
}
