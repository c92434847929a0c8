//! Role Selectors
//!
//! Builds document-query selectors matching every element with a role.

use crate::hierarchy::RoleHierarchy;
use crate::table::RoleTable;

/// Selector for elements carrying exactly `role`, explicitly or natively.
/// Native selectors only apply to elements without a `role` attribute.
pub fn single_role_selector(table: &RoleTable, role: &str) -> String {
    let mut parts = vec![format!(r#"[role="{}"]"#, role)];
    if let Some(def) = table.get(role) {
        parts.extend(def.selectors.iter().map(|sel| format!("{}:not([role])", sel)));
    }
    parts.join(",")
}

/// Selector for elements whose role is `role` or any of its sub-roles
pub fn role_selector(table: &RoleTable, hierarchy: &RoleHierarchy, role: &str) -> String {
    hierarchy
        .sub_roles(role)
        .iter()
        .map(|sub_role| single_role_selector(table, sub_role))
        .collect::<Vec<_>>()
        .join(",")
}
