//! fOS ARIA
//!
//! ARIA role semantics for the fOS browser engine.
//!
//! Features:
//! - Built-in WAI-ARIA role table (selectors, child roles, defaults)
//! - Sub-role resolution over the role taxonomy
//! - Role selectors for document queries
//! - Table validation
//! - Accessible names, effective states and the landmark outline

pub mod attributes;
pub mod config;
pub mod element;
pub mod hierarchy;
pub mod kb;
pub mod names;
pub mod outline;
pub mod roles;
pub mod selector;
pub mod states;
pub mod table;
pub mod validate;

pub use attributes::{AttributeType, AttributeValue, DefaultValue, Tristate};
pub use config::{Config, ValidationMode};
pub use element::{element_has_role, matched_role, DocumentView, ElementView};
pub use hierarchy::{resolve, RoleGraph, RoleHierarchy, SubRoleSet};
pub use kb::KnowledgeBase;
pub use names::accessible_name;
pub use outline::{KeyEvent, LandmarkOutline, OutlineEntry, Shortcut};
pub use states::attribute_value;
pub use table::{RoleDefinition, RoleTable};
pub use validate::{validate, Severity, ValidationIssue, ValidationReport};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// ARIA knowledge base error
#[derive(Debug, thiserror::Error)]
pub enum AriaError {
    #[error("Malformed role table: {0}")]
    TableFormat(#[from] serde_json::Error),

    #[error("Role table rejected: {0}")]
    InvalidTable(ValidationReport),

    #[error("Invalid shortcut: {0}")]
    InvalidShortcut(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidConfig { key: String, value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
