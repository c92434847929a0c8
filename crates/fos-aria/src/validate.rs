//! Table Validation
//!
//! Consistency checks for hand-maintained role tables.

use std::collections::HashSet;
use std::fmt;

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;

use crate::attributes::attribute_type;
use crate::hierarchy::{alias_of, resolve, RoleGraph};
use crate::table::RoleTable;

/// Descendants the WAI-ARIA taxonomy requires for some abstract and base roles.
/// Only checked when the parent role is defined by the table.
pub static EXPECTED_DESCENDANTS: &[(&str, &[&str])] = &[
    ("roletype", &["structure", "widget", "window"]),
    ("structure", &["document", "section", "sectionhead", "separator"]),
    ("widget", &["command", "composite", "input", "range"]),
    ("window", &["dialog", "alertdialog"]),
    ("command", &["button", "link", "menuitem"]),
    ("composite", &["grid", "select", "spinbutton", "tablist"]),
    ("input", &["checkbox", "option", "radio", "slider", "spinbutton", "textbox"]),
    ("range", &["progressbar", "scrollbar", "slider", "spinbutton"]),
    ("select", &["combobox", "listbox", "menu", "radiogroup", "tree"]),
    ("section", &["alert", "landmark", "list", "listitem", "status", "table"]),
    (
        "landmark",
        &["banner", "complementary", "contentinfo", "form", "main", "navigation", "region", "search"],
    ),
    ("checkbox", &["menuitemcheckbox", "switch"]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Notice,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Notice => "notice",
            Self::Warning => "warning",
            Self::Error => "error",
        })
    }
}

/// A single finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    MalformedName { role: String },
    Cycle { path: Vec<String> },
    UnknownAttribute { role: String, attribute: String },
    InvalidDefault { role: String, attribute: String, value: String },
    InvalidSelector { role: String, selector: String, message: String },
    MissingDescendant { role: String, expected: String },
    DuplicateChild { role: String, child: String },
    AliasWithChildren { role: String },
    UndefinedChild { role: String, child: String },
}

impl ValidationIssue {
    pub fn severity(&self) -> Severity {
        match self {
            Self::UndefinedChild { .. } => Severity::Notice,
            Self::DuplicateChild { .. } | Self::AliasWithChildren { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedName { role } => write!(f, "malformed role name {:?}", role),
            Self::Cycle { path } => write!(f, "child-role cycle {}", path.join(" -> ")),
            Self::UnknownAttribute { role, attribute } => {
                write!(f, "{}: default for unknown attribute aria-{}", role, attribute)
            }
            Self::InvalidDefault { role, attribute, value } => {
                write!(f, "{}: {:?} is not a valid aria-{} value", role, value, attribute)
            }
            Self::InvalidSelector { role, selector, message } => {
                write!(f, "{}: selector {:?} does not parse: {}", role, selector, message)
            }
            Self::MissingDescendant { role, expected } => {
                write!(f, "{}: expected sub-role {} is not reachable", role, expected)
            }
            Self::DuplicateChild { role, child } => {
                write!(f, "{}: child role {} listed more than once", role, child)
            }
            Self::AliasWithChildren { role } => {
                write!(f, "{}: child roles of an aliased role are ignored", role)
            }
            Self::UndefinedChild { role, child } => {
                write!(f, "{}: child role {} has no definition", role, child)
            }
        }
    }
}

/// All findings for one table
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.at(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.at(Severity::Warning)
    }

    pub fn notices(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.at(Severity::Notice)
    }

    fn at(&self, severity: Severity) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(move |issue| issue.severity() == severity)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// No errors and no warnings
    pub fn is_clean(&self) -> bool {
        self.issues.iter().all(|issue| issue.severity() == Severity::Notice)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} errors, {} warnings, {} notices",
            self.errors().count(),
            self.warnings().count(),
            self.notices().count()
        )
    }
}

/// Run every check against a table
pub fn validate(table: &RoleTable) -> ValidationReport {
    let mut issues = Vec::new();
    let graph = table.graph();

    check_names(table, &mut issues);
    check_children(table, &mut issues);
    for path in find_cycles(&graph) {
        issues.push(ValidationIssue::Cycle { path });
    }
    check_defaults(table, &mut issues);
    check_selectors(table, &mut issues);
    check_taxonomy(table, &graph, &mut issues);

    let report = ValidationReport { issues };
    tracing::debug!("Validated role table {}: {}", table.version, report);
    report
}

/// Lowercase ASCII letters, digits and hyphens, starting with a letter
pub fn is_valid_role_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn check_names(table: &RoleTable, issues: &mut Vec<ValidationIssue>) {
    let mut reported = HashSet::new();
    let referenced = table
        .roles
        .iter()
        .flat_map(|(name, def)| std::iter::once(name).chain(def.child_roles.iter()));
    for name in referenced {
        if !is_valid_role_name(name) && reported.insert(name) {
            issues.push(ValidationIssue::MalformedName { role: name.clone() });
        }
    }
}

fn check_children(table: &RoleTable, issues: &mut Vec<ValidationIssue>) {
    let mut undefined = HashSet::new();
    for (role, def) in &table.roles {
        if alias_of(role).is_some() && !def.child_roles.is_empty() {
            issues.push(ValidationIssue::AliasWithChildren { role: role.clone() });
        }

        let mut seen = HashSet::new();
        for child in &def.child_roles {
            if !seen.insert(child) {
                issues.push(ValidationIssue::DuplicateChild {
                    role: role.clone(),
                    child: child.clone(),
                });
            }
            if !table.roles.contains_key(child) && undefined.insert(child) {
                issues.push(ValidationIssue::UndefinedChild {
                    role: role.clone(),
                    child: child.clone(),
                });
            }
        }
    }
}

/// Every elementary cycle, each rotated to start at its smallest name and
/// closed by repeating that name.
pub fn find_cycles(graph: &RoleGraph) -> Vec<Vec<String>> {
    let mut digraph: DiGraphMap<&str, ()> = DiGraphMap::new();
    for (role, children) in graph.iter() {
        digraph.add_node(role);
        for child in children {
            digraph.add_edge(role, child.as_str(), ());
        }
    }

    let mut found = Vec::new();
    for component in tarjan_scc(&digraph) {
        if component.len() == 1 && !digraph.contains_edge(component[0], component[0]) {
            continue;
        }
        let mut members = component;
        members.sort_unstable();
        for (i, start) in members.iter().enumerate() {
            // Cycles through earlier members were already reported from them
            let allowed: HashSet<&str> = members[i..].iter().copied().collect();
            let mut path = vec![*start];
            cycles_from(&digraph, start, &allowed, &mut path, &mut found);
        }
    }
    found.sort();
    found
}

fn cycles_from<'g>(
    digraph: &DiGraphMap<&'g str, ()>,
    start: &str,
    allowed: &HashSet<&'g str>,
    path: &mut Vec<&'g str>,
    found: &mut Vec<Vec<String>>,
) {
    let Some(&last) = path.last() else {
        return;
    };
    for next in digraph.neighbors(last) {
        if next == start {
            let mut cycle: Vec<String> = path.iter().map(|r| r.to_string()).collect();
            cycle.push(start.to_string());
            found.push(cycle);
        } else if allowed.contains(next) && !path.contains(&next) {
            path.push(next);
            cycles_from(digraph, start, allowed, path, found);
            path.pop();
        }
    }
}

fn check_defaults(table: &RoleTable, issues: &mut Vec<ValidationIssue>) {
    for (role, def) in &table.roles {
        for (attribute, value) in &def.defaults {
            match attribute_type(attribute) {
                None => issues.push(ValidationIssue::UnknownAttribute {
                    role: role.clone(),
                    attribute: attribute.clone(),
                }),
                Some(ty) if !ty.accepts(value) => issues.push(ValidationIssue::InvalidDefault {
                    role: role.clone(),
                    attribute: attribute.clone(),
                    value: value.as_markup(),
                }),
                Some(_) => {}
            }
        }
    }
}

/// Parse a selector list by wrapping it in an empty rule
pub fn check_selector(selector: &str) -> Result<(), String> {
    use lightningcss::stylesheet::{ParserOptions, StyleSheet};

    let css = format!("{} {{}}", selector);
    StyleSheet::parse(&css, ParserOptions::default())
        .map(|_| ())
        .map_err(|e| e.to_string())
}

fn check_selectors(table: &RoleTable, issues: &mut Vec<ValidationIssue>) {
    for (role, def) in &table.roles {
        for selector in &def.selectors {
            if let Err(message) = check_selector(selector) {
                issues.push(ValidationIssue::InvalidSelector {
                    role: role.clone(),
                    selector: selector.clone(),
                    message,
                });
            }
        }
    }
}

fn check_taxonomy(table: &RoleTable, graph: &RoleGraph, issues: &mut Vec<ValidationIssue>) {
    for (role, expected) in EXPECTED_DESCENDANTS {
        if !table.roles.contains_key(*role) {
            continue;
        }
        let sub_roles = resolve(graph, role);
        for sub_role in expected.iter().filter(|r| !sub_roles.contains(r)) {
            issues.push(ValidationIssue::MissingDescendant {
                role: role.to_string(),
                expected: sub_role.to_string(),
            });
        }
    }
}
