//! Role Hierarchy
//!
//! Transitive sub-role resolution over the child-role graph.
//!
//! A role's sub-role set is the role itself followed by every role reachable
//! through child-role edges, each listed once in first-discovery order.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

/// Pairs of roles that are each other's synonym.
///
/// Applied after the generic pass, so the pair resolves the same way no
/// matter what the child-role table says about either name.
pub static ROLE_ALIASES: &[(&str, &str)] = &[("none", "presentation")];

/// Parent role → directly specialized child roles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleGraph {
    edges: BTreeMap<String, Vec<String>>,
}

impl RoleGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a role with its direct children, replacing any earlier entry
    pub fn insert(&mut self, role: impl Into<String>, children: Vec<String>) {
        self.edges.insert(role.into(), children);
    }

    /// Direct children; empty for roles without an entry
    pub fn children(&self, role: &str) -> &[String] {
        self.edges.get(role).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the role is a key of the graph
    pub fn contains(&self, role: &str) -> bool {
        self.edges.contains_key(role)
    }

    /// Defined roles in name order
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.edges.keys().map(String::as_str)
    }

    /// (parent, children) pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.edges.iter().map(|(role, children)| (role.as_str(), children.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<R: Into<String>> FromIterator<(R, Vec<String>)> for RoleGraph {
    fn from_iter<I: IntoIterator<Item = (R, Vec<String>)>>(iter: I) -> Self {
        Self {
            edges: iter.into_iter().map(|(role, children)| (role.into(), children)).collect(),
        }
    }
}

/// Ordered, duplicate-free sub-roles of a role; the role itself comes first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SubRoleSet(Vec<String>);

impl SubRoleSet {
    /// The role this set was resolved for
    pub fn role(&self) -> &str {
        &self.0[0]
    }

    pub fn contains(&self, role: &str) -> bool {
        self.0.iter().any(|r| r == role)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a set holds at least its own role
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn alias(role: &str, other: &str) -> Self {
        Self(vec![role.to_string(), other.to_string()])
    }
}

impl<'a> IntoIterator for &'a SubRoleSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl PartialEq<[&str]> for SubRoleSet {
    fn eq(&self, other: &[&str]) -> bool {
        self.0.len() == other.len() && self.0.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<const N: usize> PartialEq<[&str; N]> for SubRoleSet {
    fn eq(&self, other: &[&str; N]) -> bool {
        *self == other[..]
    }
}

/// Resolve the sub-roles of `role`.
///
/// Depth-first, children in declared order. The visited set is per call, so
/// every role is appended at most once and cyclic tables terminate.
pub fn resolve(graph: &RoleGraph, role: &str) -> SubRoleSet {
    let mut order = vec![role.to_string()];
    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(role);

    let mut stack = vec![graph.children(role).iter()];
    while let Some(children) = stack.last_mut() {
        match children.next() {
            Some(child) => {
                if visited.insert(child.as_str()) {
                    order.push(child.clone());
                    stack.push(graph.children(child).iter());
                }
            }
            None => {
                stack.pop();
            }
        }
    }

    SubRoleSet(order)
}

/// Sub-role sets for every role of a graph, computed once
#[derive(Debug, Clone)]
pub struct RoleHierarchy {
    graph: RoleGraph,
    resolved: BTreeMap<String, SubRoleSet>,
}

impl RoleHierarchy {
    /// Run the full-graph pass, then apply [`ROLE_ALIASES`]
    pub fn build(graph: RoleGraph) -> Self {
        let mut resolved: BTreeMap<String, SubRoleSet> = graph
            .roles()
            .map(|role| (role.to_string(), resolve(&graph, role)))
            .collect();

        for (a, b) in ROLE_ALIASES {
            resolved.insert(a.to_string(), SubRoleSet::alias(a, b));
            resolved.insert(b.to_string(), SubRoleSet::alias(b, a));
        }

        tracing::debug!(
            "Resolved sub-roles for {} roles ({} aliases)",
            resolved.len(),
            ROLE_ALIASES.len() * 2
        );

        Self { graph, resolved }
    }

    /// Cached sub-roles, if the role was part of the pass
    pub fn get(&self, role: &str) -> Option<&SubRoleSet> {
        self.resolved.get(role)
    }

    /// Sub-roles of any role. Roles outside the pass are resolved on demand.
    pub fn sub_roles(&self, role: &str) -> SubRoleSet {
        match self.resolved.get(role) {
            Some(set) => set.clone(),
            None => resolve(&self.graph, role),
        }
    }

    /// Whether `sub_role` specializes (or is) `role`
    pub fn is_sub_role(&self, role: &str, sub_role: &str) -> bool {
        match self.resolved.get(role) {
            Some(set) => set.contains(sub_role),
            None => role == sub_role,
        }
    }

    /// The graph the hierarchy was built from
    pub fn graph(&self) -> &RoleGraph {
        &self.graph
    }

    /// All cached sets in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SubRoleSet)> {
        self.resolved.iter().map(|(role, set)| (role.as_str(), set))
    }
}

/// Whether `role` is one half of an alias pair
pub fn alias_of(role: &str) -> Option<&'static str> {
    ROLE_ALIASES.iter().find_map(|(a, b)| {
        if *a == role {
            Some(*b)
        } else if *b == role {
            Some(*a)
        } else {
            None
        }
    })
}
