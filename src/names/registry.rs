//! Identifier derivation, collision handling, and alias resolution.

use std::collections::{BTreeMap, HashMap};

use slotmap::SecondaryMap;

use crate::control::ControlId;
use crate::error::{GridError, Result};

/// Appended to a candidate identifier until it is unique.
const COLLISION_SUFFIX: char = '_';

/// Reduce display text to an identifier candidate.
///
/// Keeps ASCII letters, digits, and underscores; drops everything else,
/// including whitespace. `"Submit Now!"` becomes `"SubmitNow"`.
pub fn normalize_name(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Name table of a grid: identifiers derived from display text, plus
/// caller-chosen aliases that point at identifiers.
#[derive(Debug, Default)]
pub struct NameRegistry {
    identifiers: HashMap<String, ControlId>,
    by_control: SecondaryMap<ControlId, String>,
    aliases: HashMap<String, String>,
}

impl NameRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive and store a unique identifier for `control` from `text`.
    ///
    /// Registering the same control again returns its existing identifier.
    pub fn register(&mut self, control: ControlId, text: &str) -> String {
        if let Some(existing) = self.by_control.get(control) {
            return existing.clone();
        }
        let mut name = normalize_name(text);
        while name.is_empty() || self.identifiers.contains_key(&name) {
            name.push(COLLISION_SUFFIX);
        }
        tracing::trace!(target: "guigrid::names", identifier = %name, "registered control");
        self.identifiers.insert(name.clone(), control);
        self.by_control.insert(control, name.clone());
        name
    }

    /// The identifier assigned to `control`, if it has been registered.
    pub fn identifier_of(&self, control: ControlId) -> Option<&str> {
        self.by_control.get(control).map(String::as_str)
    }

    /// Point `alias` at the identifier `target`.
    ///
    /// Reassigning an existing alias replaces its target; the previous target
    /// is returned.
    pub fn alias(&mut self, alias: impl Into<String>, target: &str) -> Result<Option<String>> {
        let alias = alias.into();
        if !self.identifiers.contains_key(target) {
            return Err(GridError::Lookup {
                alias,
                target: target.to_owned(),
            });
        }
        let previous = self.aliases.insert(alias.clone(), target.to_owned());
        if let Some(prev) = previous.as_deref().filter(|p| *p != target) {
            tracing::debug!(target: "guigrid::names", %alias, from = %prev, to = %target, "alias reassigned");
        }
        Ok(previous)
    }

    /// Look a control up by alias, then by identifier.
    pub fn resolve(&self, name: &str) -> Result<ControlId> {
        let identifier = self.aliases.get(name).map_or(name, String::as_str);
        self.identifiers
            .get(identifier)
            .copied()
            .ok_or_else(|| GridError::NotFound(name.to_owned()))
    }

    /// All identifiers, sorted by name.
    pub fn identifiers(&self) -> BTreeMap<&str, ControlId> {
        self.identifiers
            .iter()
            .map(|(name, &id)| (name.as_str(), id))
            .collect()
    }

    /// All aliases and the identifiers they point at, sorted by alias.
    pub fn aliases(&self) -> BTreeMap<&str, &str> {
        self.aliases
            .iter()
            .map(|(alias, name)| (alias.as_str(), name.as_str()))
            .collect()
    }

    /// Every name that resolves to a control: identifiers first, then
    /// aliases. An alias spelled like an identifier shadows it.
    pub fn all_names(&self) -> BTreeMap<&str, ControlId> {
        let mut names = self.identifiers();
        for (alias, target) in &self.aliases {
            if let Some(&id) = self.identifiers.get(target) {
                names.insert(alias.as_str(), id);
            }
        }
        names
    }

    /// Number of registered identifiers.
    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    /// Whether no control has been registered.
    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }
}
