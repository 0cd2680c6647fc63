// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railgram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Name-indexed rule table.
//!
//! Rules live in one arena in registration order; an index maps names to slots. Trees refer to
//! other rules by name only, so the registry never needs to know the rule graph.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use smol_str::SmolStr;

use super::expr::{Expr, InvalidGrammarError};
use super::ids::{IdError, RuleName};
use super::xref::{RefStatus, RuleXRef};

/// Builds a fresh tree on every call.
pub type Producer = Arc<dyn Fn() -> Expr + Send + Sync>;

#[derive(Clone)]
pub struct RuleEntry {
    name: RuleName,
    producer: Producer,
}

impl RuleEntry {
    pub fn name(&self) -> &RuleName {
        &self.name
    }

    pub fn produce(&self) -> Expr {
        (self.producer)()
    }
}

impl fmt::Debug for RuleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleEntry")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<RuleEntry>,
    index: HashMap<RuleName, usize>,
    diagnostics: Vec<DuplicateRuleWarning>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-time population from static definitions.
    ///
    /// Duplicate names are kept (last write wins) and reported through [`Self::diagnostics`].
    pub fn init<N, F>(definitions: impl IntoIterator<Item = (N, F)>) -> Result<Self, IdError>
    where
        N: AsRef<str>,
        F: Fn() -> Expr + Send + Sync + 'static,
    {
        let mut registry = Self::new();
        for (name, producer) in definitions {
            let name = RuleName::new(name)?;
            registry.register(name, producer);
        }
        tracing::debug!(
            rules = registry.len(),
            duplicates = registry.diagnostics.len(),
            "rule registry initialized"
        );
        Ok(registry)
    }

    /// Inserts `name`, or replaces its producer in place if it is already registered.
    ///
    /// A replaced rule keeps its original position in [`Self::names`].
    pub fn register<F>(&mut self, name: RuleName, producer: F) -> Option<DuplicateRuleWarning>
    where
        F: Fn() -> Expr + Send + Sync + 'static,
    {
        let producer: Producer = Arc::new(producer);
        match self.index.get(&name) {
            Some(&slot) => {
                self.entries[slot].producer = producer;
                let warning = DuplicateRuleWarning { name };
                tracing::warn!(
                    rule = %warning.name,
                    "duplicate rule registration; last definition wins"
                );
                self.diagnostics.push(warning.clone());
                Some(warning)
            }
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push(RuleEntry { name, producer });
                None
            }
        }
    }

    pub fn lookup(&self, name: &str) -> Result<Expr, UnknownRuleError> {
        self.get(name)
            .map(RuleEntry::produce)
            .ok_or_else(|| UnknownRuleError::new(name))
    }

    pub fn get(&self, name: &str) -> Option<&RuleEntry> {
        self.index.get(name).map(|&slot| &self.entries[slot])
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &RuleName> + '_ {
        self.entries.iter().map(|entry| &entry.name)
    }

    pub fn entries(&self) -> &[RuleEntry] {
        &self.entries
    }

    pub fn has(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn diagnostics(&self) -> &[DuplicateRuleWarning] {
        &self.diagnostics
    }

    /// Every distinct `rule -> reference` edge, in registration order then tree order.
    pub fn check_references(&self) -> Vec<RuleXRef> {
        let mut out = Vec::new();
        for entry in &self.entries {
            let tree = entry.produce();
            let mut seen = HashSet::new();
            for target in tree.references() {
                if !seen.insert(target) {
                    continue;
                }
                let status = RefStatus::from_resolved(self.has(target));
                out.push(RuleXRef::new(entry.name.clone(), target, status));
            }
        }
        out
    }

    pub fn dangling_references(&self) -> Vec<RuleXRef> {
        self.check_references()
            .into_iter()
            .filter(RuleXRef::is_dangling)
            .collect()
    }

    /// Rules whose trees violate a structural invariant.
    pub fn validate_all(&self) -> Vec<(RuleName, InvalidGrammarError)> {
        self.entries
            .iter()
            .filter_map(|entry| match entry.produce().validate() {
                Ok(()) => None,
                Err(err) => Some((entry.name.clone(), err)),
            })
            .collect()
    }
}

/// Raised when a name is registered twice. Observability only; the later producer wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateRuleWarning {
    name: RuleName,
}

impl DuplicateRuleWarning {
    pub fn name(&self) -> &RuleName {
        &self.name
    }
}

impl fmt::Display for DuplicateRuleWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rule `{}` registered more than once", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRuleError {
    name: SmolStr,
}

impl UnknownRuleError {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for UnknownRuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no definition for `{}`", self.name)
    }
}

impl std::error::Error for UnknownRuleError {}
