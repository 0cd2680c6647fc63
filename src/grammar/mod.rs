// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railgram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The Python PEG grammar, transcribed for diagrams.
//!
//! Left-recursive operator chains are flattened into `operand (op operand)*` and PEG gathers
//! (`','.item+`) become separated repetitions. Lookaheads and cuts only survive as notes.

mod dsl;
mod expressions;
mod literals;
mod patterns;
mod sections;
mod statements;
mod targets;

use crate::model::{Expr, IdError, Registry, SectionError, SectionIndex};

/// Static rule definitions in registration order.
#[derive(Debug, Default)]
pub struct RuleDefs {
    rules: Vec<(&'static str, fn() -> Expr)>,
}

impl RuleDefs {
    pub(crate) fn rule(&mut self, name: &'static str, producer: fn() -> Expr) {
        self.rules.push((name, producer));
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn into_rules(self) -> Vec<(&'static str, fn() -> Expr)> {
        self.rules
    }
}

pub fn python_rules() -> RuleDefs {
    let mut defs = RuleDefs::default();
    statements::define(&mut defs);
    patterns::define(&mut defs);
    expressions::define(&mut defs);
    literals::define(&mut defs);
    targets::define(&mut defs);
    defs
}

pub fn python_registry() -> Result<Registry, IdError> {
    Registry::init(python_rules().into_rules())
}

pub fn python_sections() -> Result<SectionIndex, SectionError> {
    sections::build()
}

#[cfg(test)]
mod tests {
    use super::{python_registry, python_rules, python_sections};

    #[test]
    fn grammar_registers_every_rule_once() {
        let registry = python_registry().expect("registry");
        assert_eq!(registry.len(), python_rules().len());
        assert!(registry.diagnostics().is_empty());
    }

    #[test]
    fn grammar_trees_are_well_formed() {
        let registry = python_registry().expect("registry");
        assert_eq!(registry.validate_all(), Vec::new());
        assert_eq!(registry.dangling_references(), Vec::new());
    }

    #[test]
    fn sections_cover_the_grammar() {
        let registry = python_registry().expect("registry");
        let sections = python_sections().expect("sections");
        assert_eq!(sections.len(), 21);
        let report = sections.check_against(&registry);
        assert!(report.is_clean(), "{report:?}");
    }
}
