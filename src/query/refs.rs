// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railgram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Navigation along the rule graph, one hop at a time.

use smol_str::SmolStr;

use crate::model::{Registry, RuleName, UnknownRuleError};

/// Distinct rules referenced by `name`, in the order they first appear.
pub fn references_of(registry: &Registry, name: &str) -> Result<Vec<SmolStr>, UnknownRuleError> {
    let tree = registry.lookup(name)?;
    let mut out: Vec<SmolStr> = Vec::new();
    for target in tree.references() {
        if !out.iter().any(|seen| seen == target) {
            out.push(SmolStr::new(target));
        }
    }
    Ok(out)
}

/// Rules whose definitions reference `name`, in registration order.
///
/// Works for unregistered names too, which is how dangling references are traced back.
pub fn used_by(registry: &Registry, name: &str) -> Vec<RuleName> {
    registry
        .entries()
        .iter()
        .filter(|entry| entry.produce().references().contains(&name))
        .map(|entry| entry.name().clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{references_of, used_by};
    use crate::model::{Expr, Registry, UnknownRuleError};

    fn registry() -> Registry {
        Registry::init([
            (
                "expression",
                (|| {
                    Expr::sequence(vec![
                        Expr::non_terminal("disjunction"),
                        Expr::optional(Expr::sequence(vec![
                            Expr::keyword("if"),
                            Expr::non_terminal("disjunction"),
                            Expr::keyword("else"),
                            Expr::non_terminal("expression"),
                        ])),
                    ])
                }) as fn() -> Expr,
            ),
            ("disjunction", || Expr::non_terminal("conjunction")),
            ("conjunction", || Expr::terminal("NAME")),
        ])
        .expect("registry")
    }

    #[test]
    fn references_are_distinct_and_ordered() {
        let refs = references_of(&registry(), "expression").expect("refs");
        assert_eq!(refs, ["disjunction", "expression"]);
        assert_eq!(
            references_of(&registry(), "atom"),
            Err(UnknownRuleError::new("atom"))
        );
    }

    #[test]
    fn used_by_finds_referencing_rules_including_self() {
        let registry = registry();
        assert_eq!(used_by(&registry, "expression"), ["expression"]);
        assert_eq!(used_by(&registry, "conjunction"), ["disjunction"]);
        assert!(used_by(&registry, "NAME").is_empty());
        assert!(used_by(&registry, "missing").is_empty());
    }
}
