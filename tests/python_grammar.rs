// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railgram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use railgram::compile::{compile_all, compile_rule, DiagramNode};
use railgram::grammar::{python_registry, python_sections};
use railgram::model::{Expr, Registry, RuleName, SectionIndex};
use railgram::query::{filter, filter_sections, used_by};

fn registry() -> Registry {
    python_registry().expect("python registry")
}

#[test]
fn every_reference_in_the_python_grammar_resolves() {
    let registry = registry();
    let dangling: Vec<String> = registry
        .dangling_references()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert!(dangling.is_empty(), "dangling references: {dangling:?}");
    assert!(registry.diagnostics().is_empty());
}

#[test]
fn every_section_rule_is_registered_and_every_rule_is_sectioned() {
    let registry = registry();
    let sections = python_sections().expect("python sections");
    let report = sections.check_against(&registry);
    assert!(report.is_clean(), "{report:?}");
}

#[test]
fn every_rule_compiles_without_placeholders() {
    let registry = registry();
    let diagrams = compile_all(&registry);
    assert_eq!(diagrams.len(), registry.len());
    for diagram in &diagrams {
        let name = diagram.rule().map(RuleName::as_str).unwrap_or("?");
        assert!(diagram.placeholders().is_empty(), "{name} has placeholders");
    }
}

#[test]
fn recursive_rules_stay_finite() {
    let registry = registry();
    // `expression` names itself in its conditional branch; the diagram only labels it.
    let diagram = compile_rule(&registry, "expression");
    let labels = diagram.non_terminal_labels();
    assert!(labels.contains(&"expression"));
    assert!(labels.contains(&"disjunction"));
    assert!(!used_by(&registry, "expression").is_empty());
}

#[test]
fn lookups_build_fresh_equal_trees() {
    let registry = registry();
    for name in registry.names() {
        let first = registry.lookup(name.as_str()).expect("lookup");
        let second = registry.lookup(name.as_str()).expect("lookup");
        assert_eq!(first, second, "{name}");
    }
}

#[test]
fn pass_stmt_compiles_to_one_terminal_box() {
    let mut registry = Registry::new();
    registry.register(RuleName::new("pass_stmt").expect("name"), || Expr::terminal("pass"));

    let tree = registry.lookup("pass_stmt").expect("lookup");
    assert_eq!(tree, Expr::terminal("pass"));

    let diagram = compile_rule(&registry, "pass_stmt");
    assert_eq!(diagram.terminal_labels(), ["pass"]);
}

#[test]
fn augassign_exposes_three_branch_paths() {
    let mut registry = Registry::new();
    registry.register(RuleName::new("augassign").expect("name"), || {
        Expr::choice(vec![Expr::terminal("+="), Expr::terminal("-="), Expr::terminal("*=")])
            .expect("choice")
    });

    let diagram = compile_rule(&registry, "augassign");
    let DiagramNode::Choice { paths, .. } = diagram.root() else {
        panic!("expected a choice, got {:?}", diagram.root());
    };
    let labels: Vec<&str> = paths
        .iter()
        .map(|path| match path {
            DiagramNode::Terminal { text, .. } => text.as_str(),
            other => panic!("expected a terminal path, got {other:?}"),
        })
        .collect();
    assert_eq!(labels, ["+=", "-=", "*="]);
}

#[test]
fn second_registration_wins_with_one_warning() {
    let mut registry = Registry::new();
    let name = RuleName::new("x").expect("name");
    assert!(registry
        .register(name.clone(), || Expr::terminal("p1"))
        .is_none());
    assert!(registry
        .register(name, || Expr::terminal("p2"))
        .is_some());

    assert_eq!(registry.lookup("x").expect("lookup"), Expr::terminal("p2"));
    assert_eq!(registry.diagnostics().len(), 1);
    assert_eq!(registry.len(), 1);
}

#[test]
fn unknown_rule_compiles_to_a_placeholder() {
    let registry = registry();
    let diagram = compile_rule(&registry, "no_such_rule");
    assert_eq!(diagram.placeholders(), ["no_such_rule"]);
    assert!(registry.lookup("no_such_rule").is_err());
}

#[test]
fn filtering_grammar_names_is_idempotent() {
    let registry = registry();
    for query in ["", "stmt", "STAR_", "  lambda ", "zzz"] {
        let once = filter(registry.names(), query);
        let twice = filter(once.iter().copied(), query);
        assert_eq!(once, twice, "query {query:?}");
    }
}

#[test]
fn section_filters_do_not_leak_between_sections() {
    let index = SectionIndex::from_rows([
        ("s1", "First", &["a", "b"][..]),
        ("s2", "Second", &["b", "c"][..]),
    ])
    .expect("sections");

    let by_b = filter_sections(&index, "b");
    assert_eq!(by_b[0].rules, ["b"]);
    assert_eq!(by_b[1].rules, ["b"]);

    let unfiltered = filter_sections(&index, "");
    assert_eq!(unfiltered[1].rules, ["b", "c"]);
}

#[test]
fn sections_follow_the_display_order() {
    let sections = python_sections().expect("python sections");
    let ids: Vec<&str> = sections.sections_in_order().map(|id| id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "starting",
            "statements",
            "simple_stmts",
            "imports",
            "compound",
            "params",
            "control",
            "match",
            "types",
            "expressions",
            "comparison",
            "bitwise",
            "arithmetic",
            "primary",
            "lambda",
            "literals",
            "collections",
            "comprehensions",
            "arguments",
            "targets",
            "typing",
        ]
    );

    let first = sections.rules_of("starting").expect("starting");
    assert_eq!(first.first().map(|rule| rule.as_str()), Some("file"));
}

#[test]
fn section_titles_match_their_ids() {
    let sections = python_sections().expect("python sections");
    for (id, title) in [
        ("starting", "Starting Rules"),
        ("simple_stmts", "Simple Statements"),
        ("control", "Control Flow (if/while/for/with/try)"),
        ("match", "Pattern Matching"),
        ("comprehensions", "Comprehensions & Generators"),
        ("arguments", "Function Call Arguments"),
        ("typing", "Typing Elements"),
    ] {
        assert_eq!(sections.title_of(id), Some(title), "{id}");
    }
    assert_eq!(sections.title_of("nope"), None);
}
