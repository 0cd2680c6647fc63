// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railgram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use railgram::compile::{compile, compile_all, compile_rule};
use railgram::grammar::python_registry;
use railgram::layout::layout_diagram;
use railgram::model::Expr;
use railgram::render::{render_diagram_unicode, RenderOptions};

#[test]
fn every_python_rule_renders() {
    let registry = python_registry().expect("python registry");
    for diagram in compile_all(&registry) {
        let name = diagram.rule().map(|rule| rule.to_string()).unwrap_or_default();
        let rendered = render_diagram_unicode(&diagram, RenderOptions::default())
            .unwrap_or_else(|err| panic!("expected {name} to render, got error: {err}"));
        assert!(!rendered.trim().is_empty(), "expected {name} to render non-empty output");
        assert!(rendered.contains('╟') && rendered.contains('╢'), "{name}:\n{rendered}");
    }
}

#[test]
fn rendered_size_matches_layout() {
    let registry = python_registry().expect("python registry");
    for rule in ["if_stmt", "import_from", "lambda_parameters", "atom"] {
        let diagram = compile_rule(&registry, rule);
        let options = RenderOptions::default();
        let layout = layout_diagram(&diagram, &options);
        let rendered = render_diagram_unicode(&diagram, options).expect("render");
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines.len() <= layout.height(), "{rule}");
        let widest = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
        assert_eq!(widest, layout.width(), "{rule}");
    }
}

#[test]
fn rendering_is_deterministic() {
    let registry = python_registry().expect("python registry");
    let render = || {
        let diagram = compile_rule(&registry, "compound_stmt");
        render_diagram_unicode(&diagram, RenderOptions::default()).expect("render")
    };
    assert_eq!(render(), render());
}

#[test]
fn unknown_rule_renders_a_labelled_placeholder() {
    let registry = python_registry().expect("python registry");
    let diagram = compile_rule(&registry, "nope");
    let rendered = render_diagram_unicode(&diagram, RenderOptions::default()).expect("render");
    assert!(rendered.contains("no definition for `nope`"), "{rendered}");
}

#[test]
fn long_labels_are_truncated() {
    let options = RenderOptions {
        max_label_width: Some(6),
        ..RenderOptions::default()
    };
    let rendered =
        render_diagram_unicode(&compile(&Expr::non_terminal("star_named_expressions")), options)
            .expect("render");
    assert!(rendered.contains("star_…"), "{rendered}");
    assert!(!rendered.contains("star_named_expressions"));
}

#[test]
fn hidden_comments_leave_only_track() {
    let tree = Expr::sequence(vec![Expr::annotation("&'('"), Expr::terminal("NAME")]);
    let options = RenderOptions {
        show_comments: false,
        ..RenderOptions::default()
    };
    let rendered = render_diagram_unicode(&compile(&tree), options).expect("render");
    assert!(!rendered.contains("&'('"), "{rendered}");
    assert!(rendered.contains("┤ NAME ├"));
}
