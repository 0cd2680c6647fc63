// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railgram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Expression trees to abstract railroad diagrams.
//!
//! A [`Diagram`] says which tracks exist and what sits on them, not where anything is drawn.
//! Non-terminals compile to labels; a referenced rule is never inlined, so recursive grammars
//! compile in time proportional to the tree.

use serde::Serialize;
use smol_str::SmolStr;

use crate::model::{Expr, Registry, RuleName, TerminalKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagram {
    rule: Option<RuleName>,
    root: DiagramNode,
}

impl Diagram {
    pub fn new(rule: Option<RuleName>, root: DiagramNode) -> Self {
        Self { rule, root }
    }

    /// Rendered in place of a rule that has no definition.
    pub fn missing(name: &str) -> Self {
        Self {
            rule: RuleName::new(name).ok(),
            root: DiagramNode::Missing {
                name: SmolStr::new(name),
            },
        }
    }

    pub fn rule(&self) -> Option<&RuleName> {
        self.rule.as_ref()
    }

    pub fn root(&self) -> &DiagramNode {
        &self.root
    }

    pub fn terminal_labels(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.root.walk(&mut |node| {
            if let DiagramNode::Terminal { text, .. } = node {
                out.push(text.as_str());
            }
        });
        out
    }

    pub fn non_terminal_labels(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.root.walk(&mut |node| {
            if let DiagramNode::NonTerminal { name } = node {
                out.push(name.as_str());
            }
        });
        out
    }

    /// Names of rules shown as "no definition" boxes.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.root.walk(&mut |node| {
            if let DiagramNode::Missing { name } = node {
                out.push(name.as_str());
            }
        });
        out
    }

    /// Number of paths when the root is a branch.
    pub fn branch_count(&self) -> Option<usize> {
        match &self.root {
            DiagramNode::Choice { paths, .. } => Some(paths.len()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RepeatMin {
    Zero,
    One,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagramNode {
    Terminal {
        text: SmolStr,
        kind: TerminalKind,
    },
    NonTerminal {
        name: SmolStr,
    },
    /// A plain stretch of track (the empty production).
    Skip,
    Sequence {
        items: Vec<DiagramNode>,
    },
    Choice {
        default: usize,
        paths: Vec<DiagramNode>,
    },
    Optional {
        body: Box<DiagramNode>,
    },
    /// Loop around `body`; the separator sits on the return track.
    Repeat {
        body: Box<DiagramNode>,
        separator: Option<Box<DiagramNode>>,
        min: RepeatMin,
    },
    Comment {
        text: SmolStr,
    },
    Missing {
        name: SmolStr,
    },
}

impl DiagramNode {
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a DiagramNode)) {
        visit(self);
        match self {
            Self::Terminal { .. }
            | Self::NonTerminal { .. }
            | Self::Skip
            | Self::Comment { .. }
            | Self::Missing { .. } => {}
            Self::Sequence { items } => items.iter().for_each(|item| item.walk(visit)),
            Self::Choice { paths, .. } => paths.iter().for_each(|path| path.walk(visit)),
            Self::Optional { body } => body.walk(visit),
            Self::Repeat {
                body, separator, ..
            } => {
                body.walk(visit);
                if let Some(separator) = separator {
                    separator.walk(visit);
                }
            }
        }
    }
}

/// Compiles a tree on its own, without a rule name.
pub fn compile(expr: &Expr) -> Diagram {
    Diagram::new(None, compile_node(expr))
}

/// Compiles a registered rule, or a placeholder diagram if `name` is unknown.
pub fn compile_rule(registry: &Registry, name: &str) -> Diagram {
    match registry.get(name) {
        Some(entry) => Diagram::new(Some(entry.name().clone()), compile_node(&entry.produce())),
        None => {
            tracing::debug!(rule = name, "no definition; compiling placeholder");
            Diagram::missing(name)
        }
    }
}

/// One diagram per registered rule, in registration order.
pub fn compile_all(registry: &Registry) -> Vec<Diagram> {
    registry
        .entries()
        .iter()
        .map(|entry| Diagram::new(Some(entry.name().clone()), compile_node(&entry.produce())))
        .collect()
}

fn compile_node(expr: &Expr) -> DiagramNode {
    match expr {
        Expr::Terminal(terminal) => DiagramNode::Terminal {
            text: SmolStr::new(terminal.text()),
            kind: terminal.kind(),
        },
        Expr::NonTerminal(name) => DiagramNode::NonTerminal { name: name.clone() },
        Expr::Sequence(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                // Nested sequences read as one run of track.
                match compile_node(item) {
                    DiagramNode::Sequence { items } => out.extend(items),
                    DiagramNode::Skip => {}
                    node => out.push(node),
                }
            }
            match out.len() {
                0 => DiagramNode::Skip,
                1 => out.pop().unwrap_or(DiagramNode::Skip),
                _ => DiagramNode::Sequence { items: out },
            }
        }
        Expr::Choice { options, default } => DiagramNode::Choice {
            default: *default,
            paths: options.iter().map(compile_node).collect(),
        },
        Expr::Optional(inner) => DiagramNode::Optional {
            body: Box::new(compile_node(inner)),
        },
        Expr::ZeroOrMore { inner, separator } => compile_repeat(inner, separator, RepeatMin::Zero),
        Expr::OneOrMore { inner, separator } => compile_repeat(inner, separator, RepeatMin::One),
        Expr::Annotation(text) => DiagramNode::Comment { text: text.clone() },
    }
}

fn compile_repeat(inner: &Expr, separator: &Option<Box<Expr>>, min: RepeatMin) -> DiagramNode {
    DiagramNode::Repeat {
        body: Box::new(compile_node(inner)),
        separator: separator
            .as_deref()
            .map(|separator| Box::new(compile_node(separator))),
        min,
    }
}

#[cfg(test)]
mod tests {
    use super::{compile, compile_all, compile_rule, DiagramNode, RepeatMin};
    use crate::model::{Expr, Registry, RuleName, TerminalKind};

    fn registry() -> Registry {
        Registry::init([
            ("pass_stmt", (|| Expr::keyword("pass")) as fn() -> Expr),
            ("augassign", || {
                Expr::Choice {
                    options: vec![
                        Expr::terminal("+="),
                        Expr::terminal("-="),
                        Expr::terminal("*="),
                    ],
                    default: 0,
                }
            }),
            ("block", || {
                Expr::sequence(vec![
                    Expr::terminal("NEWLINE"),
                    Expr::terminal("INDENT"),
                    Expr::non_terminal("statements"),
                    Expr::non_terminal("block"),
                ])
            }),
        ])
        .expect("registry")
    }

    #[test]
    fn single_terminal_compiles_to_one_box() {
        let diagram = compile_rule(&registry(), "pass_stmt");
        assert_eq!(diagram.rule().map(RuleName::as_str), Some("pass_stmt"));
        assert_eq!(diagram.terminal_labels(), ["pass"]);
        assert_eq!(
            diagram.root(),
            &DiagramNode::Terminal {
                text: "pass".into(),
                kind: TerminalKind::Keyword,
            }
        );
    }

    #[test]
    fn choice_exposes_one_path_per_option() {
        let diagram = compile_rule(&registry(), "augassign");
        assert_eq!(diagram.branch_count(), Some(3));
        let DiagramNode::Choice { paths, default } = diagram.root() else {
            panic!("expected a choice root");
        };
        assert_eq!(*default, 0);
        let labels: Vec<&str> = paths
            .iter()
            .map(|path| match path {
                DiagramNode::Terminal { text, .. } => text.as_str(),
                other => panic!("unexpected path {other:?}"),
            })
            .collect();
        assert_eq!(labels, ["+=", "-=", "*="]);
    }

    #[test]
    fn references_stay_labels_even_when_recursive() {
        let diagram = compile_rule(&registry(), "block");
        assert_eq!(diagram.non_terminal_labels(), ["statements", "block"]);
        assert!(diagram.placeholders().is_empty());
    }

    #[test]
    fn unknown_rule_compiles_to_placeholder() {
        let diagram = compile_rule(&registry(), "no_such_rule");
        assert_eq!(diagram.placeholders(), ["no_such_rule"]);
        assert!(diagram.terminal_labels().is_empty());

        let diagram = compile_rule(&registry(), "not a name");
        assert_eq!(diagram.rule(), None);
        assert_eq!(diagram.placeholders(), ["not a name"]);
    }

    #[test]
    fn empty_and_nested_sequences_flatten() {
        assert_eq!(compile(&Expr::empty()).root(), &DiagramNode::Skip);

        let tree = Expr::sequence(vec![
            Expr::terminal("("),
            Expr::sequence(vec![Expr::non_terminal("a"), Expr::empty()]),
            Expr::terminal(")"),
        ]);
        let DiagramNode::Sequence { items } = compile(&tree).root().clone() else {
            panic!("expected a sequence");
        };
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn separator_moves_to_the_repeat() {
        let tree = Expr::zero_or_more_sep(Expr::non_terminal("item"), Expr::terminal(","))
            .expect("gather");
        let DiagramNode::Repeat { separator, min, .. } = compile(&tree).root().clone() else {
            panic!("expected a repeat");
        };
        assert_eq!(min, RepeatMin::Zero);
        assert!(matches!(
            separator.as_deref(),
            Some(DiagramNode::Terminal { text, .. }) if text == ","
        ));
    }

    #[test]
    fn compile_is_deterministic() {
        let registry = registry();
        let first = compile_all(&registry);
        let second = compile_all(&registry);
        assert_eq!(first, second);
        assert_eq!(first.len(), registry.len());
    }

    #[test]
    fn diagram_serializes_with_node_tags() {
        let diagram = compile_rule(&registry(), "pass_stmt");
        let json = serde_json::to_value(&diagram).expect("json");
        assert_eq!(json["rule"], "pass_stmt");
        assert_eq!(json["root"]["type"], "terminal");
        assert_eq!(json["root"]["kind"], "keyword");
    }
}
