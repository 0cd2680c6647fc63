// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railgram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Grammar expression trees.
//!
//! An [`Expr`] is a finite value tree. Rules refer to each other only through
//! [`Expr::NonTerminal`] names, so a self-referential grammar never needs a cyclic tree.

use std::fmt;

use serde::Serialize;
use smol_str::SmolStr;

/// How a terminal appears in the source grammar.
///
/// The kind only affects presentation; all kinds match their text verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalKind {
    /// A token class produced by the tokenizer (`NAME`, `NEWLINE`, `FSTRING_START`).
    Token,
    /// Punctuation or an operator (`(`, `:=`, `**`).
    Literal,
    /// A reserved keyword (`if`, `lambda`).
    Keyword,
    /// A keyword only in specific positions (`match`, `case`, `type`).
    SoftKeyword,
}

impl TerminalKind {
    /// Token classes are spelled in upper case; everything else is literal text.
    pub fn infer(text: &str) -> Self {
        let mut has_letter = false;
        for ch in text.chars() {
            if ch.is_ascii_uppercase() {
                has_letter = true;
            } else if ch != '_' {
                return Self::Literal;
            }
        }
        if has_letter {
            Self::Token
        } else {
            Self::Literal
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Terminal {
    text: SmolStr,
    kind: TerminalKind,
}

impl Terminal {
    pub fn new(text: impl Into<SmolStr>, kind: TerminalKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> TerminalKind {
        self.kind
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TerminalKind::Token => f.write_str(&self.text),
            TerminalKind::Literal | TerminalKind::Keyword => write!(f, "'{}'", self.text),
            TerminalKind::SoftKeyword => write!(f, "\"{}\"", self.text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Terminal(Terminal),
    /// A reference to another rule by name, resolved only when someone looks it up.
    NonTerminal(SmolStr),
    /// All items in order. The empty sequence is the empty production.
    Sequence(Vec<Expr>),
    /// Exactly one option; `default` is the option drawn on the main track.
    Choice { options: Vec<Expr>, default: usize },
    Optional(Box<Expr>),
    ZeroOrMore {
        inner: Box<Expr>,
        separator: Option<Box<Expr>>,
    },
    OneOrMore {
        inner: Box<Expr>,
        separator: Option<Box<Expr>>,
    },
    /// A note such as a lookahead constraint. Never matches anything.
    Annotation(SmolStr),
}

impl Expr {
    pub fn terminal(text: impl Into<SmolStr>) -> Self {
        let text = text.into();
        let kind = TerminalKind::infer(&text);
        Self::Terminal(Terminal::new(text, kind))
    }

    pub fn keyword(text: impl Into<SmolStr>) -> Self {
        Self::Terminal(Terminal::new(text, TerminalKind::Keyword))
    }

    pub fn soft_keyword(text: impl Into<SmolStr>) -> Self {
        Self::Terminal(Terminal::new(text, TerminalKind::SoftKeyword))
    }

    pub fn non_terminal(name: impl Into<SmolStr>) -> Self {
        Self::NonTerminal(name.into())
    }

    pub fn sequence(items: Vec<Expr>) -> Self {
        Self::Sequence(items)
    }

    pub fn empty() -> Self {
        Self::Sequence(Vec::new())
    }

    pub fn choice(options: Vec<Expr>) -> Result<Self, InvalidGrammarError> {
        Self::choice_with_default(options, 0)
    }

    pub fn choice_with_default(
        options: Vec<Expr>,
        default: usize,
    ) -> Result<Self, InvalidGrammarError> {
        check_choice(options.len(), default)?;
        Ok(Self::Choice { options, default })
    }

    pub fn optional(inner: Expr) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// Fails with [`InvalidGrammarError::EmptyRepetition`] when `inner` is the empty production.
    pub fn zero_or_more(inner: Expr) -> Result<Self, InvalidGrammarError> {
        check_repetition(&inner)?;
        Ok(Self::ZeroOrMore {
            inner: Box::new(inner),
            separator: None,
        })
    }

    pub fn one_or_more(inner: Expr) -> Result<Self, InvalidGrammarError> {
        check_repetition(&inner)?;
        Ok(Self::OneOrMore {
            inner: Box::new(inner),
            separator: None,
        })
    }

    pub fn zero_or_more_sep(inner: Expr, separator: Expr) -> Result<Self, InvalidGrammarError> {
        check_repetition(&inner)?;
        Ok(Self::ZeroOrMore {
            inner: Box::new(inner),
            separator: Some(Box::new(separator)),
        })
    }

    pub fn one_or_more_sep(inner: Expr, separator: Expr) -> Result<Self, InvalidGrammarError> {
        check_repetition(&inner)?;
        Ok(Self::OneOrMore {
            inner: Box::new(inner),
            separator: Some(Box::new(separator)),
        })
    }

    pub fn annotation(text: impl Into<SmolStr>) -> Self {
        Self::Annotation(text.into())
    }

    /// True for the empty production (an empty sequence, possibly nested).
    pub fn is_empty_production(&self) -> bool {
        match self {
            Self::Sequence(items) => items.iter().all(Self::is_empty_production),
            _ => false,
        }
    }

    /// Checks every structural invariant in the tree, returning the first violation.
    pub fn validate(&self) -> Result<(), InvalidGrammarError> {
        match self {
            Self::Terminal(_) | Self::NonTerminal(_) | Self::Annotation(_) => Ok(()),
            Self::Sequence(items) => items.iter().try_for_each(Self::validate),
            Self::Choice { options, default } => {
                check_choice(options.len(), *default)?;
                options.iter().try_for_each(Self::validate)
            }
            Self::Optional(inner) => inner.validate(),
            Self::ZeroOrMore { inner, separator } | Self::OneOrMore { inner, separator } => {
                check_repetition(inner)?;
                inner.validate()?;
                match separator {
                    Some(separator) => separator.validate(),
                    None => Ok(()),
                }
            }
        }
    }

    /// Names of all referenced rules, in tree order, with duplicates.
    pub fn references(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(&mut |expr| {
            if let Expr::NonTerminal(name) = expr {
                out.push(name.as_str());
            }
        });
        out
    }

    pub fn terminals(&self) -> Vec<&Terminal> {
        let mut out = Vec::new();
        self.walk(&mut |expr| {
            if let Expr::Terminal(terminal) = expr {
                out.push(terminal);
            }
        });
        out
    }

    /// Pre-order traversal. Separators are visited after the repeated item.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Expr)) {
        visit(self);
        match self {
            Self::Terminal(_) | Self::NonTerminal(_) | Self::Annotation(_) => {}
            Self::Sequence(items) | Self::Choice { options: items, .. } => {
                for item in items {
                    item.walk(visit);
                }
            }
            Self::Optional(inner) => inner.walk(visit),
            Self::ZeroOrMore { inner, separator } | Self::OneOrMore { inner, separator } => {
                inner.walk(visit);
                if let Some(separator) = separator {
                    separator.walk(visit);
                }
            }
        }
    }

    fn fmt_prec(&self, f: &mut fmt::Formatter<'_>, prec: Prec) -> fmt::Result {
        match self {
            Self::Terminal(terminal) => write!(f, "{terminal}"),
            Self::NonTerminal(name) => f.write_str(name),
            Self::Annotation(text) => write!(f, "/* {text} */"),
            Self::Sequence(items) if items.is_empty() => f.write_str("()"),
            Self::Sequence(items) if items.len() == 1 => items[0].fmt_prec(f, prec),
            Self::Sequence(items) => {
                let wrap = prec > Prec::Sequence;
                if wrap {
                    f.write_str("(")?;
                }
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(" ")?;
                    }
                    item.fmt_prec(f, Prec::Postfix)?;
                }
                if wrap {
                    f.write_str(")")?;
                }
                Ok(())
            }
            Self::Choice { options, .. } if options.len() == 1 => options[0].fmt_prec(f, prec),
            Self::Choice { options, .. } => {
                let wrap = prec > Prec::Choice;
                if wrap {
                    f.write_str("(")?;
                }
                for (idx, option) in options.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(" | ")?;
                    }
                    option.fmt_prec(f, Prec::Sequence)?;
                }
                if wrap {
                    f.write_str(")")?;
                }
                Ok(())
            }
            Self::Optional(inner) => {
                f.write_str("[")?;
                inner.fmt_prec(f, Prec::Choice)?;
                f.write_str("]")
            }
            Self::ZeroOrMore { inner, separator } => match separator {
                // PEG only has a one-or-more gather, so zero-or-more becomes `[s.e+]`.
                Some(separator) => {
                    f.write_str("[")?;
                    fmt_gather(f, inner, separator)?;
                    f.write_str("]")
                }
                None => {
                    inner.fmt_prec(f, Prec::Atom)?;
                    f.write_str("*")
                }
            },
            Self::OneOrMore { inner, separator } => match separator {
                Some(separator) => fmt_gather(f, inner, separator),
                None => {
                    inner.fmt_prec(f, Prec::Atom)?;
                    f.write_str("+")
                }
            },
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_prec(f, Prec::Choice)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Prec {
    Choice,
    Sequence,
    Postfix,
    Atom,
}

fn fmt_gather(f: &mut fmt::Formatter<'_>, inner: &Expr, separator: &Expr) -> fmt::Result {
    separator.fmt_prec(f, Prec::Atom)?;
    f.write_str(".")?;
    inner.fmt_prec(f, Prec::Atom)?;
    f.write_str("+")
}

fn check_choice(len: usize, default: usize) -> Result<(), InvalidGrammarError> {
    if len == 0 {
        return Err(InvalidGrammarError::EmptyChoice);
    }
    if default >= len {
        return Err(InvalidGrammarError::DefaultOutOfRange { default, len });
    }
    Ok(())
}

fn check_repetition(inner: &Expr) -> Result<(), InvalidGrammarError> {
    if inner.is_empty_production() {
        return Err(InvalidGrammarError::EmptyRepetition);
    }
    Ok(())
}

/// A grammar tree that violates a structural invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidGrammarError {
    EmptyChoice,
    DefaultOutOfRange { default: usize, len: usize },
    EmptyRepetition,
}

impl fmt::Display for InvalidGrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyChoice => f.write_str("a choice must offer at least one alternative"),
            Self::DefaultOutOfRange { default, len } => {
                write!(f, "choice default {default} is out of range for {len} options")
            }
            Self::EmptyRepetition => {
                f.write_str("a repetition must not repeat the empty production")
            }
        }
    }
}

impl std::error::Error for InvalidGrammarError {}
