// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railgram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Short builders for writing grammar data.
//!
//! These never fail: `choice!` needs at least one option at compile time, and anything else a
//! definition can get wrong is caught by [`crate::model::Registry::validate_all`].

use crate::model::Expr;

macro_rules! seq {
    ($($item:expr),* $(,)?) => {
        $crate::model::Expr::sequence(::std::vec![$($item),*])
    };
}

macro_rules! choice {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::model::Expr::Choice {
            options: ::std::vec![$first $(, $rest)*],
            default: 0,
        }
    };
}

pub(crate) use choice;
pub(crate) use seq;

/// Token class or punctuation, kind inferred from spelling.
pub(crate) fn t(text: &'static str) -> Expr {
    Expr::terminal(text)
}

pub(crate) fn kw(text: &'static str) -> Expr {
    Expr::keyword(text)
}

pub(crate) fn soft(text: &'static str) -> Expr {
    Expr::soft_keyword(text)
}

pub(crate) fn nt(name: &'static str) -> Expr {
    Expr::non_terminal(name)
}

pub(crate) fn opt(inner: Expr) -> Expr {
    Expr::optional(inner)
}

// The grammar data is checked as a whole by `Registry::validate_all`, so the DSL builds
// repetitions directly instead of going through the fallible constructors.
pub(crate) fn many0(inner: Expr) -> Expr {
    Expr::ZeroOrMore {
        inner: Box::new(inner),
        separator: None,
    }
}

pub(crate) fn many1(inner: Expr) -> Expr {
    Expr::OneOrMore {
        inner: Box::new(inner),
        separator: None,
    }
}

/// PEG gather `sep.inner+`: one or more `inner`, separated by `sep`.
pub(crate) fn gather(separator: Expr, inner: Expr) -> Expr {
    Expr::OneOrMore {
        inner: Box::new(inner),
        separator: Some(Box::new(separator)),
    }
}

pub(crate) fn note(text: &'static str) -> Expr {
    Expr::annotation(text)
}
