// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railgram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Expressions, from `expression` down to `atom`, plus lambdas.
//!
//! Left-recursive operator rules are flattened into `operand (op operand)*`.

use super::dsl::{choice, gather, kw, many0, many1, note, nt, opt, seq, t};
use super::RuleDefs;

pub(super) fn define(defs: &mut RuleDefs) {
    // Expressions.
    defs.rule("expressions", || choice!(
        seq!(nt("expression"), many1(seq!(t(","), nt("expression"))), opt(t(","))),
        seq!(nt("expression"), t(",")),
        nt("expression"),
    ));
    defs.rule("expression", || choice!(
        seq!(nt("disjunction"), kw("if"), nt("disjunction"), kw("else"), nt("expression")),
        nt("disjunction"),
        nt("lambdef"),
    ));
    defs.rule("yield_expr", || choice!(
        seq!(kw("yield"), kw("from"), nt("expression")),
        seq!(kw("yield"), opt(nt("star_expressions"))),
    ));
    defs.rule("star_expressions", || choice!(
        seq!(nt("star_expression"), many1(seq!(t(","), nt("star_expression"))), opt(t(","))),
        seq!(nt("star_expression"), t(",")),
        nt("star_expression"),
    ));
    defs.rule("star_expression", || choice!(seq!(t("*"), nt("bitwise_or")), nt("expression")));
    defs.rule("star_named_expressions", || seq!(
        gather(t(","), nt("star_named_expression")),
        opt(t(",")),
    ));
    defs.rule("star_named_expression", || choice!(
        seq!(t("*"), nt("bitwise_or")),
        nt("named_expression"),
    ));
    defs.rule("assignment_expression", || seq!(t("NAME"), t(":="), nt("expression")));
    defs.rule("named_expression", || choice!(nt("assignment_expression"), nt("expression")));
    defs.rule("disjunction", || choice!(
        seq!(nt("conjunction"), many1(seq!(kw("or"), nt("conjunction")))),
        nt("conjunction"),
    ));
    defs.rule("conjunction", || choice!(
        seq!(nt("inversion"), many1(seq!(kw("and"), nt("inversion")))),
        nt("inversion"),
    ));
    defs.rule("inversion", || choice!(seq!(kw("not"), nt("inversion")), nt("comparison")));

    // Comparison operators.
    defs.rule("comparison", || choice!(
        seq!(nt("bitwise_or"), many1(nt("compare_op_bitwise_or_pair"))),
        nt("bitwise_or"),
    ));
    defs.rule("compare_op_bitwise_or_pair", || choice!(
        nt("eq_bitwise_or"),
        nt("noteq_bitwise_or"),
        nt("lte_bitwise_or"),
        nt("lt_bitwise_or"),
        nt("gte_bitwise_or"),
        nt("gt_bitwise_or"),
        nt("notin_bitwise_or"),
        nt("in_bitwise_or"),
        nt("isnot_bitwise_or"),
        nt("is_bitwise_or"),
    ));
    defs.rule("eq_bitwise_or", || seq!(t("=="), nt("bitwise_or")));
    defs.rule("noteq_bitwise_or", || seq!(t("!="), nt("bitwise_or")));
    defs.rule("lte_bitwise_or", || seq!(t("<="), nt("bitwise_or")));
    defs.rule("lt_bitwise_or", || seq!(t("<"), nt("bitwise_or")));
    defs.rule("gte_bitwise_or", || seq!(t(">="), nt("bitwise_or")));
    defs.rule("gt_bitwise_or", || seq!(t(">"), nt("bitwise_or")));
    defs.rule("notin_bitwise_or", || seq!(kw("not"), kw("in"), nt("bitwise_or")));
    defs.rule("in_bitwise_or", || seq!(kw("in"), nt("bitwise_or")));
    defs.rule("isnot_bitwise_or", || seq!(kw("is"), kw("not"), nt("bitwise_or")));
    defs.rule("is_bitwise_or", || seq!(kw("is"), nt("bitwise_or")));

    // Bitwise operators.
    defs.rule("bitwise_or", || gather(t("|"), nt("bitwise_xor")));
    defs.rule("bitwise_xor", || gather(t("^"), nt("bitwise_and")));
    defs.rule("bitwise_and", || gather(t("&"), nt("shift_expr")));
    defs.rule("shift_expr", || seq!(nt("sum"), many0(seq!(choice!(t("<<"), t(">>")), nt("sum")))));

    // Arithmetic operators.
    defs.rule("sum", || seq!(nt("term"), many0(seq!(choice!(t("+"), t("-")), nt("term")))));
    defs.rule("term", || seq!(
        nt("factor"),
        many0(seq!(choice!(t("*"), t("/"), t("//"), t("%"), t("@")), nt("factor"))),
    ));
    defs.rule("factor", || choice!(
        seq!(t("+"), nt("factor")),
        seq!(t("-"), nt("factor")),
        seq!(t("~"), nt("factor")),
        nt("power"),
    ));
    defs.rule("power", || choice!(
        seq!(nt("await_primary"), t("**"), nt("factor")),
        nt("await_primary"),
    ));

    // Primary elements.
    defs.rule("await_primary", || choice!(seq!(kw("await"), nt("primary")), nt("primary")));
    defs.rule("primary", || seq!(
        nt("atom"),
        many0(
            choice!(
                seq!(t("."), t("NAME")),
                nt("genexp"),
                seq!(t("("), opt(nt("arguments")), t(")")),
                seq!(t("["), nt("slices"), t("]")),
            ),
        ),
    ));
    defs.rule("slices", || choice!(
        nt("slice"),
        seq!(
            choice!(nt("slice"), nt("starred_expression")),
            many0(seq!(t(","), choice!(nt("slice"), nt("starred_expression")))),
            opt(t(",")),
        ),
    ));
    defs.rule("slice", || choice!(
        seq!(
            opt(nt("expression")),
            t(":"),
            opt(nt("expression")),
            opt(seq!(t(":"), opt(nt("expression")))),
        ),
        nt("named_expression"),
    ));
    defs.rule("atom", || choice!(
        t("NAME"),
        kw("True"),
        kw("False"),
        kw("None"),
        nt("strings"),
        t("NUMBER"),
        choice!(nt("tuple"), nt("group"), nt("genexp")),
        choice!(nt("list"), nt("listcomp")),
        choice!(nt("dict"), nt("set"), nt("dictcomp"), nt("setcomp")),
        t("..."),
    ));
    defs.rule("group", || seq!(t("("), choice!(nt("yield_expr"), nt("named_expression")), t(")")));

    // Lambda functions.
    defs.rule("lambdef", || seq!(kw("lambda"), opt(nt("lambda_params")), t(":"), nt("expression")));
    defs.rule("lambda_params", || nt("lambda_parameters"));
    defs.rule("lambda_parameters", || choice!(
        seq!(
            nt("lambda_slash_no_default"),
            many0(nt("lambda_param_no_default")),
            many0(nt("lambda_param_with_default")),
            opt(nt("lambda_star_etc")),
        ),
        seq!(
            nt("lambda_slash_with_default"),
            many0(nt("lambda_param_with_default")),
            opt(nt("lambda_star_etc")),
        ),
        seq!(
            many1(nt("lambda_param_no_default")),
            many0(nt("lambda_param_with_default")),
            opt(nt("lambda_star_etc")),
        ),
        seq!(many1(nt("lambda_param_with_default")), opt(nt("lambda_star_etc"))),
        nt("lambda_star_etc"),
    ));
    defs.rule("lambda_slash_no_default", || seq!(
        many1(nt("lambda_param_no_default")),
        t("/"),
        choice!(t(","), note("&':'")),
    ));
    defs.rule("lambda_slash_with_default", || seq!(
        many0(nt("lambda_param_no_default")),
        many1(nt("lambda_param_with_default")),
        t("/"),
        choice!(t(","), note("&':'")),
    ));
    defs.rule("lambda_star_etc", || choice!(
        seq!(
            t("*"),
            nt("lambda_param_no_default"),
            many0(nt("lambda_param_maybe_default")),
            opt(nt("lambda_kwds")),
        ),
        seq!(t("*"), t(","), many1(nt("lambda_param_maybe_default")), opt(nt("lambda_kwds"))),
        nt("lambda_kwds"),
    ));
    defs.rule("lambda_kwds", || seq!(t("**"), nt("lambda_param_no_default")));
    defs.rule("lambda_param_no_default", || seq!(
        nt("lambda_param"),
        choice!(t(","), note("&':'")),
    ));
    defs.rule("lambda_param_with_default", || seq!(
        nt("lambda_param"),
        nt("default"),
        choice!(t(","), note("&':'")),
    ));
    defs.rule("lambda_param_maybe_default", || seq!(
        nt("lambda_param"),
        opt(nt("default")),
        choice!(t(","), note("&':'")),
    ));
    defs.rule("lambda_param", || t("NAME"));
}
