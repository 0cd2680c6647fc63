// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railgram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Strings, displays, comprehensions and call arguments.

use super::dsl::{choice, gather, kw, many0, many1, nt, opt, seq, t};
use super::RuleDefs;

pub(super) fn define(defs: &mut RuleDefs) {
    // Literals.
    defs.rule("fstring_middle", || choice!(nt("fstring_replacement_field"), t("FSTRING_MIDDLE")));
    defs.rule("fstring_replacement_field", || seq!(
        t("{"),
        nt("annotated_rhs"),
        opt(t("=")),
        opt(nt("fstring_conversion")),
        opt(nt("fstring_full_format_spec")),
        t("}"),
    ));
    defs.rule("fstring_conversion", || seq!(t("!"), t("NAME")));
    defs.rule("fstring_full_format_spec", || seq!(t(":"), many0(nt("fstring_format_spec"))));
    defs.rule("fstring_format_spec", || choice!(
        t("FSTRING_MIDDLE"),
        nt("fstring_replacement_field"),
    ));
    defs.rule("fstring", || seq!(
        t("FSTRING_START"),
        many0(nt("fstring_middle")),
        t("FSTRING_END"),
    ));
    defs.rule("tstring_format_spec_replacement_field", || seq!(
        t("{"),
        nt("annotated_rhs"),
        opt(t("=")),
        opt(nt("fstring_conversion")),
        opt(nt("tstring_full_format_spec")),
        t("}"),
    ));
    defs.rule("tstring_format_spec", || choice!(
        t("TSTRING_MIDDLE"),
        nt("tstring_format_spec_replacement_field"),
    ));
    defs.rule("tstring_full_format_spec", || seq!(t(":"), many0(nt("tstring_format_spec"))));
    defs.rule("tstring_replacement_field", || seq!(
        t("{"),
        nt("annotated_rhs"),
        opt(t("=")),
        opt(nt("fstring_conversion")),
        opt(nt("tstring_full_format_spec")),
        t("}"),
    ));
    defs.rule("tstring_middle", || choice!(nt("tstring_replacement_field"), t("TSTRING_MIDDLE")));
    defs.rule("tstring", || seq!(
        t("TSTRING_START"),
        many0(nt("tstring_middle")),
        t("TSTRING_END"),
    ));
    defs.rule("string", || t("STRING"));
    defs.rule("strings", || choice!(
        many1(choice!(nt("fstring"), nt("string"))),
        many1(nt("tstring")),
    ));

    // Collections.
    defs.rule("list", || seq!(t("["), opt(nt("star_named_expressions")), t("]")));
    defs.rule("tuple", || seq!(
        t("("),
        opt(seq!(nt("star_named_expression"), t(","), opt(nt("star_named_expressions")))),
        t(")"),
    ));
    defs.rule("set", || seq!(t("{"), nt("star_named_expressions"), t("}")));
    defs.rule("dict", || seq!(t("{"), opt(nt("double_starred_kvpairs")), t("}")));
    defs.rule("double_starred_kvpairs", || seq!(
        gather(t(","), nt("double_starred_kvpair")),
        opt(t(",")),
    ));
    defs.rule("double_starred_kvpair", || choice!(seq!(t("**"), nt("bitwise_or")), nt("kvpair")));
    defs.rule("kvpair", || seq!(nt("expression"), t(":"), nt("expression")));

    // Comprehensions and generators.
    defs.rule("for_if_clauses", || many1(nt("for_if_clause")));
    defs.rule("for_if_clause", || choice!(
        seq!(
            kw("async"),
            kw("for"),
            nt("star_targets"),
            kw("in"),
            nt("disjunction"),
            many0(seq!(kw("if"), nt("disjunction"))),
        ),
        seq!(
            kw("for"),
            nt("star_targets"),
            kw("in"),
            nt("disjunction"),
            many0(seq!(kw("if"), nt("disjunction"))),
        ),
    ));
    defs.rule("listcomp", || seq!(t("["), nt("named_expression"), nt("for_if_clauses"), t("]")));
    defs.rule("setcomp", || seq!(t("{"), nt("named_expression"), nt("for_if_clauses"), t("}")));
    defs.rule("genexp", || seq!(
        t("("),
        choice!(nt("assignment_expression"), nt("expression")),
        nt("for_if_clauses"),
        t(")"),
    ));
    defs.rule("dictcomp", || seq!(t("{"), nt("kvpair"), nt("for_if_clauses"), t("}")));

    // Function call arguments.
    defs.rule("arguments", || seq!(nt("args"), opt(t(","))));
    defs.rule("args", || choice!(
        seq!(
            choice!(nt("starred_expression"), nt("assignment_expression"), nt("expression")),
            many0(
                seq!(
                    t(","),
                    choice!(
                        nt("starred_expression"),
                        nt("assignment_expression"),
                        nt("expression"),
                    ),
                ),
            ),
            opt(seq!(t(","), nt("kwargs"))),
        ),
        nt("kwargs"),
    ));
    defs.rule("kwargs", || choice!(
        seq!(
            gather(t(","), nt("kwarg_or_starred")),
            t(","),
            gather(t(","), nt("kwarg_or_double_starred")),
        ),
        gather(t(","), nt("kwarg_or_starred")),
        gather(t(","), nt("kwarg_or_double_starred")),
    ));
    defs.rule("starred_expression", || seq!(t("*"), nt("expression")));
    defs.rule("kwarg_or_starred", || choice!(
        seq!(t("NAME"), t("="), nt("expression")),
        nt("starred_expression"),
    ));
    defs.rule("kwarg_or_double_starred", || choice!(
        seq!(t("NAME"), t("="), nt("expression")),
        seq!(t("**"), nt("expression")),
    ));
}
