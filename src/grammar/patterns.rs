// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railgram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! `match` statement patterns and `type` statements.

use super::dsl::{choice, gather, kw, many1, note, nt, opt, seq, soft, t};
use super::RuleDefs;

pub(super) fn define(defs: &mut RuleDefs) {
    // Match statement.
    defs.rule("match_stmt", || seq!(
        soft("match"),
        nt("subject_expr"),
        t(":"),
        t("NEWLINE"),
        t("INDENT"),
        many1(nt("case_block")),
        t("DEDENT"),
    ));
    defs.rule("subject_expr", || choice!(
        seq!(nt("star_named_expression"), t(","), opt(nt("star_named_expressions"))),
        nt("named_expression"),
    ));
    defs.rule("case_block", || seq!(
        soft("case"),
        nt("patterns"),
        opt(nt("guard")),
        t(":"),
        nt("block"),
    ));
    defs.rule("guard", || seq!(kw("if"), nt("named_expression")));
    defs.rule("patterns", || choice!(nt("open_sequence_pattern"), nt("pattern")));
    defs.rule("pattern", || choice!(nt("as_pattern"), nt("or_pattern")));
    defs.rule("as_pattern", || seq!(nt("or_pattern"), kw("as"), nt("pattern_capture_target")));
    defs.rule("or_pattern", || seq!(
        gather(t("|"), nt("closed_pattern")),
    ));
    defs.rule("closed_pattern", || choice!(
        nt("literal_pattern"),
        nt("capture_pattern"),
        nt("wildcard_pattern"),
        nt("value_pattern"),
        nt("group_pattern"),
        nt("sequence_pattern"),
        nt("mapping_pattern"),
        nt("class_pattern"),
    ));
    defs.rule("literal_pattern", || choice!(
        nt("signed_number"),
        nt("complex_number"),
        nt("strings"),
        kw("None"),
        kw("True"),
        kw("False"),
    ));
    defs.rule("literal_expr", || choice!(
        nt("signed_number"),
        nt("complex_number"),
        nt("strings"),
        kw("None"),
        kw("True"),
        kw("False"),
    ));
    defs.rule("complex_number", || choice!(
        seq!(nt("signed_real_number"), t("+"), nt("imaginary_number")),
        seq!(nt("signed_real_number"), t("-"), nt("imaginary_number")),
    ));
    defs.rule("signed_number", || choice!(t("NUMBER"), seq!(t("-"), t("NUMBER"))));
    defs.rule("signed_real_number", || choice!(nt("real_number"), seq!(t("-"), nt("real_number"))));
    defs.rule("real_number", || t("NUMBER"));
    defs.rule("imaginary_number", || t("NUMBER"));
    defs.rule("capture_pattern", || nt("pattern_capture_target"));
    defs.rule("pattern_capture_target", || seq!(
        t("NAME"),
        note("not '_', not followed by '.', '(', or '='"),
    ));
    defs.rule("wildcard_pattern", || t("_"));
    defs.rule("value_pattern", || nt("attr"));
    defs.rule("attr", || seq!(nt("name_or_attr"), t("."), t("NAME")));
    defs.rule("name_or_attr", || choice!(nt("attr"), t("NAME")));
    defs.rule("group_pattern", || seq!(t("("), nt("pattern"), t(")")));
    defs.rule("sequence_pattern", || choice!(
        seq!(t("["), opt(nt("maybe_sequence_pattern")), t("]")),
        seq!(t("("), opt(nt("open_sequence_pattern")), t(")")),
    ));
    defs.rule("open_sequence_pattern", || seq!(
        nt("maybe_star_pattern"),
        t(","),
        opt(nt("maybe_sequence_pattern")),
    ));
    defs.rule("maybe_sequence_pattern", || seq!(
        gather(t(","), nt("maybe_star_pattern")),
        opt(t(",")),
    ));
    defs.rule("maybe_star_pattern", || choice!(nt("star_pattern"), nt("pattern")));
    defs.rule("star_pattern", || choice!(
        seq!(t("*"), nt("pattern_capture_target")),
        seq!(t("*"), nt("wildcard_pattern")),
    ));
    defs.rule("mapping_pattern", || choice!(
        seq!(t("{"), t("}")),
        seq!(t("{"), nt("double_star_pattern"), opt(t(",")), t("}")),
        seq!(t("{"), nt("items_pattern"), t(","), nt("double_star_pattern"), opt(t(",")), t("}")),
        seq!(t("{"), nt("items_pattern"), opt(t(",")), t("}")),
    ));
    defs.rule("items_pattern", || seq!(
        gather(t(","), nt("key_value_pattern")),
    ));
    defs.rule("key_value_pattern", || seq!(
        choice!(nt("literal_expr"), nt("attr")),
        t(":"),
        nt("pattern"),
    ));
    defs.rule("double_star_pattern", || seq!(t("**"), nt("pattern_capture_target")));
    defs.rule("class_pattern", || choice!(
        seq!(nt("name_or_attr"), t("("), t(")")),
        seq!(nt("name_or_attr"), t("("), nt("positional_patterns"), opt(t(",")), t(")")),
        seq!(nt("name_or_attr"), t("("), nt("keyword_patterns"), opt(t(",")), t(")")),
        seq!(
            nt("name_or_attr"),
            t("("),
            nt("positional_patterns"),
            t(","),
            nt("keyword_patterns"),
            opt(t(",")),
            t(")"),
        ),
    ));
    defs.rule("positional_patterns", || gather(t(","), nt("pattern")));
    defs.rule("keyword_patterns", || seq!(
        gather(t(","), nt("keyword_pattern")),
    ));
    defs.rule("keyword_pattern", || seq!(t("NAME"), t("="), nt("pattern")));

    // Type statement.
    defs.rule("type_alias", || seq!(
        soft("type"),
        t("NAME"),
        opt(nt("type_params")),
        t("="),
        nt("expression"),
    ));
    defs.rule("type_params", || seq!(t("["), nt("type_param_seq"), t("]")));
    defs.rule("type_param_seq", || seq!(
        gather(t(","), nt("type_param")),
        opt(t(",")),
    ));
    defs.rule("type_param", || choice!(
        seq!(t("NAME"), opt(nt("type_param_bound")), opt(nt("type_param_default"))),
        seq!(t("*"), t("NAME"), opt(nt("type_param_starred_default"))),
        seq!(t("**"), t("NAME"), opt(nt("type_param_default"))),
    ));
    defs.rule("type_param_bound", || seq!(t(":"), nt("expression")));
    defs.rule("type_param_default", || seq!(t("="), nt("expression")));
    defs.rule("type_param_starred_default", || seq!(t("="), nt("star_expression")));
}
