// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railgram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::dsl::{choice, gather, many0, many1, note, nt, opt, seq, t};
use super::RuleDefs;

pub(super) fn define(defs: &mut RuleDefs) {
    // Assignment targets.
    defs.rule("star_targets", || choice!(
        nt("star_target"),
        seq!(gather(t(","), nt("star_target")), opt(t(","))),
    ));
    defs.rule("star_targets_list_seq", || seq!(
        gather(t(","), nt("star_target")),
        opt(t(",")),
    ));
    defs.rule("star_targets_tuple_seq", || choice!(
        seq!(nt("star_target"), many1(seq!(t(","), nt("star_target"))), opt(t(","))),
        seq!(nt("star_target"), t(",")),
    ));
    defs.rule("star_target", || choice!(
        seq!(t("*"), nt("star_target")),
        nt("target_with_star_atom"),
    ));
    defs.rule("target_with_star_atom", || choice!(
        seq!(nt("t_primary"), t("."), t("NAME")),
        seq!(nt("t_primary"), t("["), nt("slices"), t("]")),
        nt("star_atom"),
    ));
    defs.rule("star_atom", || choice!(
        t("NAME"),
        seq!(t("("), nt("target_with_star_atom"), t(")")),
        seq!(t("("), opt(nt("star_targets_tuple_seq")), t(")")),
        seq!(t("["), opt(nt("star_targets_list_seq")), t("]")),
    ));
    defs.rule("single_target", || choice!(
        nt("single_subscript_attribute_target"),
        t("NAME"),
        seq!(t("("), nt("single_target"), t(")")),
    ));
    defs.rule("single_subscript_attribute_target", || choice!(
        seq!(nt("t_primary"), t("."), t("NAME")),
        seq!(nt("t_primary"), t("["), nt("slices"), t("]")),
    ));
    defs.rule("t_primary", || seq!(
        nt("atom"),
        many0(
            choice!(
                seq!(t("."), t("NAME")),
                seq!(t("["), nt("slices"), t("]")),
                nt("genexp"),
                seq!(t("("), opt(nt("arguments")), t(")")),
            ),
        ),
        note("&t_lookahead"),
    ));
    defs.rule("t_lookahead", || choice!(t("("), t("["), t(".")));

    // Del targets.
    defs.rule("del_targets", || seq!(
        gather(t(","), nt("del_target")),
        opt(t(",")),
    ));
    defs.rule("del_target", || choice!(
        seq!(nt("t_primary"), t("."), t("NAME")),
        seq!(nt("t_primary"), t("["), nt("slices"), t("]")),
        nt("del_t_atom"),
    ));
    defs.rule("del_t_atom", || choice!(
        t("NAME"),
        seq!(t("("), nt("del_target"), t(")")),
        seq!(t("("), opt(nt("del_targets")), t(")")),
        seq!(t("["), opt(nt("del_targets")), t("]")),
    ));

    // Typing elements.
    defs.rule("type_expressions", || choice!(
        seq!(
            gather(t(","), nt("expression")),
            t(","),
            t("*"),
            nt("expression"),
            t(","),
            t("**"),
            nt("expression"),
        ),
        seq!(
            gather(t(","), nt("expression")),
            t(","),
            t("*"),
            nt("expression"),
        ),
        seq!(
            gather(t(","), nt("expression")),
            t(","),
            t("**"),
            nt("expression"),
        ),
        seq!(t("*"), nt("expression"), t(","), t("**"), nt("expression")),
        seq!(t("*"), nt("expression")),
        seq!(t("**"), nt("expression")),
        gather(t(","), nt("expression")),
    ));
    defs.rule("func_type_comment", || choice!(
        seq!(t("NEWLINE"), t("TYPE_COMMENT")),
        t("TYPE_COMMENT"),
    ));
}
