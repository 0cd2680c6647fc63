// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railgram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Entry points, simple statements, imports and compound statements.

use super::dsl::{choice, gather, kw, many0, many1, note, nt, opt, seq, t};
use super::RuleDefs;

pub(super) fn define(defs: &mut RuleDefs) {
    // Starting rules.
    defs.rule("file", || seq!(opt(nt("statements")), t("ENDMARKER")));
    defs.rule("interactive", || nt("statement_newline"));
    defs.rule("eval", || seq!(nt("expressions"), many0(t("NEWLINE")), t("ENDMARKER")));
    defs.rule("func_type", || seq!(
        t("("),
        opt(nt("type_expressions")),
        t(")"),
        t("->"),
        nt("expression"),
        many0(t("NEWLINE")),
        t("ENDMARKER"),
    ));

    // General statements.
    defs.rule("statements", || many1(nt("statement")));
    defs.rule("statement", || choice!(nt("compound_stmt"), nt("simple_stmts")));
    defs.rule("statement_newline", || choice!(
        seq!(nt("compound_stmt"), t("NEWLINE")),
        nt("simple_stmts"),
        t("NEWLINE"),
        t("ENDMARKER"),
    ));
    defs.rule("simple_stmts", || choice!(
        seq!(nt("simple_stmt"), t("NEWLINE")),
        seq!(gather(t(";"), nt("simple_stmt")), opt(t(";")), t("NEWLINE")),
    ));
    defs.rule("simple_stmt", || choice!(
        nt("assignment"),
        nt("type_alias"),
        nt("star_expressions"),
        nt("return_stmt"),
        nt("import_stmt"),
        nt("raise_stmt"),
        nt("pass_stmt"),
        nt("del_stmt"),
        nt("yield_stmt"),
        nt("assert_stmt"),
        nt("break_stmt"),
        nt("continue_stmt"),
        nt("global_stmt"),
        nt("nonlocal_stmt"),
    ));
    defs.rule("compound_stmt", || choice!(
        nt("function_def"),
        nt("if_stmt"),
        nt("class_def"),
        nt("with_stmt"),
        nt("for_stmt"),
        nt("try_stmt"),
        nt("while_stmt"),
        nt("match_stmt"),
    ));

    // Simple statements.
    defs.rule("assignment", || choice!(
        seq!(t("NAME"), t(":"), nt("expression"), opt(seq!(t("="), nt("annotated_rhs")))),
        seq!(
            choice!(
                seq!(t("("), nt("single_target"), t(")")),
                nt("single_subscript_attribute_target"),
            ),
            t(":"),
            nt("expression"),
            opt(seq!(t("="), nt("annotated_rhs"))),
        ),
        seq!(many1(seq!(nt("star_targets"), t("="))), nt("annotated_rhs"), opt(t("TYPE_COMMENT"))),
        seq!(nt("single_target"), nt("augassign"), nt("annotated_rhs")),
    ));
    defs.rule("annotated_rhs", || choice!(nt("yield_expr"), nt("star_expressions")));
    defs.rule("augassign", || choice!(
        t("+="),
        t("-="),
        t("*="),
        t("@="),
        t("/="),
        t("%="),
        t("&="),
        t("|="),
        t("^="),
        t("<<="),
        t(">>="),
        t("**="),
        t("//="),
    ));
    defs.rule("return_stmt", || seq!(kw("return"), opt(nt("star_expressions"))));
    defs.rule("raise_stmt", || choice!(
        seq!(kw("raise"), nt("expression"), opt(seq!(kw("from"), nt("expression")))),
        kw("raise"),
    ));
    defs.rule("pass_stmt", || kw("pass"));
    defs.rule("break_stmt", || kw("break"));
    defs.rule("continue_stmt", || kw("continue"));
    defs.rule("global_stmt", || seq!(kw("global"), t("NAME"), many0(seq!(t(","), t("NAME")))));
    defs.rule("nonlocal_stmt", || seq!(kw("nonlocal"), t("NAME"), many0(seq!(t(","), t("NAME")))));
    defs.rule("del_stmt", || seq!(kw("del"), nt("del_targets")));
    defs.rule("yield_stmt", || nt("yield_expr"));
    defs.rule("assert_stmt", || seq!(
        kw("assert"),
        nt("expression"),
        opt(seq!(t(","), nt("expression"))),
    ));

    // Import statements.
    defs.rule("import_stmt", || choice!(nt("import_name"), nt("import_from")));
    defs.rule("import_name", || seq!(kw("import"), nt("dotted_as_names")));
    defs.rule("import_from", || choice!(
        seq!(
            kw("from"),
            many0(choice!(t("."), t("..."))),
            nt("dotted_name"),
            kw("import"),
            nt("import_from_targets"),
        ),
        seq!(kw("from"), many1(choice!(t("."), t("..."))), kw("import"), nt("import_from_targets")),
    ));
    defs.rule("import_from_targets", || choice!(
        seq!(t("("), nt("import_from_as_names"), opt(t(",")), t(")")),
        nt("import_from_as_names"),
        t("*"),
    ));
    defs.rule("import_from_as_names", || seq!(
        gather(t(","), nt("import_from_as_name")),
    ));
    defs.rule("import_from_as_name", || seq!(t("NAME"), opt(seq!(kw("as"), t("NAME")))));
    defs.rule("dotted_as_names", || seq!(
        gather(t(","), nt("dotted_as_name")),
    ));
    defs.rule("dotted_as_name", || seq!(nt("dotted_name"), opt(seq!(kw("as"), t("NAME")))));
    defs.rule("dotted_name", || seq!(t("NAME"), many0(seq!(t("."), t("NAME")))));

    // Compound statement building blocks.
    defs.rule("block", || choice!(
        seq!(t("NEWLINE"), t("INDENT"), nt("statements"), t("DEDENT")),
        nt("simple_stmts"),
    ));
    defs.rule("decorators", || many1(seq!(t("@"), nt("named_expression"), t("NEWLINE"))));

    // Class definitions.
    defs.rule("class_def", || choice!(
        seq!(nt("decorators"), nt("class_def_raw")),
        nt("class_def_raw"),
    ));
    defs.rule("class_def_raw", || seq!(
        kw("class"),
        t("NAME"),
        opt(nt("type_params")),
        opt(seq!(t("("), opt(nt("arguments")), t(")"))),
        t(":"),
        nt("block"),
    ));

    // Function definitions.
    defs.rule("function_def", || choice!(
        seq!(nt("decorators"), nt("function_def_raw")),
        nt("function_def_raw"),
    ));
    defs.rule("function_def_raw", || choice!(
        seq!(
            kw("def"),
            t("NAME"),
            opt(nt("type_params")),
            t("("),
            opt(nt("params")),
            t(")"),
            opt(seq!(t("->"), nt("expression"))),
            t(":"),
            opt(nt("func_type_comment")),
            nt("block"),
        ),
        seq!(
            kw("async"),
            kw("def"),
            t("NAME"),
            opt(nt("type_params")),
            t("("),
            opt(nt("params")),
            t(")"),
            opt(seq!(t("->"), nt("expression"))),
            t(":"),
            opt(nt("func_type_comment")),
            nt("block"),
        ),
    ));

    // Function parameters.
    defs.rule("params", || nt("parameters"));
    defs.rule("parameters", || choice!(
        seq!(
            nt("slash_no_default"),
            many0(nt("param_no_default")),
            many0(nt("param_with_default")),
            opt(nt("star_etc")),
        ),
        seq!(nt("slash_with_default"), many0(nt("param_with_default")), opt(nt("star_etc"))),
        seq!(many1(nt("param_no_default")), many0(nt("param_with_default")), opt(nt("star_etc"))),
        seq!(many1(nt("param_with_default")), opt(nt("star_etc"))),
        nt("star_etc"),
    ));
    defs.rule("slash_no_default", || seq!(
        many1(nt("param_no_default")),
        t("/"),
        choice!(t(","), note("&')'")),
    ));
    defs.rule("slash_with_default", || seq!(
        many0(nt("param_no_default")),
        many1(nt("param_with_default")),
        t("/"),
        choice!(t(","), note("&')'")),
    ));
    defs.rule("star_etc", || choice!(
        seq!(t("*"), nt("param_no_default"), many0(nt("param_maybe_default")), opt(nt("kwds"))),
        seq!(
            t("*"),
            nt("param_no_default_star_annotation"),
            many0(nt("param_maybe_default")),
            opt(nt("kwds")),
        ),
        seq!(t("*"), t(","), many1(nt("param_maybe_default")), opt(nt("kwds"))),
        nt("kwds"),
    ));
    defs.rule("kwds", || seq!(t("**"), nt("param_no_default")));
    defs.rule("param_no_default", || seq!(
        nt("param"),
        choice!(seq!(t(","), opt(t("TYPE_COMMENT"))), seq!(opt(t("TYPE_COMMENT")), note("&')'"))),
    ));
    defs.rule("param_no_default_star_annotation", || seq!(
        nt("param_star_annotation"),
        choice!(seq!(t(","), opt(t("TYPE_COMMENT"))), seq!(opt(t("TYPE_COMMENT")), note("&')'"))),
    ));
    defs.rule("param_with_default", || seq!(
        nt("param"),
        nt("default"),
        choice!(seq!(t(","), opt(t("TYPE_COMMENT"))), seq!(opt(t("TYPE_COMMENT")), note("&')'"))),
    ));
    defs.rule("param_maybe_default", || seq!(
        nt("param"),
        opt(nt("default")),
        choice!(seq!(t(","), opt(t("TYPE_COMMENT"))), seq!(opt(t("TYPE_COMMENT")), note("&')'"))),
    ));
    defs.rule("param", || seq!(t("NAME"), opt(nt("annotation"))));
    defs.rule("param_star_annotation", || seq!(t("NAME"), nt("star_annotation")));
    defs.rule("annotation", || seq!(t(":"), nt("expression")));
    defs.rule("star_annotation", || seq!(t(":"), nt("star_expression")));
    defs.rule("default", || seq!(t("="), nt("expression")));

    // If statement.
    defs.rule("if_stmt", || choice!(
        seq!(kw("if"), nt("named_expression"), t(":"), nt("block"), nt("elif_stmt")),
        seq!(kw("if"), nt("named_expression"), t(":"), nt("block"), opt(nt("else_block"))),
    ));
    defs.rule("elif_stmt", || choice!(
        seq!(kw("elif"), nt("named_expression"), t(":"), nt("block"), nt("elif_stmt")),
        seq!(kw("elif"), nt("named_expression"), t(":"), nt("block"), opt(nt("else_block"))),
    ));
    defs.rule("else_block", || seq!(kw("else"), t(":"), nt("block")));

    // While statement.
    defs.rule("while_stmt", || seq!(
        kw("while"),
        nt("named_expression"),
        t(":"),
        nt("block"),
        opt(nt("else_block")),
    ));

    // For statement.
    defs.rule("for_stmt", || choice!(
        seq!(
            kw("for"),
            nt("star_targets"),
            kw("in"),
            nt("star_expressions"),
            t(":"),
            opt(t("TYPE_COMMENT")),
            nt("block"),
            opt(nt("else_block")),
        ),
        seq!(
            kw("async"),
            kw("for"),
            nt("star_targets"),
            kw("in"),
            nt("star_expressions"),
            t(":"),
            opt(t("TYPE_COMMENT")),
            nt("block"),
            opt(nt("else_block")),
        ),
    ));

    // With statement.
    defs.rule("with_stmt", || choice!(
        seq!(
            kw("with"),
            t("("),
            gather(t(","), nt("with_item")),
            opt(t(",")),
            t(")"),
            t(":"),
            opt(t("TYPE_COMMENT")),
            nt("block"),
        ),
        seq!(
            kw("with"),
            gather(t(","), nt("with_item")),
            t(":"),
            opt(t("TYPE_COMMENT")),
            nt("block"),
        ),
        seq!(
            kw("async"),
            kw("with"),
            t("("),
            gather(t(","), nt("with_item")),
            opt(t(",")),
            t(")"),
            t(":"),
            nt("block"),
        ),
        seq!(
            kw("async"),
            kw("with"),
            gather(t(","), nt("with_item")),
            t(":"),
            opt(t("TYPE_COMMENT")),
            nt("block"),
        ),
    ));
    defs.rule("with_item", || choice!(
        seq!(nt("expression"), kw("as"), nt("star_target")),
        nt("expression"),
    ));

    // Try statement.
    defs.rule("try_stmt", || choice!(
        seq!(kw("try"), t(":"), nt("block"), nt("finally_block")),
        seq!(
            kw("try"),
            t(":"),
            nt("block"),
            many1(nt("except_block")),
            opt(nt("else_block")),
            opt(nt("finally_block")),
        ),
        seq!(
            kw("try"),
            t(":"),
            nt("block"),
            many1(nt("except_star_block")),
            opt(nt("else_block")),
            opt(nt("finally_block")),
        ),
    ));
    defs.rule("except_block", || choice!(
        seq!(kw("except"), nt("expression"), t(":"), nt("block")),
        seq!(kw("except"), nt("expression"), kw("as"), t("NAME"), t(":"), nt("block")),
        seq!(kw("except"), nt("expressions"), t(":"), nt("block")),
        seq!(kw("except"), t(":"), nt("block")),
    ));
    defs.rule("except_star_block", || choice!(
        seq!(kw("except"), t("*"), nt("expression"), t(":"), nt("block")),
        seq!(kw("except"), t("*"), nt("expression"), kw("as"), t("NAME"), t(":"), nt("block")),
        seq!(kw("except"), t("*"), nt("expressions"), t(":"), nt("block")),
    ));
    defs.rule("finally_block", || seq!(kw("finally"), t(":"), nt("block")));
}
