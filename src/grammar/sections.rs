// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railgram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{SectionError, SectionIndex};

/// `(id, title, rules)` in display order.
const SECTIONS: &[(&str, &str, &[&str])] = &[
    (
        "starting",
        "Starting Rules",
        &[
            "file", "interactive", "eval", "func_type",
        ],
    ),
    (
        "statements",
        "General Statements",
        &[
            "statements", "statement", "statement_newline", "simple_stmts", "simple_stmt",
            "compound_stmt",
        ],
    ),
    (
        "simple_stmts",
        "Simple Statements",
        &[
            "assignment", "annotated_rhs", "augassign", "return_stmt", "raise_stmt", "pass_stmt",
            "break_stmt", "continue_stmt", "global_stmt", "nonlocal_stmt", "del_stmt", "yield_stmt",
            "assert_stmt",
        ],
    ),
    (
        "imports",
        "Import Statements",
        &[
            "import_stmt", "import_name", "import_from", "import_from_targets",
            "import_from_as_names", "import_from_as_name", "dotted_as_names", "dotted_as_name",
            "dotted_name",
        ],
    ),
    (
        "compound",
        "Compound Statements",
        &[
            "block", "decorators", "class_def", "class_def_raw", "function_def", "function_def_raw",
        ],
    ),
    (
        "params",
        "Function Parameters",
        &[
            "params", "parameters", "slash_no_default", "slash_with_default", "star_etc", "kwds",
            "param_no_default", "param_no_default_star_annotation", "param_with_default",
            "param_maybe_default", "param", "param_star_annotation", "annotation",
            "star_annotation", "default",
        ],
    ),
    (
        "control",
        "Control Flow (if/while/for/with/try)",
        &[
            "if_stmt", "elif_stmt", "else_block", "while_stmt", "for_stmt", "with_stmt",
            "with_item", "try_stmt", "except_block", "except_star_block", "finally_block",
        ],
    ),
    (
        "match",
        "Pattern Matching",
        &[
            "match_stmt", "subject_expr", "case_block", "guard", "patterns", "pattern",
            "as_pattern", "or_pattern", "closed_pattern", "literal_pattern", "literal_expr",
            "complex_number", "signed_number", "signed_real_number", "real_number",
            "imaginary_number", "capture_pattern", "pattern_capture_target", "wildcard_pattern",
            "value_pattern", "attr", "name_or_attr", "group_pattern", "sequence_pattern",
            "open_sequence_pattern", "maybe_sequence_pattern", "maybe_star_pattern", "star_pattern",
            "mapping_pattern", "items_pattern", "key_value_pattern", "double_star_pattern",
            "class_pattern", "positional_patterns", "keyword_patterns", "keyword_pattern",
        ],
    ),
    (
        "types",
        "Type Statements",
        &[
            "type_alias", "type_params", "type_param_seq", "type_param", "type_param_bound",
            "type_param_default", "type_param_starred_default",
        ],
    ),
    (
        "expressions",
        "Expressions",
        &[
            "expressions", "expression", "yield_expr", "star_expressions", "star_expression",
            "star_named_expressions", "star_named_expression", "assignment_expression",
            "named_expression", "disjunction", "conjunction", "inversion",
        ],
    ),
    (
        "comparison",
        "Comparison Operators",
        &[
            "comparison", "compare_op_bitwise_or_pair", "eq_bitwise_or", "noteq_bitwise_or",
            "lte_bitwise_or", "lt_bitwise_or", "gte_bitwise_or", "gt_bitwise_or",
            "notin_bitwise_or", "in_bitwise_or", "isnot_bitwise_or", "is_bitwise_or",
        ],
    ),
    (
        "bitwise",
        "Bitwise Operators",
        &[
            "bitwise_or", "bitwise_xor", "bitwise_and", "shift_expr",
        ],
    ),
    (
        "arithmetic",
        "Arithmetic Operators",
        &[
            "sum", "term", "factor", "power",
        ],
    ),
    (
        "primary",
        "Primary Elements",
        &[
            "await_primary", "primary", "slices", "slice", "atom", "group",
        ],
    ),
    (
        "lambda",
        "Lambda Functions",
        &[
            "lambdef", "lambda_params", "lambda_parameters", "lambda_slash_no_default",
            "lambda_slash_with_default", "lambda_star_etc", "lambda_kwds",
            "lambda_param_no_default", "lambda_param_with_default", "lambda_param_maybe_default",
            "lambda_param",
        ],
    ),
    (
        "literals",
        "Literals",
        &[
            "fstring_middle", "fstring_replacement_field", "fstring_conversion",
            "fstring_full_format_spec", "fstring_format_spec", "fstring",
            "tstring_format_spec_replacement_field", "tstring_format_spec",
            "tstring_full_format_spec", "tstring_replacement_field", "tstring_middle", "tstring",
            "string", "strings",
        ],
    ),
    (
        "collections",
        "Collections",
        &[
            "list", "tuple", "set", "dict", "double_starred_kvpairs", "double_starred_kvpair",
            "kvpair",
        ],
    ),
    (
        "comprehensions",
        "Comprehensions & Generators",
        &[
            "for_if_clauses", "for_if_clause", "listcomp", "setcomp", "genexp", "dictcomp",
        ],
    ),
    (
        "arguments",
        "Function Call Arguments",
        &[
            "arguments", "args", "kwargs", "starred_expression", "kwarg_or_starred",
            "kwarg_or_double_starred",
        ],
    ),
    (
        "targets",
        "Assignment Targets",
        &[
            "star_targets", "star_targets_list_seq", "star_targets_tuple_seq", "star_target",
            "target_with_star_atom", "star_atom", "single_target",
            "single_subscript_attribute_target", "t_primary", "t_lookahead", "del_targets",
            "del_target", "del_t_atom",
        ],
    ),
    (
        "typing",
        "Typing Elements",
        &[
            "type_expressions", "func_type_comment",
        ],
    ),
];

pub(super) fn build() -> Result<SectionIndex, SectionError> {
    SectionIndex::from_rows(SECTIONS.iter().copied())
}
