// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railgram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Display width in cells; one cell per `char`.
pub(crate) fn text_len(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `max_len` cells, ending in `…` when anything was cut.
pub(crate) fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    match max_len {
        0 => String::new(),
        _ if text_len(text) <= max_len => text.to_owned(),
        1 => "…".to_owned(),
        _ => text.chars().take(max_len - 1).chain(['…']).collect(),
    }
}
