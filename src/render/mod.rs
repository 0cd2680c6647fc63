// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railgram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Unicode text rendering for railroad diagrams.
//!
//! The renderer is one consumer of the abstract [`crate::compile::Diagram`]; anything else that
//! draws diagrams can start from the same value (or its JSON form).

pub mod canvas;
pub mod railroad;
pub(crate) mod text;

pub use canvas::{Canvas, CanvasError};
pub use railroad::{render_diagram_unicode, render_railroad_unicode, RailroadRenderError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Longest label drawn in full; longer ones end in `…`.
    pub max_label_width: Option<usize>,
    pub show_comments: bool,
    /// Quote keywords and punctuation the way PEG source does (`'if'`, `"match"`).
    pub quote_literals: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_label_width: None,
            show_comments: true,
            quote_literals: true,
        }
    }
}
