// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railgram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout for railroad diagrams.
//!
//! This module computes extents and child placements; drawing happens in [`crate::render`].

pub mod railroad;

pub use railroad::{
    layout_diagram, BoxShape, LayoutKind, LayoutNode, Placed, RailroadLayout, BRANCH_INSET,
    BRANCH_PADDING, SEQUENCE_GAP,
};
