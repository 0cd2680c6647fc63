// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railgram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Railgram: railroad diagrams for PEG grammars, rendered as Unicode text.
//!
//! The pipeline is `model` (grammar trees, rule registry, sections) → `compile` (diagram nodes)
//! → `layout` (sized grid placement) → `render` (box-drawing canvas). `grammar` ships the CPython
//! PEG grammar as data and `query` holds name filtering and lookup helpers.

pub mod compile;
pub mod grammar;
pub mod layout;
pub mod model;
pub mod query;
pub mod render;
