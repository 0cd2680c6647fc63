// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railgram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over the registry and section index.
//!
//! Queries provide derived views (filtered sections, search hits, suggestions, references) for
//! whatever presents the grammar.

pub mod filter;
pub mod refs;
pub mod search;
pub mod suggest;

pub use filter::{filter, filter_sections, FilteredSection};
pub use refs::{references_of, used_by};
pub use search::{rule_search, RuleSearchMode};
pub use suggest::suggest_rules;
