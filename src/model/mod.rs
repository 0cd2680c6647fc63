// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railgram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Grammar expression trees, the rule registry that produces them by name, and the section
//! index that groups rule names for display.

pub mod expr;
pub mod ids;
pub mod registry;
pub mod section;
pub mod xref;

pub use expr::{Expr, InvalidGrammarError, Terminal, TerminalKind};
pub use ids::{Id, IdError, RuleName, RuleTag, SectionId, SectionTag};
pub use registry::{DuplicateRuleWarning, Producer, Registry, RuleEntry, UnknownRuleError};
pub use section::{Section, SectionError, SectionIndex, SectionReport};
pub use xref::{RefStatus, RuleXRef};
