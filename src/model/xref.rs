// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railgram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::Serialize;
use smol_str::SmolStr;

use super::ids::RuleName;

/// One `rule -> referenced rule` edge of the rule graph.
///
/// The target is kept as written in the tree; it is not necessarily a registered name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleXRef {
    from: RuleName,
    to: SmolStr,
    status: RefStatus,
}

impl RuleXRef {
    pub fn new(from: RuleName, to: impl Into<SmolStr>, status: RefStatus) -> Self {
        Self {
            from,
            to: to.into(),
            status,
        }
    }

    pub fn from(&self) -> &RuleName {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn status(&self) -> RefStatus {
        self.status
    }

    pub fn is_dangling(&self) -> bool {
        self.status.is_dangling()
    }
}

impl fmt::Display for RuleXRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RefStatus {
    Resolved,
    Dangling,
}

impl RefStatus {
    pub fn from_resolved(resolved: bool) -> Self {
        if resolved {
            Self::Resolved
        } else {
            Self::Dangling
        }
    }

    pub fn is_dangling(self) -> bool {
        self == Self::Dangling
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Resolved => "resolved",
            Self::Dangling => "dangling",
        }
    }
}

impl fmt::Display for RefStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{RefStatus, RuleXRef};
    use crate::model::RuleName;

    #[test]
    fn ref_status_follows_resolution() {
        assert_eq!(RefStatus::from_resolved(true), RefStatus::Resolved);
        assert_eq!(RefStatus::from_resolved(false).to_string(), "dangling");
        assert!(RefStatus::Dangling.is_dangling());
    }

    #[test]
    fn xref_displays_edge_and_status() {
        let from = RuleName::new("del_stmt").expect("rule name");
        let xref = RuleXRef::new(from, "del_targets", RefStatus::Dangling);
        assert!(xref.is_dangling());
        assert_eq!(xref.to_string(), "del_stmt -> del_targets (dangling)");
    }
}
