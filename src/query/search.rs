// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railgram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use regex::RegexBuilder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuleSearchMode {
    #[default]
    Substring,
    Regex,
}

/// Rule names matching `needle`, in input order.
///
/// Unlike [`super::filter`], the needle is used as given (no trimming).
pub fn rule_search<T, I>(
    names: I,
    needle: &str,
    mode: RuleSearchMode,
    case_insensitive: bool,
) -> Result<Vec<T>, regex::Error>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let names = names.into_iter();
    match mode {
        RuleSearchMode::Substring if case_insensitive => {
            let needle = needle.to_lowercase();
            Ok(names
                .filter(|name| name.as_ref().to_lowercase().contains(&needle))
                .collect())
        }
        RuleSearchMode::Substring => Ok(names
            .filter(|name| name.as_ref().contains(needle))
            .collect()),
        RuleSearchMode::Regex => {
            let regex = RegexBuilder::new(needle)
                .case_insensitive(case_insensitive)
                .build()?;
            Ok(names.filter(|name| regex.is_match(name.as_ref())).collect())
        }
    }
}
