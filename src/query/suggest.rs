// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railgram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! "Did you mean" ranking for names that are not registered.

use std::cmp::Reverse;

/// Candidates scoring below this are not worth suggesting.
const MIN_SCORE: i64 = 500;

/// Up to `limit` names closest to `needle`, best first. Ties keep input order.
pub fn suggest_rules<T, I>(names: I, needle: &str, limit: usize) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut scored: Vec<(i64, usize, T)> = names
        .into_iter()
        .enumerate()
        .filter_map(|(idx, name)| {
            let score = score(&needle, &name.as_ref().to_lowercase())?;
            Some((score, idx, name))
        })
        .collect();
    scored.sort_by_key(|(score, idx, _)| (Reverse(*score), *idx));
    scored.truncate(limit);
    scored.into_iter().map(|(_, _, name)| name).collect()
}

fn score(needle: &str, haystack: &str) -> Option<i64> {
    if needle == haystack {
        return None;
    }
    let ratio = rapidfuzz::fuzz::ratio(needle.chars(), haystack.chars());
    let mut score = (ratio * 1000.0).round() as i64;
    if haystack.contains(needle) || needle.contains(haystack) {
        score += 300;
    }
    if haystack.starts_with(needle.split('_').next().unwrap_or(needle)) {
        score += 100;
    }
    (score >= MIN_SCORE).then_some(score)
}
