// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railgram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;

use crate::model::{RuleName, SectionId, SectionIndex};

/// Keeps the names whose lowercase form contains the lowercase, trimmed `query`.
///
/// A blank query keeps everything. Relative order is preserved.
pub fn filter<T, I>(names: I, query: &str) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return names.into_iter().collect();
    }
    names
        .into_iter()
        .filter(|name| name.as_ref().to_lowercase().contains(&query))
        .collect()
}

/// One section after filtering. Sections with no match are kept, with no rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilteredSection {
    pub id: SectionId,
    pub title: String,
    pub rules: Vec<RuleName>,
}

impl FilteredSection {
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Filters every section on its own, in display order.
pub fn filter_sections(index: &SectionIndex, query: &str) -> Vec<FilteredSection> {
    index
        .sections()
        .iter()
        .map(|section| FilteredSection {
            id: section.id().clone(),
            title: section.title().to_owned(),
            rules: filter(section.rules().iter().cloned(), query),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{filter, filter_sections};
    use crate::model::SectionIndex;

    const NAMES: [&str; 5] = [
        "star_expressions",
        "assignment",
        "Expression",
        "lambda_params",
        "expressions",
    ];

    #[rstest]
    #[case("", &NAMES)]
    #[case("   ", &NAMES)]
    #[case("expr", &["star_expressions", "Expression", "expressions"])]
    #[case("  EXPR ", &["star_expressions", "Expression", "expressions"])]
    #[case("lambda", &["lambda_params"])]
    #[case("zzz", &[])]
    fn filters_by_case_insensitive_substring(#[case] query: &str, #[case] expected: &[&str]) {
        assert_eq!(filter(NAMES, query), expected);
    }

    #[rstest]
    #[case("")]
    #[case("s")]
    #[case("ion")]
    #[case("ASSIGN")]
    fn filter_is_idempotent(#[case] query: &str) {
        let once = filter(NAMES, query);
        let twice = filter(once.clone(), query);
        assert_eq!(once, twice);
    }

    #[test]
    fn sections_filter_independently() {
        let index = SectionIndex::from_rows([
            ("s1", "First", &["a", "b"][..]),
            ("s2", "Second", &["b", "c"][..]),
        ])
        .expect("sections");

        let filtered = filter_sections(&index, "b");
        let rules: Vec<Vec<&str>> = filtered
            .iter()
            .map(|section| section.rules.iter().map(|name| name.as_str()).collect())
            .collect();
        assert_eq!(rules, [vec!["b"], vec!["b"]]);

        let filtered = filter_sections(&index, "c");
        assert!(filtered[0].is_empty());
        assert_eq!(filtered[1].rules, ["c"]);

        // Filtering never changes the index itself.
        let s2: Vec<&str> = index
            .rules_of("s2")
            .expect("s2")
            .iter()
            .map(|name| name.as_str())
            .collect();
        assert_eq!(s2, ["b", "c"]);
    }
}
