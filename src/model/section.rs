// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railgram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use smol_str::SmolStr;

use super::ids::{IdError, RuleName, SectionId};
use super::registry::Registry;

/// A titled, ordered group of rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    id: SectionId,
    title: SmolStr,
    rules: Vec<RuleName>,
}

impl Section {
    pub fn new(id: SectionId, title: impl Into<SmolStr>, rules: Vec<RuleName>) -> Self {
        Self {
            id,
            title: title.into(),
            rules,
        }
    }

    pub fn id(&self) -> &SectionId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rules(&self) -> &[RuleName] {
        &self.rules
    }
}

/// Sections in display order. Built once, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SectionIndex {
    sections: Vec<Section>,
}

impl SectionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index from `(id, title, rules)` rows.
    pub fn from_rows<'a>(
        rows: impl IntoIterator<Item = (&'a str, &'a str, &'a [&'a str])>,
    ) -> Result<Self, SectionError> {
        let mut index = Self::new();
        for (id, title, rules) in rows {
            let id = SectionId::new(id)?;
            let rules = rules
                .iter()
                .map(RuleName::new)
                .collect::<Result<Vec<_>, _>>()?;
            index.push(Section::new(id, title, rules))?;
        }
        tracing::debug!(sections = index.len(), "section index initialized");
        Ok(index)
    }

    pub fn push(&mut self, section: Section) -> Result<(), SectionError> {
        if self.get(section.id.as_str()).is_some() {
            return Err(SectionError::DuplicateSection(section.id));
        }
        self.sections.push(section);
        Ok(())
    }

    pub fn sections_in_order(&self) -> impl ExactSizeIterator<Item = &SectionId> + '_ {
        self.sections.iter().map(Section::id)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    pub fn title_of(&self, id: &str) -> Option<&str> {
        self.get(id).map(Section::title)
    }

    pub fn rules_of(&self, id: &str) -> Option<&[RuleName]> {
        self.get(id).map(Section::rules)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Sections containing `rule`, in display order.
    pub fn sections_of<'a>(&'a self, rule: &'a str) -> impl Iterator<Item = &'a Section> + 'a {
        self.sections
            .iter()
            .filter(move |section| section.rules.iter().any(|name| name == rule))
    }

    /// Compares membership against the registry: names no rule defines, and rules no section lists.
    pub fn check_against(&self, registry: &Registry) -> SectionReport {
        let mut listed = HashSet::new();
        let mut unknown = Vec::new();
        for section in &self.sections {
            for rule in &section.rules {
                listed.insert(rule.as_str());
                if !registry.has(rule.as_str()) {
                    unknown.push((section.id.clone(), rule.clone()));
                }
            }
        }
        let unsectioned = registry
            .names()
            .filter(|name| !listed.contains(name.as_str()))
            .cloned()
            .collect();
        SectionReport {
            unknown,
            unsectioned,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SectionReport {
    pub unknown: Vec<(SectionId, RuleName)>,
    pub unsectioned: Vec<RuleName>,
}

impl SectionReport {
    pub fn is_clean(&self) -> bool {
        self.unknown.is_empty() && self.unsectioned.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionError {
    DuplicateSection(SectionId),
    InvalidId(IdError),
}

impl fmt::Display for SectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateSection(id) => write!(f, "section `{id}` is defined more than once"),
            Self::InvalidId(err) => write!(f, "invalid section entry: {err}"),
        }
    }
}

impl std::error::Error for SectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DuplicateSection(_) => None,
            Self::InvalidId(err) => Some(err),
        }
    }
}

impl From<IdError> for SectionError {
    fn from(err: IdError) -> Self {
        Self::InvalidId(err)
    }
}
