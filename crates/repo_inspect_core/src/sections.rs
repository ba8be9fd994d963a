//! Section names and the allow-list filter shared by collection and rendering.

use std::fmt;

#[cfg(test)]
#[path = "sections_tests.rs"]
mod tests;

/// One governance facet of a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Settings,
    Rulesets,
    Collaborators,
    Teams,
    Security,
    Labels,
    Milestones,
}

impl Section {
    /// Every section, in collection order.
    pub const ALL: [Section; 7] = [
        Section::Settings,
        Section::Rulesets,
        Section::Collaborators,
        Section::Teams,
        Section::Security,
        Section::Labels,
        Section::Milestones,
    ];

    /// The name used on the command line and in the filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Settings => "settings",
            Section::Rulesets => "rulesets",
            Section::Collaborators => "collaborators",
            Section::Teams => "teams",
            Section::Security => "security",
            Section::Labels => "labels",
            Section::Milestones => "milestones",
        }
    }

    /// Human readable name used in diagnostics.
    pub fn description(&self) -> &'static str {
        match self {
            Section::Settings => "repository settings",
            Section::Security => "security settings",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns `true` when `section` passes the allow-list `filter`.
///
/// An empty filter includes everything. Otherwise the match is exact and
/// case-sensitive; unknown names simply never match.
pub fn included<S: AsRef<str>>(filter: &[S], section: &str) -> bool {
    filter.is_empty() || filter.iter().any(|s| s.as_ref() == section)
}

/// User-supplied allow-list of sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionFilter {
    sections: Vec<String>,
}

impl SectionFilter {
    pub fn new(sections: Vec<String>) -> Self {
        Self { sections }
    }

    /// A filter that includes every section.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn includes(&self, section: Section) -> bool {
        self.includes_name(section.as_str())
    }

    pub fn includes_name(&self, name: &str) -> bool {
        included(&self.sections, name)
    }

    /// Filter entries that name no known section.
    pub fn unknown_names(&self) -> Vec<&str> {
        self.sections
            .iter()
            .map(String::as_str)
            .filter(|name| !Section::ALL.iter().any(|s| s.as_str() == *name))
            .collect()
    }
}
