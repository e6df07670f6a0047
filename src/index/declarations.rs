use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// The location where a function name is introduced via the `function`
/// keyword.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DeclarationSite {
    /// File containing the declaration.
    pub file: PathBuf,

    /// Line of the declared name's identifier token (1-indexed).
    pub line: usize,
}

impl DeclarationSite {
    pub fn new(file: PathBuf, line: usize) -> Self {
        Self { file, line }
    }
}

impl std::fmt::Display for DeclarationSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file.display(), self.line)
    }
}

/// Mapping from declared function name to its declaration sites.
///
/// Names are case-sensitive and stored trimmed of surrounding whitespace.
/// A name may have multiple sites (same-named functions across modules are
/// all preserved). The usage eliminator prunes this map down to the names
/// with zero confirmed uses; "used" is a property of the name, so removal
/// always drops every site at once.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeclarationIndex {
    entries: HashMap<String, Vec<DeclarationSite>>,
}

impl DeclarationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a declaration site for `name`. Whitespace is trimmed; an
    /// empty name is ignored.
    pub fn record(&mut self, name: &str, site: DeclarationSite) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        self.entries.entry(name.to_string()).or_default().push(site);
    }

    /// All recorded sites for `name`, or `None` if the name is absent
    /// (never declared, or already eliminated).
    pub fn sites(&self, name: &str) -> Option<&[DeclarationSite]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    /// Whether `(file, line)` is one of the recorded declaration sites for
    /// `name`.
    pub fn is_declaration_site(&self, name: &str, file: &Path, line: usize) -> bool {
        self.sites(name)
            .is_some_and(|sites| sites.iter().any(|s| s.file == file && s.line == line))
    }

    /// Remove `name` and all of its sites. Removing an absent name is a
    /// no-op, so removal is idempotent.
    pub fn remove(&mut self, name: &str) -> bool {
        self.entries.remove(name).is_some()
    }

    /// Number of distinct names in the index.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of declaration sites across all names.
    pub fn site_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[DeclarationSite])> {
        self.entries.iter().map(|(name, sites)| (name.as_str(), sites.as_slice()))
    }

    /// Entries sorted by each name's first site (file, then line, then
    /// name), for stable report output.
    pub fn sorted_entries(&self) -> Vec<(&str, &[DeclarationSite])> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|(name_a, sites_a), (name_b, sites_b)| {
            let key_a = sites_a.first().map(|s| (&s.file, s.line));
            let key_b = sites_b.first().map(|s| (&s.file, s.line));
            key_a.cmp(&key_b).then_with(|| name_a.cmp(name_b))
        });
        entries
    }
}
