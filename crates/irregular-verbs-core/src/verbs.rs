//! Verb entries and the deduplicated, sorted verb table.
//!
//! [`build_table`] is the only way to obtain a [`VerbTable`], so every table
//! handed to the renderer is already unique by base form and sorted.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One irregular verb: base form, past tense, past participle.
///
/// Alternate forms stay in a single slash-delimited string
/// (`"burnt/burned"`); they are rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct VerbEntry {
    /// Present / infinitive form. Unique key within a table.
    pub base: String,
    /// Simple past form(s).
    pub past: String,
    /// Past participle form(s).
    pub past_participle: String,
}

impl VerbEntry {
    /// Create an entry from its three forms.
    pub fn new(
        base: impl Into<String>,
        past: impl Into<String>,
        past_participle: impl Into<String>,
    ) -> Self {
        Self {
            base: base.into(),
            past: past.into(),
            past_participle: past_participle.into(),
        }
    }

    /// The three cells of this entry in column order.
    pub fn cells(&self) -> [&str; 3] {
        [&self.base, &self.past, &self.past_participle]
    }
}

/// An ordered, duplicate-free sequence of verbs, sorted ascending by base.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VerbTable {
    entries: Vec<VerbEntry>,
}

impl VerbTable {
    /// Number of verbs (data rows) in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no verbs.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries in sorted order.
    pub fn entries(&self) -> &[VerbEntry] {
        &self.entries
    }

    /// Iterate over the entries in sorted order.
    pub fn iter(&self) -> std::slice::Iter<'_, VerbEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a VerbTable {
    type Item = &'a VerbEntry;
    type IntoIter = std::slice::Iter<'a, VerbEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Deduplicate raw entries by base form and sort them.
///
/// The first entry seen for a base wins; later entries with the same base are
/// dropped even if their other forms differ. Sorting is plain lexicographic
/// string order on `base`.
#[tracing::instrument(skip_all)]
pub fn build_table<I>(raw_entries: I) -> VerbTable
where
    I: IntoIterator<Item = VerbEntry>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut entries: Vec<VerbEntry> = Vec::new();

    for entry in raw_entries {
        if seen.insert(entry.base.clone()) {
            entries.push(entry);
        } else {
            tracing::debug!(base = %entry.base, "dropping duplicate verb");
        }
    }

    entries.sort_by(|a, b| a.base.cmp(&b.base));
    tracing::debug!(verbs = entries.len(), "verb table built");

    VerbTable { entries }
}
