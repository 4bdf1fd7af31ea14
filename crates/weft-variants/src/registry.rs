//! Pseudo-class and pseudo-element registry.
//!
//! Two immutable tables map variant keys to CSS selector fragments:
//!
//! - the **primary** table, whose keys may be followed by `:` or `-`;
//! - the **colon-only** table, whose keys must be followed by `:` because
//!   the bare word would collide with utility names (`backdrop-blur`).
//!
//! Declaration order is meaningful. A key's position in its table is its
//! canonical sort rank, so rules carrying several variants order their
//! pseudo-classes the way an author would write them: location and form
//! states, then interaction states, then tree-structural classes, then
//! pseudo-elements.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Primary table: `(key, fragment)`; an empty fragment means `:key`.
const PRIMARY: &[(&str, &str)] = &[
    // pseudo-elements that read like pseudo-classes
    ("first-letter", "::first-letter"),
    ("first-line", "::first-line"),
    // location
    ("any-link", ""),
    ("link", ""),
    ("visited", ""),
    ("target", ""),
    ("open", ""),
    // forms
    ("default", ""),
    ("checked", ""),
    ("indeterminate", ""),
    ("placeholder-shown", ""),
    ("autofill", ""),
    ("optional", ""),
    ("required", ""),
    ("valid", ""),
    ("invalid", ""),
    ("in-range", ""),
    ("out-of-range", ""),
    ("read-only", ""),
    ("read-write", ""),
    // content
    ("empty", ""),
    // interactions
    ("focus-within", ""),
    ("hover", ""),
    ("focus", ""),
    ("focus-visible", ""),
    ("active", ""),
    ("enabled", ""),
    ("disabled", ""),
    // tree-structural
    ("root", ""),
    ("even-of-type", ":nth-of-type(even)"),
    ("even", ":nth-child(even)"),
    ("odd-of-type", ":nth-of-type(odd)"),
    ("odd", ":nth-child(odd)"),
    ("first-of-type", ""),
    ("first", ":first-child"),
    ("last-of-type", ""),
    ("last", ":last-child"),
    ("only-child", ""),
    ("only-of-type", ""),
    // pseudo-elements
    ("backdrop-element", "::backdrop"),
    ("placeholder", "::placeholder"),
    ("before", "::before"),
    ("after", "::after"),
    ("selection", "::selection"),
    ("marker", "::marker"),
    ("file", "::file-selector-button"),
];

/// Colon-only table: `(key, fragment)`; an empty fragment means `:key`.
const COLON_ONLY: &[(&str, &str)] = &[("backdrop", "::backdrop")];

/// Which table a key was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    /// Matchable at a `:` or `-` boundary.
    Primary,
    /// Matchable only at a `:` boundary.
    ColonOnly,
}

impl TableKind {
    /// Whether `c` may follow a key of this table.
    #[must_use]
    pub const fn accepts_boundary(self, c: char) -> bool {
        match self {
            Self::Primary => c == ':' || c == '-',
            Self::ColonOnly => c == ':',
        }
    }
}

/// One registry row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PseudoEntry {
    /// Variant key as written in a token (`hover`, `even-of-type`).
    pub key: &'static str,
    /// CSS suffix the key stands for (`:hover`, `::before`).
    pub fragment: String,
    /// `true` for pseudo-elements (`::` fragments).
    pub is_element: bool,
}

impl PseudoEntry {
    fn new(key: &'static str, fragment: &str) -> Self {
        let fragment = if fragment.is_empty() {
            format!(":{key}")
        } else {
            fragment.to_string()
        };
        let is_element = fragment.starts_with("::");
        Self {
            key,
            fragment,
            is_element,
        }
    }
}

/// A key resolved against the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookup<'r> {
    /// The matching row.
    pub entry: &'r PseudoEntry,
    /// Table the row belongs to.
    pub table: TableKind,
    /// Position of the row in its table.
    pub rank: usize,
}

/// A key recognized at the start of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMatch<'r, 'i> {
    /// The registry row.
    pub lookup: Lookup<'r>,
    /// `/name` label between key and boundary, slash included; empty when
    /// absent.
    pub label: &'i str,
    /// Bytes consumed: key, label and the boundary character.
    pub len: usize,
}

/// `/` followed by at least one word character, or empty.
fn leading_label(input: &str) -> &str {
    let Some(name) = input.strip_prefix('/') else {
        return "";
    };
    let end = name
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(name.len());
    if end == 0 { "" } else { &input[..=end] }
}

/// An ordered, immutable key table.
#[derive(Debug)]
pub struct PseudoTable {
    kind: TableKind,
    entries: Vec<PseudoEntry>,
    by_key: HashMap<&'static str, usize>,
}

impl PseudoTable {
    fn build(kind: TableKind, rows: &[(&'static str, &str)]) -> Self {
        let mut entries: Vec<PseudoEntry> = Vec::with_capacity(rows.len());
        let mut by_key = HashMap::with_capacity(rows.len());
        for &(key, fragment) in rows {
            // First declaration fixes the rank; a later duplicate only
            // replaces the fragment.
            if let Some(&rank) = by_key.get(key) {
                entries[rank] = PseudoEntry::new(key, fragment);
                continue;
            }
            let _ = by_key.insert(key, entries.len());
            entries.push(PseudoEntry::new(key, fragment));
        }
        Self {
            kind,
            entries,
            by_key,
        }
    }

    /// Which table this is.
    #[must_use]
    pub const fn kind(&self) -> TableKind {
        self.kind
    }

    /// Rows in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[PseudoEntry] {
        &self.entries
    }

    /// Look up a key in this table only.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Lookup<'_>> {
        self.by_key.get(key).map(|&rank| Lookup {
            entry: &self.entries[rank],
            table: self.kind,
            rank,
        })
    }

    /// Longest key at the start of `input` that is followed by a boundary
    /// this table accepts.
    ///
    /// With `classes_only`, pseudo-element rows are skipped. With `labels`,
    /// a `/name` segment (word characters) may sit between the key and the
    /// boundary.
    #[must_use]
    pub fn match_key<'i>(
        &self,
        input: &'i str,
        classes_only: bool,
        labels: bool,
    ) -> Option<KeyMatch<'_, 'i>> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| !(classes_only && entry.is_element))
            .filter_map(|(rank, entry)| {
                let after_key = input.strip_prefix(entry.key)?;
                let label = if labels { leading_label(after_key) } else { "" };
                let boundary = after_key[label.len()..].chars().next()?;
                self.kind.accepts_boundary(boundary).then(|| KeyMatch {
                    lookup: Lookup {
                        entry,
                        table: self.kind,
                        rank,
                    },
                    label: &after_key[..label.len()],
                    len: entry.key.len() + label.len() + 1,
                })
            })
            .max_by_key(|found| found.lookup.entry.key.len())
    }

    /// Keys joined with `|`, in declaration order.
    #[must_use]
    pub fn alternation(&self, classes_only: bool) -> String {
        self.entries
            .iter()
            .filter(|entry| !(classes_only && entry.is_element))
            .map(|entry| entry.key)
            .collect::<Vec<_>>()
            .join("|")
    }
}

/// The two registry tables.
#[derive(Debug)]
pub struct Registry {
    primary: PseudoTable,
    colon_only: PseudoTable,
}

static REGISTRY: LazyLock<Registry> = LazyLock::new(|| Registry {
    primary: PseudoTable::build(TableKind::Primary, PRIMARY),
    colon_only: PseudoTable::build(TableKind::ColonOnly, COLON_ONLY),
});

impl Registry {
    /// The process-wide registry.
    #[must_use]
    pub fn global() -> &'static Self {
        &REGISTRY
    }

    /// The primary table.
    #[must_use]
    pub const fn primary(&self) -> &PseudoTable {
        &self.primary
    }

    /// The colon-only table.
    #[must_use]
    pub const fn colon_only(&self) -> &PseudoTable {
        &self.colon_only
    }

    /// Both tables, primary first.
    #[must_use]
    pub const fn tables(&self) -> [&PseudoTable; 2] {
        [&self.primary, &self.colon_only]
    }

    /// Look up `key`, primary table first.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<Lookup<'_>> {
        self.primary
            .get(key)
            .or_else(|| self.colon_only.get(key))
    }

    /// Selector fragment for `key`.
    ///
    /// Unknown keys are not an error: they are taken to be pseudo-classes
    /// this registry does not list yet and resolve to `:key`.
    #[must_use]
    pub fn resolve(&self, key: &str) -> String {
        self.lookup(key)
            .map_or_else(|| format!(":{key}"), |found| found.entry.fragment.clone())
    }

    /// Canonical sort rank of `key` within the table that holds it.
    #[must_use]
    pub fn rank(&self, key: &str) -> Option<usize> {
        self.lookup(key).map(|found| found.rank)
    }

    /// Match a key at the start of `input`: the primary table at a `:`/`-`
    /// boundary, then the colon-only table at a `:` boundary.
    #[must_use]
    pub fn match_key<'i>(
        &self,
        input: &'i str,
        classes_only: bool,
        labels: bool,
    ) -> Option<KeyMatch<'_, 'i>> {
        self.primary
            .match_key(input, classes_only, labels)
            .or_else(|| self.colon_only.match_key(input, classes_only, labels))
    }

    /// Keys of both tables joined with `|`, primary first.
    #[must_use]
    pub fn alternation(&self, classes_only: bool) -> String {
        self.tables()
            .iter()
            .map(|table| table.alternation(classes_only))
            .filter(|keys| !keys.is_empty())
            .collect::<Vec<_>>()
            .join("|")
    }
}

/// Selector fragment for `key` in the global registry.
#[must_use]
pub fn resolve(key: &str) -> String {
    Registry::global().resolve(key)
}

/// Canonical sort rank of `key` in the global registry.
#[must_use]
pub fn rank(key: &str) -> Option<usize> {
    Registry::global().rank(key)
}
