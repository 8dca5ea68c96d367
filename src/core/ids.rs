//! Identifier generation for store records.
//!
//! Ids are `<PREFIX><N>` with `N` zero-padded to at least three digits. The
//! next id is recomputed from whatever is in the collection right now: there
//! is no counter, so deleting the highest-numbered record and asking again
//! hands the same id out a second time.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The collections held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    /// Client projects
    Project,
    /// Staff
    Employee,
    /// Inventory lines
    Material,
    /// Financial transactions
    Transaction,
    /// Quote visits
    Estimate,
}

impl EntityKind {
    /// Fixed id prefix for this kind, including the trailing dash.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Project => "PROJ-",
            Self::Employee => "EMP-",
            Self::Material => "MAT-",
            Self::Transaction => "TRX-",
            Self::Estimate => "EST-",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Employee => "employee",
            Self::Material => "material",
            Self::Transaction => "transaction",
            Self::Estimate => "estimate",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reads the number after the first `-` of an id.
///
/// Only the leading digits of that segment count, so `"PROJ-12b"` yields 12.
/// Ids with no digits there yield `None` and are skipped by [`next_id`].
#[must_use]
pub fn parse_suffix(id: &str) -> Option<u64> {
    let segment = id.split('-').nth(1)?;
    let digits: String = segment
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

/// Formats an id for `kind` with the number padded to three digits.
#[must_use]
pub fn format_id(kind: EntityKind, number: u64) -> String {
    format!("{}{number:03}", kind.prefix())
}

/// Computes the next id for `kind` from the ids currently present.
///
/// Takes the largest parseable suffix (0 when there is none), adds one and
/// formats it with the kind's prefix.
///
/// A suffix too large for `u64` counts as unparseable and is skipped, so an
/// id such as `PROJ-99999999999999999999` does not push the next id past it.
/// Ids issued here never come near that range.
pub fn next_id<'a, I>(kind: EntityKind, ids: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let max = ids.into_iter().filter_map(parse_suffix).max().unwrap_or(0);
    format_id(kind, max.saturating_add(1))
}
