//! Prev/next page sequencing from a fixed ordered page table.
//!
//! The table is injected configuration (see [`crate::config`]), never a
//! constant baked into this module — document sets differ, the sequencing
//! rule doesn't.
//!
//! ## Matching
//!
//! The current location is matched against the table by prefix: after
//! stripping one trailing slash from the location, the *first* entry whose
//! `url` is a prefix of it wins. Prefix (not equality) so that
//! `/docs/commands/deploy` still pagers as `/docs/commands`. No match, or a
//! match with no neighbors on either side, means "render nothing".

use serde::{Deserialize, Serialize};

/// One page in the fixed reading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageEntry {
    pub title: String,
    pub url: String,
}

/// Neighbors of the matched page. At least one side is present — the
/// nothing-to-render cases return `None` from [`sequence`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager<'a> {
    pub prev: Option<&'a PageEntry>,
    pub next: Option<&'a PageEntry>,
}

/// Derive prev/next neighbors for `location` from an ordered page table.
///
/// Returns `None` when the location matches no entry, or when the matched
/// entry has no neighbors (single-page table).
pub fn sequence<'a>(table: &'a [PageEntry], location: &str) -> Option<Pager<'a>> {
    let location = location.strip_suffix('/').unwrap_or(location);
    let index = table.iter().position(|e| location.starts_with(&e.url))?;

    let prev = if index > 0 { table.get(index - 1) } else { None };
    let next = table.get(index + 1);

    if prev.is_none() && next.is_none() {
        return None;
    }
    Some(Pager { prev, next })
}
