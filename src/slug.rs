//! Centralized slug derivation for heading anchors.
//!
//! Every heading that lacks a pre-existing id gets one derived from its text.
//! The derivation is deliberately dumb and deterministic: the same document
//! always produces the same anchors, so deep links stay stable across builds.
//!
//! ## Derivation
//!
//! - `"Getting Started"` → `"getting-started"`
//! - `"  FAQ: Common Errors?  "` → `"faq-common-errors"`
//! - `"!!!"` → `"section"` (nothing slug-worthy survives the strip)
//!
//! ## Collisions
//!
//! Duplicate headings are legal in documents, so an [`SlugAllocator`] tracks
//! every id handed out in one collection pass and suffixes later duplicates
//! with `-1`, `-2`, … in document order. The first heading with a given base
//! keeps the bare slug.

use std::collections::HashSet;

/// Fallback id for headings whose text contains nothing slug-worthy.
const EMPTY_FALLBACK: &str = "section";

/// Derive a URL-safe slug from heading text.
///
/// Lowercases and trims the text, strips everything outside
/// `[a-z0-9 -]`, and collapses whitespace runs to a single hyphen.
/// Returns `"section"` when nothing survives.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped: String = lowered
        .trim()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || c.is_whitespace())
        .collect();

    // Whitespace runs become hyphens wherever they sit. A run left at an
    // edge by the strip (e.g. "a !" → "a ") still becomes a hyphen.
    let mut slug = String::with_capacity(stripped.len());
    let mut in_gap = false;
    for c in stripped.chars() {
        if c.is_whitespace() {
            in_gap = true;
            continue;
        }
        if in_gap {
            slug.push('-');
            in_gap = false;
        }
        slug.push(c);
    }
    if in_gap {
        slug.push('-');
    }

    if slug.is_empty() {
        EMPTY_FALLBACK.to_string()
    } else {
        slug
    }
}

/// Tracks ids assigned during one outline pass and resolves collisions.
#[derive(Debug, Default)]
pub struct SlugAllocator {
    used: HashSet<String>,
}

impl SlugAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pre-existing id verbatim so later derivations avoid it.
    pub fn claim(&mut self, id: &str) {
        self.used.insert(id.to_string());
    }

    /// Derive a unique id from heading text.
    ///
    /// Suffixes `-1`, `-2`, … are tried in increasing order until an unused
    /// id is found, so scanning headings in document order reproduces the
    /// exact same assignment on every pass.
    pub fn assign(&mut self, text: &str) -> String {
        let base = slugify(text);
        let mut candidate = base.clone();
        let mut n = 1;
        while self.used.contains(&candidate) {
            candidate = format!("{base}-{n}");
            n += 1;
        }
        self.used.insert(candidate.clone());
        candidate
    }
}
