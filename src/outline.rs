//! Outline collection: heading nodes → an ordered, uniquely-identified outline.
//!
//! The collector is the first stage of the tracker: a rendering collaborator
//! hands over its heading nodes (levels 2–4; the page title h1 and anything
//! deeper than h4 are skipped) and gets back an [`Outline`] suitable for a
//! table-of-contents rail with `#id` anchors.
//!
//! ## Identity assignment
//!
//! Headings that already carry an id keep it untouched. Headings without one
//! get a slug derived from their text (see [`crate::slug`]), written back onto
//! the node so in-page anchors resolve. The write-back is idempotent: a second
//! pass over unchanged content finds the ids already assigned, claims them
//! verbatim, and produces the identical outline — suffix numbers included —
//! because nodes are scanned in stable document order.
//!
//! ## Degradation
//!
//! No heading nodes (content not yet rendered, or a headingless page) is not
//! an error: the collector returns an empty outline and touches nothing.

use crate::slug::SlugAllocator;
use serde::Serialize;

/// Heading levels the outline includes. The h1 is the page title, not a
/// section; below h4 the rail gets too noisy to be useful.
const MIN_LEVEL: u8 = 2;
const MAX_LEVEL: u8 = 4;

/// One outline entry: a section anchor plus display data for the rail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// Anchor id, unique within the outline.
    pub id: String,
    /// Display text. Falls back to the id when the heading text is empty.
    pub title: String,
    /// Structural depth: 2, 3, or 4.
    pub level: u8,
}

/// Capability the collector needs from a rendered heading.
///
/// Decouples slug/outline logic from any particular rendering technology:
/// a DOM adapter, the bundled [`crate::markdown`] source, and test fakes all
/// implement the same four methods.
pub trait HeadingNode {
    /// Structural depth (1–6; the collector only keeps 2–4).
    fn level(&self) -> u8;
    /// The heading's flattened text content.
    fn text(&self) -> &str;
    /// Pre-existing stable id, if the node already has one.
    fn id(&self) -> Option<&str>;
    /// Write a computed id onto the node. Called at most once per node, and
    /// only for nodes whose `id()` was `None`.
    fn assign_id(&mut self, id: &str);
}

/// Collect an ordered outline from heading nodes in document order.
///
/// Levels outside 2–4 are skipped entirely (they neither appear in the
/// outline nor consume slugs). Every returned [`Heading`] has an id no other
/// entry in the same outline shares.
pub fn collect<N: HeadingNode>(nodes: &mut [N]) -> Vec<Heading> {
    let mut alloc = SlugAllocator::new();
    let mut outline = Vec::new();

    for node in nodes {
        let level = node.level();
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            continue;
        }

        let id = match node.id() {
            Some(existing) => {
                let existing = existing.to_string();
                alloc.claim(&existing);
                existing
            }
            None => {
                let assigned = alloc.assign(node.text());
                node.assign_id(&assigned);
                assigned
            }
        };

        let text = node.text();
        let title = if text.is_empty() {
            id.clone()
        } else {
            text.to_string()
        };

        outline.push(Heading { id, title, level });
    }

    outline
}
