//! # Read Rail
//!
//! Reading-position tracking for documentation sites. Given a rendered
//! document's heading structure, read-rail maintains the three values a docs
//! layout renders alongside the content: a stable outline for the
//! table-of-contents rail, the id of the section currently being read, and a
//! scroll-completion percentage. A small pager derives prev/next links from
//! a fixed ordered page table.
//!
//! # Architecture: Capabilities In, Values Out
//!
//! The tracker never touches a rendering surface. Two injected capabilities
//! carry everything platform-specific:
//!
//! ```text
//! HeadingNode        — text/level/id of one rendered heading (+ id write-back)
//! ObservationSource  — reading-band intersection + scroll/resize delivery
//! ```
//!
//! A DOM binding implements both against real elements; tests implement them
//! in memory. Everything above the seam — slug derivation, outline identity,
//! the active-section state machine, progress math, pager sequencing — is
//! plain deterministic Rust:
//!
//! ```text
//! content root ─→ outline::collect ─→ Outline ──────────────→ rail anchors
//!                        │
//!                        └─ ids ─→ ActiveSection ←─ band crossings
//!                                       │
//! scroll/resize metrics ─→ ScrollProgressMeter
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`slug`] | Heading text → URL-safe anchor, deterministic collision suffixing |
//! | [`outline`] | Heading-node capability and outline collection (levels 2–4) |
//! | [`viewport`] | Observation capability: reading band, watch tokens, event types |
//! | [`active`] | Active-section state machine (entry-only updates, last-in-batch wins) |
//! | [`progress`] | Clamped scroll-completion percentage + accessible report |
//! | [`pager`] | Prev/next neighbors from an injected ordered page table |
//! | [`tracker`] | Facade binding one content root, with stale-event guarding |
//! | [`markdown`] | Heading source over pulldown-cmark for CLI and tests |
//! | [`config`] | `pages.toml` loading and validation |
//! | [`output`] | CLI formatting — pure `format_*` functions, `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Watch Tokens Over Unsubscribe Callbacks
//!
//! Viewport platforms deliver events asynchronously, so "stop observing" can
//! race callbacks already in flight. Instead of trusting the platform to
//! stop cleanly, every observation cycle gets a fresh [`viewport::WatchToken`]
//! and every event carries the token of the cycle that produced it. The
//! tracker drops anything stale on arrival. Rebinding to a new document is
//! therefore safe even against a sloppy adapter.
//!
//! ## Entry-Only Active Tracking
//!
//! The active section updates only when a heading *enters* the reading band
//! and never resets when one leaves. Long prose between headings keeps its
//! section highlighted instead of blanking the rail. Two inherited quirks
//! are kept deliberately and pinned by tests rather than "fixed": within one
//! observation batch the last-delivered entry wins (not the topmost), and
//! the active id survives a document swap until the new document's first
//! crossing. See `active` module docs.
//!
//! ## Idempotent Anchor Assignment
//!
//! Outline collection writes derived ids back onto the heading nodes, so a
//! second pass over unchanged content sees them as pre-existing and
//! reproduces the identical outline, suffix numbers included. Deep links
//! never churn across re-renders.
//!
//! ## Injected Page Table
//!
//! The pager's reading order is configuration (`pages.toml`), not a constant:
//! the sequencing rule is universal, the document set never is.
//!
//! Anchor navigation itself (`#id` fragment jumps) stays with the browser's
//! native fragment handling — the tracker produces anchors, it does not
//! scroll to them.

pub mod active;
pub mod config;
pub mod markdown;
pub mod outline;
pub mod output;
pub mod pager;
pub mod progress;
pub mod slug;
pub mod tracker;
pub mod viewport;

#[cfg(test)]
pub(crate) mod test_helpers;
