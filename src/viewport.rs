//! The viewport-observation capability: the seam between the tracker and
//! whatever rendering surface actually hosts the document.
//!
//! The tracker never touches a real viewport. A platform adapter (a DOM
//! binding, a test fake) implements [`ObservationSource`] and delivers
//! [`ViewportEvent`]s back into [`crate::tracker::ReadingTracker::handle`].
//!
//! ## Watch tokens
//!
//! Every observation cycle gets a fresh [`WatchToken`] when a content root is
//! bound. Adapters must tag every event they deliver with the token of the
//! cycle that produced it; the tracker drops events whose token is stale.
//! This is what makes teardown deterministic: after a rebind, callbacks still
//! in flight from the old root can no longer mutate state.
//!
//! ## The reading band
//!
//! A heading counts as "being read" while it sits inside a horizontal slice
//! of the viewport — below the top 40% and above the bottom 55% by default,
//! i.e. a thin band just above the vertical middle. Adapters translate the
//! band into whatever their platform wants (for an IntersectionObserver,
//! [`ReadingBand::root_margin`]).

use serde::{Deserialize, Serialize};

/// The viewport slice used to decide which heading is currently read.
///
/// Fractions are measured inward from the viewport edges: `top_fraction` is
/// excluded from the top, `bottom_fraction` from the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadingBand {
    pub top_fraction: f64,
    pub bottom_fraction: f64,
}

impl Default for ReadingBand {
    fn default() -> Self {
        Self {
            top_fraction: 0.40,
            bottom_fraction: 0.55,
        }
    }
}

impl ReadingBand {
    /// CSS-style margin string for IntersectionObserver-shaped adapters:
    /// the default band renders as `-40% 0px -55% 0px`.
    pub fn root_margin(&self) -> String {
        format!(
            "-{}% 0px -{}% 0px",
            (self.top_fraction * 100.0).round(),
            (self.bottom_fraction * 100.0).round()
        )
    }
}

/// Identifies one observation cycle (one bound content root).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchToken(pub(crate) u64);

/// Geometry snapshot accompanying scroll/resize events.
///
/// `content_top` is the content root's top offset relative to the viewport —
/// negative once the reader has scrolled past it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub content_top: f64,
    pub content_height: f64,
    pub viewport_height: f64,
}

/// One heading crossing the reading band boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandCrossing {
    /// Anchor id of the heading that crossed.
    pub id: String,
    /// `true` on entry into the band, `false` on exit. Exits are delivered
    /// for completeness but the tracker ignores them.
    pub entered: bool,
}

impl BandCrossing {
    pub fn entered(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entered: true,
        }
    }

    pub fn exited(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entered: false,
        }
    }
}

/// Events a platform adapter delivers into the tracker.
///
/// `Band` carries a whole observation batch: platforms coalesce crossings,
/// and delivery order within the batch is the platform's, not ours.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewportEvent {
    Band {
        token: WatchToken,
        crossings: Vec<BandCrossing>,
    },
    Scroll {
        token: WatchToken,
        metrics: ScrollMetrics,
    },
    Resize {
        token: WatchToken,
        metrics: ScrollMetrics,
    },
}

/// Platform capability for watching headings and the scroll position.
///
/// Contract:
/// - after `observe(token, …)`, every event produced for that cycle carries
///   `token`;
/// - `disconnect(token)` stops delivery for that cycle and must be
///   idempotent (disconnecting an unknown or already-disconnected token is a
///   no-op);
/// - one source serves one tracker; cycles never overlap (the tracker always
///   disconnects the old token before observing a new one).
pub trait ObservationSource {
    /// Start an observation cycle over the given heading ids.
    fn observe(&mut self, token: WatchToken, band: ReadingBand, ids: &[String]);

    /// End an observation cycle.
    fn disconnect(&mut self, token: WatchToken);
}
