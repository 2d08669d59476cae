//! Scroll-completion percentage for the content container.
//!
//! `completion` is the pure math; [`ScrollProgressMeter`] is the thin stateful
//! wrapper that caches the last value between scroll/resize ticks so rendering
//! collaborators can read it at any time.
//!
//! ## The formula
//!
//! ```text
//! denominator = max(content_height - viewport_height, 1)
//! scrolled    = clamp(-content_top, 0, denominator)
//! progress    = scrolled / denominator * 100
//! ```
//!
//! The `max(…, 1)` guards the division when content fits inside the viewport.
//! In that degenerate case progress jumps straight from 0 to 100 on the first
//! scrolled pixel — accepted boundary behavior, there is nothing meaningful
//! to measure.

use crate::viewport::ScrollMetrics;
use serde::Serialize;

/// Compute the completion percentage for one geometry snapshot.
///
/// Total for any input: non-finite metrics (a detached container reporting
/// NaN geometry, say) yield 0 rather than poisoning the progress bar.
pub fn completion(metrics: ScrollMetrics) -> f64 {
    let denominator = (metrics.content_height - metrics.viewport_height).max(1.0);
    let scrolled = (-metrics.content_top).clamp(0.0, denominator);
    let pct = scrolled / denominator * 100.0;
    if pct.is_finite() { pct.clamp(0.0, 100.0) } else { 0.0 }
}

/// Accessible progressbar values: fixed 0–100 range plus the current value,
/// ready for `aria-valuemin`/`aria-valuemax`/`aria-valuenow`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressReport {
    pub min: f64,
    pub max: f64,
    pub now: f64,
}

/// Holds the last computed progress value between events.
#[derive(Debug, Default)]
pub struct ScrollProgressMeter {
    value: f64,
}

impl ScrollProgressMeter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute from a fresh geometry snapshot. Synchronous and idempotent:
    /// the same metrics always produce the same value.
    pub fn on_metrics(&mut self, metrics: ScrollMetrics) {
        self.value = completion(metrics);
    }

    /// Current progress, in `[0, 100]`. Starts at 0 and keeps the last valid
    /// value while no events arrive.
    pub fn progress(&self) -> f64 {
        self.value
    }

    pub fn report(&self) -> ProgressReport {
        ProgressReport {
            min: 0.0,
            max: 100.0,
            now: self.value,
        }
    }
}
