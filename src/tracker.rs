//! The tracker facade: one content root, one observation cycle.
//!
//! [`ReadingTracker`] wires the three stages together the way a docs layout
//! uses them: bind the rendered content root once it exists, feed every
//! viewport event through [`ReadingTracker::handle`], and read
//! `outline()` / `active_id()` / `progress()` whenever the rail re-renders.
//!
//! ## Observation cycles
//!
//! Each `bind_root` starts a fresh cycle under a new [`WatchToken`]:
//! the previous cycle's token is disconnected from the source *before* the
//! new one is observed, and events still in flight under the old token are
//! dropped on arrival. Dropping the tracker disconnects the live cycle, so
//! release is guaranteed on every exit path.
//!
//! ## Degradation
//!
//! No bound root means an empty outline and no subscriptions; progress keeps
//! its last computed value (0 before any event ever arrived). A bound root
//! with zero headings still subscribes — scroll progress is meaningful on a
//! headingless page even though the rail renders nothing.

use crate::active::ActiveSection;
use crate::outline::{self, Heading, HeadingNode};
use crate::progress::{ProgressReport, ScrollProgressMeter};
use crate::viewport::{ObservationSource, ReadingBand, ViewportEvent, WatchToken};

/// Reading-position tracker for a single document view.
#[derive(Debug)]
pub struct ReadingTracker<S: ObservationSource> {
    source: S,
    band: ReadingBand,
    outline: Vec<Heading>,
    active: ActiveSection,
    meter: ScrollProgressMeter,
    watch: Option<WatchToken>,
    next_token: u64,
}

impl<S: ObservationSource> ReadingTracker<S> {
    pub fn new(source: S) -> Self {
        Self::with_band(source, ReadingBand::default())
    }

    pub fn with_band(source: S, band: ReadingBand) -> Self {
        Self {
            source,
            band,
            outline: Vec::new(),
            active: ActiveSection::new(),
            meter: ScrollProgressMeter::new(),
            watch: None,
            next_token: 0,
        }
    }

    /// Bind a (new) content root: collect its outline and start a fresh
    /// observation cycle over it.
    ///
    /// Any previous cycle is disconnected first. Returns the new cycle's
    /// token — the same one handed to the observation source — so adapters
    /// and tests can tag events with it.
    pub fn bind_root<N: HeadingNode>(&mut self, nodes: &mut [N]) -> WatchToken {
        self.release();

        self.outline = outline::collect(nodes);
        let ids: Vec<String> = self.outline.iter().map(|h| h.id.clone()).collect();
        self.active.observe(ids.iter().cloned());

        let token = WatchToken(self.next_token);
        self.next_token += 1;
        self.source.observe(token, self.band, &ids);
        self.watch = Some(token);
        token
    }

    /// Drop back to the unbound state: empty outline, no subscriptions.
    ///
    /// The active id and progress keep their last values; they only ever
    /// change on events, and no further events will be accepted.
    pub fn clear_root(&mut self) {
        self.release();
        self.outline.clear();
        self.active.detach();
    }

    /// Feed one viewport event through the tracker.
    ///
    /// Events carrying anything but the live cycle's token are dropped —
    /// this includes everything delivered before the first bind and
    /// stragglers from a torn-down cycle.
    pub fn handle(&mut self, event: ViewportEvent) {
        match event {
            ViewportEvent::Band { token, crossings } => {
                if self.watch == Some(token) {
                    self.active.on_crossings(&crossings);
                }
            }
            ViewportEvent::Scroll { token, metrics }
            | ViewportEvent::Resize { token, metrics } => {
                if self.watch == Some(token) {
                    self.meter.on_metrics(metrics);
                }
            }
        }
    }

    /// The current outline, empty when no root is bound.
    pub fn outline(&self) -> &[Heading] {
        &self.outline
    }

    /// Anchor id of the heading currently being read, if any crossing has
    /// arrived yet.
    pub fn active_id(&self) -> Option<&str> {
        self.active.active_id()
    }

    /// Scroll completion in `[0, 100]`.
    pub fn progress(&self) -> f64 {
        self.meter.progress()
    }

    /// Progress with accessible range semantics for a progressbar affordance.
    pub fn progress_report(&self) -> ProgressReport {
        self.meter.report()
    }

    fn release(&mut self) {
        if let Some(token) = self.watch.take() {
            self.source.disconnect(token);
        }
    }
}

impl<S: ObservationSource> Drop for ReadingTracker<S> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{heading, outline_ids, scroll_metrics, FakeSource};
    use crate::viewport::BandCrossing;

    fn doc() -> Vec<crate::test_helpers::FakeHeading> {
        vec![heading(2, "Intro"), heading(2, "Setup"), heading(2, "Usage")]
    }

    #[test]
    fn binding_collects_outline_and_observes_its_ids() {
        let source = FakeSource::new();
        let mut tracker = ReadingTracker::new(source.handle());

        let mut nodes = doc();
        tracker.bind_root(&mut nodes);

        assert_eq!(outline_ids(tracker.outline()), vec!["intro", "setup", "usage"]);
        assert_eq!(source.last_observed_ids(), vec!["intro", "setup", "usage"]);
    }

    #[test]
    fn observes_with_the_configured_band() {
        let source = FakeSource::new();
        let band = ReadingBand {
            top_fraction: 0.30,
            bottom_fraction: 0.60,
        };
        let mut tracker = ReadingTracker::with_band(source.handle(), band);
        tracker.bind_root(&mut doc());
        assert_eq!(source.last_observed_band(), band);
    }

    #[test]
    fn band_event_updates_active_id() {
        let source = FakeSource::new();
        let mut tracker = ReadingTracker::new(source.handle());
        let token = tracker.bind_root(&mut doc());

        tracker.handle(ViewportEvent::Band {
            token,
            crossings: vec![BandCrossing::entered("setup")],
        });
        assert_eq!(tracker.active_id(), Some("setup"));
    }

    #[test]
    fn scroll_and_resize_update_progress() {
        let source = FakeSource::new();
        let mut tracker = ReadingTracker::new(source.handle());
        let token = tracker.bind_root(&mut doc());

        tracker.handle(ViewportEvent::Scroll {
            token,
            metrics: scroll_metrics(-1000.0, 3000.0, 1000.0),
        });
        assert_eq!(tracker.progress(), 50.0);

        tracker.handle(ViewportEvent::Resize {
            token,
            metrics: scroll_metrics(-1000.0, 3000.0, 2000.0),
        });
        assert_eq!(tracker.progress(), 100.0);
    }

    #[test]
    fn events_before_any_bind_are_dropped() {
        let source = FakeSource::new();
        let mut tracker = ReadingTracker::new(source.handle());

        tracker.handle(ViewportEvent::Scroll {
            token: WatchToken(0),
            metrics: scroll_metrics(-1000.0, 3000.0, 1000.0),
        });
        assert_eq!(tracker.progress(), 0.0);
    }

    #[test]
    fn rebind_disconnects_old_cycle_before_observing_new() {
        let source = FakeSource::new();
        let mut tracker = ReadingTracker::new(source.handle());

        let old = tracker.bind_root(&mut doc());
        let mut replacement = vec![heading(2, "Changelog")];
        let new = tracker.bind_root(&mut replacement);

        assert_ne!(old, new);
        assert_eq!(source.disconnected(), vec![old]);
        assert_eq!(source.last_observed_ids(), vec!["changelog"]);
    }

    #[test]
    fn stale_band_events_cannot_mutate_the_new_cycle() {
        let source = FakeSource::new();
        let mut tracker = ReadingTracker::new(source.handle());

        let old = tracker.bind_root(&mut doc());
        let new = tracker.bind_root(&mut vec![heading(2, "Changelog")]);

        // A callback from the old root arrives late.
        tracker.handle(ViewportEvent::Band {
            token: old,
            crossings: vec![BandCrossing::entered("intro")],
        });
        assert_eq!(tracker.active_id(), None);

        tracker.handle(ViewportEvent::Band {
            token: new,
            crossings: vec![BandCrossing::entered("changelog")],
        });
        assert_eq!(tracker.active_id(), Some("changelog"));
    }

    #[test]
    fn stale_scroll_events_cannot_mutate_progress() {
        let source = FakeSource::new();
        let mut tracker = ReadingTracker::new(source.handle());

        let old = tracker.bind_root(&mut doc());
        tracker.handle(ViewportEvent::Scroll {
            token: old,
            metrics: scroll_metrics(-1000.0, 3000.0, 1000.0),
        });
        assert_eq!(tracker.progress(), 50.0);

        tracker.bind_root(&mut vec![heading(2, "Changelog")]);
        tracker.handle(ViewportEvent::Scroll {
            token: old,
            metrics: scroll_metrics(-2000.0, 3000.0, 1000.0),
        });
        assert_eq!(tracker.progress(), 50.0, "stale scroll must not apply");
    }

    #[test]
    fn rebind_keeps_last_active_until_new_crossing() {
        let source = FakeSource::new();
        let mut tracker = ReadingTracker::new(source.handle());

        let token = tracker.bind_root(&mut doc());
        tracker.handle(ViewportEvent::Band {
            token,
            crossings: vec![BandCrossing::entered("usage")],
        });

        let token = tracker.bind_root(&mut vec![heading(2, "Changelog")]);
        assert_eq!(tracker.active_id(), Some("usage"));

        tracker.handle(ViewportEvent::Band {
            token,
            crossings: vec![BandCrossing::entered("changelog")],
        });
        assert_eq!(tracker.active_id(), Some("changelog"));
    }

    #[test]
    fn clear_root_empties_outline_and_stops_events() {
        let source = FakeSource::new();
        let mut tracker = ReadingTracker::new(source.handle());

        let token = tracker.bind_root(&mut doc());
        tracker.handle(ViewportEvent::Scroll {
            token,
            metrics: scroll_metrics(-1000.0, 3000.0, 1000.0),
        });
        tracker.clear_root();

        assert!(tracker.outline().is_empty());
        assert_eq!(source.disconnected(), vec![token]);
        assert_eq!(tracker.progress(), 50.0, "last valid value is retained");

        tracker.handle(ViewportEvent::Scroll {
            token,
            metrics: scroll_metrics(-2000.0, 3000.0, 1000.0),
        });
        assert_eq!(tracker.progress(), 50.0);
    }

    #[test]
    fn headingless_root_still_subscribes_for_progress() {
        let source = FakeSource::new();
        let mut tracker = ReadingTracker::new(source.handle());

        let mut nodes: Vec<crate::test_helpers::FakeHeading> = Vec::new();
        let token = tracker.bind_root(&mut nodes);

        assert!(tracker.outline().is_empty());
        assert_eq!(source.last_observed_ids(), Vec::<String>::new());

        tracker.handle(ViewportEvent::Scroll {
            token,
            metrics: scroll_metrics(-1000.0, 3000.0, 1000.0),
        });
        assert_eq!(tracker.progress(), 50.0);
    }

    #[test]
    fn drop_disconnects_the_live_cycle() {
        let source = FakeSource::new();
        let token = {
            let mut tracker = ReadingTracker::new(source.handle());
            tracker.bind_root(&mut doc())
        };
        assert_eq!(source.disconnected(), vec![token]);
    }

    #[test]
    fn drop_without_a_bound_root_disconnects_nothing() {
        let source = FakeSource::new();
        drop(ReadingTracker::new(source.handle()));
        assert!(source.disconnected().is_empty());
    }
}
