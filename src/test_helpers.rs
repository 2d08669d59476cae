//! Shared test utilities for the read-rail test suite.
//!
//! Provides fake heading nodes, a scripted observation source, and small
//! builders for outlines and page tables, so tests exercise the tracker's
//! event paths without any real rendering surface.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let source = FakeSource::new();
//! let mut tracker = ReadingTracker::new(source.handle());
//!
//! let mut nodes = vec![heading(2, "Intro"), heading(2, "Setup")];
//! let token = tracker.bind_root(&mut nodes);
//!
//! tracker.handle(ViewportEvent::Band {
//!     token,
//!     crossings: vec![BandCrossing::entered("setup")],
//! });
//! assert_eq!(tracker.active_id(), Some("setup"));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::active::ActiveSection;
use crate::outline::{Heading, HeadingNode};
use crate::pager::PageEntry;
use crate::viewport::{ObservationSource, ReadingBand, ScrollMetrics, WatchToken};

// =========================================================================
// Heading fakes
// =========================================================================

/// In-memory heading node. `assign_id` behaves like the DOM write-back: it
/// sticks, so a second collection pass sees the id as pre-existing.
#[derive(Debug, Clone)]
pub struct FakeHeading {
    level: u8,
    text: String,
    id: Option<String>,
}

impl HeadingNode for FakeHeading {
    fn level(&self) -> u8 {
        self.level
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn assign_id(&mut self, id: &str) {
        self.id = Some(id.to_string());
    }
}

/// A heading node with no pre-existing id.
pub fn heading(level: u8, text: &str) -> FakeHeading {
    FakeHeading {
        level,
        text: text.to_string(),
        id: None,
    }
}

/// A heading node that already carries a stable id.
pub fn heading_with_id(level: u8, text: &str, id: &str) -> FakeHeading {
    FakeHeading {
        level,
        text: text.to_string(),
        id: Some(id.to_string()),
    }
}

/// All outline ids in order.
pub fn outline_ids(outline: &[Heading]) -> Vec<&str> {
    outline.iter().map(|h| h.id.as_str()).collect()
}

// =========================================================================
// Active-section and pager builders
// =========================================================================

/// An [`ActiveSection`] already observing the given ids.
pub fn watch(ids: &[&str]) -> ActiveSection {
    let mut section = ActiveSection::new();
    section.observe(ids.iter().map(|s| s.to_string()));
    section
}

/// Build a page table from `(title, url)` pairs.
pub fn page_table(entries: &[(&str, &str)]) -> Vec<PageEntry> {
    entries
        .iter()
        .map(|(title, url)| PageEntry {
            title: title.to_string(),
            url: url.to_string(),
        })
        .collect()
}

/// Geometry snapshot shorthand.
pub fn scroll_metrics(content_top: f64, content_height: f64, viewport_height: f64) -> ScrollMetrics {
    ScrollMetrics {
        content_top,
        content_height,
        viewport_height,
    }
}

// =========================================================================
// Scripted observation source
// =========================================================================

/// Record of everything a tracker asked of its observation source.
#[derive(Debug, Default)]
pub struct SourceLog {
    pub observed: Vec<(WatchToken, ReadingBand, Vec<String>)>,
    pub disconnected: Vec<WatchToken>,
}

/// Observation source that records calls instead of watching a viewport.
///
/// Cheap to clone — clones share one log, so tests can keep a handle and
/// inspect calls made by a tracker that owns the other clone (including
/// after the tracker is dropped).
#[derive(Debug, Clone, Default)]
pub struct FakeSource {
    log: Rc<RefCell<SourceLog>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A second handle onto the same log.
    pub fn handle(&self) -> Self {
        self.clone()
    }

    pub fn observe_count(&self) -> usize {
        self.log.borrow().observed.len()
    }

    /// Ids from the most recent `observe` call. Panics if none was made.
    pub fn last_observed_ids(&self) -> Vec<String> {
        match self.log.borrow().observed.last() {
            Some((_, _, ids)) => ids.clone(),
            None => panic!("no observe() call was recorded"),
        }
    }

    /// Band from the most recent `observe` call. Panics if none was made.
    pub fn last_observed_band(&self) -> ReadingBand {
        match self.log.borrow().observed.last() {
            Some((_, band, _)) => *band,
            None => panic!("no observe() call was recorded"),
        }
    }

    pub fn disconnected(&self) -> Vec<WatchToken> {
        self.log.borrow().disconnected.clone()
    }
}

impl ObservationSource for FakeSource {
    fn observe(&mut self, token: WatchToken, band: ReadingBand, ids: &[String]) {
        self.log
            .borrow_mut()
            .observed
            .push((token, band, ids.to_vec()));
    }

    fn disconnect(&mut self, token: WatchToken) {
        self.log.borrow_mut().disconnected.push(token);
    }
}
