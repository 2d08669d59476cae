//! CLI output formatting for outlines and pager results.
//!
//! Display is information-first: the section title is the line, the anchor
//! rides along as context. Nesting mirrors heading depth so the printed
//! outline reads like the rail will render.
//!
//! ```text
//! Getting Started → #getting-started
//! Commands → #commands
//!     deploy → #deploy
//!     rollback → #rollback
//!         Flags → #flags
//!
//! 5 sections
//! ```
//!
//! Each result type has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::outline::Heading;
use crate::pager::Pager;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an outline as an indented tree, one heading per line, with a
/// trailing section count. Depth is relative to h2.
pub fn format_outline(outline: &[Heading]) -> Vec<String> {
    if outline.is_empty() {
        return vec!["No outline: document has no level 2-4 headings".to_string()];
    }

    let mut lines: Vec<String> = outline
        .iter()
        .map(|h| {
            let depth = usize::from(h.level.saturating_sub(2));
            format!("{}{} → #{}", indent(depth), h.title, h.id)
        })
        .collect();

    lines.push(String::new());
    lines.push(match outline.len() {
        1 => "1 section".to_string(),
        n => format!("{n} sections"),
    });
    lines
}

/// Format a pager result for a given location.
pub fn format_pager(location: &str, pager: Option<Pager<'_>>) -> Vec<String> {
    let Some(pager) = pager else {
        return vec![format!("No pager for {location}")];
    };

    let mut lines = Vec::new();
    if let Some(prev) = pager.prev {
        lines.push(format!("Previous: {} → {}", prev.title, prev.url));
    }
    if let Some(next) = pager.next {
        lines.push(format!("Next:     {} → {}", next.title, next.url));
    }
    lines
}

pub fn print_outline(outline: &[Heading]) {
    for line in format_outline(outline) {
        println!("{line}");
    }
}

pub fn print_pager(location: &str, pager: Option<Pager<'_>>) {
    for line in format_pager(location, pager) {
        println!("{line}");
    }
}
