//! Markdown heading source: pulldown-cmark events → heading nodes.
//!
//! Docs pages are authored in Markdown/MDX; this module flattens a parsed
//! document into [`MdHeading`] nodes that implement the collector's
//! [`HeadingNode`] capability. It powers the CLI's `outline` subcommand and
//! gives tests real documents to collect from.
//!
//! Heading attributes are enabled, so authors can pin anchors explicitly:
//!
//! ```markdown
//! ## Installing {#install}
//! ```
//!
//! parses with a pre-existing id of `install`, which the collector respects
//! verbatim instead of deriving a slug.

use crate::outline::{self, Heading, HeadingNode};
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// A heading lifted out of a Markdown document.
///
/// Inline markup (code spans, emphasis) is flattened into plain text; soft
/// and hard breaks inside a heading become single spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MdHeading {
    level: u8,
    text: String,
    id: Option<String>,
}

impl HeadingNode for MdHeading {
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

fn depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Extract every heading (all levels) from a Markdown document, in document
/// order. Level filtering is the collector's job, not the parser's.
pub fn headings(markdown: &str) -> Vec<MdHeading> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_HEADING_ATTRIBUTES);

    let mut out = Vec::new();
    let mut current: Option<MdHeading> = None;

    for event in Parser::new_ext(markdown, options) {
        match event {
            Event::Start(Tag::Heading { level, id, .. }) => {
                current = Some(MdHeading {
                    level: depth(level),
                    text: String::new(),
                    id: id.map(|s| s.to_string()),
                });
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(done) = current.take() {
                    out.push(done);
                }
            }
            Event::Text(t) | Event::Code(t) => {
                if let Some(h) = current.as_mut() {
                    h.text.push_str(&t);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some(h) = current.as_mut() {
                    h.text.push(' ');
                }
            }
            _ => {}
        }
    }

    out
}

/// Parse a document and collect its outline in one step.
pub fn outline(markdown: &str) -> Vec<Heading> {
    let mut nodes = headings(markdown);
    outline::collect(&mut nodes)
}
