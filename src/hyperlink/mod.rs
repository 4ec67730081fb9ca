//! Inline hyperlink extraction from rich text stories.
//!
//! Scans story content for anchor markup of the form
//! `<a href="URL">LABEL</a>`, replaces each token with its visible label and
//! materializes destination, link-source and link objects in the owning
//! document model. Several quote glyph variants are accepted around the URL;
//! the same glyph must open and close it.
//!
//! # Examples
//!
//! ```
//! use adpress::document::InMemoryDocument;
//! use adpress::hyperlink::HyperlinkExtractor;
//!
//! # fn main() -> adpress::Result<()> {
//! let mut doc = InMemoryDocument::new();
//! doc.add_story(r#"See <a href="https://example.com">our site</a> for rates."#);
//!
//! let report = HyperlinkExtractor::new().process_document(&mut doc)?;
//! assert_eq!(report.links_created, 1);
//! assert_eq!(doc.stories()[0].content, "See our site for rates.");
//! # Ok(())
//! # }
//! ```

mod extractor;
mod matcher;

pub use extractor::{HyperlinkExtractor, ScanReport};
pub use matcher::{find_anchor, AnchorMatch, QUOTE_GLYPHS};
