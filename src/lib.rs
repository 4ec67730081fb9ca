//! # adpress
//!
//! Document tooling for an advertising-contract billing system: hyperlink
//! extraction from rich text stories, and assembly of printable financial
//! documents.
//!
//! ## Hyperlink extraction
//!
//! Stories are scanned for inline anchor markup
//! (`<a href="URL">LABEL</a>`, with several accepted quote glyphs). Each
//! token is replaced in place by its label, and a link is attached to the
//! label's new text span. Destinations are deduplicated per document: two
//! anchors sharing a URL share one destination object.
//!
//! ```
//! use adpress::document::InMemoryDocument;
//! use adpress::hyperlink::HyperlinkExtractor;
//!
//! # fn main() -> adpress::Result<()> {
//! let mut doc = InMemoryDocument::new();
//! doc.add_story(r#"Dues listed at <a href="https://billing.test">the portal</a>."#);
//! let report = HyperlinkExtractor::new().process_document(&mut doc)?;
//! assert_eq!(report.links_created, 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Print-document assembly
//!
//! Pre-fetched contract, withdrawal, closure or receipt rows are shaped
//! into a [`print::PrintDocumentData`] (per-kind column catalogs filtered
//! by user settings, totals aggregated over the surviving rows) and
//! rendered to a standalone HTML print window. Amounts honor the configured
//! decimal precision, grouping and digit script (Western or Arabic-Indic);
//! dates honor the configured format and render empty when invalid.
//!
//! Both components are synchronous and stateless between invocations;
//! failures local to one row or one match are logged and skipped rather
//! than propagated.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Content model
pub mod document;
pub mod span;

// Hyperlink extraction
pub mod hyperlink;

// Print-document assembly
pub mod print;

// Re-exports
pub use document::{DocumentModel, InMemoryDocument};
pub use error::{Error, Result};
pub use hyperlink::{HyperlinkExtractor, ScanReport};
pub use print::{
    DigitScript, DocumentKind, HtmlOptions, HtmlWindowRenderer, PartyInfo, PrintColumn,
    PrintDocumentAssembler, PrintDocumentData, PrintSettings, Renderer,
};
pub use span::TextSpan;

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
