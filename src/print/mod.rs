//! Print-document assembly and rendering.
//!
//! Pre-fetched business records are shaped into a
//! [`PrintDocumentData`](assembler::PrintDocumentData) view-model (selected
//! columns, surviving rows and totals) under per-kind
//! [`PrintSettings`](settings::PrintSettings), then rendered into a
//! standalone HTML print window.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashSet;
//! use adpress::print::assembler::{PartyInfo, PrintDocumentAssembler};
//! use adpress::print::columns::DocumentKind;
//! use adpress::print::render::{HtmlOptions, HtmlWindowRenderer, Renderer};
//!
//! # fn main() -> adpress::Result<()> {
//! let rows = vec![serde_json::json!({
//!     "id": "1", "customer": "Acme", "date": "2026-01-05", "amount": 1200.0
//! }).as_object().unwrap().clone()];
//!
//! let assembler = PrintDocumentAssembler::with_default_settings();
//! let data = assembler.assemble(
//!     DocumentKind::Receipt,
//!     PartyInfo::new("Acme"),
//!     rows,
//!     &HashSet::new(),
//! )?;
//! let html = HtmlWindowRenderer::new().render(&data, &HtmlOptions::default())?;
//! assert!(html.contains("1,200.00"));
//! # Ok(())
//! # }
//! ```

pub mod assembler;
pub mod columns;
pub mod format;
pub mod render;
pub mod settings;

pub use assembler::{PartyInfo, PrintDocumentAssembler, PrintDocumentData, PrintTotalsItem, Row};
pub use columns::{catalog, select_columns, Alignment, ColumnKind, DocumentKind, PrintColumn};
pub use format::{format_amount, format_date, transliterate_digits};
pub use render::{escape_html, write_window, HtmlOptions, HtmlWindowRenderer, Renderer};
pub use settings::{load_or_default, DigitScript, JsonSettingsStore, PrintSettings, SettingsStore};
