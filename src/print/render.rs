//! HTML print-window rendering.
//!
//! Turns assembled [`PrintDocumentData`] into a standalone HTML document
//! suitable for a browser print window. Rendering consumes the data by
//! reference and produces an independent string; the data is never mutated.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::Result;
use crate::print::assembler::PrintDocumentData;
use crate::print::columns::{ColumnKind, PrintColumn};
use crate::print::format::{format_amount, format_date};

/// Options controlling the generated print window.
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Window title; defaults to the document kind's title
    pub title: Option<String>,
    /// Right-to-left page direction
    pub rtl: bool,
    /// Inject a `window.print()` bootstrap so the window prints on open
    pub auto_print: bool,
    /// Extra CSS appended to the built-in stylesheet
    pub extra_css: Option<String>,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            title: None,
            rtl: true,
            auto_print: false,
            extra_css: None,
        }
    }
}

impl HtmlOptions {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the page direction.
    pub fn with_rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    /// Print automatically when the window opens.
    pub fn with_auto_print(mut self, auto_print: bool) -> Self {
        self.auto_print = auto_print;
        self
    }

    /// Append CSS to the built-in stylesheet.
    pub fn with_extra_css(mut self, css: impl Into<String>) -> Self {
        self.extra_css = Some(css.into());
        self
    }
}

/// Rendering collaborator consuming assembled print documents.
pub trait Renderer {
    /// Render `data` into a complete HTML document.
    fn render(&self, data: &PrintDocumentData, options: &HtmlOptions) -> Result<String>;
}

/// Renderer producing a standalone print-ready HTML window.
#[derive(Debug, Default)]
pub struct HtmlWindowRenderer;

impl HtmlWindowRenderer {
    /// Create a new renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for HtmlWindowRenderer {
    fn render(&self, data: &PrintDocumentData, options: &HtmlOptions) -> Result<String> {
        let title = options
            .title
            .clone()
            .unwrap_or_else(|| data.kind.title().to_string());
        let dir = if options.rtl { "rtl" } else { "ltr" };

        let mut html = String::new();
        let _ = write!(
            html,
            "<!DOCTYPE html>\n<html dir=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{}",
            dir,
            escape_html(&title),
            BASE_CSS
        );
        if let Some(css) = &options.extra_css {
            html.push_str(css);
            html.push('\n');
        }
        html.push_str("</style>\n</head>\n<body>\n");

        self.render_header(&mut html, data, &title);
        self.render_table(&mut html, data);
        self.render_totals(&mut html, data);

        if options.auto_print {
            html.push_str("<script>window.print();</script>\n");
        }
        html.push_str("</body>\n</html>\n");
        Ok(html)
    }
}

impl HtmlWindowRenderer {
    fn render_header(&self, html: &mut String, data: &PrintDocumentData, title: &str) {
        let _ = write!(
            html,
            "<header>\n<h1>{}</h1>\n<div class=\"party\">{}",
            escape_html(title),
            escape_html(&data.party.name)
        );
        if let Some(account) = &data.party.account {
            let _ = write!(html, " &middot; {}", escape_html(account));
        }
        if let Some(phone) = &data.party.phone {
            let _ = write!(html, " &middot; {}", escape_html(phone));
        }
        let _ = write!(
            html,
            "</div>\n<div class=\"meta\">{} entries</div>\n</header>\n",
            data.rows.len()
        );
    }

    fn render_table(&self, html: &mut String, data: &PrintDocumentData) {
        html.push_str("<table>\n<thead>\n<tr>");
        for column in &data.columns {
            let width = column
                .width
                .map(|w| format!("width:{}%;", w))
                .unwrap_or_default();
            let _ = write!(
                html,
                "<th style=\"text-align:{};{}\">{}</th>",
                column.align.css(),
                width,
                escape_html(&column.label)
            );
        }
        html.push_str("</tr>\n</thead>\n<tbody>\n");
        for row in &data.rows {
            html.push_str("<tr>");
            for column in &data.columns {
                let cell = self.render_cell(row.get(&column.key), column, data);
                let _ = write!(
                    html,
                    "<td style=\"text-align:{}\">{}</td>",
                    column.align.css(),
                    cell
                );
            }
            html.push_str("</tr>\n");
        }
        html.push_str("</tbody>\n</table>\n");
    }

    /// Format one cell value per the column kind. Missing fields render
    /// empty rather than erroring.
    fn render_cell(
        &self,
        value: Option<&Value>,
        column: &PrintColumn,
        data: &PrintDocumentData,
    ) -> String {
        let Some(value) = value else {
            return String::new();
        };
        match column.kind {
            ColumnKind::Number => match value.as_f64() {
                Some(n) => format_amount(n, &data.settings),
                None => escape_html(&text_of(value)),
            },
            ColumnKind::Date => match value.as_str() {
                Some(s) => format_date(s, &data.settings),
                None => String::new(),
            },
            ColumnKind::Text => escape_html(&text_of(value)),
        }
    }

    fn render_totals(&self, html: &mut String, data: &PrintDocumentData) {
        if data.totals.is_empty() {
            return;
        }
        html.push_str("<section class=\"totals\">\n");
        for item in &data.totals {
            let class = if item.emphasis {
                "total emphasis"
            } else {
                "total"
            };
            let _ = write!(
                html,
                "<div class=\"{}\"><span>{}</span><span>{}</span></div>\n",
                class,
                escape_html(&item.label),
                format_amount(item.amount, &data.settings)
            );
        }
        html.push_str("</section>\n");
    }
}

/// Write a rendered window to disk. Fire-and-forget from the assembler's
/// point of view.
pub fn write_window(path: impl AsRef<Path>, html: &str) -> Result<()> {
    fs::write(path, html)?;
    Ok(())
}

/// Textual representation of a JSON cell value. Strings render as their
/// inner content; other scalars use their JSON form; null renders empty.
fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Escape HTML special characters.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

const BASE_CSS: &str = "\
body { font-family: sans-serif; margin: 2em; }
header { margin-bottom: 1em; }
h1 { font-size: 1.4em; margin: 0 0 0.3em 0; }
.party { color: #333; }
.meta { color: #666; font-size: 0.9em; }
table { width: 100%; border-collapse: collapse; }
th, td { border: 1px solid #999; padding: 4px 8px; }
thead th { background: #eee; }
.totals { margin-top: 1em; max-width: 24em; }
.total { display: flex; justify-content: space-between; padding: 2px 8px; }
.total.emphasis { font-weight: bold; border-top: 1px solid #999; }
@media print { body { margin: 0; } }
";
