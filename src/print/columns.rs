//! Printable document kinds and their column catalogs.
//!
//! Every document kind has a fixed catalog listing the columns relevant to
//! it, in print priority order. Settings can hide columns but never reorder
//! them; the catalog order always wins.

use serde::{Deserialize, Serialize};

use crate::print::settings::PrintSettings;

/// Kind of printable business document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Advertising contract with its dues
    Contract,
    /// Cash withdrawal against a contract
    Withdrawal,
    /// Period closure balance
    Closure,
    /// Payment receipt
    Receipt,
}

impl DocumentKind {
    /// Stable identifier used in file names and settings keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Contract => "contract",
            DocumentKind::Withdrawal => "withdrawal",
            DocumentKind::Closure => "closure",
            DocumentKind::Receipt => "receipt",
        }
    }

    /// Human-readable document title.
    pub fn title(&self) -> &'static str {
        match self {
            DocumentKind::Contract => "Contract statement",
            DocumentKind::Withdrawal => "Withdrawal statement",
            DocumentKind::Closure => "Period closure",
            DocumentKind::Receipt => "Payment receipt",
        }
    }
}

/// Horizontal alignment of a printed cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Right-aligned (default for text in RTL output)
    Right,
    /// Centered
    Center,
    /// Left-aligned
    Left,
}

impl Alignment {
    /// CSS `text-align` value.
    pub fn css(&self) -> &'static str {
        match self {
            Alignment::Right => "right",
            Alignment::Center => "center",
            Alignment::Left => "left",
        }
    }
}

/// How a column's cell values are interpreted and formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Verbatim text
    Text,
    /// Numeric amount, rendered with the digit-script formatter
    Number,
    /// Date, rendered with the configured date format
    Date,
}

/// One column of a printable table.
#[derive(Debug, Clone)]
pub struct PrintColumn {
    /// Row field the column reads
    pub key: String,
    /// Header label
    pub label: String,
    /// Value interpretation
    pub kind: ColumnKind,
    /// Cell alignment
    pub align: Alignment,
    /// Optional width, percent of the table
    pub width: Option<f32>,
    /// Whether a row lacking this field is rejected
    pub required: bool,
}

impl PrintColumn {
    /// Text column.
    pub fn text(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind: ColumnKind::Text,
            align: Alignment::Right,
            width: None,
            required: false,
        }
    }

    /// Numeric column.
    pub fn number(key: &str, label: &str) -> Self {
        Self {
            kind: ColumnKind::Number,
            align: Alignment::Center,
            ..Self::text(key, label)
        }
    }

    /// Date column.
    pub fn date(key: &str, label: &str) -> Self {
        Self {
            kind: ColumnKind::Date,
            align: Alignment::Center,
            ..Self::text(key, label)
        }
    }

    /// Mark the column as required for row validity.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the column width (percent of the table).
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Override the cell alignment.
    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }
}

/// Full column catalog for a document kind, in print priority order.
pub fn catalog(kind: DocumentKind) -> Vec<PrintColumn> {
    match kind {
        DocumentKind::Contract => vec![
            PrintColumn::text("id", "Contract #").required().with_width(8.0),
            PrintColumn::text("customer", "Customer"),
            PrintColumn::text("site", "Billboard site"),
            PrintColumn::date("start_date", "Start"),
            PrintColumn::date("end_date", "End"),
            PrintColumn::number("amount", "Amount").required(),
            PrintColumn::number("paid", "Paid"),
            PrintColumn::number("remaining", "Remaining"),
        ],
        DocumentKind::Withdrawal => vec![
            PrintColumn::text("id", "Receipt #").required().with_width(8.0),
            PrintColumn::text("customer", "Customer"),
            PrintColumn::date("date", "Date"),
            PrintColumn::number("amount", "Amount").required(),
            PrintColumn::text("method", "Method"),
            PrintColumn::text("note", "Note"),
        ],
        DocumentKind::Closure => vec![
            PrintColumn::text("id", "Closure #").required().with_width(8.0),
            PrintColumn::date("period_start", "Period start"),
            PrintColumn::date("period_end", "Period end"),
            PrintColumn::number("total_dues", "Dues"),
            PrintColumn::number("total_paid", "Paid"),
            PrintColumn::number("balance", "Balance").required(),
        ],
        DocumentKind::Receipt => vec![
            PrintColumn::text("id", "Receipt #").required().with_width(8.0),
            PrintColumn::text("customer", "Customer"),
            PrintColumn::date("date", "Date"),
            PrintColumn::number("amount", "Amount").required(),
            PrintColumn::text("purpose", "Purpose"),
        ],
    }
}

/// Row field that totals are aggregated from for this kind.
pub fn amount_key(kind: DocumentKind) -> &'static str {
    match kind {
        DocumentKind::Closure => "balance",
        _ => "amount",
    }
}

/// Catalog columns minus the ones hidden by settings.
///
/// Hidden required columns still participate in row validation; hiding a
/// column is a display choice only.
pub fn select_columns(kind: DocumentKind, settings: &PrintSettings) -> Vec<PrintColumn> {
    catalog(kind)
        .into_iter()
        .filter(|c| !settings.hidden_columns.iter().any(|h| h == &c.key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_is_stable() {
        let cols = catalog(DocumentKind::Contract);
        let keys: Vec<&str> = cols.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(
            keys,
            [
                "id",
                "customer",
                "site",
                "start_date",
                "end_date",
                "amount",
                "paid",
                "remaining"
            ]
        );
    }

    #[test]
    fn test_hidden_columns_filtered_in_catalog_order() {
        let settings = PrintSettings {
            hidden_columns: vec!["site".to_string(), "paid".to_string()],
            ..PrintSettings::default()
        };
        let keys: Vec<String> = select_columns(DocumentKind::Contract, &settings)
            .into_iter()
            .map(|c| c.key)
            .collect();
        assert_eq!(
            keys,
            ["id", "customer", "start_date", "end_date", "amount", "remaining"]
        );
    }

    #[test]
    fn test_amount_key_per_kind() {
        assert_eq!(amount_key(DocumentKind::Contract), "amount");
        assert_eq!(amount_key(DocumentKind::Closure), "balance");
    }

    #[test]
    fn test_kind_serde_roundtrip() {
        let json = serde_json::to_string(&DocumentKind::Withdrawal).unwrap();
        assert_eq!(json, "\"withdrawal\"");
        let back: DocumentKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DocumentKind::Withdrawal);
    }
}
