//! Assembly of print-ready document data from pre-fetched rows.

use std::collections::HashSet;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::print::columns::{amount_key, catalog, select_columns, DocumentKind, PrintColumn};
use crate::print::settings::PrintSettings;

/// One business record, as delivered by the upstream data layer.
///
/// Rows are JSON objects; the `id` field is the row's identity.
pub type Row = serde_json::Map<String, Value>;

/// Customer/party block printed above the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartyInfo {
    /// Customer or party name
    pub name: String,
    /// Account identifier, when known
    pub account: Option<String>,
    /// Contact phone, when known
    pub phone: Option<String>,
}

impl PartyInfo {
    /// Party with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the account identifier.
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    /// Set the contact phone.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

/// A labeled aggregate printed below the table.
///
/// `amount` stays a plain `f64` so downstream arithmetic is unaffected by
/// display formatting, which happens at render time only.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintTotalsItem {
    /// Aggregate label
    pub label: String,
    /// Aggregate value
    pub amount: f64,
    /// Render emphasized (bold)
    pub emphasis: bool,
}

/// The full payload handed to a renderer.
///
/// Constructed fresh per print request and never mutated after handoff.
#[derive(Debug, Clone)]
pub struct PrintDocumentData {
    /// Document kind tag
    pub kind: DocumentKind,
    /// Party block
    pub party: PartyInfo,
    /// Selected columns, in catalog priority order
    pub columns: Vec<PrintColumn>,
    /// Rows that survived exclusion and validation
    pub rows: Vec<Row>,
    /// Aggregates over the surviving rows
    pub totals: Vec<PrintTotalsItem>,
    /// Settings the document was assembled under
    pub settings: PrintSettings,
}

/// Shapes pre-fetched rows into [`PrintDocumentData`].
///
/// Holds no mutable state; independent print requests may run concurrently,
/// each producing independent values. Performs no I/O: rows arrive already
/// resolved.
#[derive(Debug, Clone)]
pub struct PrintDocumentAssembler {
    settings: PrintSettings,
}

impl PrintDocumentAssembler {
    /// Assembler using the given settings.
    pub fn new(settings: PrintSettings) -> Self {
        Self { settings }
    }

    /// Assembler using default settings.
    pub fn with_default_settings() -> Self {
        Self::new(PrintSettings::default())
    }

    /// Settings this assembler prints under.
    pub fn settings(&self) -> &PrintSettings {
        &self.settings
    }

    /// Assemble a printable document of `kind` from `rows`.
    ///
    /// Rows whose id is in `excluded_ids` are dropped from both the row list
    /// and the totals. Rows missing a required field, or whose amount field
    /// is not numeric, are skipped with a warning. The only hard failure is
    /// a non-empty input where no considered row was usable.
    pub fn assemble(
        &self,
        kind: DocumentKind,
        party: PartyInfo,
        rows: Vec<Row>,
        excluded_ids: &HashSet<String>,
    ) -> Result<PrintDocumentData> {
        let columns = select_columns(kind, &self.settings);
        let full_catalog = catalog(kind);
        let required: Vec<&PrintColumn> = full_catalog.iter().filter(|c| c.required).collect();
        let amount_field = amount_key(kind);

        let mut kept: Vec<Row> = Vec::new();
        let mut sum = 0.0f64;
        let mut considered = 0usize;

        for (index, row) in rows.into_iter().enumerate() {
            if let Some(id) = row_id(&row) {
                if excluded_ids.contains(&id) {
                    continue;
                }
            }
            considered += 1;
            match validate_row(&row, index, &required, amount_field) {
                Ok(amount) => {
                    sum += amount;
                    kept.push(row);
                },
                Err(e) => log::warn!("{}", e),
            }
        }

        if considered > 0 && kept.is_empty() {
            return Err(Error::NoData(format!(
                "no usable {} rows after validation",
                kind.as_str()
            )));
        }

        let totals = vec![PrintTotalsItem {
            label: "Total".to_string(),
            amount: sum,
            emphasis: true,
        }];

        Ok(PrintDocumentData {
            kind,
            party,
            columns,
            rows: kept,
            totals,
            settings: self.settings.clone(),
        })
    }
}

/// Row identity, read from the `id` field. String and integer ids are both
/// accepted.
pub fn row_id(row: &Row) -> Option<String> {
    match row.get("id") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Check a row against the kind's required columns and read its amount.
fn validate_row(
    row: &Row,
    index: usize,
    required: &[&PrintColumn],
    amount_field: &str,
) -> Result<f64> {
    for column in required {
        if !row.contains_key(&column.key) {
            return Err(Error::InvalidRow {
                index,
                reason: format!("missing field '{}'", column.key),
            });
        }
    }
    row.get(amount_field)
        .and_then(Value::as_f64)
        .ok_or_else(|| Error::InvalidRow {
            index,
            reason: format!("field '{}' is not numeric", amount_field),
        })
}
