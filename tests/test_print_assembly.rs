//! Integration tests for print-document assembly:
//! - Exclusion filtering applied to both rows and totals
//! - Display formatting kept separate from the underlying numeric values
//! - Malformed rows and dates handled without failing the print

use std::collections::HashSet;

use adpress::print::assembler::{PartyInfo, PrintDocumentAssembler, Row};
use adpress::print::columns::DocumentKind;
use adpress::print::format::{format_amount, format_date};
use adpress::print::render::{HtmlOptions, HtmlWindowRenderer, Renderer};
use adpress::print::settings::{DigitScript, PrintSettings};
use serde_json::json;

fn rows(values: &[serde_json::Value]) -> Vec<Row> {
    values
        .iter()
        .map(|v| v.as_object().unwrap().clone())
        .collect()
}

#[test]
fn test_excluded_row_out_of_totals_and_display() {
    let assembler = PrintDocumentAssembler::with_default_settings();
    let input = rows(&[
        json!({"id": "1", "customer": "A", "amount": 100.0}),
        json!({"id": "2", "customer": "B", "amount": -30.0}),
    ]);
    let excluded: HashSet<String> = ["2".to_string()].into();

    let data = assembler
        .assemble(DocumentKind::Receipt, PartyInfo::new("A"), input, &excluded)
        .unwrap();

    assert_eq!(data.totals[0].amount, 100.0);
    assert_eq!(data.rows.len(), 1);
    assert_eq!(data.rows[0].get("id").unwrap(), "1");
}

#[test]
fn test_arabic_indic_display_leaves_value_intact() {
    let settings = PrintSettings {
        digit_script: DigitScript::ArabicIndic,
        ..PrintSettings::default()
    };
    let assembler = PrintDocumentAssembler::new(settings.clone());
    let input = rows(&[json!({"id": "1", "customer": "A", "amount": 1234.5})]);

    let data = assembler
        .assemble(
            DocumentKind::Receipt,
            PartyInfo::new("A"),
            input,
            &HashSet::new(),
        )
        .unwrap();

    // The total keeps the IEEE double for further arithmetic.
    assert_eq!(data.totals[0].amount, 1234.5);
    assert_eq!(data.totals[0].amount + 0.5, 1235.0);

    // The rendering uses Arabic-Indic glyphs.
    assert_eq!(format_amount(data.totals[0].amount, &settings), "١٬٢٣٤٫٥٠");
    let html = HtmlWindowRenderer::new()
        .render(&data, &HtmlOptions::default())
        .unwrap();
    assert!(html.contains("١٬٢٣٤٫٥٠"));
}

#[test]
fn test_malformed_dates_render_empty() {
    let settings = PrintSettings::default();
    assert_eq!(format_date("", &settings), "");
    assert_eq!(format_date("garbage", &settings), "");

    // A row with an unparseable date still prints; the cell is empty.
    let assembler = PrintDocumentAssembler::with_default_settings();
    let input = rows(&[json!({"id": "1", "customer": "A", "date": "??", "amount": 10.0})]);
    let data = assembler
        .assemble(
            DocumentKind::Receipt,
            PartyInfo::new("A"),
            input,
            &HashSet::new(),
        )
        .unwrap();
    let html = HtmlWindowRenderer::new()
        .render(&data, &HtmlOptions::default())
        .unwrap();
    assert!(html.contains("<td style=\"text-align:center\"></td>"));
}

#[test]
fn test_hidden_columns_absent_from_output() {
    let settings = PrintSettings {
        hidden_columns: vec!["method".to_string(), "note".to_string()],
        ..PrintSettings::default()
    };
    let assembler = PrintDocumentAssembler::new(settings);
    let input = rows(&[json!({
        "id": "1", "customer": "A", "date": "2026-01-05",
        "amount": 10.0, "method": "cash", "note": "secret"
    })]);

    let data = assembler
        .assemble(
            DocumentKind::Withdrawal,
            PartyInfo::new("A"),
            input,
            &HashSet::new(),
        )
        .unwrap();

    assert!(data.columns.iter().all(|c| c.key != "method"));
    let html = HtmlWindowRenderer::new()
        .render(&data, &HtmlOptions::default())
        .unwrap();
    assert!(!html.contains("cash"));
    assert!(!html.contains("secret"));
}

#[test]
fn test_assembly_does_not_mutate_inputs_between_requests() {
    let assembler = PrintDocumentAssembler::with_default_settings();
    let input = rows(&[json!({"id": "1", "customer": "A", "amount": 5.0})]);

    let first = assembler
        .assemble(
            DocumentKind::Receipt,
            PartyInfo::new("A"),
            input.clone(),
            &HashSet::new(),
        )
        .unwrap();
    let second = assembler
        .assemble(
            DocumentKind::Receipt,
            PartyInfo::new("A"),
            input,
            &HashSet::new(),
        )
        .unwrap();

    // Independent invocations produce independent, equal-shaped values.
    assert_eq!(first.rows, second.rows);
    assert_eq!(first.totals[0].amount, second.totals[0].amount);
}
