//! Display formatting for amounts and dates.
//!
//! Formatting is display-only: callers keep the original `f64`/date values
//! for arithmetic and pass them through here only when producing output.

use chrono::NaiveDate;

use crate::print::settings::{DigitScript, PrintSettings};

/// Arabic-Indic digit glyphs, indexed by digit value.
const ARABIC_INDIC_DIGITS: [char; 10] =
    ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// Arabic decimal separator (U+066B).
const ARABIC_DECIMAL_SEP: char = '\u{066B}';

/// Arabic thousands separator (U+066C).
const ARABIC_GROUP_SEP: char = '\u{066C}';

/// Formats accepted when parsing date cell values.
const ACCEPTED_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Format used when the configured format string itself is unusable.
const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Rewrite Western digits into the requested digit script.
///
/// Non-digit characters pass through unchanged.
pub fn transliterate_digits(text: &str, script: DigitScript) -> String {
    match script {
        DigitScript::Western => text.to_string(),
        DigitScript::ArabicIndic => text
            .chars()
            .map(|c| match c {
                '0'..='9' => ARABIC_INDIC_DIGITS[(c as u8 - b'0') as usize],
                other => other,
            })
            .collect(),
    }
}

/// Render an amount with the configured precision, grouping and digit
/// script.
///
/// The underlying `f64` is untouched; only the rendering is affected.
pub fn format_amount(value: f64, settings: &PrintSettings) -> String {
    let negative = value < 0.0;
    let abs = value.abs();
    let raw = format!("{:.*}", settings.decimal_places as usize, abs);
    let (int_raw, frac_raw) = match raw.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (raw.as_str(), None),
    };

    let (decimal_sep, group_sep) = match settings.digit_script {
        DigitScript::Western => ('.', ','),
        DigitScript::ArabicIndic => (ARABIC_DECIMAL_SEP, ARABIC_GROUP_SEP),
    };

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    if settings.group_digits && abs >= settings.grouping_threshold as f64 {
        push_grouped(&mut out, int_raw, group_sep);
    } else {
        out.push_str(int_raw);
    }
    if let Some(frac) = frac_raw {
        out.push(decimal_sep);
        out.push_str(frac);
    }
    transliterate_digits(&out, settings.digit_script)
}

/// Append `digits` with a separator every three digits from the right.
fn push_grouped(out: &mut String, digits: &str, sep: char) {
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
}

/// Render a date cell with the configured format and digit script.
///
/// Empty or unparseable input renders as an empty string, never an error.
pub fn format_date(raw: &str, settings: &PrintSettings) -> String {
    use std::fmt::Write as _;

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let Some(date) = parse_date(trimmed) else {
        return String::new();
    };

    let mut out = String::new();
    if write!(out, "{}", date.format(&settings.date_format)).is_err() {
        out.clear();
        let _ = write!(out, "{}", date.format(FALLBACK_DATE_FORMAT));
    }
    transliterate_digits(&out, settings.digit_script)
}

/// Parse a date cell value. Accepts RFC 3339 timestamps and plain dates.
fn parse_date(s: &str) -> Option<NaiveDate> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    ACCEPTED_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}
