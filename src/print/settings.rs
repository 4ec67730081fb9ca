//! User-configurable print settings and their persistence.
//!
//! Settings are stored per document kind. A missing or unreadable settings
//! file is never fatal: [`load_or_default`] substitutes the documented
//! defaults and logs a warning, and the print proceeds.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::print::columns::DocumentKind;

/// Glyph set used to render numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DigitScript {
    /// Western Arabic numerals (0-9)
    Western,
    /// Arabic-Indic numerals (U+0660-U+0669)
    ArabicIndic,
}

/// Display settings for one document kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintSettings {
    /// Column keys toggled off; columns absent from the list are shown
    pub hidden_columns: Vec<String>,
    /// Fraction digits rendered for amounts
    pub decimal_places: u8,
    /// chrono format string for date cells
    pub date_format: String,
    /// Numeral glyph set for amounts and dates
    pub digit_script: DigitScript,
    /// Whether thousands separators are inserted
    pub group_digits: bool,
    /// Grouping applies only to amounts whose magnitude reaches this value
    pub grouping_threshold: u64,
}

impl Default for PrintSettings {
    fn default() -> Self {
        Self {
            hidden_columns: Vec::new(),
            decimal_places: 2,
            date_format: "%Y/%m/%d".to_string(),
            digit_script: DigitScript::Western,
            group_digits: true,
            grouping_threshold: 1000,
        }
    }
}

/// Persistence collaborator for print settings.
pub trait SettingsStore {
    /// Load the settings saved for `kind`.
    fn load(&self, kind: DocumentKind) -> Result<PrintSettings>;

    /// Persist `settings` for `kind`.
    fn save(&self, kind: DocumentKind, settings: &PrintSettings) -> Result<()>;
}

/// Settings store keeping one JSON file per document kind in a directory.
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    dir: PathBuf,
}

impl JsonSettingsStore {
    /// Create a store rooted at `dir`. The directory is created on first
    /// save.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn path(&self, kind: DocumentKind) -> PathBuf {
        self.dir.join(format!("print_settings_{}.json", kind.as_str()))
    }
}

impl SettingsStore for JsonSettingsStore {
    fn load(&self, kind: DocumentKind) -> Result<PrintSettings> {
        let raw = fs::read_to_string(self.path(kind))
            .map_err(|e| Error::SettingsUnavailable(format!("{}: {}", kind.as_str(), e)))?;
        serde_json::from_str(&raw)
            .map_err(|e| Error::SettingsUnavailable(format!("{}: {}", kind.as_str(), e)))
    }

    fn save(&self, kind: DocumentKind, settings: &PrintSettings) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| Error::SettingsUnavailable(format!("{}: {}", kind.as_str(), e)))?;
        let raw = serde_json::to_string_pretty(settings)?;
        fs::write(self.path(kind), raw)
            .map_err(|e| Error::SettingsUnavailable(format!("{}: {}", kind.as_str(), e)))?;
        Ok(())
    }
}

/// Load settings for `kind`, substituting defaults on any failure.
///
/// The failure is logged as a warning; printing continues with the defaults.
pub fn load_or_default(store: &dyn SettingsStore, kind: DocumentKind) -> PrintSettings {
    match store.load(kind) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("falling back to default print settings: {}", e);
            PrintSettings::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let s = PrintSettings::default();
        assert!(s.hidden_columns.is_empty());
        assert_eq!(s.decimal_places, 2);
        assert_eq!(s.date_format, "%Y/%m/%d");
        assert_eq!(s.digit_script, DigitScript::Western);
        assert!(s.group_digits);
        assert_eq!(s.grouping_threshold, 1000);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        // Files written by older versions may lack newer fields.
        let s: PrintSettings = serde_json::from_str(r#"{"decimal_places": 3}"#).unwrap();
        assert_eq!(s.decimal_places, 3);
        assert_eq!(s.digit_script, DigitScript::Western);
    }

    #[test]
    fn test_digit_script_serde_names() {
        assert_eq!(
            serde_json::to_string(&DigitScript::ArabicIndic).unwrap(),
            "\"arabic-indic\""
        );
    }
}
