//! Calculator configuration.
//!
//! [`CalculatorConfig`] is an immutable value handed to the calculator at
//! construction time.  It can be built in code, deserialized with serde, or
//! read from TOML:
//!
//! ```toml
//! locale = "pt-BR"
//! ```
//!
//! Every field has a default, so an empty document yields
//! [`CalculatorConfig::default`].

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Language used for skip reasons and other human-readable labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// English labels ("Sunday", "Custom Holiday", ...).
    #[default]
    #[serde(rename = "en", alias = "en-US")]
    English,
    /// Brazilian Portuguese labels ("Domingo", "Feriado Personalizado", ...).
    #[serde(rename = "pt-BR", alias = "pt")]
    Portuguese,
}

impl Locale {
    /// Label for a skipped Sunday.
    pub fn sunday(&self) -> &'static str {
        match self {
            Locale::English => "Sunday",
            Locale::Portuguese => "Domingo",
        }
    }

    /// Label for a skipped Saturday.
    pub fn saturday(&self) -> &'static str {
        match self {
            Locale::English => "Saturday",
            Locale::Portuguese => "Sábado",
        }
    }

    /// Name given to the user-supplied holiday.
    pub fn custom_holiday(&self) -> &'static str {
        match self {
            Locale::English => "Custom Holiday",
            Locale::Portuguese => "Feriado Personalizado",
        }
    }

    /// Fallback label for a holiday whose record carries no name.
    pub fn holiday(&self) -> &'static str {
        match self {
            Locale::English => "Holiday",
            Locale::Portuguese => "Feriado",
        }
    }

    /// Explanation attached to a Saturday payment date pulled back to Friday.
    pub fn moved_to_friday(&self) -> &'static str {
        match self {
            Locale::English => "Saturday — payment date moved to Friday",
            Locale::Portuguese => {
                "Sábado. O pagamento é previsto para ser adiantado para sexta-feira."
            }
        }
    }

    /// Placeholder shown when no jurisdiction was requested.
    pub fn no_jurisdiction(&self) -> &'static str {
        match self {
            Locale::English => "None",
            Locale::Portuguese => "Nenhum",
        }
    }
}

/// Settings shared by every calculation a calculator performs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Language for reasons and labels.
    pub locale: Locale,
}

impl CalculatorConfig {
    /// Parse a configuration from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("malformed TOML: {e}")))
    }

    /// Read and parse a TOML configuration file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Builder-style locale override.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}
