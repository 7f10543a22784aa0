//! Optional TOML settings for building a [`Config`].
//!
//! ```toml
//! locale = "fr"
//! max-secs = 5400
//! layout = "%Y-%m-%d"
//! ```

mod error;

pub use error::SettingsError;

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::config::Config;
use crate::locale::Locale;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub max_secs: Option<u64>,
    #[serde(default)]
    pub layout: Option<String>,
}

impl Settings {
    /// Parse settings from TOML text.
    ///
    /// # Errors
    /// Returns the TOML error when the text is not valid settings.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Resolve the locale code (English when unset) and build a [`Config`].
    ///
    /// # Errors
    /// Returns [`SettingsError::UnknownLocale`] when no shipped locale has the code.
    pub fn to_config(&self) -> Result<Config, SettingsError> {
        let code = self.locale.as_deref().unwrap_or("en");
        let locale = Locale::by_code(code).ok_or_else(|| SettingsError::UnknownLocale {
            code: code.to_string(),
        })?;
        Ok(match self.max_secs {
            Some(secs) => Config::with_max(
                locale,
                Duration::from_secs(secs),
                self.layout.clone().unwrap_or_default(),
            ),
            None => Config::no_max(locale),
        })
    }
}

/// Read and parse a settings file.
///
/// # Errors
/// Returns an error when the file cannot be read or is not valid settings TOML.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Settings::from_toml(&text).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
