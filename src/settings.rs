//! Optional settings for the date helper, read through the `config` crate.
//!
//! Sources, later ones winning: built-in defaults, an optional settings file
//! (any format `config` understands, picked by extension), and `FPKIT_*`
//! environment variables such as `FPKIT_LOCALE=de-DE` or
//! `FPKIT_UTC_OFFSET_MINUTES=-360`.

use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::debug;

use crate::date::LocaleOptions;
use crate::error::Result;

pub const DEFAULT_FILE: &str = "fpkit";
const ENV_PREFIX: &str = "FPKIT";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub locale: String,
    pub utc_offset_minutes: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self { locale: "en-US".into(), utc_offset_minutes: 0 }
    }
}

impl Settings {
    /// Read `fpkit.{toml,json,yaml,...}` from the working directory if there
    /// is one, then the environment.
    pub fn load() -> Result<Self> {
        Self::from_file(DEFAULT_FILE)
    }

    /// Like [`Settings::load`] but with an explicit file name, with or without
    /// extension. A missing file is not an error.
    pub fn from_file(path: &str) -> Result<Self> {
        let defaults = Self::default();
        let settings: Settings = Config::builder()
            .set_default("locale", defaults.locale)?
            .set_default("utc_offset_minutes", i64::from(defaults.utc_offset_minutes))?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;
        debug!(?settings, "settings loaded");
        Ok(settings)
    }

    pub fn locale_options(&self) -> Result<LocaleOptions> {
        LocaleOptions::new(&self.locale, self.utc_offset_minutes)
    }
}
