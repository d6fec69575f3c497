//! Process configuration read from the environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    /// Directory served under `/assets`. Must hold the fallback gallery
    /// images named by [`content::fallback::local_asset_files`].
    pub assets_dir: PathBuf,
}

impl SiteConfig {
    /// Read `PORT` and `SITE_ASSETS_DIR` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] if `PORT` is set but not a valid port.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset or blank keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] if `PORT` is set but not a valid port.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ServerError::Config { key: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let assets_dir = get("SITE_ASSETS_DIR").map_or_else(default_assets_dir, PathBuf::from);

        Ok(Self { port, assets_dir })
    }

    /// Fallback gallery images absent from [`Self::assets_dir`].
    #[must_use]
    pub fn missing_fallback_assets(&self) -> Vec<&'static str> {
        content::fallback::local_asset_files()
            .into_iter()
            .filter(|name| !self.assets_dir.join(name).is_file())
            .collect()
    }
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../assets")
}
