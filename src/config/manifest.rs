//! Manifest loading and saving

use crate::config::AppConfig;
use crate::constants::MANIFEST_FILENAME;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// The `.ebrick.yaml` document stored at the root of a scaffolded application.
pub struct Manifest;

impl Manifest {
    /// Location of the manifest under `root`.
    pub fn path<P: AsRef<Path>>(root: P) -> PathBuf {
        root.as_ref().join(MANIFEST_FILENAME)
    }

    pub fn exists<P: AsRef<Path>>(root: P) -> bool {
        Self::path(root).is_file()
    }

    /// Reads and validates the manifest under `root`.
    ///
    /// # Returns
    /// * `Err(Error::ManifestNotFound)` - If no manifest exists
    /// * `Err(Error::ManifestParse)` - If the document is not valid YAML for an `AppConfig`
    /// * `Err(Error::ConfigValidation)` - If the stored configuration breaks an invariant
    pub fn load<P: AsRef<Path>>(root: P) -> Result<AppConfig> {
        let path = Self::path(root);
        if !path.is_file() {
            return Err(Error::ManifestNotFound { path });
        }
        let content = std::fs::read_to_string(&path)?;
        let config = Self::parse(&content)?;
        log::debug!("Loaded manifest from '{}'", path.display());
        Ok(config)
    }

    /// Parses a manifest document.
    ///
    /// JSON is a subset of YAML, so answers given as JSON are accepted too.
    pub fn parse(content: &str) -> Result<AppConfig> {
        let config: AppConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Writes `config` to the manifest under `root`, replacing any existing one.
    pub fn save<P: AsRef<Path>>(root: P, config: &AppConfig) -> Result<PathBuf> {
        config.validate()?;
        let path = Self::path(root);
        let content = serde_yaml::to_string(config)?;
        std::fs::write(&path, content)
            .map_err(|source| Error::Write { path: path.clone(), source })?;
        log::debug!("Saved manifest to '{}'", path.display());
        Ok(path)
    }
}
