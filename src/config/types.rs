//! The application configuration record

use crate::constants::{EBRICK_VERSION, MODULE_SEPARATOR};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Describes the application to scaffold.
///
/// Field names and order match the manifest document exactly so that a
/// configuration survives a save/load round trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub name: String,
    pub package: String,
    #[serde(default)]
    pub modules: Vec<String>,
    #[serde(default)]
    pub database: bool,
    #[serde(default)]
    pub observability: bool,
    #[serde(default)]
    pub cache: bool,
    #[serde(default)]
    pub messaging: bool,
    #[serde(default = "get_default_version")]
    pub version: String,
}

impl AppConfig {
    /// Creates a configuration with every capability disabled and the
    /// embedded generator version.
    pub fn new(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            modules: Vec::new(),
            database: false,
            observability: false,
            cache: false,
            messaging: false,
            version: get_default_version(),
        }
    }

    /// Checks the invariants every generation run relies on.
    ///
    /// # Returns
    /// * `Err(Error::ConfigValidation)` - If the name or package is blank, or a
    ///   module name is empty or contains the list separator or whitespace
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::ConfigValidation("application name is required".into()));
        }
        if self.package.trim().is_empty() {
            return Err(Error::ConfigValidation("application package is required".into()));
        }
        if self.package.chars().any(char::is_whitespace) {
            return Err(Error::ConfigValidation(format!(
                "application package '{}' must not contain whitespace",
                self.package
            )));
        }
        for module in &self.modules {
            if !is_valid_module_name(module) {
                return Err(Error::ConfigValidation(format!(
                    "invalid module name '{module}'"
                )));
            }
        }
        Ok(())
    }

    /// Template context derived from this configuration.
    pub fn to_context(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Splits a comma-separated module list.
///
/// Surrounding whitespace is trimmed and empty segments are dropped, so
/// `"auth, billing,,"` yields `["auth", "billing"]`. Whitespace inside a
/// name is left in place for [`AppConfig::validate`] to reject.
pub fn parse_modules(input: &str) -> Vec<String> {
    input
        .split(MODULE_SEPARATOR)
        .map(str::trim)
        .filter(|module| !module.is_empty())
        .map(String::from)
        .collect()
}

/// A module name must survive being written back as a comma-separated list.
fn is_valid_module_name(module: &str) -> bool {
    !module.is_empty()
        && !module.contains(MODULE_SEPARATOR)
        && !module.chars().any(char::is_whitespace)
}

fn get_default_version() -> String {
    EBRICK_VERSION.to_string()
}
