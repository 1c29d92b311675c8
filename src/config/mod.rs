//! Application configuration for ebrick
//!
//! This module contains the configuration components:
//! - `types`: The `AppConfig` record and its validation rules
//! - `manifest`: Loading and saving the `.ebrick.yaml` manifest

pub mod manifest;
pub mod types;

pub use manifest::Manifest;
pub use types::{parse_modules, AppConfig};
