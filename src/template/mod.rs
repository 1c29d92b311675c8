//! Template handling for ebrick
//!
//! This module contains the template components:
//! - `registry`: The built-in templates compiled into the binary
//! - `plan`: Decides which files a run produces from the configuration
//! - `operation`: Describes the filesystem changes a run performs

pub mod operation;
pub mod plan;
pub mod registry;

pub use operation::TemplateOperation;
pub use plan::FilePlan;
pub use registry::TemplateRegistry;
