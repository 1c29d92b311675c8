/// Handles argument parsing and the command workflows.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Constants shared across the crate.
pub mod constants;

/// Application configuration and manifest persistence.
pub mod config;

/// Template parsing and rendering functionality.
pub mod renderer;

/// Built-in templates and the file plan.
pub mod template;

/// Folder provisioning and generation orchestration.
pub mod generator;

/// Interactive configuration prompts.
pub mod prompt;

/// External commands run after generation.
pub mod commands;

/// A set of helpers for working with the file system.
pub mod ioutils;
