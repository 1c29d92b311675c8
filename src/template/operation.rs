use std::path::PathBuf;

/// A filesystem change performed by a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateOperation {
    Write { target: PathBuf, template: String, target_exists: bool },
    CreateDirectory { target: PathBuf, target_exists: bool },
}

impl TemplateOperation {
    /// Returns the target path for this operation.
    pub fn target_path(&self) -> &PathBuf {
        match self {
            TemplateOperation::Write { target, .. } => target,
            TemplateOperation::CreateDirectory { target, .. } => target,
        }
    }

    /// Gets a message describing the operation and its status.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };

        match self {
            TemplateOperation::CreateDirectory { target, target_exists } => {
                if *target_exists {
                    format!(
                        "{}Skipping directory creation '{}' (already exists)",
                        prefix,
                        target.display()
                    )
                } else {
                    format!("{}Creating directory '{}'", prefix, target.display())
                }
            }

            TemplateOperation::Write { target, template, target_exists } => {
                if *target_exists {
                    format!(
                        "{}Writing to '{}' from '{}' (overwriting existing file)",
                        prefix,
                        target.display(),
                        template
                    )
                } else {
                    format!(
                        "{}Writing to '{}' from '{}'",
                        prefix,
                        target.display(),
                        template
                    )
                }
            }
        }
    }
}
