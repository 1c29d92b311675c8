//! Generation orchestration
//!
//! A run validates the configuration, provisions the base folders, builds the
//! file plan and then renders and writes every planned file in path order.

pub mod folders;

pub use folders::ensure_folders;

use crate::{
    config::AppConfig,
    error::{Error, Result},
    ioutils::write_file,
    renderer::{MiniJinjaRenderer, TemplateRenderer},
    template::{FilePlan, TemplateOperation, TemplateRegistry},
};
use std::path::{Path, PathBuf};

/// What to do when a single file fails to render or write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failing file and return its error. Files written
    /// before it stay on disk.
    #[default]
    AbortOnFirst,
    /// Keep going and collect every failure in the report.
    ContinueOnError,
}

/// A file that could not be generated.
#[derive(Debug)]
pub struct GenerationFailure {
    /// Planned output path, relative to the output root.
    pub path: String,
    pub error: Error,
}

/// Outcome of a generation run.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub folders: Vec<TemplateOperation>,
    pub files: Vec<TemplateOperation>,
    pub failures: Vec<GenerationFailure>,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Generates an application from the registered templates.
pub struct Generator<'a> {
    engine: &'a dyn TemplateRenderer,
    registry: &'a TemplateRegistry,
    output_root: PathBuf,
    policy: FailurePolicy,
    dry_run: bool,
}

impl<'a> Generator<'a> {
    pub fn new<P: AsRef<Path>>(
        engine: &'a dyn TemplateRenderer,
        registry: &'a TemplateRegistry,
        output_root: P,
    ) -> Self {
        Self {
            engine,
            registry,
            output_root: output_root.as_ref().to_path_buf(),
            policy: FailurePolicy::default(),
            dry_run: false,
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Runs a complete generation for `config`.
    ///
    /// # Returns
    /// * `Err(Error::ConfigValidation)` - Before anything is created
    /// * `Err(Error::Folder)` - If provisioning fails; no file is rendered
    /// * `Err(Error::Template | Error::TemplateNotFound | Error::Write)` - The
    ///   first failing file under `FailurePolicy::AbortOnFirst`
    /// * `Ok(GenerationReport)` - Otherwise, with per-file failures collected
    ///   under `FailurePolicy::ContinueOnError`
    pub fn generate(&self, config: &AppConfig) -> Result<GenerationReport> {
        config.validate()?;

        let mut report = GenerationReport {
            folders: ensure_folders(&self.output_root, self.dry_run)?,
            ..Default::default()
        };

        let plan = FilePlan::build(config);
        let context = config.to_context()?;
        log::debug!("Generating {} files into '{}'", plan.len(), self.output_root.display());

        for (path, template) in plan.iter() {
            match self.generate_file(path, template, &context) {
                Ok(operation) => {
                    log::info!("{}", operation.get_message(self.dry_run));
                    report.files.push(operation);
                }
                Err(error) => match self.policy {
                    FailurePolicy::AbortOnFirst => return Err(error),
                    FailurePolicy::ContinueOnError => {
                        log::error!("{error}");
                        report.failures.push(GenerationFailure { path: path.to_string(), error });
                    }
                },
            }
        }

        Ok(report)
    }

    /// Renders one planned file and writes it under the output root.
    fn generate_file(
        &self,
        path: &str,
        template: &str,
        context: &serde_json::Value,
    ) -> Result<TemplateOperation> {
        let text = self.registry.get(template)?;
        let content = self.engine.render(template, text, context)?;

        let target = self.output_root.join(path);
        let target_exists = target.exists();
        if !self.dry_run {
            write_file(&content, &target)?;
        }

        Ok(TemplateOperation::Write { target, template: template.to_string(), target_exists })
    }
}

/// Generates `config` into `output_root` with the built-in templates, the
/// default renderer and the abort-on-first-failure policy.
pub fn generate_application<P: AsRef<Path>>(
    config: &AppConfig,
    output_root: P,
) -> Result<GenerationReport> {
    let engine = MiniJinjaRenderer::new();
    Generator::new(&engine, TemplateRegistry::builtin(), output_root).generate(config)
}
