use crate::{
    cli::{NewArgs, RunArgs},
    commands::{post_generate, run_app},
    config::{AppConfig, Manifest},
    constants::STDIN_INDICATOR,
    error::{Error, Result},
    generator::Generator,
    ioutils::{create_dir_all, read_from},
    prompt::{collect_config, confirm_overwrite, DialoguerPrompter, PromptProvider},
    renderer::MiniJinjaRenderer,
    template::TemplateRegistry,
};
use std::path::Path;

/// Orchestrates the `new` workflow: manifest, generation, post-generation tasks.
pub struct Runner {
    args: NewArgs,
    prompter: Box<dyn PromptProvider>,
}

impl Runner {
    pub fn new(args: NewArgs) -> Self {
        Self { args, prompter: Box::new(DialoguerPrompter::new()) }
    }

    /// Replaces the terminal prompter, e.g. with a scripted one.
    pub fn with_prompter(mut self, prompter: Box<dyn PromptProvider>) -> Self {
        self.prompter = prompter;
        self
    }

    /// Executes the complete generation workflow
    pub fn run(self) -> Result<()> {
        let output_root = self.args.directory.as_path();

        let Some(config) = self.resolve_config(output_root)? else {
            println!("Keeping existing configuration.");
            return Ok(());
        };

        println!("Creating a new eBrick application with the name: {}", config.name);
        self.generate(output_root, &config)?;
        println!("Application created successfully.");

        if self.args.skip_post || self.args.dry_run {
            log::debug!("Skipping post generation tasks");
        } else {
            post_generate(output_root)?;
        }
        Ok(())
    }

    /// Decides which configuration to generate from.
    ///
    /// Without a manifest, the configuration comes from `--answers` or the
    /// prompts and is saved. With one, the user is asked whether to overwrite;
    /// `Ok(None)` means they declined. The manifest is then read back so the
    /// generated files always match what is on disk.
    fn resolve_config(&self, output_root: &Path) -> Result<Option<AppConfig>> {
        let config = if Manifest::exists(output_root) {
            let skip = self.args.force || self.args.non_interactive;
            if !confirm_overwrite(self.prompter.as_ref(), skip)? {
                return Ok(None);
            }
            match self.answers()? {
                Some(config) => config,
                None => Manifest::load(output_root)?,
            }
        } else {
            match self.answers()? {
                Some(config) => config,
                None if self.args.non_interactive => {
                    return Err(Error::ConfigValidation(
                        "--answers is required in non-interactive mode".into(),
                    ))
                }
                None => collect_config(self.prompter.as_ref())?,
            }
        };

        if self.args.dry_run {
            config.validate()?;
            return Ok(Some(config));
        }

        create_dir_all(output_root)?;
        Manifest::save(output_root, &config)?;
        Manifest::load(output_root).map(Some)
    }

    /// Parses `--answers`, reading stdin when it is `-`.
    fn answers(&self) -> Result<Option<AppConfig>> {
        let Some(answers) = &self.args.answers else {
            return Ok(None);
        };
        let document = if answers == STDIN_INDICATOR {
            read_from(std::io::stdin())?
        } else {
            answers.clone()
        };
        Manifest::parse(&document).map(Some)
    }

    fn generate(&self, output_root: &Path, config: &AppConfig) -> Result<()> {
        let engine = MiniJinjaRenderer::new();
        let report = Generator::new(&engine, TemplateRegistry::builtin(), output_root)
            .with_policy(self.args.failure_policy())
            .with_dry_run(self.args.dry_run)
            .generate(config)?;

        for file in &report.files {
            println!("Generated {} successfully.", file.target_path().display());
        }
        if report.is_success() {
            return Ok(());
        }
        for failure in &report.failures {
            eprintln!("Failed to generate {}: {}", failure.path, failure.error);
        }
        Err(Error::Other(anyhow::anyhow!(
            "{} of {} files could not be generated",
            report.failures.len(),
            report.failures.len() + report.files.len()
        )))
    }
}

/// Main entry point for the new command
pub fn run(args: NewArgs) -> Result<()> {
    Runner::new(args).run()
}

/// Main entry point for the run command
pub fn run_generated(args: RunArgs) -> Result<()> {
    if !Manifest::exists(&args.directory) {
        return Err(Error::ManifestNotFound { path: Manifest::path(&args.directory) });
    }
    run_app(&args.directory)
}
