// Generation driver
//
// Runs the two independent pipelines:
//
//   colors manifest ─┬─ resolve ──────────┐
//   tokens manifest ─┴────────────────────┴─ theme document ─► theme file
//   colors manifest ─── table + refs ─ template ─────────────► README
//
// Each pipeline loads its own manifests; nothing is cached between them.

use crate::config::Config;
use crate::error::GenError;
use crate::palette::{self, ColorManifest};
use crate::readme;
use crate::theme::ThemeDocument;
use crate::tokens;
use crate::writer::{ArtifactWriter, Outcome, Prompter};
use std::path::Path;

/// Per-run switches from the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct Mode {
    pub verbose: bool,
    pub dry_run: bool,
}

/// What happened to each requested artifact
#[derive(Debug, Default, PartialEq)]
pub struct Report {
    pub theme: Option<Outcome>,
    pub readme: Option<Outcome>,
}

pub struct Generator<'a, P: Prompter> {
    config: &'a Config,
    mode: Mode,
    writer: ArtifactWriter<P>,
}

impl<'a, P: Prompter> Generator<'a, P> {
    pub fn new(config: &'a Config, mode: Mode, prompter: P) -> Self {
        Self {
            config,
            mode,
            writer: ArtifactWriter::new(prompter, mode.dry_run),
        }
    }

    /// Build the theme document text without saving it
    pub fn build_theme(&self) -> Result<String, GenError> {
        let manifest =
            ColorManifest::load(&self.config.properties_dir, &self.config.colors_manifest)?;
        let colors = palette::resolve(&manifest)?;
        let token_colors =
            tokens::load(&self.config.properties_dir, &self.config.tokens_manifest)?;

        tracing::debug!(
            "Assembling theme '{}' ({})",
            self.config.theme_name,
            self.config.theme_type.as_str()
        );
        let document = ThemeDocument::new(
            self.config.theme_name.clone(),
            self.config.theme_type,
            colors,
            token_colors,
        );
        document.to_json().map_err(|e| GenError::Shape {
            file: self.config.theme_file.clone(),
            message: e.to_string(),
        })
    }

    /// Build the README text without saving it
    pub fn build_readme(&self) -> Result<String, GenError> {
        let manifest =
            ColorManifest::load(&self.config.properties_dir, &self.config.colors_manifest)?;
        let rendered = readme::render(&manifest, &self.config.swatch_url)?;
        let template = readme::load_template(&self.config.template_path())?;
        readme::assemble(&template, &rendered)
    }

    pub fn generate_theme(&mut self) -> Result<Outcome, GenError> {
        let text = self.build_theme()?;
        let path = self.config.theme_path();
        self.emit(&path, &text)
    }

    pub fn generate_readme(&mut self) -> Result<Outcome, GenError> {
        let text = self.build_readme()?;
        let path = self.config.readme_path.clone();
        self.emit(&path, &text)
    }

    /// Generate whatever was asked for, theme first.
    pub fn run(&mut self, theme: bool, readme: bool) -> Result<Report, GenError> {
        let mut report = Report::default();
        if !theme && !readme {
            tracing::info!("Nothing to generate (pass --theme, --readme or --all)");
            return Ok(report);
        }

        if theme {
            report.theme = Some(self.generate_theme()?);
        }
        if readme {
            report.readme = Some(self.generate_readme()?);
        }
        Ok(report)
    }

    /// Preview (when verbose) and hand to the writer
    fn emit(&mut self, path: &Path, text: &str) -> Result<Outcome, GenError> {
        if self.mode.verbose {
            println!("{}", text);
        }
        self.writer.save(path, text)
    }

    #[cfg(test)]
    fn writer(&self) -> &ArtifactWriter<P> {
        &self.writer
    }
}
