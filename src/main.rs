// themegen - build-time generator for a color theme extension
//
// Reads comment-annotated JSON manifests and produces:
// - the theme file the editor extension loads (colors + tokenColors)
// - the README, with a color reference table rendered from the palette
//
// Architecture:
// - manifest: comment stripping + JSON loading with positioned errors
// - palette: color manifest model and theme color resolution
// - tokens: token rule manifest pass-through
// - theme / readme: artifact assembly
// - writer: confirm-then-write, dry-run aware
// - extract: colors-block extraction for diffing two theme versions

mod cli;
mod config;
mod error;
mod extract;
mod generate;
mod logging;
mod manifest;
mod palette;
mod readme;
mod theme;
mod tokens;
mod util;
mod writer;

use anyhow::{Context, Result};
use cli::{Cli, Commands};
use config::Config;
use generate::{Generator, Mode};
use std::process::ExitCode;
use writer::{Outcome, StdinPrompter};

fn main() -> ExitCode {
    // Help, version and usage errors exit inside the parser
    let cli = Cli::parse_lenient();

    if cli.command.is_none() && !cli.wants_theme() && !cli.wants_readme() {
        return ExitCode::SUCCESS;
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    // The guard must outlive the run so file logs flush
    let _file_guard = logging::init(&config.logging);
    tracing::debug!("themegen v{}", config::VERSION);
    match Config::config_path() {
        Some(path) if path.exists() => tracing::debug!("Config source: {}", path.display()),
        _ => tracing::debug!("Config source: defaults"),
    }
    for arg in &cli.ignored {
        tracing::debug!("Ignoring argument {}", arg);
    }

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Run failed: {:?}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: &Config) -> Result<()> {
    if let Some(Commands::ExtractColors { source, dest }) = &cli.command {
        let written = extract::extract_colors(source, dest)
            .context("Usage: themegen extract-colors <SOURCE> <DEST>")?;
        eprintln!("Colors extracted to {}", written.display());
        return Ok(());
    }

    let mode = Mode {
        verbose: cli.verbose,
        dry_run: cli.dry_run,
    };
    let mut generator = Generator::new(config, mode, StdinPrompter);
    let report = generator.run(cli.wants_theme(), cli.wants_readme())?;

    for (label, outcome) in [("Theme", report.theme), ("README", report.readme)] {
        match outcome {
            Some(Outcome::Written) => tracing::info!("{} saved", label),
            Some(Outcome::Declined) => tracing::info!("{} not saved", label),
            Some(Outcome::SkippedDryRun) => tracing::info!("{} skipped (dry run)", label),
            None => {}
        }
    }
    Ok(())
}
