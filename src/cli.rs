// CLI module - command-line argument parsing
//
// Flags combine freely:
// - -t/--theme, -r/--readme, -a/--all pick what to generate
// - -v/--verbose prints each artifact before its write prompt
// - -d/--dry-run skips every prompt and write
// - -h/--help prints usage and exits 0, whatever else was passed
//
// Unknown flags (and stray positionals outside a subcommand) are dropped
// before clap sees them, so they are silently ignored instead of being usage
// errors. Help is checked on the raw arguments first.

use crate::config::VERSION;
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

/// Long flags clap knows about (without the leading `--`)
const KNOWN_LONG: &[&str] = &[
    "theme", "readme", "all", "verbose", "dry-run", "help", "version",
];

/// Short flags clap knows about
const KNOWN_SHORT: &[char] = &['t', 'r', 'a', 'v', 'd', 'h', 'V'];

/// Subcommand names, including clap's generated `help`
const SUBCOMMANDS: &[&str] = &["extract-colors", "help"];

/// Color theme generator - builds the theme file and README color table
#[derive(Parser, Debug)]
#[command(name = "themegen")]
#[command(version = VERSION)]
#[command(
    about = "Generate the color theme and README color table from annotated JSON manifests",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Generate the theme file
    #[arg(short = 't', long)]
    pub theme: bool,

    /// Generate the README
    #[arg(short = 'r', long)]
    pub readme: bool,

    /// Generate the theme file and the README
    #[arg(short = 'a', long)]
    pub all: bool,

    /// Print each generated artifact before the write prompt
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Don't prompt and don't write anything
    #[arg(short = 'd', long = "dry-run")]
    pub dry_run: bool,

    /// Arguments dropped before parsing
    #[arg(skip)]
    pub ignored: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract a theme file's sorted "colors" block for diffing
    ExtractColors {
        /// Generated theme file to read
        source: PathBuf,

        /// Output file (".json" is appended when missing)
        dest: PathBuf,
    },
}

impl Cli {
    /// Parse the process arguments, ignoring unknown flags. Help, version
    /// and genuine usage errors exit here.
    pub fn parse_lenient() -> Self {
        Self::try_parse_lenient_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Parse `args` (program name first), ignoring unknown flags.
    ///
    /// A help flag anywhere before `--` wins over everything else, even inside
    /// a cluster with unknown letters; it comes back as clap's
    /// `ErrorKind::DisplayHelp`.
    pub fn try_parse_lenient_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let raw: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if requests_help(&raw) {
            let program = raw.first().cloned().unwrap_or_else(|| "themegen".into());
            return Self::try_parse_from([program, OsString::from("--help")]);
        }

        let (args, ignored) = filter_known_flags(raw);
        let mut cli = Self::try_parse_from(args)?;
        cli.ignored = ignored;
        Ok(cli)
    }

    pub fn wants_theme(&self) -> bool {
        self.theme || self.all
    }

    pub fn wants_readme(&self) -> bool {
        self.readme || self.all
    }
}

/// Whether a top-level flag is one clap will accept. None of the flags take
/// a value, so `--flag=value` never is.
fn is_known_flag(arg: &str) -> bool {
    if let Some(long) = arg.strip_prefix("--") {
        return KNOWN_LONG.contains(&long);
    }
    match arg.strip_prefix('-') {
        Some(cluster) => cluster.chars().all(|c| KNOWN_SHORT.contains(&c)),
        None => true,
    }
}

/// Split `args` into what clap should see and what gets ignored.
///
/// Before a subcommand only known flags survive; a subcommand name switches
/// to keeping positionals (and everything after `--`) while dropping flags.
pub fn filter_known_flags(
    args: impl IntoIterator<Item = OsString>,
) -> (Vec<OsString>, Vec<String>) {
    let mut kept = Vec::new();
    let mut ignored = Vec::new();
    let mut args = args.into_iter();
    if let Some(program) = args.next() {
        kept.push(program);
    }

    let mut in_subcommand = false;
    let mut passthrough = false;
    for arg in args {
        let keep = match arg.to_str() {
            _ if passthrough => in_subcommand,
            Some("--") => {
                passthrough = true;
                in_subcommand
            }
            Some(s) if s.starts_with('-') && s != "-" => !in_subcommand && is_known_flag(s),
            Some(s) if !in_subcommand && SUBCOMMANDS.contains(&s) => {
                in_subcommand = true;
                true
            }
            _ => in_subcommand,
        };

        if keep {
            kept.push(arg);
        } else {
            ignored.push(arg.to_string_lossy().into_owned());
        }
    }
    (kept, ignored)
}

/// Whether `-h`/`--help` appears before any `--`
fn requests_help(args: &[OsString]) -> bool {
    args.iter()
        .skip(1)
        .filter_map(|a| a.to_str())
        .take_while(|a| *a != "--")
        .any(|a| {
            a == "--help" || (a.starts_with('-') && !a.starts_with("--") && a.contains('h'))
        })
}
