// Artifact writer - confirm, then persist
//
// Each artifact goes Pending -> one of:
// - SkippedDryRun: dry-run mode, no prompt and no write
// - Declined: operator answered anything but y/yes
// - Written: full contents replaced the target file
//
// The decision is a pure function of the mode and the operator's answer;
// reading that answer is behind the `Prompter` trait so tests never touch
// stdin.

use crate::error::GenError;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// What happened to one artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    SkippedDryRun,
    Declined,
    Written,
}

/// Asks the operator a yes/no question and returns the raw answer
pub trait Prompter {
    fn ask(&mut self, question: &str) -> std::io::Result<String>;
}

/// Prompt on stderr, answer from one line of stdin
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn ask(&mut self, question: &str) -> std::io::Result<String> {
        eprint!("{}", question);
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().lock().read_line(&mut input)?;
        Ok(input)
    }
}

/// True for "y" or "yes", ignoring case and surrounding whitespace
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

/// Whether to persist, given the mode and the operator's answer (if asked)
pub fn should_persist(dry_run: bool, answer: Option<&str>) -> bool {
    !dry_run && answer.is_some_and(is_affirmative)
}

/// Writes generated artifacts after confirmation
pub struct ArtifactWriter<P: Prompter> {
    prompter: P,
    dry_run: bool,
}

impl<P: Prompter> ArtifactWriter<P> {
    pub fn new(prompter: P, dry_run: bool) -> Self {
        Self { prompter, dry_run }
    }

    /// Confirm and write `contents` to `path`.
    ///
    /// A declined write is not an error. I/O failures (reading the answer or
    /// writing the file) are.
    pub fn save(&mut self, path: &Path, contents: &str) -> Result<Outcome, GenError> {
        if self.dry_run {
            tracing::debug!("Dry run, not writing {}", path.display());
            return Ok(Outcome::SkippedDryRun);
        }

        let question = format!("Write {}? [y/N] ", path.display());
        let answer = self
            .prompter
            .ask(&question)
            .map_err(|e| GenError::io("<stdin>", e))?;

        if !should_persist(self.dry_run, Some(&answer)) {
            tracing::info!("Skipped {}", path.display());
            return Ok(Outcome::Declined);
        }

        write_atomic(path, contents)?;
        tracing::info!("Wrote {} ({} bytes)", path.display(), contents.len());
        Ok(Outcome::Written)
    }

    #[cfg(test)]
    pub fn prompter(&self) -> &P {
        &self.prompter
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.tmp", name))
}

/// Write the whole file via a temp sibling and rename, creating parent
/// directories as needed.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), GenError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| GenError::io(parent, e))?;
        }
    }

    let tmp = temp_sibling(path);
    std::fs::write(&tmp, contents).map_err(|e| GenError::io(&tmp, e))?;
    std::fs::rename(&tmp, path).map_err(|e| {
        let _ = std::fs::remove_file(&tmp);
        GenError::io(path, e)
    })
}

/// Scripted answers for tests; records every question asked
#[cfg(test)]
pub struct ScriptedPrompter {
    answers: std::collections::VecDeque<String>,
    pub asked: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &str) -> std::io::Result<String> {
        self.asked.push(question.to_string());
        // Running out of answers behaves like EOF on stdin
        Ok(self.answers.pop_front().unwrap_or_default())
    }
}
