use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use polysecret_core::{
    find_constant_with, params::DEFAULT_PIVOT_EPSILON, InputDocument,
    SecretError, SolverConfig,
};
use tracing::{debug, info, instrument, Level};

#[derive(Parser, Debug)]
#[command(name = "polysecret", version)]
#[command(
    about = "Recover a polynomial's constant term from base-encoded points",
    long_about = None
)]
pub struct Cli {
    /// Input documents; one secret is reported per file, in order
    #[arg(default_values = ["testcase1.json", "testcase2.json"])]
    pub files: Vec<PathBuf>,

    /// Pivots with a smaller magnitude are treated as singular
    #[arg(
        long,
        env = "POLYSECRET_PIVOT_EPSILON",
        default_value_t = DEFAULT_PIVOT_EPSILON
    )]
    pub pivot_epsilon: f64,

    /// Indicate error levels by adding additional `-v` arguments. Eg.
    /// `polysecret -vvv` will give you trace level output
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Silence all logging except errors. This argument cannot be used
    /// alongside `-v`
    #[arg(short, long, action = ArgAction::SetTrue, conflicts_with = "verbose")]
    quiet: bool,
}

/// Why a run stopped, and which exit status reports it.
#[derive(Debug)]
pub enum RunError {
    /// A document could not be read, parsed or decoded.
    Input(anyhow::Error),
    /// A well-formed document could not be solved.
    Solve(anyhow::Error),
}

impl RunError {
    pub fn status(&self) -> u8 {
        match self {
            RunError::Input(_) => 1,
            RunError::Solve(_) => 2,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.status())
    }

    pub fn error(&self) -> &anyhow::Error {
        match self {
            RunError::Input(err) | RunError::Solve(err) => err,
        }
    }
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::WARN,  //
                1 => Level::INFO,  // -v
                2 => Level::DEBUG, // -vv
                _ => Level::TRACE, // -vvv
            }
        }
    }

    /// Load every document, then solve each one; returns the report lines.
    #[instrument(skip_all)]
    pub fn execute(&self) -> Result<Vec<String>, RunError> {
        let config = SolverConfig::new(self.pivot_epsilon)
            .context("invalid --pivot-epsilon")
            .map_err(RunError::Input)?;

        let documents = self
            .files
            .iter()
            .map(|path| load_document(path))
            .collect::<Result<Vec<_>>>()
            .map_err(RunError::Input)?;
        info!(count = documents.len(), "documents loaded");

        let mut lines = Vec::with_capacity(documents.len());
        let cases = self.files.iter().zip(&documents).enumerate();
        for (index, (path, document)) in cases {
            let testcase = index + 1;
            let secret = find_constant_with(document, &config)
                .map_err(|err| classify(err, testcase, path))?;
            debug!(testcase, %secret, "solved");
            lines.push(format!("Secret for testcase {testcase}: {secret}"));
        }
        Ok(lines)
    }
}

fn load_document(path: &Path) -> Result<InputDocument> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Error reading the file {}", path.display()))?;
    let document = InputDocument::from_json_str(&json)
        .with_context(|| format!("Error parsing the file {}", path.display()))?;
    debug!(path = %path.display(), entries = document.len(), "loaded document");
    Ok(document)
}

fn classify(err: SecretError, testcase: usize, path: &Path) -> RunError {
    let input_error = err.is_input_error();
    let err = anyhow::Error::new(err)
        .context(format!("testcase {testcase} ({}) failed", path.display()));
    if input_error {
        RunError::Input(err)
    } else {
        RunError::Solve(err)
    }
}
