//! jobcfg — entry point.
//!
//! Builds a configuration by applying modifiers given on the command line
//! (and optionally read from a TOML profile), then prints the resulting
//! configuration and error status.
//!
//! # Usage
//!
//! ```text
//! jobcfg [OPTIONS]
//!
//! Options:
//!   -j, --jobs <N>          Append a "number of jobs" modifier (repeatable)
//!       --max-jobs <MAX>    Fail if the final job count exceeds MAX
//!   -p, --profile <PATH>    TOML profile applied before --jobs
//!       --format <FORMAT>   text | json [default: text]
//! ```
//!
//! With no modifiers at all, `jobcfg` runs the demo sequence (1 job, then 2)
//! and prints `{jobs: 2} error: none`.
//!
//! # Environment variable overrides
//!
//! | Variable          | Description                          |
//! |-------------------|--------------------------------------|
//! | `JOBCFG_PROFILE`  | Default for `--profile`              |
//! | `RUST_LOG`        | Log filter for stderr (default warn) |

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use jobcfg_cli::application::{assemble_modifiers, run_build};
use jobcfg_cli::infrastructure::load_profile;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Output format for the build report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Functional-options config builder.
#[derive(Debug, Parser)]
#[command(
    name = "jobcfg",
    about = "Build a configuration by applying modifiers in order",
    version
)]
struct Cli {
    /// Append a modifier that sets the number of jobs.  Repeatable; the last
    /// value wins.
    #[arg(short, long = "jobs", value_name = "N", allow_negative_numbers = true)]
    jobs: Vec<i64>,

    /// Append a final check that fails when the job count exceeds MAX.
    #[arg(long, value_name = "MAX", allow_negative_numbers = true)]
    max_jobs: Option<i64>,

    /// TOML profile whose modifiers are applied before any `--jobs`.
    #[arg(short, long, value_name = "PATH", env = "JOBCFG_PROFILE")]
    profile: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// What one invocation produced: the rendered report and whether the build
/// succeeded.
#[derive(Debug)]
struct RunOutcome {
    output: String,
    succeeded: bool,
}

impl RunOutcome {
    fn exit_code(&self) -> ExitCode {
        if self.succeeded {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Loads the profile, assembles and applies the modifiers, and renders the
/// report in the requested format.
///
/// # Errors
///
/// Returns an error if the profile cannot be loaded or the report cannot be
/// serialized.  A failing modifier is not an error here: it is reported in
/// the rendered output and in [`RunOutcome::succeeded`].
fn run(cli: Cli) -> anyhow::Result<RunOutcome> {
    let profile = match &cli.profile {
        Some(path) => Some(
            load_profile(path)
                .with_context(|| format!("failed to load profile '{}'", path.display()))?,
        ),
        None => None,
    };

    let modifiers = assemble_modifiers(profile, &cli.jobs, cli.max_jobs);
    info!("applying {} modifier(s)", modifiers.len());

    let report = run_build(&modifiers);
    let output = match cli.format {
        OutputFormat::Text => report.render_text(),
        OutputFormat::Json => report
            .render_json()
            .context("failed to serialize build report")?,
    };

    Ok(RunOutcome {
        output,
        succeeded: report.succeeded(),
    })
}

fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let outcome = run(Cli::parse())?;
    println!("{}", outcome.output);
    Ok(outcome.exit_code())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
