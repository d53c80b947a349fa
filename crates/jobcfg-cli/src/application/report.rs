//! Runs a build and renders its outcome.
//!
//! The report always carries the configuration, even when a modifier failed,
//! so the user can see how far the build got.

use jobcfg_core::{build, Config, ModifierSpec};
use serde::Serialize;
use tracing::{debug, info};

/// The outcome of one build, ready for printing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    /// The configuration after every applied modifier.
    pub config: Config,
    /// The failing modifier's error message, or `None` on success.
    pub error: Option<String>,
}

impl BuildReport {
    /// Returns `true` when every modifier applied without error.
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }

    /// Renders the report as a single line, e.g. `{jobs: 2} error: none`.
    pub fn render_text(&self) -> String {
        let error = self.error.as_deref().unwrap_or("none");
        format!("{} error: {}", self.config, error)
    }

    /// Renders the report as compact JSON, e.g. `{"config":{"jobs":2},"error":null}`.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if serialization fails.
    pub fn render_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Builds a configuration from `modifiers` and captures the outcome.
pub fn run_build(modifiers: &[ModifierSpec]) -> BuildReport {
    debug!("building config from {} modifier(s)", modifiers.len());

    let (config, result) = build(modifiers);
    let error = result.err().map(|e| e.to_string());

    match &error {
        None => info!("build succeeded: {config}"),
        Some(e) => info!("build stopped at failing modifier: {e}"),
    }

    BuildReport { config, error }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
