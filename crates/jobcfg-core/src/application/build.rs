//! The config builder.
//!
//! # Algorithm
//!
//! 1. Start from `Config::default()`.
//! 2. Apply each modifier in sequence order, in place.
//! 3. Stop at the first modifier that returns an error.
//!
//! There is no rollback: on failure the configuration keeps every change made
//! by the modifiers applied so far, including any change the failing modifier
//! made before it returned.  The error itself is passed through unchanged.

use tracing::debug;

use crate::domain::config::Config;
use crate::domain::modifier::{Modifier, ModifyError};

/// Applies `modifiers` to `config` in order, stopping at the first error.
///
/// # Errors
///
/// Returns the first [`ModifyError`] produced by a modifier.  Modifiers after
/// the failing one are not applied.
pub fn apply_all<I>(config: &mut Config, modifiers: I) -> Result<(), ModifyError>
where
    I: IntoIterator,
    I::Item: Modifier,
{
    for (index, modifier) in modifiers.into_iter().enumerate() {
        if let Err(e) = modifier.modify(config) {
            debug!(index, jobs = config.jobs, "modifier failed: {e}");
            return Err(e);
        }
        debug!(index, jobs = config.jobs, "modifier applied");
    }
    Ok(())
}

/// Builds a [`Config`] by folding `modifiers` over the default configuration.
///
/// Returns the configuration together with the outcome.  On failure the
/// configuration reflects every modifier up to and including the failing one.
///
/// # Examples
///
/// ```rust
/// use jobcfg_core::{build, jobs_at_most, number_of_jobs, Config, Modifier, ModifyError};
///
/// let (cfg, result) = build([number_of_jobs(1), number_of_jobs(2)]);
/// assert_eq!(cfg, Config { jobs: 2 });
/// assert_eq!(result, Ok(()));
///
/// let mods: [&dyn Modifier; 3] = [&number_of_jobs(9), &jobs_at_most(4), &number_of_jobs(1)];
/// let (cfg, result) = build(mods);
/// assert_eq!(cfg, Config { jobs: 9 });
/// assert_eq!(result, Err(ModifyError::JobsExceedLimit { jobs: 9, max: 4 }));
/// ```
pub fn build<I>(modifiers: I) -> (Config, Result<(), ModifyError>)
where
    I: IntoIterator,
    I::Item: Modifier,
{
    let mut config = Config::default();
    let result = apply_all(&mut config, modifiers);
    (config, result)
}

/// Like [`build`], but discards the partial configuration on failure.
///
/// # Errors
///
/// Returns the first [`ModifyError`] produced by a modifier.
pub fn try_build<I>(modifiers: I) -> Result<Config, ModifyError>
where
    I: IntoIterator,
    I::Item: Modifier,
{
    let (config, result) = build(modifiers);
    result.map(|()| config)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
