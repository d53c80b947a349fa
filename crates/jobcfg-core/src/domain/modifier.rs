//! The `Modifier` capability and the built-in modifiers.
//!
//! # What is a modifier? (for beginners)
//!
//! Instead of a constructor with a long list of optional parameters, the
//! functional-options pattern passes a list of small values, each of which
//! knows how to change one aspect of the configuration:
//!
//! ```rust
//! use jobcfg_core::{build, number_of_jobs};
//!
//! let (cfg, _) = build([number_of_jobs(4)]);
//! assert_eq!(cfg.jobs, 4);
//! ```
//!
//! Any type implementing [`Modifier`] can take part.  Closures can be adapted
//! with [`from_fn`], and references and boxes forward to the value they point
//! at, so a list may mix different modifier types through `&dyn Modifier` or
//! `Box<dyn Modifier>`.

use std::fmt;

use thiserror::Error;

use crate::domain::config::Config;

/// Errors a modifier can report while being applied.
///
/// The builder never wraps or rewrites these: the first error produced is
/// handed back to the caller exactly as the modifier returned it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModifyError {
    /// A [`JobsAtMost`] check found more jobs than allowed.
    #[error("jobs {jobs} exceed limit {max}")]
    JobsExceedLimit { jobs: i64, max: i64 },

    /// A free-form failure from a user-defined modifier.
    #[error("{0}")]
    Custom(String),
}

impl ModifyError {
    /// Creates a [`ModifyError::Custom`] from any displayable message.
    pub fn custom(msg: impl fmt::Display) -> Self {
        Self::Custom(msg.to_string())
    }
}

/// A value that can change a [`Config`] and may fail while doing so.
///
/// Modifiers are immutable once constructed; `modify` takes `&self` so the
/// same modifier can be applied to any number of configurations.
pub trait Modifier {
    /// Applies this modifier to `config` in place.
    ///
    /// # Errors
    ///
    /// Returns a [`ModifyError`] when the modifier cannot be applied.  The
    /// modifier decides whether `config` is changed before failing.
    fn modify(&self, config: &mut Config) -> Result<(), ModifyError>;
}

impl<M: Modifier + ?Sized> Modifier for &M {
    fn modify(&self, config: &mut Config) -> Result<(), ModifyError> {
        (**self).modify(config)
    }
}

impl<M: Modifier + ?Sized> Modifier for Box<M> {
    fn modify(&self, config: &mut Config) -> Result<(), ModifyError> {
        (**self).modify(config)
    }
}

// ── Built-in modifiers ────────────────────────────────────────────────────────

/// Sets [`Config::jobs`] to the wrapped value.  Never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberOfJobs(pub i64);

impl Modifier for NumberOfJobs {
    fn modify(&self, config: &mut Config) -> Result<(), ModifyError> {
        config.jobs = self.0;
        Ok(())
    }
}

/// Returns a modifier that sets the number of jobs to `n`.
pub fn number_of_jobs(n: i64) -> NumberOfJobs {
    NumberOfJobs(n)
}

/// Fails with [`ModifyError::JobsExceedLimit`] when the job count set so far
/// is greater than the wrapped limit.
///
/// This modifier only inspects the configuration; it never changes it.  Place
/// it after the modifiers whose result it should validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobsAtMost(pub i64);

impl Modifier for JobsAtMost {
    fn modify(&self, config: &mut Config) -> Result<(), ModifyError> {
        if config.jobs > self.0 {
            return Err(ModifyError::JobsExceedLimit {
                jobs: config.jobs,
                max: self.0,
            });
        }
        Ok(())
    }
}

/// Returns a modifier that rejects configurations with more than `max` jobs.
pub fn jobs_at_most(max: i64) -> JobsAtMost {
    JobsAtMost(max)
}

/// Adapts a closure into a [`Modifier`].  Created by [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnModifier<F>(F);

impl<F> fmt::Debug for FnModifier<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnModifier").finish_non_exhaustive()
    }
}

impl<F> Modifier for FnModifier<F>
where
    F: Fn(&mut Config) -> Result<(), ModifyError>,
{
    fn modify(&self, config: &mut Config) -> Result<(), ModifyError> {
        (self.0)(config)
    }
}

/// Wraps a closure so it can be used as a [`Modifier`].
///
/// ```rust
/// use jobcfg_core::{build, from_fn, number_of_jobs, Modifier};
///
/// let double = from_fn(|cfg| {
///     cfg.jobs *= 2;
///     Ok(())
/// });
/// let mods: [&dyn Modifier; 2] = [&number_of_jobs(3), &double];
/// let (cfg, result) = build(mods);
/// assert!(result.is_ok());
/// assert_eq!(cfg.jobs, 6);
/// ```
pub fn from_fn<F>(f: F) -> FnModifier<F>
where
    F: Fn(&mut Config) -> Result<(), ModifyError>,
{
    FnModifier(f)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
