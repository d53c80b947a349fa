//! # jobcfg-core
//!
//! A small library for the "functional options" pattern: a configuration is
//! produced by folding an ordered list of *modifiers* over a default value.
//! Each modifier may change the configuration and may fail; the first failure
//! stops the fold.
//!
//! This crate has no I/O.  It is used by the `jobcfg` command-line front end
//! and can be embedded anywhere a configuration needs to be assembled from
//! optional, named parameters.
//!
//! # Architecture overview (for beginners)
//!
//! - **`domain`** – The data types: [`Config`], the [`Modifier`] trait, the
//!   built-in modifiers, and their serde-friendly tagged form [`ModifierSpec`].
//!
//! - **`application`** – The one operation of the library: [`build`], which
//!   starts from `Config::default()` and applies every modifier in order.
//!
//! # Example
//!
//! ```rust
//! use jobcfg_core::{build, number_of_jobs, Config};
//!
//! let (config, result) = build([number_of_jobs(1), number_of_jobs(2)]);
//! assert_eq!(config, Config { jobs: 2 });
//! assert!(result.is_ok());
//! ```

pub mod application;
pub mod domain;

// Re-export the most-used items at the crate root so callers can write
// `jobcfg_core::build` instead of `jobcfg_core::application::build::build`.
pub use application::build::{apply_all, build, try_build};
pub use domain::config::Config;
pub use domain::modifier::{
    from_fn, jobs_at_most, number_of_jobs, FnModifier, JobsAtMost, Modifier, ModifyError,
    NumberOfJobs,
};
pub use domain::profile::{ModifierSpec, Profile};
