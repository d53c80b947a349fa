//! Application layer: the build operation.
//!
//! The application layer orchestrates domain types.  For jobcfg that is a
//! single fold: take a default [`crate::Config`] and apply every modifier in
//! order until one fails.

/// The config builder: `build`, `try_build` and `apply_all`.
pub mod build;
