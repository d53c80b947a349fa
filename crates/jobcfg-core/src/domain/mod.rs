//! Domain types for jobcfg.
//!
//! Everything in this module is pure data and pure functions: no file system
//! access, no environment variables, no global state.  That keeps the
//! builder trivially testable and usable from any front end.

/// The configuration aggregate being built.
pub mod config;

/// The `Modifier` capability and the built-in modifiers.
pub mod modifier;

/// Serde-tagged modifiers and modifier lists (profiles).
pub mod profile;
