//! Infrastructure layer: file system access.
//!
//! Only profile loading touches the disk.  Keeping it here means the
//! application layer can be exercised in tests with in-memory profiles.

pub mod profile;

pub use profile::{load_profile, ProfileError};
