//! Loading modifier profiles from TOML files.
//!
//! A profile lists modifiers in the order they are applied:
//!
//! ```toml
//! [[modifiers]]
//! kind = "number_of_jobs"
//! jobs = 4
//!
//! [[modifiers]]
//! kind = "jobs_at_most"
//! max = 8
//! ```
//!
//! Unlike an application config file, a missing profile is an error: the user
//! asked for it explicitly with `--profile`.

use std::path::{Path, PathBuf};

use jobcfg_core::Profile;
use thiserror::Error;
use tracing::debug;

/// Error type for profile file operations.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The file could not be read.
    #[error("I/O error reading profile at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed into a profile.
    #[error("failed to parse profile TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Reads and parses the profile at `path`.
///
/// # Errors
///
/// Returns [`ProfileError::Io`] if the file cannot be read, and
/// [`ProfileError::Parse`] if it is not a valid profile.
pub fn load_profile(path: &Path) -> Result<Profile, ProfileError> {
    let content = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let profile = Profile::from_toml_str(&content)?;
    debug!(
        "loaded {} modifier(s) from {}",
        profile.modifiers.len(),
        path.display()
    );
    Ok(profile)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use jobcfg_core::ModifierSpec;

    #[test]
    fn test_load_profile_reads_modifiers() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.toml");
        std::fs::write(
            &path,
            "[[modifiers]]\nkind = \"number_of_jobs\"\njobs = 3\n",
        )
        .unwrap();

        // Act
        let profile = load_profile(&path).unwrap();

        // Assert
        assert_eq!(profile.modifiers, vec![ModifierSpec::NumberOfJobs { jobs: 3 }]);
    }

    #[test]
    fn test_load_profile_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = load_profile(&path).unwrap_err();

        match err {
            ProfileError::Io { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_profile_malformed_toml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[[modifiers]\nkind = ").unwrap();

        assert!(matches!(load_profile(&path), Err(ProfileError::Parse(_))));
    }

    #[test]
    fn test_io_error_display_mentions_path() {
        let err = ProfileError::Io {
            path: PathBuf::from("/nowhere/profile.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("/nowhere/profile.toml"));
    }
}
