//! # Profile Repository
//!
//! Reads and writes `dealership.txt`: exactly two lines, the dealership
//! name and its location.

use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

use carlot_core::DealershipProfile;

use crate::error::{StoreError, StoreResult};

/// Repository for the dealership profile file.
#[derive(Debug, Clone)]
pub struct ProfileFile {
    path: PathBuf,
}

impl ProfileFile {
    /// Creates a repository over the given file path.
    pub fn new(path: PathBuf) -> Self {
        ProfileFile { path }
    }

    /// Rewrites the profile file.
    pub fn save(&self, profile: &DealershipProfile) -> StoreResult<()> {
        let contents = format!("{}\n{}\n", profile.name, profile.location);
        fs::write(&self.path, contents)
            .map_err(|e| StoreError::io(self.path.display().to_string(), e))?;

        debug!(name = %profile.name, "Saved dealership profile");
        Ok(())
    }

    /// Loads the profile, or `None` when no usable profile exists.
    ///
    /// A missing file means the store was never configured; a truncated
    /// file is treated the same way, with a warning.
    pub fn load(&self) -> StoreResult<Option<DealershipProfile>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let text = fs::read_to_string(&self.path)
            .map_err(|e| StoreError::io(self.path.display().to_string(), e))?;

        let mut lines = text.lines();
        match (lines.next(), lines.next()) {
            (Some(name), Some(location)) => Ok(Some(DealershipProfile {
                name: name.trim().to_string(),
                location: location.trim().to_string(),
            })),
            _ => {
                warn!(path = %self.path.display(), "Dealership profile file is truncated");
                Ok(None)
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let repo = ProfileFile::new(dir.path().join("dealership.txt"));

        let profile = DealershipProfile {
            name: "Hilltop Motors".to_string(),
            location: "Springfield".to_string(),
        };
        repo.save(&profile).unwrap();

        assert_eq!(repo.load().unwrap(), Some(profile));
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let repo = ProfileFile::new(dir.path().join("dealership.txt"));
        assert_eq!(repo.load().unwrap(), None);
    }

    #[test]
    fn test_truncated_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dealership.txt");
        fs::write(&path, "Hilltop Motors\n").unwrap();

        assert_eq!(ProfileFile::new(path).load().unwrap(), None);
    }
}
