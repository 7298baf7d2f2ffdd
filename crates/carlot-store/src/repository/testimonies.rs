//! # Testimony Repository
//!
//! Appends to `testimonies.txt`: customers can leave a video testimony
//! after a purchase, and the file records who left it and where the
//! video lives.
//!
//! ```text
//! Alice Nguyen,alice@example.com,/videos/alice.mp4,Great service; would buy again
//! ```
//!
//! Comments are free text, so commas in them are replaced with
//! semicolons to keep the line splittable.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

use carlot_core::Customer;

use crate::error::{StoreError, StoreResult};

/// A customer's video testimony.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimony {
    /// Customer name at recording time.
    pub customer_name: String,
    /// Customer email at recording time.
    pub customer_email: String,
    /// Filesystem path of the uploaded video.
    pub video_path: String,
    /// Free-text comments about the experience.
    pub comments: String,
}

impl Testimony {
    /// Builds a testimony for a customer.
    pub fn new(
        customer: &Customer,
        video_path: impl Into<String>,
        comments: impl Into<String>,
    ) -> Self {
        Testimony {
            customer_name: customer.name.clone(),
            customer_email: customer.email.clone(),
            video_path: video_path.into(),
            comments: comments.into(),
        }
    }
}

/// Append-only repository for the testimony log.
#[derive(Debug, Clone)]
pub struct TestimonyLog {
    path: PathBuf,
}

impl TestimonyLog {
    /// Creates a repository over the given file path.
    pub fn new(path: PathBuf) -> Self {
        TestimonyLog { path }
    }

    /// Appends one testimony, creating the file on first write.
    pub fn append(&self, testimony: &Testimony) -> StoreResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::io(self.path.display().to_string(), e))?;

        writeln!(
            file,
            "{},{},{},{}",
            testimony.customer_name,
            testimony.customer_email,
            testimony.video_path,
            testimony.comments.replace(',', ";"),
        )
        .map_err(|e| StoreError::io(self.path.display().to_string(), e))?;

        debug!(customer = %testimony.customer_name, "Recorded testimony");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_append_sanitizes_comment_commas() {
        let dir = tempfile::tempdir().unwrap();
        let log = TestimonyLog::new(dir.path().join("testimonies.txt"));

        let customer = Customer::new(
            "Alice Nguyen",
            34,
            "12 Elm St",
            "555-010-2345",
            "alice@example.com",
        );
        let testimony = Testimony::new(
            &customer,
            "/videos/alice.mp4",
            "Great service, fast, would buy again",
        );
        log.append(&testimony).unwrap();

        let text = fs::read_to_string(dir.path().join("testimonies.txt")).unwrap();
        assert_eq!(
            text,
            "Alice Nguyen,alice@example.com,/videos/alice.mp4,Great service; fast; would buy again\n"
        );
    }
}
