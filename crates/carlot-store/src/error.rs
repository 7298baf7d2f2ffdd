//! # Store Error Types
//!
//! Error types for flat-file operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error (file open/read/write)                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← adds the file path as context              │
//! │       │                                                                 │
//! │       ├──► LedgerError (when the engine is mid-commit)                 │
//! │       │                                                                 │
//! │       └──► interaction layer message otherwise                         │
//! │                                                                         │
//! │  Malformed LINES never propagate: loaders skip them with a warn!       │
//! │  so one bad record cannot take the whole file down. Malformed          │
//! │  FIELDS inside a parser do surface, as `StoreError::Malformed`.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use carlot_core::LedgerError;
use thiserror::Error;

/// Flat-file operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An underlying filesystem operation failed.
    ///
    /// ## When This Occurs
    /// - Data directory cannot be created
    /// - File permissions issue
    /// - Disk full
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A record line did not parse.
    ///
    /// Loaders convert this into a `warn!` and skip the line; it only
    /// reaches callers from single-record code paths.
    #[error("Malformed record in {file} (line {line}): {reason}")]
    Malformed {
        file: String,
        line: usize,
        reason: String,
    },
}

impl StoreError {
    /// Creates an Io error carrying the offending path.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a Malformed error for a record line.
    pub fn malformed(file: impl Into<String>, line: usize, reason: impl Into<String>) -> Self {
        StoreError::Malformed {
            file: file.into(),
            line,
            reason: reason.into(),
        }
    }
}

/// The checkout engine sees store failures as opaque ledger failures.
impl From<StoreError> for LedgerError {
    fn from(err: StoreError) -> Self {
        LedgerError::new(err.to_string())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
