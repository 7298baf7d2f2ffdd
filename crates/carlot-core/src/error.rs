//! # Error Types
//!
//! Domain-specific error types for carlot-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  carlot-core errors (this file)                                        │
//! │  ├── CoreError        - Checkout and catalog failures                  │
//! │  ├── ValidationError  - Input field validation failures                │
//! │  └── LedgerError      - Opaque collaborator write failure              │
//! │                                                                         │
//! │  carlot-store errors (separate crate)                                  │
//! │  └── StoreError       - Flat-file read/write failures                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError ← LedgerError ← StoreError          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (vehicle id, field name, etc.)
//! 3. Errors are enum variants, never String
//! 4. Every variant is recoverable at the caller, except `PartialCommit`,
//!    which is terminal for its transaction and carries reconciliation data

use thiserror::Error;

use crate::checkout::CheckoutState;
use crate::types::Vehicle;

// =============================================================================
// Core Error
// =============================================================================

/// Checkout and catalog errors.
///
/// These errors represent business rule violations or checkout failures.
/// They should be caught and translated to user-facing messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The cart has zero items, so there is nothing to check out.
    #[error("Cart is empty")]
    EmptyCart,

    /// No customer was selected for the checkout session.
    #[error("No customer selected")]
    NoCustomer,

    /// A cart item is no longer present in the catalog.
    ///
    /// ## When This Occurs
    /// - The same vehicle was sold through another menu action after the
    ///   cart was assembled but before this checkout reached it
    /// - The cart references an id the catalog never held
    #[error("Vehicle {vehicle_id} is no longer available")]
    StaleReference { vehicle_id: String },

    /// Every item in the cart is priced at zero, so proportional
    /// allocation is undefined.
    #[error("Cart total is zero, cannot allocate sale amounts")]
    DegenerateCart,

    /// A vehicle failed the catalog's defensive checks.
    ///
    /// ## When This Occurs
    /// - Adding a vehicle priced at or below zero
    #[error("Invalid vehicle: {reason}")]
    InvalidVehicle { reason: String },

    /// A vehicle id was not found in the catalog.
    #[error("Vehicle not found: {vehicle_id}")]
    NotFound { vehicle_id: String },

    /// A commit failed after it had already mutated state.
    ///
    /// ## When This Occurs
    /// - A ledger write fails after at least one vehicle was removed
    /// - A vehicle vanishes mid-commit after its sale was recorded
    ///
    /// ## Recovery
    /// Inventory and ledger may disagree. `removed` lists every vehicle
    /// that left the catalog during this commit so the caller can
    /// reconcile persisted state against it.
    #[error("Commit partially applied ({} vehicles removed): {reason}", removed.len())]
    PartialCommit {
        removed: Vec<Vehicle>,
        reason: String,
    },

    /// The engine was asked to perform an operation its current state
    /// does not allow (e.g. committing before pricing).
    #[error("Cannot {operation} while checkout is {state:?}")]
    InvalidTransition {
        operation: &'static str,
        state: CheckoutState,
    },

    /// A ledger write failed before any state was mutated.
    /// Unlike `PartialCommit`, catalog and ledger are still consistent.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Input validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when form input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., malformed email or phone number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Ledger Error
// =============================================================================

/// Failure reported by the ledger collaborator.
///
/// The core does not know how sales are persisted; whatever the
/// implementation's native error is, it arrives here as a message.
#[derive(Debug, Error)]
#[error("Ledger write failed: {0}")]
pub struct LedgerError(String);

impl LedgerError {
    /// Creates a ledger error from any displayable cause.
    pub fn new(cause: impl Into<String>) -> Self {
        LedgerError(cause.into())
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
