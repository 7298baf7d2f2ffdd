//! # Validation Module
//!
//! Field-level validation for data entry.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form handlers (interaction layer)                            │
//! │  ├── THIS MODULE: field checks before a type is ever built             │
//! │  └── Immediate user feedback per field                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Catalog                                                      │
//! │  └── Defensive re-checks (non-positive price never enters)             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Checkout engine                                              │
//! │  └── Liveness checks against the catalog at each step                  │
//! │                                                                         │
//! │  Defense in depth: each layer catches what the one above missed        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use carlot_core::validation::{validate_age, validate_vehicle_price};
//! use carlot_core::money::Money;
//!
//! validate_age(34).unwrap();
//! validate_vehicle_price(Money::from_cents(2_000_000)).unwrap();
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_CUSTOMER_AGE, MIN_CUSTOMER_AGE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Customer Fields
// =============================================================================

/// Validates a customer name. Must not be empty.
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    require_non_empty("name", name)
}

/// Validates a customer age.
///
/// ## Rules
/// - Must be between 18 and 120 inclusive
pub fn validate_age(age: u32) -> ValidationResult<()> {
    if !(MIN_CUSTOMER_AGE..=MAX_CUSTOMER_AGE).contains(&age) {
        return Err(ValidationError::OutOfRange {
            field: "age".to_string(),
            min: MIN_CUSTOMER_AGE as i64,
            max: MAX_CUSTOMER_AGE as i64,
        });
    }
    Ok(())
}

/// Validates a street address. Must not be empty.
pub fn validate_address(address: &str) -> ValidationResult<()> {
    require_non_empty("address", address)
}

/// Validates an email address.
///
/// ## Rules
/// - Something before the `@`, something after it
/// - Exactly one `@`
///
/// Deliverability is not this layer's problem; the check only rejects
/// strings that cannot possibly be an address.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    let mut parts = email.split('@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    let extra_at = parts.next().is_some();

    if local.is_empty() || domain.is_empty() || extra_at {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must look like name@domain".to_string(),
        });
    }
    Ok(())
}

/// Validates a phone number.
///
/// ## Rules
/// - Only digits, parentheses and hyphens
/// - At least 10 characters
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    let phone = phone.trim();
    if phone.is_empty() {
        return Err(ValidationError::Required {
            field: "phone".to_string(),
        });
    }

    let valid_chars = phone
        .chars()
        .all(|c| c.is_ascii_digit() || c == '(' || c == ')' || c == '-');
    if !valid_chars || phone.len() < 10 {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must be at least 10 digits, parentheses and hyphens only".to_string(),
        });
    }
    Ok(())
}

/// Validates every customer field at once, failing on the first problem.
pub fn validate_customer(
    name: &str,
    age: u32,
    address: &str,
    phone: &str,
    email: &str,
) -> ValidationResult<()> {
    validate_customer_name(name)?;
    validate_age(age)?;
    validate_address(address)?;
    validate_phone(phone)?;
    validate_email(email)?;
    Ok(())
}

// =============================================================================
// Vehicle Fields
// =============================================================================

/// Validates a vehicle brand. Must not be empty.
pub fn validate_vehicle_brand(brand: &str) -> ValidationResult<()> {
    require_non_empty("brand", brand)
}

/// Validates a vehicle model. Must not be empty.
pub fn validate_vehicle_model(model: &str) -> ValidationResult<()> {
    require_non_empty("model", model)
}

/// Validates a vehicle price.
///
/// ## Rules
/// - Must be strictly positive; there are no free vehicles, and a
///   zero price would break proportional allocation at checkout
pub fn validate_vehicle_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }
    Ok(())
}

/// Validates every vehicle field at once, failing on the first problem.
pub fn validate_vehicle(brand: &str, model: &str, price: Money) -> ValidationResult<()> {
    validate_vehicle_brand(brand)?;
    validate_vehicle_model(model)?;
    validate_vehicle_price(price)?;
    Ok(())
}

// =============================================================================
// Helpers
// =============================================================================

fn require_non_empty(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
