//! Domain validation errors.
//!
//! Returned by `validate` methods that check domain rules before a request
//! leaves the process.

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field was left blank.
    #[error("{field} is required")]
    MissingField {
        /// The blank field.
        field: &'static str,
    },

    /// The email address does not look deliverable.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// A date field did not parse as `yyyy-MM-dd`.
    #[error("invalid date for {field}: {value}")]
    InvalidDate {
        /// The offending field.
        field: &'static str,
        /// The raw value received.
        value: String,
    },

    /// The end of the requested range precedes its start.
    #[error("end date {end} is before start date {start}")]
    EndBeforeStart {
        /// Requested start date.
        start: chrono::NaiveDate,
        /// Requested end date.
        end: chrono::NaiveDate,
    },

    /// The booking amount must be positive.
    #[error("amount must be positive, got {amount}")]
    NonPositiveAmount {
        /// The invalid amount that was provided.
        amount: rust_decimal::Decimal,
    },
}
