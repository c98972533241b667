//! Booking request and confirmation types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::{parse_iso_date, DateSpan};

use super::error::DomainError;
use super::id::PackageId;

/// A booking submission for a tour package over an inclusive date range.
///
/// Mirrors the customer booking form: the same field set travels to
/// `POST /customer/bookings` unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub package_id: PackageId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub start_date: String,
    pub end_date: String,
    pub amount: Decimal,
}

impl BookingRequest {
    /// Validate the request before submission.
    ///
    /// Applies the same checks the original booking form ran client-side:
    /// non-blank names and phone, a plausible email, both dates parsing as
    /// `yyyy-MM-dd`, start not after end, and a positive amount.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule as a [`DomainError`].
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.first_name.trim().is_empty() {
            return Err(DomainError::MissingField {
                field: "first_name",
            });
        }
        if self.last_name.trim().is_empty() {
            return Err(DomainError::MissingField { field: "last_name" });
        }
        if self.email.trim().is_empty() {
            return Err(DomainError::MissingField { field: "email" });
        }
        if !plausible_email(&self.email) {
            return Err(DomainError::InvalidEmail(self.email.clone()));
        }
        if self.phone.trim().is_empty() {
            return Err(DomainError::MissingField { field: "phone" });
        }

        let start = parse_iso_date(&self.start_date).ok_or_else(|| DomainError::InvalidDate {
            field: "start_date",
            value: self.start_date.clone(),
        })?;
        let end = parse_iso_date(&self.end_date).ok_or_else(|| DomainError::InvalidDate {
            field: "end_date",
            value: self.end_date.clone(),
        })?;
        if end < start {
            return Err(DomainError::EndBeforeStart { start, end });
        }

        if self.amount <= Decimal::ZERO {
            return Err(DomainError::NonPositiveAmount {
                amount: self.amount,
            });
        }

        Ok(())
    }

    /// The requested stay as a parsed span, when both bounds are valid.
    #[must_use]
    pub fn span(&self) -> Option<DateSpan> {
        DateSpan::parse(&self.start_date, &self.end_date)
    }
}

/// An email is plausible when an `@` splits it into two non-empty halves.
fn plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.trim().is_empty() && !domain.trim().is_empty(),
        None => false,
    }
}

/// Confirmation returned by the backend for a created reservation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    #[serde(default, alias = "reservationID")]
    pub reservation_id: Option<u64>,
    #[serde(default)]
    pub confirmation_number: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl BookingConfirmation {
    /// A human-readable reference for the reservation, preferring the
    /// confirmation number the backend generates.
    #[must_use]
    pub fn reference(&self) -> String {
        if let Some(number) = &self.confirmation_number {
            return number.clone();
        }
        match self.reservation_id {
            Some(id) => format!("reservation #{id}"),
            None => "reservation created".to_string(),
        }
    }
}
