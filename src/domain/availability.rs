//! Three-valued outcome of a booking availability check.

use std::fmt;

use crate::error::Result;

/// Whether a date range can be reserved for a package.
///
/// The availability endpoint answers with a boolean; a transport failure is
/// surfaced as [`Availability::Undetermined`] rather than coerced to either
/// answer, so callers can prompt the user to retry instead of silently
/// blocking or permitting the booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// The requested range is free of conflicting reservations.
    Available,
    /// The requested range overlaps an existing reservation.
    Unavailable,
    /// The check could not be completed.
    Undetermined,
}

impl Availability {
    /// Collapse a checked response into the three-valued outcome.
    #[must_use]
    pub fn from_check(result: Result<bool>) -> Self {
        match result {
            Ok(true) => Availability::Available,
            Ok(false) => Availability::Unavailable,
            Err(_) => Availability::Undetermined,
        }
    }

    /// Only a positive answer permits submitting a booking.
    #[must_use]
    pub const fn is_bookable(&self) -> bool {
        matches!(self, Availability::Available)
    }
}

impl From<Option<bool>> for Availability {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Availability::Available,
            Some(false) => Availability::Unavailable,
            None => Availability::Undetermined,
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Availability::Available => "available",
            Availability::Unavailable => "unavailable",
            Availability::Undetermined => "undetermined",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApiError, Error};

    #[test]
    fn ok_true_is_available() {
        assert_eq!(Availability::from_check(Ok(true)), Availability::Available);
    }

    #[test]
    fn ok_false_is_unavailable() {
        assert_eq!(
            Availability::from_check(Ok(false)),
            Availability::Unavailable
        );
    }

    #[test]
    fn transport_failure_is_undetermined() {
        let err = Error::Api(ApiError::Server {
            status: 502,
            message: "bad gateway".to_string(),
        });
        let outcome = Availability::from_check(Err(err));
        assert_eq!(outcome, Availability::Undetermined);
        assert_ne!(outcome, Availability::Available);
        assert_ne!(outcome, Availability::Unavailable);
    }

    #[test]
    fn only_available_is_bookable() {
        assert!(Availability::Available.is_bookable());
        assert!(!Availability::Unavailable.is_bookable());
        assert!(!Availability::Undetermined.is_bookable());
    }

    #[test]
    fn from_option_maps_absent_to_undetermined() {
        assert_eq!(Availability::from(None), Availability::Undetermined);
    }
}
