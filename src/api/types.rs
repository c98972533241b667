//! Wire-only response shapes.

use serde::Deserialize;

/// Response of the availability endpoint.
#[derive(Debug, Deserialize)]
pub struct AvailabilityResponse {
    pub available: bool,
}

/// Error payload the backend attaches to non-2xx responses.
///
/// Only `message` is consumed; it is shown to the user verbatim.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_response_deserializes() {
        let r: AvailabilityResponse = serde_json::from_str(r#"{"available": true}"#).expect("json");
        assert!(r.available);
    }

    #[test]
    fn error_body_tolerates_missing_message() {
        let b: ErrorBody = serde_json::from_str(r#"{"status": 500}"#).expect("json");
        assert!(b.message.is_none());
    }

    #[test]
    fn error_body_reads_message() {
        let b: ErrorBody =
            serde_json::from_str(r#"{"message": "Package not available for selected dates"}"#)
                .expect("json");
        assert_eq!(
            b.message.as_deref(),
            Some("Package not available for selected dates")
        );
    }
}
