//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Promotion identifier - newtype for type safety.
///
/// Identifiers are assigned by the backend and opaque to this crate; the
/// inner String is private so all construction goes through the defined
/// constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PromotionId(String);

impl PromotionId {
    /// Create a new `PromotionId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the promotion ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PromotionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PromotionId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for PromotionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Bookable tour package identifier.
///
/// The backend keys packages numerically; the inner u64 is private to keep
/// construction explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageId(u64);

impl PackageId {
    /// Create a new `PackageId` from a u64 value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PackageId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl std::str::FromStr for PackageId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse::<u64>().map(Self::new)
    }
}
