//! The promotion record as supplied by the backend.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{is_date_in_range, DateSpan};

use super::color::Color;
use super::id::PromotionId;

/// A time-bounded promotional offer.
///
/// Promotions are created and edited entirely by the backend admin surface;
/// this crate only filters and groups them. The date bounds stay as the
/// received strings so a single corrupt record degrades to "never matches"
/// instead of failing deserialization of the whole list.
///
/// Fields beyond `id`, the date bounds, `is_active`, and `color` are display
/// metadata carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    pub id: PromotionId,
    #[serde(default)]
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    /// Inactive promotions are excluded from every projection. A missing
    /// flag reads as inactive, matching the original UI's falsy check.
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub original_price: String,
    #[serde(default)]
    pub discount: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub max_participants: u32,
    #[serde(default)]
    pub promotion_type: String,
    #[serde(default)]
    pub terms: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Promotion {
    /// The parsed inclusive date span, or `None` if either bound is
    /// malformed.
    #[must_use]
    pub fn span(&self) -> Option<DateSpan> {
        DateSpan::parse(&self.start_date, &self.end_date)
    }

    /// Whether this promotion is active and its range includes `day`.
    #[must_use]
    pub fn is_active_on(&self, day: NaiveDate) -> bool {
        self.is_active && is_date_in_range(day, &self.start_date, &self.end_date)
    }
}
