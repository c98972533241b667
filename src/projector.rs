//! Projection of a promotion list onto a single calendar day.
//!
//! The same filter backs the calendar grid accents, the per-day counts, and
//! the day-detail views, so its ordering contract matters: the input order is
//! preserved, and the first surviving promotion is the one a renderer uses
//! for its single accent color.

use chrono::NaiveDate;

use crate::domain::Promotion;

/// The promotions active on `day`, in input order.
///
/// A promotion survives when it is flagged active and its inclusive
/// `[start, end]` range contains `day`; records with malformed date bounds
/// are skipped. No re-sorting happens here; callers depend on the stable
/// order to pick the "first" promotion.
#[must_use]
pub fn active_on<'a>(day: NaiveDate, promotions: &'a [Promotion]) -> Vec<&'a Promotion> {
    promotions.iter().filter(|p| p.is_active_on(day)).collect()
}

/// Number of promotions active on `day`.
#[must_use]
pub fn count_on(day: NaiveDate, promotions: &[Promotion]) -> usize {
    promotions.iter().filter(|p| p.is_active_on(day)).count()
}

/// A day's promotions truncated for display.
#[derive(Debug, Clone)]
pub struct DayView<'a> {
    visible: Vec<&'a Promotion>,
    hidden: usize,
}

impl<'a> DayView<'a> {
    /// The promotions shown, at most the requested limit, in input order.
    #[must_use]
    pub fn visible(&self) -> &[&'a Promotion] {
        &self.visible
    }

    /// How many active promotions were truncated away ("+N more").
    #[must_use]
    pub const fn hidden(&self) -> usize {
        self.hidden
    }

    /// Total active promotions on the day.
    #[must_use]
    pub fn total(&self) -> usize {
        self.visible.len() + self.hidden
    }

    /// The promotion that determines the day's accent color, if any.
    #[must_use]
    pub fn accent(&self) -> Option<&'a Promotion> {
        self.visible.first().copied()
    }
}

/// The first `limit` promotions active on `day` plus the count of the rest.
#[must_use]
pub fn visible_on<'a>(day: NaiveDate, promotions: &'a [Promotion], limit: usize) -> DayView<'a> {
    let mut active = active_on(day, promotions);
    let hidden = active.len().saturating_sub(limit);
    active.truncate(limit);
    DayView {
        visible: active,
        hidden,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Color, PromotionId};

    fn promo(id: &str, start: &str, end: &str, active: bool) -> Promotion {
        Promotion {
            id: PromotionId::new(id),
            title: format!("Promotion {id}"),
            start_date: start.to_string(),
            end_date: end.to_string(),
            is_active: active,
            color: Color::Blue,
            description: String::new(),
            time: String::new(),
            price: String::new(),
            original_price: String::new(),
            discount: String::new(),
            duration: String::new(),
            max_participants: 0,
            promotion_type: String::new(),
            terms: String::new(),
            created_at: None,
            updated_at: None,
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
    }

    #[test]
    fn empty_list_projects_empty() {
        assert!(active_on(date("2025-09-03"), &[]).is_empty());
        assert_eq!(count_on(date("2025-09-03"), &[]), 0);
    }

    #[test]
    fn bounds_are_inclusive() {
        let promos = vec![promo("p", "2025-09-01", "2025-09-05", true)];
        assert!(active_on(date("2025-08-31"), &promos).is_empty());
        assert_eq!(active_on(date("2025-09-01"), &promos).len(), 1);
        assert_eq!(active_on(date("2025-09-05"), &promos).len(), 1);
        assert!(active_on(date("2025-09-06"), &promos).is_empty());
    }

    #[test]
    fn inactive_promotion_excluded_despite_date_match() {
        let promos = vec![promo("p", "2025-09-01", "2025-09-05", false)];
        assert!(active_on(date("2025-09-03"), &promos).is_empty());
    }

    #[test]
    fn input_order_preserved() {
        let promos = vec![
            promo("a", "2025-09-01", "2025-09-30", true),
            promo("b", "2025-09-02", "2025-09-04", false),
            promo("c", "2025-09-01", "2025-09-10", true),
            promo("d", "2025-09-03", "2025-09-03", true),
        ];
        let active = active_on(date("2025-09-03"), &promos);
        let ids: Vec<&str> = active.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "c", "d"]);
    }

    #[test]
    fn malformed_record_skipped_without_affecting_others() {
        let promos = vec![
            promo("bad", "not-a-date", "2025-09-05", true),
            promo("good", "2025-09-01", "2025-09-05", true),
        ];
        let active = active_on(date("2025-09-03"), &promos);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id.as_str(), "good");
    }

    #[test]
    fn count_matches_active_len() {
        let promos = vec![
            promo("a", "2025-09-01", "2025-09-30", true),
            promo("b", "2025-09-01", "2025-09-02", true),
        ];
        let day = date("2025-09-02");
        assert_eq!(count_on(day, &promos), active_on(day, &promos).len());
    }

    #[test]
    fn visible_on_truncates_and_counts_hidden() {
        let promos: Vec<Promotion> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|id| promo(id, "2025-09-01", "2025-09-30", true))
            .collect();
        let view = visible_on(date("2025-09-15"), &promos, 3);
        assert_eq!(view.visible().len(), 3);
        assert_eq!(view.hidden(), 2);
        assert_eq!(view.total(), 5);
        assert_eq!(view.accent().map(|p| p.id.as_str()), Some("a"));
    }

    #[test]
    fn visible_on_under_limit_hides_nothing() {
        let promos = vec![promo("a", "2025-09-01", "2025-09-30", true)];
        let view = visible_on(date("2025-09-15"), &promos, 3);
        assert_eq!(view.visible().len(), 1);
        assert_eq!(view.hidden(), 0);
    }

    #[test]
    fn visible_on_empty_day_has_no_accent() {
        let promos = vec![promo("a", "2025-09-01", "2025-09-05", true)];
        let view = visible_on(date("2025-10-01"), &promos, 3);
        assert!(view.visible().is_empty());
        assert!(view.accent().is_none());
        assert_eq!(view.total(), 0);
    }
}
