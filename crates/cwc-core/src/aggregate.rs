//! Hours aggregation over entered shift counts.
//!
//! Turns per-category counts plus an FTE assignment into the totals the
//! calculator reports: a per-category breakdown, total hours worked, the
//! FTE-scaled annual target, and the hours remaining against it.

use serde::Serialize;

use crate::catalog::CatalogKind;

/// Entered shift counts, one slot per catalog category.
///
/// Slot order matches the catalog declaration order. Counts may be
/// fractional (half shifts are entered in practice); callers clamp
/// negatives to zero before handing counts in.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ShiftCounts {
    pub weekday: [f64; 4],
    pub weekend: [f64; 4],
    pub conversion: [f64; 2],
    pub john_muir: [f64; 1],
}

impl ShiftCounts {
    /// Counts for the given catalog, in category order.
    #[must_use]
    pub fn slots(&self, kind: CatalogKind) -> &[f64] {
        match kind {
            CatalogKind::Weekday => &self.weekday,
            CatalogKind::Weekend => &self.weekend,
            CatalogKind::Conversion => &self.conversion,
            CatalogKind::JohnMuir => &self.john_muir,
        }
    }
}

/// One row of the hours breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BreakdownEntry {
    pub category: &'static str,
    pub shifts: f64,
    pub hours_per_shift: f64,
    pub total_hours: f64,
}

/// Aggregated hours with the per-category breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoursSummary {
    /// One entry per catalog category, in catalog order.
    pub breakdown: Vec<BreakdownEntry>,

    /// Sum of hours across all breakdown entries.
    pub total_hours: f64,

    /// FTE-scaled annual target.
    pub expected_annual_hours: f64,

    /// Hours still to be worked; floored at zero once the target is met.
    pub remaining_hours: f64,
}

impl HoursSummary {
    /// Percentage of the annual target met so far.
    ///
    /// Returns 0 when the target itself is zero (e.g. FTE 0).
    #[must_use]
    pub fn percent_complete(&self) -> f64 {
        if self.expected_annual_hours > 0.0 {
            self.total_hours / self.expected_annual_hours * 100.0
        } else {
            0.0
        }
    }
}

/// Aggregates entered counts into totals against the FTE-scaled target.
///
/// Produces one breakdown entry per catalog category, in catalog order,
/// including zero-count categories. Over-achievement shows up as a larger
/// `total_hours`, never as negative `remaining_hours`.
#[must_use]
pub fn aggregate(counts: &ShiftCounts, fte: f64, full_time_annual_hours: f64) -> HoursSummary {
    let mut breakdown = Vec::new();
    for kind in CatalogKind::ALL {
        for (category, &shifts) in kind.categories().iter().zip(counts.slots(kind)) {
            breakdown.push(BreakdownEntry {
                category: category.label,
                shifts,
                hours_per_shift: category.hours_per_shift,
                total_hours: shifts * category.hours_per_shift,
            });
        }
    }

    let total_hours: f64 = breakdown.iter().map(|entry| entry.total_hours).sum();
    let expected_annual_hours = fte * full_time_annual_hours;
    let remaining_hours = (expected_annual_hours - total_hours).max(0.0);

    HoursSummary {
        breakdown,
        total_hours,
        expected_annual_hours,
        remaining_hours,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FULL_TIME_ANNUAL_HOURS;

    #[test]
    #[expect(
        clippy::float_cmp,
        reason = "exact values expected from integer-valued inputs"
    )]
    fn zero_counts_leave_full_target_remaining() {
        let summary = aggregate(&ShiftCounts::default(), 1.0, FULL_TIME_ANNUAL_HOURS);

        assert_eq!(summary.total_hours, 0.0);
        assert_eq!(summary.expected_annual_hours, 1750.0);
        assert_eq!(summary.remaining_hours, 1750.0);
        assert_eq!(summary.percent_complete(), 0.0);
    }

    #[test]
    #[expect(
        clippy::float_cmp,
        reason = "exact values expected from integer-valued inputs"
    )]
    fn totals_follow_hour_values() {
        let counts = ShiftCounts {
            weekday: [3.0, 0.0, 0.0, 2.0], // 3 service days + 2 call nights
            weekend: [0.0, 4.0, 0.0, 0.0], // 4 weekend 4th attending days
            conversion: [1.0, 0.0],
            john_muir: [1.5],
        };
        let summary = aggregate(&counts, 1.0, FULL_TIME_ANNUAL_HOURS);

        // 3*10 + 2*16 + 4*2.5 + 1*10 + 1.5*12 = 100
        assert_eq!(summary.total_hours, 100.0);
        assert_eq!(summary.remaining_hours, 1650.0);
    }

    #[test]
    #[expect(
        clippy::float_cmp,
        reason = "exact values expected from integer-valued inputs"
    )]
    fn expected_hours_scale_with_fte() {
        let counts = ShiftCounts::default();

        let half = aggregate(&counts, 0.5, FULL_TIME_ANNUAL_HOURS);
        assert_eq!(half.expected_annual_hours, 875.0);

        let four_fifths = aggregate(&counts, 0.8, FULL_TIME_ANNUAL_HOURS);
        assert_eq!(four_fifths.expected_annual_hours, 1400.0);

        let zero = aggregate(&counts, 0.0, FULL_TIME_ANNUAL_HOURS);
        assert_eq!(zero.expected_annual_hours, 0.0);
        assert_eq!(zero.percent_complete(), 0.0);
    }

    #[test]
    #[expect(
        clippy::float_cmp,
        reason = "exact values expected from integer-valued inputs"
    )]
    fn remaining_floors_at_zero_when_target_exceeded() {
        let counts = ShiftCounts {
            weekday: [200.0, 0.0, 0.0, 0.0], // 2000 hrs, past the target
            ..Default::default()
        };
        let summary = aggregate(&counts, 1.0, FULL_TIME_ANNUAL_HOURS);

        assert_eq!(summary.total_hours, 2000.0);
        assert_eq!(summary.remaining_hours, 0.0);
    }

    #[test]
    fn percent_complete_can_exceed_one_hundred() {
        let counts = ShiftCounts {
            weekday: [200.0, 0.0, 0.0, 0.0],
            ..Default::default()
        };
        let summary = aggregate(&counts, 1.0, FULL_TIME_ANNUAL_HOURS);

        assert!(summary.percent_complete() > 100.0);
    }

    #[test]
    fn breakdown_covers_every_category_in_catalog_order() {
        let summary = aggregate(&ShiftCounts::default(), 1.0, FULL_TIME_ANNUAL_HOURS);

        let labels: Vec<&str> = summary
            .breakdown
            .iter()
            .map(|entry| entry.category)
            .collect();
        assert_eq!(
            labels,
            [
                "Service Weekday",
                "4th Attending Weekday",
                "Jeopardy Weekday",
                "Call Night",
                "Service Weekend Day",
                "4th Attending Weekend Day",
                "Jeopardy Weekend Day",
                "Call Night",
                "Jeopardy",
                "4th Attending",
                "Shift",
            ]
        );
    }

    #[test]
    fn slot_arrays_match_catalog_lengths() {
        let counts = ShiftCounts::default();
        for kind in CatalogKind::ALL {
            assert_eq!(
                counts.slots(kind).len(),
                kind.categories().len(),
                "{kind:?} slot count drifted from its catalog"
            );
        }
    }

    #[test]
    fn summary_serializes_snake_case_keys() {
        let summary = aggregate(&ShiftCounts::default(), 1.0, FULL_TIME_ANNUAL_HOURS);
        let json = serde_json::to_value(&summary).unwrap();

        assert!(json.get("total_hours").is_some());
        assert!(json.get("expected_annual_hours").is_some());
        assert!(json.get("remaining_hours").is_some());
        let first = &json["breakdown"][0];
        assert_eq!(first["category"], "Service Weekday");
        assert!(first.get("hours_per_shift").is_some());
    }
}
