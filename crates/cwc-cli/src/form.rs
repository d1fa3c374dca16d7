//! In-memory form state for a single calculator session.
//!
//! Holds the entered counts and FTE, the derived hours summary, and the
//! current shift suggestions. Suggestions are recomputed only when an edit
//! changes the remaining-hours figure; manual overrides survive edits that
//! leave it unchanged.

use cwc_core::{HoursSummary, ShiftCounts, SuggestedShifts, SuggestionField, SuggestionHours};

/// Coerces raw form input to a count.
///
/// Non-numeric, non-finite, and negative input all become zero. Fractional
/// counts are kept as entered.
#[must_use]
pub fn coerce_count(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => 0.0,
    }
}

fn clamp_counts(mut counts: ShiftCounts) -> ShiftCounts {
    for slot in counts
        .weekday
        .iter_mut()
        .chain(counts.weekend.iter_mut())
        .chain(counts.conversion.iter_mut())
        .chain(counts.john_muir.iter_mut())
    {
        // max() turns NaN into 0 here
        *slot = slot.max(0.0);
    }
    counts
}

/// Calculator form state: entered counts, FTE, and derived figures.
#[derive(Debug, Clone)]
pub struct FormState {
    full_time_annual_hours: f64,
    suggestion_hours: SuggestionHours,
    counts: ShiftCounts,
    fte: f64,
    summary: HoursSummary,
    suggested: SuggestedShifts,
}

impl FormState {
    /// Creates a fresh form: zero counts, FTE 1.0, suggestions computed
    /// from the full target.
    #[must_use]
    pub fn new(full_time_annual_hours: f64) -> Self {
        let counts = ShiftCounts::default();
        let fte = 1.0;
        let suggestion_hours = SuggestionHours::default();
        let summary = cwc_core::aggregate(&counts, fte, full_time_annual_hours);
        let suggested = cwc_core::suggest_initial(summary.remaining_hours, &suggestion_hours);

        Self {
            full_time_annual_hours,
            suggestion_hours,
            counts,
            fte,
            summary,
            suggested,
        }
    }

    /// Replaces the entered counts, clamping negatives (and NaN) to zero.
    pub fn set_counts(&mut self, counts: ShiftCounts) {
        self.counts = clamp_counts(counts);
        self.recompute();
    }

    /// Replaces the FTE value, clamping negatives (and NaN) to zero.
    pub fn set_fte(&mut self, fte: f64) {
        self.fte = fte.max(0.0);
        self.recompute();
    }

    /// Overrides one suggestion field without touching the others.
    pub fn set_suggested(&mut self, field: SuggestionField, count: f64) {
        self.suggested.set(field, count);
    }

    /// Clears all counts and restores FTE 1.0.
    pub fn reset(&mut self) {
        self.counts = ShiftCounts::default();
        self.fte = 1.0;
        self.recompute();
    }

    #[expect(
        clippy::float_cmp,
        reason = "suggestions refresh only on an exact change to the remaining figure"
    )]
    fn recompute(&mut self) {
        let previous_remaining = self.summary.remaining_hours;
        self.summary = cwc_core::aggregate(&self.counts, self.fte, self.full_time_annual_hours);
        if self.summary.remaining_hours != previous_remaining {
            self.suggested =
                cwc_core::suggest_initial(self.summary.remaining_hours, &self.suggestion_hours);
        }
    }

    /// Annual hours the form was created with.
    #[must_use]
    pub const fn full_time_annual_hours(&self) -> f64 {
        self.full_time_annual_hours
    }

    /// Current FTE assignment.
    #[must_use]
    pub const fn fte(&self) -> f64 {
        self.fte
    }

    /// Currently entered counts.
    #[must_use]
    pub const fn counts(&self) -> &ShiftCounts {
        &self.counts
    }

    /// Derived hours summary for the current inputs.
    #[must_use]
    pub const fn summary(&self) -> &HoursSummary {
        &self.summary
    }

    /// Current suggestion counts, including any manual overrides.
    #[must_use]
    pub const fn suggested(&self) -> &SuggestedShifts {
        &self.suggested
    }

    /// Hour values the suggestions are priced with.
    #[must_use]
    pub const fn suggestion_hours(&self) -> &SuggestionHours {
        &self.suggestion_hours
    }

    /// Total hours across the suggested shifts.
    #[must_use]
    pub fn total_suggested_hours(&self) -> f64 {
        self.suggested.total_hours(&self.suggestion_hours)
    }

    /// True when suggestions exceed the remaining target.
    #[must_use]
    pub fn is_over_allocated(&self) -> bool {
        self.suggested
            .is_over_allocated(self.summary.remaining_hours, &self.suggestion_hours)
    }

    /// True when suggestions leave more than an hour of the target unfilled.
    #[must_use]
    pub fn is_under_allocated(&self) -> bool {
        self.suggested
            .is_under_allocated(self.summary.remaining_hours, &self.suggestion_hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cwc_core::FULL_TIME_ANNUAL_HOURS;

    // ========== coerce_count Tests ==========

    #[test]
    #[expect(
        clippy::float_cmp,
        reason = "coercion returns exact parsed or zero values"
    )]
    fn coerce_count_parses_valid_numbers() {
        assert_eq!(coerce_count("3"), 3.0);
        assert_eq!(coerce_count("1.5"), 1.5);
        assert_eq!(coerce_count(" 2 "), 2.0);
        assert_eq!(coerce_count("0"), 0.0);
    }

    #[test]
    #[expect(
        clippy::float_cmp,
        reason = "coercion returns exact parsed or zero values"
    )]
    fn coerce_count_zeroes_invalid_input() {
        assert_eq!(coerce_count(""), 0.0);
        assert_eq!(coerce_count("abc"), 0.0);
        assert_eq!(coerce_count("3 shifts"), 0.0);
        assert_eq!(coerce_count("-5"), 0.0);
        assert_eq!(coerce_count("NaN"), 0.0);
        assert_eq!(coerce_count("inf"), 0.0);
    }

    // ========== FormState Tests ==========

    #[test]
    fn fresh_form_suggests_full_target() {
        let form = FormState::new(FULL_TIME_ANNUAL_HOURS);

        assert!((form.fte() - 1.0).abs() < f64::EPSILON);
        assert_eq!(form.suggested().service_week, 25);
        assert_eq!(form.suggested().service_weekend, 25);
        assert_eq!(form.suggested().jeopardy_week, 0);
    }

    #[test]
    #[expect(
        clippy::float_cmp,
        reason = "exact values expected from integer-valued inputs"
    )]
    fn count_edits_flow_into_summary_and_suggestions() {
        let mut form = FormState::new(FULL_TIME_ANNUAL_HOURS);

        form.set_counts(ShiftCounts {
            weekday: [30.0, 0.0, 0.0, 2.0],
            ..Default::default()
        });

        assert_eq!(form.summary().total_hours, 332.0);
        assert_eq!(form.summary().remaining_hours, 1418.0);
        // 1418 = 20 cycles (1400) + 1 jeopardy week (12.5) + 1 jeopardy weekend day (5)
        assert_eq!(form.suggested().service_week, 20);
        assert_eq!(form.suggested().jeopardy_week, 1);
        assert_eq!(form.suggested().jeopardy_weekend, 1);
    }

    #[test]
    fn override_survives_edit_that_keeps_remaining_unchanged() {
        let mut form = FormState::new(FULL_TIME_ANNUAL_HOURS);

        form.set_suggested(SuggestionField::CallNight, 3.0);
        form.set_fte(1.0); // recomputes, remaining still 1750

        assert_eq!(form.suggested().call_night, 3);
        assert_eq!(form.suggested().service_week, 25);
    }

    #[test]
    fn override_is_discarded_when_remaining_changes() {
        let mut form = FormState::new(FULL_TIME_ANNUAL_HOURS);

        form.set_suggested(SuggestionField::CallNight, 3.0);
        form.set_counts(ShiftCounts {
            weekday: [1.0, 0.0, 0.0, 0.0],
            ..Default::default()
        });

        // remaining moved to 1740: 24 cycles + 4 jeopardy weeks + 2 weekend days
        assert_eq!(form.suggested().call_night, 0);
        assert_eq!(form.suggested().service_week, 24);
        assert_eq!(form.suggested().jeopardy_week, 4);
        assert_eq!(form.suggested().jeopardy_weekend, 2);
    }

    #[test]
    #[expect(
        clippy::float_cmp,
        reason = "exact values expected from integer-valued inputs"
    )]
    fn reset_restores_initial_state() {
        let mut form = FormState::new(FULL_TIME_ANNUAL_HOURS);
        form.set_fte(0.5);
        form.set_counts(ShiftCounts {
            weekday: [10.0, 0.0, 0.0, 0.0],
            ..Default::default()
        });
        form.set_suggested(SuggestionField::JohnMuir, 7.0);

        form.reset();

        assert_eq!(form.fte(), 1.0);
        assert_eq!(form.summary().total_hours, 0.0);
        assert_eq!(form.summary().remaining_hours, 1750.0);
        assert_eq!(form.suggested().service_week, 25);
        assert_eq!(form.suggested().john_muir, 0);
    }

    #[test]
    #[expect(
        clippy::float_cmp,
        reason = "exact values expected from integer-valued inputs"
    )]
    fn negative_inputs_clamp_to_zero() {
        let mut form = FormState::new(FULL_TIME_ANNUAL_HOURS);

        form.set_counts(ShiftCounts {
            weekday: [-3.0, 0.0, 0.0, 0.0],
            john_muir: [f64::NAN],
            ..Default::default()
        });
        assert_eq!(form.summary().total_hours, 0.0);

        form.set_fte(-0.5);
        assert_eq!(form.summary().expected_annual_hours, 0.0);
        assert_eq!(form.summary().remaining_hours, 0.0);
        assert_eq!(*form.suggested(), SuggestedShifts::default());
    }

    #[test]
    fn met_target_sets_neither_flag_without_suggestions() {
        let mut form = FormState::new(FULL_TIME_ANNUAL_HOURS);
        form.set_counts(ShiftCounts {
            weekday: [175.0, 0.0, 0.0, 0.0], // exactly 1750 hrs
            ..Default::default()
        });

        assert_eq!(*form.suggested(), SuggestedShifts::default());
        assert!(!form.is_over_allocated());
        assert!(!form.is_under_allocated());
    }

    #[test]
    fn overriding_past_remaining_trips_over_allocation() {
        let mut form = FormState::new(FULL_TIME_ANNUAL_HOURS);

        form.set_suggested(SuggestionField::ServiceWeek, 100.0); // far past the target

        assert!(form.is_over_allocated());
        assert!(!form.is_under_allocated());
    }
}
