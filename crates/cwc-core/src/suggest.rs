//! Shift suggestions for filling remaining annual hours.
//!
//! [`suggest_initial`] greedily converts a remaining-hours figure into whole
//! shift counts: matched service week/weekend pairs first, then jeopardy
//! weeks, call nights, and John Muir shifts, with jeopardy weekend days
//! filling the tail. Individual fields can then be overridden one at a time;
//! an override never redistributes hours across the other fields.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Hour values backing each suggestion field.
///
/// A service week covers five weekday shifts and a service weekend two
/// weekend days; the jeopardy blocks follow the same five/two grouping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuggestionHours {
    pub service_week: f64,
    pub service_weekend: f64,
    pub jeopardy_week: f64,
    pub jeopardy_weekend: f64,
    pub call_night: f64,
    pub john_muir: f64,
}

impl Default for SuggestionHours {
    fn default() -> Self {
        Self {
            service_week: 50.0,
            service_weekend: 20.0,
            jeopardy_week: 12.5,
            jeopardy_weekend: 5.0,
            call_night: 16.0,
            john_muir: 12.0,
        }
    }
}

/// The six plannable shift blocks, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuggestionField {
    ServiceWeek,
    ServiceWeekend,
    JeopardyWeek,
    JeopardyWeekend,
    CallNight,
    JohnMuir,
}

impl SuggestionField {
    /// All fields in display order.
    pub const ALL: [Self; 6] = [
        Self::ServiceWeek,
        Self::ServiceWeekend,
        Self::JeopardyWeek,
        Self::JeopardyWeekend,
        Self::CallNight,
        Self::JohnMuir,
    ];

    /// Display label for suggestion listings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ServiceWeek => "Service Week (5 Days)",
            Self::ServiceWeekend => "Service Weekend (2 days)",
            Self::JeopardyWeek => "Jeopardy OR 4th Attending Week (5 days)",
            Self::JeopardyWeekend => "Jeopardy OR 4th Attending Weekend (2 days)",
            Self::CallNight => "Call Night",
            Self::JohnMuir => "John Muir",
        }
    }

    /// Hours for one shift block of this field.
    #[must_use]
    pub const fn hours(self, hours: &SuggestionHours) -> f64 {
        match self {
            Self::ServiceWeek => hours.service_week,
            Self::ServiceWeekend => hours.service_weekend,
            Self::JeopardyWeek => hours.jeopardy_week,
            Self::JeopardyWeekend => hours.jeopardy_weekend,
            Self::CallNight => hours.call_night,
            Self::JohnMuir => hours.john_muir,
        }
    }
}

impl fmt::Display for SuggestionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ServiceWeek => "service-week",
            Self::ServiceWeekend => "service-weekend",
            Self::JeopardyWeek => "jeopardy-week",
            Self::JeopardyWeekend => "jeopardy-weekend",
            Self::CallNight => "call-night",
            Self::JohnMuir => "john-muir",
        };
        write!(f, "{s}")
    }
}

impl FromStr for SuggestionField {
    type Err = UnknownSuggestionField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "service-week" => Ok(Self::ServiceWeek),
            "service-weekend" => Ok(Self::ServiceWeekend),
            "jeopardy-week" => Ok(Self::JeopardyWeek),
            "jeopardy-weekend" => Ok(Self::JeopardyWeekend),
            "call-night" => Ok(Self::CallNight),
            "john-muir" => Ok(Self::JohnMuir),
            _ => Err(UnknownSuggestionField(s.to_string())),
        }
    }
}

/// Error type for unknown suggestion field tokens.
#[derive(Debug, Clone, Error)]
#[error("unknown suggestion field: {0}")]
pub struct UnknownSuggestionField(String);

/// Suggested shift counts per field.
///
/// Counts are whole shifts, produced by [`suggest_initial`] or entered
/// through [`SuggestedShifts::set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SuggestedShifts {
    pub service_week: u32,
    pub service_weekend: u32,
    pub jeopardy_week: u32,
    pub jeopardy_weekend: u32,
    pub call_night: u32,
    pub john_muir: u32,
}

impl SuggestedShifts {
    /// Returns the count for a field.
    #[must_use]
    pub const fn get(&self, field: SuggestionField) -> u32 {
        match field {
            SuggestionField::ServiceWeek => self.service_week,
            SuggestionField::ServiceWeekend => self.service_weekend,
            SuggestionField::JeopardyWeek => self.jeopardy_week,
            SuggestionField::JeopardyWeekend => self.jeopardy_weekend,
            SuggestionField::CallNight => self.call_night,
            SuggestionField::JohnMuir => self.john_muir,
        }
    }

    /// Overrides one field with a manually entered count.
    ///
    /// The value is floored to a whole shift and clamped at zero; the other
    /// five fields are left untouched. Overrides are not checked against
    /// remaining hours.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set(&mut self, field: SuggestionField, count: f64) {
        // max() turns NaN into 0 here
        let count = count.max(0.0).floor() as u32;
        match field {
            SuggestionField::ServiceWeek => self.service_week = count,
            SuggestionField::ServiceWeekend => self.service_weekend = count,
            SuggestionField::JeopardyWeek => self.jeopardy_week = count,
            SuggestionField::JeopardyWeekend => self.jeopardy_weekend = count,
            SuggestionField::CallNight => self.call_night = count,
            SuggestionField::JohnMuir => self.john_muir = count,
        }
    }

    /// Total hours across all suggested shifts.
    #[must_use]
    pub fn total_hours(&self, hours: &SuggestionHours) -> f64 {
        SuggestionField::ALL
            .iter()
            .map(|&field| f64::from(self.get(field)) * field.hours(hours))
            .sum()
    }

    /// True when the suggested hours exceed the remaining target.
    #[must_use]
    pub fn is_over_allocated(&self, remaining_hours: f64, hours: &SuggestionHours) -> bool {
        self.total_hours(hours) > remaining_hours
    }

    /// True when suggestions leave more than an hour of the target unfilled.
    #[must_use]
    pub fn is_under_allocated(&self, remaining_hours: f64, hours: &SuggestionHours) -> bool {
        remaining_hours > 0.0 && self.total_hours(hours) < remaining_hours - 1.0
    }
}

/// Computes initial shift suggestions for a remaining-hours figure.
///
/// Allocation is greedy and order-dependent: service week and weekend
/// shifts are staffed together, so they come out of a combined cycle as
/// matched pairs first. Jeopardy weeks, call nights, and John Muir shifts
/// then each take whole blocks from the leftover, and jeopardy weekend
/// days fill the tail. Any remainder smaller than a jeopardy weekend day
/// stays unallocated.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn suggest_initial(remaining_hours: f64, hours: &SuggestionHours) -> SuggestedShifts {
    if remaining_hours <= 0.0 {
        return SuggestedShifts::default();
    }

    let mut leftover = remaining_hours;

    let service_cycle_hours = hours.service_week + hours.service_weekend;
    let full_cycles = (leftover / service_cycle_hours).floor();
    leftover -= full_cycles * service_cycle_hours;

    let jeopardy_week = (leftover / hours.jeopardy_week).floor();
    leftover -= jeopardy_week * hours.jeopardy_week;

    let call_night = (leftover / hours.call_night).floor();
    leftover -= call_night * hours.call_night;

    let john_muir = (leftover / hours.john_muir).floor();
    leftover -= john_muir * hours.john_muir;

    let jeopardy_weekend = (leftover / hours.jeopardy_weekend).floor();

    SuggestedShifts {
        service_week: full_cycles as u32,
        service_weekend: full_cycles as u32,
        jeopardy_week: jeopardy_week as u32,
        jeopardy_weekend: jeopardy_weekend as u32,
        call_night: call_night as u32,
        john_muir: john_muir as u32,
    }
}
