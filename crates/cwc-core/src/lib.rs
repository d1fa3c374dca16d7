//! Core domain logic for the clinical work calculator.
//!
//! This crate contains the fundamental types and logic for:
//! - Catalogs: the static shift categories and their hour values
//! - Aggregation: totalling entered shifts against the FTE-scaled annual target
//! - Suggestions: greedy planning of the remaining hours into shift blocks

pub mod aggregate;
pub mod catalog;
pub mod suggest;

pub use aggregate::{BreakdownEntry, HoursSummary, ShiftCounts, aggregate};
pub use catalog::{CatalogKind, FULL_TIME_ANNUAL_HOURS, ShiftCategory};
pub use suggest::{
    SuggestedShifts, SuggestionField, SuggestionHours, UnknownSuggestionField, suggest_initial,
};
