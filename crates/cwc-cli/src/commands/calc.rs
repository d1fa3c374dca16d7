//! Calc command: totals entered shifts and plans the remaining hours.
//!
//! This module implements `cwc calc` with one flag per shift category,
//! suggestion overrides via `--set`, and output formats (human-readable,
//! JSON).

use std::fmt::Write as _;
use std::io::Write;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use serde::Serialize;

use cwc_core::{BreakdownEntry, ShiftCounts, SuggestedShifts, SuggestionField};

use crate::Config;
use crate::cli::CalcArgs;
use crate::form::{FormState, coerce_count};

/// Computed calc data ready for rendering.
#[derive(Debug)]
pub struct CalcData {
    pub generated_at: DateTime<Utc>,
    pub form: FormState,
}

// ========== Form Construction ==========

/// Parses a FIELD=COUNT suggestion override.
///
/// Unknown field tokens are an error; the count goes through the same
/// coercion as every other numeric input.
fn parse_override(spec: &str) -> Result<(SuggestionField, f64)> {
    let Some((field, count)) = spec.split_once('=') else {
        bail!("invalid override '{spec}': expected FIELD=COUNT (e.g. call-night=3)");
    };
    let field: SuggestionField = field
        .trim()
        .parse()
        .with_context(|| format!("invalid override '{spec}': run 'cwc catalog' to list fields"))?;
    Ok((field, coerce_count(count)))
}

/// Builds the form from raw flag values.
///
/// Counts and FTE are entered first, which settles the remaining-hours
/// figure and the initial suggestions; overrides are applied on top.
fn build_form(args: &CalcArgs, config: &Config) -> Result<FormState> {
    let counts = ShiftCounts {
        weekday: [
            coerce_count(&args.service_weekday),
            coerce_count(&args.fourth_attending_weekday),
            coerce_count(&args.jeopardy_weekday),
            coerce_count(&args.call_night_weekday),
        ],
        weekend: [
            coerce_count(&args.service_weekend),
            coerce_count(&args.fourth_attending_weekend),
            coerce_count(&args.jeopardy_weekend),
            coerce_count(&args.call_night_weekend),
        ],
        conversion: [
            coerce_count(&args.jeopardy_conversion),
            coerce_count(&args.fourth_attending_conversion),
        ],
        john_muir: [coerce_count(&args.john_muir)],
    };

    let mut form = FormState::new(config.full_time_annual_hours);
    form.set_counts(counts);
    form.set_fte(coerce_count(&args.fte));

    for spec in &args.set {
        let (field, count) = parse_override(spec)?;
        form.set_suggested(field, count);
    }

    Ok(form)
}

/// Builds calc data from raw flag values.
pub fn build_calc_data(
    args: &CalcArgs,
    config: &Config,
    generated_at: DateTime<Utc>,
) -> Result<CalcData> {
    let form = build_form(args, config)?;
    Ok(CalcData { generated_at, form })
}

// ========== Progress Bar ==========

/// Generates a 10-character progress bar.
/// Values under 5% of max get a single block for visibility.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn progress_bar(value: f64, max: f64) -> String {
    if max <= 0.0 {
        return "░░░░░░░░░░".to_string();
    }

    let ratio = value / max;
    let filled = if ratio < 0.05 && value > 0.0 {
        1
    } else {
        // Clamp to 10 when value exceeds max (target overshot)
        (ratio * 10.0).round().min(10.0) as usize
    };

    let empty = 10 - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

// ========== Human Output ==========

/// Formats the human-readable calc output.
#[allow(clippy::too_many_lines)]
pub fn format_calc(data: &CalcData) -> String {
    let form = &data.form;
    let summary = form.summary();
    let mut output = String::new();

    writeln!(output, "CLINICAL WORK REPORT: {} FTE", form.fte()).unwrap();

    writeln!(output).unwrap();
    writeln!(output, "SUMMARY").unwrap();
    writeln!(output, "───────").unwrap();
    writeln!(output, "Total hours:     {:.1}", summary.total_hours).unwrap();

    // The target lines only make sense for a non-zero target
    if summary.expected_annual_hours > 0.0 {
        writeln!(
            output,
            "Expected annual: {:.1} hrs ({} hrs/year at 1.0 FTE)",
            summary.expected_annual_hours,
            form.full_time_annual_hours()
        )
        .unwrap();
        writeln!(
            output,
            "Progress:        {:.1}%  {}",
            summary.percent_complete(),
            progress_bar(summary.total_hours, summary.expected_annual_hours)
        )
        .unwrap();
        writeln!(output, "Remaining:       {:.1} hrs", summary.remaining_hours).unwrap();
    }

    // Only categories with entered shifts show up here
    let active: Vec<&BreakdownEntry> = summary
        .breakdown
        .iter()
        .filter(|entry| entry.shifts > 0.0)
        .collect();
    if !active.is_empty() {
        writeln!(output).unwrap();
        writeln!(output, "BREAKDOWN").unwrap();
        writeln!(output, "─────────").unwrap();
        for entry in active {
            writeln!(
                output,
                "{:<26} {} × {} = {:.1} hrs",
                entry.category, entry.shifts, entry.hours_per_shift, entry.total_hours
            )
            .unwrap();
        }
    }

    writeln!(output).unwrap();
    writeln!(output, "SUGGESTED SHIFTS").unwrap();
    writeln!(output, "────────────────").unwrap();
    for field in SuggestionField::ALL {
        let count = form.suggested().get(field);
        let hours = field.hours(form.suggestion_hours());
        let line_total = f64::from(count) * hours;
        writeln!(
            output,
            "{:>4} × {}  ({} hrs/shift, {:.1} hrs)",
            count,
            field.label(),
            hours,
            line_total
        )
        .unwrap();
    }

    writeln!(output).unwrap();
    writeln!(
        output,
        "Total suggested: {:.1} hrs",
        form.total_suggested_hours()
    )
    .unwrap();

    let met = summary.remaining_hours <= 0.0;
    let over = form.is_over_allocated();
    let under = form.is_under_allocated();
    if met || over || under {
        writeln!(output).unwrap();
        if met {
            writeln!(output, "You've met or exceeded your expected annual hours!").unwrap();
        }
        if over {
            writeln!(output, "Over Allocation").unwrap();
        }
        if under {
            writeln!(
                output,
                "Remaining after suggestions: {:.1} hrs",
                summary.remaining_hours - form.total_suggested_hours()
            )
            .unwrap();
        }
    }

    output
}

// ========== JSON Output ==========

/// JSON calc report structure.
#[derive(Debug, Serialize)]
pub struct JsonCalcReport {
    pub generated_at: String,
    pub fte: f64,
    pub full_time_annual_hours: f64,
    pub total_hours: f64,
    pub expected_annual_hours: f64,
    pub remaining_hours: f64,
    pub percent_complete: f64,
    pub breakdown: Vec<BreakdownEntry>,
    pub suggestions: SuggestedShifts,
    pub total_suggested_hours: f64,
    pub over_allocated: bool,
    pub under_allocated: bool,
}

/// Formats calc data as JSON.
pub fn format_calc_json(data: &CalcData) -> Result<String> {
    let form = &data.form;
    let summary = form.summary();

    let report = JsonCalcReport {
        generated_at: data.generated_at.to_rfc3339(),
        fte: form.fte(),
        full_time_annual_hours: form.full_time_annual_hours(),
        total_hours: summary.total_hours,
        expected_annual_hours: summary.expected_annual_hours,
        remaining_hours: summary.remaining_hours,
        percent_complete: summary.percent_complete(),
        breakdown: summary.breakdown.clone(),
        suggestions: *form.suggested(),
        total_suggested_hours: form.total_suggested_hours(),
        over_allocated: form.is_over_allocated(),
        under_allocated: form.is_under_allocated(),
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

// ========== Public Interface ==========

/// Runs the calc command.
pub fn run<W: Write>(writer: &mut W, config: &Config, args: &CalcArgs) -> Result<()> {
    let data = build_calc_data(args, config, Utc::now())?;

    if args.json {
        let output = format_calc_json(&data)?;
        writeln!(writer, "{output}")?;
    } else {
        let output = format_calc(&data);
        write!(writer, "{output}")?;
    }

    Ok(())
}
