//! Catalog command: lists shift categories and suggestion fields.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use cwc_core::{CatalogKind, ShiftCategory, SuggestionField, SuggestionHours};

// ========== Human Output ==========

/// Formats the catalog listing for terminal display.
pub fn format_catalog() -> String {
    let mut output = String::new();

    for kind in CatalogKind::ALL {
        let title = kind.title();
        writeln!(output, "{title}").unwrap();
        writeln!(output, "{}", "─".repeat(title.chars().count())).unwrap();
        for category in kind.categories() {
            writeln!(
                output,
                "{:<26} {:>4} hrs/shift",
                category.label, category.hours_per_shift
            )
            .unwrap();
        }
        writeln!(output).unwrap();
    }

    let heading = "SUGGESTION FIELDS";
    writeln!(output, "{heading}").unwrap();
    writeln!(output, "{}", "─".repeat(heading.chars().count())).unwrap();
    let hours = SuggestionHours::default();
    for field in SuggestionField::ALL {
        let token = field.to_string();
        writeln!(
            output,
            "{:<18} {:<42} {:>4} hrs/shift",
            token,
            field.label(),
            field.hours(&hours)
        )
        .unwrap();
    }

    writeln!(output).unwrap();
    writeln!(
        output,
        "Use with 'cwc calc --set FIELD=COUNT' to adjust suggested shifts."
    )
    .unwrap();

    output
}

// ========== JSON Output ==========

#[derive(Debug, Serialize)]
struct JsonCatalog {
    kind: CatalogKind,
    title: &'static str,
    categories: &'static [ShiftCategory],
}

#[derive(Debug, Serialize)]
struct JsonSuggestionField {
    token: String,
    label: &'static str,
    hours_per_shift: f64,
}

#[derive(Debug, Serialize)]
struct JsonCatalogListing {
    catalogs: Vec<JsonCatalog>,
    fields: Vec<JsonSuggestionField>,
}

/// Formats the catalog listing as JSON.
pub fn format_catalog_json() -> Result<String> {
    let hours = SuggestionHours::default();
    let listing = JsonCatalogListing {
        catalogs: CatalogKind::ALL
            .into_iter()
            .map(|kind| JsonCatalog {
                kind,
                title: kind.title(),
                categories: kind.categories(),
            })
            .collect(),
        fields: SuggestionField::ALL
            .into_iter()
            .map(|field| JsonSuggestionField {
                token: field.to_string(),
                label: field.label(),
                hours_per_shift: field.hours(&hours),
            })
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&listing)?)
}

// ========== Public Interface ==========

/// Runs the catalog command.
pub fn run<W: Write>(writer: &mut W, json: bool) -> Result<()> {
    if json {
        let output = format_catalog_json()?;
        writeln!(writer, "{output}")?;
    } else {
        let output = format_catalog();
        write!(writer, "{output}")?;
    }

    Ok(())
}
