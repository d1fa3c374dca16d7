//! Static shift catalogs and the annual-hours baseline.
//!
//! Catalog contents mirror the department's published shift tables: four
//! groups of categories, each with a fixed hours-per-shift value. Only the
//! counts entered against these categories vary at runtime.

use serde::Serialize;

/// Annual hours expected of a full-time (1.0 FTE) clinician.
pub const FULL_TIME_ANNUAL_HOURS: f64 = 1750.0;

/// A single shift category with its fixed hour value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShiftCategory {
    /// Display label (e.g. "Service Weekday").
    pub label: &'static str,

    /// Hours credited per shift of this category.
    pub hours_per_shift: f64,
}

const WEEKDAY_SHIFTS: &[ShiftCategory] = &[
    ShiftCategory {
        label: "Service Weekday",
        hours_per_shift: 10.0,
    },
    ShiftCategory {
        label: "4th Attending Weekday",
        hours_per_shift: 2.5,
    },
    ShiftCategory {
        label: "Jeopardy Weekday",
        hours_per_shift: 2.5,
    },
    ShiftCategory {
        label: "Call Night",
        hours_per_shift: 16.0,
    },
];

const WEEKEND_SHIFTS: &[ShiftCategory] = &[
    ShiftCategory {
        label: "Service Weekend Day",
        hours_per_shift: 10.0,
    },
    ShiftCategory {
        label: "4th Attending Weekend Day",
        hours_per_shift: 2.5,
    },
    ShiftCategory {
        label: "Jeopardy Weekend Day",
        hours_per_shift: 2.5,
    },
    ShiftCategory {
        label: "Call Night",
        hours_per_shift: 16.0,
    },
];

const CONVERSION_SHIFTS: &[ShiftCategory] = &[
    ShiftCategory {
        label: "Jeopardy",
        hours_per_shift: 10.0,
    },
    ShiftCategory {
        label: "4th Attending",
        hours_per_shift: 10.0,
    },
];

const JOHN_MUIR_SHIFTS: &[ShiftCategory] = &[ShiftCategory {
    label: "Shift",
    hours_per_shift: 12.0,
}];

/// The four shift catalogs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    Weekday,
    Weekend,
    Conversion,
    JohnMuir,
}

impl CatalogKind {
    /// All catalogs in display order. Breakdown entries follow this order.
    pub const ALL: [Self; 4] = [Self::Weekday, Self::Weekend, Self::Conversion, Self::JohnMuir];

    /// Title shown above the catalog's categories.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Weekday => "Weekday Shifts",
            Self::Weekend => "Weekend Shifts",
            Self::Conversion => "Jeopardy and 4th Attending Conversions",
            Self::JohnMuir => "John Muir",
        }
    }

    /// The categories in this catalog, in declaration order.
    #[must_use]
    pub const fn categories(self) -> &'static [ShiftCategory] {
        match self {
            Self::Weekday => WEEKDAY_SHIFTS,
            Self::Weekend => WEEKEND_SHIFTS,
            Self::Conversion => CONVERSION_SHIFTS,
            Self::JohnMuir => JOHN_MUIR_SHIFTS,
        }
    }
}
