//! Compiled-in locale bundles.
//!
//! Every shipped locale uses the same twelve standard buckets, so a bundle is
//! just two lists of templates (past, future) zipped onto [`STANDARD_BOUNDS`].

use std::time::Duration;

use crate::table::{Entry, Table};
use crate::units::{DAY, HOUR, MINUTE, MONTH, SECOND, YEAR, half_below};

mod chinese;
mod english;
mod french;
mod german;

pub use chinese::CHINESE;
pub use english::ENGLISH;
pub use french::FRENCH;
pub use german::GERMAN;

/// Number of buckets in a standard table.
pub const STANDARD_LEN: usize = 12;

/// `(exclusive upper bound, unit)` for each standard bucket.
///
/// Buckets alternate singular / plural per unit. Each bound sits at the
/// midpoint where the rounded count would reach the next bucket.
pub const STANDARD_BOUNDS: [(Option<Duration>, Duration); STANDARD_LEN] = [
    (Some(half_below(SECOND, 2)), SECOND),
    (Some(half_below(SECOND, 60)), SECOND),
    (Some(half_below(MINUTE, 2)), MINUTE),
    (Some(half_below(MINUTE, 60)), MINUTE),
    (Some(half_below(HOUR, 2)), HOUR),
    (Some(half_below(HOUR, 24)), HOUR),
    (Some(half_below(DAY, 2)), DAY),
    (Some(half_below(DAY, 30)), DAY),
    (Some(half_below(MONTH, 2)), MONTH),
    (Some(half_below(MONTH, 12)), MONTH),
    (Some(half_below(YEAR, 2)), YEAR),
    (None, YEAR),
];

/// Zip `templates` onto the standard bucket bounds.
#[must_use]
pub const fn standard_entries(templates: [&'static str; STANDARD_LEN]) -> [Entry; STANDARD_LEN] {
    let mut out = [Entry::catch_all(SECOND, ""); STANDARD_LEN];
    let mut i = 0;
    while i < STANDARD_LEN {
        let (max, unit) = STANDARD_BOUNDS[i];
        out[i] = Entry {
            max,
            unit,
            template: templates[i],
        };
        i += 1;
    }
    out
}

/// A named bundle of past and future threshold tables.
#[derive(Debug, PartialEq, Eq)]
pub struct Locale {
    pub name: &'static str,
    /// Short code used to select the locale by name, e.g. `"en"`.
    pub code: &'static str,
    pub past: Table,
    pub future: Table,
}

static ALL: [&Locale; 4] = [&ENGLISH, &FRENCH, &CHINESE, &GERMAN];

impl Locale {
    #[must_use]
    pub const fn new(name: &'static str, code: &'static str, past: Table, future: Table) -> Self {
        Self {
            name,
            code,
            past,
            future,
        }
    }

    /// Every shipped locale, English first.
    #[must_use]
    pub fn all() -> &'static [&'static Locale] {
        &ALL
    }

    /// Exact, case-insensitive lookup by code.
    #[must_use]
    pub fn by_code(code: &str) -> Option<&'static Locale> {
        ALL.iter()
            .copied()
            .find(|locale| locale.code.eq_ignore_ascii_case(code))
    }

    #[must_use]
    pub fn table(&self, past: bool) -> &Table {
        if past { &self.past } else { &self.future }
    }
}
