use std::time::Duration;

use thiserror::Error;

use crate::params::count_params;

/// One bucket of a threshold table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// Exclusive upper bound. `None` marks the catch-all bucket.
    pub max: Option<Duration>,
    /// Unit the placeholder magnitude is expressed in.
    pub unit: Duration,
    pub template: &'static str,
}

impl Entry {
    #[must_use]
    pub const fn new(max: Duration, unit: Duration, template: &'static str) -> Self {
        Self {
            max: Some(max),
            unit,
            template,
        }
    }

    #[must_use]
    pub const fn catch_all(unit: Duration, template: &'static str) -> Self {
        Self {
            max: None,
            unit,
            template,
        }
    }

    #[must_use]
    pub fn contains(&self, elapsed: Duration) -> bool {
        self.max.is_none_or(|max| elapsed < max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("threshold table has no entries")]
    Empty,
    #[error("threshold of entry {index} is lower than the one before it")]
    Unordered { index: usize },
    #[error("threshold table does not end with a catch-all entry")]
    MissingCatchAll,
    #[error("template of entry {index} has {found} placeholders, at most 1 is supported")]
    TooManyParams { index: usize, found: usize },
}

/// Ordered threshold table for one tense of one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table {
    entries: &'static [Entry],
}

impl Table {
    /// Build a table, panicking when it is malformed.
    ///
    /// Evaluated in const context for the shipped locales, so a broken table
    /// there is a compile error.
    ///
    /// # Panics
    /// Panics if the entries are empty, out of order, lack a trailing catch-all,
    /// or a template carries more than one placeholder.
    #[must_use]
    pub const fn new(entries: &'static [Entry]) -> Self {
        match Self::try_new(entries) {
            Ok(table) => table,
            Err(TableError::Empty) => panic!("threshold table has no entries"),
            Err(TableError::Unordered { .. }) => panic!("threshold table is out of order"),
            Err(TableError::MissingCatchAll) => panic!("threshold table has no catch-all entry"),
            Err(TableError::TooManyParams { .. }) => {
                panic!("threshold table template has more than one placeholder")
            }
        }
    }

    /// Build a table, reporting what is wrong with a malformed one.
    ///
    /// # Errors
    /// Returns a [`TableError`] describing the first problem found.
    pub const fn try_new(entries: &'static [Entry]) -> Result<Self, TableError> {
        if entries.is_empty() {
            return Err(TableError::Empty);
        }
        let mut i = 0;
        let mut floor: u128 = 0;
        while i < entries.len() {
            let found = count_params(entries[i].template);
            if found > 1 {
                return Err(TableError::TooManyParams { index: i, found });
            }
            match entries[i].max {
                Some(max) => {
                    if max.as_nanos() < floor {
                        return Err(TableError::Unordered { index: i });
                    }
                    floor = max.as_nanos();
                }
                None => {
                    if i + 1 != entries.len() {
                        return Err(TableError::Unordered { index: i + 1 });
                    }
                }
            }
            i += 1;
        }
        if entries[entries.len() - 1].max.is_some() {
            return Err(TableError::MissingCatchAll);
        }
        Ok(Self { entries })
    }

    #[must_use]
    pub const fn entries(&self) -> &'static [Entry] {
        self.entries
    }

    /// First entry, in table order, whose threshold is not exceeded by `elapsed`.
    ///
    /// # Panics
    /// Never for a table built through [`Table::new`] or [`Table::try_new`],
    /// which guarantee a catch-all.
    #[must_use]
    pub fn resolve(&self, elapsed: Duration) -> &'static Entry {
        self.entries
            .iter()
            .find(|entry| entry.contains(elapsed))
            .unwrap_or_else(|| panic!("threshold table has no catch-all entry"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{HOUR, MINUTE, SECOND};

    static SMALL: [Entry; 3] = [
        Entry::new(Duration::from_secs(2), SECOND, "moments ago"),
        Entry::new(Duration::from_secs(120), SECOND, "%d seconds ago"),
        Entry::catch_all(MINUTE, "%d minutes ago"),
    ];

    #[test]
    fn resolve_takes_first_match_with_exclusive_bound() {
        let table = Table::new(&SMALL);
        assert_eq!(table.resolve(Duration::ZERO).template, "moments ago");
        let below = Duration::from_secs(2) - Duration::from_nanos(1);
        assert_eq!(table.resolve(below).template, "moments ago");
        assert_eq!(table.resolve(Duration::from_secs(2)).template, "%d seconds ago");
        assert_eq!(table.resolve(Duration::MAX).template, "%d minutes ago");
    }

    #[test]
    fn equal_thresholds_keep_table_order() {
        static TIED: [Entry; 3] = [
            Entry::new(Duration::from_secs(5), SECOND, "first"),
            Entry::new(Duration::from_secs(5), SECOND, "second"),
            Entry::catch_all(HOUR, "rest"),
        ];
        let table = Table::new(&TIED);
        assert_eq!(table.resolve(Duration::from_secs(4)).template, "first");
        assert_eq!(table.resolve(Duration::from_secs(5)).template, "rest");
    }

    #[test]
    fn try_new_rejects_empty() {
        assert_eq!(Table::try_new(&[]), Err(TableError::Empty));
    }

    #[test]
    fn try_new_rejects_missing_catch_all() {
        static OPEN: [Entry; 1] = [Entry::new(Duration::from_secs(1), SECOND, "x")];
        assert_eq!(Table::try_new(&OPEN), Err(TableError::MissingCatchAll));
    }

    #[test]
    fn try_new_rejects_unordered() {
        static BACKWARDS: [Entry; 3] = [
            Entry::new(Duration::from_secs(10), SECOND, "a"),
            Entry::new(Duration::from_secs(5), SECOND, "b"),
            Entry::catch_all(SECOND, "c"),
        ];
        assert_eq!(
            Table::try_new(&BACKWARDS),
            Err(TableError::Unordered { index: 1 })
        );

        static EARLY_CATCH_ALL: [Entry; 2] = [
            Entry::catch_all(SECOND, "a"),
            Entry::catch_all(SECOND, "b"),
        ];
        assert_eq!(
            Table::try_new(&EARLY_CATCH_ALL),
            Err(TableError::Unordered { index: 1 })
        );
    }

    #[test]
    fn try_new_rejects_extra_placeholders() {
        static CHATTY: [Entry; 1] = [Entry::catch_all(SECOND, "%d and %d")];
        assert_eq!(
            Table::try_new(&CHATTY),
            Err(TableError::TooManyParams { index: 0, found: 2 })
        );
    }

    #[test]
    #[should_panic(expected = "no catch-all")]
    fn new_panics_without_catch_all() {
        static OPEN: [Entry; 1] = [Entry::new(Duration::from_secs(1), SECOND, "x")];
        let _ = Table::new(&OPEN);
    }
}
