use std::time::Duration;

use crate::locale::{ENGLISH, Locale};

/// Locale plus optional cutoff, shared read-only by every format call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    locale: &'static Locale,
    max: Option<Duration>,
    layout: String,
}

impl Config {
    /// Relative phrases for any elapsed duration.
    #[must_use]
    pub fn no_max(locale: &'static Locale) -> Self {
        Self {
            locale,
            max: None,
            layout: String::new(),
        }
    }

    /// Past `max`, render the event with `layout` (a chrono `strftime` pattern)
    /// instead of a phrase. An empty layout or a zero `max` disables the cutoff.
    #[must_use]
    pub fn with_max(locale: &'static Locale, max: Duration, layout: impl Into<String>) -> Self {
        Self {
            locale,
            max: Some(max),
            layout: layout.into(),
        }
    }

    #[must_use]
    pub fn locale(&self) -> &'static Locale {
        self.locale
    }

    #[must_use]
    pub fn max(&self) -> Option<Duration> {
        self.max
    }

    #[must_use]
    pub fn layout(&self) -> &str {
        &self.layout
    }

    /// The cutoff that actually applies, if any.
    #[must_use]
    pub fn cutoff(&self) -> Option<Duration> {
        self.max
            .filter(|max| !max.is_zero() && !self.layout.is_empty())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::no_max(&ENGLISH)
    }
}

#[must_use]
pub fn no_max(locale: &'static Locale) -> Config {
    Config::no_max(locale)
}

#[must_use]
pub fn with_max(locale: &'static Locale, max: Duration, layout: impl Into<String>) -> Config {
    Config::with_max(locale, max, layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::FRENCH;
    use crate::units::{HOUR, MINUTE};

    #[test]
    fn no_max_has_no_cutoff() {
        let cfg = no_max(&FRENCH);
        assert_eq!(cfg.locale().code, "fr");
        assert_eq!(cfg.max(), None);
        assert_eq!(cfg.cutoff(), None);
    }

    #[test]
    fn cutoff_requires_layout_and_nonzero_max() {
        assert_eq!(with_max(&ENGLISH, HOUR, "%Y").cutoff(), Some(HOUR));
        assert_eq!(with_max(&ENGLISH, HOUR, "").cutoff(), None);
        assert_eq!(with_max(&ENGLISH, Duration::ZERO, "%Y").cutoff(), None);
        assert_eq!(with_max(&ENGLISH, MINUTE * 90, "").max(), Some(MINUTE * 90));
    }

    #[test]
    fn default_is_english_without_cutoff() {
        assert_eq!(Config::default(), no_max(&ENGLISH));
    }
}
