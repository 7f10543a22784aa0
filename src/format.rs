use std::fmt::{Display, Write as _};
use std::time::Duration;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeDelta, TimeZone};
use tracing::{debug, trace, warn};

use crate::config::Config;
use crate::params::render;
use crate::system::{Clock, SystemClock};
use crate::units::round_in_unit;

impl Config {
    /// Describe `event` relative to `reference`.
    ///
    /// An event at or before the reference reads in the past tense, one after
    /// it in the future tense. When a cutoff is configured and reached, the
    /// event is rendered with the absolute layout instead.
    #[must_use]
    pub fn format_reference<Tz>(&self, event: &DateTime<Tz>, reference: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let delta = reference
            .naive_utc()
            .signed_duration_since(event.naive_utc());

        if let Some(max) = self.cutoff()
            && magnitude(delta) >= max
        {
            debug!(?delta, ?max, layout = self.layout(), "past cutoff, rendering absolute date");
            if let Some(absolute) = render_absolute(event, self.layout()) {
                return absolute;
            }
        }
        self.format_relative_duration(delta)
    }

    /// Describe `event` relative to the current system time.
    #[must_use]
    pub fn format<Tz>(&self, event: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        self.format_with_clock(event, &SystemClock)
    }

    /// Describe `event` relative to `clock.now()`.
    #[must_use]
    pub fn format_with_clock<Tz>(&self, event: &DateTime<Tz>, clock: &dyn Clock) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let reference = clock.now().with_timezone(&event.timezone());
        self.format_reference(event, &reference)
    }

    /// Phrase for a signed elapsed duration (`reference - event`), ignoring any cutoff.
    #[must_use]
    pub fn format_relative_duration(&self, delta: TimeDelta) -> String {
        let past = delta >= TimeDelta::zero();
        let elapsed = magnitude(delta);
        let entry = self.locale().table(past).resolve(elapsed);
        trace!(?elapsed, past, template = entry.template, "resolved bucket");
        render(entry.template, round_in_unit(elapsed, entry.unit))
    }
}

fn magnitude(delta: TimeDelta) -> Duration {
    delta.abs().to_std().unwrap_or(Duration::MAX)
}

fn render_absolute<Tz>(event: &DateTime<Tz>, layout: &str) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let items = StrftimeItems::new(layout);
    if items.clone().any(|item| matches!(item, Item::Error)) {
        warn!(layout, "invalid absolute layout, falling back to relative phrase");
        return None;
    }
    let mut out = String::new();
    if write!(out, "{}", event.format_with_items(items)).is_err() {
        warn!(layout, "absolute layout could not be rendered, falling back to relative phrase");
        return None;
    }
    Some(out)
}
