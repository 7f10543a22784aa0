use std::fmt::Display;

use chrono::{DateTime, SecondsFormat, TimeZone};

use crate::config::Config;
use crate::types::{PhraseRow, ReportData};

/// Format one event/reference pair under each config, in order.
#[must_use]
pub fn collect_report_data<Tz>(
    configs: &[Config],
    event: &DateTime<Tz>,
    reference: &DateTime<Tz>,
) -> ReportData
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let rows = configs
        .iter()
        .map(|cfg| PhraseRow {
            locale: cfg.locale().code.to_string(),
            name: cfg.locale().name.to_string(),
            phrase: cfg.format_reference(event, reference),
        })
        .collect();
    ReportData {
        event: event.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        reference: reference.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        rows,
    }
}

/// One phrase per line; prefixed by the locale code when there is more than one row.
#[must_use]
pub fn generate_report(data: &ReportData) -> String {
    if let [only] = data.rows.as_slice() {
        return only.phrase.clone();
    }
    data.rows
        .iter()
        .map(|row| format!("{}: {}", row.locale, row.phrase))
        .collect::<Vec<_>>()
        .join("\n")
}
