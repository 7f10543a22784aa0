use clap::ValueEnum;
use tabled::{
    builder::Builder,
    settings::{Panel, Style},
};

use crate::ReportData;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum TabStyle {
    Rounded,
    Modern,
    Ascii,
    Psql,
    Markdown,
    Sharp,
    Blank,
    Empty,
}

/// Render the report as a `Locale | Phrase` table under an `event → reference` banner.
#[must_use]
pub fn format_tab(data: &ReportData, style: TabStyle) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Locale", "Phrase"]);
    for row in &data.rows {
        builder.push_record([format!("{} ({})", row.name, row.locale), row.phrase.clone()]);
    }
    let mut table = builder.build();
    table.with(Panel::header(format!("{} → {}", data.event, data.reference)));
    match style {
        TabStyle::Rounded => table.with(Style::rounded()),
        TabStyle::Modern => table.with(Style::modern()),
        TabStyle::Ascii => table.with(Style::ascii()),
        TabStyle::Psql => table.with(Style::psql()),
        TabStyle::Markdown => table.with(Style::markdown()),
        TabStyle::Sharp => table.with(Style::sharp()),
        TabStyle::Blank => table.with(Style::blank()),
        TabStyle::Empty => table.with(Style::empty()),
    };
    table.to_string()
}
