#![forbid(unsafe_code)]
#![deny(warnings, clippy::all, clippy::pedantic)]

mod config;
mod format;
mod params;
mod report;
mod system;
mod table;
mod types;
mod units;
pub mod locale;
pub mod output;
pub mod settings;

pub use config::{Config, no_max, with_max};
pub use locale::{CHINESE, ENGLISH, FRENCH, GERMAN, Locale};
pub use params::{count_params, render};
pub use report::{collect_report_data, generate_report};
pub use settings::{Settings, SettingsError, load_settings};
pub use system::{Clock, FixedClock, SystemClock};
pub use table::{Entry, Table, TableError};
pub use types::{PhraseRow, ReportData};
pub use units::{DAY, HOUR, MINUTE, MONTH, SECOND, YEAR};
