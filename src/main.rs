#![forbid(unsafe_code)]
#![deny(warnings, clippy::all, clippy::pedantic)]

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use chrono::{DateTime, FixedOffset};
use clap::{Parser, ValueEnum};
use timeago::{
    Clock, Config, Locale, Settings, SystemClock, collect_report_data, generate_report,
    load_settings,
    output::{TabStyle, format_tab, to_json},
};
use tracing::Level;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Plain,
    Json,
    Tab,
}

#[derive(Parser, Debug)]
#[command(version, about = "Describe a timestamp relative to now, e.g. \"2 hours ago\".")]
struct Args {
    /// Event time (RFC 3339, e.g. 2013-08-30T12:00:00Z)
    time: String,

    /// Reference time (RFC 3339); defaults to now
    #[arg(long)]
    reference: Option<String>,

    /// Locale code (en, fr, zh, de) or "all" for every shipped locale
    #[arg(long)]
    locale: Option<String>,

    /// Render an absolute date once the event is this many seconds away
    #[arg(long)]
    max_secs: Option<u64>,

    /// strftime layout used past --max-secs (e.g. %Y-%m-%d)
    #[arg(long)]
    layout: Option<String>,

    /// TOML settings file; command-line flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    output: OutputFormat,

    /// Table style to use with --output tab
    #[arg(long, value_enum, default_value_t = TabStyle::Rounded)]
    tab_style: TabStyle,

    /// Print debug info while formatting
    #[arg(long)]
    debug: bool,
}

fn parse_time(label: &str, value: &str) -> Result<DateTime<FixedOffset>, String> {
    DateTime::parse_from_rfc3339(value).map_err(|err| format!("invalid {label} '{value}': {err}"))
}

fn build_configs(args: &Args) -> Result<Vec<Config>, String> {
    let mut settings = match &args.config {
        Some(path) => load_settings(path).map_err(|err| err.to_string())?,
        None => Settings::default(),
    };
    if args.locale.is_some() {
        settings.locale.clone_from(&args.locale);
    }
    if args.max_secs.is_some() {
        settings.max_secs = args.max_secs;
    }
    if args.layout.is_some() {
        settings.layout.clone_from(&args.layout);
    }

    if settings.locale.as_deref() == Some("all") {
        let (max, layout) = (settings.max_secs, settings.layout.clone().unwrap_or_default());
        return Ok(Locale::all()
            .iter()
            .copied()
            .map(|locale| match max {
                Some(secs) => Config::with_max(locale, Duration::from_secs(secs), layout.clone()),
                None => Config::no_max(locale),
            })
            .collect());
    }
    settings
        .to_config()
        .map(|cfg| vec![cfg])
        .map_err(|err| err.to_string())
}

fn run(args: &Args) -> Result<String, String> {
    let event = parse_time("time", &args.time)?;
    let reference = match &args.reference {
        Some(value) => parse_time("reference", value)?,
        None => SystemClock.now().with_timezone(event.offset()),
    };
    let configs = build_configs(args)?;
    tracing::debug!(%event, %reference, configs = configs.len(), "formatting");

    let data = collect_report_data(&configs, &event, &reference);
    Ok(match args.output {
        OutputFormat::Plain => generate_report(&data),
        OutputFormat::Json => to_json(&data),
        OutputFormat::Tab => format_tab(&data, args.tab_style),
    })
}

fn main() -> ExitCode {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(if args.debug { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match run(&args) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}
