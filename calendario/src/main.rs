mod cli;
mod config;
mod logging;
mod render;
mod store;

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use cal_events::{CustomEventDefinition, DatePolicy, EventAssembler, MonthWindow};
use cal_time::{easter_sunday, Month};
use chrono::Datelike;
use clap::Parser;
use serde::Serialize;
use tracing::info;

use crate::cli::{Cli, Command, WindowArgs};
use crate::config::CalendarioConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = CalendarioConfig::load(cli.config.as_deref())?;
    let policy = if cli.strict || config.strict_dates {
        DatePolicy::Strict
    } else {
        DatePolicy::Rollover
    };

    let custom = match cli.custom.as_ref().or(config.custom_events.as_ref()) {
        Some(path) => store::load_custom_events(path)?,
        None => Vec::new(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Year(args) => run_year(args.year, &custom, policy, cli.json, &mut out),
        Command::Window(args) => run_window(&args, &config, &custom, policy, cli.json, &mut out),
        Command::Easter(args) => run_easter(args.year, cli.json, &mut out),
    }
}

fn run_year<W: Write>(
    year: i32,
    custom: &[CustomEventDefinition],
    policy: DatePolicy,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let assembler = EventAssembler::standard(custom, policy);
    let events = assembler
        .try_events_for_year(year)
        .with_context(|| format!("failed to assemble events for {year}"))?;
    info!(year, count = events.len(), "assembled year");
    if json {
        render::write_json(&events, out)
    } else {
        render::write_year(year, &events, out)
    }
}

fn run_window<W: Write>(
    args: &WindowArgs,
    config: &CalendarioConfig,
    custom: &[CustomEventDefinition],
    policy: DatePolicy,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let (year, month) = match &args.from {
        Some(s) => parse_year_month(s)?,
        None => current_year_month()?,
    };
    let len = args.months.unwrap_or(config.window_months);
    let window = MonthWindow::starting(year, month, len)?;
    let assembler = EventAssembler::standard(custom, policy);
    let pages = window
        .collect(&assembler)
        .context("failed to assemble month window")?;
    info!(year, month = month.number(), len, "assembled window");
    if json {
        render::write_window_json(&pages, out)
    } else {
        render::write_window(&pages, out)
    }
}

#[derive(Serialize)]
struct EasterView {
    year: i32,
    date: cal_time::Date,
}

fn run_easter<W: Write>(year: i32, json: bool, out: &mut W) -> Result<()> {
    let date = easter_sunday(year);
    if json {
        render::write_json(&EasterView { year, date }, out)
    } else {
        render::write_easter(year, date, out)
    }
}

/// Parse `YYYY-MM` into a year and month.
fn parse_year_month(s: &str) -> Result<(i32, Month)> {
    let (y, m) = s
        .split_once('-')
        .with_context(|| format!("expected YYYY-MM, got {s:?}"))?;
    let year: i32 = y.parse().with_context(|| format!("invalid year in {s:?}"))?;
    let month = m
        .parse::<u8>()
        .ok()
        .and_then(Month::from_number)
        .with_context(|| format!("invalid month in {s:?}"))?;
    Ok((year, month))
}

fn current_year_month() -> Result<(i32, Month)> {
    let today = chrono::Local::now().date_naive();
    let month = u8::try_from(today.month())
        .ok()
        .and_then(Month::from_number)
        .context("current month out of range")?;
    Ok((today.year(), month))
}
