use anyhow::{anyhow, bail, Context, Result};
use crossterm::style::{Color, Stylize};
use openf1::api::{OpenF1Client, QueryFilters};
use openf1::config::{Config, OutputFormat};
use openf1::models::{
    CarData, Driver, Interval, Lap, Location, Meeting, Pit, Position, RaceControl, Resource,
    ResourceKind,
};
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::io;
use std::path::PathBuf;

mod table_display;

use table_display::{display_results, status_line, write_csv};

#[derive(Debug, PartialEq)]
enum Command {
    Help,
    Resources,
    GenerateConfig,
    Fetch(FetchArgs),
}

#[derive(Debug, Default, PartialEq)]
struct FetchArgs {
    resource: Option<ResourceKind>,
    filters: Vec<(String, String)>,
    format: Option<OutputFormat>,
    output: Option<PathBuf>,
    base_url: Option<String>,
    verbose: bool,
}

fn print_help() {
    println!("{}", "openf1 - query the OpenF1 telemetry API".blue().bold());
    println!();
    println!("{}", "Usage:".yellow());
    println!("  openf1 <RESOURCE> [--<filter> <value>]... [OPTIONS]");
    println!();
    println!("{}", "Options:".yellow());
    println!("  {}  - table, json or csv", "--format <FMT>".green());
    println!("  {} - Write json/csv output to a file", "--output <FILE>".green());
    println!("  {}   - Override the API root", "--base-url <URL>".green());
    println!("  {}          - Log requests to stderr", "--verbose".green());
    println!("  {}        - List resources and their filters", "--resources".green());
    println!(
        "  {}  - Print a commented default config file",
        "--generate-config".green()
    );
    println!();
    println!("{}", "Examples:".yellow());
    println!("  openf1 laps --session_key 9161 --driver_number 1");
    println!("  openf1 meetings --year=2023 --country_name Singapore");
    println!("  openf1 car_data --session_key 9159 --driver_number 55 --format csv --output car.csv");
    println!();
}

fn print_resources() {
    for kind in ResourceKind::all() {
        println!(
            "  {} {}",
            format!("{:<14}", kind.path()).green(),
            kind.filter_names().join(", ")
        );
    }
}

fn parse_args(args: &[String]) -> Result<Command> {
    let mut fetch = FetchArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--resources" => return Ok(Command::Resources),
            "--generate-config" => return Ok(Command::GenerateConfig),
            "-v" | "--verbose" => fetch.verbose = true,
            _ if arg.starts_with("--") => {
                let flag = &arg[2..];
                let (name, value) = match flag.split_once('=') {
                    Some((name, value)) => (name.to_string(), value.to_string()),
                    None => {
                        let value = iter
                            .next()
                            .ok_or_else(|| anyhow!("Missing value for --{}", flag))?;
                        (flag.to_string(), value.clone())
                    }
                };

                match name.as_str() {
                    "format" => fetch.format = Some(value.parse()?),
                    "output" => fetch.output = Some(PathBuf::from(value)),
                    "base-url" => fetch.base_url = Some(value),
                    _ => fetch.filters.push((name, value)),
                }
            }
            _ => {
                if fetch.resource.is_some() {
                    bail!("Unexpected argument '{}'", arg);
                }
                fetch.resource = Some(arg.parse::<ResourceKind>().map_err(|e| anyhow!(e))?);
            }
        }
    }

    if fetch.resource.is_none() {
        return Ok(Command::Help);
    }
    Ok(Command::Fetch(fetch))
}

/// Apply raw filters, fetch, and flatten the records into JSON rows for output
fn fetch_rows<R: Resource + Serialize>(
    client: &OpenF1Client,
    raw_filters: &[(String, String)],
) -> Result<Vec<Value>> {
    let mut filters = R::Filters::default();
    for (name, value) in raw_filters {
        filters.set(name, value)?;
    }

    let records = client
        .fetch::<R>(&filters)
        .with_context(|| format!("Failed to fetch {}", R::PATH))?;

    records
        .iter()
        .map(|record| serde_json::to_value(record).map_err(Into::into))
        .collect()
}

fn run_fetch(args: FetchArgs, config: &Config) -> Result<()> {
    let resource = args
        .resource
        .ok_or_else(|| anyhow!("No resource given"))?;
    let base_url = args
        .base_url
        .as_deref()
        .unwrap_or(&config.api.base_url);
    let client = OpenF1Client::new(base_url);

    let rows = match resource {
        ResourceKind::CarData => fetch_rows::<CarData>(&client, &args.filters)?,
        ResourceKind::Drivers => fetch_rows::<Driver>(&client, &args.filters)?,
        ResourceKind::Intervals => fetch_rows::<Interval>(&client, &args.filters)?,
        ResourceKind::Laps => fetch_rows::<Lap>(&client, &args.filters)?,
        ResourceKind::Location => fetch_rows::<Location>(&client, &args.filters)?,
        ResourceKind::Meetings => fetch_rows::<Meeting>(&client, &args.filters)?,
        ResourceKind::Pit => fetch_rows::<Pit>(&client, &args.filters)?,
        ResourceKind::Position => fetch_rows::<Position>(&client, &args.filters)?,
        ResourceKind::RaceControl => fetch_rows::<RaceControl>(&client, &args.filters)?,
    };
    tracing::info!(target: "cli", "{} returned {} rows", resource, rows.len());

    let format = args.format.unwrap_or(config.display.format);
    match (format, &args.output) {
        (OutputFormat::Table, _) => {
            display_results(&rows, config.display.max_rows, config.display.use_colors)
        }
        (OutputFormat::Json, None) => println!("{}", serde_json::to_string_pretty(&rows)?),
        (OutputFormat::Json, Some(path)) => {
            let file = File::create(path)
                .with_context(|| format!("Cannot create {}", path.display()))?;
            serde_json::to_writer_pretty(file, &rows)?;
        }
        (OutputFormat::Csv, None) => write_csv(&rows, io::stdout().lock())?,
        (OutputFormat::Csv, Some(path)) => {
            let file = File::create(path)
                .with_context(|| format!("Cannot create {}", path.display()))?;
            write_csv(&rows, file)?;
        }
    }

    if let Some(path) = &args.output {
        if format != OutputFormat::Table {
            eprintln!(
                "{}",
                status_line(
                    format!("{} rows exported to {}", rows.len(), path.display()),
                    Color::Green,
                    config.display.use_colors,
                )
            );
        }
    }

    Ok(())
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match parse_args(&args)? {
        Command::Help => print_help(),
        Command::Resources => print_resources(),
        Command::GenerateConfig => print!("{}", Config::create_default_with_comments()),
        Command::Fetch(fetch) => {
            let log_path = openf1::utils::logging::init_tracing(fetch.verbose);
            if fetch.verbose {
                if let Some(path) = log_path {
                    eprintln!("Debug logs will be written to: {}", path.display());
                }
            }

            let config = Config::load().unwrap_or_else(|e| {
                tracing::warn!(target: "config", "Using default config: {:#}", e);
                Config::default()
            });
            run_fetch(fetch, &config)?;
        }
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}
