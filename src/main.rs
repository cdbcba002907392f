//! Capacity Chart - Main Entry Point
//!
//! This is the main entry point for the capacity-chart command line tool.
//! The actual implementation is in the `capacity_chart` library.

use anyhow::Result;
use capacity_chart::{
    Granularity, Storage, aggregate, boundary_dates, format_marker, format_series, locate_today,
};
use chrono::{Local, NaiveDateTime};
use clap::{CommandFactory, Parser};

/// Capacity Chart - aggregate scheduled workload per day/week/month/year bucket
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the schedule file (TOML format)
    file: String,

    /// Bucket granularity: day, week, month or year
    #[arg(short, long, default_value = "day")]
    granularity: String,

    /// Column width in pixels
    #[arg(long, default_value_t = 65.0)]
    column_width: f64,

    /// Chart height in pixels
    #[arg(long, default_value_t = 88.0)]
    height: f64,

    /// Treat the grid as right-to-left
    #[arg(long)]
    rtl: bool,

    /// Override "now" for the today-marker (format: YYYY-MM-DDTHH:MM:SS)
    #[arg(long)]
    now: Option<String>,
}

fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    let args = Args::parse();

    // An unrecognized granularity fails here, before any aggregation runs
    let granularity: Granularity = args.granularity.parse().map_err(anyhow::Error::msg)?;

    // Resolve the wall clock once; the engine itself never reads it
    let now: NaiveDateTime = match &args.now {
        Some(s) => NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")?,
        None => Local::now().naive_local(),
    };

    let schedule = Storage::new(&args.file).load()?;
    let series = aggregate(&schedule.items, granularity);
    println!("{}", format_series(&series));

    if let Some((range_start, range_end)) = schedule.task_range() {
        let boundaries = boundary_dates(range_start, range_end, granularity);
        let marker = locate_today(&boundaries, now, args.column_width, args.rtl);
        println!("{}", format_marker(marker));
    }

    Ok(())
}
