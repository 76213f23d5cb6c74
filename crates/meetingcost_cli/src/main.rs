//! Command-line front end for `meetingcost_core`.
//!
//! # Responsibility
//! - Build one meeting from quick-mode input and print it as JSON.
//! - Keep core wiring verifiable without any UI or timer runtime.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use meetingcost_core::{
    build_meeting, core_version, create_participants, default_log_level, format_currency,
    format_elapsed_time, generate_comparison_list, init_logging, BuildMeetingRequest,
    MeetingFormat, QuickMode, DEFAULT_COMPARISON_COUNT,
};

#[derive(Parser, Debug)]
#[command(name = "meetingcost")]
#[command(about = "Compute what a meeting costs", long_about = None)]
struct Cli {
    /// Number of identical participants
    #[arg(short, long, default_value_t = 5)]
    count: usize,
    /// Whether `value` is an annual salary or an hourly rate
    #[arg(short, long, value_enum, default_value_t = ModeArg::Salary)]
    mode: ModeArg,
    /// Annual salary or hourly rate per participant
    #[arg(short, long, default_value_t = 90_000.0)]
    value: f64,
    /// Elapsed meeting time in seconds
    #[arg(short, long, default_value_t = 3600.0)]
    duration: f64,
    /// Free-text description (sanitized before use)
    #[arg(long)]
    description: Option<String>,
    /// Sector tag, e.g. private or public
    #[arg(long)]
    sector: Option<String>,
    /// Treat as in-person and add commute/extras overhead
    #[arg(long)]
    in_person: bool,
    /// Commute minutes per person (in-person only)
    #[arg(long)]
    commute: Option<f64>,
    /// Extra spend per person (in-person only)
    #[arg(long)]
    extras: Option<f64>,
    /// Number of cost comparisons to print
    #[arg(long, default_value_t = DEFAULT_COMPARISON_COUNT)]
    comparisons: usize,
    /// Absolute directory for rolling log files
    #[arg(long)]
    log_dir: Option<String>,
    /// Log level used with --log-dir; debug builds default to debug, release to info
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Salary,
    Hourly,
}

impl From<ModeArg> for QuickMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Salary => QuickMode::Salary,
            ModeArg::Hourly => QuickMode::Hourly,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    eprintln!("meetingcost_core version={}", core_version());

    if let Some(log_dir) = cli.log_dir.as_deref() {
        init_logging(resolve_log_level(cli.log_level.as_deref()), log_dir)
            .map_err(anyhow::Error::msg)?;
    }

    let participants = create_participants(cli.count, cli.mode.into(), cli.value)
        .context("invalid quick-mode participant value")?;

    let format = if cli.in_person {
        MeetingFormat::InPerson
    } else {
        MeetingFormat::Remote
    };
    let meeting = build_meeting(BuildMeetingRequest {
        sector_type: cli.sector,
        description: cli.description,
        format,
        apply_in_person_tax: cli.in_person,
        commute_minutes: cli.commute,
        extras_per_person: cli.extras,
        ..BuildMeetingRequest::new(participants, cli.duration)
    })?;

    println!("{}", serde_json::to_string_pretty(&meeting)?);
    println!(
        "{} over {}",
        format_currency(meeting.total_cost()),
        format_elapsed_time(meeting.duration())
    );
    for comparison in generate_comparison_list(meeting.total_cost(), cli.comparisons) {
        println!("= {comparison}");
    }

    Ok(())
}

fn resolve_log_level(requested: Option<&str>) -> &str {
    requested.unwrap_or_else(|| default_log_level().as_str())
}
