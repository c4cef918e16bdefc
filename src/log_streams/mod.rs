pub mod command;
pub mod eligibility;
pub mod extractor;
pub mod record;

pub use command::{CommandFormatter, StreamArn};
pub use eligibility::{EligibilityFilter, DEFAULT_MAX_AGE_MS};
pub use extractor::{LineKind, StreamExtractor};
pub use record::LogStreamRecord;

use crate::error::LogStreamError;
use chrono::TimeZone;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::info;

/// Settings for one `log-streams` run
#[derive(Debug, Clone)]
pub struct LogStreamOptions {
    pub debug_file: PathBuf,
    pub max_age_days: u32,
    /// Reference instant in epoch ms, captured once at start
    pub now_ms: i64,
    /// Emit commands for every stream, skipping the eligibility check
    pub include_all: bool,
}

/// Filter and render every extracted stream.
/// Nothing is returned unless the whole capture is processed cleanly.
pub fn render_commands<R, Tz>(
    streams: StreamExtractor<R>,
    options: &LogStreamOptions,
    formatter: &CommandFormatter<Tz>,
) -> Result<Vec<String>, LogStreamError>
where
    R: BufRead,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let filter = EligibilityFilter::with_days(options.now_ms, options.max_age_days);

    let mut seen = 0usize;
    let mut eligible = Vec::new();
    for stream in streams {
        let stream = stream?;
        seen += 1;
        if options.include_all || filter.is_eligible(&stream) {
            eligible.push(stream);
        }
    }
    info!(
        seen,
        eligible = eligible.len(),
        cutoff_ms = filter.cutoff_ms(),
        "filtered log streams"
    );

    eligible.iter().map(|s| formatter.format(s)).collect()
}

/// Entry point for the `log-streams` subcommand
pub fn run<W, Tz>(
    options: &LogStreamOptions,
    formatter: &CommandFormatter<Tz>,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>>
where
    W: Write,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let streams = StreamExtractor::open(&options.debug_file)?;
    let commands = render_commands(streams, options, formatter)?;

    for command in commands {
        writeln!(out, "{command}")?;
    }
    Ok(())
}
