use super::record::LogStreamRecord;
use crate::error::LogStreamError;
use chrono::{DateTime, Local, TimeZone};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::Display;

static ARN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^arn:aws:.*:\d+:log-group:(.*):log-stream:(.*)").expect("valid arn pattern")
});

/// Group and stream names recovered from a log stream ARN
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamArn {
    pub group: String,
    pub stream: String,
}

impl StreamArn {
    pub fn parse(arn: &str) -> Result<Self, LogStreamError> {
        let captures = ARN_PATTERN
            .captures(arn)
            .ok_or_else(|| LogStreamError::UnrecognizedArn {
                arn: arn.to_string(),
            })?;

        Ok(Self {
            group: captures[1].to_string(),
            stream: captures[2].to_string(),
        })
    }
}

/// Renders the advisory comment and `aws logs delete-log-stream` line for a stream
#[derive(Debug, Clone)]
pub struct CommandFormatter<Tz: TimeZone> {
    tz: Tz,
}

impl Default for CommandFormatter<Local> {
    fn default() -> Self {
        Self::new(Local)
    }
}

impl<Tz: TimeZone> CommandFormatter<Tz>
where
    Tz::Offset: Display,
{
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn format(&self, stream: &LogStreamRecord) -> Result<String, LogStreamError> {
        let arn = StreamArn::parse(&stream.arn)?;
        let created = self.render_time(stream.creation_time);

        Ok(format!(
            "# Deleting log {} with {} stored bytes, created at {}\n\
             aws logs delete-log-stream --log-group-name {} --log-stream-name {}",
            stream.log_stream_name, stream.stored_bytes, created, arn.group, arn.stream
        ))
    }

    /// `YYYY-MM-DD HH:MM:SS`, with microseconds only when there is a sub-second part
    pub fn render_time(&self, epoch_ms: i64) -> String {
        let Some(dt) = self.tz.timestamp_millis_opt(epoch_ms).single() else {
            return format!("{epoch_ms}ms since epoch");
        };
        render_datetime(&dt, epoch_ms.rem_euclid(1000) != 0)
    }
}

fn render_datetime<Tz: TimeZone>(dt: &DateTime<Tz>, with_fraction: bool) -> String
where
    Tz::Offset: Display,
{
    if with_fraction {
        dt.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
    } else {
        dt.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
