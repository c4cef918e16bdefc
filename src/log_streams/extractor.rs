use super::record::LogStreamRecord;
use crate::error::LogStreamError;
use serde_json::Value;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use tracing::{debug, trace};

/// `aws --debug` prints response bodies as python byte literals: b'{...}'
const MARKER_PREFIX: &str = "b'{\"logStreams";
const LITERAL_OPEN: &str = "b'";
const LITERAL_CLOSE: char = '\'';

/// What a single line of the debug capture holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A response body; carries the JSON text between the literal quotes
    Payload(&'a str),
    Noise,
}

impl<'a> LineKind<'a> {
    pub fn classify(line: &'a str) -> Self {
        if !line.starts_with(MARKER_PREFIX) {
            return LineKind::Noise;
        }

        let body = line.trim_end();
        let body = body.strip_prefix(LITERAL_OPEN).unwrap_or(body);
        let body = body.strip_suffix(LITERAL_CLOSE).unwrap_or(body);
        LineKind::Payload(body)
    }
}

/// Decode one payload into its records, checking the shape explicitly
pub fn parse_payload(line: &str, payload: &str) -> Result<Vec<LogStreamRecord>, LogStreamError> {
    let value: Value =
        serde_json::from_str(payload).map_err(|source| LogStreamError::MalformedPayload {
            line: line.to_string(),
            source,
        })?;

    let entries = match value {
        Value::Object(mut map) => map.remove("logStreams"),
        _ => None,
    };
    let Some(Value::Array(entries)) = entries else {
        return Err(LogStreamError::MissingStreams {
            line: line.to_string(),
        });
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value(entry).map_err(|source| LogStreamError::InvalidRecord {
                index,
                line: line.to_string(),
                source,
            })
        })
        .collect()
}

/// Lazily yields every log stream found in a debug capture, in file order.
/// The first error ends the sequence.
#[derive(Debug)]
pub struct StreamExtractor<R: BufRead> {
    lines: Lines<R>,
    line_number: usize,
    pending: VecDeque<LogStreamRecord>,
    failed: bool,
}

impl StreamExtractor<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LogStreamError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| LogStreamError::open(path, e))?;
        debug!(path = %path.display(), "reading debug capture");
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> StreamExtractor<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
            pending: VecDeque::new(),
            failed: false,
        }
    }

    fn fail(&mut self, err: LogStreamError) -> Option<Result<LogStreamRecord, LogStreamError>> {
        self.failed = true;
        Some(Err(err))
    }
}

impl<R: BufRead> Iterator for StreamExtractor<R> {
    type Item = Result<LogStreamRecord, LogStreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            if let Some(record) = self.pending.pop_front() {
                return Some(Ok(record));
            }

            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(source) => {
                    let line_number = self.line_number + 1;
                    return self.fail(LogStreamError::Read {
                        line_number,
                        source,
                    });
                }
            };
            self.line_number += 1;

            let LineKind::Payload(payload) = LineKind::classify(&line) else {
                continue;
            };

            match parse_payload(&line, payload) {
                Ok(records) => {
                    trace!(
                        line_number = self.line_number,
                        streams = records.len(),
                        "decoded logStreams payload"
                    );
                    self.pending.extend(records);
                }
                Err(err) => return self.fail(err),
            }
        }
    }
}
