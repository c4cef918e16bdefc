use serde::Deserialize;

/// One entry of the `logStreams` array returned by `describe-log-streams`
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LogStreamRecord {
    pub log_stream_name: String,
    pub stored_bytes: u64,
    pub creation_time: i64,
    #[serde(default)]
    pub last_event_timestamp: Option<i64>,
    pub arn: String,
}

impl LogStreamRecord {
    /// Most recent activity: the last event if there was one, otherwise creation.
    /// A zero `lastEventTimestamp` counts as missing.
    pub fn effective_timestamp(&self) -> i64 {
        match self.last_event_timestamp {
            Some(ts) if ts != 0 => ts,
            _ => self.creation_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::from_str;

    #[test]
    fn test_deserialize_full_entry() {
        let json_data = r#"
        {
            "logStreamName": "2024/01/01/[$LATEST]abc",
            "creationTime": 1700000000000,
            "firstEventTimestamp": 1700000000100,
            "lastEventTimestamp": 1700000000200,
            "lastIngestionTime": 1700000000300,
            "uploadSequenceToken": "4961",
            "arn": "arn:aws:logs:us-east-1:123456789012:log-group:/aws/lambda/f:log-stream:2024/01/01/[$LATEST]abc",
            "storedBytes": 0
        }
        "#;

        let record: LogStreamRecord = from_str(json_data).unwrap();

        assert_eq!(record.log_stream_name, "2024/01/01/[$LATEST]abc");
        assert_eq!(record.stored_bytes, 0);
        assert_eq!(record.creation_time, 1_700_000_000_000);
        assert_eq!(record.last_event_timestamp, Some(1_700_000_000_200));
    }

    #[test]
    fn test_deserialize_without_last_event() {
        let json_data = r#"
        {
            "logStreamName": "empty",
            "creationTime": 5,
            "arn": "arn:aws:logs:eu-west-1:1:log-group:g:log-stream:empty",
            "storedBytes": 0
        }
        "#;

        let record: LogStreamRecord = from_str(json_data).unwrap();
        assert_eq!(record.last_event_timestamp, None);
        assert_eq!(record.effective_timestamp(), 5);
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let json_data = r#"{"logStreamName": "x", "creationTime": 1, "arn": "a"}"#;
        assert!(from_str::<LogStreamRecord>(json_data).is_err());
    }

    #[test]
    fn test_effective_timestamp_prefers_last_event() {
        let record = LogStreamRecord {
            log_stream_name: "s".into(),
            stored_bytes: 0,
            creation_time: 10,
            last_event_timestamp: Some(20),
            arn: String::new(),
        };
        assert_eq!(record.effective_timestamp(), 20);
    }

    #[test]
    fn test_effective_timestamp_zero_falls_back_to_creation() {
        let record = LogStreamRecord {
            log_stream_name: "s".into(),
            stored_bytes: 0,
            creation_time: 10,
            last_event_timestamp: Some(0),
            arn: String::new(),
        };
        assert_eq!(record.effective_timestamp(), 10);
    }
}
