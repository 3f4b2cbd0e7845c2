use chrono::DateTime;

// ACT renders a variable-width fractional second (routinely 7 digits) and a
// colon in the offset. The first 26 bytes hold the date, time, and as much of
// the fraction as a fixed-precision parse tolerates; the last 6 bytes hold
// the offset. Anything between the two slices is dropped.
const PREFIX_LEN: usize = 26;
const OFFSET_LEN: usize = 6;

const ACT_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimestampFormatError {
    #[error("timestamp {raw:?} is shorter than the fixed prefix+offset layout")]
    TooShort { raw: String },
    #[error("timestamp {raw:?} is not ASCII date-time text")]
    NotAscii { raw: String },
    #[error("timestamp {raw:?} did not parse as a date-time with offset")]
    Unparseable {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },
}

pub fn millis_from_act_timestamp(raw: &str) -> Result<i64, TimestampFormatError> {
    if raw.len() < PREFIX_LEN + OFFSET_LEN {
        return Err(TimestampFormatError::TooShort {
            raw: raw.to_string(),
        });
    }
    if !raw.is_ascii() {
        return Err(TimestampFormatError::NotAscii {
            raw: raw.to_string(),
        });
    }

    let mut rebuilt = String::with_capacity(PREFIX_LEN + OFFSET_LEN);
    rebuilt.push_str(&raw[..PREFIX_LEN]);
    rebuilt.push_str(&raw[raw.len() - OFFSET_LEN..]);

    let parsed = DateTime::parse_from_str(&rebuilt, ACT_TIMESTAMP_FORMAT).map_err(|source| {
        TimestampFormatError::Unparseable {
            raw: raw.to_string(),
            source,
        }
    })?;
    Ok(parsed.timestamp_millis())
}

#[cfg(test)]
#[path = "timestamp_test.rs"]
mod tests;
