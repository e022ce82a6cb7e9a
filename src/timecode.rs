/*!
 * Time codec.
 *
 * Converts SRT timestamps (`HH:MM:SS,mmm`) to seconds, and seconds to
 * integer frame numbers at a given frame rate.
 */

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::errors::TimecodeError;

// @const: Single SRT timestamp, whole string
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2}):([0-9]{2}):([0-9]{2}),([0-9]{3})$").unwrap()
});

// @const: SRT time range line, anchored at the start only
static TIME_RANGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2}):([0-9]{2}):([0-9]{2}),([0-9]{3}) --> ([0-9]{2}):([0-9]{2}):([0-9]{2}),([0-9]{3})").unwrap()
});

/// Parse a single `HH:MM:SS,mmm` timestamp into seconds
pub fn parse_timestamp(timestamp: &str) -> Result<f64, TimecodeError> {
    let caps = TIMESTAMP_REGEX
        .captures(timestamp)
        .ok_or_else(|| invalid(timestamp))?;
    seconds_from_captures(&caps, 1).ok_or_else(|| invalid(timestamp))
}

/// Parse an `HH:MM:SS,mmm --> HH:MM:SS,mmm` line into `(start, end)` seconds.
///
/// Anything after the end timestamp (position coordinates, for instance)
/// is ignored.
pub fn parse_time_range(line: &str) -> Result<(f64, f64), TimecodeError> {
    let caps = TIME_RANGE_REGEX
        .captures(line)
        .ok_or_else(|| invalid(line))?;

    let start = seconds_from_captures(&caps, 1).ok_or_else(|| invalid(line))?;
    let end = seconds_from_captures(&caps, 5).ok_or_else(|| invalid(line))?;
    Ok((start, end))
}

/// Convert seconds to a frame number: `floor(seconds * fps)`
pub fn seconds_to_frame(seconds: f64, fps: i64) -> i64 {
    (seconds * fps as f64).floor() as i64
}

/// Format seconds as an SRT timestamp (HH:MM:SS,mmm)
pub fn format_timestamp(seconds: f64) -> String {
    let ms = (seconds * 1000.0).round().max(0.0) as u64;
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let secs = (ms % 60_000) / 1_000;
    let millis = ms % 1_000;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, millis)
}

fn seconds_from_captures(caps: &Captures, start_idx: usize) -> Option<f64> {
    let field = |offset: usize| -> Option<u64> {
        caps.get(start_idx + offset)?.as_str().parse().ok()
    };

    let hours = field(0)?;
    let minutes = field(1)?;
    let seconds = field(2)?;
    let millis = field(3)?;

    Some((hours * 3600 + minutes * 60 + seconds) as f64 + millis as f64 / 1000.0)
}

fn invalid(input: &str) -> TimecodeError {
    TimecodeError::InvalidFormat {
        input: input.to_string(),
    }
}
