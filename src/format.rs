//! Seconds <-> `HH:MM:SS` conversion
//!
//! The conversion is plain integer arithmetic on a zero origin, so it never
//! depends on the local time zone or daylight-saving rules. Hours are not
//! wrapped at 24 and widen past two digits when needed.

use std::time::Duration;

use crate::error::FormatError;

/// Period of the repeating tick; one tick is one elapsed second.
pub const TICK_PERIOD: Duration = Duration::from_millis(1000);

/// Format a total number of seconds as zero-padded `HH:MM:SS`.
pub fn format_hms(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Parse a string produced by [`format_hms`] back into total seconds.
pub fn parse_hms(text: &str) -> Result<u64, FormatError> {
    let malformed = || FormatError::Malformed(text.to_string());

    let mut fields = text.split(':');
    let (Some(hours), Some(minutes), Some(seconds), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(malformed());
    };

    if hours.len() < 2 || minutes.len() != 2 || seconds.len() != 2 {
        return Err(malformed());
    }

    let hours = parse_field(hours).ok_or_else(malformed)?;
    let minutes = parse_field(minutes).ok_or_else(malformed)?;
    let seconds = parse_field(seconds).ok_or_else(malformed)?;

    if minutes >= 60 {
        return Err(FormatError::OutOfRange { field: "minutes", value: minutes });
    }
    if seconds >= 60 {
        return Err(FormatError::OutOfRange { field: "seconds", value: seconds });
    }

    hours
        .checked_mul(3600)
        .and_then(|h| h.checked_add(minutes * 60 + seconds))
        .ok_or(FormatError::Overflow)
}

fn parse_field(field: &str) -> Option<u64> {
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
