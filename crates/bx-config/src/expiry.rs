//! Expiry date parsing.
//!
//! Expiry dates use the US English medium date style, `"MMM D, YYYY"`
//! (`"Jul 1, 2012"`). A date resolves to midnight at the start of that day
//! in the loader's UTC offset, expressed as epoch milliseconds.
//!
//! The whole string must be the date. Prefix-matching date parsers accept
//! `"Jul 1, 2012 (final)"` and drop the rest; this one does not, so any
//! text after the year is a parse failure.

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use thiserror::Error;

/// chrono format for the medium US date style.
pub const EXPIRY_FORMAT: &str = "%b %d, %Y";

/// Sentinel timestamp meaning "never expires".
pub const NEVER_EXPIRES: i64 = i64::MAX;

/// Errors from expiry date parsing.
#[derive(Debug, Error)]
pub enum ExpiryParseError {
    #[error("expected a date like \"Jul 1, 2012\": {0}")]
    Format(#[from] chrono::ParseError),

    #[error("date {0} is not representable at the configured offset")]
    OutOfRange(NaiveDate),
}

/// Parse an expiry date string to epoch milliseconds at `offset`.
///
/// Leading and trailing whitespace is ignored; month names match
/// case-insensitively. Anything after the year is an error.
pub fn parse_expiry(text: &str, offset: FixedOffset) -> Result<i64, ExpiryParseError> {
    let date = NaiveDate::parse_from_str(text.trim(), EXPIRY_FORMAT)?;
    let midnight = NaiveDateTime::from(date);
    offset
        .from_local_datetime(&midnight)
        .single()
        .map(|dt| dt.timestamp_millis())
        .ok_or(ExpiryParseError::OutOfRange(date))
}
