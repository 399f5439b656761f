//! Date and time handling for user input and display.
//!
//! Users enter dates as `yyyy-mm-dd` and date-times as `yyyy-mm-dd HHMM`;
//! display output is `Oct 15 2019` and `Dec 2 2019, 6:00pm`. These formats
//! exist only at the CLI boundary. The durable file always uses the ISO
//! machine formats in [`crate::codec`], so display choices can change
//! without touching saved data.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{Error, Result};

const INPUT_DATE: &str = "%Y-%m-%d";
const INPUT_DATE_TIME: &str = "%Y-%m-%d %H%M";

const OUTPUT_DATE: &str = "%b %-d %Y";
const OUTPUT_DATE_TIME: &str = "%b %-d %Y, %-I:%M%P";

/// Parse a user-entered calendar date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, INPUT_DATE)
        .map_err(|_| Error::InvalidDate(trimmed.to_string()))
}

/// Parse a user-entered date-time.
pub fn parse_date_time(input: &str) -> Result<NaiveDateTime> {
    let trimmed = input.trim();
    NaiveDateTime::parse_from_str(trimmed, INPUT_DATE_TIME)
        .map_err(|_| Error::InvalidDateTime(trimmed.to_string()))
}

/// Format a date for display.
pub fn format_date(date: NaiveDate) -> String {
    date.format(OUTPUT_DATE).to_string()
}

/// Format a date-time for display.
pub fn format_date_time(date_time: NaiveDateTime) -> String {
    date_time.format(OUTPUT_DATE_TIME).to_string()
}
