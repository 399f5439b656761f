//! Line codec for the durable task format.
//!
//! Each task is one line of text, fields joined by `" | "`, first field a
//! one-letter kind tag, second field `1`/`0` for done:
//!
//! ```text
//! T | 1 | read book
//! D | 0 | return book | 2019-10-15
//! E | 0 | project meeting | 2019-12-02T18:00:00 | 2019-12-02T20:00:00
//! ```
//!
//! Dates are ISO calendar dates and date-times, never the display format,
//! so saved files are immune to display-format drift. `decode(encode(t))`
//! returns `t` exactly for every task value.
//!
//! Decoding splits on `|` and trims each field, so extra whitespace around
//! the separator is tolerated. Errors are classified: structural problems
//! (field counts, unknown tags) are skippable at load, while an unparseable
//! date means the file is corrupt and is fatal. The load policy lives in
//! [`crate::storage`]; this module only reports which case it found.

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::task::Task;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
/// Accepted on decode for files written by minute-precision encoders.
const DATE_TIME_FORMAT_MINUTES: &str = "%Y-%m-%dT%H:%M";

/// Why a durable line failed to decode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("expected at least 3 fields, found {found}")]
    MissingFields { found: usize },

    #[error("unknown task tag {tag:?}")]
    UnknownTag { tag: String },

    #[error("tag {tag:?} expects {expected} fields, found {found}")]
    FieldCount {
        tag: char,
        expected: usize,
        found: usize,
    },

    #[error("invalid date {value:?}")]
    InvalidDate { value: String },

    #[error("invalid date/time {value:?}")]
    InvalidDateTime { value: String },
}

impl DecodeError {
    /// Whether this error aborts the whole load.
    ///
    /// Structural corruption (wrong field shape) is skipped and counted so
    /// one bad line cannot take the rest of the file down with it. A date
    /// field that does not parse as the machine format indicates file
    /// corruption and is fatal.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            DecodeError::InvalidDate { .. } | DecodeError::InvalidDateTime { .. }
        )
    }
}

/// Encode a task as one durable line, without a trailing newline.
pub fn encode(task: &Task) -> String {
    let done = if task.is_done() { "1" } else { "0" };

    match task {
        Task::Todo { description, .. } => format!("T | {done} | {description}"),
        Task::Deadline {
            description, due, ..
        } => format!("D | {done} | {description} | {}", due.format(DATE_FORMAT)),
        Task::Event {
            description,
            start,
            end,
            ..
        } => format!(
            "E | {done} | {description} | {} | {}",
            start.format(DATE_TIME_FORMAT),
            end.format(DATE_TIME_FORMAT)
        ),
    }
}

/// Decode one durable line into a task.
///
/// The caller is expected to have skipped blank lines already; a blank
/// line decodes as [`DecodeError::MissingFields`].
pub fn decode(line: &str) -> Result<Task, DecodeError> {
    let fields: Vec<&str> = line.split('|').map(str::trim).collect();
    if fields.len() < 3 {
        return Err(DecodeError::MissingFields {
            found: fields.len(),
        });
    }

    let tag = fields[0];
    let done = fields[1] == "1";
    let description = fields[2].to_string();

    let mut task = match tag {
        "T" => {
            expect_fields('T', 3, fields.len())?;
            Task::todo(description)
        }
        "D" => {
            expect_fields('D', 4, fields.len())?;
            Task::deadline(description, parse_date(fields[3])?)
        }
        "E" => {
            expect_fields('E', 5, fields.len())?;
            Task::event(
                description,
                parse_date_time(fields[3])?,
                parse_date_time(fields[4])?,
            )
        }
        other => {
            return Err(DecodeError::UnknownTag {
                tag: other.to_string(),
            })
        }
    };

    if done {
        task.mark();
    }
    Ok(task)
}

fn expect_fields(tag: char, expected: usize, found: usize) -> Result<(), DecodeError> {
    if found != expected {
        return Err(DecodeError::FieldCount {
            tag,
            expected,
            found,
        });
    }
    Ok(())
}

fn parse_date(value: &str) -> Result<NaiveDate, DecodeError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| DecodeError::InvalidDate {
        value: value.to_string(),
    })
}

fn parse_date_time(value: &str) -> Result<NaiveDateTime, DecodeError> {
    NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT_MINUTES))
        .map_err(|_| DecodeError::InvalidDateTime {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_event() -> Task {
        Task::event(
            "project meeting",
            date(2019, 12, 2).and_hms_opt(18, 0, 0).unwrap(),
            date(2019, 12, 2).and_hms_opt(20, 0, 0).unwrap(),
        )
    }

    #[test]
    fn encodes_the_documented_format() {
        assert_eq!(encode(&Task::todo("read book")), "T | 0 | read book");

        let mut done = Task::todo("read book");
        done.mark();
        assert_eq!(encode(&done), "T | 1 | read book");

        assert_eq!(
            encode(&Task::deadline("return book", date(2019, 10, 15))),
            "D | 0 | return book | 2019-10-15"
        );
        assert_eq!(
            encode(&sample_event()),
            "E | 0 | project meeting | 2019-12-02T18:00:00 | 2019-12-02T20:00:00"
        );
    }

    #[test]
    fn round_trips_every_variant() {
        let mut tasks = vec![
            Task::todo("read book"),
            Task::deadline("return book", date(2019, 10, 15)),
            sample_event(),
        ];
        let mut marked: Vec<Task> = tasks
            .iter()
            .cloned()
            .map(|mut task| {
                task.mark();
                task
            })
            .collect();
        tasks.append(&mut marked);

        for task in tasks {
            assert_eq!(decode(&encode(&task)).unwrap(), task);
        }
    }

    #[test]
    fn decodes_a_saved_deadline_line() {
        let task = decode("D | 0 | return book | 2019-10-15").unwrap();
        assert_eq!(task, Task::deadline("return book", date(2019, 10, 15)));
        assert!(!task.is_done());
    }

    #[test]
    fn tolerates_whitespace_around_the_separator() {
        let tight = decode("T|1|read book").unwrap();
        let loose = decode("  T  |  1  |  read book  ").unwrap();

        assert_eq!(tight, loose);
        assert!(tight.is_done());
        assert_eq!(tight.description(), "read book");
    }

    #[test]
    fn accepts_minute_precision_date_times() {
        let task = decode("E | 0 | standup | 2019-12-02T18:00 | 2019-12-02T18:15").unwrap();
        match task {
            Task::Event { start, end, .. } => {
                assert_eq!(start, date(2019, 12, 2).and_hms_opt(18, 0, 0).unwrap());
                assert_eq!(end, date(2019, 12, 2).and_hms_opt(18, 15, 0).unwrap());
            }
            other => panic!("expected event, got {other:?}"),
        }
    }

    #[test]
    fn classifies_structural_errors_as_skippable() {
        let errors = [
            decode("").unwrap_err(),
            decode("T | 1").unwrap_err(),
            decode("X | 1 | mystery").unwrap_err(),
            decode("T | 1 | read book | extra").unwrap_err(),
            decode("D | 1 | return book").unwrap_err(),
            decode("E | 0 | meeting | 2019-12-02T18:00:00").unwrap_err(),
        ];

        for error in errors {
            assert!(!error.is_fatal(), "{error} should be skippable");
        }
    }

    #[test]
    fn classifies_bad_dates_as_fatal() {
        let bad_date = decode("D | 0 | return book | someday").unwrap_err();
        assert_eq!(
            bad_date,
            DecodeError::InvalidDate {
                value: "someday".to_string()
            }
        );
        assert!(bad_date.is_fatal());

        let bad_time = decode("E | 0 | meeting | 2019-12-02 1800 | 2019-12-02 2000").unwrap_err();
        assert!(bad_time.is_fatal());
    }

    #[test]
    fn unknown_tag_reports_the_tag() {
        assert_eq!(
            decode("Z | 0 | what").unwrap_err(),
            DecodeError::UnknownTag {
                tag: "Z".to_string()
            }
        );
    }
}
