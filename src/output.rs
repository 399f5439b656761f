//! Shared output formatting for tsk CLI commands.
//!
//! Human rendering and the JSON envelope both live here; the core modules
//! never format user-facing text.

use serde::Serialize;

use crate::datetime;
use crate::error::Result;
use crate::task::Task;

pub const SCHEMA_VERSION: &str = "tsk.v1";

#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub json: bool,
    pub quiet: bool,
}

/// Human-readable command output: a header, body lines, warnings.
#[derive(Debug, Clone, Default)]
pub struct HumanOutput {
    header: String,
    lines: Vec<String>,
    warnings: Vec<String>,
}

impl HumanOutput {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            lines: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn push_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}

/// Render a task the way the list shows it: `[D][X] return book (by: Oct 15 2019)`.
pub fn render_task(task: &Task) -> String {
    let status = if task.is_done() { "X" } else { " " };

    match task {
        Task::Todo { description, .. } => format!("[T][{status}] {description}"),
        Task::Deadline {
            description, due, ..
        } => format!(
            "[D][{status}] {description} (by: {})",
            datetime::format_date(*due)
        ),
        Task::Event {
            description,
            start,
            end,
            ..
        } => format!(
            "[E][{status}] {description} (from: {} to: {})",
            datetime::format_date_time(*start),
            datetime::format_date_time(*end)
        ),
    }
}

/// Render a task with its 1-based task number: `2. [T][ ] read book`.
pub fn render_numbered(index: usize, task: &Task) -> String {
    format!("{}. {}", index + 1, render_task(task))
}

pub fn emit_success<T: Serialize>(
    options: OutputOptions,
    command: &str,
    data: &T,
    human: &HumanOutput,
) -> Result<()> {
    if options.json {
        #[derive(Serialize)]
        struct Envelope<'a, T: Serialize> {
            schema_version: &'static str,
            command: &'a str,
            status: &'static str,
            data: &'a T,
            #[serde(skip_serializing_if = "Vec::is_empty")]
            warnings: Vec<String>,
        }

        let payload = Envelope {
            schema_version: SCHEMA_VERSION,
            command,
            status: "success",
            data,
            warnings: human.warnings.clone(),
        };

        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if options.quiet {
        return Ok(());
    }

    println!("{}", format_human(human));
    Ok(())
}

pub fn emit_error(command: &str, err: &crate::error::Error, json: bool) -> Result<()> {
    if json {
        #[derive(Serialize)]
        struct ErrorBody<'a> {
            message: &'a str,
            code: i32,
            kind: &'static str,
        }

        #[derive(Serialize)]
        struct Envelope<'a> {
            schema_version: &'static str,
            command: &'a str,
            status: &'static str,
            error: ErrorBody<'a>,
        }

        let payload = Envelope {
            schema_version: SCHEMA_VERSION,
            command,
            status: "error",
            error: ErrorBody {
                message: &err.to_string(),
                code: err.exit_code(),
                kind: error_kind(err),
            },
        };

        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    eprintln!("error: {err}");
    Ok(())
}

/// Best-effort command name for error envelopes, taken from argv before
/// clap gets a chance to reject the input.
pub fn infer_command_name_from_args() -> String {
    std::env::args()
        .skip(1)
        .find(|arg| !arg.starts_with('-'))
        .unwrap_or_else(|| "tsk".to_string())
}

pub fn format_human(output: &HumanOutput) -> String {
    let mut lines = Vec::new();
    lines.push(output.header.clone());

    for line in &output.lines {
        lines.push(format!("  {line}"));
    }
    for warning in &output.warnings {
        lines.push(format!("warning: {warning}"));
    }

    lines.join("\n")
}

fn error_kind(err: &crate::error::Error) -> &'static str {
    match err.exit_code() {
        2 => "user_error",
        _ => "operation_failed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn renders_each_kind() {
        let date = NaiveDate::from_ymd_opt(2019, 10, 15).unwrap();
        let start = NaiveDate::from_ymd_opt(2019, 12, 2)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        let end = NaiveDate::from_ymd_opt(2019, 12, 2)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap();

        assert_eq!(render_task(&Task::todo("read book")), "[T][ ] read book");
        assert_eq!(
            render_task(&Task::deadline("return book", date)),
            "[D][ ] return book (by: Oct 15 2019)"
        );
        assert_eq!(
            render_task(&Task::event("project meeting", start, end)),
            "[E][ ] project meeting (from: Dec 2 2019, 6:00pm to: Dec 2 2019, 8:00pm)"
        );
    }

    #[test]
    fn renders_done_marker_and_numbering() {
        let mut task = Task::todo("read book");
        task.mark();

        assert_eq!(render_task(&task), "[T][X] read book");
        assert_eq!(render_numbered(1, &task), "2. [T][X] read book");
    }

    #[test]
    fn human_output_includes_warnings() {
        let mut output = HumanOutput::new("Here are your tasks:");
        output.push_line("1. [T][ ] read book");
        output.push_warning("skipped 2 corrupt line(s)");

        let text = format_human(&output);
        assert!(text.starts_with("Here are your tasks:"));
        assert!(text.contains("  1. [T][ ] read book"));
        assert!(text.contains("warning: skipped 2 corrupt line(s)"));
    }
}
