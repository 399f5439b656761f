//! tsk todo / deadline / event command implementations.
//!
//! All three build the task from already-validated parts and hand it to the
//! tracker, which persists or rolls back.

use serde::Serialize;

use crate::datetime;
use crate::error::Result;
use crate::output::{emit_success, render_task, HumanOutput, OutputOptions};
use crate::task::Task;
use crate::tracker::Tracker;

/// Options shared by the three add commands
pub struct AddOptions {
    pub description: Vec<String>,
    pub output: OutputOptions,
    pub skipped: usize,
}

#[derive(Serialize)]
struct AddReport<'a> {
    task: &'a Task,
    total: usize,
}

pub fn todo(tracker: &mut Tracker, options: AddOptions) -> Result<()> {
    let description = super::join_description(options.description)?;
    let task = tracker.add(Task::todo(description))?.clone();
    report(tracker, "todo", task, options.output, options.skipped)
}

pub fn deadline(tracker: &mut Tracker, options: AddOptions, by: &str) -> Result<()> {
    let description = super::join_description(options.description)?;
    let due = datetime::parse_date(by)?;
    let task = tracker.add(Task::deadline(description, due))?.clone();
    report(tracker, "deadline", task, options.output, options.skipped)
}

pub fn event(tracker: &mut Tracker, options: AddOptions, from: &str, to: &str) -> Result<()> {
    let description = super::join_description(options.description)?;
    let start = datetime::parse_date_time(from)?;
    let end = datetime::parse_date_time(to)?;
    let task = tracker.add(Task::event(description, start, end))?.clone();
    report(tracker, "event", task, options.output, options.skipped)
}

fn report(
    tracker: &Tracker,
    command: &str,
    task: Task,
    output: OutputOptions,
    skipped: usize,
) -> Result<()> {
    let mut human = HumanOutput::new(format!("Added: {}", render_task(&task)));
    human.push_line(format!("{} task(s) in the list", tracker.len()));
    super::warn_skipped(&mut human, skipped);

    emit_success(
        output,
        command,
        &AddReport {
            task: &task,
            total: tracker.len(),
        },
        &human,
    )
}
