//! tsk delete command implementation.

use serde::Serialize;

use crate::error::Result;
use crate::output::{emit_success, render_task, HumanOutput, OutputOptions};
use crate::task::Task;
use crate::tracker::Tracker;

#[derive(Serialize)]
struct DeleteReport<'a> {
    task: &'a Task,
    remaining: usize,
}

pub fn run(
    tracker: &mut Tracker,
    number: usize,
    output: OutputOptions,
    skipped: usize,
) -> Result<()> {
    let index = super::resolve_number(number, tracker.len())?;
    let removed = tracker.remove(index)?;

    let mut human = HumanOutput::new(format!("Deleted: {}", render_task(&removed)));
    human.push_line(format!("{} task(s) remaining", tracker.len()));
    super::warn_skipped(&mut human, skipped);

    emit_success(
        output,
        "delete",
        &DeleteReport {
            task: &removed,
            remaining: tracker.len(),
        },
        &human,
    )
}
