//! tsk mark / unmark command implementations.

use serde::Serialize;

use crate::error::Result;
use crate::output::{emit_success, render_numbered, HumanOutput, OutputOptions};
use crate::task::Task;
use crate::tracker::Tracker;

#[derive(Serialize)]
struct MarkReport<'a> {
    number: usize,
    task: &'a Task,
}

pub fn run(
    tracker: &mut Tracker,
    number: usize,
    done: bool,
    output: OutputOptions,
    skipped: usize,
) -> Result<()> {
    let index = super::resolve_number(number, tracker.len())?;

    let task = if done {
        tracker.mark(index)?.clone()
    } else {
        tracker.unmark(index)?.clone()
    };

    let verb = if done { "done" } else { "not done" };
    let mut human = HumanOutput::new(format!(
        "Marked as {verb}: {}",
        render_numbered(index, &task)
    ));
    super::warn_skipped(&mut human, skipped);

    emit_success(
        output,
        if done { "mark" } else { "unmark" },
        &MarkReport {
            number,
            task: &task,
        },
        &human,
    )
}
