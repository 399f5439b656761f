//! tsk list command implementation.

use serde::Serialize;

use crate::error::Result;
use crate::output::{emit_success, render_numbered, HumanOutput, OutputOptions};
use crate::task::Task;
use crate::tracker::Tracker;

#[derive(Serialize)]
struct ListReport<'a> {
    total: usize,
    tasks: &'a [Task],
}

pub fn run(tracker: &Tracker, output: OutputOptions, skipped: usize) -> Result<()> {
    let header = if tracker.is_empty() {
        "No tasks yet.".to_string()
    } else {
        "Here are your tasks:".to_string()
    };

    let mut human = HumanOutput::new(header);
    for (index, task) in tracker.tasks().iter().enumerate() {
        human.push_line(render_numbered(index, task));
    }
    super::warn_skipped(&mut human, skipped);

    emit_success(
        output,
        "list",
        &ListReport {
            total: tracker.len(),
            tasks: tracker.tasks(),
        },
        &human,
    )
}
