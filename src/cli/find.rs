//! tsk find command implementation.
//!
//! Matches keep their original task numbers so the output is directly
//! usable with mark/unmark/delete.

use serde::Serialize;

use crate::error::Result;
use crate::output::{emit_success, render_numbered, HumanOutput, OutputOptions};
use crate::task::Task;
use crate::tracker::Tracker;

#[derive(Serialize)]
struct FindReport<'a> {
    keyword: &'a str,
    total: usize,
    matches: Vec<MatchEntry<'a>>,
}

#[derive(Serialize)]
struct MatchEntry<'a> {
    number: usize,
    task: &'a Task,
}

pub fn run(tracker: &Tracker, keyword: &str, output: OutputOptions, skipped: usize) -> Result<()> {
    let matches = tracker.find(keyword);

    let header = if matches.is_empty() {
        format!("No tasks matching {keyword:?}.")
    } else {
        format!("Tasks matching {keyword:?}:")
    };

    let mut human = HumanOutput::new(header);
    for (index, task) in &matches {
        human.push_line(render_numbered(*index, task));
    }
    super::warn_skipped(&mut human, skipped);

    let report = FindReport {
        keyword,
        total: matches.len(),
        matches: matches
            .iter()
            .map(|&(index, task)| MatchEntry {
                number: index + 1,
                task,
            })
            .collect(),
    };

    emit_success(output, "find", &report, &human)
}
