//! Command-line interface for tsk
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is implemented in its own submodule. The CLI owns the
//! command grammar: it validates descriptions, parses user-entered dates,
//! and turns 1-based task numbers into 0-based indices before anything
//! reaches the core.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config;
use crate::error::{Error, Result};
use crate::output::OutputOptions;
use crate::storage::Storage;
use crate::tracker::Tracker;

mod add;
mod delete;
mod find;
mod list;
mod mark;

/// tsk - personal task tracker
///
/// Tracks todos, deadlines, and events in a plain-text save file.
#[derive(Parser, Debug)]
#[command(name = "tsk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the save file (defaults to the platform data directory)
    #[arg(long, global = true, env = "TSK_FILE")]
    pub file: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a plain todo task
    Todo {
        /// Task description
        #[arg(required = true)]
        description: Vec<String>,
    },

    /// Add a task due by a date
    Deadline {
        /// Task description
        #[arg(required = true)]
        description: Vec<String>,

        /// Due date (yyyy-mm-dd)
        #[arg(long)]
        by: String,
    },

    /// Add an event with a start and end
    Event {
        /// Task description
        #[arg(required = true)]
        description: Vec<String>,

        /// Start date-time ("yyyy-mm-dd HHMM")
        #[arg(long)]
        from: String,

        /// End date-time ("yyyy-mm-dd HHMM")
        #[arg(long)]
        to: String,
    },

    /// List all tasks
    List,

    /// Mark a task as done
    Mark {
        /// 1-based task number as shown by list
        number: usize,
    },

    /// Mark a task as not done
    Unmark {
        /// 1-based task number as shown by list
        number: usize,
    },

    /// Delete a task
    Delete {
        /// 1-based task number as shown by list
        number: usize,
    },

    /// Find tasks whose descriptions contain a keyword
    Find {
        /// Keyword, matched case-insensitively
        keyword: String,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let options = OutputOptions {
            json: self.json,
            quiet: self.quiet,
        };

        let path = config::resolve_data_file(self.file)?;
        let (mut tracker, skipped) = Tracker::open(Storage::new(path))?;

        match self.command {
            Commands::Todo { description } => add::todo(
                &mut tracker,
                add::AddOptions {
                    description,
                    output: options,
                    skipped,
                },
            ),
            Commands::Deadline { description, by } => add::deadline(
                &mut tracker,
                add::AddOptions {
                    description,
                    output: options,
                    skipped,
                },
                &by,
            ),
            Commands::Event {
                description,
                from,
                to,
            } => add::event(
                &mut tracker,
                add::AddOptions {
                    description,
                    output: options,
                    skipped,
                },
                &from,
                &to,
            ),
            Commands::List => list::run(&tracker, options, skipped),
            Commands::Mark { number } => mark::run(&mut tracker, number, true, options, skipped),
            Commands::Unmark { number } => mark::run(&mut tracker, number, false, options, skipped),
            Commands::Delete { number } => delete::run(&mut tracker, number, options, skipped),
            Commands::Find { keyword } => find::run(&tracker, &keyword, options, skipped),
        }
    }
}

/// Join the word list clap collected into one description, rejecting
/// descriptions that are empty after trimming.
pub(crate) fn join_description(words: Vec<String>) -> Result<String> {
    let description = words.join(" ").trim().to_string();
    if description.is_empty() {
        return Err(Error::EmptyDescription);
    }
    Ok(description)
}

/// Translate a 1-based task number into a 0-based index, validated
/// against the current list length.
pub(crate) fn resolve_number(number: usize, len: usize) -> Result<usize> {
    number
        .checked_sub(1)
        .filter(|index| *index < len)
        .ok_or(Error::InvalidIndex { number, len })
}

/// Surface the load-time skipped-line count on whatever the command prints.
pub(crate) fn warn_skipped(human: &mut crate::output::HumanOutput, skipped: usize) {
    if skipped > 0 {
        human.push_warning(format!(
            "skipped {skipped} corrupt line(s) in the save file"
        ));
    }
}
