//! Terminal front end - an interactive prompt over the expense tracker.
//!
//! This is the presentation layer. It owns everything the engine deliberately does not:
//! choosing "today" as the reference date, ordering rows for display, empty-state hints and
//! turning errors into messages.

/// Command parsing and dispatch
pub mod commands;
/// Text rendering of tracker results
pub mod render;

pub use commands::{Reply, ReplCommand, ReplLine, execute};

use crate::{core::ExpenseTracker, errors::Result};
use chrono::NaiveDate;
use std::io::{BufRead, Write};
use tracing::{debug, info};

const PROMPT: &str = "> ";

const GREETING: &str = "Expense tracker ready. Type `help` for commands, `quit` to leave.";

/// Runs the prompt until `quit` or end of input.
///
/// `today` is asked for the reference date before each command, so a session left open past
/// midnight picks up the new day.
pub fn run<R, W, F>(tracker: &mut ExpenseTracker, input: R, output: &mut W, today: F) -> Result<()>
where
    R: BufRead,
    W: Write,
    F: Fn() -> NaiveDate,
{
    info!("Starting interactive session");
    writeln!(output, "{GREETING}")?;
    write!(output, "{PROMPT}")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(output, "{PROMPT}")?;
            output.flush()?;
            continue;
        }

        debug!(line = %line, "Read command");
        let reply = match ReplLine::parse_line(&line) {
            Ok(parsed) => execute(tracker, parsed.command, today()),
            // clap errors carry their own usage text, including `help` output
            Err(e) => Reply::Message(e.render().to_string().trim_end().to_string()),
        };

        match reply {
            Reply::Message(message) => writeln!(output, "{message}")?,
            Reply::Quit => break,
        }
        write!(output, "{PROMPT}")?;
        output.flush()?;
    }

    info!(expenses = tracker.list_expenses().len(), "Session ended");
    writeln!(output)?;
    Ok(())
}
