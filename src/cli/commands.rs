//! Interactive commands - parsing and dispatch.
//!
//! Each input line is parsed with clap into a [`ReplCommand`] and executed against the
//! tracker. Engine errors become `❌` replies; they never end the session.

use super::render;
use crate::core::{ExpenseDraft, ExpenseId, ExpenseTracker, expense::DATE_FORMAT, report};
use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand, error::ErrorKind};

/// One line of interactive input.
#[derive(Debug, Parser)]
#[command(
    name = "expense-tracker",
    no_binary_name = true,
    disable_version_flag = true
)]
pub struct ReplLine {
    #[command(subcommand)]
    pub command: ReplCommand,
}

impl ReplLine {
    /// Parses an input line split into words the way a shell would.
    ///
    /// Quotes keep spaces inside one value, e.g. `list --search "with team"`.
    pub fn parse_line(line: &str) -> Result<Self, clap::Error> {
        let words = shlex::split(line).ok_or_else(|| {
            Self::command().error(ErrorKind::InvalidValue, "unterminated quote in input")
        })?;
        Self::try_parse_from(words)
    }
}

/// Commands available at the prompt.
#[derive(Debug, Subcommand)]
pub enum ReplCommand {
    /// Record a new expense: add <amount> <category> [--date YYYY-MM-DD] [description...]
    Add {
        #[arg(allow_hyphen_values = true)]
        amount: String,
        category: String,
        /// Defaults to today
        #[arg(long)]
        date: Option<String>,
        description: Vec<String>,
    },
    /// Change an expense; fields that are not given keep their current value
    Edit {
        id: ExpenseId,
        #[arg(long, allow_hyphen_values = true)]
        amount: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long, num_args = 0..)]
        description: Option<Vec<String>>,
    },
    /// Delete an expense by id
    Delete { id: ExpenseId },
    /// List expenses, newest first
    List {
        /// Only this category (exact match)
        #[arg(long)]
        category: Option<String>,
        /// Case-insensitive text found in the description or category; quote it to include spaces
        #[arg(long)]
        search: Option<String>,
    },
    /// Monthly total, transaction count, daily average and top category
    Summary {
        /// Reference date, defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Spending per category across all expenses
    Breakdown,
    /// Spending per day over the last week
    Daily {
        /// Reference date, defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Observations about your spending
    Insights {
        /// Reference date, defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Show the configured categories
    Categories,
    /// Leave the tracker
    #[command(alias = "exit")]
    Quit,
}

/// What the session should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and keep reading input
    Message(String),
    /// End the session
    Quit,
}

impl From<String> for Reply {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

fn failure(error: impl std::fmt::Display) -> Reply {
    Reply::Message(format!("❌ {error}"))
}

/// Resolves an optional `--date` argument, falling back to `today`.
fn reference_date(date: Option<&str>, today: NaiveDate) -> crate::errors::Result<NaiveDate> {
    date.map_or(Ok(today), crate::core::expense::parse_date)
}

/// Executes one command against the tracker.
#[must_use]
pub fn execute(tracker: &mut ExpenseTracker, command: ReplCommand, today: NaiveDate) -> Reply {
    match command {
        ReplCommand::Add {
            amount,
            category,
            date,
            description,
        } => {
            let date = date.unwrap_or_else(|| today.format(DATE_FORMAT).to_string());
            let draft = ExpenseDraft::new(amount, category, description.join(" "), date);
            match tracker.create_expense(&draft) {
                Ok(record) => format!(
                    "✅ Added {} for {} on {} (Expense ID: {})",
                    report::format_currency(record.amount),
                    record.category,
                    report::format_date(record.date),
                    record.id
                )
                .into(),
                Err(e) => failure(e),
            }
        }

        ReplCommand::Edit {
            id,
            amount,
            category,
            date,
            description,
        } => {
            let Some(existing) = tracker.get_expense(id) else {
                return failure(format!(
                    "Expense {id} not found. Use `list` to see your expenses."
                ));
            };

            let mut draft = ExpenseDraft::from(existing);
            if let Some(amount) = amount {
                draft.amount = amount;
            }
            if let Some(category) = category {
                draft.category = category;
            }
            if let Some(date) = date {
                draft.date = date;
            }
            if let Some(description) = description {
                draft.description = description.join(" ");
            }

            match tracker.update_expense(id, &draft) {
                Ok(record) => format!(
                    "✅ Updated expense {}: {} | {} | {} | {}",
                    record.id,
                    report::format_date(record.date),
                    record.category,
                    record.description,
                    report::format_currency(record.amount)
                )
                .into(),
                Err(e) => failure(e),
            }
        }

        ReplCommand::Delete { id } => {
            if tracker.delete_expense(id) {
                format!("✅ Deleted expense {id}").into()
            } else {
                format!("Nothing to delete: expense {id} does not exist").into()
            }
        }

        ReplCommand::List { category, search } => {
            let filtered = category.is_some() || search.is_some();
            let records = tracker.filter_expenses(category.as_deref(), search.as_deref());
            render::expense_table(&report::sort_for_display(records), filtered).into()
        }

        ReplCommand::Summary { date } => match reference_date(date.as_deref(), today) {
            Ok(reference) => render::summary(&tracker.summary_stats(reference)).into(),
            Err(e) => failure(e),
        },

        ReplCommand::Breakdown => render::breakdown(&tracker.category_breakdown()).into(),

        ReplCommand::Daily { date } => match reference_date(date.as_deref(), today) {
            Ok(reference) => render::daily(&tracker.daily_series(reference)).into(),
            Err(e) => failure(e),
        },

        ReplCommand::Insights { date } => match reference_date(date.as_deref(), today) {
            Ok(reference) => render::insights(&tracker.insights(reference)).into(),
            Err(e) => failure(e),
        },

        ReplCommand::Categories => render::categories(tracker.categories()).into(),

        ReplCommand::Quit => Reply::Quit,
    }
}
