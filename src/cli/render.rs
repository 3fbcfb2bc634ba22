//! Text rendering of tracker results for the terminal.

use crate::config::CategorySet;
use crate::core::{
    CategoryBreakdownEntry, DailyPoint, ExpenseRecord, Insight, SummaryStats,
    report::{format_currency, format_date, format_percentage},
};

const BAR_LENGTH: usize = 20;

/// Renders expenses as a table, or an empty-state hint.
///
/// `filtered` selects which hint is shown when there is nothing to list.
#[must_use]
pub fn expense_table(records: &[&ExpenseRecord], filtered: bool) -> String {
    if records.is_empty() {
        return if filtered {
            "No expenses found. Try adjusting your search or filters.".to_string()
        } else {
            "No expenses added yet. Use `add <amount> <category> [description]` to begin tracking your spending.".to_string()
        };
    }

    let header = format!(
        "{:>4}  {:<13}  {:<15}  {:<30}  {:>12}",
        "ID", "Date", "Category", "Description", "Amount"
    );
    let rows = records.iter().map(|record| {
        format!(
            "{:>4}  {:<13}  {:<15}  {:<30}  {:>12}",
            record.id,
            format_date(record.date),
            record.category,
            record.description,
            format_currency(record.amount)
        )
    });

    std::iter::once(header)
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}

#[must_use]
pub fn summary(stats: &SummaryStats) -> String {
    format!(
        "Total this month:   {}\nTransactions:       {}\nAverage daily:      {}\nTop category:       {}",
        format_currency(stats.total_expenses),
        stats.total_transactions,
        format_currency(stats.avg_daily),
        stats.top_category_label()
    )
}

#[must_use]
pub fn breakdown(entries: &[CategoryBreakdownEntry]) -> String {
    if entries.is_empty() {
        return "No category data available yet. Add expenses to see your category breakdown."
            .to_string();
    }

    entries
        .iter()
        .map(|entry| {
            format!(
                "{:<15}  {}  {:>12}  {:>6}",
                entry.category,
                entry.color,
                format_currency(entry.amount),
                format_percentage(entry.percentage)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Creates a text bar like `████░░░░` proportional to `amount / max`.
fn bar(amount: f64, max: f64) -> String {
    let ratio = if max > 0.0 { (amount / max).clamp(0.0, 1.0) } else { 0.0 };

    // ratio ∈ [0, 1] and BAR_LENGTH is small, so the cast cannot truncate meaningfully
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = (ratio * BAR_LENGTH as f64).round() as usize;

    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_LENGTH - filled))
}

#[must_use]
pub fn daily(points: &[DailyPoint]) -> String {
    let max = points.iter().map(|p| p.amount).fold(0.0, f64::max);
    if max <= 0.0 {
        return "No spending in the last 7 days.".to_string();
    }

    points
        .iter()
        .map(|point| {
            format!(
                "{} {}  {}  {:>12}",
                point.label,
                point.date.format("%m-%d"),
                bar(point.amount, max),
                format_currency(point.amount)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[must_use]
pub fn insights(insights: &[Insight]) -> String {
    if insights.is_empty() {
        return "Start tracking your expenses to see insights here.".to_string();
    }

    insights
        .iter()
        .map(|insight| format!("{}\n  {}", insight.title(), insight.description))
        .collect::<Vec<_>>()
        .join("\n")
}

#[must_use]
pub fn categories(categories: &CategorySet) -> String {
    categories
        .as_slice()
        .iter()
        .map(|c| format!("{}  {}", c.color, c.name))
        .collect::<Vec<_>>()
        .join("\n")
}
