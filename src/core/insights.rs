//! Spending insights - short statements derived from the summary and breakdown.

use super::{
    report::{format_currency, format_percentage},
    summary::{CategoryBreakdownEntry, SummaryStats},
};

/// Which statement an [`Insight`] makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightKind {
    /// The category with the largest share of all spending
    HighestSpendingCategory,
    /// Average daily spend over the trailing week
    DailyAverage,
    /// Spending so far in the reference month
    MonthlyProgress,
}

impl InsightKind {
    /// Heading shown above the insight text.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::HighestSpendingCategory => "Highest Spending Category",
            Self::DailyAverage => "Daily Average",
            Self::MonthlyProgress => "Monthly Progress",
        }
    }
}

/// A human-readable observation about spending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insight {
    pub kind: InsightKind,
    pub description: String,
}

impl Insight {
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.kind.title()
    }
}

/// Derives up to three insights, always in the order: highest category, daily average,
/// monthly progress. Each one is skipped when its underlying number is empty or zero.
///
/// `breakdown` is expected to be sorted by descending amount, as returned by
/// [`category_breakdown`](super::summary::category_breakdown).
#[must_use]
pub fn derive_insights(stats: &SummaryStats, breakdown: &[CategoryBreakdownEntry]) -> Vec<Insight> {
    let mut insights = Vec::with_capacity(3);

    if let Some(top) = breakdown.first() {
        insights.push(Insight {
            kind: InsightKind::HighestSpendingCategory,
            description: format!(
                "You spent the most on {} with {} ({} of total)",
                top.category,
                format_currency(top.amount),
                format_percentage(top.percentage)
            ),
        });
    }

    if stats.avg_daily > 0.0 {
        insights.push(Insight {
            kind: InsightKind::DailyAverage,
            description: format!(
                "Your average daily spending over the last week is {}",
                format_currency(stats.avg_daily)
            ),
        });
    }

    if stats.total_expenses > 0.0 {
        insights.push(Insight {
            kind: InsightKind::MonthlyProgress,
            description: format!(
                "You've spent {} this month across {} transactions",
                format_currency(stats.total_expenses),
                stats.total_transactions
            ),
        });
    }

    insights
}
