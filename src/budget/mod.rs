use log::debug;

use crate::ledger::CategoryTotals;
use crate::models::Record;

/// Outcome of checking one budget row against current spending.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum BudgetReport {
    Over {
        category: String,
        spent: f64,
        limit: f64,
    },
    Within {
        category: String,
        spent: f64,
        limit: f64,
        /// `limit - spent`, rounded to cents.
        remaining: f64,
    },
}

impl BudgetReport {
    pub(crate) fn category(&self) -> &str {
        match self {
            Self::Over { category, .. } | Self::Within { category, .. } => category,
        }
    }

    pub(crate) fn is_over(&self) -> bool {
        matches!(self, Self::Over { .. })
    }

    /// How far spending exceeds the limit; zero when within budget.
    pub(crate) fn overage(&self) -> f64 {
        match self {
            Self::Over { spent, limit, .. } => spent - limit,
            Self::Within { .. } => 0.0,
        }
    }
}

impl std::fmt::Display for BudgetReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Over {
                category,
                spent,
                limit,
            } => write!(
                f,
                "⚠️ Over budget in {category}! Spent: {spent:.2}, Limit: {limit:.2} (over by {:.2})",
                self.overage()
            ),
            Self::Within {
                category,
                remaining,
                ..
            } => write!(f, "{category}: Remaining budget = {remaining:.2}"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct BudgetEvaluation {
    /// One report per usable budget row, in budget-log order.
    pub(crate) reports: Vec<BudgetReport>,
    /// Budget rows with the wrong field count or an unparsable limit.
    pub(crate) skipped: usize,
}

/// Compare spending against each budget row.
///
/// Rows are evaluated independently in log order; a category listed twice
/// is reported twice.
pub(crate) fn evaluate(totals: &CategoryTotals, budgets: &[Record]) -> BudgetEvaluation {
    let mut evaluation = BudgetEvaluation::default();

    for record in budgets {
        let Some((category, limit)) = record.budget_limit() else {
            evaluation.skipped += 1;
            continue;
        };
        let spent = totals.get_by_name(category);
        let category = category.to_string();
        let report = if spent > limit {
            BudgetReport::Over {
                category,
                spent,
                limit,
            }
        } else {
            BudgetReport::Within {
                category,
                spent,
                limit,
                remaining: round_cents(limit - spent),
            }
        };
        if report.is_over() {
            debug!("{} is over its limit by {:.2}", report.category(), report.overage());
        }
        evaluation.reports.push(report);
    }

    if evaluation.skipped > 0 {
        debug!("Skipped {} malformed budget rows", evaluation.skipped);
    }
    evaluation
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
