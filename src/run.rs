mod cli;
mod menu;

pub(crate) use cli::as_cli;
pub(crate) use menu::as_menu;

use anyhow::Result;
use std::io::Write;

use crate::budget::BudgetEvaluation;
use crate::ledger::{CategoryGroups, CategoryTotals};
use crate::models::Record;
use crate::search::SearchResults;
use crate::ui::util::format_amount;

// ── Shared report printers ───────────────────────────────────

/// Every line of the log as stored, malformed ones included.
pub(crate) fn print_all(out: &mut impl Write, records: &[Record]) -> Result<()> {
    writeln!(out, "\n--- All Expenses ---")?;
    if records.is_empty() {
        writeln!(out, "No expenses recorded.")?;
    }
    for record in records {
        writeln!(out, "{record}")?;
    }
    Ok(())
}

pub(crate) fn print_grouped(out: &mut impl Write, groups: &CategoryGroups<'_>) -> Result<()> {
    writeln!(out, "\n--- Expenses by Category ---")?;
    if groups.is_empty() {
        writeln!(out, "No expenses recorded.")?;
    }
    for (category, items) in groups.iter() {
        writeln!(out, "\n{category}:")?;
        for item in items {
            writeln!(out, "{item}")?;
        }
    }
    Ok(())
}

pub(crate) fn print_totals(out: &mut impl Write, totals: &CategoryTotals) -> Result<()> {
    writeln!(out, "\n--- Totals by Category ---")?;
    for (category, amount) in totals.iter() {
        writeln!(out, "  {:<16} {:>12}", category.as_str(), format_amount(amount))?;
    }
    writeln!(out, "  {}", "─".repeat(29))?;
    writeln!(
        out,
        "  {:<16} {:>12}",
        "Total",
        format_amount(totals.grand_total())
    )?;
    if totals.skipped > 0 {
        writeln!(out, "  ({} malformed records not counted)", totals.skipped)?;
    }
    Ok(())
}

pub(crate) fn print_search(
    out: &mut impl Write,
    keyword: &str,
    results: &SearchResults<'_>,
) -> Result<()> {
    writeln!(out, "\n--- Search Results for '{}' ---", keyword.to_lowercase())?;
    if results.is_empty() {
        writeln!(out, "No results found.")?;
    }
    for record in &results.matches {
        writeln!(out, "{record}")?;
    }
    Ok(())
}

pub(crate) fn print_budget(out: &mut impl Write, evaluation: &BudgetEvaluation) -> Result<()> {
    writeln!(out, "\n--- Budget Check ---")?;
    if evaluation.reports.is_empty() {
        writeln!(
            out,
            "No budgets set. Add one with: expense-ledger set-budget <category> <limit>"
        )?;
    }
    for report in &evaluation.reports {
        writeln!(out, "{report}")?;
    }
    let over = evaluation.reports.iter().filter(|r| r.is_over()).count();
    if over > 0 {
        writeln!(out, "{over} of {} budgets exceeded.", evaluation.reports.len())?;
    }
    Ok(())
}
