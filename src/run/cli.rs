use anyhow::Result;
use std::io::Write;

use crate::config::Config;
use crate::models::{self, BudgetLimit, Category, Expense};
use crate::{budget, ledger, search, store, ui};

pub(crate) fn as_cli(args: &[String], config: &Config, out: &mut impl Write) -> Result<()> {
    match args[1].as_str() {
        "add" | "a" => cli_add(&args[2..], config, out),
        "list" | "ls" => cli_list(&args[2..], config, out),
        "totals" | "t" => cli_totals(config, out),
        "search" | "s" => cli_search(&args[2..], config, out),
        "budget" | "b" => cli_budget(config, out),
        "set-budget" => cli_set_budget(&args[2..], config, out),
        "chart" => {
            let totals = ledger::totals(&store::load(&config.expenses_path)?);
            ui::chart::show(&totals)
        }
        "--help" | "-h" | "help" => print_usage(out),
        "--version" | "-V" | "version" => {
            writeln!(out, "expense-ledger {}", env!("CARGO_PKG_VERSION"))?;
            Ok(())
        }
        other => {
            print_usage(out)?;
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Expense Ledger — append-only personal expense tracker")?;
    writeln!(out)?;
    writeln!(out, "Usage: expense-ledger [command]")?;
    writeln!(out)?;
    writeln!(out, "Commands:")?;
    writeln!(out, "  (none)                                   Launch the interactive menu")?;
    writeln!(out, "  add <date> <amount> <category> [desc]    Record an expense")?;
    writeln!(out, "  list [--by-category | -c]                List all expenses")?;
    writeln!(out, "    --category <name>                      Only expenses in one category")?;
    writeln!(out, "  totals                                   Print totals per category")?;
    writeln!(out, "  search <keyword>                         Search category and description")?;
    writeln!(out, "  budget                                   Compare spending against budgets")?;
    writeln!(out, "  set-budget <category> <limit>            Add a budget limit")?;
    writeln!(out, "  chart                                    Show a bar chart of totals")?;
    writeln!(out, "  --help, -h                               Show this help")?;
    writeln!(out, "  --version, -V                            Show version")?;
    writeln!(out)?;
    writeln!(out, "Categories: {}", Category::names())?;
    writeln!(
        out,
        "Logs are kept in the platform data directory, or in ${} if set.",
        crate::config::DATA_DIR_VAR
    )?;
    Ok(())
}

fn cli_add(args: &[String], config: &Config, out: &mut impl Write) -> Result<()> {
    if args.len() < 3 {
        anyhow::bail!("Usage: expense-ledger add <YYYY-MM-DD> <amount> <category> [description]");
    }

    let date = models::parse_date(&args[0])?;
    let amount = models::parse_amount(&args[1])?;
    let category = models::parse_category(&args[2])?;
    let description = models::parse_description(&args[3..].join(" "))?;

    let expense = Expense::new(date, amount, category, description)?;
    store::append_expense(&config.expenses_path, &expense)?;
    writeln!(out, "✅ Expense added successfully.")?;
    Ok(())
}

fn cli_list(args: &[String], config: &Config, out: &mut impl Write) -> Result<()> {
    let records = store::load(&config.expenses_path)?;

    let filter = match args.iter().position(|a| a == "--category") {
        Some(i) => match args.get(i + 1) {
            Some(name) => Some(models::parse_category(name)?),
            None => anyhow::bail!("Usage: expense-ledger list --category <name>"),
        },
        None => None,
    };
    if let Some(category) = filter {
        writeln!(out, "\n--- {category} Expenses ---")?;
        let items = ledger::filter_by_category(&records, category);
        if items.is_empty() {
            writeln!(out, "No expenses recorded.")?;
        }
        for record in items {
            writeln!(out, "{record}")?;
        }
        return Ok(());
    }

    if args.iter().any(|a| a == "--by-category" || a == "-c") {
        super::print_grouped(out, &ledger::group_by_category(&records))
    } else {
        super::print_all(out, &records)
    }
}

fn cli_totals(config: &Config, out: &mut impl Write) -> Result<()> {
    let records = store::load(&config.expenses_path)?;
    super::print_totals(out, &ledger::totals(&records))
}

fn cli_search(args: &[String], config: &Config, out: &mut impl Write) -> Result<()> {
    if args.is_empty() {
        anyhow::bail!("Usage: expense-ledger search <keyword>");
    }
    let keyword = args.join(" ");
    let records = store::load(&config.expenses_path)?;
    let results = search::search(&records, &keyword);
    super::print_search(out, &keyword, &results)
}

fn cli_budget(config: &Config, out: &mut impl Write) -> Result<()> {
    let totals = ledger::totals(&store::load(&config.expenses_path)?);
    let budgets = store::load(&config.budget_path)?;
    super::print_budget(out, &budget::evaluate(&totals, &budgets))
}

fn cli_set_budget(args: &[String], config: &Config, out: &mut impl Write) -> Result<()> {
    if args.len() != 2 {
        anyhow::bail!("Usage: expense-ledger set-budget <category> <limit>");
    }

    let limit = models::parse_amount(&args[1])?;
    let name = match Category::parse(&args[0]) {
        Some(category) => category.as_str().to_string(),
        None => {
            writeln!(
                out,
                "Note: '{}' is not one of the categories ({}); it will never show any spending.",
                args[0],
                Category::names()
            )?;
            args[0].clone()
        }
    };

    let budget = BudgetLimit::new(name, limit)?;
    store::append_budget(&config.budget_path, &budget)?;
    writeln!(out, "Budget for {} set to {:.2}", budget.category, budget.limit)?;
    Ok(())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
