use anyhow::Result;
use std::io::{self, BufRead, Write};

use crate::config::Config;
use crate::ledger::{self, CategoryTotals};
use crate::models::{self, Category, Expense};
use crate::{budget, search, store, ui};

/// Draws the totals somewhere; the terminal chart in production.
pub(crate) type ChartFn = fn(&CategoryTotals) -> Result<()>;

type Handler<R, W> = fn(&mut Shell<R, W>) -> Result<Flow>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuCommand {
    AddExpense,
    ViewExpenses,
    BarChart,
    SearchExpenses,
    BudgetAlerts,
    Exit,
}

impl MenuCommand {
    pub(crate) fn all() -> &'static [MenuCommand] {
        &[
            Self::AddExpense,
            Self::ViewExpenses,
            Self::BarChart,
            Self::SearchExpenses,
            Self::BudgetAlerts,
            Self::Exit,
        ]
    }

    pub(crate) fn key(&self) -> &'static str {
        match self {
            Self::AddExpense => "1",
            Self::ViewExpenses => "2",
            Self::BarChart => "3",
            Self::SearchExpenses => "4",
            Self::BudgetAlerts => "5",
            Self::Exit => "6",
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::AddExpense => "Add Expense",
            Self::ViewExpenses => "View Expenses",
            Self::BarChart => "Bar Chart",
            Self::SearchExpenses => "Search Expenses",
            Self::BudgetAlerts => "Budget Alerts",
            Self::Exit => "Exit",
        }
    }

    pub(crate) fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.key() == key)
    }

    fn handler<R: BufRead, W: Write>(&self) -> Handler<R, W> {
        match self {
            Self::AddExpense => add_expense,
            Self::ViewExpenses => view_expenses,
            Self::BarChart => bar_chart,
            Self::SearchExpenses => search_expenses,
            Self::BudgetAlerts => budget_alerts,
            Self::Exit => exit,
        }
    }
}

/// Line-based interactive menu over any input and output stream.
pub(crate) struct Shell<R, W> {
    config: Config,
    input: R,
    output: W,
    chart: ChartFn,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub(crate) fn new(config: Config, input: R, output: W, chart: ChartFn) -> Self {
        Self {
            config,
            input,
            output,
            chart,
        }
    }

    #[cfg(test)]
    pub(crate) fn output(&self) -> &W {
        &self.output
    }

    /// Show the menu until the user exits or input runs out.
    pub(crate) fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                return Ok(());
            };
            match MenuCommand::from_key(choice.trim()) {
                Some(command) => {
                    let handler: Handler<R, W> = command.handler();
                    if handler(self)? == Flow::Exit {
                        return Ok(());
                    }
                }
                None => writeln!(self.output, "❌ Invalid selection. Try again.")?,
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== Expense Tracker Menu ===")?;
        for command in MenuCommand::all() {
            writeln!(self.output, "{}. {}", command.key(), command.label())?;
        }
        Ok(())
    }

    /// Print `label` and read one line. `None` once input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompt until `parse` accepts the answer.
    fn prompt_valid<T>(
        &mut self,
        label: &str,
        parse: fn(&str) -> Result<T>,
    ) -> Result<Option<T>> {
        loop {
            let Some(answer) = self.prompt(label)? else {
                return Ok(None);
            };
            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => writeln!(self.output, "{e:#}. Try again.")?,
            }
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────

fn add_expense<R: BufRead, W: Write>(shell: &mut Shell<R, W>) -> Result<Flow> {
    let Some(date) = shell.prompt_valid("Date (YYYY-MM-DD): ", models::parse_date)? else {
        return Ok(Flow::Exit);
    };
    let Some(amount) = shell.prompt_valid("Amount: ", models::parse_amount)? else {
        return Ok(Flow::Exit);
    };
    let category_label = format!("Category [{}]: ", Category::names());
    let Some(category) = shell.prompt_valid(&category_label, models::parse_category)? else {
        return Ok(Flow::Exit);
    };
    let Some(description) = shell.prompt_valid("Description: ", models::parse_description)?
    else {
        return Ok(Flow::Exit);
    };

    let expense = Expense::new(date, amount, category, description)?;
    store::append_expense(&shell.config.expenses_path, &expense)?;
    writeln!(shell.output, "✅ Expense added successfully.")?;
    Ok(Flow::Continue)
}

fn view_expenses<R: BufRead, W: Write>(shell: &mut Shell<R, W>) -> Result<Flow> {
    let Some(choice) = shell.prompt("View (all/categorized): ")? else {
        return Ok(Flow::Exit);
    };
    let records = store::load(&shell.config.expenses_path)?;
    if choice.trim().eq_ignore_ascii_case("all") {
        super::print_all(&mut shell.output, &records)?;
    } else {
        super::print_grouped(&mut shell.output, &ledger::group_by_category(&records))?;
    }
    Ok(Flow::Continue)
}

fn bar_chart<R: BufRead, W: Write>(shell: &mut Shell<R, W>) -> Result<Flow> {
    let totals = ledger::totals(&store::load(&shell.config.expenses_path)?);
    (shell.chart)(&totals)?;
    Ok(Flow::Continue)
}

fn search_expenses<R: BufRead, W: Write>(shell: &mut Shell<R, W>) -> Result<Flow> {
    let Some(keyword) = shell.prompt("Search keyword: ")? else {
        return Ok(Flow::Exit);
    };
    let records = store::load(&shell.config.expenses_path)?;
    let results = search::search(&records, &keyword);
    super::print_search(&mut shell.output, &keyword, &results)?;
    Ok(Flow::Continue)
}

fn budget_alerts<R: BufRead, W: Write>(shell: &mut Shell<R, W>) -> Result<Flow> {
    let totals = ledger::totals(&store::load(&shell.config.expenses_path)?);
    let budgets = store::load(&shell.config.budget_path)?;
    let evaluation = budget::evaluate(&totals, &budgets);
    super::print_budget(&mut shell.output, &evaluation)?;
    Ok(Flow::Continue)
}

fn exit<R: BufRead, W: Write>(_shell: &mut Shell<R, W>) -> Result<Flow> {
    Ok(Flow::Exit)
}

/// Run the interactive menu on the terminal.
pub(crate) fn as_menu(config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let mut shell = Shell::new(config.clone(), stdin.lock(), io::stdout(), ui::chart::show);
    shell.run()
}

#[cfg(test)]
#[path = "menu_tests.rs"]
mod tests;
