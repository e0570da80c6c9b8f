mod budget;
mod category;
mod expense;
mod record;

pub use budget::BudgetLimit;
pub use category::Category;
pub use expense::{parse_amount, parse_category, parse_date, parse_description, Expense};
pub use record::Record;
