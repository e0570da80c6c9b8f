use super::Category;

/// Number of fields in a well-formed expense line:
/// `date`, `amount`, `category`, `description`.
pub const EXPENSE_FIELDS: usize = 4;

/// Number of fields in a well-formed budget line: `category`, `limit`.
pub const BUDGET_FIELDS: usize = 2;

/// One line of a log file, split on tabs. Nothing is validated on load, so
/// a `Record` may hold any number of fields with any content; the typed
/// accessors return `None` unless the line has the expected shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The raw line as it would be written back to the log.
    pub fn to_line(&self) -> String {
        self.fields().join("\t")
    }

    fn expense_field(&self, idx: usize) -> Option<&str> {
        if self.fields.len() == EXPENSE_FIELDS {
            self.fields.get(idx).map(String::as_str)
        } else {
            None
        }
    }

    pub fn amount_text(&self) -> Option<&str> {
        self.expense_field(1)
    }

    /// The parsed amount, or `None` if the line is malformed or the amount
    /// is not a finite number.
    pub fn amount(&self) -> Option<f64> {
        self.amount_text().and_then(parse_number)
    }

    pub fn category_name(&self) -> Option<&str> {
        self.expense_field(2)
    }

    /// The category, if the field names one of the fixed categories exactly.
    pub fn category(&self) -> Option<Category> {
        self.category_name().and_then(Category::from_name)
    }

    pub fn description(&self) -> Option<&str> {
        self.expense_field(3)
    }

    /// Category and limit of a budget line.
    pub fn budget_limit(&self) -> Option<(&str, f64)> {
        if self.fields.len() != BUDGET_FIELDS {
            return None;
        }
        let limit = parse_number(&self.fields[1])?;
        Some((self.fields[0].as_str(), limit))
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_line())
    }
}

/// Parse a stored number. Surrounding whitespace is ignored; infinities and
/// NaN are rejected.
pub fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
