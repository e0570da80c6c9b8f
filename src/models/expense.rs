use anyhow::{Context, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

use super::record::parse_number;
use super::Category;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[allow(clippy::unwrap_used)]
fn date_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap())
}

/// A new, validated expense ready to be appended to the log.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub date: NaiveDate,
    pub amount: f64,
    pub category: Category,
    pub description: String,
}

impl Expense {
    pub fn new(
        date: NaiveDate,
        amount: f64,
        category: Category,
        description: String,
    ) -> Result<Self> {
        Ok(Self {
            date,
            amount: validate_amount(amount)?,
            category,
            description: parse_description(&description)?,
        })
    }

    pub fn to_fields(&self) -> [String; 4] {
        [
            self.date.format(DATE_FORMAT).to_string(),
            self.amount.to_string(),
            self.category.as_str().to_string(),
            self.description.clone(),
        ]
    }
}

/// Parse a strict `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    if !date_shape().is_match(s) {
        anyhow::bail!("Invalid date format: '{s}' (expected YYYY-MM-DD)");
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).with_context(|| format!("Invalid date: '{s}'"))
}

pub fn parse_amount(s: &str) -> Result<f64> {
    let amount =
        parse_number(s).ok_or_else(|| anyhow::anyhow!("Invalid number: '{}'", s.trim()))?;
    validate_amount(amount)
}

fn validate_amount(amount: f64) -> Result<f64> {
    if !amount.is_finite() {
        anyhow::bail!("Amount must be a finite number");
    }
    if amount < 0.0 {
        anyhow::bail!("Amount cannot be negative: {amount}");
    }
    Ok(amount)
}

pub fn parse_category(s: &str) -> Result<Category> {
    Category::parse(s).ok_or_else(|| {
        anyhow::anyhow!(
            "Invalid category: '{}' (expected one of {})",
            s.trim(),
            Category::names()
        )
    })
}

/// Descriptions are stored verbatim between tabs, so they may not contain
/// the field or line separators.
pub fn parse_description(s: &str) -> Result<String> {
    let s = s.trim_end_matches(['\r', '\n']);
    if s.contains(['\t', '\n', '\r']) {
        anyhow::bail!("Description cannot contain tabs or line breaks");
    }
    Ok(s.to_string())
}
