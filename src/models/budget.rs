use anyhow::Result;

/// One row of the budget log: a spending limit for a category name.
///
/// The category is free text; rows naming an unknown category are still
/// evaluated, against a spend of zero.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetLimit {
    pub category: String,
    pub limit: f64,
}

impl BudgetLimit {
    pub fn new(category: String, limit: f64) -> Result<Self> {
        let category = category.trim().to_string();
        if category.is_empty() {
            anyhow::bail!("Budget category cannot be empty");
        }
        if category.contains(['\t', '\n', '\r']) {
            anyhow::bail!("Budget category cannot contain tabs or line breaks");
        }
        if !limit.is_finite() {
            anyhow::bail!("Budget limit must be a finite number");
        }
        Ok(Self { category, limit })
    }

    pub fn to_fields(&self) -> [String; 2] {
        [self.category.clone(), self.limit.to_string()]
    }
}
