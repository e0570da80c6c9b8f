use log::debug;
use std::collections::BTreeMap;

use crate::models::{Category, Record};

/// Per-category spending, always holding every fixed category.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CategoryTotals {
    amounts: BTreeMap<Category, f64>,
    /// Records that contributed nothing: wrong field count, unparsable
    /// amount, or a category outside the fixed set.
    pub(crate) skipped: usize,
}

impl CategoryTotals {
    pub(crate) fn zeroed() -> Self {
        Self {
            amounts: Category::all().iter().map(|c| (*c, 0.0)).collect(),
            skipped: 0,
        }
    }

    pub(crate) fn get(&self, category: Category) -> f64 {
        self.amounts.get(&category).copied().unwrap_or(0.0)
    }

    /// Total for a category given by name. Names outside the fixed set
    /// have spent nothing.
    pub(crate) fn get_by_name(&self, name: &str) -> f64 {
        Category::from_name(name).map_or(0.0, |c| self.get(c))
    }

    /// Categories and totals in fixed category order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.amounts.iter().map(|(c, v)| (*c, *v))
    }

    pub(crate) fn grand_total(&self) -> f64 {
        self.amounts.values().sum()
    }

    pub(crate) fn max(&self) -> f64 {
        self.amounts.values().copied().fold(0.0, f64::max)
    }

    fn add(&mut self, category: Category, amount: f64) {
        *self.amounts.entry(category).or_insert(0.0) += amount;
    }

    #[cfg(test)]
    pub(crate) fn from_pairs(pairs: &[(Category, f64)]) -> Self {
        let mut totals = Self::zeroed();
        for (category, amount) in pairs {
            totals.add(*category, *amount);
        }
        totals
    }
}

/// Sum every well-formed record into its category.
///
/// Bad records are skipped, never fatal; the count is kept on the result.
pub(crate) fn totals(records: &[Record]) -> CategoryTotals {
    let mut totals = CategoryTotals::zeroed();
    for record in records {
        match (record.category(), record.amount()) {
            (Some(category), Some(amount)) => totals.add(category, amount),
            _ => totals.skipped += 1,
        }
    }
    if totals.skipped > 0 {
        debug!("Skipped {} malformed records while totalling", totals.skipped);
    }
    totals
}

/// Records bucketed by category, insertion order kept within each bucket.
#[derive(Debug, Clone, Default)]
pub(crate) struct CategoryGroups<'a> {
    buckets: BTreeMap<Category, Vec<&'a Record>>,
    pub(crate) skipped: usize,
}

impl<'a> CategoryGroups<'a> {
    /// Non-empty buckets in fixed category order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (Category, &[&'a Record])> + '_ {
        self.buckets
            .iter()
            .filter(|(_, items)| !items.is_empty())
            .map(|(c, items)| (*c, items.as_slice()))
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.buckets.values().all(|items| items.is_empty())
    }
}

/// Group records by category. Only the category field has to be valid; a
/// record with an unparsable amount still lands in its bucket.
pub(crate) fn group_by_category(records: &[Record]) -> CategoryGroups<'_> {
    let mut groups = CategoryGroups::default();
    for record in records {
        match record.category() {
            Some(category) => groups.buckets.entry(category).or_default().push(record),
            None => groups.skipped += 1,
        }
    }
    if groups.skipped > 0 {
        debug!("Skipped {} records while grouping", groups.skipped);
    }
    groups
}

/// Records belonging to one category, in insertion order.
pub(crate) fn filter_by_category(records: &[Record], category: Category) -> Vec<&Record> {
    records
        .iter()
        .filter(|r| r.category() == Some(category))
        .collect()
}

#[cfg(test)]
mod tests;
