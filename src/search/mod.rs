use log::debug;

use crate::models::Record;

#[derive(Debug, Clone, Default)]
pub(crate) struct SearchResults<'a> {
    pub(crate) matches: Vec<&'a Record>,
    /// Records without the four expense fields, which cannot be searched.
    pub(crate) skipped: usize,
}

impl SearchResults<'_> {
    pub(crate) fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Case-insensitive substring search over the category and description
/// fields. A record matches if either field contains the keyword.
pub(crate) fn search<'a>(records: &'a [Record], keyword: &str) -> SearchResults<'a> {
    let needle = keyword.to_lowercase();
    let mut results = SearchResults::default();

    for record in records {
        let (Some(category), Some(description)) = (record.category_name(), record.description())
        else {
            results.skipped += 1;
            continue;
        };
        if category.to_lowercase().contains(&needle)
            || description.to_lowercase().contains(&needle)
        {
            results.matches.push(record);
        }
    }

    debug!(
        "Search for '{needle}': {} matches, {} records skipped",
        results.matches.len(),
        results.skipped
    );
    results
}
