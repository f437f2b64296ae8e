//! Category filtering and text search over a tool collection
//!
//! Pure functions: they borrow the collection, return a new vector of
//! references in the original order, and never modify anything.

use crate::domain::{CategoryFilter, Tool};

/// Tools in `filter`'s category, in collection order
///
/// [`CategoryFilter::All`] returns every tool.
pub fn filter_by_category(tools: &[Tool], filter: CategoryFilter) -> Vec<&Tool> {
    tools.iter().filter(|t| filter.matches(t.category)).collect()
}

/// Category filter, then a case-insensitive substring match on name or description
///
/// A blank query returns the category result unchanged. A tool without a
/// description can still match on its name.
pub fn search<'a>(tools: &'a [Tool], query: &str, filter: CategoryFilter) -> Vec<&'a Tool> {
    let in_category = filter_by_category(tools, filter);

    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return in_category;
    }

    in_category
        .into_iter()
        .filter(|t| {
            t.name.to_lowercase().contains(&needle)
                || t
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Tool count for every filter value, `all` first
pub fn category_counts(tools: &[Tool]) -> Vec<(CategoryFilter, usize)> {
    CategoryFilter::ALL_FILTERS
        .iter()
        .map(|filter| (*filter, tools.iter().filter(|t| filter.matches(t.category)).count()))
        .collect()
}
