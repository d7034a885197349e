/// Portfolio search
///
/// Case-insensitive substring filter over the catalog. The filtered view
/// always preserves catalog order and is memoized on the last query.

use std::sync::Arc;

use super::data::PortfolioEntry;

/// True when `query` occurs in the entry's search text, ignoring case.
///
/// The query is used as typed: no trimming, only lower-casing.
pub fn matches(entry: &PortfolioEntry, query: &str) -> bool {
    entry
        .search_text()
        .to_lowercase()
        .contains(&query.to_lowercase())
}

/// Indices of the entries matching `query`, in catalog order
pub fn filter_indices(entries: &[PortfolioEntry], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..entries.len()).collect();
    }
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| matches(entry, query))
        .map(|(index, _)| index)
        .collect()
}

/// Search box state of the portfolio list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Idle,
    Filtering,
}

/// One cell of the portfolio grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridItem<'a> {
    Card(&'a PortfolioEntry),
    /// Shown alone when nothing matches
    NoResults,
}

/// Search query plus the memoized result for it
#[derive(Debug, Clone)]
pub struct FilteredView {
    entries: Arc<[PortfolioEntry]>,
    query: String,
    indices: Vec<usize>,
    recomputations: usize,
}

impl FilteredView {
    pub fn new(entries: Arc<[PortfolioEntry]>) -> Self {
        let indices = filter_indices(&entries, "");
        Self {
            entries,
            query: String::new(),
            indices,
            recomputations: 1,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn mode(&self) -> SearchMode {
        if self.query.is_empty() {
            SearchMode::Idle
        } else {
            SearchMode::Filtering
        }
    }

    /// Update the query; recomputes only when it actually changed
    pub fn set_query(&mut self, query: String) {
        if query == self.query {
            return;
        }
        let before = self.mode();
        self.query = query;
        if self.mode() != before {
            tracing::debug!(mode = ?self.mode(), "portfolio search mode changed");
        }
        self.recompute();
    }

    /// Swap in a new catalog, keeping the current query
    pub fn set_entries(&mut self, entries: Arc<[PortfolioEntry]>) {
        if Arc::ptr_eq(&entries, &self.entries) {
            return;
        }
        self.entries = entries;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.indices = filter_indices(&self.entries, &self.query);
        self.recomputations += 1;
        tracing::trace!(
            query = %self.query,
            matched = self.indices.len(),
            total = self.entries.len(),
            recomputations = self.recomputations,
            "portfolio filter recomputed"
        );
    }

    /// Matching entries in catalog order
    pub fn results(&self) -> impl Iterator<Item = &PortfolioEntry> + '_ {
        self.indices.iter().map(move |&index| &self.entries[index])
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Grid cells to render: the cards, or a single placeholder
    pub fn grid_items(&self) -> Vec<GridItem<'_>> {
        if self.is_empty() {
            return vec![GridItem::NoResults];
        }
        self.results().map(GridItem::Card).collect()
    }

    #[cfg(test)]
    fn recomputations(&self) -> usize {
        self.recomputations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, tags: &[&str], year: &str, description: &str) -> PortfolioEntry {
        PortfolioEntry {
            title: title.into(),
            year: year.into(),
            description: description.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            image: format!("{}.png", title.to_lowercase()),
            url: None,
            url_missing_reason: None,
        }
    }

    fn alpha_beta() -> Arc<[PortfolioEntry]> {
        vec![
            entry("Alpha", &["web"], "2020", "x"),
            entry("Beta", &["cli"], "2021", "y"),
        ]
        .into()
    }

    fn titles(view: &FilteredView) -> Vec<&str> {
        view.results().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn test_alpha_beta_scenario() {
        let mut view = FilteredView::new(alpha_beta());

        view.set_query("alp".into());
        assert_eq!(titles(&view), ["Alpha"]);

        view.set_query("20".into());
        assert_eq!(titles(&view), ["Alpha", "Beta"]);

        view.set_query("zzz".into());
        assert!(view.is_empty());
        assert_eq!(view.grid_items(), vec![GridItem::NoResults]);
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let view = FilteredView::new(alpha_beta());
        assert_eq!(view.mode(), SearchMode::Idle);
        assert_eq!(titles(&view), ["Alpha", "Beta"]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let mut view = FilteredView::new(alpha_beta());
        view.set_query("BETA".into());
        assert_eq!(view.mode(), SearchMode::Filtering);
        assert_eq!(titles(&view), ["Beta"]);
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let entries = alpha_beta();
        assert!(!matches(&entries[0], " alpha"));
        assert!(matches(&entries[0], "alpha"));
    }

    #[test]
    fn test_fields_are_joined_without_separator() {
        let entries = alpha_beta();
        // title "Alpha" runs straight into tag "web"
        assert!(matches(&entries[0], "alphaweb"));
        assert!(matches(&entries[0], "web2020x"));
        assert!(!matches(&entries[0], "alpha web"));
    }

    #[test]
    fn test_tags_are_space_joined() {
        let entries = [entry("Gamma", &["rust", "wasm"], "2022", "z")];
        assert!(matches(&entries[0], "rust wasm"));
        assert!(!matches(&entries[0], "rustwasm"));
    }

    #[test]
    fn test_results_are_subsequence_of_catalog() {
        let entries: Arc<[PortfolioEntry]> = vec![
            entry("One", &["web"], "2019", "site"),
            entry("Two", &["cli"], "2020", "tool"),
            entry("Three", &["web"], "2021", "app"),
            entry("Four", &["game"], "2022", "web game"),
        ]
        .into();
        for query in ["", "web", "20", "o", "T", "zzz"] {
            let indices = filter_indices(&entries, query);
            assert!(indices.windows(2).all(|w| w[0] < w[1]), "query {query:?}");
            for (index, e) in entries.iter().enumerate() {
                assert_eq!(indices.contains(&index), matches(e, query), "query {query:?}");
            }
        }
    }

    #[test]
    fn test_grid_items_list_cards() {
        let view = FilteredView::new(alpha_beta());
        let items = view.grid_items();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|item| matches!(item, GridItem::Card(_))));
    }

    #[test]
    fn test_same_query_does_not_recompute() {
        let mut view = FilteredView::new(alpha_beta());
        view.set_query("a".into());
        let count = view.recomputations();
        view.set_query("a".into());
        assert_eq!(view.recomputations(), count);
        view.set_query("al".into());
        assert_eq!(view.recomputations(), count + 1);
    }

    #[test]
    fn test_new_catalog_keeps_query() {
        let mut view = FilteredView::new(alpha_beta());
        view.set_query("cli".into());
        view.set_entries(vec![entry("Delta", &["cli"], "2023", "w")].into());
        assert_eq!(view.query(), "cli");
        assert_eq!(titles(&view), ["Delta"]);
    }
}
