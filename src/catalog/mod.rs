use crate::api::traits::PropertySource;
use crate::filter::{evaluate, FilterCriteria, FilterPatch};
use crate::models::Property;
use tracing::{debug, error, info};

/// View-local listing state: the property list fetched once from the
/// backend, the current filter criteria and search text, and the cached
/// filtered result.
///
/// Every criteria or search change re-runs the evaluator synchronously
/// over the full in-memory list. The list itself is read-only between
/// loads; call [`ListingCatalog::load`] again after an admin write.
pub struct ListingCatalog {
    properties: Vec<Property>,
    criteria: FilterCriteria,
    search: String,
    filtered: Vec<Property>,
}

impl ListingCatalog {
    pub fn new() -> Self {
        Self {
            properties: Vec::new(),
            criteria: FilterCriteria::default(),
            search: String::new(),
            filtered: Vec::new(),
        }
    }

    /// Fetch the full property list from the source. On failure the
    /// error is logged and the catalog falls back to an empty list;
    /// there is no automatic retry.
    pub async fn load(&mut self, source: &dyn PropertySource) {
        match source.fetch_all().await {
            Ok(list) => {
                info!("Fetched {} properties from {}", list.len(), source.source_name());
                self.properties = list;
            }
            Err(e) => {
                error!(
                    "Failed to fetch properties from {}: {:#}",
                    source.source_name(),
                    e
                );
                self.properties.clear();
            }
        }
        self.refilter();
    }

    /// Merge a partial criteria update and re-run the evaluator.
    pub fn update(&mut self, patch: FilterPatch) {
        self.criteria = self.criteria.with(patch);
        self.refilter();
    }

    /// Replace the criteria wholesale and re-run the evaluator.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.refilter();
    }

    /// Restore default criteria and clear the search text.
    pub fn reset(&mut self) {
        self.criteria = FilterCriteria::default();
        self.search.clear();
        self.refilter();
    }

    /// Replace the free-text search query and re-run the evaluator.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
        self.refilter();
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// The current matching subset, in original list order.
    pub fn results(&self) -> &[Property] {
        &self.filtered
    }

    /// Size of the unfiltered list.
    pub fn total(&self) -> usize {
        self.properties.len()
    }

    fn refilter(&mut self) {
        self.filtered = evaluate(&self.properties, &self.criteria, &self.search);
        debug!(
            "{} of {} properties match the current filters",
            self.filtered.len(),
            self.properties.len()
        );
    }
}

impl Default for ListingCatalog {
    fn default() -> Self {
        Self::new()
    }
}
