use std::collections::BTreeMap;

use super::resource::{Resource, ResourceType};

/// Results owned by one resource type.
///
/// A slice is only ever replaced wholesale by the dispatcher pump when a
/// response carrying the current query token arrives; the UI layer reads it
/// but never mutates it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResultSlice {
    pub results: Vec<Resource>,
    pub total_results: usize,
    pub is_loading: bool,
}

/// Aggregated inline-search state, one slice per resource type.
#[derive(Debug, Clone, Default)]
pub struct SearchResults {
    slices: BTreeMap<ResourceType, SearchResultSlice>,
}

impl SearchResults {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to one resource type's slice, if any response or request
    /// has touched it since the last clear.
    #[must_use]
    pub fn slice(&self, resource: ResourceType) -> Option<&SearchResultSlice> {
        self.slices.get(&resource)
    }

    /// True while any resource type still has a request outstanding.
    #[must_use]
    pub fn any_loading(&self) -> bool {
        self.slices.values().any(|slice| slice.is_loading)
    }

    /// Mark the given resource types as loading ahead of a fan-out.
    ///
    /// Existing results stay visible until the replacing response lands so
    /// the panel does not flicker between keystrokes.
    pub(crate) fn begin_loading(&mut self, resources: &[ResourceType]) {
        for resource in resources {
            self.slices.entry(*resource).or_default().is_loading = true;
        }
    }

    /// Replace a resource type's slice with a completed response.
    pub(crate) fn apply(
        &mut self,
        resource: ResourceType,
        results: Vec<Resource>,
        total_results: usize,
    ) {
        self.slices.insert(
            resource,
            SearchResultSlice {
                results,
                total_results,
                is_loading: false,
            },
        );
    }

    /// Degrade a resource type to "no results" after a failed request.
    pub(crate) fn fail(&mut self, resource: ResourceType) {
        self.slices.insert(resource, SearchResultSlice::default());
    }

    /// Drop every slice, returning to the pristine pre-search state.
    pub(crate) fn clear(&mut self) {
        self.slices.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::resource::FileResource;

    #[test]
    fn failure_clears_loading_and_results() {
        let mut results = SearchResults::new();
        results.begin_loading(&[ResourceType::File]);
        results.apply(
            ResourceType::File,
            vec![Resource::File(FileResource {
                key: "s3://bucket/report.csv".into(),
                name: "report.csv".into(),
                description: String::new(),
            })],
            1,
        );
        assert!(!results.any_loading());

        results.begin_loading(&[ResourceType::File]);
        results.fail(ResourceType::File);
        let slice = results.slice(ResourceType::File).expect("slice exists");
        assert!(!slice.is_loading);
        assert!(slice.results.is_empty());
        assert_eq!(slice.total_results, 0);
    }

    #[test]
    fn begin_loading_keeps_previous_results_visible() {
        let mut results = SearchResults::new();
        results.apply(
            ResourceType::File,
            vec![Resource::File(FileResource::default())],
            1,
        );
        results.begin_loading(&[ResourceType::File]);
        let slice = results.slice(ResourceType::File).expect("slice exists");
        assert!(slice.is_loading);
        assert_eq!(slice.results.len(), 1);
    }
}
