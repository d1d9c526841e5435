use super::resource::ResourceType;

/// Render-ready view model for one typeahead suggestion.
///
/// Derived on demand from a [`super::SearchResultSlice`]; never cached
/// beyond a render cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestedResult {
    /// Deep link to the resource's detail page, carrying `source` and
    /// positional `index` logging parameters.
    pub href: String,
    pub icon_class: String,
    pub title: String,
    pub subtitle: String,
    /// Human-readable name of the source system that produced the hit,
    /// rendered as a badge next to the title; `None` for resource types
    /// without a source dimension.
    pub source_name: Option<String>,
    pub resource_type: ResourceType,
}

/// One rendered section of the typeahead panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionSection {
    pub resource_type: ResourceType,
    /// Human-readable section heading, e.g. "Tables" or "People".
    pub label: String,
    /// Backend-reported total, used for the "View all results" footer.
    pub total_results: usize,
    pub suggestions: Vec<SuggestedResult>,
}
