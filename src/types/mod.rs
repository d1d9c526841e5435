//! Types shared across the search-bar orchestration core.

mod resource;
mod results;
mod suggestion;

pub use resource::{
    DashboardResource, DataProviderResource, FeatureResource, FileResource, Resource,
    ResourceType, TableResource, UserResource,
};
pub use results::{SearchResultSlice, SearchResults};
pub use suggestion::{SuggestedResult, SuggestionSection};
