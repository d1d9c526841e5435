//! Boundary to the backend search service.
//!
//! The core treats the REST layer as a black box: one synchronous call per
//! resource type, invoked from the background worker so the UI thread never
//! blocks on the network.

use anyhow::Result;

use crate::types::{Resource, ResourceType};

/// A completed per-resource-type search response.
#[derive(Debug, Clone, Default)]
pub struct ResourceResponse {
    pub results: Vec<Resource>,
    /// Backend-reported total match count, which may exceed `results.len()`.
    pub total_results: usize,
}

/// Client used by the inline-search worker to fan a term out across
/// resource types. Implementations wrap the portal's search API.
pub trait InlineSearchClient: Send + Sync {
    /// Search one resource type for `term`.
    ///
    /// # Errors
    ///
    /// Any transport or decoding failure; the worker degrades that resource
    /// type to "no results" without affecting the others.
    fn search(&self, resource: ResourceType, term: &str) -> Result<ResourceResponse>;
}
