//! Derivation of render-ready suggestions from raw result slices.
//!
//! All resource-type-specific knowledge lives in two closed tables here: a
//! metadata table (section label, default icon) and a projection that maps
//! one search hit to its title, subtitle, deep-link route, and source
//! identifier. Every other part of the core is resource-type agnostic.

use crate::settings::{DisplaySettings, SearchSettings};
use crate::types::{
    Resource, ResourceType, SearchResultSlice, SearchResults, SuggestedResult, SuggestionSection,
};

/// `source` query parameter stamped on suggestion deep links for logging.
pub const INLINE_SEARCH_SOURCE: &str = "inline_search";

struct ResourceMeta {
    label: &'static str,
    default_icon: &'static str,
}

fn meta(resource: ResourceType) -> ResourceMeta {
    match resource {
        ResourceType::Table => ResourceMeta {
            label: "Tables",
            default_icon: "icon-table",
        },
        ResourceType::User => ResourceMeta {
            label: "People",
            default_icon: "icon-users",
        },
        ResourceType::Dashboard => ResourceMeta {
            label: "Dashboards",
            default_icon: "icon-dashboard",
        },
        ResourceType::Feature => ResourceMeta {
            label: "ML Features",
            default_icon: "icon-feature",
        },
        ResourceType::File => ResourceMeta {
            label: "Files",
            default_icon: "icon-file",
        },
        ResourceType::DataProvider => ResourceMeta {
            label: "Data Providers",
            default_icon: "icon-database",
        },
    }
}

/// Pure field projection of one search hit.
struct Parts<'a> {
    title: String,
    subtitle: String,
    route: String,
    /// Source system identifier used for icon and display-name lookups.
    source: Option<&'a str>,
}

fn project(resource: &Resource) -> Parts<'_> {
    match resource {
        Resource::Table(table) => Parts {
            title: format!("{}.{}", table.schema, table.name),
            subtitle: table.description.clone(),
            route: format!(
                "/table_detail/{}/{}/{}/{}",
                table.cluster, table.database, table.schema, table.name
            ),
            source: Some(&table.database),
        },
        Resource::User(user) => Parts {
            title: user.display_name.clone(),
            subtitle: user.team_name.clone(),
            route: format!("/user/{}", user.user_id),
            source: None,
        },
        Resource::Dashboard(dashboard) => Parts {
            title: dashboard.name.clone(),
            subtitle: dashboard.group_name.clone(),
            route: format!("/dashboard/{}", dashboard.uri),
            source: Some(&dashboard.product),
        },
        Resource::Feature(feature) => Parts {
            title: format!("{}.{}", feature.feature_group, feature.name),
            subtitle: feature.description.clone(),
            route: format!(
                "/feature/{}/{}/{}",
                feature.feature_group, feature.name, feature.version
            ),
            source: None,
        },
        Resource::File(file) => Parts {
            title: file.name.clone(),
            subtitle: file.description.clone(),
            route: format!("/file_detail/{}", file.key),
            source: None,
        },
        Resource::DataProvider(provider) => Parts {
            title: provider.name.clone(),
            subtitle: provider.description.clone(),
            route: format!("/provider/{}", provider.key),
            source: None,
        },
    }
}

/// Section label for a resource type, honoring configured overrides.
#[must_use]
pub fn section_label(resource: ResourceType, display: &DisplaySettings) -> String {
    display
        .label(resource)
        .map_or_else(|| meta(resource).label.to_string(), str::to_string)
}

/// Build at most `cap` suggestions from one resource type's slice.
///
/// Each suggestion's deep link carries `source` and positional `index`
/// logging parameters, with the index reflecting the item's position in the
/// truncated list.
#[must_use]
pub fn build_suggestions(
    resource_type: ResourceType,
    slice: &SearchResultSlice,
    display: &DisplaySettings,
    cap: usize,
) -> Vec<SuggestedResult> {
    slice
        .results
        .iter()
        .take(cap)
        .enumerate()
        .map(|(index, resource)| {
            let parts = project(resource);
            let icon_class = parts
                .source
                .and_then(|source| display.source_icon(source))
                .unwrap_or(meta(resource_type).default_icon)
                .to_string();
            let source_name = parts
                .source
                .map(|source| display.source_name(source).to_string());
            SuggestedResult {
                href: format!(
                    "{}?source={INLINE_SEARCH_SOURCE}&index={index}",
                    parts.route
                ),
                icon_class,
                title: parts.title,
                subtitle: parts.subtitle,
                source_name,
                resource_type,
            }
        })
        .collect()
}

/// Assemble the ordered, non-empty sections of the typeahead panel.
///
/// A section is omitted when its resource type is disabled or it has no
/// suggestions, keeping the panel height proportional to available content.
#[must_use]
pub fn build_sections(results: &SearchResults, settings: &SearchSettings) -> Vec<SuggestionSection> {
    ResourceType::ALL
        .into_iter()
        .filter(|resource| settings.is_enabled(*resource))
        .filter_map(|resource| {
            let slice = results.slice(resource)?;
            let suggestions = build_suggestions(
                resource,
                slice,
                &settings.display,
                settings.max_suggestions,
            );
            if suggestions.is_empty() {
                return None;
            }
            Some(SuggestionSection {
                resource_type: resource,
                label: section_label(resource, &settings.display),
                total_results: slice.total_results,
                suggestions,
            })
        })
        .collect()
}
