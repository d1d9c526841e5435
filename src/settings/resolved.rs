use std::collections::BTreeMap;
use std::time::Duration;

use crate::dispatch::DEFAULT_DEBOUNCE;
use crate::types::ResourceType;

/// Default per-resource suggestion cap for the typeahead panel.
pub(crate) const DEFAULT_MAX_SUGGESTIONS: usize = 2;

/// Display overrides for section labels and source branding.
///
/// Lookups fall back to stable built-in defaults when a label or source is
/// unconfigured, so an empty table is always safe.
#[derive(Debug, Clone, Default)]
pub struct DisplaySettings {
    pub(crate) labels: BTreeMap<ResourceType, String>,
    pub(crate) sources: BTreeMap<String, SourceDisplay>,
}

/// Branding for one source system (e.g. a database or BI product).
#[derive(Debug, Clone, Default)]
pub struct SourceDisplay {
    pub display_name: Option<String>,
    pub icon_class: Option<String>,
}

impl DisplaySettings {
    /// Section label override for a resource type, if configured.
    #[must_use]
    pub fn label(&self, resource: ResourceType) -> Option<&str> {
        self.labels.get(&resource).map(String::as_str)
    }

    /// Configured display name for a source identifier; the identifier
    /// itself is the stable default.
    #[must_use]
    pub fn source_name<'a>(&'a self, source: &'a str) -> &'a str {
        self.sources
            .get(source)
            .and_then(|display| display.display_name.as_deref())
            .unwrap_or(source)
    }

    /// Configured icon class for a source identifier, if any.
    #[must_use]
    pub fn source_icon(&self, source: &str) -> Option<&str> {
        self.sources
            .get(source)
            .and_then(|display| display.icon_class.as_deref())
    }
}

/// Validated, immutable settings injected into the search control.
#[derive(Debug, Clone)]
pub struct SearchSettings {
    /// Quiescence window between the last keystroke and the fired query.
    pub debounce: Duration,
    /// Suggestion cap per resource-type section.
    pub max_suggestions: usize,
    pub(crate) enabled: BTreeMap<ResourceType, bool>,
    pub display: DisplaySettings,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            enabled: BTreeMap::new(),
            display: DisplaySettings::default(),
        }
    }
}

impl SearchSettings {
    /// Whether a resource type is searchable and rendered. Types without an
    /// explicit flag are enabled.
    #[must_use]
    pub fn is_enabled(&self, resource: ResourceType) -> bool {
        self.enabled.get(&resource).copied().unwrap_or(true)
    }

    /// Enabled resource types, in section-render order.
    #[must_use]
    pub fn enabled_resources(&self) -> Vec<ResourceType> {
        ResourceType::ALL
            .into_iter()
            .filter(|resource| self.is_enabled(*resource))
            .collect()
    }

    /// Disable one resource type, primarily for embedders configuring in code.
    #[must_use]
    pub fn without_resource(mut self, resource: ResourceType) -> Self {
        self.enabled.insert(resource, false);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_every_resource_type() {
        let settings = SearchSettings::default();
        assert_eq!(settings.enabled_resources(), ResourceType::ALL.to_vec());
        assert_eq!(settings.max_suggestions, 2);
    }

    #[test]
    fn disabled_resources_are_filtered_in_render_order() {
        let settings = SearchSettings::default()
            .without_resource(ResourceType::User)
            .without_resource(ResourceType::File);
        assert_eq!(
            settings.enabled_resources(),
            vec![
                ResourceType::Table,
                ResourceType::Dashboard,
                ResourceType::Feature,
                ResourceType::DataProvider,
            ]
        );
    }

    #[test]
    fn source_lookups_fall_back_to_stable_defaults() {
        let display = DisplaySettings::default();
        assert_eq!(display.source_name("hive"), "hive");
        assert_eq!(display.source_icon("hive"), None);
        assert_eq!(display.label(ResourceType::User), None);
    }
}
