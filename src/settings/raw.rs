use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::{Result, bail, ensure};
use serde::Deserialize;

use super::resolved::{DisplaySettings, SearchSettings, SourceDisplay};
use crate::types::ResourceType;

/// Mirror of the settings file representation before validation and defaults
/// are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawSettings {
    search: SearchSection,
    resources: BTreeMap<String, ResourceSection>,
    display: DisplaySection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SearchSection {
    debounce_ms: Option<u64>,
    max_suggestions: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ResourceSection {
    enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct DisplaySection {
    labels: BTreeMap<String, String>,
    sources: BTreeMap<String, SourceSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SourceSection {
    display_name: Option<String>,
    icon_class: Option<String>,
}

impl RawSettings {
    /// Convert the raw mirror into validated [`SearchSettings`].
    pub(super) fn resolve(self) -> Result<SearchSettings> {
        let defaults = SearchSettings::default();

        let debounce = match self.search.debounce_ms {
            Some(ms) => {
                ensure!(ms > 0, "search.debounce_ms must be greater than zero");
                Duration::from_millis(ms)
            }
            None => defaults.debounce,
        };

        let max_suggestions = match self.search.max_suggestions {
            Some(count) => {
                ensure!(count >= 1, "search.max_suggestions must be at least 1");
                count
            }
            None => defaults.max_suggestions,
        };

        let mut enabled = BTreeMap::new();
        for (key, section) in self.resources {
            let resource = parse_resource_key(&key)?;
            if let Some(flag) = section.enabled {
                enabled.insert(resource, flag);
            }
        }

        let mut labels = BTreeMap::new();
        for (key, label) in self.display.labels {
            labels.insert(parse_resource_key(&key)?, label);
        }

        let sources = self
            .display
            .sources
            .into_iter()
            .map(|(source, section)| {
                (
                    source,
                    SourceDisplay {
                        display_name: section.display_name,
                        icon_class: section.icon_class,
                    },
                )
            })
            .collect();

        Ok(SearchSettings {
            debounce,
            max_suggestions,
            enabled,
            display: DisplaySettings { labels, sources },
        })
    }
}

fn parse_resource_key(key: &str) -> Result<ResourceType> {
    match ResourceType::from_key(key) {
        Some(resource) => Ok(resource),
        None => bail!("unknown resource type in settings: '{key}'"),
    }
}
