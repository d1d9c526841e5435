use std::fmt;

use serde::{Deserialize, Serialize};

/// Categories of searchable entities exposed by the portal's search API.
///
/// Every variant owns an independent result slice in [`super::SearchResults`];
/// the wire representation matches the snake_case keys used by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Table,
    User,
    Dashboard,
    Feature,
    File,
    DataProvider,
}

impl ResourceType {
    /// All resource types in the order sections are rendered.
    pub const ALL: [ResourceType; 6] = [
        ResourceType::Table,
        ResourceType::User,
        ResourceType::Dashboard,
        ResourceType::Feature,
        ResourceType::File,
        ResourceType::DataProvider,
    ];

    /// Stable snake_case key used in configuration files and API payloads.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            ResourceType::Table => "table",
            ResourceType::User => "user",
            ResourceType::Dashboard => "dashboard",
            ResourceType::Feature => "feature",
            ResourceType::File => "file",
            ResourceType::DataProvider => "data_provider",
        }
    }

    /// Parse a configuration key back into a resource type.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|resource| resource.key() == key)
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Table search hit as returned by the backend search service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableResource {
    pub key: String,
    pub name: String,
    pub schema: String,
    pub database: String,
    pub cluster: String,
    pub description: String,
}

/// Person record surfaced in people search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserResource {
    pub user_id: String,
    pub display_name: String,
    pub email: String,
    pub team_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardResource {
    pub uri: String,
    pub name: String,
    pub group_name: String,
    pub product: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureResource {
    pub key: String,
    pub name: String,
    pub feature_group: String,
    pub version: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileResource {
    pub key: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataProviderResource {
    pub key: String,
    pub name: String,
    pub description: String,
}

/// A single search hit, tagged by the resource type that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Resource {
    Table(TableResource),
    User(UserResource),
    Dashboard(DashboardResource),
    Feature(FeatureResource),
    File(FileResource),
    DataProvider(DataProviderResource),
}

impl Resource {
    /// Resource type tag for this hit.
    #[must_use]
    pub fn resource_type(&self) -> ResourceType {
        match self {
            Resource::Table(_) => ResourceType::Table,
            Resource::User(_) => ResourceType::User,
            Resource::Dashboard(_) => ResourceType::Dashboard,
            Resource::Feature(_) => ResourceType::Feature,
            Resource::File(_) => ResourceType::File,
            Resource::DataProvider(_) => ResourceType::DataProvider,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for resource in ResourceType::ALL {
            assert_eq!(ResourceType::from_key(resource.key()), Some(resource));
        }
        assert_eq!(ResourceType::from_key("notebook"), None);
    }

    #[test]
    fn resource_payloads_deserialize_from_api_json() {
        let raw = r#"{
            "type": "table",
            "key": "hive://gold.core/users",
            "name": "users",
            "schema": "core",
            "database": "hive",
            "cluster": "gold",
            "description": "Registered users"
        }"#;
        let resource: Resource = serde_json::from_str(raw).expect("payload should parse");
        assert_eq!(resource.resource_type(), ResourceType::Table);
        match resource {
            Resource::Table(table) => {
                assert_eq!(table.schema, "core");
                assert_eq!(table.name, "users");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let resource: Resource =
            serde_json::from_str(r#"{"type": "user", "user_id": "jdoe"}"#).expect("should parse");
        match resource {
            Resource::User(user) => {
                assert_eq!(user.user_id, "jdoe");
                assert_eq!(user.display_name, "");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
