use serde::{Deserialize, Serialize};

/// A location record as delivered by the tenant configuration bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub path: String,
    /// Storage kind ("0" local, "1" cloud, ...). Kept opaque.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub is_read_only: bool,
}

/// Paged collection wrapper (`{ "items": [...] }`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationConnection {
    #[serde(default)]
    pub items: Vec<LocationRecord>,
}

/// Tenant-scoped configuration bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtConfig {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "Locations", default)]
    pub locations: LocationConnection,
}

impl ExtConfig {
    /// Consumes the bundle and returns its location records in order.
    pub fn into_locations(self) -> Vec<LocationRecord> {
        self.locations.items
    }
}
