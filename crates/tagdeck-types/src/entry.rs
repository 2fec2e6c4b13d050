use serde::{Deserialize, Serialize};

/// A file-system object opened in the entry panel.
///
/// Owned by the surrounding application; the panel only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Full path of the entry, using the owning location's separator.
    pub path: String,
    /// Stable unique id of the entry (from its sidecar metadata).
    pub uuid: String,
    /// Id of the location the entry lives in.
    #[serde(rename = "locationID")]
    pub location_id: String,
    /// `true` for files, `false` for directories.
    pub is_file: bool,
}

impl Entry {
    pub fn file(
        path: impl Into<String>,
        uuid: impl Into<String>,
        location_id: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            uuid: uuid.into(),
            location_id: location_id.into(),
            is_file: true,
        }
    }

    pub fn directory(
        path: impl Into<String>,
        uuid: impl Into<String>,
        location_id: impl Into<String>,
    ) -> Self {
        Self {
            is_file: false,
            ..Self::file(path, uuid, location_id)
        }
    }

    pub fn is_directory(&self) -> bool {
        !self.is_file
    }
}
