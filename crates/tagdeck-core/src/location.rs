//! Location capability boundary.
//!
//! The entry panel asks the location owning an entry two things: its path
//! separator and whether a derived directory exists. Everything else about
//! storage stays behind the `Location` trait.

use std::collections::HashMap;
use std::io;
use std::path::{self, Path, PathBuf};
use std::sync::Arc;

use futures_util::future::BoxFuture;
use tokio::fs;

use crate::error::LocationError;

/// Hidden per-directory metadata folder.
pub const META_FOLDER: &str = ".ts";

/// Folder below the metadata folder holding file revisions.
pub const REVISIONS_FOLDER: &str = "_revisions";

/// Storage location an entry belongs to.
pub trait Location: Send + Sync {
    fn id(&self) -> &str;

    /// Separator used in this location's entry paths.
    fn dir_separator(&self) -> char {
        '/'
    }

    /// Checks whether a directory exists at `path`.
    fn check_dir_exist<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<bool, LocationError>>;
}

/// Derives the revisions backup directory for an entry.
///
/// `/docs/report.md` with uuid `42` becomes `/docs/.ts/_revisions/42`.
pub fn backup_file_dir(entry_path: &str, uuid: &str, separator: char) -> String {
    let trimmed = entry_path.trim_end_matches(separator);
    let meta_dir = match trimmed.rfind(separator) {
        Some(idx) => format!("{}{separator}{META_FOLDER}", &trimmed[..idx]),
        None => META_FOLDER.to_string(),
    };
    format!("{meta_dir}{separator}{REVISIONS_FOLDER}{separator}{uuid}")
}

/// Location backed by the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalLocation {
    id: String,
    root: PathBuf,
}

impl LocalLocation {
    pub fn new(id: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            root: root.into(),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl Location for LocalLocation {
    fn id(&self) -> &str {
        &self.id
    }

    fn dir_separator(&self) -> char {
        path::MAIN_SEPARATOR
    }

    fn check_dir_exist<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<bool, LocationError>> {
        Box::pin(async move {
            match fs::metadata(self.resolve(path)).await {
                Ok(meta) => Ok(meta.is_dir()),
                Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
                Err(source) => Err(LocationError::Io {
                    path: path.to_string(),
                    source,
                }),
            }
        })
    }
}

/// Locations known to the application, by id.
#[derive(Default, Clone)]
pub struct LocationRegistry {
    locations: HashMap<String, Arc<dyn Location>>,
}

impl LocationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, location: Arc<dyn Location>) {
        self.locations.insert(location.id().to_string(), location);
    }

    pub fn find_location(&self, id: &str) -> Option<Arc<dyn Location>> {
        self.locations.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_backup_dir_for_nested_file() {
        assert_eq!(
            backup_file_dir("/docs/report.md", "42", '/'),
            "/docs/.ts/_revisions/42"
        );
    }

    #[test]
    fn test_backup_dir_uses_location_separator() {
        assert_eq!(
            backup_file_dir(r"C:\docs\report.md", "42", '\\'),
            r"C:\docs\.ts\_revisions\42"
        );
    }

    #[test]
    fn test_backup_dir_for_root_level_and_bare_names() {
        assert_eq!(backup_file_dir("/a.txt", "u", '/'), "/.ts/_revisions/u");
        assert_eq!(backup_file_dir("a.txt", "u", '/'), ".ts/_revisions/u");
    }

    #[test]
    fn test_backup_dir_ignores_trailing_separator() {
        assert_eq!(
            backup_file_dir("/photos/2024/", "d1", '/'),
            "/photos/.ts/_revisions/d1"
        );
    }

    #[tokio::test]
    async fn test_local_location_checks_directories() {
        let dir = tempdir().unwrap();
        let revisions = dir.path().join(".ts").join("_revisions").join("42");
        fs::create_dir_all(&revisions).unwrap();
        fs::write(dir.path().join("plain.txt"), "x").unwrap();

        let location = LocalLocation::new("local", dir.path());
        let existing = revisions.to_string_lossy().to_string();
        assert!(location.check_dir_exist(&existing).await.unwrap());
        assert!(location.check_dir_exist(".ts/_revisions/42").await.unwrap());
        assert!(!location.check_dir_exist("plain.txt").await.unwrap());
        assert!(!location.check_dir_exist("missing").await.unwrap());
    }

    #[test]
    fn test_registry_finds_by_id() {
        let mut registry = LocationRegistry::new();
        assert!(registry.is_empty());
        registry.insert(Arc::new(LocalLocation::new("a", "/tmp")));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.find_location("a").unwrap().id(), "a");
        assert!(registry.find_location("b").is_none());
    }
}
