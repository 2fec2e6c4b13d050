use std::sync::Arc;

use tagdeck_core::error::LocationError;
use tagdeck_core::location::{Location, backup_file_dir};
use tagdeck_types::Entry;

use crate::common::TaskId;
use crate::events::PanelEvent;

/// Checks whether the entry's revisions backup directory exists.
///
/// Any failure (unknown location included) reads as "no revisions".
pub async fn probe_revisions(
    task: TaskId,
    entry: Entry,
    location: Option<Arc<dyn Location>>,
) -> PanelEvent {
    let exists = match check_backup_dir(&entry, location.as_deref()).await {
        Ok(exists) => exists,
        Err(e) => {
            tracing::debug!(entry = %entry.path, error = %e, "revisions probe failed");
            false
        }
    };
    PanelEvent::RevisionsProbed {
        task,
        entry,
        exists,
    }
}

async fn check_backup_dir(
    entry: &Entry,
    location: Option<&dyn Location>,
) -> Result<bool, LocationError> {
    let location =
        location.ok_or_else(|| LocationError::UnknownLocation(entry.location_id.clone()))?;
    let dir = backup_file_dir(&entry.path, &entry.uuid, location.dir_separator());
    location.check_dir_exist(&dir).await
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tagdeck_core::location::LocalLocation;

    use super::*;

    fn probed(event: PanelEvent) -> bool {
        match event {
            PanelEvent::RevisionsProbed { exists, .. } => exists,
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_probe_finds_backup_dir() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_string_lossy().to_string();
        fs::create_dir_all(dir.path().join(".ts").join("_revisions").join("f1")).unwrap();
        let location: Arc<dyn Location> = Arc::new(LocalLocation::new("local", dir.path()));

        let with = Entry::file(format!("{root}/a.md"), "f1", "local");
        let without = Entry::file(format!("{root}/b.md"), "f2", "local");

        assert!(probed(
            probe_revisions(TaskId(1), with, Some(Arc::clone(&location))).await
        ));
        assert!(!probed(
            probe_revisions(TaskId(2), without, Some(location)).await
        ));
    }

    #[tokio::test]
    async fn test_unknown_location_means_no_revisions() {
        let entry = Entry::file("/a.md", "f1", "gone");
        assert!(!probed(probe_revisions(TaskId(1), entry, None).await));
    }
}
