use crate::model::FileEntry;
use crate::router::NavError;
use std::fs;
use std::path::{Path, PathBuf};

/// Asynchronously list a directory for a pane. Directories sort first,
/// then case-insensitive by name; hidden entries are filtered unless
/// requested.
pub async fn load_directory(path: PathBuf, show_hidden: bool) -> Result<Vec<FileEntry>, NavError> {
    tokio::task::spawn_blocking(move || read_directory(&path, show_hidden))
        .await
        .map_err(|e| NavError::new("io", format!("listing task failed: {e}")))?
}

fn read_directory(path: &Path, show_hidden: bool) -> Result<Vec<FileEntry>, NavError> {
    if path.exists() && !path.is_dir() {
        return Err(NavError::new(
            "not-a-directory",
            format!("{} is not a directory", path.display()),
        ));
    }

    let read_dir = fs::read_dir(path).map_err(|e| NavError::from_io(&e, path))?;
    let mut entries = Vec::new();
    for entry in read_dir.flatten() {
        let path = entry.path();
        let Some(name) = path.file_name().map(|n| n.to_string_lossy().to_string()) else {
            continue;
        };
        if !show_hidden && name.starts_with('.') {
            continue;
        }
        let is_dir = path.is_dir();
        entries.push(FileEntry { name, path, is_dir });
    }
    entries.sort_by(|a, b| {
        if a.is_dir != b.is_dir {
            return b.is_dir.cmp(&a.is_dir);
        }
        a.name.to_lowercase().cmp(&b.name.to_lowercase())
    });
    Ok(entries)
}
