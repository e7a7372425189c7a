//! The favorites source: three ordered collections of entries plus a
//! structural-change subscription mechanism. Collections are replaced
//! wholesale, never mutated in place, and every replace notifies the
//! registered subscribers with the collection that changed.

use crate::model::{FavoriteEntry, HOME_SENTINEL};
use iced::futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Shortcuts,
    Places,
    Extras,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberId(usize);

pub struct FavoritesStore {
    shortcuts: Vec<FavoriteEntry>,
    places: Vec<FavoriteEntry>,
    extras: Vec<FavoriteEntry>,
    subscribers: Vec<(SubscriberId, UnboundedSender<Collection>)>,
    next_id: usize,
}

impl FavoritesStore {
    pub fn new(shortcuts: Vec<FavoriteEntry>, places: Vec<FavoriteEntry>) -> Self {
        Self {
            shortcuts,
            places,
            extras: Vec::new(),
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Fixed system shortcuts derived from the user's known directories.
    /// Directories that do not exist on this machine are skipped.
    pub fn with_defaults(places: Vec<FavoriteEntry>) -> Self {
        let mut shortcuts = Vec::new();
        if let Some(dirs) = directories::UserDirs::new() {
            shortcuts.push(FavoriteEntry::new(HOME_SENTINEL, dirs.home_dir(), ""));
            let known: [(&str, Option<&std::path::Path>); 6] = [
                ("Documents", dirs.document_dir()),
                ("Downloads", dirs.download_dir()),
                ("Pictures", dirs.picture_dir()),
                ("Music", dirs.audio_dir()),
                ("Videos", dirs.video_dir()),
                ("Desktop", dirs.desktop_dir()),
            ];
            for (label, dir) in known {
                if let Some(dir) = dir.filter(|d| d.is_dir()) {
                    shortcuts.push(FavoriteEntry::new(label, dir, ""));
                }
            }
        }
        Self::new(shortcuts, places)
    }

    pub fn entries(&self, collection: Collection) -> &[FavoriteEntry] {
        match collection {
            Collection::Shortcuts => &self.shortcuts,
            Collection::Places => &self.places,
            Collection::Extras => &self.extras,
        }
    }

    /// Structural replace of one collection. Fires the change notification
    /// even when the new list happens to equal the old one; subscribers
    /// rebuild idempotently.
    pub fn replace(&mut self, collection: Collection, entries: Vec<FavoriteEntry>) {
        match collection {
            Collection::Shortcuts => self.shortcuts = entries,
            Collection::Places => self.places = entries,
            Collection::Extras => self.extras = entries,
        }
        self.notify(collection);
    }

    /// Register a change subscriber. The receiver yields the collection tag
    /// of every structural replace, in the order the replaces happened.
    pub fn subscribe(&mut self) -> (SubscriberId, UnboundedReceiver<Collection>) {
        let (tx, rx) = mpsc::unbounded();
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, tx));
        (id, rx)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(sub, _)| *sub != id);
    }

    fn notify(&mut self, collection: Collection) {
        self.subscribers
            .retain(|(_, tx)| tx.unbounded_send(collection).is_ok());
    }
}

#[derive(Deserialize, Default)]
struct PlacesFile {
    #[serde(default, rename = "place")]
    places: Vec<FavoriteEntry>,
}

/// Path of the saved-places file, next to the config file.
pub fn places_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "michi")
        .map(|dirs| dirs.config_dir().join("places.toml"))
}

/// Load the saved places. A missing file is an empty list; a malformed file
/// is an error the caller logs while keeping the previous collection.
pub async fn load_places(path: PathBuf) -> Result<Vec<FavoriteEntry>, String> {
    let contents = match tokio::fs::read_to_string(&path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(format!("failed to read {}: {e}", path.display())),
    };
    let file: PlacesFile =
        toml::from_str(&contents).map_err(|e| format!("failed to parse {}: {e}", path.display()))?;
    Ok(file.places)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &str) -> FavoriteEntry {
        FavoriteEntry::new("x", path, "folder")
    }

    #[test]
    fn replace_notifies_with_collection_tag() {
        let mut store = FavoritesStore::new(Vec::new(), Vec::new());
        let (_id, mut rx) = store.subscribe();

        store.replace(Collection::Places, vec![entry("/data")]);
        store.replace(Collection::Shortcuts, vec![entry("/home/u")]);

        assert_eq!(rx.try_next().unwrap(), Some(Collection::Places));
        assert_eq!(rx.try_next().unwrap(), Some(Collection::Shortcuts));
        assert!(rx.try_next().is_err()); // no further notifications pending
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut store = FavoritesStore::new(Vec::new(), Vec::new());
        let (id, mut rx) = store.subscribe();
        store.unsubscribe(id);

        store.replace(Collection::Extras, vec![entry("/mnt/wsl")]);
        // Sender dropped on unsubscribe, so the stream reports termination.
        assert_eq!(rx.try_next().unwrap(), None);
    }

    #[test]
    fn places_file_parses_entries_in_order() {
        let text = r#"
            [[place]]
            label = "Projects"
            path = "/home/u/projects"
            icon = "folder"

            [[place]]
            path = "/srv/data"
        "#;
        let file: PlacesFile = toml::from_str(text).unwrap();
        assert_eq!(file.places.len(), 2);
        assert_eq!(file.places[0].label, "Projects");
        assert_eq!(file.places[1].path, PathBuf::from("/srv/data"));
        assert_eq!(file.places[1].icon, "");
    }
}
