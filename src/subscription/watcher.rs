use crate::message::Message;
use iced::futures::SinkExt;
use iced::stream;
use iced::Subscription;
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::hash::Hash;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct PlacesWatcherId(PathBuf);

/// Watch the saved-places file and report structural changes. The watch
/// covers the containing directory so create/replace-by-rename is seen too.
pub fn places_watcher(file: PathBuf) -> Subscription<Message> {
    Subscription::run_with_id(
        PlacesWatcherId(file.clone()),
        stream::channel(100, move |mut output| async move {
            let Some(dir) = file.parent().map(PathBuf::from) else {
                return;
            };
            let target = file.clone();
            let (tx, mut rx) = tokio::sync::mpsc::channel(10);

            let mut watcher: RecommendedWatcher =
                match notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
                    if let Ok(event) = res {
                        if event.paths.iter().any(|p| p == &target) {
                            let _ = tx.blocking_send(());
                        }
                    }
                }) {
                    Ok(w) => w,
                    Err(_) => return,
                };

            if watcher.watch(&dir, RecursiveMode::NonRecursive).is_err() {
                return;
            }

            // Ends when the watcher (and its sender) is dropped.
            while rx.recv().await.is_some() {
                let _ = output.send(Message::PlacesFileChanged).await;
            }
        }),
    )
}
