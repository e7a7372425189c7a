use crate::locale::Language;
use crate::model::{FavoriteEntry, FileEntry, GroupKind};
use crate::router::{NavError, PaneId};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Message {
    // Sidebar
    NodeActivated(PathBuf),
    GroupToggled(GroupKind),

    // Favorites source
    PlacesFileChanged,
    PlacesLoaded(Result<Vec<FavoriteEntry>, String>),

    // Capability probe
    ExtrasProbed(Result<bool, String>),
    ExtrasListed(Vec<FavoriteEntry>),

    // Localization
    LanguageToggled,
    LanguageChanged(Language),

    // Panes
    PaneClicked(PaneId),
    PaneEntryActivated(PaneId, PathBuf),
    SplitToggled,
    PaneLoaded(PaneId, PathBuf, Result<Vec<FileEntry>, NavError>),

    // Confirmation surface
    PromptAnswered(bool),
    FailureAcknowledged,

    // Input
    ModifiersChanged(iced::keyboard::Modifiers),
}
