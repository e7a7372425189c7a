use serde::Deserialize;
use std::path::PathBuf;

/// Sentinel label for the entry that points at the user's home directory.
/// It renders as the platform username rather than a translated string.
pub const HOME_SENTINEL: &str = "HOME_DIR";

/// One favorite: a labelled filesystem path with an icon identifier.
///
/// The label is either a raw display string (places) or a semantic key
/// resolved through the localization catalog (system shortcuts).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FavoriteEntry {
    #[serde(default)]
    pub label: String,
    pub path: PathBuf,
    #[serde(default)]
    pub icon: String,
}

impl FavoriteEntry {
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>, icon: &str) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            icon: icon.to_string(),
        }
    }
}

/// A single row of a directory listing shown inside a pane.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Shared icon set for the panel and the panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Icon {
    Home,
    Documents,
    Downloads,
    Pictures,
    Music,
    Videos,
    Desktop,
    Drive,
    Network,
    #[default]
    Folder,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Home => "🏠",
            Icon::Documents => "📄",
            Icon::Downloads => "📥",
            Icon::Pictures => "🖼",
            Icon::Music => "🎵",
            Icon::Videos => "🎬",
            Icon::Desktop => "🖥",
            Icon::Drive => "💾",
            Icon::Network => "🌐",
            Icon::Folder => "📁",
        }
    }

    /// Icon for a fixed shortcut, keyed on its semantic label.
    pub fn for_shortcut(label: &str) -> Icon {
        match label {
            HOME_SENTINEL => Icon::Home,
            "Documents" => Icon::Documents,
            "Downloads" => Icon::Downloads,
            "Pictures" => Icon::Pictures,
            "Music" => Icon::Music,
            "Videos" => Icon::Videos,
            "Desktop" => Icon::Desktop,
            _ => Icon::Folder,
        }
    }

    /// Icon carried by a place/extra entry. Unknown ids fall back to the
    /// neutral folder icon instead of failing.
    pub fn from_id(id: &str) -> Icon {
        match id {
            "home" => Icon::Home,
            "documents" => Icon::Documents,
            "downloads" => Icon::Downloads,
            "pictures" => Icon::Pictures,
            "music" => Icon::Music,
            "videos" => Icon::Videos,
            "desktop" => Icon::Desktop,
            "drive" => Icon::Drive,
            "network" => Icon::Network,
            _ => Icon::Folder,
        }
    }
}
