use crate::model::Icon;
use std::path::{Path, PathBuf};

/// Identity of a sidebar group. Explicit, never derived from list position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    Shortcuts,
    Places,
    Extras,
}

impl GroupKind {
    /// Prefix baked into node ids so they stay unique across groups and
    /// stable across rebuilds.
    pub fn prefix(self) -> &'static str {
        match self {
            GroupKind::Shortcuts => "shortcut:",
            GroupKind::Places => "place:",
            GroupKind::Extras => "extra:",
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            GroupKind::Shortcuts => "group.shortcuts",
            GroupKind::Places => "group.places",
            GroupKind::Extras => "group.extras",
        }
    }
}

/// Whether the optional extras category has been decided yet.
///
/// The transition is monotonic: `Uninitialized` moves to `Absent` or
/// `Present` exactly once and never changes again for the panel's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtrasState {
    #[default]
    Uninitialized,
    Absent,
    Present,
}

#[derive(Debug, Clone)]
pub struct TreeGroup {
    pub kind: GroupKind,
    pub label: String,
    pub expanded: bool,
    pub nodes: Vec<TreeNode>,
}

#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Stable rendering key: group prefix + path.
    pub id: String,
    pub label: String,
    pub icon: Icon,
    pub path: PathBuf,
    pub selected: bool,
}

impl TreeNode {
    pub fn matches(&self, path: &Path) -> bool {
        self.path == path
    }
}
