//! The sidebar tree: rebuilt group-by-group from the favorites store,
//! with selection recomputed from the active pane path after every update.

use crate::favorites::{Collection, FavoritesStore};
use crate::locale::{self, Catalog};
use crate::model::{ExtrasState, FavoriteEntry, GroupKind, Icon, TreeGroup, TreeNode, HOME_SENTINEL};
use std::path::Path;

pub fn kind_for(collection: Collection) -> GroupKind {
    match collection {
        Collection::Shortcuts => GroupKind::Shortcuts,
        Collection::Places => GroupKind::Places,
        Collection::Extras => GroupKind::Extras,
    }
}

fn collection_for(kind: GroupKind) -> Collection {
    match kind {
        GroupKind::Shortcuts => Collection::Shortcuts,
        GroupKind::Places => Collection::Places,
        GroupKind::Extras => Collection::Extras,
    }
}

pub struct TreeState {
    groups: Vec<TreeGroup>,
    extras: ExtrasState,
}

impl TreeState {
    /// Build the fixed groups. The extras group is deliberately not part of
    /// the first paint; it appears only after the capability probe resolves.
    pub fn new(store: &FavoritesStore, catalog: &Catalog) -> Self {
        let mut tree = Self {
            groups: vec![
                empty_group(GroupKind::Shortcuts, catalog),
                empty_group(GroupKind::Places, catalog),
            ],
            extras: ExtrasState::Uninitialized,
        };
        tree.rebuild(GroupKind::Shortcuts, store, catalog);
        tree.rebuild(GroupKind::Places, store, catalog);
        tree
    }

    pub fn groups(&self) -> &[TreeGroup] {
        &self.groups
    }

    pub fn extras(&self) -> ExtrasState {
        self.extras
    }

    /// Negative probe result. Only the undecided state can transition.
    pub fn mark_extras_absent(&mut self) {
        if self.extras == ExtrasState::Uninitialized {
            self.extras = ExtrasState::Absent;
        }
    }

    /// Positive probe result: append the extras group (default expanded)
    /// and fill it from the store. Once present the group never leaves;
    /// duplicate or late probe results are ignored.
    pub fn enable_extras(&mut self, store: &FavoritesStore, catalog: &Catalog) {
        if self.extras != ExtrasState::Uninitialized {
            return;
        }
        self.extras = ExtrasState::Present;
        self.groups.push(empty_group(GroupKind::Extras, catalog));
        self.rebuild(GroupKind::Extras, store, catalog);
    }

    /// Replace one group's label and nodes from the store. The node list
    /// swaps in atomically; a renderer never sees a half-built group.
    pub fn rebuild(&mut self, kind: GroupKind, store: &FavoritesStore, catalog: &Catalog) {
        if kind == GroupKind::Extras && self.extras != ExtrasState::Present {
            return;
        }
        let username = locale::username();
        let nodes: Vec<TreeNode> = store
            .entries(collection_for(kind))
            .iter()
            .map(|entry| map_entry(kind, entry, catalog, username.as_deref()))
            .collect();
        if let Some(group) = self.groups.iter_mut().find(|g| g.kind == kind) {
            group.label = catalog.label(kind.label_key()).to_string();
            group.nodes = nodes;
        }
    }

    /// Language changes invalidate every label, group headers included.
    pub fn rebuild_all(&mut self, store: &FavoritesStore, catalog: &Catalog) {
        for kind in [GroupKind::Shortcuts, GroupKind::Places, GroupKind::Extras] {
            self.rebuild(kind, store, catalog);
        }
    }

    /// Local expand/collapse flip; no external effects.
    pub fn toggle_group(&mut self, kind: GroupKind) {
        if let Some(group) = self.groups.iter_mut().find(|g| g.kind == kind) {
            group.expanded = !group.expanded;
        }
    }

    /// Recompute selection from scratch: clear everything, then mark the
    /// first node matching the active path, scanning the fixed groups in
    /// declaration order with extras as the final fallback. No match is
    /// fine and leaves nothing selected.
    pub fn apply_selection(&mut self, active: Option<&Path>) {
        for group in &mut self.groups {
            for node in &mut group.nodes {
                node.selected = false;
            }
        }
        let Some(path) = active else { return };
        let hit = self.groups.iter().enumerate().find_map(|(g, group)| {
            group
                .nodes
                .iter()
                .position(|node| node.matches(path))
                .map(|n| (g, n))
        });
        if let Some((g, n)) = hit {
            self.groups[g].nodes[n].selected = true;
        }
    }

    /// First node associated with `path`, in selection scan order. A miss
    /// means the click raced a rebuild; callers treat it as a no-op.
    pub fn find_node(&self, path: &Path) -> Option<&TreeNode> {
        self.groups
            .iter()
            .flat_map(|group| group.nodes.iter())
            .find(|node| node.matches(path))
    }
}

fn empty_group(kind: GroupKind, catalog: &Catalog) -> TreeGroup {
    TreeGroup {
        kind,
        label: catalog.label(kind.label_key()).to_string(),
        expanded: true,
        nodes: Vec::new(),
    }
}

/// Map one favorite entry to a tree node.
///
/// Shortcut labels are semantic keys localized under `shortcut.*`, with the
/// home sentinel resolving to the platform username; place/extra labels are
/// raw display strings. Anything missing falls back to the path so a
/// rebuild never fails.
fn map_entry(
    kind: GroupKind,
    entry: &FavoriteEntry,
    catalog: &Catalog,
    username: Option<&str>,
) -> TreeNode {
    let id = format!("{}{}", kind.prefix(), entry.path.display());
    let label = match kind {
        GroupKind::Shortcuts if entry.label == HOME_SENTINEL => username
            .map(str::to_string)
            .unwrap_or_else(|| path_fallback(entry)),
        GroupKind::Shortcuts => {
            let key = format!("shortcut.{}", entry.label);
            match catalog.translate(&key) {
                Some(label) => label.to_string(),
                None if !entry.label.is_empty() => entry.label.clone(),
                None => path_fallback(entry),
            }
        }
        GroupKind::Places | GroupKind::Extras => {
            if entry.label.is_empty() {
                path_fallback(entry)
            } else {
                entry.label.clone()
            }
        }
    };
    let icon = match kind {
        GroupKind::Shortcuts => Icon::for_shortcut(&entry.label),
        GroupKind::Places | GroupKind::Extras => Icon::from_id(&entry.icon),
    };
    TreeNode {
        id,
        label,
        icon,
        path: entry.path.clone(),
        selected: false,
    }
}

fn path_fallback(entry: &FavoriteEntry) -> String {
    entry
        .path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| entry.path.display().to_string())
}
