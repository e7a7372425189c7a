mod entry;
mod tree;

pub use entry::{FavoriteEntry, FileEntry, Icon, HOME_SENTINEL};
pub use tree::{ExtrasState, GroupKind, TreeGroup, TreeNode};
