pub mod panes;
pub mod tree;

pub use panes::{Pane, PaneStatus, Panes};
pub use tree::TreeState;
