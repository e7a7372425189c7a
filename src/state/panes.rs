use crate::model::FileEntry;
use crate::router::{PaneId, ViewHost};
use std::mem;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneStatus {
    Ready,
    Loading,
}

/// One directory view. The path flips to the navigation target as soon as
/// the navigation starts (the listing arrives asynchronously) and rolls
/// back if the load fails.
#[derive(Debug, Clone)]
pub struct Pane {
    pub path: PathBuf,
    prior: Option<PathBuf>,
    pub status: PaneStatus,
    pub entries: Vec<FileEntry>,
}

impl Pane {
    fn new(path: PathBuf) -> Self {
        Self {
            path,
            prior: None,
            status: PaneStatus::Ready,
            entries: Vec::new(),
        }
    }
}

/// The two-pane view host. The secondary pane always exists but is only
/// shown (and reachable) in split mode.
pub struct Panes {
    primary: Pane,
    secondary: Pane,
    split: bool,
    active: PaneId,
}

impl Panes {
    pub fn new(start: PathBuf, split: bool) -> Self {
        Self {
            primary: Pane::new(start.clone()),
            secondary: Pane::new(start),
            split,
            active: PaneId::Primary,
        }
    }

    pub fn pane(&self, id: PaneId) -> &Pane {
        match id {
            PaneId::Primary => &self.primary,
            PaneId::Secondary => &self.secondary,
        }
    }

    fn pane_mut(&mut self, id: PaneId) -> &mut Pane {
        match id {
            PaneId::Primary => &mut self.primary,
            PaneId::Secondary => &mut self.secondary,
        }
    }

    /// Mark a pane as heading to `target`. The previous path is kept for
    /// rollback until the matching [`finish_navigation`] arrives.
    pub fn begin_navigation(&mut self, id: PaneId, target: PathBuf) {
        let pane = self.pane_mut(id);
        pane.prior = Some(mem::replace(&mut pane.path, target));
        pane.status = PaneStatus::Loading;
    }

    /// Apply the result of the navigation that targeted `target`. Results
    /// for a pane that is not loading, or for a target a newer navigation
    /// has since replaced, are stale and are ignored without touching the
    /// pane.
    pub fn finish_navigation(
        &mut self,
        id: PaneId,
        target: &Path,
        result: Result<Vec<FileEntry>, ()>,
    ) -> bool {
        let pane = self.pane_mut(id);
        if pane.status != PaneStatus::Loading || pane.path != target {
            return false;
        }
        match result {
            Ok(entries) => {
                pane.entries = entries;
                pane.prior = None;
            }
            Err(()) => {
                if let Some(prior) = pane.prior.take() {
                    pane.path = prior;
                }
            }
        }
        pane.status = PaneStatus::Ready;
        true
    }
}

impl ViewHost for Panes {
    fn active_path(&self) -> Option<PathBuf> {
        Some(self.pane(self.active).path.clone())
    }

    fn active_status(&self) -> PaneStatus {
        self.pane(self.active).status
    }

    fn is_split(&self) -> bool {
        self.split
    }

    fn toggle_split(&mut self) {
        self.split = !self.split;
        // Leaving split mode hides the secondary pane; focus returns to
        // the primary one.
        if !self.split && self.active == PaneId::Secondary {
            self.active = PaneId::Primary;
        }
    }

    fn inactive_pane(&self) -> PaneId {
        self.active.other()
    }

    fn activate_pane(&mut self, id: PaneId) {
        if id == PaneId::Secondary && !self.split {
            return;
        }
        self.active = id;
    }

    fn visible_path(&self, id: PaneId) -> PathBuf {
        self.pane(id).path.clone()
    }

    fn active_pane(&self) -> PaneId {
        self.active
    }
}

impl Panes {
    pub fn active_dir(&self) -> &Path {
        &self.pane(self.active).path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_navigation_rolls_the_path_back() {
        let mut panes = Panes::new(PathBuf::from("/home/u"), false);
        panes.begin_navigation(PaneId::Primary, PathBuf::from("/root"));
        assert_eq!(panes.visible_path(PaneId::Primary), PathBuf::from("/root"));
        assert_eq!(panes.active_status(), PaneStatus::Loading);

        assert!(panes.finish_navigation(PaneId::Primary, Path::new("/root"), Err(())));
        assert_eq!(panes.visible_path(PaneId::Primary), PathBuf::from("/home/u"));
        assert_eq!(panes.active_status(), PaneStatus::Ready);
    }

    #[test]
    fn late_results_for_a_ready_pane_are_ignored() {
        let mut panes = Panes::new(PathBuf::from("/home/u"), false);
        assert!(!panes.finish_navigation(PaneId::Primary, Path::new("/home/u"), Ok(Vec::new())));
    }

    #[test]
    fn superseded_navigation_results_are_dropped() {
        let mut panes = Panes::new(PathBuf::from("/start"), false);
        panes.begin_navigation(PaneId::Primary, PathBuf::from("/a"));
        panes.begin_navigation(PaneId::Primary, PathBuf::from("/b"));

        // The first listing arrives after its navigation was replaced; it
        // must not be attributed to the pane now heading to /b.
        let stale = vec![FileEntry {
            name: "only-in-a".to_string(),
            path: PathBuf::from("/a/only-in-a"),
            is_dir: false,
        }];
        assert!(!panes.finish_navigation(PaneId::Primary, Path::new("/a"), Ok(stale)));
        assert_eq!(panes.visible_path(PaneId::Primary), PathBuf::from("/b"));
        assert!(panes.pane(PaneId::Primary).entries.is_empty());
        assert_eq!(panes.active_status(), PaneStatus::Loading);

        // The result that answers the live navigation still lands.
        assert!(panes.finish_navigation(PaneId::Primary, Path::new("/b"), Ok(Vec::new())));
        assert_eq!(panes.active_status(), PaneStatus::Ready);
        assert_eq!(panes.visible_path(PaneId::Primary), PathBuf::from("/b"));
    }

    #[test]
    fn stale_failure_does_not_roll_back_a_newer_navigation() {
        let mut panes = Panes::new(PathBuf::from("/start"), false);
        panes.begin_navigation(PaneId::Primary, PathBuf::from("/a"));
        panes.begin_navigation(PaneId::Primary, PathBuf::from("/b"));

        assert!(!panes.finish_navigation(PaneId::Primary, Path::new("/a"), Err(())));
        assert_eq!(panes.visible_path(PaneId::Primary), PathBuf::from("/b"));
        assert_eq!(panes.active_status(), PaneStatus::Loading);
    }

    #[test]
    fn unsplitting_returns_focus_to_the_primary_pane() {
        let mut panes = Panes::new(PathBuf::from("/home/u"), true);
        panes.activate_pane(PaneId::Secondary);
        panes.toggle_split();
        assert_eq!(panes.active_pane(), PaneId::Primary);
        assert!(!panes.is_split());
    }

    #[test]
    fn secondary_pane_cannot_be_activated_while_unsplit() {
        let mut panes = Panes::new(PathBuf::from("/home/u"), false);
        panes.activate_pane(PaneId::Secondary);
        assert_eq!(panes.active_pane(), PaneId::Primary);
    }
}
