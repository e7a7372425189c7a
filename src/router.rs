//! Turns a shortcut activation (plus the normalized "open in the other
//! pane" modifier) into commands against the view host, and surfaces
//! failed navigations through the confirmation queue.

use crate::confirm::{ConfirmQueue, Intent, Prompt};
use crate::locale::Catalog;
use crate::state::PaneStatus;
use iced::futures::channel::oneshot;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneId {
    Primary,
    Secondary,
}

impl PaneId {
    pub fn other(self) -> PaneId {
        match self {
            PaneId::Primary => PaneId::Secondary,
            PaneId::Secondary => PaneId::Primary,
        }
    }
}

/// A failed navigation: human-readable text plus a stable machine code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} ({code})")]
pub struct NavError {
    pub code: &'static str,
    pub message: String,
}

impl NavError {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn from_io(err: &io::Error, path: &Path) -> Self {
        let code = match err.kind() {
            io::ErrorKind::NotFound => "not-found",
            io::ErrorKind::PermissionDenied => "permission-denied",
            _ => "io",
        };
        Self::new(code, format!("{}: {err}", path.display()))
    }
}

/// What the panel shows and how the panes react to activation. The
/// production implementation is [`crate::state::Panes`]; tests drive the
/// router with a recording fake.
pub trait ViewHost {
    fn active_path(&self) -> Option<PathBuf>;
    fn active_status(&self) -> PaneStatus;
    fn is_split(&self) -> bool;
    fn toggle_split(&mut self);
    fn inactive_pane(&self) -> PaneId;
    fn activate_pane(&mut self, id: PaneId);
    fn visible_path(&self, id: PaneId) -> PathBuf;
    fn active_pane(&self) -> PaneId;
}

/// A navigation the host should now perform asynchronously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavOrder {
    pub pane: PaneId,
    pub path: PathBuf,
}

/// Resolve an activation into at most one navigation order, mutating the
/// host's split/activation state on the way.
///
/// Same-view activations only navigate a pane that is ready. Alternate-view
/// activations make the other pane active (creating it through split mode
/// first if needed) and skip the navigation entirely when that pane already
/// shows the target.
pub fn route(host: &mut dyn ViewHost, target: &Path, open_alternate: bool) -> Option<NavOrder> {
    if !open_alternate {
        if host.active_status() != PaneStatus::Ready {
            return None;
        }
        return Some(NavOrder {
            pane: host.active_pane(),
            path: target.to_path_buf(),
        });
    }

    if !host.is_split() {
        host.toggle_split();
    }
    let pane = host.inactive_pane();
    host.activate_pane(pane);

    if host.visible_path(pane) == target {
        return None;
    }
    Some(NavOrder {
        pane,
        path: target.to_path_buf(),
    })
}

/// Queue a blocking acknowledgment for a failed navigation. The returned
/// receiver completes once the user dismisses the prompt; the failure is
/// never retried and never dropped.
pub fn report_failure(
    queue: &mut ConfirmQueue,
    catalog: &Catalog,
    err: &NavError,
) -> oneshot::Receiver<bool> {
    queue.present(Prompt {
        title: catalog.label("confirm.navigation_failed").to_string(),
        body: format!("{} ({})", err.message, err.code),
        intent: Intent::Error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Language;

    /// Recording view host: two pane paths, split flag, active id.
    struct FakeHost {
        paths: [PathBuf; 2],
        split: bool,
        active: PaneId,
        status: PaneStatus,
        activations: Vec<PaneId>,
        split_toggles: usize,
    }

    impl FakeHost {
        fn new(primary: &str, secondary: &str) -> Self {
            Self {
                paths: [PathBuf::from(primary), PathBuf::from(secondary)],
                split: false,
                active: PaneId::Primary,
                status: PaneStatus::Ready,
                activations: Vec::new(),
                split_toggles: 0,
            }
        }

        fn index(id: PaneId) -> usize {
            match id {
                PaneId::Primary => 0,
                PaneId::Secondary => 1,
            }
        }
    }

    impl ViewHost for FakeHost {
        fn active_path(&self) -> Option<PathBuf> {
            Some(self.paths[Self::index(self.active)].clone())
        }
        fn active_status(&self) -> PaneStatus {
            self.status
        }
        fn is_split(&self) -> bool {
            self.split
        }
        fn toggle_split(&mut self) {
            self.split = !self.split;
            self.split_toggles += 1;
        }
        fn inactive_pane(&self) -> PaneId {
            self.active.other()
        }
        fn activate_pane(&mut self, id: PaneId) {
            self.active = id;
            self.activations.push(id);
        }
        fn visible_path(&self, id: PaneId) -> PathBuf {
            self.paths[Self::index(id)].clone()
        }
        fn active_pane(&self) -> PaneId {
            self.active
        }
    }

    #[test]
    fn same_view_navigates_ready_active_pane() {
        let mut host = FakeHost::new("/home/u", "/home/u");
        let order = route(&mut host, Path::new("/data"), false).unwrap();
        assert_eq!(order.pane, PaneId::Primary);
        assert_eq!(order.path, PathBuf::from("/data"));
        assert_eq!(host.split_toggles, 0);
        assert!(host.activations.is_empty());
    }

    #[test]
    fn same_view_on_busy_pane_is_a_no_op() {
        let mut host = FakeHost::new("/home/u", "/home/u");
        host.status = PaneStatus::Loading;
        assert_eq!(route(&mut host, Path::new("/data"), false), None);
        assert_eq!(host.split_toggles, 0);
        assert!(host.activations.is_empty());
    }

    #[test]
    fn alternate_view_enables_split_and_activates_second_pane() {
        let mut host = FakeHost::new("/home/u", "/home/u");
        let order = route(&mut host, Path::new("/data"), true).unwrap();
        assert!(host.split);
        assert_eq!(host.split_toggles, 1);
        assert_eq!(host.active, PaneId::Secondary);
        assert_eq!(order, NavOrder { pane: PaneId::Secondary, path: "/data".into() });
    }

    #[test]
    fn alternate_view_unsplit_skips_navigation_to_the_default_path() {
        let mut host = FakeHost::new("/home/u", "/home/u");
        assert_eq!(route(&mut host, Path::new("/home/u"), true), None);
        // Split and activation still happen; only the navigate is elided.
        assert!(host.split);
        assert_eq!(host.active, PaneId::Secondary);
    }

    #[test]
    fn alternate_view_skips_navigation_when_target_already_shown() {
        let mut host = FakeHost::new("/home/u", "/data");
        host.split = true;
        assert_eq!(route(&mut host, Path::new("/data"), true), None);
        // Pure pane activation, no extra split toggle.
        assert_eq!(host.active, PaneId::Secondary);
        assert_eq!(host.activations, vec![PaneId::Secondary]);
        assert_eq!(host.split_toggles, 0);
    }

    #[test]
    fn alternate_view_when_split_navigates_the_inactive_pane() {
        let mut host = FakeHost::new("/home/u", "/srv");
        host.split = true;
        host.active = PaneId::Secondary;
        let order = route(&mut host, Path::new("/data"), true).unwrap();
        assert_eq!(host.active, PaneId::Primary);
        assert_eq!(order.pane, PaneId::Primary);
    }

    #[test]
    fn alternate_view_does_not_require_readiness() {
        let mut host = FakeHost::new("/home/u", "/home/u");
        host.status = PaneStatus::Loading;
        assert!(route(&mut host, Path::new("/data"), true).is_some());
    }

    #[test]
    fn failure_report_formats_text_and_code() {
        let mut queue = ConfirmQueue::new();
        let catalog = Catalog::new(Language::English);
        let err = NavError::new("permission-denied", "/root: permission denied");
        let _rx = report_failure(&mut queue, &catalog, &err);
        let prompt = queue.active().unwrap();
        assert_eq!(prompt.title, "Navigation failed");
        assert_eq!(prompt.body, "/root: permission denied (permission-denied)");
        assert_eq!(prompt.intent, Intent::Error);
    }
}
