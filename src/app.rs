use crate::config::Config;
use crate::confirm::ConfirmQueue;
use crate::favorites::{self, Collection, FavoritesStore, SubscriberId};
use crate::input;
use crate::io;
use crate::locale::{Catalog, Language};
use crate::message::Message;
use crate::model::{FavoriteEntry, FileEntry, GroupKind};
use crate::probe;
use crate::router::{self, NavError, PaneId, ViewHost};
use crate::state::{tree, PaneStatus, Panes, TreeState};
use crate::subscription::{modifier_subscription, places_watcher};
use iced::futures::channel::mpsc::UnboundedReceiver;
use iced::keyboard::Modifiers;
use iced::{Subscription, Task, Theme};
use std::path::PathBuf;
use tracing::{debug, warn};

pub struct Michi {
    pub(crate) config: Config,
    pub(crate) catalog: Catalog,
    pub(crate) store: FavoritesStore,
    pub(crate) tree: TreeState,
    pub(crate) panes: Panes,
    pub(crate) confirm: ConfirmQueue,
    pub(crate) modifiers: Modifiers,
    favorites_events: UnboundedReceiver<Collection>,
    favorites_subscription: SubscriberId,
    places_file: Option<PathBuf>,
}

impl Michi {
    pub fn new() -> (Self, Task<Message>) {
        let config = Config::load();
        let catalog = Catalog::new(Language::from_tag(&config.language));

        let mut store = FavoritesStore::with_defaults(Vec::new());
        let (favorites_subscription, favorites_events) = store.subscribe();
        let tree = TreeState::new(&store, &catalog);

        let start = directories::UserDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("/"));
        let panes = Panes::new(start, config.panel.start_split);
        let places_file = favorites::places_path();

        let mut app = Self {
            config,
            catalog,
            store,
            tree,
            panes,
            confirm: ConfirmQueue::new(),
            modifiers: Modifiers::empty(),
            favorites_events,
            favorites_subscription,
            places_file,
        };

        let mut tasks = vec![app.begin_load(PaneId::Primary, app.panes.pane(PaneId::Primary).path.clone())];
        if app.panes.is_split() {
            tasks.push(app.begin_load(PaneId::Secondary, app.panes.pane(PaneId::Secondary).path.clone()));
        }
        if let Some(path) = app.places_file.clone() {
            tasks.push(Task::perform(
                favorites::load_places(path),
                Message::PlacesLoaded,
            ));
        }
        // The probe runs exactly once per panel; under the UI test harness
        // it never runs and the extras category stays absent.
        if probe::suppressed() {
            app.tree.mark_extras_absent();
        } else {
            tasks.push(Task::perform(probe::detect(), Message::ExtrasProbed));
        }

        let active = app.panes.active_path();
        app.tree.apply_selection(active.as_deref());

        (app, Task::batch(tasks))
    }

    pub fn title(&self) -> String {
        format!("Michi - {}", self.panes.active_dir().display())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let task = self.dispatch(message);
        // Change notifications are handled in the order the store fired
        // them; each one rebuilds only the affected group.
        self.drain_favorites();
        // Selection is recomputed from the active pane on every pass.
        let active = self.panes.active_path();
        self.tree.apply_selection(active.as_deref());
        task
    }

    fn dispatch(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NodeActivated(path) => self.node_activated(path),
            Message::GroupToggled(kind) => self.group_toggled(kind),
            Message::PlacesFileChanged => self.reload_places(),
            Message::PlacesLoaded(result) => self.places_loaded(result),
            Message::ExtrasProbed(result) => self.extras_probed(result),
            Message::ExtrasListed(entries) => self.extras_listed(entries),
            Message::LanguageToggled => {
                let language = self.catalog.language().toggle();
                self.dispatch(Message::LanguageChanged(language))
            }
            Message::LanguageChanged(language) => self.language_changed(language),
            Message::PaneClicked(id) => {
                self.panes.activate_pane(id);
                Task::none()
            }
            Message::PaneEntryActivated(id, path) => self.pane_entry_activated(id, path),
            Message::SplitToggled => self.split_toggled(),
            Message::PaneLoaded(id, target, result) => self.pane_loaded(id, target, result),
            Message::PromptAnswered(answer) => {
                self.confirm.resolve(answer);
                Task::none()
            }
            Message::FailureAcknowledged => {
                debug!("navigation failure acknowledged");
                Task::none()
            }
            Message::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers;
                Task::none()
            }
        }
    }

    /// A sidebar node was clicked. A path the tree no longer knows is a
    /// stale click racing a rebuild and is silently ignored.
    fn node_activated(&mut self, path: PathBuf) -> Task<Message> {
        let Some(node) = self.tree.find_node(&path) else {
            debug!("activation for unknown path {}", path.display());
            return Task::none();
        };
        let target = node.path.clone();
        let alternate = input::alternate_pane_requested(self.modifiers);
        match router::route(&mut self.panes, &target, alternate) {
            Some(order) => self.begin_load(order.pane, order.path),
            // An elided alternate-view navigation can still reveal a pane
            // that has never listed its path; give it its first load.
            None if alternate => {
                let pane = self.panes.active_pane();
                self.ensure_loaded(pane)
            }
            None => Task::none(),
        }
    }

    /// Load a pane that sits on a valid path but has never produced a
    /// listing for it (a freshly revealed second pane).
    fn ensure_loaded(&mut self, id: PaneId) -> Task<Message> {
        let pane = self.panes.pane(id);
        if pane.status == PaneStatus::Ready && pane.entries.is_empty() {
            let path = pane.path.clone();
            return self.begin_load(id, path);
        }
        Task::none()
    }

    fn group_toggled(&mut self, kind: GroupKind) -> Task<Message> {
        self.tree.toggle_group(kind);
        Task::none()
    }

    fn reload_places(&mut self) -> Task<Message> {
        match self.places_file.clone() {
            Some(path) => Task::perform(favorites::load_places(path), Message::PlacesLoaded),
            None => Task::none(),
        }
    }

    fn places_loaded(&mut self, result: Result<Vec<FavoriteEntry>, String>) -> Task<Message> {
        match result {
            Ok(entries) => self.store.replace(Collection::Places, entries),
            // Keep the previous collection; the tree stays renderable.
            Err(e) => warn!("places reload failed: {e}"),
        }
        Task::none()
    }

    fn extras_probed(&mut self, result: Result<bool, String>) -> Task<Message> {
        match result {
            Ok(true) => {
                self.tree.enable_extras(&self.store, &self.catalog);
                Task::perform(probe::environments(), Message::ExtrasListed)
            }
            Ok(false) => {
                self.tree.mark_extras_absent();
                Task::none()
            }
            Err(e) => {
                warn!("capability probe failed: {e}");
                self.tree.mark_extras_absent();
                Task::none()
            }
        }
    }

    fn extras_listed(&mut self, entries: Vec<FavoriteEntry>) -> Task<Message> {
        self.store.replace(Collection::Extras, entries);
        Task::none()
    }

    fn language_changed(&mut self, language: Language) -> Task<Message> {
        self.catalog.set_language(language);
        self.config.language = language.tag().to_string();
        if let Err(e) = self.config.save() {
            warn!("failed to persist language choice: {e}");
        }
        self.tree.rebuild_all(&self.store, &self.catalog);
        Task::none()
    }

    fn pane_entry_activated(&mut self, id: PaneId, path: PathBuf) -> Task<Message> {
        self.panes.activate_pane(id);
        if !path.is_dir() {
            return Task::none();
        }
        self.begin_load(id, path)
    }

    fn split_toggled(&mut self) -> Task<Message> {
        self.panes.toggle_split();
        if self.panes.is_split() {
            return self.ensure_loaded(PaneId::Secondary);
        }
        Task::none()
    }

    fn pane_loaded(
        &mut self,
        id: PaneId,
        target: PathBuf,
        result: Result<Vec<FileEntry>, NavError>,
    ) -> Task<Message> {
        match result {
            Ok(entries) => {
                self.panes.finish_navigation(id, &target, Ok(entries));
                Task::none()
            }
            Err(err) => {
                if !self.panes.finish_navigation(id, &target, Err(())) {
                    debug!("ignoring stale navigation failure: {err}");
                    return Task::none();
                }
                warn!("navigation failed: {err}");
                // Blocking acknowledgment; the queue keeps prompts serial.
                let rx = router::report_failure(&mut self.confirm, &self.catalog, &err);
                Task::perform(rx, |_| Message::FailureAcknowledged)
            }
        }
    }

    fn begin_load(&mut self, id: PaneId, path: PathBuf) -> Task<Message> {
        self.panes.begin_navigation(id, path.clone());
        let show_hidden = self.config.ui.show_hidden;
        let future = io::load_directory(path.clone(), show_hidden);
        Task::perform(future, move |result| {
            Message::PaneLoaded(id, path.clone(), result)
        })
    }

    fn drain_favorites(&mut self) {
        while let Ok(Some(collection)) = self.favorites_events.try_next() {
            self.tree
                .rebuild(tree::kind_for(collection), &self.store, &self.catalog);
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![modifier_subscription()];
        if let Some(path) = self.places_file.clone() {
            subscriptions.push(places_watcher(path));
        }
        Subscription::batch(subscriptions)
    }

    pub fn theme(&self) -> Theme {
        Theme::TokyoNight
    }
}

impl Drop for Michi {
    fn drop(&mut self) {
        self.store.unsubscribe(self.favorites_subscription);
    }
}
