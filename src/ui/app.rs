use std::time::{Duration, Instant};

use tokio::sync::mpsc;

use crate::api::{Breed, DogApi, DogImage, Identifier};
use crate::clipboard::ClipboardHandler;
use crate::images::ImageQuery;
use crate::mvi::Reducer;
use crate::store::{FavoriteChange, LoadStatus, PendingFetch, Settlement, Store};
use crate::ui::breed_picker::{
    picker_entries, BreedPickerIntent, BreedPickerReducer, BreedPickerState, PickerEntry,
};
use crate::ui::toast::{ToastIntent, ToastKind, ToastReducer, ToastState};

pub const ADDED_MESSAGE: &str = "Added to favorites!";
pub const REMOVED_MESSAGE: &str = "Removed from favorites!";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Tab {
    Gallery,
    Favorites,
}

/// Label source for the images currently displayed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShownBreed<'a> {
    Known(&'a Breed),
    /// Id not in the fetched breed list.
    Unlisted(&'a Identifier),
}

/// Channel the app pushes pending fetches into; the runtime awaits them.
pub type FetchSender = mpsc::UnboundedSender<PendingFetch>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// View-side state around the [`Store`]: tabs, selections, popups, toasts.
pub struct App<A> {
    should_quit: bool,
    tab: Tab,
    store: Store<A>,
    fetcher: Option<FetchSender>,
    gallery_selection: usize,
    favorites_selection: usize,
    selected_breed: Option<Breed>,
    /// Breed requested on the command line, resolved once breeds load.
    initial_breed: Option<String>,
    breed_picker: BreedPickerState,
    toast: ToastState,
    toast_ttl: Duration,
    animation_tick: u8,
    clipboard: Option<ClipboardHandler>,
}

impl<A: DogApi> App<A> {
    pub fn new(store: Store<A>, toast_ttl: Duration) -> Self {
        Self {
            should_quit: false,
            tab: Tab::Gallery,
            store,
            fetcher: None,
            gallery_selection: 0,
            favorites_selection: 0,
            selected_breed: None,
            initial_breed: None,
            breed_picker: BreedPickerState::default(),
            toast: ToastState::default(),
            toast_ttl,
            animation_tick: 0,
            clipboard: None,
        }
    }

    pub fn attach_fetcher(&mut self, fetcher: FetchSender) {
        self.fetcher = Some(fetcher);
    }

    pub fn with_initial_breed(mut self, name: Option<String>) -> Self {
        self.initial_breed = name.filter(|n| !n.trim().is_empty());
        self
    }

    /// First render: random images, and the breed list if never fetched.
    pub fn on_mount(&mut self) {
        let pending = self.store.fetch_random();
        self.spawn(pending);
        if self.store.breeds_status().is_idle() {
            let pending = self.store.fetch_breeds();
            self.spawn(pending);
        }
    }

    fn spawn(&self, pending: PendingFetch) {
        let request = pending.request();
        match &self.fetcher {
            Some(fetcher) => {
                if fetcher.send(pending).is_err() {
                    tracing::warn!(%request, "fetch runner stopped, dropping request");
                }
            }
            None => tracing::warn!(%request, "no fetch runner attached, dropping request"),
        }
    }

    // -- state accessors ------------------------------------------------------

    pub fn store(&self) -> &Store<A> {
        &self.store
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn gallery_selection(&self) -> usize {
        self.gallery_selection
    }

    pub fn favorites_selection(&self) -> usize {
        self.favorites_selection
    }

    /// Breed most recently chosen, whether or not its images have arrived.
    pub fn selected_breed(&self) -> Option<&Breed> {
        self.selected_breed.as_ref()
    }

    /// Breed whose images are on screen. `None` for random images or when
    /// nothing has loaded yet.
    pub fn shown_breed(&self) -> Option<ShownBreed<'_>> {
        let ImageQuery::Breed(id) = self.store.shown_query()? else {
            return None;
        };
        let known = self
            .store
            .all_breeds()
            .iter()
            .find(|breed| &breed.id == id)
            .or_else(|| self.selected_breed.as_ref().filter(|breed| &breed.id == id));
        Some(match known {
            Some(breed) => ShownBreed::Known(breed),
            None => ShownBreed::Unlisted(id),
        })
    }

    pub fn breed_picker(&self) -> &BreedPickerState {
        &self.breed_picker
    }

    pub fn toast(&self) -> &ToastState {
        &self.toast
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    /// Image under the cursor on the active tab.
    pub fn selected_image(&self) -> Option<&DogImage> {
        match self.tab {
            Tab::Gallery => self.store.images().get(self.gallery_selection),
            Tab::Favorites => self.store.favorites().get(self.favorites_selection),
        }
    }

    // -- events ---------------------------------------------------------------

    pub fn on_tick(&mut self, now: Instant) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
        dispatch_mvi!(self, toast, ToastReducer, ToastIntent::Tick { now });
    }

    pub fn on_settled(&mut self, settlement: Settlement) {
        self.store.settle(settlement);
        self.clamp_selections();
        self.resolve_initial_breed();
    }

    fn resolve_initial_breed(&mut self) {
        let status = self.store.breeds_status();
        if !matches!(status, LoadStatus::Succeeded | LoadStatus::Failed) {
            return;
        }
        let Some(name) = self.initial_breed.take() else {
            return;
        };
        if status == LoadStatus::Failed {
            let reason = self.store.breeds_error().unwrap_or("unknown error");
            tracing::warn!(breed = %name, error = %reason, "breed list unavailable");
            let message = format!("Cannot select {}: breeds failed to load", name);
            self.show_toast(ToastKind::Error, message);
            return;
        }
        match self.store.state().breeds.find(&name).cloned() {
            Some(breed) => self.select_breed(Some(breed)),
            None => {
                tracing::warn!(breed = %name, "requested breed not found");
                self.show_toast(ToastKind::Error, format!("Unknown breed: {}", name));
            }
        }
    }

    fn clamp_selections(&mut self) {
        self.gallery_selection = clamp_index(self.gallery_selection, self.store.images().len());
        self.favorites_selection =
            clamp_index(self.favorites_selection, self.store.favorites().len());
    }

    // -- navigation -----------------------------------------------------------

    pub fn switch_tab(&mut self) {
        self.tab = match self.tab {
            Tab::Gallery => Tab::Favorites,
            Tab::Favorites => Tab::Gallery,
        };
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn move_selection(&mut self, delta: isize) {
        let (selection, len) = match self.tab {
            Tab::Gallery => (&mut self.gallery_selection, self.store.images().len()),
            Tab::Favorites => (&mut self.favorites_selection, self.store.favorites().len()),
        };
        if len == 0 {
            *selection = 0;
            return;
        }
        let next = (*selection as isize + delta).clamp(0, len as isize - 1);
        *selection = next as usize;
    }

    // -- gallery actions ------------------------------------------------------

    pub fn fetch_random_images(&mut self) {
        self.selected_breed = None;
        self.gallery_selection = 0;
        let pending = self.store.fetch_random();
        self.spawn(pending);
    }

    /// Select a breed (or clear the selection) and fetch matching images.
    pub fn select_breed(&mut self, breed: Option<Breed>) {
        match breed {
            Some(breed) => {
                tracing::info!(breed = %breed.name, id = %breed.id, "breed selected");
                let pending = self.store.fetch_by_breed(breed.id.clone());
                self.selected_breed = Some(breed);
                self.gallery_selection = 0;
                self.spawn(pending);
            }
            None => self.fetch_random_images(),
        }
    }

    /// Favorite button: remove if present, add otherwise, then notify.
    pub fn toggle_selected_favorite(&mut self) {
        let Some(image) = self.selected_image().cloned() else {
            return;
        };
        match self.store.toggle_favorite(image) {
            FavoriteChange::Added => self.show_toast(ToastKind::Success, ADDED_MESSAGE),
            FavoriteChange::Removed => self.show_toast(ToastKind::Error, REMOVED_MESSAGE),
        }
        self.clamp_selections();
    }

    pub fn remove_selected_favorite(&mut self) {
        if self.tab != Tab::Favorites {
            return;
        }
        let Some(image) = self.store.favorites().get(self.favorites_selection).cloned() else {
            return;
        };
        self.store.remove_favorite(image);
        self.show_toast(ToastKind::Error, REMOVED_MESSAGE);
        self.clamp_selections();
    }

    pub fn copy_selected_url(&mut self) {
        let Some(url) = self.selected_image().map(|image| image.url.clone()) else {
            return;
        };
        if self.clipboard.is_none() {
            match ClipboardHandler::new() {
                Ok(handler) => self.clipboard = Some(handler),
                Err(err) => {
                    tracing::warn!(error = %err, "clipboard unavailable");
                    self.show_toast(ToastKind::Error, "Clipboard unavailable");
                    return;
                }
            }
        }
        let result = match self.clipboard.as_mut() {
            Some(clipboard) => clipboard.set_text(&url),
            None => return,
        };
        match result {
            Ok(()) => self.show_toast(ToastKind::Success, "Image URL copied"),
            Err(err) => {
                tracing::warn!(error = %err, "clipboard write failed");
                self.show_toast(ToastKind::Error, "Failed to copy URL");
            }
        }
    }

    fn show_toast(&mut self, kind: ToastKind, message: impl Into<String>) {
        dispatch_mvi!(
            self,
            toast,
            ToastReducer,
            ToastIntent::Show {
                kind,
                message: message.into(),
                now: Instant::now(),
                ttl: self.toast_ttl,
            }
        );
    }

    // -- breed picker ---------------------------------------------------------

    pub fn open_breed_picker(&mut self) {
        // retry a failed or never-started breed fetch when the picker opens
        if matches!(
            self.store.breeds_status(),
            LoadStatus::Idle | LoadStatus::Failed
        ) {
            let pending = self.store.fetch_breeds();
            self.spawn(pending);
        }
        dispatch_mvi!(self, toast, ToastReducer, ToastIntent::Dismiss);
        dispatch_mvi!(self, breed_picker, BreedPickerReducer, BreedPickerIntent::Open);
    }

    pub fn close_breed_picker(&mut self) {
        dispatch_mvi!(self, breed_picker, BreedPickerReducer, BreedPickerIntent::Close);
    }

    pub fn picker_input(&mut self, ch: char) {
        dispatch_mvi!(self, breed_picker, BreedPickerReducer, BreedPickerIntent::Input(ch));
    }

    pub fn picker_backspace(&mut self) {
        dispatch_mvi!(self, breed_picker, BreedPickerReducer, BreedPickerIntent::Backspace);
    }

    pub fn picker_move(&mut self, delta: isize) {
        let entries = self.picker_entry_count();
        dispatch_mvi!(
            self,
            breed_picker,
            BreedPickerReducer,
            BreedPickerIntent::Move { delta, entries }
        );
    }

    fn picker_entry_count(&self) -> usize {
        if self.store.breeds_status() != LoadStatus::Succeeded {
            return 0;
        }
        picker_entries(self.store.all_breeds(), self.breed_picker.query()).len()
    }

    /// Apply the highlighted picker entry and close the popup.
    pub fn confirm_breed_picker(&mut self) {
        if self.store.breeds_status() != LoadStatus::Succeeded {
            return;
        }
        let choice = picker_entries(self.store.all_breeds(), self.breed_picker.query())
            .get(self.breed_picker.selected())
            .map(|entry| match entry {
                PickerEntry::AllBreeds => None,
                PickerEntry::Breed(breed) => Some((*breed).clone()),
            });
        let Some(choice) = choice else {
            return;
        };
        self.close_breed_picker();
        self.select_breed(choice);
    }
}

fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}
