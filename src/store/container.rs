use std::sync::Arc;

use crate::api::{Breed, DogApi, DogImage, Identifier};
use crate::breeds::{BreedsIntent, BreedsReducer, BreedsState};
use crate::favorites::{FavoritesIntent, FavoritesReducer, FavoritesState};
use crate::images::{ImageQuery, ImagesIntent, ImagesReducer, ImagesState};
use crate::mvi::Reducer;
use crate::store::settlement::{PendingFetch, Settlement, SettlementKind};
use crate::store::{LoadStatus, OrderingPolicy, RequestCounter};

/// Generic MVI dispatch: takes current slice state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.state.$field = <$reducer>::reduce(std::mem::take(&mut $self.state.$field), $intent);
    };
}

/// The whole state tree, one field per slice.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GalleryState {
    pub breeds: BreedsState,
    pub images: ImagesState,
    pub favorites: FavoritesState,
}

impl GalleryState {
    pub fn new(ordering: OrderingPolicy) -> Self {
        Self {
            breeds: BreedsState::new(ordering),
            images: ImagesState::new(ordering),
            favorites: FavoritesState::default(),
        }
    }
}

/// Result of [`Store::toggle_favorite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteChange {
    Added,
    Removed,
}

/// State container. The only way to change [`GalleryState`].
///
/// Asynchronous operations return a [`PendingFetch`]: the loading transition
/// is applied immediately and the caller runs the future and hands its
/// [`Settlement`] back to [`Store::settle`].
pub struct Store<A> {
    state: GalleryState,
    api: Arc<A>,
    requests: RequestCounter,
}

impl<A: DogApi> Store<A> {
    pub fn new(api: Arc<A>, ordering: OrderingPolicy) -> Self {
        Self {
            state: GalleryState::new(ordering),
            api,
            requests: RequestCounter::default(),
        }
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    // -- operations -----------------------------------------------------------

    pub fn fetch_breeds(&mut self) -> PendingFetch {
        let request = self.requests.next_id();
        tracing::debug!(%request, "fetch_breeds");
        dispatch_mvi!(self, breeds, BreedsReducer, BreedsIntent::Requested { request });

        let api = Arc::clone(&self.api);
        PendingFetch::new(request, async move {
            let outcome = api.list_breeds().await.map_err(|e| e.to_string());
            Settlement(SettlementKind::Breeds { request, outcome })
        })
    }

    pub fn fetch_by_breed(&mut self, breed_id: Identifier) -> PendingFetch {
        self.fetch_images(ImageQuery::Breed(breed_id))
    }

    pub fn fetch_random(&mut self) -> PendingFetch {
        self.fetch_images(ImageQuery::Random)
    }

    fn fetch_images(&mut self, query: ImageQuery) -> PendingFetch {
        let request = self.requests.next_id();
        tracing::debug!(%request, %query, "fetch images");
        dispatch_mvi!(
            self,
            images,
            ImagesReducer,
            ImagesIntent::Requested {
                request,
                query: query.clone(),
            }
        );

        let api = Arc::clone(&self.api);
        PendingFetch::new(request, async move {
            let result = match &query {
                ImageQuery::Random => api.search_random_images().await,
                ImageQuery::Breed(id) => api.search_images_by_breed(id).await,
            };
            Settlement(SettlementKind::Images {
                request,
                query,
                outcome: result.map_err(|e| e.to_string()),
            })
        })
    }

    /// Apply the outcome of a fetch to its owning slice.
    pub fn settle(&mut self, settlement: Settlement) {
        tracing::debug!(%settlement, "settle");
        match settlement.0 {
            SettlementKind::Breeds { request, outcome } => {
                let intent = match outcome {
                    Ok(breeds) => BreedsIntent::Fulfilled { request, breeds },
                    Err(message) => BreedsIntent::Rejected { request, message },
                };
                dispatch_mvi!(self, breeds, BreedsReducer, intent);
            }
            SettlementKind::Images {
                request,
                query,
                outcome,
            } => {
                let intent = match outcome {
                    Ok(images) => ImagesIntent::Fulfilled {
                        request,
                        query,
                        images,
                    },
                    Err(message) => ImagesIntent::Rejected { request, message },
                };
                dispatch_mvi!(self, images, ImagesReducer, intent);
            }
        }
    }

    pub fn add_favorite(&mut self, image: DogImage) {
        dispatch_mvi!(self, favorites, FavoritesReducer, FavoritesIntent::Add(image));
    }

    pub fn remove_favorite(&mut self, image: DogImage) {
        dispatch_mvi!(self, favorites, FavoritesReducer, FavoritesIntent::Remove(image));
    }

    /// Remove when present, add otherwise.
    pub fn toggle_favorite(&mut self, image: DogImage) -> FavoriteChange {
        if self.is_favorite(&image.id) {
            self.remove_favorite(image);
            FavoriteChange::Removed
        } else {
            self.add_favorite(image);
            FavoriteChange::Added
        }
    }

    // -- selectors ------------------------------------------------------------

    pub fn all_breeds(&self) -> &[Breed] {
        &self.state.breeds.breeds
    }

    pub fn breeds_status(&self) -> LoadStatus {
        self.state.breeds.status
    }

    pub fn breeds_error(&self) -> Option<&str> {
        self.state.breeds.error.as_deref()
    }

    pub fn images(&self) -> &[DogImage] {
        &self.state.images.images
    }

    pub fn images_status(&self) -> LoadStatus {
        self.state.images.status
    }

    pub fn images_error(&self) -> Option<&str> {
        self.state.images.error.as_deref()
    }

    pub fn shown_query(&self) -> Option<&ImageQuery> {
        self.state.images.shown.as_ref()
    }

    pub fn favorites(&self) -> &[DogImage] {
        &self.state.favorites.favorites
    }

    pub fn is_favorite(&self, id: &Identifier) -> bool {
        self.state.favorites.contains(id)
    }
}
