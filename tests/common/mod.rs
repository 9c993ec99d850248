//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use dog_gallery::api::{ApiError, Breed, DogApi, DogImage, Identifier};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::oneshot;

/// A breed fixture with no opaque fields.
pub fn breed(id: i64, name: &str) -> Breed {
    Breed::new(id, name)
}

/// An image fixture whose url is derived from its id.
pub fn image(id: &str) -> DogImage {
    DogImage::new(id, format!("https://cdn2.thedogapi.com/images/{}.jpg", id))
}

/// `count` distinct image fixtures.
pub fn images(count: usize) -> Vec<DogImage> {
    (0..count).map(|i| image(&format!("img{}", i))).collect()
}

/// Calls observed by [`ScriptedApi`], in order.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    ListBreeds,
    ByBreed(Identifier),
    Random,
}

/// Gate for a scripted response; send the result to let the call finish.
pub type Gate<T> = oneshot::Sender<Result<T, ApiError>>;

enum Scripted<T> {
    Ready(Result<T, ApiError>),
    Gated(oneshot::Receiver<Result<T, ApiError>>),
}

/// Image scripts are keyed by breed (`None` = random) so overlapping calls
/// pick up their own response regardless of poll order.
type ImageScript = (Option<Identifier>, Scripted<Vec<DogImage>>);

/// [`DogApi`] double with scripted, optionally gated responses.
///
/// Unscripted calls succeed with an empty list.
#[derive(Default)]
pub struct ScriptedApi {
    breeds: Mutex<VecDeque<Scripted<Vec<Breed>>>>,
    images: Mutex<Vec<ImageScript>>,
    calls: Mutex<Vec<ApiCall>>,
}

impl ScriptedApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_breeds(&self, result: Result<Vec<Breed>, ApiError>) {
        self.breeds.lock().push_back(Scripted::Ready(result));
    }

    pub fn gate_breeds(&self) -> Gate<Vec<Breed>> {
        let (tx, rx) = oneshot::channel();
        self.breeds.lock().push_back(Scripted::Gated(rx));
        tx
    }

    pub fn push_images(&self, breed: Option<Identifier>, result: Result<Vec<DogImage>, ApiError>) {
        self.images.lock().push((breed, Scripted::Ready(result)));
    }

    pub fn gate_images(&self, breed: Option<Identifier>) -> Gate<Vec<DogImage>> {
        let (tx, rx) = oneshot::channel();
        self.images.lock().push((breed, Scripted::Gated(rx)));
        tx
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().clone()
    }

    fn take_images(&self, breed: Option<&Identifier>) -> Option<Scripted<Vec<DogImage>>> {
        let mut images = self.images.lock();
        let index = images.iter().position(|(key, _)| key.as_ref() == breed)?;
        Some(images.remove(index).1)
    }
}

async fn resolve<T: Default>(script: Option<Scripted<T>>) -> Result<T, ApiError> {
    match script {
        Some(Scripted::Ready(result)) => result,
        Some(Scripted::Gated(rx)) => match rx.await {
            Ok(result) => result,
            Err(_) => Err(ApiError::network("scripted", "gate dropped")),
        },
        None => Ok(T::default()),
    }
}

impl DogApi for ScriptedApi {
    async fn list_breeds(&self) -> Result<Vec<Breed>, ApiError> {
        self.calls.lock().push(ApiCall::ListBreeds);
        let script = self.breeds.lock().pop_front();
        resolve(script).await
    }

    async fn search_images_by_breed(
        &self,
        breed_id: &Identifier,
    ) -> Result<Vec<DogImage>, ApiError> {
        self.calls.lock().push(ApiCall::ByBreed(breed_id.clone()));
        let script = self.take_images(Some(breed_id));
        resolve(script).await
    }

    async fn search_random_images(&self) -> Result<Vec<DogImage>, ApiError> {
        self.calls.lock().push(ApiCall::Random);
        let script = self.take_images(None);
        resolve(script).await
    }
}
