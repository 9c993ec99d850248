use std::future::Future;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::api::error::ApiError;
use crate::api::types::{Breed, DogImage, Identifier};
use crate::config::ApiConfig;

const API_KEY_HEADER: &str = "x-api-key";

/// The three Dog API calls the gallery depends on.
///
/// Futures are `Send` so the store can hand them to the tokio runtime.
/// Implementations do not retry, cache or enforce timeouts.
pub trait DogApi: Send + Sync + 'static {
    fn list_breeds(&self) -> impl Future<Output = Result<Vec<Breed>, ApiError>> + Send;

    fn search_images_by_breed(
        &self,
        breed_id: &Identifier,
    ) -> impl Future<Output = Result<Vec<DogImage>, ApiError>> + Send;

    fn search_random_images(&self) -> impl Future<Output = Result<Vec<DogImage>, ApiError>> + Send;
}

/// HTTP implementation of [`DogApi`].
pub struct DogApiClient {
    client: Client,
    base_url: String,
    page_size: u32,
    api_key: Option<String>,
}

impl DogApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(concat!("dog-gallery/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::network("client", e))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            page_size: config.page_size,
            api_key: config.api_key.clone().filter(|key| !key.is_empty()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str, params: &[(&str, String)]) -> Result<Url, ApiError> {
        let raw = format!("{}{}", self.base_url, path);
        let url = if params.is_empty() {
            Url::parse(&raw)
        } else {
            Url::parse_with_params(&raw, params)
        };
        url.map_err(|e| ApiError::network(path, e))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.url(path, params)?;
        tracing::debug!(url = %url, "GET");

        let mut builder = self.client.get(url);
        if let Some(key) = &self.api_key {
            builder = builder.header(API_KEY_HEADER, key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::network(path, e))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::network(path, e))?;

        serde_json::from_slice(&body).map_err(|source| ApiError::Parse {
            endpoint: path.to_string(),
            status: status.as_u16(),
            source,
        })
    }

    fn limit(&self) -> (&'static str, String) {
        ("limit", self.page_size.to_string())
    }
}

fn log_failure<T>(result: Result<T, ApiError>, what: &str) -> Result<T, ApiError> {
    if let Err(err) = &result {
        tracing::error!(
            endpoint = err.endpoint(),
            kind = err.kind(),
            error = %err,
            "Error fetching {}",
            what
        );
    }
    result
}

impl DogApi for DogApiClient {
    async fn list_breeds(&self) -> Result<Vec<Breed>, ApiError> {
        let result = self.get_json("/breeds", &[]).await;
        log_failure(result, "breeds")
    }

    async fn search_images_by_breed(
        &self,
        breed_id: &Identifier,
    ) -> Result<Vec<DogImage>, ApiError> {
        let params = [self.limit(), ("breed_ids", breed_id.to_string())];
        let result = self.get_json("/images/search", &params).await;
        log_failure(result, "dog images by breed")
    }

    async fn search_random_images(&self) -> Result<Vec<DogImage>, ApiError> {
        let params = [self.limit()];
        let result = self.get_json("/images/search", &params).await;
        log_failure(result, "random dog images")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> DogApiClient {
        DogApiClient::new(&ApiConfig {
            base_url: base_url.to_string(),
            page_size: 10,
            api_key: Some(String::new()),
        })
        .unwrap()
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = client("https://api.thedogapi.com/v1/");
        assert_eq!(client.base_url(), "https://api.thedogapi.com/v1");
    }

    #[test]
    fn empty_api_key_is_ignored() {
        assert!(client("https://api.thedogapi.com/v1").api_key.is_none());
    }

    #[test]
    fn search_url_carries_limit_and_breed() {
        let client = client("https://api.thedogapi.com/v1");
        let url = client
            .url(
                "/images/search",
                &[client.limit(), ("breed_ids", Identifier::Number(7).to_string())],
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.thedogapi.com/v1/images/search?limit=10&breed_ids=7"
        );
    }

    #[test]
    fn breeds_url_has_no_query() {
        let client = client("https://api.thedogapi.com/v1");
        let url = client.url("/breeds", &[]).unwrap();
        assert_eq!(url.as_str(), "https://api.thedogapi.com/v1/breeds");
    }
}
