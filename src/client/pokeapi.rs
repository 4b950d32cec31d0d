//! PokeAPI Client
//!
//! Cache-through access to the PokeAPI endpoints. Every request is keyed by
//! its full URL; a hit skips the network entirely.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::TtlCache;
use crate::client::Fetcher;
use crate::error::Result;
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

// == PokeAPI Client ==
/// Fetches and decodes PokeAPI resources, caching raw response bodies.
#[derive(Debug)]
pub struct PokeApiClient<F> {
    fetcher: F,
    cache: Arc<TtlCache>,
    base_url: String,
}

impl<F: Fetcher> PokeApiClient<F> {
    /// Creates a client rooted at `base_url` (e.g. `https://pokeapi.co/api/v2`).
    pub fn new(fetcher: F, cache: Arc<TtlCache>, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            cache,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// URL of the first page of the location-area listing.
    pub fn first_page_url(&self) -> String {
        format!("{}/location-area", self.base_url)
    }

    // == Location Areas ==
    /// Fetches one page of location areas, the first page when `url` is `None`.
    pub async fn location_areas(&self, url: Option<&str>) -> Result<LocationAreaPage> {
        match url {
            Some(url) => self.get_json(url).await,
            None => self.get_json(&self.first_page_url()).await,
        }
    }

    // == Location Area ==
    /// Fetches the details of a single location area by name or id.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        let url = format!("{}/location-area/{}", self.base_url, name);
        self.get_json(&url).await
    }

    // == Pokemon ==
    /// Fetches a Pokemon by name or id.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        self.get_json(&url).await
    }

    // == Get Bytes ==
    /// Returns the raw body for `url`, from the cache when present.
    ///
    /// Successful fetches are cached before decoding; failed fetches are not.
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(body) = self.cache.get(url).await {
            debug!(url, "Cache hit");
            return Ok(body);
        }

        debug!(url, "Cache miss");
        let body = self.fetcher.fetch(url).await?;
        self.cache.add(url, body.clone()).await;

        Ok(body)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.get_bytes(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
