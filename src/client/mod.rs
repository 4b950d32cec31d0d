//! Client Module
//!
//! Network fetching and the cache-through PokeAPI client.

mod fetcher;
mod pokeapi;

pub use fetcher::{Fetcher, HttpFetcher};
pub use pokeapi::PokeApiClient;
