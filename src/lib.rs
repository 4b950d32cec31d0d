//! Pokedex - A PokeAPI explorer backed by an in-memory TTL cache
//!
//! Repeated lookups within the cache TTL are served from memory; a background
//! reaper sweeps out entries once they outlive it.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use cache::TtlCache;
pub use client::{Fetcher, HttpFetcher, PokeApiClient};
pub use config::Config;
pub use error::{PokedexError, Result};
