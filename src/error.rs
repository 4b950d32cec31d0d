//! Error types for the Pokedex client and REPL
//!
//! Provides unified error handling using thiserror. The cache itself has no
//! failure modes; everything here comes from fetching, decoding or the console.

use reqwest::StatusCode;
use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the API client and command layer.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Transport-level failure talking to the API
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("Request to {url} failed with status {status}")]
    Status { status: StatusCode, url: String },

    /// The response body was not the expected JSON shape
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A command was invoked without its required argument
    #[error("Missing argument: {0}")]
    MissingArgument(String),

    /// `map` was used after the last page was shown
    #[error("You're on the last page")]
    NoNextPage,

    /// `mapb` was used while already on the first page
    #[error("You're on the first page")]
    NoPreviousPage,
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex.
pub type Result<T> = std::result::Result<T, PokedexError>;
