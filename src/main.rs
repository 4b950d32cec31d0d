//! Pokedex - A PokeAPI explorer backed by an in-memory TTL cache

use std::io;
use std::sync::Arc;

use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{repl, Config, HttpFetcher, PokeApiClient, TtlCache};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the TTL cache, which starts its reaper
/// 4. Run the REPL on stdin/stdout
/// 5. Close the cache on `exit`, end of input or Ctrl+C
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs stay out of the prompt; override with RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_ttl={}s, base_url={}, http_timeout={}s",
        config.cache_ttl, config.base_url, config.http_timeout
    );

    let cache = Arc::new(TtlCache::new(config.cache_ttl()));
    let fetcher = HttpFetcher::new(config.http_timeout())?;
    let client = PokeApiClient::new(fetcher, cache.clone(), config.base_url.clone());

    // Stdin is read off-runtime so a pending read cannot block shutdown
    let mut lines = repl::spawn_line_reader(io::BufReader::new(io::stdin()))?;
    let mut out = io::stdout();

    let shutdown = repl::shutdown_on(signal::ctrl_c());
    let result = repl::run_until(&client, &mut lines, &mut out, shutdown).await;

    cache.close().await;
    info!("Pokedex shutdown complete");

    Ok(result?)
}
