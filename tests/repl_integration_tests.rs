//! Integration Tests for the REPL
//!
//! Drives full sessions through `repl::run` with a canned fetcher.

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{sleep, timeout};

use pokedex::repl::{self, PROMPT};
use pokedex::{Fetcher, PokeApiClient, PokedexError, Result, TtlCache};

const BASE: &str = "https://pokeapi.test/api/v2";

// == Helpers ==

#[derive(Clone)]
struct CannedFetcher {
    bodies: Arc<HashMap<String, String>>,
    calls: Arc<AtomicUsize>,
}

impl Fetcher for CannedFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.bodies
            .get(url)
            .map(|body| body.clone().into_bytes())
            .ok_or_else(|| PokedexError::Status {
                status: reqwest::StatusCode::NOT_FOUND,
                url: url.to_string(),
            })
    }
}

fn canned() -> CannedFetcher {
    let mut bodies = HashMap::new();
    bodies.insert(
        format!("{}/location-area", BASE),
        r#"{"count": 1, "next": null, "previous": null,
            "results": [{"name": "canalave-city-area", "url": "u"}]}"#
            .to_string(),
    );
    bodies.insert(
        format!("{}/location-area/canalave-city-area", BASE),
        r#"{"id": 1, "name": "canalave-city-area", "pokemon_encounters": [
            {"pokemon": {"name": "tentacool", "url": "u"}},
            {"pokemon": {"name": "staryu", "url": "u"}}]}"#
            .to_string(),
    );
    bodies.insert(
        format!("{}/pokemon/pikachu", BASE),
        r#"{"name": "pikachu", "base_experience": 112, "height": 4, "weight": 60,
            "stats": [{"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": "u"}}],
            "types": [{"slot": 1, "type": {"name": "electric", "url": "u"}}]}"#
            .to_string(),
    );

    CannedFetcher {
        bodies: Arc::new(bodies),
        calls: Arc::new(AtomicUsize::new(0)),
    }
}

async fn run_session(fetcher: CannedFetcher, script: &str) -> String {
    let cache = Arc::new(TtlCache::new(Duration::from_secs(60)));
    let client = PokeApiClient::new(fetcher, cache.clone(), BASE);

    let mut lines = repl::spawn_line_reader(Cursor::new(script.to_string())).unwrap();
    let mut out = Vec::new();
    repl::run(&client, &mut lines, &mut out)
        .await
        .expect("session should not fail");

    cache.close().await;
    String::from_utf8(out).unwrap()
}

// == Session Tests ==

#[tokio::test]
async fn test_mapb_on_first_page_reports_error() {
    let fetcher = canned();
    let calls = fetcher.calls.clone();

    let output = run_session(fetcher, "map\nmapb\nexit\n").await;

    assert!(output.contains("canalave-city-area"));
    assert!(output.contains("Error: You're on the first page"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_repeated_explore_is_served_from_cache() {
    let fetcher = canned();
    let calls = fetcher.calls.clone();

    let output = run_session(
        fetcher,
        "explore canalave-city-area\nEXPLORE Canalave-City-Area\nexit\n",
    )
    .await;

    assert_eq!(output.matches(" - tentacool").count(), 2);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_inspect_prints_stats() {
    let output = run_session(canned(), "inspect pikachu\nexit\n").await;

    assert!(output.contains("Name: pikachu"));
    assert!(output.contains("  -hp: 35"));
    assert!(output.contains("  - electric"));
}

#[tokio::test]
async fn test_errors_keep_session_alive() {
    let output = run_session(canned(), "inspect missingno\nexplore\nhelp\nexit\n").await;

    assert!(output.contains("failed with status 404"));
    assert!(output.contains("Missing argument"));
    assert!(output.contains("Welcome to the Pokedex!"));
    assert!(output.contains("Goodbye"));
}

#[tokio::test]
async fn test_end_of_input_ends_session() {
    let output = run_session(canned(), "\n   \nbogus\n").await;

    assert!(output.contains("Unknown command"));
    assert_eq!(output.matches(PROMPT).count(), 4);
}

#[tokio::test]
async fn test_unknown_command_is_named() {
    let output = run_session(canned(), "teleport now\nexit\n").await;
    assert!(output.contains("Unknown command: teleport"));
}

// == Shutdown Tests ==

#[tokio::test]
async fn test_shutdown_leaves_repl_waiting_on_input() {
    let cache = Arc::new(TtlCache::new(Duration::from_secs(60)));
    let client = PokeApiClient::new(canned(), cache.clone(), BASE);

    // The sender stays alive, so the input never ends on its own
    let (tx, mut lines) = mpsc::channel(1);
    let mut out = Vec::new();

    let result = timeout(
        Duration::from_secs(2),
        repl::run_until(&client, &mut lines, &mut out, sleep(Duration::from_millis(100))),
    )
    .await
    .expect("shutdown should end the session");

    assert!(result.is_ok());
    assert_eq!(String::from_utf8(out).unwrap(), PROMPT);

    timeout(Duration::from_secs(1), cache.close())
        .await
        .expect("close should not hang after shutdown");
    assert!(cache.is_closed().await);
    drop(tx);
}

#[tokio::test]
async fn test_run_until_finishes_on_exit_before_shutdown() {
    let cache = Arc::new(TtlCache::new(Duration::from_secs(60)));
    let client = PokeApiClient::new(canned(), cache.clone(), BASE);

    let mut lines = repl::spawn_line_reader(Cursor::new("help\nexit\n")).unwrap();
    let mut out = Vec::new();

    repl::run_until(&client, &mut lines, &mut out, std::future::pending())
        .await
        .unwrap();

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("Welcome to the Pokedex!"));
    assert!(output.contains("Goodbye"));
    cache.close().await;
}
