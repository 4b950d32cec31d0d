//! REPL Module
//!
//! Reads commands line by line and dispatches them to a [`Session`].
//!
//! # Commands
//! - `help` - List available commands
//! - `exit` - Leave the REPL
//! - `map` / `mapb` - Page forwards and backwards through location areas
//! - `explore <area>` - List the Pokemon found in an area
//! - `inspect <pokemon>` - Show a Pokemon's stats

mod commands;
mod input;

use std::future::Future;
use std::io::{self, Write};

use tracing::{error, info, warn};

use crate::client::{Fetcher, PokeApiClient};
use crate::error::{PokedexError, Result};

pub use commands::{Command, Flow, Session, COMMANDS};
pub use input::{clean_input, spawn_line_reader, LineReceiver};

pub const PROMPT: &str = "Pokedex > ";

/// Runs the read-dispatch loop until `exit` or end of input.
///
/// Command failures are reported on `out` and the loop keeps going. Only
/// read failures on `lines` or write failures on `out` end it early.
pub async fn run<F, W>(
    client: &PokeApiClient<F>,
    lines: &mut LineReceiver,
    out: &mut W,
) -> Result<()>
where
    F: Fetcher,
    W: Write,
{
    let mut session = Session::new(client.first_page_url());

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.recv().await else {
            writeln!(out)?;
            break;
        };

        let Some(command) = Command::parse(&clean_input(&line?)) else {
            continue;
        };

        match session.execute(client, command, out).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(err @ PokedexError::Io(_)) => return Err(err),
            Err(err) => {
                warn!("Command failed: {}", err);
                writeln!(out, "Error: {}", err)?;
            }
        }
    }

    Ok(())
}

// == Run Until ==
/// Like [`run`], but returns as soon as `shutdown` resolves, even while
/// waiting on a line that never arrives.
pub async fn run_until<F, W, S>(
    client: &PokeApiClient<F>,
    lines: &mut LineReceiver,
    out: &mut W,
    shutdown: S,
) -> Result<()>
where
    F: Fetcher,
    W: Write,
    S: Future<Output = ()>,
{
    tokio::select! {
        result = run(client, lines, out) => result,
        () = shutdown => {
            info!("Shutdown requested, leaving the REPL");
            Ok(())
        }
    }
}

// == Shutdown On ==
/// Resolves once `signal` reports the interrupt it waits for.
///
/// If `signal` fails (e.g. the Ctrl+C handler cannot be installed) the error
/// is logged and the returned future never resolves, so the REPL keeps
/// running until `exit` or end of input instead of quitting silently.
pub async fn shutdown_on<S>(signal: S)
where
    S: Future<Output = io::Result<()>>,
{
    match signal.await {
        Ok(()) => info!("Received interrupt, initiating shutdown..."),
        Err(err) => {
            error!("Failed to listen for interrupt: {}", err);
            std::future::pending::<()>().await
        }
    }
}
