//! REPL Commands
//!
//! Command parsing and execution against a [`PokeApiClient`].

use std::io::Write;

use crate::client::{Fetcher, PokeApiClient};
use crate::error::{PokedexError, Result};

/// Name and description of every command, in help order.
pub const COMMANDS: &[(&str, &str)] = &[
    ("help", "Displays a help message"),
    ("exit", "Exit the Pokedex"),
    ("map", "Displays the next 20 locations in the Pokemon world"),
    ("mapb", "Displays the previous 20 locations in the Pokemon world"),
    ("explore", "Lists the Pokemon found in a location: explore <area>"),
    ("inspect", "Shows a Pokemon's stats: inspect <pokemon>"),
];

// == Command ==
/// A parsed REPL command with its optional argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore(Option<String>),
    Inspect(Option<String>),
    /// Any word that is not a known command name
    Unknown(String),
}

impl Command {
    /// Builds a command from cleaned input words. Returns `None` for a blank line.
    pub fn parse(words: &[String]) -> Option<Self> {
        let (name, args) = words.split_first()?;
        let arg = args.first().cloned();

        let command = match name.as_str() {
            "help" => Self::Help,
            "exit" => Self::Exit,
            "map" => Self::Map,
            "mapb" => Self::MapBack,
            "explore" => Self::Explore(arg),
            "inspect" => Self::Inspect(arg),
            other => Self::Unknown(other.to_string()),
        };
        Some(command)
    }
}

/// Whether the REPL should keep reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

// == Session ==
/// Pagination state carried between commands.
#[derive(Debug, Clone)]
pub struct Session {
    next_url: Option<String>,
    previous_url: Option<String>,
}

impl Session {
    /// Starts a session whose first `map` shows `first_page_url`.
    pub fn new(first_page_url: impl Into<String>) -> Self {
        Self {
            next_url: Some(first_page_url.into()),
            previous_url: None,
        }
    }

    // == Execute ==
    /// Runs one command, writing its output to `out`.
    pub async fn execute<F, W>(
        &mut self,
        client: &PokeApiClient<F>,
        command: Command,
        out: &mut W,
    ) -> Result<Flow>
    where
        F: Fetcher,
        W: Write,
    {
        match command {
            Command::Help => {
                writeln!(out, "Welcome to the Pokedex!")?;
                writeln!(out, "Usage:")?;
                for (name, description) in COMMANDS {
                    writeln!(out, "{}: {}", name, description)?;
                }
            }
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Map => {
                let url = self.next_url.clone().ok_or(PokedexError::NoNextPage)?;
                self.show_page(client, &url, out).await?;
            }
            Command::MapBack => {
                let url = self
                    .previous_url
                    .clone()
                    .ok_or(PokedexError::NoPreviousPage)?;
                self.show_page(client, &url, out).await?;
            }
            Command::Explore(area) => {
                let area = area.ok_or_else(|| missing("explore <area>"))?;
                writeln!(out, "Exploring {}...", area)?;
                let details = client.location_area(&area).await?;
                writeln!(out, "Found Pokemon:")?;
                for encounter in details.pokemon_encounters {
                    writeln!(out, " - {}", encounter.pokemon.name)?;
                }
            }
            Command::Inspect(name) => {
                let name = name.ok_or_else(|| missing("inspect <pokemon>"))?;
                let pokemon = client.pokemon(&name).await?;
                writeln!(out, "Name: {}", pokemon.name)?;
                writeln!(out, "Height: {}", pokemon.height)?;
                writeln!(out, "Weight: {}", pokemon.weight)?;
                writeln!(out, "Stats:")?;
                for stat in &pokemon.stats {
                    writeln!(out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
                }
                writeln!(out, "Types:")?;
                for kind in &pokemon.types {
                    writeln!(out, "  - {}", kind.kind.name)?;
                }
            }
            Command::Unknown(name) => writeln!(out, "Unknown command: {}", name)?,
        }

        Ok(Flow::Continue)
    }

    async fn show_page<F, W>(
        &mut self,
        client: &PokeApiClient<F>,
        url: &str,
        out: &mut W,
    ) -> Result<()>
    where
        F: Fetcher,
        W: Write,
    {
        let page = client.location_areas(Some(url)).await?;
        self.next_url = page.next;
        self.previous_url = page.previous;

        for area in page.results {
            writeln!(out, "{}", area.name)?;
        }
        Ok(())
    }
}

fn missing(usage: &str) -> PokedexError {
    PokedexError::MissingArgument(format!("usage: {}", usage))
}
