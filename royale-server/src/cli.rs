//! Royale server command-line interface.

use std::path::PathBuf;

use anyhow::Error;

use clap::{Parser, Subcommand, ValueEnum};

use royale_client::http::Client;
use royale_model::request::card::ListCardsQuery;

/// The command line arguments.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// How MCP clients reach the server.
    #[arg(short, long, value_enum, default_value_t = Transport::Http)]
    pub transport: Transport,
    /// Subcommands.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// MCP transports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Transport {
    /// Streamable HTTP, on the configured host, port and path.
    Http,
    /// Standard input and output.
    Stdio,
}

/// Operational commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    Cards(Cards),
}

/// Lists cards once and prints the response.
#[derive(clap::Args, Debug)]
pub struct Cards {
    /// Limit the number of cards returned.
    #[arg(short, long, allow_negative_numbers = true)]
    pub limit: Option<i64>,
    /// Return only cards after this marker.
    #[arg(short, long)]
    pub after: Option<String>,
    /// Return only cards before this marker.
    #[arg(short, long)]
    pub before: Option<String>,
    /// Print one line per card instead of the raw JSON.
    #[arg(short, long)]
    pub summary: bool,
}

impl Cards {
    /// The query this command sends.
    pub fn query(&self) -> ListCardsQuery {
        ListCardsQuery {
            limit: self.limit,
            after: self.after.clone(),
            before: self.before.clone(),
        }
    }
}

/// Runs a command.
pub async fn run_command(command: &Command, client: &Client) -> Result<(), Error> {
    match command {
        Command::Cards(command) => list_cards(command, client).await,
    }
}

async fn list_cards(command: &Cards, client: &Client) -> Result<(), Error> {
    let request = client.list_cards().query(command.query());

    if !command.summary {
        let body = request.await?;
        println!("{}", serde_json::to_string_pretty(&body)?);

        return Ok(());
    }

    let page = request.items().await?;

    for card in page.items.iter() {
        let rarity = card.rarity.map(|rarity| rarity.to_str()).unwrap_or("-");

        match card.elixir_cost {
            Some(cost) => println!("{:>10}  {} ({}, {} elixir)", card.id, card.name, rarity, cost),
            None => println!("{:>10}  {} ({})", card.id, card.name, rarity),
        }
    }

    let cursors = &page.paging.cursors;
    if let Some(after) = cursors.after.as_ref() {
        println!("next page: --after {}", after);
    }
    if let Some(before) = cursors.before.as_ref() {
        println!("previous page: --before {}", before);
    }

    Ok(())
}
