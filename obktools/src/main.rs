//! Operator tools for a running Oddsbook server.
//!
//! The admin credential is read from `OBK_ADMIN_KEY` (a `.env` file is honoured), never from the
//! command line, so it does not end up in shell history.

mod client;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use oddsbook_server::data_objects::NewMatchupParams;
use prettytable::{row, Table};
use rust_decimal::Decimal;
use url::Url;

use crate::client::OddsbookClient;

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8360";

#[derive(Parser)]
#[command(name = "obktools", version, about = "Operator tools for a running Oddsbook server")]
struct Cli {
    /// Server to talk to. Falls back to OBK_SERVER_URL, then to http://127.0.0.1:8360.
    #[arg(long, short)]
    server: Option<Url>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ping the server's health endpoint
    Health,
    /// List the matchup catalog
    List,
    /// Fetch a single matchup by id
    Get { id: String },
    /// Add a matchup to the catalog (requires OBK_ADMIN_KEY)
    Add {
        side_a: String,
        side_b: String,
        sport: String,
        /// Payout multiplier for side A. Omitted or unusable values default to 1.5 server-side.
        #[arg(long)]
        multiplier_a: Option<Decimal>,
        /// Payout multiplier for side B. Omitted or unusable values default to 1.5 server-side.
        #[arg(long)]
        multiplier_b: Option<Decimal>,
    },
    /// Remove a matchup from the catalog (requires OBK_ADMIN_KEY)
    Remove { id: String },
    /// Quote a hypothetical wager: stake on side 'A' or 'B' of a matchup
    Quote { id: String, side: String, stake: Decimal },
    /// Check the admin credential against the server
    Verify,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();
    let cli = Cli::parse();
    let server = match cli.server {
        Some(url) => url,
        None => std::env::var("OBK_SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string()).parse()?,
    };
    let admin_key = std::env::var("OBK_ADMIN_KEY").ok();
    let client = OddsbookClient::new(server, admin_key);

    match cli.command {
        Command::Health => {
            let body = client.health().await?;
            println!("{} is up: {}", client.server(), body.trim());
        },
        Command::List => {
            let result = client.list_matchups().await?;
            print_catalog(&result.matchups);
            println!("{} matchups as of {}", result.count, result.timestamp);
        },
        Command::Get { id } => {
            let matchup = client.matchup(&id).await?;
            print_catalog(std::slice::from_ref(&matchup));
        },
        Command::Add { side_a, side_b, sport, multiplier_a, multiplier_b } => {
            let params = NewMatchupParams {
                side_a,
                side_b,
                sport,
                multiplier_a: multiplier_a.map(|m| serde_json::json!(m.to_string())),
                multiplier_b: multiplier_b.map(|m| serde_json::json!(m.to_string())),
            };
            let created = client.create_matchup(&params).await?;
            println!("Created matchup [{}]: {created}", created.id);
        },
        Command::Remove { id } => {
            let removed = client.delete_matchup(&id).await?;
            println!("Removed matchup [{}]: {removed}", removed.id);
        },
        Command::Quote { id, side, stake } => {
            let quote = client.quote_wager(&id, &side, stake).await?;
            println!(
                "{} on side {} at ×{} pays {}",
                quote.stake, quote.side, quote.multiplier, quote.payout
            );
        },
        Command::Verify => {
            let response = client.verify_credential().await?;
            println!("{}", response.message);
        },
    }
    Ok(())
}

fn print_catalog(matchups: &[oddsbook_engine::types::Matchup]) {
    let mut table = Table::new();
    table.add_row(row!["ID", "Side A", "Side B", "Sport", "×A", "×B", "Created"]);
    for m in matchups {
        table.add_row(row![m.id, m.side_a, m.side_b, m.sport, m.multiplier_a, m.multiplier_b, m.created_at]);
    }
    table.printstd();
}
