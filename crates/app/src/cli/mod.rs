use std::path::PathBuf;

use clap::{Parser, Subcommand};

use tablebill_app::client::HttpOrderStore;

mod invoice;
mod member;
mod menu;
mod order;
mod table;

/// Tablebill POS terminal.
#[derive(Debug, Parser)]
#[command(name = "tablebill", about = "Tablebill POS terminal", long_about = None)]
pub(crate) struct Cli {
    /// Order store API base URL.
    #[arg(
        long,
        env = "TABLEBILL_API_URL",
        default_value = "http://127.0.0.1:8000",
        global = true
    )]
    api_url: String,

    /// Cart snapshot file for this terminal.
    #[arg(
        long,
        env = "TABLEBILL_CART_FILE",
        default_value = "tablebill-cart.json",
        global = true
    )]
    cart_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Maintain dining tables.
    Table(table::TableCommand),
    /// Maintain the menu catalog.
    Menu(menu::MenuCommand),
    /// Build and sell a table's order.
    Order(order::OrderCommand),
    /// Maintain memberships.
    Member(member::MemberCommand),
    /// Browse the sell history.
    Invoice(invoice::InvoiceCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        let store = HttpOrderStore::new(self.api_url);

        match self.command {
            Commands::Table(command) => table::run(command, &store).await,
            Commands::Menu(command) => menu::run(command, &store).await,
            Commands::Order(command) => order::run(command, &store, &self.cart_file).await,
            Commands::Member(command) => member::run(command, &store).await,
            Commands::Invoice(command) => invoice::run(command, &store).await,
        }
    }
}

/// Blocking yes/no confirmation on the terminal.
pub(crate) fn confirm(prompt: &str) -> Result<bool, String> {
    use std::io::{self, Write};

    print!("{prompt} [y/N] ");
    io::stdout()
        .flush()
        .map_err(|error| format!("could not flush prompt: {error}"))?;

    let mut answer = String::new();
    io::stdin()
        .read_line(&mut answer)
        .map_err(|error| format!("could not read confirmation: {error}"))?;

    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
