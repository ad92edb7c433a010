use clap::{Args, Subcommand};
use rusty_money::iso;
use uuid::Uuid;

use tablebill::{names, pricing};
use tablebill_app::{client::HttpOrderStore, domain::catalog::models::Category};

#[derive(Debug, Args)]
pub(crate) struct MenuCommand {
    #[command(subcommand)]
    command: MenuSubcommand,
}

#[derive(Debug, Subcommand)]
enum MenuSubcommand {
    /// List a category's items.
    List {
        /// Menu category slug, e.g. `fast-food`.
        category: Category,
        /// ISO currency code for price display.
        #[arg(long, env = "TABLEBILL_CURRENCY", default_value = "USD")]
        currency: String,
    },
    /// Add an item to a category.
    Add {
        /// Menu category slug.
        category: Category,
        /// Item display name; stored normalized, e.g. `Iced Tea` → `iced-tea`.
        name: String,
        /// Unit price in minor currency units.
        #[arg(long)]
        price: u64,
    },
    /// Remove an item from a category.
    Remove {
        /// Menu category slug.
        category: Category,
        /// Item id as shown by `menu list`.
        id: Uuid,
    },
}

pub(crate) async fn run(command: MenuCommand, store: &HttpOrderStore) -> Result<(), String> {
    match command.command {
        MenuSubcommand::List { category, currency } => {
            let currency =
                iso::find(&currency).ok_or_else(|| format!("unknown currency code {currency}"))?;

            let items = store
                .list_items(category)
                .await
                .map_err(|error| format!("failed to list {category}: {error}"))?;

            for item in items {
                let price = pricing::format_minor(item.item_price, currency)
                    .map_err(|error| format!("unprintable price: {error}"))?;

                println!("{}  {}  {}", item.id, names::display(&item.item_name), price);
            }

            Ok(())
        }
        MenuSubcommand::Add {
            category,
            name,
            price,
        } => {
            store
                .add_item(category, &name, price)
                .await
                .map_err(|error| format!("failed to add item to {category}: {error}"))?;

            println!("added {}", names::normalize(&name));

            Ok(())
        }
        MenuSubcommand::Remove { category, id } => {
            store
                .delete_item(category, id)
                .await
                .map_err(|error| format!("failed to remove item {id}: {error}"))?;

            println!("removed {id}");

            Ok(())
        }
    }
}
