use std::path::Path;

use clap::{Args, Subcommand};
use rusty_money::iso;

use tablebill::{items::MenuItem, names, pricing};
use tablebill_app::{
    client::HttpOrderStore,
    domain::catalog::models::Category,
    engine::{CartEngine, snapshot::SnapshotStore},
};

use crate::cli::confirm;

#[derive(Debug, Args)]
pub(crate) struct OrderCommand {
    #[command(subcommand)]
    command: OrderSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrderSubcommand {
    /// Add one unit of a menu item to a table's order.
    Add {
        /// Table name, e.g. `table-3`.
        table: String,
        /// Menu category the item lives in.
        category: Category,
        /// Item name; any spacing/casing of the stored slug.
        item: String,
    },
    /// Remove an item's line from a table's order.
    Remove {
        /// Table name.
        table: String,
        /// Item name; any spacing/casing of the stored slug.
        item: String,
    },
    /// Show a table's draft invoice.
    Show {
        /// Table name.
        table: String,
        /// ISO currency code for price display.
        #[arg(long, env = "TABLEBILL_CURRENCY", default_value = "USD")]
        currency: String,
    },
    /// Sell a table's order, optionally applying a membership discount.
    Sell {
        /// Table name.
        table: String,
        /// Member mobile number to look up for a discount.
        #[arg(long)]
        member: Option<String>,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
        /// ISO currency code for price display.
        #[arg(long, env = "TABLEBILL_CURRENCY", default_value = "USD")]
        currency: String,
    },
    /// Void every open order line, across all tables.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

pub(crate) async fn run(
    command: OrderCommand,
    store: &HttpOrderStore,
    cart_file: &Path,
) -> Result<(), String> {
    let mut engine = CartEngine::load(SnapshotStore::new(cart_file)).await;

    match command.command {
        OrderSubcommand::Add {
            table,
            category,
            item,
        } => {
            let slug = names::normalize(&item);

            let listed = store
                .list_items(category)
                .await
                .map_err(|error| format!("failed to fetch {category}: {error}"))?;

            let Some(found) = listed.into_iter().find(|entry| entry.item_name == slug) else {
                return Err(format!("no item named {slug} in {category}"));
            };

            engine
                .add_item(
                    MenuItem::new(found.id.to_string(), found.item_name, found.item_price),
                    &table,
                )
                .await
                .map_err(|error| format!("could not add item: {error}"))?;

            println!("added {} to {table}", names::display(&slug));

            Ok(())
        }
        OrderSubcommand::Remove { table, item } => {
            let slug = names::normalize(&item);

            let Some(item_id) = engine
                .lines_for_table(&table)
                .find(|line| line.item_name == slug)
                .map(|line| line.item_id.clone())
            else {
                return Err(format!("{table} has no line for {slug}"));
            };

            let now_empty = engine
                .remove_line(&item_id, &table)
                .await
                .map_err(|error| format!("could not remove line: {error}"))?;

            println!("removed {} from {table}", names::display(&slug));
            if now_empty {
                println!("cart is now empty");
            }

            Ok(())
        }
        OrderSubcommand::Show { table, currency } => {
            let currency =
                iso::find(&currency).ok_or_else(|| format!("unknown currency code {currency}"))?;

            print_draft(&engine, &table, currency)
        }
        OrderSubcommand::Sell {
            table,
            member,
            yes,
            currency,
        } => {
            let currency =
                iso::find(&currency).ok_or_else(|| format!("unknown currency code {currency}"))?;

            if let Some(mobile) = member {
                if engine.lookup_membership(store, &mobile).await {
                    println!("membership found for {mobile}");
                } else {
                    println!("no membership found");
                }
            }

            print_draft(&engine, &table, currency)?;

            let quantity = engine.state().total_quantity_for_table(&table);
            if !yes && !confirm(&format!("sell {quantity} items for {table}?"))? {
                println!("cancelled");
                return Ok(());
            }

            let invoice_id = engine
                .finalize(store, &table)
                .await
                .map_err(|error| format!("sale failed, cart unchanged: {error}"))?;

            println!("sold; invoice {invoice_id}");

            Ok(())
        }
        OrderSubcommand::Clear { yes } => {
            if !yes && !confirm("void every open order line?")? {
                println!("cancelled");
                return Ok(());
            }

            engine
                .clear_all()
                .await
                .map_err(|error| format!("could not clear the cart: {error}"))?;

            println!("cart cleared");

            Ok(())
        }
    }
}

fn print_draft(
    engine: &CartEngine,
    table: &str,
    currency: &'static iso::Currency,
) -> Result<(), String> {
    let mut lines: Vec<_> = engine.lines_for_table(table).cloned().collect();
    lines.sort_by(|a, b| a.item_name.cmp(&b.item_name));

    if lines.is_empty() {
        println!("{table}: empty");
        return Ok(());
    }

    println!("order for {table}");

    for line in &lines {
        let line_total = line
            .line_total()
            .ok_or_else(|| format!("unprintable line total for {}", line.item_name))?;
        let rendered = pricing::format_minor(line_total, currency)
            .map_err(|error| format!("unprintable line total: {error}"))?;

        println!(
            "  {} x{}  {rendered}",
            names::display(&line.item_name),
            line.quantity
        );
    }

    let total = engine
        .table_total(table)
        .map_err(|error| format!("could not total the bill: {error}"))?;
    let rendered_total = pricing::format_minor(total, currency)
        .map_err(|error| format!("unprintable total: {error}"))?;

    println!("total bill: {rendered_total}");

    let discount = engine
        .table_discount(table)
        .map_err(|error| format!("could not compute the discount: {error}"))?;

    if discount > 0 {
        let rendered_discount = pricing::format_minor(discount, currency)
            .map_err(|error| format!("unprintable discount: {error}"))?;
        let rendered_due = pricing::format_minor(total.saturating_sub(discount), currency)
            .map_err(|error| format!("unprintable amount due: {error}"))?;

        println!("discount: {rendered_discount}");
        println!("after discount: {rendered_due}");
    }

    Ok(())
}
