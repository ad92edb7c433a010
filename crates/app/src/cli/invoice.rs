use clap::{Args, Subcommand};
use rusty_money::iso;

use tablebill::pricing;
use tablebill_app::client::HttpOrderStore;

#[derive(Debug, Args)]
pub(crate) struct InvoiceCommand {
    #[command(subcommand)]
    command: InvoiceSubcommand,
}

#[derive(Debug, Subcommand)]
enum InvoiceSubcommand {
    /// List the sell history.
    List {
        /// ISO currency code for price display.
        #[arg(long, env = "TABLEBILL_CURRENCY", default_value = "USD")]
        currency: String,
    },
}

pub(crate) async fn run(command: InvoiceCommand, store: &HttpOrderStore) -> Result<(), String> {
    match command.command {
        InvoiceSubcommand::List { currency } => {
            let currency =
                iso::find(&currency).ok_or_else(|| format!("unknown currency code {currency}"))?;

            let invoices = store
                .list_invoices()
                .await
                .map_err(|error| format!("failed to list invoices: {error}"))?;

            for invoice in invoices {
                let bill = pricing::format_minor(invoice.total_bill, currency)
                    .map_err(|error| format!("unprintable bill: {error}"))?;
                let discount = pricing::format_minor(invoice.total_discount, currency)
                    .map_err(|error| format!("unprintable discount: {error}"))?;

                println!(
                    "{}  {}  bill {bill}  discount {discount}  {}",
                    invoice.id, invoice.table_name, invoice.created_at
                );
            }

            Ok(())
        }
    }
}
