use clap::{Args, Subcommand};

use tablebill_app::client::HttpOrderStore;

#[derive(Debug, Args)]
pub(crate) struct TableCommand {
    #[command(subcommand)]
    command: TableSubcommand,
}

#[derive(Debug, Subcommand)]
enum TableSubcommand {
    /// List dining tables.
    List,
    /// Add the next auto-named table.
    Add,
    /// Remove a table by name.
    Remove {
        /// Table name, e.g. `table-3`.
        name: String,
    },
}

pub(crate) async fn run(command: TableCommand, store: &HttpOrderStore) -> Result<(), String> {
    match command.command {
        TableSubcommand::List => {
            let tables = store
                .list_tables()
                .await
                .map_err(|error| format!("failed to list tables: {error}"))?;

            for table in tables {
                println!("{}", table.name);
            }

            Ok(())
        }
        TableSubcommand::Add => {
            let table = store
                .add_table()
                .await
                .map_err(|error| format!("failed to add table: {error}"))?;

            println!("added {}", table.name);

            Ok(())
        }
        TableSubcommand::Remove { name } => {
            store
                .delete_table(&name)
                .await
                .map_err(|error| format!("failed to remove table {name}: {error}"))?;

            println!("removed {name}");

            Ok(())
        }
    }
}
