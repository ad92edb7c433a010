use clap::{Args, Subcommand};

use tablebill_app::client::{HttpOrderStore, OrderStore};

#[derive(Debug, Args)]
pub(crate) struct MemberCommand {
    #[command(subcommand)]
    command: MemberSubcommand,
}

#[derive(Debug, Subcommand)]
enum MemberSubcommand {
    /// List registered members.
    List,
    /// Check the membership behind a mobile number.
    Check {
        /// Member mobile number.
        mobile: String,
    },
    /// Register a member.
    Add {
        /// Member mobile number.
        mobile: String,
        /// Member display name.
        name: String,
        /// Whole-number discount percentage, 0-100.
        #[arg(long)]
        discount: u8,
    },
}

pub(crate) async fn run(command: MemberCommand, store: &HttpOrderStore) -> Result<(), String> {
    match command.command {
        MemberSubcommand::List => {
            let members = store
                .list_members()
                .await
                .map_err(|error| format!("failed to list members: {error}"))?;

            for member in members {
                println!(
                    "{}  {}  {}%",
                    member.mobile, member.name, member.discount_percent
                );
            }

            Ok(())
        }
        MemberSubcommand::Check { mobile } => {
            let member = store
                .find_member(mobile.clone())
                .await
                .map_err(|error| format!("membership lookup failed: {error}"))?;

            match member {
                Some(member) => println!("{}: {}% off", member.name, member.discount_percent),
                None => println!("no membership found for {mobile}"),
            }

            Ok(())
        }
        MemberSubcommand::Add {
            mobile,
            name,
            discount,
        } => {
            store
                .add_member(&name, &mobile, discount)
                .await
                .map_err(|error| format!("failed to add member: {error}"))?;

            println!("added {name} ({discount}% off)");

            Ok(())
        }
    }
}
