mod consts;
mod error;
mod events;
mod fields;
mod logging;
mod record;
mod role;
mod session;
mod ui;

use crate::role::Role;
use crate::session::{print_record, run_headless_mode, run_tui_mode};
use crate::ui::UIConfig;
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show the login screen and the dashboard it leads to
    Start {
        /// Skip the interactive login and print the dashboard to stdout.
        #[arg(long)]
        headless: bool,

        /// Role to log in as in headless mode.
        #[arg(long = "as", value_name = "ROLE", value_enum, requires = "headless")]
        login_as: Option<Role>,

        /// Print headless output as JSON.
        #[arg(long, requires = "headless")]
        json: bool,

        /// Paint a solid background behind the UI.
        #[arg(long)]
        with_background: bool,
    },
    /// Print the sample child record as JSON
    Record,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let command = args.command.unwrap_or(Command::Start {
        headless: false,
        login_as: None,
        json: false,
        with_background: false,
    });

    match command {
        Command::Start {
            headless,
            login_as,
            json,
            with_background,
        } => {
            let result = if headless {
                run_headless_mode(login_as, json).await
            } else {
                run_tui_mode(UIConfig::new(with_background)).await
            };
            if let Err(e) = result {
                eprintln!("ChildInfo failed: {}", e);
                return Err(e.into());
            }
            Ok(())
        }
        Command::Record => print_record().map_err(|e| {
            eprintln!("Failed to print record: {}", e);
            e.into()
        }),
    }
}
