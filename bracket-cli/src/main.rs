mod stage_items;
mod tournaments;

use bracket_api::Client;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[clap(version, about)]
pub struct Args {
    /// Base url of the Bracket API server.
    #[clap(short, long)]
    uri: String,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Tournaments {
        #[clap(subcommand)]
        command: tournaments::Command,
    },
    StageItems {
        #[clap(subcommand)]
        command: stage_items::Command,
    },
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    let args = Args::parse();

    let client = Client::new(args.uri);

    let res = match args.command {
        Command::Tournaments { command } => command.run(&client).await,
        Command::StageItems { command } => command.run(&client).await,
    };

    if let Err(err) = res {
        log::error!("{}", err);
        std::process::exit(1);
    }
}
