use bracket_api::id::TournamentId;
use bracket_api::{Client, Result};
use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Lists all tournaments.
    List,
    /// Shows a single tournament.
    Get { id: u64 },
}

impl Command {
    pub async fn run(&self, client: &Client) -> Result<()> {
        match self {
            Self::List => {
                let tournaments = client.tournaments().list().await?;

                println!("ID | Name | Start");
                for tournament in tournaments {
                    println!(
                        "{} | {} | {}",
                        tournament.id, tournament.name, tournament.start_time
                    );
                }
            }
            Self::Get { id } => {
                let tournament = client.tournaments().get(TournamentId(*id)).await?;

                println!(
                    "{} | {} | {}",
                    tournament.id, tournament.name, tournament.start_time
                );
            }
        }

        Ok(())
    }
}
