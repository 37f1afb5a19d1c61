use bracket_api::fetch::FetchData;
use bracket_api::id::{StageId, StageItemId, TeamId, TournamentId};
use bracket_api::inputs::{resolve_available_inputs, stage_item_lookup, team_lookup};
use bracket_api::tournaments::stage_items::{
    StageItemCreate, StageItemInputCreate, StageItemKind,
};
use bracket_api::{Client, Result};
use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Creates a stage item with one input slot per given team.
    Create {
        #[clap(short, long)]
        tournament_id: u64,
        #[clap(short, long)]
        stage_id: u64,
        /// One of 'round_robin', 'single_elimination' or 'swiss'.
        #[clap(short, long)]
        kind: StageItemKind,
        #[clap(long)]
        team_count: u64,
        /// Team ids filling the first slots.
        #[clap(long)]
        teams: Vec<u64>,
    },
    /// Renames a stage item.
    Rename {
        tournament_id: u64,
        stage_item_id: u64,
        name: String,
    },
    /// Deletes a stage item.
    Delete {
        tournament_id: u64,
        stage_item_id: u64,
    },
    /// Lists the selectable inputs for a stage.
    Inputs { tournament_id: u64, stage_id: u64 },
}

impl Command {
    pub async fn run(&self, client: &Client) -> Result<()> {
        match self {
            Self::Create {
                tournament_id,
                stage_id,
                kind,
                team_count,
                teams,
            } => {
                let inputs = teams
                    .iter()
                    .enumerate()
                    .map(|(slot, team_id)| StageItemInputCreate {
                        slot: slot as u64,
                        team_id: Some(TeamId(*team_id)),
                        ..Default::default()
                    })
                    .collect();

                client
                    .tournaments()
                    .stage_items(TournamentId(*tournament_id))
                    .create(&StageItemCreate {
                        stage_id: StageId(*stage_id),
                        kind: *kind,
                        team_count: *team_count,
                        inputs,
                    })
                    .await?;

                println!("Created a {} stage item", kind);
            }
            Self::Rename {
                tournament_id,
                stage_item_id,
                name,
            } => {
                client
                    .tournaments()
                    .stage_items(TournamentId(*tournament_id))
                    .rename(StageItemId(*stage_item_id), name)
                    .await?;

                println!("Renamed stage item {} to {}", stage_item_id, name);
            }
            Self::Delete {
                tournament_id,
                stage_item_id,
            } => {
                client
                    .tournaments()
                    .stage_items(TournamentId(*tournament_id))
                    .delete(StageItemId(*stage_item_id))
                    .await?;

                println!("Deleted stage item {}", stage_item_id);
            }
            Self::Inputs {
                tournament_id,
                stage_id,
            } => {
                let tournaments = client.tournaments();
                let tournament_id = TournamentId(*tournament_id);

                let options = FetchData::from(
                    tournaments
                        .stage_items(tournament_id)
                        .available_inputs(StageId(*stage_id))
                        .await,
                );
                let teams = team_lookup(&tournaments.teams(tournament_id).list().await?);
                let stage_items =
                    stage_item_lookup(&tournaments.stages(tournament_id).list().await?);

                println!("Value | Label");
                for option in resolve_available_inputs(&options, &teams, &stage_items)?
                    .unwrap_or_default()
                {
                    println!("{} | {}", option.value, option.label);
                }
            }
        }

        Ok(())
    }
}
