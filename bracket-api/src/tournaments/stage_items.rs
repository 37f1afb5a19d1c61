use crate::id::{RoundId, StageId, StageItemId, TeamId, TournamentId};
use crate::payload::Payload;
use crate::{status_error, Client, Result};

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single component of a stage, e.g. a group or an elimination bracket.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StageItem {
    #[cfg_attr(feature = "server", serde(skip_deserializing))]
    pub id: StageItemId,
    pub stage_id: StageId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: StageItemKind,
    pub team_count: u64,
    #[serde(default)]
    pub rounds: Vec<Round>,
}

/// A round inside a [`StageItem`]. Matches are owned by the backend and not
/// exposed here.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Round {
    pub id: RoundId,
    pub name: String,
    pub is_draft: bool,
}

/// The tournament system a [`StageItem`] runs under.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StageItemKind {
    RoundRobin,
    SingleElimination,
    Swiss,
}

impl Display for StageItemKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::RoundRobin => "Round Robin",
                Self::SingleElimination => "Single Elimination",
                Self::Swiss => "Swiss",
            }
        )
    }
}

impl FromStr for StageItemKind {
    type Err = ParseStageItemKindError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "round_robin" | "ROUND_ROBIN" => Ok(Self::RoundRobin),
            "single_elimination" | "SINGLE_ELIMINATION" => Ok(Self::SingleElimination),
            "swiss" | "SWISS" => Ok(Self::Swiss),
            _ => Err(ParseStageItemKindError),
        }
    }
}

/// The error returned when parsing a [`StageItemKind`] from a string fails.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown stage item kind")]
pub struct ParseStageItemKindError;

/// The request body for creating a new [`StageItem`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StageItemCreate {
    pub stage_id: StageId,
    #[serde(rename = "type")]
    pub kind: StageItemKind,
    pub team_count: u64,
    pub inputs: Vec<StageItemInputCreate>,
}

/// A single input slot in a [`StageItemCreate`] request.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StageItemInputCreate {
    pub slot: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<TeamId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner_from_stage_item_id: Option<StageItemId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner_position: Option<u64>,
}

/// A candidate source for a stage item slot, as returned by the backend.
///
/// A well formed option carries either `team_id`, or both
/// `winner_from_stage_item_id` and `winner_position`. Options violating this
/// are handled by the resolver, never assumed away here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageItemInputOption {
    #[serde(default)]
    pub team_id: Option<TeamId>,
    #[serde(default)]
    pub winner_from_stage_item_id: Option<StageItemId>,
    #[serde(default)]
    pub winner_position: Option<u64>,
}

#[derive(Clone, Debug, Serialize)]
struct RenameStageItem<'a> {
    name: &'a str,
}

#[derive(Clone, Debug)]
pub struct StageItemsClient<'a> {
    client: &'a Client,
    tournament_id: TournamentId,
}

impl<'a> StageItemsClient<'a> {
    pub(crate) fn new(client: &'a Client, tournament_id: TournamentId) -> Self {
        Self {
            client,
            tournament_id,
        }
    }

    /// Creates a new [`StageItem`] under the stage named in `body`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails. The error is routed through
    /// the client's error reporter before it is returned.
    pub async fn create(&self, body: &StageItemCreate) -> Result<()> {
        let fut = async {
            let uri = format!("/tournaments/{}/stage_items", self.tournament_id);

            let req = self.client.request().post().uri(&uri).body(body).build();

            let resp = self.client.send(req).await?;
            if !resp.is_success() {
                return Err(status_error(resp.status()));
            }

            Ok(())
        };

        self.client.reported(fut).await
    }

    /// Renames the [`StageItem`] with the given `id`. No other field is
    /// changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails. The error is routed through
    /// the client's error reporter before it is returned.
    pub async fn rename(&self, id: StageItemId, name: &str) -> Result<()> {
        let fut = async {
            let uri = format!("/tournaments/{}/stage_items/{}", self.tournament_id, id);

            let body = RenameStageItem { name };

            let req = self.client.request().put().uri(&uri).body(&body).build();

            let resp = self.client.send(req).await?;
            if !resp.is_success() {
                return Err(status_error(resp.status()));
            }

            Ok(())
        };

        self.client.reported(fut).await
    }

    /// Deletes the [`StageItem`] with the given `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails. The error is routed through
    /// the client's error reporter before it is returned.
    pub async fn delete(&self, id: StageItemId) -> Result<()> {
        let fut = async {
            let uri = format!("/tournaments/{}/stage_items/{}", self.tournament_id, id);

            let req = self.client.request().delete().uri(&uri).build();

            let resp = self.client.send(req).await?;
            if !resp.is_success() {
                return Err(status_error(resp.status()));
            }

            Ok(())
        };

        self.client.reported(fut).await
    }

    /// Returns the raw input descriptors available to stage items of the
    /// given stage.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails. The error is routed through
    /// the client's error reporter before it is returned.
    pub async fn available_inputs(&self, stage_id: StageId) -> Result<Vec<StageItemInputOption>> {
        let fut = async {
            let uri = format!(
                "/tournaments/{}/stages/{}/available_inputs",
                self.tournament_id, stage_id
            );

            let req = self.client.request().get().uri(&uri).build();

            let resp = self.client.send(req).await?;
            if !resp.is_success() {
                return Err(status_error(resp.status()));
            }

            let payload: Payload<Vec<StageItemInputOption>> = resp.json().await?;
            Ok(payload.into_inner())
        };

        self.client.reported(fut).await
    }
}
