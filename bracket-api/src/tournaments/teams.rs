use crate::id::{TeamId, TournamentId};
use crate::payload::Payload;
use crate::{status_error, Client, Result};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A team registered in a tournament.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Team {
    #[cfg_attr(feature = "server", serde(skip_deserializing))]
    pub id: TeamId,
    pub name: String,
    pub active: bool,
    /// RFC3339
    pub created: DateTime<Utc>,
}

#[derive(Clone, Debug)]
pub struct TeamsClient<'a> {
    client: &'a Client,
    tournament_id: TournamentId,
}

impl<'a> TeamsClient<'a> {
    pub(crate) fn new(client: &'a Client, tournament_id: TournamentId) -> Self {
        Self {
            client,
            tournament_id,
        }
    }

    /// Returns a list of all teams in the tournament.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self) -> Result<Vec<Team>> {
        let fut = async {
            let uri = format!("/tournaments/{}/teams", self.tournament_id);

            let req = self.client.request().get().uri(&uri).build();

            let resp = self.client.send(req).await?;
            if !resp.is_success() {
                return Err(status_error(resp.status()));
            }

            let payload: Payload<Vec<Team>> = resp.json().await?;
            Ok(payload.into_inner())
        };

        self.client.reported(fut).await
    }

    /// Returns the [`Team`] with the given `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or no such team exists.
    pub async fn get(&self, id: TeamId) -> Result<Team> {
        let fut = async {
            let uri = format!("/tournaments/{}/teams/{}", self.tournament_id, id);

            let req = self.client.request().get().uri(&uri).build();

            let resp = self.client.send(req).await?;
            if !resp.is_success() {
                return Err(status_error(resp.status()));
            }

            let payload: Payload<Team> = resp.json().await?;
            Ok(payload.into_inner())
        };

        self.client.reported(fut).await
    }
}
