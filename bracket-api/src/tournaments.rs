pub mod stage_items;
pub mod stages;
pub mod teams;

use self::stage_items::StageItemsClient;
use self::stages::StagesClient;
use self::teams::TeamsClient;

use crate::id::TournamentId;
use crate::payload::Payload;
use crate::{status_error, Client, Result};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    #[cfg_attr(feature = "server", serde(skip_deserializing))]
    pub id: TournamentId,
    pub name: String,
    /// RFC3339
    pub created: DateTime<Utc>,
    pub start_time: DateTime<Utc>,
}

#[derive(Clone, Debug)]
pub struct TournamentsClient<'a> {
    client: &'a Client,
}

impl<'a> TournamentsClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Returns a list of all tournaments.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self) -> Result<Vec<Tournament>> {
        let fut = async {
            let req = self.client.request().uri("/tournaments").build();

            let resp = self.client.send(req).await?;
            if !resp.is_success() {
                return Err(status_error(resp.status()));
            }

            let payload: Payload<Vec<Tournament>> = resp.json().await?;
            Ok(payload.into_inner())
        };

        self.client.reported(fut).await
    }

    /// Returns the [`Tournament`] with the given `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or no such tournament exists.
    pub async fn get(&self, id: TournamentId) -> Result<Tournament> {
        let fut = async {
            let req = self
                .client
                .request()
                .uri(&format!("/tournaments/{}", id))
                .build();

            let resp = self.client.send(req).await?;
            if !resp.is_success() {
                return Err(status_error(resp.status()));
            }

            let payload: Payload<Tournament> = resp.json().await?;
            Ok(payload.into_inner())
        };

        self.client.reported(fut).await
    }

    pub fn teams(&self, tournament_id: TournamentId) -> TeamsClient<'a> {
        TeamsClient::new(self.client, tournament_id)
    }

    pub fn stages(&self, tournament_id: TournamentId) -> StagesClient<'a> {
        StagesClient::new(self.client, tournament_id)
    }

    pub fn stage_items(&self, tournament_id: TournamentId) -> StageItemsClient<'a> {
        StageItemsClient::new(self.client, tournament_id)
    }
}
