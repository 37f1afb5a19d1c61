use super::stage_items::StageItem;

use crate::id::{StageId, TournamentId};
use crate::payload::Payload;
use crate::{status_error, Client, Result};

use serde::{Deserialize, Serialize};

/// A stage of a tournament together with the stage items it contains.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Stage {
    #[cfg_attr(feature = "server", serde(skip_deserializing))]
    pub id: StageId,
    pub name: String,
    pub is_active: bool,
    #[serde(default)]
    pub stage_items: Vec<StageItem>,
}

#[derive(Clone, Debug)]
pub struct StagesClient<'a> {
    client: &'a Client,
    tournament_id: TournamentId,
}

impl<'a> StagesClient<'a> {
    pub(crate) fn new(client: &'a Client, tournament_id: TournamentId) -> Self {
        Self {
            client,
            tournament_id,
        }
    }

    /// Returns all stages of the tournament, including their stage items.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self) -> Result<Vec<Stage>> {
        let fut = async {
            let uri = format!("/tournaments/{}/stages", self.tournament_id);

            let req = self.client.request().get().uri(&uri).build();

            let resp = self.client.send(req).await?;
            if !resp.is_success() {
                return Err(status_error(resp.status()));
            }

            let payload: Payload<Vec<Stage>> = resp.json().await?;
            Ok(payload.into_inner())
        };

        self.client.reported(fut).await
    }
}
