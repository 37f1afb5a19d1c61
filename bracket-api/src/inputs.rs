//! Resolution of raw input descriptors into display-ready options.
//!
//! A stage item slot is fed either by a fixed team or by the winner of
//! another stage item at a given position. The backend only returns the raw
//! descriptors; resolving them against the team and stage item lookups
//! produces the `(value, label)` pairs a choice control can render.

use std::collections::HashMap;

use crate::fetch::FetchData;
use crate::id::{StageItemId, TeamId};
use crate::tournaments::stage_items::{StageItem, StageItemInputOption};
use crate::tournaments::stages::Stage;
use crate::tournaments::teams::Team;
use crate::{Error, Result};

/// A display-ready choice for a stage item input slot.
///
/// `value` is the form token: the team id for direct team inputs, or
/// `"<stage item id>_<position>"` for winner inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputOption {
    pub value: String,
    pub label: String,
}

/// Builds a team lookup keyed by id from a fetched team list.
pub fn team_lookup(teams: &[Team]) -> HashMap<TeamId, Team> {
    teams.iter().map(|team| (team.id, team.clone())).collect()
}

/// Builds a stage item lookup across all stage items of all stages.
pub fn stage_item_lookup(stages: &[Stage]) -> HashMap<StageItemId, StageItem> {
    stages
        .iter()
        .flat_map(|stage| &stage.stage_items)
        .map(|item| (item.id, item.clone()))
        .collect()
}

/// Resolves the fetched input descriptors into an ordered option list.
///
/// Returns `Ok(None)` while the upstream fetch has not completed
/// successfully; callers must treat that as "no data yet", not as an empty
/// list. Descriptors that cannot be fully resolved (no team id, or a team or
/// winner source missing from the lookups) are dropped; the returned list is
/// compact and preserves descriptor order.
///
/// # Errors
///
/// Returns [`Error::MissingWinnerPosition`] if a descriptor names a winner
/// source without a winner position. This is a backend contract breach and
/// is never resolved by omission.
pub fn resolve_available_inputs(
    options: &FetchData<Vec<StageItemInputOption>>,
    teams: &HashMap<TeamId, Team>,
    stage_items: &HashMap<StageItemId, StageItem>,
) -> Result<Option<Vec<InputOption>>> {
    let options = match options.value() {
        Some(options) => options,
        None => return Ok(None),
    };

    let mut resolved = Vec::with_capacity(options.len());
    for option in options {
        if let Some(option) = resolve_option(option, teams, stage_items)? {
            resolved.push(option);
        }
    }

    Ok(Some(resolved))
}

fn resolve_option(
    option: &StageItemInputOption,
    teams: &HashMap<TeamId, Team>,
    stage_items: &HashMap<StageItemId, StageItem>,
) -> Result<Option<InputOption>> {
    let source = match option.winner_from_stage_item_id {
        Some(source) => source,
        None => {
            let team_id = match option.team_id {
                Some(team_id) => team_id,
                None => return Ok(None),
            };

            let team = match teams.get(&team_id) {
                Some(team) => team,
                None => {
                    log::debug!("dropping input with unknown team {}", team_id);
                    return Ok(None);
                }
            };

            return Ok(Some(InputOption {
                value: team_id.to_string(),
                label: team.name.clone(),
            }));
        }
    };

    let position = option
        .winner_position
        .ok_or(Error::MissingWinnerPosition(source))?;

    let stage_item = match stage_items.get(&source) {
        Some(stage_item) => stage_item,
        None => {
            log::debug!("dropping input with unknown stage item {}", source);
            return Ok(None);
        }
    };

    Ok(Some(InputOption {
        value: format!("{}_{}", source, position),
        label: format_position(position, &stage_item.name),
    }))
}

/// Renders the label for a winner input, e.g. `Winner of Semifinal` or
/// `3rd place of Group A`.
pub fn format_position(position: u64, name: &str) -> String {
    match position {
        1 => format!("Winner of {}", name),
        position => format!("{} place of {}", ordinal(position), name),
    }
}

fn ordinal(n: u64) -> String {
    let suffix = if (11..=13).contains(&(n % 100)) {
        "th"
    } else {
        match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };

    format!("{}{}", n, suffix)
}

#[cfg(test)]
mod tests {
    use super::{format_position, ordinal, resolve_available_inputs, team_lookup, InputOption};
    use crate::fetch::FetchData;
    use crate::id::{RoundId, StageId, StageItemId, TeamId};
    use crate::tournaments::stage_items::{Round, StageItem, StageItemInputOption, StageItemKind};
    use crate::tournaments::stages::Stage;
    use crate::tournaments::teams::Team;
    use crate::Error;

    use std::collections::HashMap;

    use chrono::{TimeZone, Utc};

    fn team(id: u64, name: &str) -> Team {
        Team {
            id: TeamId(id),
            name: name.to_owned(),
            active: true,
            created: Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn stage_item(id: u64, name: &str) -> StageItem {
        StageItem {
            id: StageItemId(id),
            stage_id: StageId(1),
            name: name.to_owned(),
            kind: StageItemKind::SingleElimination,
            team_count: 2,
            rounds: vec![Round {
                id: RoundId(1),
                name: "Round 1".to_owned(),
                is_draft: false,
            }],
        }
    }

    fn teams(entries: Vec<Team>) -> HashMap<TeamId, Team> {
        team_lookup(&entries)
    }

    fn stage_items(entries: Vec<StageItem>) -> HashMap<StageItemId, StageItem> {
        entries.into_iter().map(|item| (item.id, item)).collect()
    }

    fn option(value: &str, label: &str) -> InputOption {
        InputOption {
            value: value.to_owned(),
            label: label.to_owned(),
        }
    }

    #[test]
    fn test_resolve_team_input() {
        let teams = teams(vec![team(5, "Falcons")]);
        let stage_items = stage_items(Vec::new());

        let fetch = FetchData::Ready(vec![StageItemInputOption {
            team_id: Some(TeamId(5)),
            ..Default::default()
        }]);

        let resolved = resolve_available_inputs(&fetch, &teams, &stage_items)
            .unwrap()
            .unwrap();
        assert_eq!(resolved, vec![option("5", "Falcons")]);
    }

    #[test]
    fn test_drop_empty_and_dangling_descriptors() {
        let teams = teams(vec![team(5, "Falcons")]);
        let stage_items = stage_items(Vec::new());

        let fetch = FetchData::Ready(vec![
            // Neither source set.
            StageItemInputOption::default(),
            // Unknown team.
            StageItemInputOption {
                team_id: Some(TeamId(99)),
                ..Default::default()
            },
            // Unknown winner source.
            StageItemInputOption {
                winner_from_stage_item_id: Some(StageItemId(7)),
                winner_position: Some(1),
                ..Default::default()
            },
        ]);

        let resolved = resolve_available_inputs(&fetch, &teams, &stage_items)
            .unwrap()
            .unwrap();
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_resolve_winner_input() {
        let teams = teams(Vec::new());
        let stage_items = stage_items(vec![stage_item(2, "Semifinal")]);

        let fetch = FetchData::Ready(vec![
            StageItemInputOption {
                winner_from_stage_item_id: Some(StageItemId(2)),
                winner_position: Some(1),
                ..Default::default()
            },
            StageItemInputOption {
                winner_from_stage_item_id: Some(StageItemId(2)),
                winner_position: Some(2),
                ..Default::default()
            },
        ]);

        let resolved = resolve_available_inputs(&fetch, &teams, &stage_items)
            .unwrap()
            .unwrap();
        assert_eq!(
            resolved,
            vec![
                option("2_1", "Winner of Semifinal"),
                option("2_2", "2nd place of Semifinal"),
            ]
        );
    }

    #[test]
    fn test_missing_winner_position_fails() {
        let teams = teams(Vec::new());
        let stage_items = stage_items(vec![stage_item(2, "Semifinal")]);

        let fetch = FetchData::Ready(vec![StageItemInputOption {
            winner_from_stage_item_id: Some(StageItemId(2)),
            ..Default::default()
        }]);

        let err = resolve_available_inputs(&fetch, &teams, &stage_items).unwrap_err();
        assert!(matches!(err, Error::MissingWinnerPosition(StageItemId(2))));
    }

    #[test]
    fn test_pending_fetch_is_not_an_empty_list() {
        let teams = teams(Vec::new());
        let stage_items = stage_items(Vec::new());

        let fetch = FetchData::Pending;
        assert!(resolve_available_inputs(&fetch, &teams, &stage_items)
            .unwrap()
            .is_none());

        let fetch = FetchData::Failed(Error::NotFound);
        assert!(resolve_available_inputs(&fetch, &teams, &stage_items)
            .unwrap()
            .is_none());

        let fetch = FetchData::Ready(Vec::new());
        assert_eq!(
            resolve_available_inputs(&fetch, &teams, &stage_items).unwrap(),
            Some(Vec::new())
        );
    }

    #[test]
    fn test_resolve_preserves_order_and_is_pure() {
        let teams = teams(vec![team(5, "Falcons")]);
        let stage_items = stage_items(vec![stage_item(2, "Semifinal")]);

        let fetch = FetchData::Ready(vec![
            StageItemInputOption {
                team_id: Some(TeamId(5)),
                ..Default::default()
            },
            StageItemInputOption {
                winner_from_stage_item_id: Some(StageItemId(2)),
                winner_position: Some(1),
                ..Default::default()
            },
            StageItemInputOption {
                team_id: Some(TeamId(99)),
                ..Default::default()
            },
        ]);

        let expected = vec![
            option("5", "Falcons"),
            option("2_1", "Winner of Semifinal"),
        ];

        let first = resolve_available_inputs(&fetch, &teams, &stage_items)
            .unwrap()
            .unwrap();
        let second = resolve_available_inputs(&fetch, &teams, &stage_items)
            .unwrap()
            .unwrap();

        assert_eq!(first, expected);
        assert_eq!(second, expected);
    }

    #[test]
    fn test_descriptor_with_both_sources_resolves_as_winner() {
        let teams = teams(vec![team(5, "Falcons")]);
        let stage_items = stage_items(vec![stage_item(2, "Semifinal")]);

        let fetch = FetchData::Ready(vec![StageItemInputOption {
            team_id: Some(TeamId(5)),
            winner_from_stage_item_id: Some(StageItemId(2)),
            winner_position: Some(1),
        }]);

        let resolved = resolve_available_inputs(&fetch, &teams, &stage_items)
            .unwrap()
            .unwrap();
        assert_eq!(resolved, vec![option("2_1", "Winner of Semifinal")]);
    }

    #[test]
    fn test_format_position() {
        assert_eq!(format_position(1, "Semifinal"), "Winner of Semifinal");
        assert_eq!(format_position(2, "Group A"), "2nd place of Group A");
        assert_eq!(format_position(3, "Group A"), "3rd place of Group A");
        assert_eq!(format_position(4, "Group A"), "4th place of Group A");
    }

    #[test]
    fn test_ordinal_teens() {
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(12), "12th");
        assert_eq!(ordinal(13), "13th");
        assert_eq!(ordinal(21), "21st");
        assert_eq!(ordinal(22), "22nd");
        assert_eq!(ordinal(23), "23rd");
    }
}
