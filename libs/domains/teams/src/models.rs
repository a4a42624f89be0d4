use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Player embedded in a team's roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(range(min = 0.0))]
    pub salary: f64,
}

/// Team entity, stored in the `teams` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mascot: Option<String>,
    /// Roster in assignment order
    #[serde(default)]
    pub players: Vec<Player>,
}

/// Body of `POST /teams`
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeam {
    pub name: Option<String>,
    pub mascot: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub players: Vec<Player>,
}

/// Body of `PUT /teams/{id}`; absent fields are left unchanged.
/// The roster is managed through the players routes only.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeam {
    pub name: Option<String>,
    pub mascot: Option<String>,
}

impl UpdateTeam {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.mascot.is_none()
    }
}

impl Team {
    pub fn new(input: CreateTeam) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            mascot: input.mascot,
            players: input.players,
        }
    }
}
