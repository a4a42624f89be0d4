use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A role held by a person, e.g. `{"text": "Conductor"}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Role {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Dependent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Person entity, stored in the `people` collection.
///
/// `roles` and `dependents` keep the order they were submitted in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub dependents: Vec<Dependent>,
    /// Free-form date string, stored as given
    #[schema(example = "1685-03-21")]
    pub birth_date: String,
}

/// Body of `POST /persons`
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePerson {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub dependents: Vec<Dependent>,
    #[validate(length(min = 1))]
    pub birth_date: String,
}

impl Person {
    pub fn new(input: CreatePerson) -> Self {
        Self {
            id: Uuid::now_v7(),
            first_name: input.first_name,
            last_name: input.last_name,
            roles: input.roles,
            dependents: input.dependents,
            birth_date: input.birth_date,
        }
    }
}
