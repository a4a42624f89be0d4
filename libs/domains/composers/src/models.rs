use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Composer entity, stored in the `composers` collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Composer {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

/// Body of create and full-replace requests
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComposerInput {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
}

impl Composer {
    pub fn new(input: ComposerInput) -> Self {
        Self::with_id(Uuid::now_v7(), input)
    }

    /// The document that replaces composer `id`
    pub fn with_id(id: Uuid, input: ComposerInput) -> Self {
        Self {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
        }
    }
}
