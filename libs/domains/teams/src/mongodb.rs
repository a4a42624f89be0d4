//! MongoDB implementation of TeamRepository

use async_trait::async_trait;
use database::mongodb::id_filter;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc, to_bson},
    options::{FindOneAndUpdateOptions, ReturnDocument},
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::TeamResult;
use crate::models::{CreateTeam, Player, Team, UpdateTeam};
use crate::repository::TeamRepository;

pub const TEAMS_COLLECTION: &str = "teams";

pub struct MongoTeamRepository {
    collection: Collection<Team>,
}

impl MongoTeamRepository {
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<Team>(TEAMS_COLLECTION);
        Self { collection }
    }

    /// `$set` document for the fields present in `input`
    fn build_set(input: &UpdateTeam) -> Document {
        let mut set = doc! {};
        if let Some(ref name) = input.name {
            set.insert("name", name);
        }
        if let Some(ref mascot) = input.mascot {
            set.insert("mascot", mascot);
        }
        set
    }

    async fn update_and_return(&self, id: Uuid, update: Document) -> TeamResult<Option<Team>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let team = self
            .collection
            .find_one_and_update(id_filter(id), update)
            .with_options(options)
            .await?;
        Ok(team)
    }
}

#[async_trait]
impl TeamRepository for MongoTeamRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> TeamResult<Vec<Team>> {
        let cursor = self.collection.find(doc! {}).sort(doc! { "_id": 1 }).await?;
        let teams: Vec<Team> = cursor.try_collect().await?;
        Ok(teams)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> TeamResult<Option<Team>> {
        let team = self.collection.find_one(id_filter(id)).await?;
        Ok(team)
    }

    #[instrument(skip(self, input))]
    async fn create(&self, input: CreateTeam) -> TeamResult<Team> {
        let team = Team::new(input);

        self.collection.insert_one(&team).await?;

        tracing::info!(team_id = %team.id, "Team created successfully");
        Ok(team)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: Uuid, input: UpdateTeam) -> TeamResult<Option<Team>> {
        let set = Self::build_set(&input);
        // An empty `$set` is rejected by the server.
        if set.is_empty() {
            return self.get_by_id(id).await;
        }

        let updated = self.update_and_return(id, doc! { "$set": set }).await?;
        if updated.is_some() {
            tracing::info!(team_id = %id, "Team updated successfully");
        }
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> TeamResult<Option<Team>> {
        let deleted = self.collection.find_one_and_delete(id_filter(id)).await?;

        if deleted.is_some() {
            tracing::info!(team_id = %id, "Team deleted successfully");
        }
        Ok(deleted)
    }

    #[instrument(skip(self, player))]
    async fn add_player(&self, id: Uuid, player: Player) -> TeamResult<Option<Team>> {
        let update = doc! { "$push": { "players": to_bson(&player)? } };

        let updated = self.update_and_return(id, update).await?;
        if let Some(ref team) = updated {
            tracing::info!(team_id = %id, roster_size = team.players.len(), "Player assigned");
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::to_raw_document_buf;
    use test_utils::{TestDataBuilder, TestMongo};

    fn player(first: &str, salary: f64) -> Player {
        Player {
            first_name: first.to_string(),
            last_name: "Smith".to_string(),
            salary,
        }
    }

    #[test]
    fn test_build_set_only_includes_present_fields() {
        let set = MongoTeamRepository::build_set(&UpdateTeam {
            name: None,
            mascot: Some("Owl".to_string()),
        });

        assert!(!set.contains_key("name"));
        assert_eq!(set.get_str("mascot").unwrap(), "Owl");
    }

    #[test]
    fn test_id_filter_matches_stored_team() {
        let team = Team::new(CreateTeam {
            name: Some("Owls".to_string()),
            players: vec![player("Ann", 10.0)],
            ..Default::default()
        });
        let stored = to_raw_document_buf(&team).unwrap().to_document().unwrap();

        assert_eq!(id_filter(team.id).get("_id"), stored.get("_id"));
    }

    #[test]
    fn test_build_set_empty_update() {
        assert!(MongoTeamRepository::build_set(&UpdateTeam::default()).is_empty());
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_roster_keeps_assignment_order() {
        let mongo = TestMongo::new().await;
        let repo = MongoTeamRepository::new(mongo.database());
        let builder = TestDataBuilder::from_test_name("test_roster_keeps_assignment_order");

        let team = repo
            .create(CreateTeam {
                name: Some(builder.name("team", "roster")),
                ..Default::default()
            })
            .await
            .unwrap();

        repo.add_player(team.id, player("Ann", 10.0)).await.unwrap();
        let updated = repo
            .add_player(team.id, player("Bob", 20.0))
            .await
            .unwrap()
            .unwrap();

        let names: Vec<_> = updated.players.iter().map(|p| p.first_name.as_str()).collect();
        assert_eq!(names, ["Ann", "Bob"]);
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_partial_update_and_delete() {
        let mongo = TestMongo::new().await;
        let repo = MongoTeamRepository::new(mongo.database());

        let team = repo
            .create(CreateTeam {
                name: Some("Owls".to_string()),
                mascot: Some("Owl".to_string()),
                players: vec![player("Ann", 10.0)],
            })
            .await
            .unwrap();

        let updated = repo
            .update(
                team.id,
                UpdateTeam {
                    mascot: Some("Barn Owl".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.name.as_deref(), Some("Owls"));
        assert_eq!(updated.mascot.as_deref(), Some("Barn Owl"));
        assert_eq!(updated.players.len(), 1);

        let deleted = repo.delete(team.id).await.unwrap().unwrap();
        assert_eq!(deleted, updated);
        assert!(repo.add_player(team.id, player("Cy", 1.0)).await.unwrap().is_none());
    }
}
