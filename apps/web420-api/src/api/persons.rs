use axum::Router;
use domain_persons::{MongoPersonRepository, PersonService, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = MongoPersonRepository::new(state.db.clone());
    handlers::router(PersonService::new(repository))
}
