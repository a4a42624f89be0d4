use axum::Router;
use domain_composers::{ComposerService, MongoComposerRepository, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = MongoComposerRepository::new(state.db.clone());
    handlers::router(ComposerService::new(repository))
}
