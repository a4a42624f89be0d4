use mongodb::{Database, bson::doc};

use crate::common::{DatabaseError, DatabaseResult};

/// Ping the database. Only needs read access to `db`.
pub async fn check_health(db: &Database) -> DatabaseResult<()> {
    db.run_command(doc! { "ping": 1 })
        .await
        .map(|_| ())
        .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()))
}
