use sea_orm::{Database, DatabaseConnection};

use crate::config::db::{db_url, DbProfile};
use crate::error::AppError;

/// Connect to the database for the given profile.
/// This function does NOT run any migrations.
pub async fn connect_db(profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    let database_url = db_url(profile)?;
    let conn = Database::connect(&database_url).await?;
    Ok(conn)
}
