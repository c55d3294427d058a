pub use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{DatabaseConnection, DbErr};

mod m20250830_000001_init; // keep filename + module name in sync

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250830_000001_init::Migration)]
    }
}

#[derive(Debug)]
pub enum MigrationCommand {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

/// Run a migration command against an already-open connection.
/// Used by both the CLI and the backend's test bootstrap.
pub async fn migrate_internal(
    db: &DatabaseConnection,
    command: MigrationCommand,
) -> Result<(), DbErr> {
    let backend = format!("{:?}", db.get_database_backend());
    tracing::info!(
        "▶ cmd={command:?}  backend={backend}  runner sees {} migration(s)",
        Migrator::migrations().len()
    );

    let result = match command {
        MigrationCommand::Up => Migrator::up(db, None).await,
        MigrationCommand::Down => Migrator::down(db, None).await,
        MigrationCommand::Fresh => Migrator::fresh(db).await,
        MigrationCommand::Reset => Migrator::reset(db).await,
        MigrationCommand::Refresh => Migrator::refresh(db).await,
        MigrationCommand::Status => Migrator::status(db).await,
    };

    match result {
        Ok(()) => {
            tracing::info!("✅ {command:?} OK for {backend}");
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ {command:?} failed for {backend}: {e}");
            Err(e)
        }
    }
}
