//! Migrate command - Database schema management.

use crate::cli::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::ChatResult;
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> ChatResult<()> {
    let db = Database::connect_without_migrations(&config).await?;

    match args.action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            tracing::info!("Migrations applied");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            tracing::info!("Last migration rolled back");
        }
        MigrateAction::Status => {
            for (name, applied) in db.migration_status().await? {
                let marker = if applied { "applied" } else { "pending" };
                tracing::info!("{:<10} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            tracing::info!("Database reset and migrations re-applied");
        }
    }

    Ok(())
}
