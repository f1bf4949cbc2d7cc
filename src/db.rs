use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, Statement,
};

use crate::error::AppResult;

const SQLITE_PRAGMAS: [&str; 2] = ["PRAGMA journal_mode=WAL", "PRAGMA synchronous=NORMAL"];

/// Opens the store and creates the schema if it is absent.
pub async fn connect_and_migrate(
    database_url: &str,
    sql_echo: bool,
) -> AppResult<DatabaseConnection> {
    let mut opts = ConnectOptions::new(database_url);
    opts.connect_timeout(Duration::from_secs(10))
        .sqlx_logging(sql_echo);

    let db = Database::connect(opts).await?;
    migrate(&db).await?;
    Ok(db)
}

/// Applies pending migrations. Safe to call on an up-to-date store.
pub async fn migrate(db: &DatabaseConnection) -> AppResult<()> {
    if db.get_database_backend() == DbBackend::Sqlite {
        for pragma in SQLITE_PRAGMAS {
            db.execute(Statement::from_string(DbBackend::Sqlite, pragma.to_string())).await?;
        }
    }

    Migrator::up(db, None).await?;
    tracing::debug!("schema up to date");
    Ok(())
}
