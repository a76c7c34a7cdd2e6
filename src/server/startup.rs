use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::PostgresStore;

use crate::server::{config::Config, error::AppError};

/// Connects to the primary database and runs pending migrations.
///
/// Establishes a connection pool using the primary URL from configuration, then runs all
/// pending SeaORM migrations so the schema is up-to-date before the server accepts
/// requests.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};

    let db = connect(&config.database_url).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connects to the read replica when one is configured.
///
/// Migrations are never run against the replica.
pub async fn connect_to_replica(config: &Config) -> Result<Option<DatabaseConnection>, AppError> {
    match &config.replica_url {
        Some(url) => {
            let db = connect(url).await?;
            tracing::info!("Read replica connected");
            Ok(Some(db))
        }
        None => Ok(None),
    }
}

async fn connect(url: &str) -> Result<DatabaseConnection, AppError> {
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(url);
    opt.sqlx_logging(false);

    Ok(Database::connect(opt).await?)
}

/// Builds the session layer backed by a Postgres session table on the primary database.
///
/// Creates the session table when missing. Sessions expire after one day of inactivity.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<PostgresStore>, AppError> {
    let pool = db.get_postgres_connection_pool();
    let session_store = PostgresStore::new(pool.clone());

    session_store.migrate().await?;

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(1))))
}
