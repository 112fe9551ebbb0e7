use std::time::Duration;

use dioxus_logger::tracing;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use tower_sessions::{SessionManagerLayer, SessionStore};
use tower_sessions_redis_store::RedisStore;

use crate::server::{config::Config, error::Error, util::google::GoogleClient};

/// Build the Google OAuth2 client from the configured credentials and endpoints
pub fn build_google_client(config: &Config) -> Result<GoogleClient, Error> {
    GoogleClient::new(&config.google)
}

const MIGRATION_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Connect to the database and run migrations
///
/// The pool connects lazily, so an unreachable database does not stop the server from
/// starting. When the first migration run fails it is retried in the background until it
/// succeeds, and requests touching the store fail in the meantime. Only a malformed URL is
/// returned as an error.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false).connect_lazy(true);

    let db = Database::connect(opt).await?;

    match Migrator::up(&db, None).await {
        Ok(()) => tracing::info!("Database connected and migrated"),
        Err(err) => {
            tracing::error!(
                "Failed to run database migrations, retrying every {}s: {}",
                MIGRATION_RETRY_DELAY.as_secs(),
                err
            );
            tokio::spawn(migrate_until_ready(db.clone(), MIGRATION_RETRY_DELAY));
        }
    }

    Ok(db)
}

/// Run migrations every `delay` until one run succeeds
pub async fn migrate_until_ready(db: DatabaseConnection, delay: Duration) {
    let mut attempt: u32 = 1;

    loop {
        tokio::time::sleep(delay).await;
        attempt += 1;

        match Migrator::up(&db, None).await {
            Ok(()) => {
                tracing::info!(attempt, "Database migrated");
                return;
            }
            Err(err) => tracing::warn!(attempt, "Database migrations failed: {}", err),
        }
    }
}

/// Connect to Valkey/Redis and configure session management
pub async fn connect_to_session(
    config: &Config,
) -> Result<SessionManagerLayer<RedisStore<tower_sessions_redis_store::fred::prelude::Pool>>, Error>
{
    use tower_sessions_redis_store::fred::prelude::*;

    let redis_config = Config::from_url(&config.valkey_url)?;
    let pool = Pool::new(redis_config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    Ok(session_layer(RedisStore::new(pool), config.production))
}

/// Session cookie policy
///
/// Cookies are `HttpOnly` and expire after 7 days of inactivity. Production deployments sit
/// behind TLS and get `Secure` + `SameSite=None`; everything else uses `SameSite=Lax`.
pub fn session_layer<S>(store: S, production: bool) -> SessionManagerLayer<S>
where
    S: SessionStore + Clone,
{
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry};

    let same_site = if production {
        SameSite::None
    } else {
        SameSite::Lax
    };

    SessionManagerLayer::new(store)
        .with_secure(production)
        .with_same_site(same_site)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
}
