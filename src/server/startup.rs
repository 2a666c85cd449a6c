use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::PostgresStore;

use crate::server::{config::Config, error::AppError, middleware::auth::Permission};

/// Connects to the Postgres database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is
/// up-to-date before the application accesses the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer backing admin authentication.
///
/// Sessions are stored in the same Postgres database as application data and
/// expire after seven days of inactivity.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<PostgresStore>, AppError> {
    let pool = db.get_postgres_connection_pool();
    let store = PostgresStore::new(pool.clone());

    store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {}", e)))?;

    Ok(SessionManagerLayer::new(store).with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Builds the shared HTTP client used by the LLM, payment, and mirror clients.
///
/// Redirects are disabled so a malicious response location cannot steer a
/// server-side request at internal services.
pub fn setup_reqwest_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap_or_default()
}

/// Creates the bootstrap admin account when the admin table is empty.
///
/// A fresh deployment has no way to log into the back office; if bootstrap
/// credentials are configured, the first startup creates a full-permission
/// account from them. When the table is empty and no credentials are
/// configured, a warning is logged and admin endpoints stay unreachable.
pub async fn ensure_bootstrap_admin(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<(), AppError> {
    use crate::server::{data::admin::AdminRepository, service::admin::AdminService};

    let repo = AdminRepository::new(db);
    if repo.count().await? > 0 {
        return Ok(());
    }

    let (Some(username), Some(password)) = (
        config.bootstrap_admin_username.as_deref(),
        config.bootstrap_admin_password.as_deref(),
    ) else {
        tracing::warn!(
            "No admin accounts exist and no bootstrap credentials are configured; \
             admin endpoints will be unreachable"
        );
        return Ok(());
    };

    let service = AdminService::new(db);
    let admin = service
        .create(
            username.to_string(),
            password.to_string(),
            "관리자".to_string(),
            Permission::all().iter().map(|p| p.as_str().to_string()).collect(),
        )
        .await?;

    tracing::info!("Created bootstrap admin account '{}'", admin.username);

    Ok(())
}
