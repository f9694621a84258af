use tracing_subscriber::EnvFilter;

use crate::{
    cache::GuildCache, config::Config, data::Database, error::AppError,
    service::guild::GuildService,
};

/// Installs the global tracing subscriber.
///
/// The filter defaults to `info` and can be overridden through `RUST_LOG`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(Database)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<Database, AppError> {
    let db = Database::connect(&config.database_url).await?;

    Ok(db)
}

/// Fills the guild cache from the store before the gateway connects.
pub async fn load_guild_cache(db: &Database) -> Result<GuildCache, AppError> {
    let cache = GuildCache::new();
    let count = GuildService::new(db, &cache).load().await?;

    tracing::info!("Cached configuration of {} guilds", count);

    Ok(cache)
}

/// HTTP client for third-party APIs.
///
/// Redirects are disabled; none of the APIs the bot calls redirect.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .user_agent(concat!("guildbot/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(client)
}
