mod bot;
mod cache;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let guilds = startup::load_guild_cache(&db).await?;
    let http_client = startup::setup_reqwest_client()?;

    tracing::info!("Starting bot");

    bot::start::start_bot(&config, db, guilds, http_client).await
}
