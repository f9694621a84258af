//! Shared state handed to every command and event handler.
//!
//! Built once in the framework's setup hook after the gateway reports ready, then
//! borrowed through `ctx.data()`. Every field is either cheap to clone or behind
//! interior mutability, since handlers run concurrently on the same instance.

use std::sync::atomic::AtomicU64;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::{cache::GuildCache, data::Database};

pub struct Data {
    /// Counting wrapper around the connection pool.
    pub db: Database,

    /// Per-guild prefix and star channel cache.
    pub guilds: GuildCache,

    /// HTTP client for third-party APIs (Piston, TheCatAPI).
    pub http_client: reqwest::Client,

    /// Key for TheCatAPI; the `kitties` command reports failure without it.
    pub cat_api_key: Option<String>,

    pub started_at: DateTime<Utc>,

    /// Completed command invocations since start.
    pub invokes: AtomicU64,

    /// Language names accepted by Piston, fetched on first use of `run`.
    pub piston_languages: RwLock<Vec<String>>,
}
