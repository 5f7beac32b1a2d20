use std::path::PathBuf;
use std::time::Duration;

use serenity::model::id::GuildId;

pub const DEFAULT_AUTOSAVE_SECS: u64 = 300;

pub struct Config {
    pub discord_token: String,
    pub data_path: PathBuf,
    pub queues_path: PathBuf,
    pub autosave_interval: Duration,
    /// Register commands in this guild only, which takes effect immediately.
    pub guild_id: Option<GuildId>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            discord_token: std::env::var("DISCORD_TOKEN")
                .expect("DISCORD_TOKEN environment variable is required"),
            data_path: std::env::var("DJ_DATA_PATH")
                .unwrap_or_else(|_| "./data.json".to_string())
                .into(),
            queues_path: std::env::var("DJ_QUEUES_PATH")
                .unwrap_or_else(|_| "./queues.json".to_string())
                .into(),
            autosave_interval: Duration::from_secs(
                std::env::var("DJ_AUTOSAVE_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .filter(|secs| *secs > 0)
                    .unwrap_or(DEFAULT_AUTOSAVE_SECS),
            ),
            guild_id: std::env::var("DJ_GUILD_ID")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|id| *id != 0)
                .map(GuildId::new),
        }
    }
}
