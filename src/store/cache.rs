use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use serenity::model::channel::Message;
use serenity::model::id::GuildId;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use super::custom_queue::{self, CustomQueues};
use super::guild_state::{GuildState, GuildStates, NowPlayingRef};
use super::JsonStore;
use crate::Error;

/// Per-guild playback state and custom queues, both persisted as JSON.
pub struct Cache {
    pub guilds: Arc<JsonStore<GuildStates>>,
    pub queues: Arc<JsonStore<CustomQueues>>,
}

impl Cache {
    pub async fn load(
        guilds_path: impl AsRef<Path>,
        queues_path: impl AsRef<Path>,
    ) -> Result<Self, Error> {
        let guilds: JsonStore<GuildStates> = JsonStore::load(guilds_path).await?;
        let queues: JsonStore<CustomQueues> = JsonStore::load(queues_path).await?;
        info!(
            "loaded state for {} guilds, custom queues for {} guilds",
            guilds.read().await.len(),
            queues.read().await.len()
        );
        Ok(Self {
            guilds: Arc::new(guilds),
            queues: Arc::new(queues),
        })
    }

    /// Writes both files. A failure on one does not skip the other; the
    /// first error is returned.
    pub async fn save_all(&self) -> Result<(), Error> {
        let queues = self.queues.save().await;
        let guilds = self.guilds.save().await;
        queues.and(guilds)
    }

    /// Best-effort save used on shutdown paths.
    pub async fn flush(&self) {
        match self.save_all().await {
            Ok(()) => info!("state saved"),
            Err(e) => warn!("saving state failed: {e}"),
        }
    }

    pub fn spawn_autosave(&self, period: Duration) -> Vec<JoinHandle<()>> {
        vec![
            Arc::clone(&self.guilds).spawn_autosave(period),
            Arc::clone(&self.queues).spawn_autosave(period),
        ]
    }

    /// Makes sure both maps have an entry for the guild. Returns true if
    /// anything was created.
    pub async fn ensure_guild(&self, guild_id: GuildId) -> bool {
        let created_state = {
            let mut guilds = self.guilds.write().await;
            let created = !guilds.contains_key(&guild_id);
            guilds.entry(guild_id).or_default();
            created
        };
        let created_queues = {
            let mut queues = self.queues.write().await;
            let created = !queues.contains_key(&guild_id);
            queues.entry(guild_id).or_default();
            created
        };
        created_state || created_queues
    }

    pub async fn guild_state(&self, guild_id: GuildId) -> GuildState {
        let guilds = self.guilds.read().await;
        guilds.get(&guild_id).cloned().unwrap_or_default()
    }

    pub async fn is_looping(&self, guild_id: GuildId) -> bool {
        let guilds = self.guilds.read().await;
        guilds.get(&guild_id).is_some_and(|g| g.looping)
    }

    pub async fn set_loop(&self, guild_id: GuildId, looping: bool) {
        let mut guilds = self.guilds.write().await;
        guilds.entry(guild_id).or_default().looping = looping;
    }

    /// Flips the loop flag and returns the new value.
    pub async fn toggle_loop(&self, guild_id: GuildId) -> bool {
        let mut guilds = self.guilds.write().await;
        let state = guilds.entry(guild_id).or_default();
        state.looping = !state.looping;
        state.looping
    }

    pub async fn remember_song(&self, guild_id: GuildId, title: &str) {
        let mut guilds = self.guilds.write().await;
        guilds.entry(guild_id).or_default().remember_song(title);
    }

    pub async fn song_suggestions(&self, guild_id: GuildId, partial: &str) -> Vec<String> {
        let guilds = self.guilds.read().await;
        guilds
            .get(&guild_id)
            .map(|g| g.suggestions(partial))
            .unwrap_or_default()
    }

    pub async fn set_now_playing(&self, guild_id: GuildId, message: Message) {
        let mut guilds = self.guilds.write().await;
        guilds.entry(guild_id).or_default().set_now_playing(message);
    }

    pub async fn clear_now_playing(&self, guild_id: GuildId) {
        let mut guilds = self.guilds.write().await;
        if let Some(state) = guilds.get_mut(&guild_id) {
            state.clear_now_playing();
        }
    }

    pub async fn now_playing(&self, guild_id: GuildId) -> (Option<NowPlayingRef>, Option<Message>) {
        let guilds = self.guilds.read().await;
        match guilds.get(&guild_id) {
            Some(state) => (state.message_id, state.message.clone()),
            None => (None, None),
        }
    }

    pub async fn queue_names(&self, guild_id: GuildId) -> Vec<String> {
        let queues = self.queues.read().await;
        custom_queue::names(&queues, guild_id)
    }

    pub async fn queue_songs(&self, guild_id: GuildId, name: &str) -> Option<Vec<String>> {
        let queues = self.queues.read().await;
        custom_queue::songs(&queues, guild_id, name)
    }

    pub async fn put_queue(&self, guild_id: GuildId, name: &str, songs: Vec<String>) {
        let mut queues = self.queues.write().await;
        custom_queue::put(&mut queues, guild_id, name, songs);
    }

    pub async fn push_to_queue(&self, guild_id: GuildId, name: &str, title: &str) -> Option<usize> {
        let mut queues = self.queues.write().await;
        custom_queue::push(&mut queues, guild_id, name, title)
    }
}
