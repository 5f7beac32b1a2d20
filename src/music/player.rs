use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use poise::serenity_prelude as serenity;
use serenity::http::Http;
use serenity::model::id::{ChannelId, GuildId};
use songbird::events::{Event, EventContext, EventHandler, TrackEvent};
use songbird::input::YoutubeDl;
use songbird::tracks::PlayMode;
use songbird::Call;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use super::queue;
use super::{QueueManager, Song};
use crate::store::Cache;
use crate::utils::now_playing;
use crate::{Data, Error};

/// Everything needed to drive playback in one guild's voice call.
#[derive(Clone)]
pub struct Player {
    pub guild_id: GuildId,
    pub queue_manager: QueueManager,
    pub http_client: reqwest::Client,
    pub cache: Arc<Cache>,
    pub http: Arc<Http>,
    pub call: Arc<Mutex<Call>>,
}

async fn voice_manager(ctx: &serenity::Context) -> Result<Arc<songbird::Songbird>, Error> {
    Ok(songbird::get(ctx)
        .await
        .ok_or("songbird is not registered")?)
}

impl Player {
    fn new(ctx: &serenity::Context, data: &Data, guild_id: GuildId, call: Arc<Mutex<Call>>) -> Self {
        Self {
            guild_id,
            queue_manager: data.queue_manager.clone(),
            http_client: data.http_client.clone(),
            cache: Arc::clone(&data.cache),
            http: Arc::clone(&ctx.http),
            call,
        }
    }

    /// The player for a call the bot is already in, if any.
    pub async fn connected(
        ctx: &serenity::Context,
        data: &Data,
        guild_id: GuildId,
    ) -> Result<Option<Self>, Error> {
        let manager = voice_manager(ctx).await?;
        Ok(manager
            .get(guild_id)
            .map(|call| Self::new(ctx, data, guild_id, call)))
    }

    /// Joins `channel_id` (a no-op when already there) and returns the player.
    pub async fn join(
        ctx: &serenity::Context,
        data: &Data,
        guild_id: GuildId,
        channel_id: ChannelId,
    ) -> Result<Self, Error> {
        let manager = voice_manager(ctx).await?;
        if let Some(call) = manager.get(guild_id) {
            if call.lock().await.current_channel().is_some() {
                return Ok(Self::new(ctx, data, guild_id, call));
            }
        }
        let call = manager.join(guild_id, channel_id).await?;
        Ok(Self::new(ctx, data, guild_id, call))
    }

    pub async fn play_song(&self, song: &Song) -> Result<(), Error> {
        let src = YoutubeDl::new(self.http_client.clone(), song.url.clone());
        let volume = queue::get_volume(&self.queue_manager, self.guild_id).await;

        // Forget the old handle first so its end event is seen as a replacement.
        {
            let mut queues = self.queue_manager.write().await;
            if let Some(q) = queues.get_mut(&self.guild_id) {
                q.track_handle = None;
            }
        }

        let track_handle = {
            let mut handler = self.call.lock().await;
            let track_handle = handler.play_only(src.into());
            let _ = track_handle.set_volume(volume);

            track_handle.add_event(
                Event::Track(TrackEvent::End),
                TrackEndNotifier {
                    player: self.clone(),
                },
            )?;

            track_handle
        };

        {
            let mut queues = self.queue_manager.write().await;
            queues.entry(self.guild_id).or_default().track_handle = Some(track_handle);
        }

        info!("now playing in {}: {}", self.guild_id, song.title);
        Ok(())
    }

    /// Starts the next song, or the same one again when it ended on its own
    /// with looping on. Returns what is playing afterwards.
    pub async fn play_next(&self, was_skipped: bool) -> Result<Option<Song>, Error> {
        let repeat = !was_skipped && self.cache.is_looping(self.guild_id).await;
        let next = queue::get_next_song(&self.queue_manager, self.guild_id, repeat).await;

        match &next {
            Some(song) => self.play_song(song).await?,
            None => {
                info!("queue finished in {}", self.guild_id);
                {
                    let mut queues = self.queue_manager.write().await;
                    if let Some(q) = queues.get_mut(&self.guild_id) {
                        q.track_handle = None;
                    }
                }
                self.call.lock().await.stop();
            }
        }

        Ok(next)
    }

    /// Queues a song, or starts it right away when nothing is playing.
    /// Returns true if it started.
    pub async fn enqueue(&self, song: Song) -> Result<bool, Error> {
        let idle = queue::is_empty(&self.queue_manager, self.guild_id).await;
        queue::add_song(&self.queue_manager, self.guild_id, song).await;
        if idle {
            self.play_next(true).await?;
        }
        Ok(idle)
    }

    pub async fn pause(&self) -> bool {
        match queue::get_handle(&self.queue_manager, self.guild_id).await {
            Some(h) => h.pause().is_ok(),
            None => false,
        }
    }

    pub async fn resume(&self) -> bool {
        match queue::get_handle(&self.queue_manager, self.guild_id).await {
            Some(h) => h.play().is_ok(),
            None => false,
        }
    }

    pub async fn position(&self) -> Option<Duration> {
        let handle = queue::get_handle(&self.queue_manager, self.guild_id).await?;
        handle.get_info().await.ok().map(|info| info.position)
    }

    pub async fn seek(&self, position: Duration) -> Result<(), Error> {
        let handle = queue::get_handle(&self.queue_manager, self.guild_id)
            .await
            .ok_or("nothing is playing")?;
        handle
            .seek_async(position)
            .await
            .map_err(|e| format!("seek failed: {e}"))?;
        Ok(())
    }

    pub async fn refresh_message(&self) {
        if let Err(e) =
            now_playing::refresh(&self.http, &self.queue_manager, &self.cache, self.guild_id).await
        {
            warn!("could not refresh player message in {}: {e}", self.guild_id);
        }
    }
}

pub async fn is_paused(queue_manager: &QueueManager, guild_id: GuildId) -> bool {
    match queue::get_handle(queue_manager, guild_id).await {
        Some(h) => h
            .get_info()
            .await
            .map(|info| info.playing == PlayMode::Pause)
            .unwrap_or(false),
        None => false,
    }
}

/// Clears the queue and leaves voice. Returns false if the bot was not in a call.
pub async fn leave(ctx: &serenity::Context, data: &Data, guild_id: GuildId) -> Result<bool, Error> {
    let manager = voice_manager(ctx).await?;
    queue::clear(&data.queue_manager, guild_id).await;
    if manager.get(guild_id).is_none() {
        return Ok(false);
    }
    manager.remove(guild_id).await?;
    Ok(true)
}

struct TrackEndNotifier {
    player: Player,
}

#[async_trait]
impl EventHandler for TrackEndNotifier {
    async fn act(&self, ctx: &EventContext<'_>) -> Option<Event> {
        let current = queue::get_handle(&self.player.queue_manager, self.player.guild_id).await?;

        // Replaced or stopped tracks also end; only the current one moves the queue.
        if let EventContext::Track(tracks) = ctx {
            if !tracks.iter().any(|(_, h)| h.uuid() == current.uuid()) {
                return None;
            }
        }

        let player = self.player.clone();
        tokio::spawn(async move {
            if let Err(e) = player.play_next(false).await {
                error!("failed to play next song: {e}");
            }
            player.refresh_message().await;
        });

        None
    }
}
