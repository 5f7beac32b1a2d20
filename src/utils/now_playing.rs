use std::sync::Arc;

use serenity::builder::{CreateActionRow, CreateEmbed, EditMessage};
use serenity::http::Http;
use serenity::model::id::GuildId;

use super::{components, embed};
use crate::music::{player, queue, QueueManager};
use crate::store::Cache;
use crate::Error;

/// Embed and controls for the player message as things stand right now.
pub async fn render(
    queue_manager: &QueueManager,
    cache: &Cache,
    guild_id: GuildId,
) -> (CreateEmbed, Vec<CreateActionRow>) {
    let (current, upcoming) = queue::get_queue_list(queue_manager, guild_id).await;
    let looping = cache.is_looping(guild_id).await;
    let paused = player::is_paused(queue_manager, guild_id).await;
    let volume = queue::volume_percent(queue::get_volume(queue_manager, guild_id).await);
    let names = cache.queue_names(guild_id).await;

    (
        embed::player(current.as_ref(), &upcoming, looping, paused, volume),
        components::player_components(paused, looping, &names),
    )
}

/// Re-renders the guild's tracked player message, fetching it first if only
/// the stored reference survived a restart.
pub async fn refresh(
    http: &Arc<Http>,
    queue_manager: &QueueManager,
    cache: &Cache,
    guild_id: GuildId,
) -> Result<(), Error> {
    let (reference, live) = cache.now_playing(guild_id).await;
    let Some(reference) = reference else {
        return Ok(());
    };

    let mut message = match live {
        Some(message) => message,
        None => match reference.channel_id.message(http, reference.message_id).await {
            Ok(message) => message,
            Err(e) => {
                cache.clear_now_playing(guild_id).await;
                return Err(format!("player message is gone: {e}").into());
            }
        },
    };

    let (embed, components) = render(queue_manager, cache, guild_id).await;
    message
        .edit(http, EditMessage::new().embed(embed).components(components))
        .await?;
    cache.set_now_playing(guild_id, message).await;
    Ok(())
}
