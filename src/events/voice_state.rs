use poise::serenity_prelude as serenity;
use tracing::info;

use crate::music::player;
use crate::{Data, Error};

/// Cleans up when the bot itself gets disconnected from voice.
pub async fn handle(
    ctx: &serenity::Context,
    old: &Option<serenity::VoiceState>,
    new: &serenity::VoiceState,
    data: &Data,
) -> Result<(), Error> {
    let guild_id = match new.guild_id {
        Some(id) => id,
        None => return Ok(()),
    };

    let was_connected = old.as_ref().is_some_and(|vs| vs.channel_id.is_some());
    if new.user_id != ctx.cache.current_user().id || !was_connected || new.channel_id.is_some() {
        return Ok(());
    }

    info!("disconnected from voice in {guild_id}, clearing queue");
    player::leave(ctx, data, guild_id).await?;
    data.cache.clear_now_playing(guild_id).await;
    Ok(())
}
