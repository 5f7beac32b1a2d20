use poise::CreateReply;
use tracing::warn;

use crate::music::player;
use crate::utils::embed;
use crate::{Context, Error};

async fn stop_impl(ctx: Context<'_>) -> Result<(), Error> {
    let guild_id = ctx.guild_id().ok_or("only usable in a server")?;

    if !player::leave(ctx.serenity_context(), ctx.data(), guild_id).await? {
        ctx.send(CreateReply::default().embed(embed::error("Nothing is playing.")))
            .await?;
        return Ok(());
    }

    let (tracked, _) = ctx.data().cache.now_playing(guild_id).await;
    ctx.data().cache.clear_now_playing(guild_id).await;
    if let Some(reference) = tracked {
        if let Err(e) = reference
            .channel_id
            .delete_message(&ctx.serenity_context().http, reference.message_id)
            .await
        {
            warn!("could not delete player message: {e}");
        }
    }

    ctx.say("Stopped playback and left the voice channel.").await?;

    Ok(())
}

/// Stops playback, clears the queue and leaves the voice channel
#[poise::command(slash_command, guild_only)]
pub async fn stop(ctx: Context<'_>) -> Result<(), Error> {
    stop_impl(ctx).await
}
