use poise::CreateReply;

use crate::music::player::Player;
use crate::music::queue;
use crate::utils::embed;
use crate::{Context, Error};

async fn set_paused(ctx: Context<'_>, paused: bool) -> Result<(), Error> {
    let guild_id = ctx.guild_id().ok_or("only usable in a server")?;

    let player = Player::connected(ctx.serenity_context(), ctx.data(), guild_id).await?;
    let current = queue::get_current(&ctx.data().queue_manager, guild_id).await;

    let (Some(player), Some(song)) = (player, current) else {
        ctx.send(CreateReply::default().embed(embed::error("Nothing is playing.")))
            .await?;
        return Ok(());
    };

    if paused {
        player.pause().await;
    } else {
        player.resume().await;
    }
    player.refresh_message().await;

    let verb = if paused { "Paused" } else { "Resumed" };
    ctx.say(format!("{verb} **{}**", song.title)).await?;

    Ok(())
}

/// Pauses the current song
#[poise::command(slash_command, guild_only)]
pub async fn pause(ctx: Context<'_>) -> Result<(), Error> {
    set_paused(ctx, true).await
}

/// Resumes the current song
#[poise::command(slash_command, guild_only)]
pub async fn resume(ctx: Context<'_>) -> Result<(), Error> {
    set_paused(ctx, false).await
}
