use poise::CreateReply;

use crate::music::player::Player;
use crate::music::queue;
use crate::utils::embed;
use crate::{Context, Error};

async fn skip_impl(ctx: Context<'_>) -> Result<(), Error> {
    let guild_id = ctx.guild_id().ok_or("only usable in a server")?;

    let current = queue::get_current(&ctx.data().queue_manager, guild_id).await;
    let player = Player::connected(ctx.serenity_context(), ctx.data(), guild_id).await?;

    let (Some(song), Some(player)) = (current, player) else {
        ctx.send(CreateReply::default().embed(embed::error("Nothing is playing.")))
            .await?;
        return Ok(());
    };

    match player.play_next(true).await {
        Ok(next) => {
            player.refresh_message().await;
            let msg = match next {
                Some(next_song) => format!("Skipped **{}**, now playing **{}**", song.title, next_song.title),
                None => format!("Skipped **{}**, the queue is empty", song.title),
            };
            ctx.say(msg).await?;
        }
        Err(e) => {
            ctx.send(CreateReply::default().embed(embed::error(&format!("Skip failed: {e}"))))
                .await?;
        }
    }

    Ok(())
}

/// Skips the current song
#[poise::command(slash_command, guild_only)]
pub async fn skip(ctx: Context<'_>) -> Result<(), Error> {
    skip_impl(ctx).await
}
