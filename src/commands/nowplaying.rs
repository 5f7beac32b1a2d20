use poise::CreateReply;

use crate::music::queue;
use crate::utils::{embed, now_playing};
use crate::{Context, Error};

async fn nowplaying_impl(ctx: Context<'_>) -> Result<(), Error> {
    let guild_id = ctx.guild_id().ok_or("only usable in a server")?;
    let data = ctx.data();

    if queue::get_current(&data.queue_manager, guild_id).await.is_none() {
        ctx.send(CreateReply::default().embed(embed::error("Nothing is playing.")))
            .await?;
        return Ok(());
    }

    let (e, comps) = now_playing::render(&data.queue_manager, &data.cache, guild_id).await;
    let reply = ctx
        .send(CreateReply::default().embed(e).components(comps))
        .await?;
    let message = reply.message().await?.into_owned();
    data.cache.set_now_playing(guild_id, message).await;

    Ok(())
}

/// Posts the player for the current song here
#[poise::command(slash_command, guild_only)]
pub async fn nowplaying(ctx: Context<'_>) -> Result<(), Error> {
    nowplaying_impl(ctx).await
}
