use crate::music::player::Player;
use crate::store::guild_state::loop_label;
use crate::{Context, Error};

async fn loop_impl(ctx: Context<'_>) -> Result<(), Error> {
    let guild_id = ctx.guild_id().ok_or("only usable in a server")?;

    let looping = ctx.data().cache.toggle_loop(guild_id).await;
    if let Some(player) = Player::connected(ctx.serenity_context(), ctx.data(), guild_id).await? {
        player.refresh_message().await;
    }

    ctx.say(loop_label(looping)).await?;

    Ok(())
}

/// Toggles looping of the current song
#[poise::command(slash_command, guild_only, rename = "loop")]
pub async fn loop_cmd(ctx: Context<'_>) -> Result<(), Error> {
    loop_impl(ctx).await
}
