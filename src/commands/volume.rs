use poise::CreateReply;

use crate::music::player::Player;
use crate::music::queue;
use crate::utils::embed;
use crate::{Context, Error};

pub const MAX_VOLUME: u32 = 1000;

async fn volume_impl(ctx: Context<'_>, level: u32) -> Result<(), Error> {
    let guild_id = ctx.guild_id().ok_or("only usable in a server")?;

    if level > MAX_VOLUME {
        ctx.send(
            CreateReply::default()
                .embed(embed::error(&format!("Volume must be between 0 and {MAX_VOLUME}.")))
                .ephemeral(true),
        )
        .await?;
        return Ok(());
    }

    queue::set_volume(&ctx.data().queue_manager, guild_id, level as f32 / 100.0).await;
    if let Some(player) = Player::connected(ctx.serenity_context(), ctx.data(), guild_id).await? {
        player.refresh_message().await;
    }

    ctx.send(
        CreateReply::default()
            .content(format!("Set volume to {level}%."))
            .ephemeral(true),
    )
    .await?;

    Ok(())
}

/// Sets the player's volume
#[poise::command(slash_command, guild_only)]
pub async fn volume(
    ctx: Context<'_>,
    #[description = "Volume in percent (0-1000)"] level: u32,
) -> Result<(), Error> {
    volume_impl(ctx, level).await
}
