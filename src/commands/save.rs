use poise::CreateReply;
use tracing::info;

use crate::{Context, Error};

/// Writes the bot's saved state to disk now
#[poise::command(slash_command, guild_only)]
pub async fn save(ctx: Context<'_>) -> Result<(), Error> {
    ctx.data().cache.save_all().await?;
    info!("state saved on request of {}", ctx.author().name);
    ctx.send(CreateReply::default().content("Saved").ephemeral(true))
        .await?;
    Ok(())
}

/// Re-registers the bot's slash commands
#[poise::command(slash_command, owners_only)]
pub async fn sync(ctx: Context<'_>) -> Result<(), Error> {
    let commands = &ctx.framework().options().commands;
    poise::builtins::register_globally(ctx.serenity_context(), commands).await?;
    ctx.send(
        CreateReply::default()
            .content(":white_check_mark:")
            .ephemeral(true),
    )
    .await?;
    Ok(())
}
