use poise::CreateReply;

use crate::music::queue;
use crate::utils::components;
use crate::{Context, Error};

async fn custom_queue_impl(ctx: Context<'_>, name: String) -> Result<(), Error> {
    let guild_id = ctx.guild_id().ok_or("only usable in a server")?;
    let name = name.trim().to_string();
    if name.is_empty() {
        ctx.send(
            CreateReply::default()
                .content("Give the queue a name.")
                .ephemeral(true),
        )
        .await?;
        return Ok(());
    }

    let titles = queue::titles(&ctx.data().queue_manager, guild_id).await;
    let count = titles.len();
    ctx.data().cache.put_queue(guild_id, &name, titles).await;

    ctx.send(
        CreateReply::default()
            .content(format!("Saved {count} songs as **{name}**."))
            .ephemeral(true),
    )
    .await?;
    Ok(())
}

async fn pick_queue(ctx: Context<'_>, custom_id: &str, prompt: &str) -> Result<(), Error> {
    let guild_id = ctx.guild_id().ok_or("only usable in a server")?;
    let names = ctx.data().cache.queue_names(guild_id).await;

    ctx.send(
        CreateReply::default()
            .content(prompt)
            .components(vec![components::custom_queue_select(custom_id, &names)])
            .ephemeral(true),
    )
    .await?;
    Ok(())
}

/// Makes a custom saved queue of the current player queue
#[poise::command(slash_command, guild_only)]
pub async fn custom_queue(
    ctx: Context<'_>,
    #[description = "Name of the saved queue"]
    #[max_length = 80]
    name: String,
) -> Result<(), Error> {
    custom_queue_impl(ctx, name).await
}

/// Plays a saved custom queue
#[poise::command(slash_command, guild_only)]
pub async fn play_queue(ctx: Context<'_>) -> Result<(), Error> {
    pick_queue(
        ctx,
        components::QUEUE_PLAY,
        "Select a queue to add to the current queue",
    )
    .await
}

/// Manages saved custom queues
#[poise::command(slash_command, guild_only, subcommands("add"))]
pub async fn manage_queue(_ctx: Context<'_>) -> Result<(), Error> {
    Ok(())
}

/// Adds a song to a custom queue
#[poise::command(slash_command, guild_only)]
pub async fn add(ctx: Context<'_>) -> Result<(), Error> {
    pick_queue(ctx, components::QUEUE_ADD, "Select a queue to add a song to").await
}
