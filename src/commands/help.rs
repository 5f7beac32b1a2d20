use poise::CreateReply;
use serenity::builder::CreateEmbed;

use crate::{Context, Error};

async fn help_impl(ctx: Context<'_>) -> Result<(), Error> {
    let playback = "\
`/play` - play a song or add it to the queue
`/skip` - skip the current song
`/stop` - stop playback and leave
`/pause` / `/resume` - pause or resume
`/loop` - toggle looping the current song
`/nowplaying` - post the player here
`/queue` - show the queue
`/skip_to` - jump to MINUTE:SECOND
`/forward` - skip ahead some seconds
`/position` - current position
`/volume` - set volume (0-1000)";

    let saved = "\
`/custom_queue` - save the current queue under a name
`/play_queue` - enqueue a saved queue
`/manage_queue add` - add a song to a saved queue
`/save` - write saved state to disk";

    let embed = CreateEmbed::new()
        .title("DJ help")
        .field("Playback", playback, false)
        .field("Saved queues", saved, false)
        .color(0x5865F2);

    ctx.send(CreateReply::default().embed(embed).ephemeral(true))
        .await?;
    Ok(())
}

/// Shows the bot's commands
#[poise::command(slash_command, guild_only)]
pub async fn help(ctx: Context<'_>) -> Result<(), Error> {
    help_impl(ctx).await
}
