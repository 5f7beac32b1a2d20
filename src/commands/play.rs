use poise::CreateReply;

use crate::music::player::Player;
use crate::music::source;
use crate::utils::{embed, now_playing, voice};
use crate::{Context, Error};

async fn autocomplete_song(ctx: Context<'_>, partial: &str) -> impl Iterator<Item = String> {
    let songs = match ctx.guild_id() {
        Some(guild_id) => ctx.data().cache.song_suggestions(guild_id, partial).await,
        None => Vec::new(),
    };
    songs.into_iter()
}

async fn play_impl(ctx: Context<'_>, search: String) -> Result<(), Error> {
    let guild_id = ctx.guild_id().ok_or("only usable in a server")?;

    let Some(channel_id) = voice::user_channel(ctx.serenity_context(), guild_id, ctx.author().id)
    else {
        ctx.send(
            CreateReply::default()
                .embed(embed::error("You are not in a voice channel"))
                .ephemeral(true),
        )
        .await?;
        return Ok(());
    };

    ctx.defer().await?;

    let song = match source::get_song_info(&search).await {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!("search for {search} failed: {e}");
            ctx.send(CreateReply::default().embed(embed::error("No song could be found.")))
                .await?;
            return Ok(());
        }
    };

    let data = ctx.data();
    data.cache.remember_song(guild_id, &song.title).await;

    let was_connected = Player::connected(ctx.serenity_context(), data, guild_id)
        .await?
        .is_some();
    let player = Player::join(ctx.serenity_context(), data, guild_id, channel_id).await?;
    let title = song.title.clone();
    let started = player.enqueue(song).await?;
    let (tracked, _) = data.cache.now_playing(guild_id).await;

    if started && (!was_connected || tracked.is_none()) {
        // Fresh session: post a new player message and follow it from now on.
        data.cache.set_loop(guild_id, false).await;
        let (e, comps) = now_playing::render(&data.queue_manager, &data.cache, guild_id).await;
        let reply = ctx
            .send(CreateReply::default().embed(e).components(comps))
            .await?;
        let message = reply.message().await?.into_owned();
        data.cache.set_now_playing(guild_id, message).await;
    } else {
        player.refresh_message().await;
        let verb = if started { "Resumed playback with" } else { "Added" };
        let suffix = if started { "" } else { " to queue" };
        ctx.send(
            CreateReply::default()
                .content(format!("{verb} {title}{suffix}"))
                .ephemeral(true),
        )
        .await?;
    }

    Ok(())
}

/// Starts a music session in your current voice chat
#[poise::command(slash_command, guild_only)]
pub async fn play(
    ctx: Context<'_>,
    #[description = "Song title or URL"]
    #[autocomplete = "autocomplete_song"]
    search: String,
) -> Result<(), Error> {
    play_impl(ctx, search).await
}
