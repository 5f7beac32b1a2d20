use std::time::Duration;

use poise::CreateReply;

use crate::music::player::Player;
use crate::music::queue;
use crate::utils::embed;
use crate::utils::time::{format_duration, parse_timestamp};
use crate::{Context, Error};

const NOT_PLAYING: &str = "You are not in a voice channel or the bot is not playing a song.";

async fn error_reply(ctx: Context<'_>, message: &str) -> Result<(), Error> {
    ctx.send(
        CreateReply::default()
            .embed(embed::error(message))
            .ephemeral(true),
    )
    .await?;
    Ok(())
}

/// The connected player, if it has a song loaded.
async fn active_player(ctx: Context<'_>) -> Result<Option<Player>, Error> {
    let guild_id = ctx.guild_id().ok_or("only usable in a server")?;
    if queue::get_current(&ctx.data().queue_manager, guild_id).await.is_none() {
        return Ok(None);
    }
    Player::connected(ctx.serenity_context(), ctx.data(), guild_id).await
}

/// Whether moving `step` ahead from `position` still lands inside the song.
pub fn can_forward(position: Duration, length: Option<u64>, step: Duration) -> bool {
    match length {
        Some(secs) => step <= Duration::from_secs(secs).saturating_sub(position),
        None => true,
    }
}

async fn skip_to_impl(ctx: Context<'_>, place: String) -> Result<(), Error> {
    let Some(target) = parse_timestamp(&place) else {
        return error_reply(ctx, "Use a MINUTE:SECOND format, e.g. `1:30`.").await;
    };
    let Some(player) = active_player(ctx).await? else {
        return error_reply(ctx, NOT_PLAYING).await;
    };

    player.seek(target).await?;
    ctx.send(
        CreateReply::default()
            .content(format!("Skipped to {}", format_duration(target)))
            .ephemeral(true),
    )
    .await?;
    Ok(())
}

async fn forward_impl(ctx: Context<'_>, seconds: u64) -> Result<(), Error> {
    let Some(player) = active_player(ctx).await? else {
        return error_reply(ctx, NOT_PLAYING).await;
    };

    let position = player.position().await.unwrap_or_default();
    let length = queue::get_current(&player.queue_manager, player.guild_id)
        .await
        .and_then(|song| song.duration);
    let step = Duration::from_secs(seconds);

    if !can_forward(position, length, step) {
        return error_reply(ctx, "You can't skip this far.").await;
    }

    player.seek(position + step).await?;
    ctx.send(
        CreateReply::default()
            .content(format!("Skipped {seconds} seconds"))
            .ephemeral(true),
    )
    .await?;
    Ok(())
}

async fn position_impl(ctx: Context<'_>) -> Result<(), Error> {
    let position = match active_player(ctx).await? {
        Some(player) => player.position().await,
        None => None,
    };
    let Some(position) = position else {
        return error_reply(ctx, NOT_PLAYING).await;
    };

    ctx.say(format!("The current position is {}", format_duration(position)))
        .await?;
    Ok(())
}

/// Skips to a position in the song, use a MINUTE:SECOND format
#[poise::command(slash_command, guild_only)]
pub async fn skip_to(
    ctx: Context<'_>,
    #[description = "Position as MINUTE:SECOND"] place: String,
) -> Result<(), Error> {
    skip_to_impl(ctx, place).await
}

/// Skips forwards 10 seconds by default or a custom amount of seconds
#[poise::command(slash_command, guild_only)]
pub async fn forward(
    ctx: Context<'_>,
    #[description = "Seconds to skip"] seconds: Option<u64>,
) -> Result<(), Error> {
    forward_impl(ctx, seconds.unwrap_or(10)).await
}

/// Gets the current song position
#[poise::command(slash_command, guild_only)]
pub async fn position(ctx: Context<'_>) -> Result<(), Error> {
    position_impl(ctx).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_forward() {
        let at = Duration::from_secs(100);
        assert!(can_forward(at, Some(200), Duration::from_secs(10)));
        assert!(can_forward(at, Some(200), Duration::from_secs(100)));
        assert!(!can_forward(at, Some(200), Duration::from_secs(101)));
        assert!(!can_forward(Duration::from_secs(250), Some(200), Duration::from_secs(1)));
    }

    #[test]
    fn test_can_forward_unknown_length() {
        assert!(can_forward(Duration::ZERO, None, Duration::from_secs(600)));
    }
}
