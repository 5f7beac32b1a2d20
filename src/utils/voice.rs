use poise::serenity_prelude as serenity;
use serenity::model::id::{ChannelId, GuildId, UserId};

/// The voice channel a member is connected to, from the gateway cache.
pub fn user_channel(ctx: &serenity::Context, guild_id: GuildId, user_id: UserId) -> Option<ChannelId> {
    let guild = ctx.cache.guild(guild_id)?;
    guild
        .voice_states
        .get(&user_id)
        .and_then(|vs| vs.channel_id)
}

/// Whether the member shares the bot's current voice channel.
pub async fn with_bot(ctx: &serenity::Context, guild_id: GuildId, user_id: UserId) -> bool {
    let Some(manager) = songbird::get(ctx).await else {
        return false;
    };
    let Some(call) = manager.get(guild_id) else {
        return false;
    };
    let bot_channel = call.lock().await.current_channel();

    match (bot_channel, user_channel(ctx, guild_id, user_id)) {
        (Some(bot), Some(user)) => bot.0.get() == user.get(),
        _ => false,
    }
}
