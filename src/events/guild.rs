use poise::serenity_prelude as serenity;
use serenity::model::id::GuildId;
use tracing::info;

use crate::{Data, Error};

/// Seeds state for every guild the bot is in, then writes it out.
pub async fn ready(ready: &serenity::Ready, data: &Data) -> Result<(), Error> {
    let mut created = 0;
    for guild in &ready.guilds {
        if data.cache.ensure_guild(guild.id).await {
            created += 1;
        }
    }
    info!(
        "connected as {} in {} guilds ({created} new)",
        ready.user.name,
        ready.guilds.len()
    );
    data.cache.save_all().await?;
    Ok(())
}

pub async fn joined(guild_id: GuildId, data: &Data) {
    if data.cache.ensure_guild(guild_id).await {
        info!("joined guild {guild_id}");
    }
}
