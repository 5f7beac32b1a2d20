use poise::serenity_prelude as serenity;
use serenity::builder::{
    CreateActionRow, CreateEmbed, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, CreateMessage,
};
use serenity::model::application::{ComponentInteraction, ComponentInteractionDataKind};
use serenity::model::id::GuildId;
use tracing::warn;

use crate::music::player::{self, Player};
use crate::music::{queue, source};
use crate::utils::{components, embed, now_playing, voice};
use crate::{Data, Error};

async fn respond_ephemeral(
    ctx: &serenity::Context,
    interaction: &ComponentInteraction,
    message: &str,
) -> Result<(), Error> {
    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(message)
            .ephemeral(true),
    );
    interaction.create_response(&ctx.http, response).await?;
    Ok(())
}

async fn respond_error(
    ctx: &serenity::Context,
    interaction: &ComponentInteraction,
    message: &str,
) -> Result<(), Error> {
    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .embed(embed::error(message))
            .ephemeral(true),
    );
    interaction.create_response(&ctx.http, response).await?;
    Ok(())
}

async fn update_message(
    ctx: &serenity::Context,
    interaction: &ComponentInteraction,
    embed: CreateEmbed,
    components: Vec<CreateActionRow>,
) -> Result<(), Error> {
    let response = CreateInteractionResponse::UpdateMessage(
        CreateInteractionResponseMessage::new()
            .embed(embed)
            .components(components),
    );
    interaction.create_response(&ctx.http, response).await?;
    Ok(())
}

/// Redraws the message the button sits on and tracks it as the player message.
async fn redraw(
    ctx: &serenity::Context,
    interaction: &ComponentInteraction,
    data: &Data,
    guild_id: GuildId,
) -> Result<(), Error> {
    let (e, comps) = now_playing::render(&data.queue_manager, &data.cache, guild_id).await;
    update_message(ctx, interaction, e, comps).await?;
    data.cache
        .set_now_playing(guild_id, (*interaction.message).clone())
        .await;
    Ok(())
}

fn selected(interaction: &ComponentInteraction) -> Option<&str> {
    match &interaction.data.kind {
        ComponentInteractionDataKind::StringSelect { values } => values.first().map(String::as_str),
        _ => None,
    }
}

pub async fn handle(
    ctx: &serenity::Context,
    interaction: &ComponentInteraction,
    data: &Data,
) -> Result<(), Error> {
    let guild_id = interaction.guild_id.ok_or("only usable in a server")?;

    match interaction.data.custom_id.as_str() {
        components::QUEUE_PLAY => return play_custom_queue(ctx, interaction, data, guild_id).await,
        components::QUEUE_ADD => {
            let Some(name) = selected(interaction) else {
                return Ok(());
            };
            let modal = components::add_song_modal(Some(name));
            interaction
                .create_response(&ctx.http, CreateInteractionResponse::Modal(modal))
                .await?;
            return Ok(());
        }
        _ => {}
    }

    let Some(player) = Player::connected(ctx, data, guild_id).await? else {
        respond_error(ctx, interaction, "The bot is not in a voice channel.").await?;
        return Ok(());
    };

    if !voice::with_bot(ctx, guild_id, interaction.user.id).await {
        respond_error(ctx, interaction, "You need to be in the bot's voice channel.").await?;
        return Ok(());
    }

    match interaction.data.custom_id.as_str() {
        components::PAUSE => {
            player.pause().await;
            redraw(ctx, interaction, data, guild_id).await?;
        }
        components::RESUME => {
            player.resume().await;
            redraw(ctx, interaction, data, guild_id).await?;
        }
        components::ADD_SONG => {
            let modal = components::add_song_modal(None);
            interaction
                .create_response(&ctx.http, CreateInteractionResponse::Modal(modal))
                .await?;
        }
        components::SKIP => match player.play_next(true).await {
            Ok(_) => redraw(ctx, interaction, data, guild_id).await?,
            Err(e) => respond_error(ctx, interaction, &format!("Skip failed: {e}")).await?,
        },
        components::LOOP => {
            data.cache.toggle_loop(guild_id).await;
            redraw(ctx, interaction, data, guild_id).await?;
        }
        components::STOP => {
            player::leave(ctx, data, guild_id).await?;
            data.cache.clear_now_playing(guild_id).await;
            interaction
                .create_response(&ctx.http, CreateInteractionResponse::Acknowledge)
                .await?;
            if let Err(e) = interaction.message.delete(ctx).await {
                warn!("could not delete player message: {e}");
            }
        }
        components::VOLUME => {
            let Some(level) = selected(interaction).and_then(components::parse_volume) else {
                return Ok(());
            };
            queue::set_volume(&data.queue_manager, guild_id, level as f32 / 100.0).await;
            redraw(ctx, interaction, data, guild_id).await?;
        }
        _ => {}
    }

    Ok(())
}

/// Enqueues every song of the chosen custom queue, joining voice if needed.
async fn play_custom_queue(
    ctx: &serenity::Context,
    interaction: &ComponentInteraction,
    data: &Data,
    guild_id: GuildId,
) -> Result<(), Error> {
    let Some(name) = selected(interaction) else {
        return Ok(());
    };
    let Some(titles) = data.cache.queue_songs(guild_id, name).await else {
        respond_ephemeral(ctx, interaction, "Queue could not be found").await?;
        return Ok(());
    };
    let Some(channel_id) = voice::user_channel(ctx, guild_id, interaction.user.id) else {
        respond_error(ctx, interaction, "You are not in a voice channel").await?;
        return Ok(());
    };

    // Resolving every title can take a while.
    interaction
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Defer(CreateInteractionResponseMessage::new().ephemeral(true)),
        )
        .await?;

    let was_connected = Player::connected(ctx, data, guild_id).await?.is_some();
    let player = Player::join(ctx, data, guild_id, channel_id).await?;

    let mut songs = Vec::with_capacity(titles.len());
    for title in &titles {
        match source::get_song_info(title).await {
            Ok(song) => songs.push(song),
            Err(e) => warn!("skipping {title} from queue {name}: {e}"),
        }
    }
    let added = songs.len();

    let idle = queue::is_empty(&data.queue_manager, guild_id).await;
    queue::extend(&data.queue_manager, guild_id, songs).await;
    if idle {
        player.play_next(true).await?;
    }

    if !was_connected {
        data.cache.set_loop(guild_id, false).await;
        let (e, comps) = now_playing::render(&data.queue_manager, &data.cache, guild_id).await;
        let message = interaction
            .channel_id
            .send_message(
                &ctx.http,
                CreateMessage::new().embed(e).components(comps),
            )
            .await?;
        data.cache.set_now_playing(guild_id, message).await;
    } else {
        player.refresh_message().await;
    }

    interaction
        .create_followup(
            &ctx.http,
            CreateInteractionResponseFollowup::new()
                .ephemeral(true)
                .content(format!("Added {name} to queue ({added}/{} found)", titles.len())),
        )
        .await?;
    Ok(())
}
