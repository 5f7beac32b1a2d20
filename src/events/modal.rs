use poise::serenity_prelude as serenity;
use serenity::builder::{
    CreateInteractionResponse, CreateInteractionResponseFollowup, CreateInteractionResponseMessage,
};
use serenity::model::application::{ActionRowComponent, ModalInteraction};
use tracing::warn;

use crate::music::player::Player;
use crate::music::source;
use crate::utils::components::{self, ModalTarget};
use crate::utils::voice;
use crate::{Data, Error};

fn song_input(modal: &ModalInteraction) -> Option<String> {
    modal
        .data
        .components
        .iter()
        .flat_map(|row| row.components.iter())
        .find_map(|component| match component {
            ActionRowComponent::InputText(input) if input.custom_id == components::SONG_INPUT => {
                input.value.clone()
            }
            _ => None,
        })
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

async fn reply(ctx: &serenity::Context, modal: &ModalInteraction, message: String) -> Result<(), Error> {
    modal
        .create_followup(
            &ctx.http,
            CreateInteractionResponseFollowup::new()
                .content(message)
                .ephemeral(true),
        )
        .await?;
    Ok(())
}

pub async fn handle(
    ctx: &serenity::Context,
    modal: &ModalInteraction,
    data: &Data,
) -> Result<(), Error> {
    let Some(target) = components::modal_target(&modal.data.custom_id) else {
        return Ok(());
    };
    let guild_id = modal.guild_id.ok_or("only usable in a server")?;
    let Some(query) = song_input(modal) else {
        return Ok(());
    };

    modal
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Defer(CreateInteractionResponseMessage::new().ephemeral(true)),
        )
        .await?;

    let song = match source::get_song_info(&query).await {
        Ok(song) => song,
        Err(e) => {
            warn!("search for {query} failed: {e}");
            return reply(ctx, modal, "No song could be found.".to_string()).await;
        }
    };

    match target {
        ModalTarget::CustomQueue(name) => {
            match data.cache.push_to_queue(guild_id, name, &song.title).await {
                Some(_) => reply(ctx, modal, format!("Added {} to {name}", song.title)).await,
                None => reply(ctx, modal, "Queue could not be found".to_string()).await,
            }
        }
        ModalTarget::Player => {
            data.cache.remember_song(guild_id, &song.title).await;

            let Some(channel_id) = voice::user_channel(ctx, guild_id, modal.user.id) else {
                return reply(ctx, modal, "You are not in a voice channel".to_string()).await;
            };
            let player = Player::join(ctx, data, guild_id, channel_id).await?;
            let title = song.title.clone();
            player.enqueue(song).await?;
            player.refresh_message().await;

            reply(ctx, modal, format!("Added {title} to queue.")).await
        }
    }
}
