pub mod component;
pub mod guild;
pub mod modal;
pub mod voice_state;

use poise::serenity_prelude as serenity;

use crate::{Data, Error};

pub async fn handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    match event {
        serenity::FullEvent::Ready { data_about_bot } => {
            guild::ready(data_about_bot, data).await?;
        }
        serenity::FullEvent::GuildCreate { guild, .. } => {
            guild::joined(guild.id, data).await;
        }
        serenity::FullEvent::VoiceStateUpdate { old, new } => {
            voice_state::handle(ctx, old, new, data).await?;
        }
        serenity::FullEvent::InteractionCreate {
            interaction: serenity::Interaction::Component(comp),
        } => {
            component::handle(ctx, comp, data).await?;
        }
        serenity::FullEvent::InteractionCreate {
            interaction: serenity::Interaction::Modal(modal),
        } => {
            modal::handle(ctx, modal, data).await?;
        }
        _ => {}
    }
    Ok(())
}
