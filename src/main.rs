use std::sync::Arc;

use dj_bot::{commands, config, events, music, store, Data};
use poise::serenity_prelude as serenity;
use songbird::SerenityInit;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    let cache = match store::Cache::load(&config.data_path, &config.queues_path).await {
        Ok(cache) => Arc::new(cache),
        Err(e) => {
            tracing::error!("failed to load saved state: {e}");
            return;
        }
    };
    cache.spawn_autosave(config.autosave_interval);

    let intents = serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::GUILD_MEMBERS;

    let setup_cache = Arc::clone(&cache);
    let register_guild = config.guild_id;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::all(),
            event_handler: |ctx, event, framework, data| {
                Box::pin(events::handler(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                match register_guild {
                    Some(guild_id) => {
                        poise::builtins::register_in_guild(ctx, &framework.options().commands, guild_id)
                            .await?
                    }
                    None => poise::builtins::register_globally(ctx, &framework.options().commands).await?,
                }

                tracing::info!("bot is ready");
                Ok(Data {
                    queue_manager: music::new_queue_manager(),
                    http_client: reqwest::Client::new(),
                    cache: setup_cache,
                })
            })
        })
        .build();

    let mut client = match serenity::ClientBuilder::new(&config.discord_token, intents)
        .framework(framework)
        .register_songbird()
        .await
    {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("failed to create client: {e}");
            return;
        }
    };

    let shard_manager = client.shard_manager.clone();
    let shutdown_cache = Arc::clone(&cache);
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("could not listen for ctrl+c: {e}");
            return;
        }
        tracing::info!("shutting down");
        shutdown_cache.flush().await;
        shard_manager.shutdown_all().await;
    });

    if let Err(e) = client.start().await {
        tracing::error!("client error: {e}");
    }

    cache.flush().await;
}
