use std::path::PathBuf;

use dj_bot::store::{Cache, NowPlayingRef};
use serenity::model::channel::Message;
use serenity::model::id::{ChannelId, GuildId, MessageId};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("dj-bot-it-{}-{name}.json", std::process::id()))
}

async fn fresh_cache(tag: &str) -> (Cache, PathBuf, PathBuf) {
    let data = temp_path(&format!("{tag}-data"));
    let queues = temp_path(&format!("{tag}-queues"));
    let _ = std::fs::remove_file(&data);
    let _ = std::fs::remove_file(&queues);
    let cache = Cache::load(&data, &queues).await.unwrap();
    (cache, data, queues)
}

#[tokio::test]
async fn test_cache_survives_restart() {
    let (cache, data, queues) = fresh_cache("restart").await;
    let g1 = GuildId::new(11);
    let g2 = GuildId::new(22);

    assert!(cache.ensure_guild(g1).await);
    assert!(cache.ensure_guild(g2).await);
    assert!(!cache.ensure_guild(g1).await);

    cache.set_loop(g1, true).await;
    cache.remember_song(g1, "Song A").await;
    cache.remember_song(g1, "Song B").await;
    cache.put_queue(g1, "chill", vec!["Song A".into()]).await;
    assert_eq!(cache.push_to_queue(g1, "chill", "Song B").await, Some(2));
    cache.put_queue(g2, "empty", vec![]).await;

    cache.save_all().await.unwrap();
    let reloaded = Cache::load(&data, &queues).await.unwrap();

    let before = cache.guilds.read().await;
    let after = reloaded.guilds.read().await;
    assert_eq!(before.len(), after.len());
    for (gid, state) in before.iter() {
        let restored = after.get(gid).expect("guild restored");
        assert_eq!(restored.looping, state.looping);
        assert_eq!(restored.known_songs, state.known_songs);
        assert_eq!(restored.message_id, state.message_id);
    }
    assert_eq!(*cache.queues.read().await, *reloaded.queues.read().await);

    assert!(reloaded.is_looping(g1).await);
    assert!(!reloaded.is_looping(g2).await);
    assert_eq!(reloaded.queue_songs(g1, "chill").await.unwrap(), vec!["Song A", "Song B"]);
    assert_eq!(reloaded.queue_names(g2).await, vec!["empty"]);

    let _ = std::fs::remove_file(&data);
    let _ = std::fs::remove_file(&queues);
}

#[tokio::test]
async fn test_toggle_loop_and_suggestions() {
    let (cache, data, queues) = fresh_cache("toggle").await;
    let gid = GuildId::new(33);

    assert!(cache.toggle_loop(gid).await);
    assert!(!cache.toggle_loop(gid).await);

    cache.remember_song(gid, "Daft Punk - One More Time").await;
    cache.remember_song(gid, "Another One Bites the Dust").await;
    assert_eq!(cache.song_suggestions(gid, "one").await.len(), 2);
    assert_eq!(
        cache.song_suggestions(gid, "daft").await,
        vec!["Daft Punk - One More Time"]
    );
    assert!(cache.song_suggestions(GuildId::new(44), "one").await.is_empty());

    let _ = std::fs::remove_file(&data);
    let _ = std::fs::remove_file(&queues);
}

#[tokio::test]
async fn test_push_to_unknown_queue_fails() {
    let (cache, data, queues) = fresh_cache("unknown").await;
    let gid = GuildId::new(55);
    cache.ensure_guild(gid).await;

    assert_eq!(cache.push_to_queue(gid, "nope", "Song").await, None);
    assert!(cache.queue_songs(gid, "nope").await.is_none());

    let _ = std::fs::remove_file(&data);
    let _ = std::fs::remove_file(&queues);
}

#[tokio::test]
async fn test_player_message_reference_survives_restart() {
    let (cache, data, queues) = fresh_cache("message-ref").await;
    let gid = GuildId::new(66);

    let mut message = Message::default();
    message.channel_id = ChannelId::new(700);
    message.id = MessageId::new(800);
    cache.set_now_playing(gid, message).await;

    let (tracked, live) = cache.now_playing(gid).await;
    let expected = NowPlayingRef {
        channel_id: ChannelId::new(700),
        message_id: MessageId::new(800),
    };
    assert_eq!(tracked, Some(expected));
    assert!(live.is_some());

    cache.save_all().await.unwrap();
    let reloaded = Cache::load(&data, &queues).await.unwrap();

    let (tracked, live) = reloaded.now_playing(gid).await;
    assert_eq!(tracked, Some(expected));
    assert!(live.is_none());

    let _ = std::fs::remove_file(&data);
    let _ = std::fs::remove_file(&queues);
}

#[tokio::test]
async fn test_failed_queue_write_still_saves_guild_state() {
    let (cache, data, queues) = fresh_cache("partial").await;
    let gid = GuildId::new(77);
    cache.set_loop(gid, true).await;
    cache.put_queue(gid, "mix", vec!["Song".into()]).await;

    // A directory in place of the queues file makes its rename fail.
    std::fs::create_dir_all(&queues).unwrap();
    assert!(cache.save_all().await.is_err());

    let _ = std::fs::remove_dir_all(&queues);
    let _ = std::fs::remove_file(format!("{}.tmp", queues.display()));
    let reloaded = Cache::load(&data, &queues).await.unwrap();
    assert!(reloaded.is_looping(gid).await);

    let _ = std::fs::remove_file(&data);
}
