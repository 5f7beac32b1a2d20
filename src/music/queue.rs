use serenity::model::id::GuildId;
use songbird::tracks::TrackHandle;

use super::{QueueManager, Song, DEFAULT_VOLUME};

pub async fn add_song(manager: &QueueManager, guild_id: GuildId, song: Song) -> usize {
    let mut queues = manager.write().await;
    let queue = queues.entry(guild_id).or_default();
    queue.songs.push_back(song);
    queue.songs.len()
}

pub async fn extend(manager: &QueueManager, guild_id: GuildId, songs: Vec<Song>) -> usize {
    let mut queues = manager.write().await;
    let queue = queues.entry(guild_id).or_default();
    queue.songs.extend(songs);
    queue.songs.len()
}

/// Moves the queue forward. With `repeat` the current song is handed back
/// again instead.
pub async fn get_next_song(manager: &QueueManager, guild_id: GuildId, repeat: bool) -> Option<Song> {
    let mut queues = manager.write().await;
    let queue = queues.entry(guild_id).or_default();

    if repeat && queue.current_song.is_some() {
        return queue.current_song.clone();
    }

    let next = queue.songs.pop_front();
    queue.current_song = next.clone();
    next
}

pub async fn clear(manager: &QueueManager, guild_id: GuildId) {
    let mut queues = manager.write().await;
    if let Some(queue) = queues.get_mut(&guild_id) {
        queue.songs.clear();
        queue.current_song = None;
        queue.track_handle = None;
    }
}

pub async fn get_queue_list(manager: &QueueManager, guild_id: GuildId) -> (Option<Song>, Vec<Song>) {
    let queues = manager.read().await;
    match queues.get(&guild_id) {
        Some(queue) => (queue.current_song.clone(), queue.songs.iter().cloned().collect()),
        None => (None, vec![]),
    }
}

/// Titles of the current song followed by everything queued after it.
pub async fn titles(manager: &QueueManager, guild_id: GuildId) -> Vec<String> {
    let (current, upcoming) = get_queue_list(manager, guild_id).await;
    current
        .into_iter()
        .chain(upcoming)
        .map(|song| song.title)
        .collect()
}

pub async fn set_volume(manager: &QueueManager, guild_id: GuildId, volume: f32) {
    let mut queues = manager.write().await;
    let queue = queues.entry(guild_id).or_default();
    queue.volume = volume;
    if let Some(handle) = &queue.track_handle {
        let _ = handle.set_volume(volume);
    }
}

pub async fn get_current(manager: &QueueManager, guild_id: GuildId) -> Option<Song> {
    let queues = manager.read().await;
    queues.get(&guild_id).and_then(|q| q.current_song.clone())
}

pub async fn get_volume(manager: &QueueManager, guild_id: GuildId) -> f32 {
    let queues = manager.read().await;
    queues.get(&guild_id).map_or(DEFAULT_VOLUME, |q| q.volume)
}

pub async fn get_handle(manager: &QueueManager, guild_id: GuildId) -> Option<TrackHandle> {
    let queues = manager.read().await;
    queues.get(&guild_id).and_then(|q| q.track_handle.clone())
}

pub async fn is_empty(manager: &QueueManager, guild_id: GuildId) -> bool {
    let queues = manager.read().await;
    queues
        .get(&guild_id)
        .map_or(true, |q| q.current_song.is_none() && q.songs.is_empty())
}

/// Volume as the whole percentage shown to users.
pub fn volume_percent(volume: f32) -> u32 {
    (volume * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::new_queue_manager;

    fn song(n: u32) -> Song {
        Song {
            title: format!("Song {n}"),
            author: "artist".to_string(),
            url: format!("https://youtube.com/watch?v=test{n}"),
            thumbnail: None,
            duration: Some(u64::from(n) * 60),
        }
    }

    #[tokio::test]
    async fn test_repeat_without_current_advances() {
        let qm = new_queue_manager();
        let gid = GuildId::new(1);
        add_song(&qm, gid, song(1)).await;

        let next = get_next_song(&qm, gid, true).await;
        assert_eq!(next.unwrap().title, "Song 1");
    }

    #[tokio::test]
    async fn test_titles_include_current() {
        let qm = new_queue_manager();
        let gid = GuildId::new(1);
        extend(&qm, gid, vec![song(1), song(2), song(3)]).await;
        get_next_song(&qm, gid, false).await;

        assert_eq!(titles(&qm, gid).await, vec!["Song 1", "Song 2", "Song 3"]);
    }

    #[test]
    fn test_volume_percent() {
        assert_eq!(volume_percent(1.0), 100);
        assert_eq!(volume_percent(0.3), 30);
        assert_eq!(volume_percent(10.0), 1000);
    }
}
