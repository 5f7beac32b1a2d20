use dj_bot::music::{self, queue, Song};
use serenity::model::id::GuildId;

fn test_song(n: u32) -> Song {
    Song {
        title: format!("Song {n}"),
        author: "artist".to_string(),
        url: format!("https://youtube.com/watch?v=test{n}"),
        thumbnail: None,
        duration: Some(u64::from(n) * 60),
    }
}

#[tokio::test]
async fn test_play_queue_skip_flow() {
    // /play song1, /play song2, /play song3, then skip through all of them
    let qm = music::new_queue_manager();
    let gid = GuildId::new(1);

    queue::add_song(&qm, gid, test_song(1)).await;
    queue::add_song(&qm, gid, test_song(2)).await;
    queue::add_song(&qm, gid, test_song(3)).await;

    let current = queue::get_next_song(&qm, gid, false).await;
    assert_eq!(current.as_ref().unwrap().title, "Song 1");

    let (cur, songs) = queue::get_queue_list(&qm, gid).await;
    assert_eq!(cur.unwrap().title, "Song 1");
    assert_eq!(songs.len(), 2);

    let next = queue::get_next_song(&qm, gid, false).await;
    assert_eq!(next.unwrap().title, "Song 2");

    let next = queue::get_next_song(&qm, gid, false).await;
    assert_eq!(next.unwrap().title, "Song 3");

    let next = queue::get_next_song(&qm, gid, false).await;
    assert!(next.is_none());
    assert!(queue::is_empty(&qm, gid).await);
}

#[tokio::test]
async fn test_loop_repeats_until_skipped() {
    // Looping replays the current song on natural end; a skip still advances.
    let qm = music::new_queue_manager();
    let gid = GuildId::new(2);

    queue::add_song(&qm, gid, test_song(1)).await;
    queue::add_song(&qm, gid, test_song(2)).await;

    let current = queue::get_next_song(&qm, gid, false).await;
    assert_eq!(current.unwrap().title, "Song 1");

    let repeated = queue::get_next_song(&qm, gid, true).await;
    assert_eq!(repeated.unwrap().title, "Song 1");
    let repeated = queue::get_next_song(&qm, gid, true).await;
    assert_eq!(repeated.unwrap().title, "Song 1");

    let next = queue::get_next_song(&qm, gid, false).await;
    assert_eq!(next.unwrap().title, "Song 2");
}

#[tokio::test]
async fn test_custom_queue_titles_cover_whole_session() {
    // /custom_queue saves the playing song and everything after it
    let qm = music::new_queue_manager();
    let gid = GuildId::new(3);

    assert!(queue::titles(&qm, gid).await.is_empty());

    queue::extend(&qm, gid, vec![test_song(1), test_song(2), test_song(3)]).await;
    queue::get_next_song(&qm, gid, false).await;
    assert_eq!(queue::titles(&qm, gid).await, vec!["Song 1", "Song 2", "Song 3"]);

    queue::get_next_song(&qm, gid, false).await;
    assert_eq!(queue::titles(&qm, gid).await, vec!["Song 2", "Song 3"]);
}

#[tokio::test]
async fn test_volume_flow() {
    let qm = music::new_queue_manager();
    let gid = GuildId::new(5);

    let vol = queue::get_volume(&qm, gid).await;
    assert_eq!(queue::volume_percent(vol), 100);

    queue::set_volume(&qm, gid, 3.0).await;
    let vol = queue::get_volume(&qm, gid).await;
    assert_eq!(queue::volume_percent(vol), 300);
}

#[tokio::test]
async fn test_stop_clears_everything() {
    let qm = music::new_queue_manager();
    let gid = GuildId::new(6);

    queue::add_song(&qm, gid, test_song(1)).await;
    queue::add_song(&qm, gid, test_song(2)).await;
    queue::get_next_song(&qm, gid, false).await;

    queue::clear(&qm, gid).await;

    assert!(queue::is_empty(&qm, gid).await);
    assert!(queue::get_current(&qm, gid).await.is_none());
    assert!(queue::get_handle(&qm, gid).await.is_none());
}

#[tokio::test]
async fn test_multiple_guilds_isolated() {
    let qm = music::new_queue_manager();
    let g1 = GuildId::new(100);
    let g2 = GuildId::new(200);

    queue::add_song(&qm, g1, test_song(1)).await;
    queue::add_song(&qm, g2, test_song(2)).await;

    let s1 = queue::get_next_song(&qm, g1, false).await;
    assert_eq!(s1.unwrap().title, "Song 1");

    let s2 = queue::get_next_song(&qm, g2, false).await;
    assert_eq!(s2.unwrap().title, "Song 2");

    queue::clear(&qm, g1).await;
    assert!(queue::is_empty(&qm, g1).await);
    assert!(!queue::is_empty(&qm, g2).await);
}
