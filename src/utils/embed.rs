use serenity::builder::{CreateEmbed, CreateEmbedFooter};

use super::time::format_length;
use crate::music::Song;
use crate::store::guild_state::loop_label;

/// Upcoming tracks listed on the player message before collapsing the rest.
pub const PLAYER_QUEUE_PREVIEW: usize = 20;

pub const STATE_PLAYING: &str = ":white_check_mark: Playing";
pub const STATE_PAUSED: &str = ":clock1: Not Playing";

pub fn state_label(paused: bool) -> &'static str {
    if paused {
        STATE_PAUSED
    } else {
        STATE_PLAYING
    }
}

/// Numbered queue lines shown under the player, plus the overflow note.
pub fn queue_preview(upcoming: &[Song]) -> (Vec<(String, String)>, Option<String>) {
    let lines = upcoming
        .iter()
        .take(PLAYER_QUEUE_PREVIEW)
        .enumerate()
        .map(|(i, song)| ((i + 1).to_string(), format!("{} - {}", song.title, song.author)))
        .collect();
    let overflow = (upcoming.len() > PLAYER_QUEUE_PREVIEW).then(|| {
        format!(
            "...{} more tracks in queue",
            upcoming.len() - PLAYER_QUEUE_PREVIEW
        )
    });
    (lines, overflow)
}

pub fn player(
    current: Option<&Song>,
    upcoming: &[Song],
    looping: bool,
    paused: bool,
    volume_percent: u32,
) -> CreateEmbed {
    let Some(song) = current else {
        return CreateEmbed::new().title("Queue is empty").color(0x5865F2);
    };

    let mut embed = CreateEmbed::new()
        .title(&song.title)
        .url(&song.url)
        .description(&song.author)
        .color(0x1DB954)
        .field(
            "Length",
            song.duration.map_or("?".to_string(), format_length),
            true,
        )
        .field("Loop", loop_label(looping), true)
        .field("State", state_label(paused), true)
        .footer(CreateEmbedFooter::new(format!("Volume: {volume_percent}%")));

    if let Some(thumbnail) = &song.thumbnail {
        embed = embed.thumbnail(thumbnail);
    }

    let (lines, overflow) = queue_preview(upcoming);
    for (name, value) in lines {
        embed = embed.field(name, value, false);
    }
    if let Some(note) = overflow {
        embed = embed.field("\u{200b}", note, false);
    }

    embed
}

pub fn queue_list(current: Option<&Song>, songs: &[Song], page: usize) -> CreateEmbed {
    let per_page = 10;
    let total_pages = songs.len().div_ceil(per_page).max(1);
    let page = page.clamp(1, total_pages);

    let mut description = String::new();

    if let Some(song) = current {
        description.push_str(&format!(
            "**Now playing:** [{}]({}){}\n\n",
            song.title,
            song.url,
            song.duration
                .map_or(String::new(), |d| format!(" `{}`", format_length(d)))
        ));
    }

    if songs.is_empty() {
        description.push_str("The queue is empty.");
    } else {
        let start = (page - 1) * per_page;
        let end = (start + per_page).min(songs.len());

        for (i, song) in songs[start..end].iter().enumerate() {
            let num = start + i + 1;
            let dur = song
                .duration
                .map_or(String::new(), |d| format!(" `{}`", format_length(d)));
            description.push_str(&format!("**{num}.** [{}]({}){dur}\n", song.title, song.url));
        }
    }

    CreateEmbed::new()
        .title(format!("Queue ({page}/{total_pages})"))
        .description(description)
        .color(0x5865F2)
        .footer(CreateEmbedFooter::new(format!("{} tracks", songs.len())))
}

pub fn error(message: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("Error")
        .description(message)
        .color(0xED4245)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn songs(n: usize) -> Vec<Song> {
        (1..=n)
            .map(|i| Song {
                title: format!("Song {i}"),
                author: format!("Artist {i}"),
                url: String::new(),
                thumbnail: None,
                duration: None,
            })
            .collect()
    }

    #[test]
    fn test_queue_preview_short() {
        let (lines, overflow) = queue_preview(&songs(3));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], ("1".to_string(), "Song 1 - Artist 1".to_string()));
        assert!(overflow.is_none());
    }

    #[test]
    fn test_queue_preview_overflow() {
        let (lines, overflow) = queue_preview(&songs(27));
        assert_eq!(lines.len(), PLAYER_QUEUE_PREVIEW);
        assert_eq!(lines[19].0, "20");
        assert_eq!(overflow.as_deref(), Some("...7 more tracks in queue"));
    }

    #[test]
    fn test_queue_preview_exact_limit() {
        let (lines, overflow) = queue_preview(&songs(PLAYER_QUEUE_PREVIEW));
        assert_eq!(lines.len(), PLAYER_QUEUE_PREVIEW);
        assert!(overflow.is_none());
    }

    #[test]
    fn test_state_label() {
        assert_eq!(state_label(false), STATE_PLAYING);
        assert_eq!(state_label(true), STATE_PAUSED);
    }
}
