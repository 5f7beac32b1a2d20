use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serenity::model::channel::Message;
use serenity::model::id::{ChannelId, GuildId, MessageId};

/// Autocomplete never offers more than this many choices.
pub const MAX_SUGGESTIONS: usize = 25;

pub type GuildStates = HashMap<GuildId, GuildState>;

/// Where the player message of a guild lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NowPlayingRef {
    pub channel_id: ChannelId,
    pub message_id: MessageId,
}

impl From<&Message> for NowPlayingRef {
    fn from(message: &Message) -> Self {
        Self {
            channel_id: message.channel_id,
            message_id: message.id,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GuildState {
    #[serde(rename = "loop")]
    pub looping: bool,
    pub message_id: Option<NowPlayingRef>,
    pub known_songs: Vec<String>,
    /// Last fetched copy of the player message. Never written to disk.
    #[serde(skip)]
    pub message: Option<Message>,
}

impl GuildState {
    pub fn loop_label(&self) -> &'static str {
        loop_label(self.looping)
    }

    /// Records a title for autocomplete. Returns false if it was already known.
    pub fn remember_song(&mut self, title: &str) -> bool {
        if self.known_songs.iter().any(|s| s == title) {
            return false;
        }
        self.known_songs.push(title.to_string());
        true
    }

    /// Known titles containing `partial`, ignoring case.
    pub fn suggestions(&self, partial: &str) -> Vec<String> {
        let needle = partial.to_lowercase();
        self.known_songs
            .iter()
            .filter(|song| song.to_lowercase().contains(&needle))
            .take(MAX_SUGGESTIONS)
            .cloned()
            .collect()
    }

    pub fn set_now_playing(&mut self, message: Message) {
        self.message_id = Some(NowPlayingRef::from(&message));
        self.message = Some(message);
    }

    pub fn clear_now_playing(&mut self) {
        self.message_id = None;
        self.message = None;
    }
}

pub fn loop_label(looping: bool) -> &'static str {
    if looping {
        ":white_check_mark: Looping"
    } else {
        ":x: Not Looping"
    }
}
