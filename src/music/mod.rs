pub mod player;
pub mod queue;
pub mod source;

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use serenity::model::id::GuildId;
use songbird::tracks::TrackHandle;
use tokio::sync::RwLock;

pub const DEFAULT_VOLUME: f32 = 1.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Song {
    pub title: String,
    pub author: String,
    pub url: String,
    pub thumbnail: Option<String>,
    /// Length in seconds, when the source reports one.
    pub duration: Option<u64>,
}

pub struct GuildQueue {
    pub songs: VecDeque<Song>,
    pub current_song: Option<Song>,
    pub volume: f32,
    pub track_handle: Option<TrackHandle>,
}

impl Default for GuildQueue {
    fn default() -> Self {
        Self {
            songs: VecDeque::new(),
            current_song: None,
            volume: DEFAULT_VOLUME,
            track_handle: None,
        }
    }
}

pub type QueueManager = Arc<RwLock<HashMap<GuildId, GuildQueue>>>;

pub fn new_queue_manager() -> QueueManager {
    Arc::new(RwLock::new(HashMap::new()))
}
