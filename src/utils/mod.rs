pub mod components;
pub mod embed;
pub mod now_playing;
pub mod time;
pub mod voice;
