mod custom_queue;
mod help;
mod loop_cmd;
mod nowplaying;
mod pause;
mod play;
mod queue;
mod save;
mod seek;
mod skip;
mod stop;
mod volume;

use crate::{Data, Error};

pub fn all() -> Vec<poise::Command<Data, Error>> {
    vec![
        help::help(),
        play::play(),
        skip::skip(),
        stop::stop(),
        pause::pause(),
        pause::resume(),
        loop_cmd::loop_cmd(),
        nowplaying::nowplaying(),
        queue::queue(),
        seek::skip_to(),
        seek::forward(),
        seek::position(),
        volume::volume(),
        custom_queue::custom_queue(),
        custom_queue::play_queue(),
        custom_queue::manage_queue(),
        save::save(),
        save::sync(),
    ]
}
