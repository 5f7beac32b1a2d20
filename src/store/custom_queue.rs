use std::collections::{BTreeMap, HashMap};

use serenity::model::id::GuildId;

/// guild -> queue name -> song titles, in play order.
pub type CustomQueues = HashMap<GuildId, BTreeMap<String, Vec<String>>>;

pub fn names(queues: &CustomQueues, guild_id: GuildId) -> Vec<String> {
    queues
        .get(&guild_id)
        .map(|q| q.keys().cloned().collect())
        .unwrap_or_default()
}

pub fn songs(queues: &CustomQueues, guild_id: GuildId, name: &str) -> Option<Vec<String>> {
    queues.get(&guild_id).and_then(|q| q.get(name)).cloned()
}

/// Creates or replaces a named queue.
pub fn put(queues: &mut CustomQueues, guild_id: GuildId, name: &str, songs: Vec<String>) {
    queues
        .entry(guild_id)
        .or_default()
        .insert(name.to_string(), songs);
}

/// Appends to an existing queue. Returns the new length, or `None` if the
/// queue does not exist.
pub fn push(
    queues: &mut CustomQueues,
    guild_id: GuildId,
    name: &str,
    title: &str,
) -> Option<usize> {
    let queue = queues.get_mut(&guild_id)?.get_mut(name)?;
    queue.push(title.to_string());
    Some(queue.len())
}
