pub mod cache;
pub mod custom_queue;
pub mod guild_state;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::Error;

pub use cache::Cache;
pub use custom_queue::CustomQueues;
pub use guild_state::{GuildState, GuildStates, NowPlayingRef};

/// A whole-file JSON store. The full value is held in memory and rewritten on
/// every save; there are no partial writes.
pub struct JsonStore<T> {
    path: PathBuf,
    inner: RwLock<T>,
}

impl<T> JsonStore<T>
where
    T: Serialize + DeserializeOwned + Default + Send + Sync + 'static,
{
    /// Reads the file at `path`. A missing file starts an empty store.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();

        let value = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => T::default(),
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| format!("{} is not valid store data: {e}", path.display()))?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("{} not found, starting empty", path.display());
                T::default()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            inner: RwLock::new(value),
        })
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, T> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.inner.write().await
    }

    /// Serializes the whole value and replaces the file with it.
    pub async fn save(&self) -> Result<(), Error> {
        let bytes = {
            let value = self.inner.read().await;
            serde_json::to_vec_pretty(&*value)?
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        // Write next to the target first so a crash mid-write leaves the old file intact.
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    /// Saves every `period` until the task is aborted. Failures are logged and
    /// left for the next tick.
    pub fn spawn_autosave(self: Arc<Self>, period: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(period).await;
                if let Err(e) = self.save().await {
                    warn!("autosave of {} failed: {e}", self.path.display());
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("dj-bot-store-{}-{name}.json", std::process::id()))
    }

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let path = temp_path("missing");
        let _ = std::fs::remove_file(&path);

        let store: JsonStore<HashMap<u64, String>> = JsonStore::load(&path).await.unwrap();
        assert!(store.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let path = temp_path("round-trip");

        let store: JsonStore<HashMap<u64, Vec<String>>> = JsonStore::load(&path).await.unwrap();
        store
            .write()
            .await
            .insert(42, vec!["a".to_string(), "b".to_string()]);
        store.save().await.unwrap();

        let reloaded: JsonStore<HashMap<u64, Vec<String>>> = JsonStore::load(&path).await.unwrap();
        assert_eq!(*reloaded.read().await, *store.read().await);

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_save_overwrites_whole_file() {
        let path = temp_path("overwrite");

        let store: JsonStore<HashMap<u64, u32>> = JsonStore::load(&path).await.unwrap();
        store.write().await.insert(1, 1);
        store.write().await.insert(2, 2);
        store.save().await.unwrap();

        store.write().await.remove(&1);
        store.save().await.unwrap();

        let reloaded: JsonStore<HashMap<u64, u32>> = JsonStore::load(&path).await.unwrap();
        let value = reloaded.read().await;
        assert_eq!(value.len(), 1);
        assert_eq!(value.get(&2), Some(&2));

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let path = temp_path("corrupt");
        std::fs::write(&path, "{ not json").unwrap();

        let result: Result<JsonStore<HashMap<u64, u32>>, Error> = JsonStore::load(&path).await;
        assert!(result.is_err());

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_save_creates_parent_directory() {
        let dir = std::env::temp_dir().join(format!("dj-bot-store-{}-nested", std::process::id()));
        let path = dir.join("state.json");
        let _ = std::fs::remove_dir_all(&dir);

        let store: JsonStore<HashMap<u64, u32>> = JsonStore::load(&path).await.unwrap();
        store.save().await.unwrap();
        assert!(path.exists());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
