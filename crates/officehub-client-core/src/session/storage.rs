use std::{
    collections::HashMap,
    fmt::Debug,
    sync::{Arc, Mutex},
};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("persistent storage is unavailable: {0}")]
    Unavailable(String),
    #[error("failed to write persistent storage: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize persistent storage: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Key-value storage that survives restarting the client
pub trait SessionStorage: Debug {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<T: SessionStorage + ?Sized> SessionStorage for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Storage kept only in memory
///
/// Clones share the same underlying map which allows simulating a restart by
/// handing a clone to a new store
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.lock().expect("mutex poisoned").contains_key(key)
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.lock().expect("mutex poisoned").get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner
            .lock()
            .expect("mutex poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.inner.lock().expect("mutex poisoned").remove(key);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::FileStorage;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::*;
    use std::path::PathBuf;
    use tracing::{info, warn};

    /// Stores all keys as a single JSON object in a file, rewritten on every
    /// change
    #[derive(Debug)]
    pub struct FileStorage {
        path: PathBuf,
        values: HashMap<String, String>,
    }

    impl FileStorage {
        /// A missing or unreadable file starts out empty
        #[tracing::instrument]
        pub fn open(path: PathBuf) -> Self {
            let values = match std::fs::read_to_string(&path) {
                Ok(text) => match serde_json::from_str(&text) {
                    Ok(values) => values,
                    Err(e) => {
                        warn!(?e, "session file is corrupt, starting empty");
                        HashMap::new()
                    }
                },
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    info!("no session file found");
                    HashMap::new()
                }
                Err(e) => {
                    warn!(?e, "failed to read session file, starting empty");
                    HashMap::new()
                }
            };
            Self { path, values }
        }

        fn flush(&self) -> Result<(), StorageError> {
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            let text = serde_json::to_string_pretty(&self.values)?;
            std::fs::write(&self.path, text)?;
            Ok(())
        }
    }

    impl SessionStorage for FileStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.values.insert(key.to_string(), value.to_string());
            self.flush()
        }

        fn remove(&mut self, key: &str) -> Result<(), StorageError> {
            if self.values.remove(key).is_some() {
                self.flush()
            } else {
                Ok(())
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::LocalStorage;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::*;

    /// The browser's `window.localStorage`
    #[derive(Debug, Default)]
    pub struct LocalStorage;

    impl LocalStorage {
        fn storage() -> Result<web_sys::Storage, StorageError> {
            let window = web_sys::window()
                .ok_or_else(|| StorageError::Unavailable("no window found".to_string()))?;
            match window.local_storage() {
                Ok(Some(storage)) => Ok(storage),
                Ok(None) => Err(StorageError::Unavailable(
                    "local storage not supported".to_string(),
                )),
                Err(e) => Err(StorageError::Unavailable(format!("{e:?}"))),
            }
        }
    }

    impl SessionStorage for LocalStorage {
        fn get(&self, key: &str) -> Option<String> {
            Self::storage().ok()?.get_item(key).ok().flatten()
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            Self::storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
        }

        fn remove(&mut self, key: &str) -> Result<(), StorageError> {
            Self::storage()?
                .remove_item(key)
                .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
        }
    }
}
