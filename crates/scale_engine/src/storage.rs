use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use scale_logging::{scale_debug, scale_warn};

pub const TOKEN_KEY: &str = "token";
pub const CLIENT_ID_KEY: &str = "client_id";

/// A key/value store with a fixed lifetime scope.
pub trait ScopedStorage: Send + Sync {
    /// Short name used in diagnostics.
    fn scope(&self) -> &'static str;

    /// The trimmed value under `key`; missing and blank values are `None`.
    fn get(&self, key: &str) -> Option<String>;
}

/// Long-lived storage: one file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ScopedStorage for FileStorage {
    fn scope(&self) -> &'static str {
        "persistent"
    }

    fn get(&self, key: &str) -> Option<String> {
        let path = self.dir.join(key);
        match fs::read_to_string(&path) {
            Ok(text) => non_blank(&text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                scale_warn!("Failed to read {:?}: {}", path, err);
                None
            }
        }
    }
}

/// Session-scoped storage: `SCALE_SESSION_<KEY>` variables captured once.
#[derive(Debug, Clone, Default)]
pub struct EnvStorage {
    values: HashMap<String, String>,
}

impl EnvStorage {
    pub const PREFIX: &'static str = "SCALE_SESSION_";

    pub fn from_env() -> Self {
        Self::from_pairs(std::env::vars())
    }

    /// Keeps only the prefixed pairs, keyed by their lower-cased suffix.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let values = pairs
            .into_iter()
            .filter_map(|(name, value)| {
                let key = name.as_ref().strip_prefix(Self::PREFIX)?.to_lowercase();
                Some((key, value.into()))
            })
            .collect();
        Self { values }
    }
}

impl ScopedStorage for EnvStorage {
    fn scope(&self) -> &'static str {
        "session"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).and_then(|value| non_blank(value))
    }
}

/// Terminal identity and bearer token, read from scoped storage.
pub struct Credentials {
    persistent: Box<dyn ScopedStorage>,
    session: Box<dyn ScopedStorage>,
}

impl Credentials {
    pub fn new(persistent: Box<dyn ScopedStorage>, session: Box<dyn ScopedStorage>) -> Self {
        Self {
            persistent,
            session,
        }
    }

    /// Bearer token, preferring the persistent store over the session store.
    pub fn token(&self) -> Option<String> {
        for store in [&self.persistent, &self.session] {
            if let Some(token) = store.get(TOKEN_KEY) {
                scale_debug!("Using bearer token from {} storage", store.scope());
                return Some(token);
            }
        }
        scale_debug!("No bearer token in any storage");
        None
    }

    /// Client identifier; only the persistent store carries one.
    pub fn client_id(&self) -> Option<String> {
        self.persistent.get(CLIENT_ID_KEY)
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
