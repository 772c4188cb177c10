use super::{FailurePolicy, StoreError};
use crate::configuration::BlogStoreSettings;
use crate::domain::BlogPost;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Result of a read under the store's failure policy.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub posts: Vec<BlogPost>,
    /// Set when a storage failure was absorbed and `posts` is empty because
    /// of it, not because the collection is empty.
    pub degraded: bool,
}

/// Outcome of a [`BlogStore::modify`] closure.
pub enum Change<T> {
    /// Persist the mutated collection.
    Commit(T),
    /// Leave the file alone.
    Discard(T),
}

/// JSON-file backed blog post collection.
///
/// All access to the file from this process goes through one mutex, so
/// read/modify/write cycles do not lose each other's updates. Other
/// processes writing the same file are not coordinated.
#[derive(Debug)]
pub struct BlogStore {
    path: PathBuf,
    policy: FailurePolicy,
    lock: Mutex<()>,
}

impl BlogStore {
    pub fn new(path: impl Into<PathBuf>, policy: FailurePolicy) -> Self {
        Self {
            path: path.into(),
            policy,
            lock: Mutex::new(()),
        }
    }

    pub fn from_settings(settings: &BlogStoreSettings) -> Self {
        Self::new(settings.file_path(), settings.failure_policy)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Load every post. Failures are logged and read as an empty collection.
    #[tracing::instrument(name = "Load blog posts", skip(self), fields(path = %self.path.display()))]
    pub fn load_blog_posts(&self) -> Vec<BlogPost> {
        let result = self.guard().and_then(|_guard| self.read_file());
        match result {
            Ok(posts) => posts,
            Err(error) => {
                tracing::error!(error.cause_chain = ?error, "Failed to load blog posts");
                Vec::new()
            }
        }
    }

    /// Replace the stored collection. Failures are logged and dropped.
    #[tracing::instrument(name = "Save blog posts", skip(self, posts), fields(path = %self.path.display(), count = posts.len()))]
    pub fn save_blog_posts(&self, posts: &[BlogPost]) {
        if let Err(error) = self.try_save(posts) {
            tracing::error!(error.cause_chain = ?error, "Failed to save blog posts");
        }
    }

    /// Replace the stored collection, reporting failures to the caller.
    pub fn try_save(&self, posts: &[BlogPost]) -> Result<(), StoreError> {
        let _guard = self.guard()?;
        self.write_file(posts)
    }

    /// Load every post, applying the configured [`FailurePolicy`].
    #[tracing::instrument(name = "Read blog store snapshot", skip(self), fields(path = %self.path.display()))]
    pub fn read(&self) -> Result<Snapshot, StoreError> {
        let result = self.guard().and_then(|_guard| self.read_file());
        match (result, self.policy) {
            (Ok(posts), _) => Ok(Snapshot {
                posts,
                degraded: false,
            }),
            (Err(error), FailurePolicy::BestEffort) => {
                tracing::warn!(
                    error.cause_chain = ?error,
                    "Serving an empty blog collection after a storage failure"
                );
                Ok(Snapshot {
                    posts: Vec::new(),
                    degraded: true,
                })
            }
            (Err(error), FailurePolicy::FailLoudly) => Err(error),
        }
    }

    /// Run one read/modify/write cycle while holding the writer lock.
    ///
    /// A missing file counts as an empty collection. Any other read or parse
    /// failure is returned regardless of the failure policy, so a damaged
    /// file is never replaced by a mutated empty collection.
    pub fn modify<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Vec<BlogPost>) -> Change<T>,
    {
        let _guard = self.guard()?;
        let mut posts = self.read_file()?;
        match f(&mut posts) {
            Change::Commit(value) => {
                self.write_file(&posts)?;
                Ok(value)
            }
            Change::Discard(value) => Ok(value),
        }
    }

    fn guard(&self) -> Result<MutexGuard<'_, ()>, StoreError> {
        self.lock.lock().map_err(|_| StoreError::Poisoned)
    }

    fn ensure_directory(&self) -> Result<(), StoreError> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                    path: parent.to_path_buf(),
                    source,
                })
            }
            _ => Ok(()),
        }
    }

    fn read_file(&self) -> Result<Vec<BlogPost>, StoreError> {
        self.ensure_directory()?;
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Sibling file the next collection is written to before it replaces
    /// the posts file.
    pub fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_file(&self, posts: &[BlogPost]) -> Result<(), StoreError> {
        self.ensure_directory()?;
        let json = serde_json::to_string_pretty(posts).map_err(StoreError::Serialize)?;
        let staging = self.staging_path();
        std::fs::write(&staging, json).map_err(|source| StoreError::Io {
            path: staging.clone(),
            source,
        })?;
        std::fs::rename(&staging, &self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
