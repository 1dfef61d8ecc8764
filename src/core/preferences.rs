//! Bookmark list persisted through a [`Storage`] slot.

use crate::core::storage::Storage;
use crate::errors::AppResult;
use crate::models::bookmark::Bookmark;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Slot key holding the serialized preferences.
pub const STORAGE_KEY: &str = "hr-dashboard-storage";

const STATE_VERSION: u32 = 0;

#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedState {
    #[serde(default)]
    bookmarks: Vec<Bookmark>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    state: PersistedState,
    #[serde(default)]
    version: u32,
}

pub struct PreferenceStore<S: Storage> {
    storage: S,
    bookmarks: Vec<Bookmark>,
}

impl<S: Storage> PreferenceStore<S> {
    /// Open the store, reading any bookmarks saved by a previous run.
    ///
    /// An unreadable or corrupt slot is reported and replaced by an empty list.
    pub fn open(storage: S) -> Self {
        let bookmarks = match storage.load(STORAGE_KEY) {
            Ok(Some(bytes)) => match decode(&bytes) {
                Ok(list) => list,
                Err(e) => {
                    warn!("ignoring unreadable bookmark payload: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("bookmark storage unavailable, starting empty: {e}");
                Vec::new()
            }
        };

        debug!(count = bookmarks.len(), "bookmarks restored");
        Self { storage, bookmarks }
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn is_bookmarked(&self, employee_id: i64) -> bool {
        self.bookmarks.iter().any(|b| b.employee_id == employee_id)
    }

    /// Bookmark `employee_id` unless it already is. Returns true if inserted.
    pub fn add_bookmark(&mut self, employee_id: i64) -> bool {
        self.insert(Bookmark::new(employee_id))
    }

    /// Insert a fully built bookmark, keeping at most one per employee.
    pub fn insert(&mut self, bookmark: Bookmark) -> bool {
        if self.is_bookmarked(bookmark.employee_id) {
            return false;
        }
        self.bookmarks.push(bookmark);
        self.persist();
        true
    }

    /// Drop the bookmark for `employee_id`. Returns true if one was removed.
    pub fn remove_bookmark(&mut self, employee_id: i64) -> bool {
        let before = self.bookmarks.len();
        self.bookmarks.retain(|b| b.employee_id != employee_id);
        let removed = self.bookmarks.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    /// Flip the bookmark state and return the new state.
    pub fn toggle_bookmark(&mut self, employee_id: i64) -> bool {
        if self.remove_bookmark(employee_id) {
            false
        } else {
            self.add_bookmark(employee_id)
        }
    }

    /// Keep only the bookmarks matching `keep`. Returns how many were dropped.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&Bookmark) -> bool,
    {
        let before = self.bookmarks.len();
        self.bookmarks.retain(|b| keep(b));
        let dropped = before - self.bookmarks.len();
        if dropped > 0 {
            self.persist();
        }
        dropped
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&mut self) {
        let result = encode(&self.bookmarks)
            .and_then(|bytes| self.storage.save(STORAGE_KEY, &bytes));
        if let Err(e) = result {
            warn!("bookmarks kept in memory only, save failed: {e}");
        }
    }
}

fn decode(bytes: &[u8]) -> AppResult<Vec<Bookmark>> {
    let envelope: Envelope = serde_json::from_slice(bytes)?;
    let mut out: Vec<Bookmark> = Vec::with_capacity(envelope.state.bookmarks.len());
    for b in envelope.state.bookmarks {
        if !out.iter().any(|x| x.employee_id == b.employee_id) {
            out.push(b);
        }
    }
    Ok(out)
}

fn encode(bookmarks: &[Bookmark]) -> AppResult<Vec<u8>> {
    let envelope = Envelope {
        state: PersistedState {
            bookmarks: bookmarks.to_vec(),
        },
        version: STATE_VERSION,
    };
    Ok(serde_json::to_vec(&envelope)?)
}
