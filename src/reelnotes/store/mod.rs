//! # Storage Layer
//!
//! Reviews live in a single named **slot**: one key whose value is the whole
//! review list serialized as a JSON array. The [`SlotStore`] trait is the only
//! thing the rest of the crate knows about persistence.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one `<key>.json` file per slot
//!   inside a data directory. Writes go to a temp file that is renamed over
//!   the target, so a reader never sees a half-written list.
//! - [`memory::InMemoryStore`]: no persistence, used by tests.
//!
//! ## Storage Format
//!
//! ```text
//! <data_dir>/
//! ├── movieReviews.json   # [{"id": 1, "title": "...", "review": "..."}, ...]
//! └── config.json         # ReelConfig
//! ```
//!
//! There is no versioning: the slot is overwritten wholesale on every change.

use crate::error::Result;
use crate::model::ReviewList;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract key-value storage holding whole serialized values.
pub trait SlotStore {
    /// Read the raw value of a slot. `Ok(None)` means the slot was never written.
    fn read_slot(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value of a slot.
    fn write_slot(&mut self, key: &str, value: &str) -> Result<()>;

    /// Location of the slot, for stores that have one.
    fn slot_path(&self, key: &str) -> Result<PathBuf>;
}

/// Read and decode the review list held in `key`.
pub fn load_list<S: SlotStore + ?Sized>(store: &S, key: &str) -> Result<Option<ReviewList>> {
    match store.read_slot(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Encode and write the full review list into `key`.
pub fn save_list<S: SlotStore + ?Sized>(store: &mut S, key: &str, list: &ReviewList) -> Result<()> {
    let raw = serde_json::to_string_pretty(list)?;
    store.write_slot(key, &raw)
}
