use super::SlotStore;
use crate::error::{ReelError, Result};
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    slots: HashMap<String, String>,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail, to exercise storage error paths.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl SlotStore for InMemoryStore {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn write_slot(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(ReelError::Store(format!("write to {} refused", key)));
        }
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf> {
        Ok(PathBuf::from(format!("memory://{}", key)))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Review, ReviewList};
    use crate::store::save_list;

    pub const KEY: &str = "movieReviews";

    pub struct StoreFixture {
        pub store: InMemoryStore,
        list: ReviewList,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                list: ReviewList::new(),
            }
        }

        pub fn with_review(mut self, id: i64, title: &str, body: &str) -> Self {
            self.list.push(Review::new(id, title, body));
            save_list(&mut self.store, KEY, &self.list).unwrap();
            self
        }

        pub fn with_reviews(mut self, count: usize) -> Self {
            for i in 0..count {
                let n = i + 1;
                self.list.push(Review::new(
                    100 + n as i64,
                    format!("Movie {}", n),
                    format!("Review of movie {}", n),
                ));
            }
            save_list(&mut self.store, KEY, &self.list).unwrap();
            self
        }

        /// An initialized slot holding no reviews.
        pub fn emptied(mut self) -> Self {
            save_list(&mut self.store, KEY, &ReviewList::new()).unwrap();
            self
        }

        pub fn with_raw(mut self, raw: &str) -> Self {
            self.store.write_slot(KEY, raw).unwrap();
            self
        }
    }
}
