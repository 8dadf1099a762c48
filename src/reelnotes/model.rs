use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Identifier of a review. New reviews get their creation time in
/// milliseconds since the Unix epoch.
pub type ReviewId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub title: String,
    // Stored under the key "review"
    #[serde(rename = "review")]
    pub body: String,
}

impl Review {
    pub fn new(id: ReviewId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Ordered list of reviews. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewList {
    reviews: Vec<Review>,
}

impl ReviewList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Review> {
        self.reviews.iter()
    }

    pub fn as_slice(&self) -> &[Review] {
        &self.reviews
    }

    pub fn get(&self, id: ReviewId) -> Option<&Review> {
        self.reviews.iter().find(|r| r.id == id)
    }

    pub fn get_mut(&mut self, id: ReviewId) -> Option<&mut Review> {
        self.reviews.iter_mut().find(|r| r.id == id)
    }

    pub fn contains(&self, id: ReviewId) -> bool {
        self.get(id).is_some()
    }

    /// Appends a review. Callers are responsible for id uniqueness.
    pub fn push(&mut self, review: Review) {
        self.reviews.push(review);
    }

    /// Removes the review with `id`, keeping the others in order.
    pub fn remove(&mut self, id: ReviewId) -> Option<Review> {
        let pos = self.reviews.iter().position(|r| r.id == id)?;
        Some(self.reviews.remove(pos))
    }

    /// Ids that occur more than once, in first-seen order.
    pub fn duplicate_ids(&self) -> Vec<ReviewId> {
        let mut seen = HashSet::new();
        let mut dups = Vec::new();
        for review in &self.reviews {
            if !seen.insert(review.id) && !dups.contains(&review.id) {
                dups.push(review.id);
            }
        }
        dups
    }

    /// Returns `now` if unused, otherwise the next free id above it.
    pub fn next_id(&self, now: ReviewId) -> ReviewId {
        let mut id = now;
        while self.contains(id) {
            id += 1;
        }
        id
    }
}

impl From<Vec<Review>> for ReviewList {
    fn from(reviews: Vec<Review>) -> Self {
        Self { reviews }
    }
}

impl<'a> IntoIterator for &'a ReviewList {
    type Item = &'a Review;
    type IntoIter = std::slice::Iter<'a, Review>;

    fn into_iter(self) -> Self::IntoIter {
        self.reviews.iter()
    }
}

/// The example reviews a fresh store starts with.
pub fn seed_reviews() -> ReviewList {
    ReviewList::from(vec![
        Review::new(1, "Jurassic Park", "Dinos are totally rad! Two thumbs up!"),
        Review::new(2, "The Matrix", "Whoa, mind-bending stuff. Cool effects!"),
        Review::new(3, "Titanic", "Epic love story. Bring tissues!"),
    ])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Body,
}

/// Unsaved text for the review being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub body: String,
}

impl Draft {
    pub fn from_review(review: &Review) -> Self {
        Self {
            title: review.title.clone(),
            body: review.body.clone(),
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Title => self.title = value,
            DraftField::Body => self.body = value,
        }
    }
}

/// At most one review is being edited at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Idle,
    Editing { target_id: ReviewId, draft: Draft },
}

impl EditSession {
    pub fn target_id(&self) -> Option<ReviewId> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing { target_id, .. } => Some(*target_id),
        }
    }

    pub fn draft(&self) -> Option<&Draft> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn is_editing(&self, id: ReviewId) -> bool {
        self.target_id() == Some(id)
    }
}
