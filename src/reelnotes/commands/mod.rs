//! # Command Layer
//!
//! Pure operations on a [`ReviewList`](crate::model::ReviewList) and an
//! [`EditSession`](crate::model::EditSession). Nothing in here touches
//! storage or the terminal; the [`manager`](crate::manager) decides when to
//! persist based on [`CmdResult::changed`].
//!
//! Rejected input (blank text, unknown ids) is not an error. Commands return
//! an empty result and log at debug level.

use crate::model::Review;

pub mod add;
pub mod delete;
pub mod edit;
pub mod list;
pub mod load;

pub use list::DisplayReview;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// The review list was modified and must be written back.
    pub changed: bool,
    pub affected_reviews: Vec<Review>,
    pub listed_reviews: Vec<DisplayReview>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn changed() -> Self {
        Self {
            changed: true,
            ..Self::default()
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_review(mut self, review: Review) -> Self {
        self.affected_reviews.push(review);
        self
    }

    pub fn with_listed_reviews(mut self, reviews: Vec<DisplayReview>) -> Self {
        self.listed_reviews = reviews;
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    /// Fold another result into this one, as when one user action runs
    /// several commands.
    pub fn merge(&mut self, other: CmdResult) {
        self.changed |= other.changed;
        self.affected_reviews.extend(other.affected_reviews);
        self.listed_reviews.extend(other.listed_reviews);
        self.messages.extend(other.messages);
    }
}

/// Trimmed text, or `None` when nothing but whitespace is left.
pub(crate) fn non_blank(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
