use crate::commands::CmdResult;
use crate::model::{EditSession, Review, ReviewList};

/// A review as shown to the user: its 1-based position plus whether it is
/// the one currently being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayReview {
    pub position: usize,
    pub review: Review,
    pub editing: bool,
}

pub fn run(list: &ReviewList, session: &EditSession) -> CmdResult {
    let listed = list
        .iter()
        .enumerate()
        .map(|(i, review)| DisplayReview {
            position: i + 1,
            review: review.clone(),
            editing: session.is_editing(review.id),
        })
        .collect();

    CmdResult::default().with_listed_reviews(listed)
}
