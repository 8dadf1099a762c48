use crate::commands::{non_blank, CmdMessage, CmdResult};
use crate::model::{Review, ReviewId, ReviewList};
use tracing::debug;

/// Append a review. `now` seeds the id; see [`ReviewList::next_id`].
pub fn run(list: &mut ReviewList, title: &str, body: &str, now: ReviewId) -> CmdResult {
    let (Some(title), Some(body)) = (non_blank(title), non_blank(body)) else {
        debug!("add ignored: blank title or review");
        return CmdResult::default();
    };

    let review = Review::new(list.next_id(now), title, body);
    list.push(review.clone());

    CmdResult::changed()
        .with_message(CmdMessage::success(format!(
            "Review added ({}): {}",
            review.id, review.title
        )))
        .with_affected_review(review)
}
