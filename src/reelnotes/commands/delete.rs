use crate::commands::{CmdMessage, CmdResult};
use crate::model::{EditSession, ReviewId, ReviewList};
use tracing::debug;

pub fn run(list: &mut ReviewList, session: &mut EditSession, id: ReviewId) -> CmdResult {
    let Some(review) = list.remove(id) else {
        debug!(id, "delete ignored: no such review");
        return CmdResult::default();
    };

    // The draft has nothing left to save into
    if session.is_editing(id) {
        *session = EditSession::Idle;
    }

    CmdResult::changed()
        .with_message(CmdMessage::success(format!(
            "Review deleted ({}): {}",
            review.id, review.title
        )))
        .with_affected_review(review)
}
