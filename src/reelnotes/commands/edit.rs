//! The edit session: `begin` copies a review into a draft, `update_draft`
//! changes the draft, `commit` writes it back (or drops it) and always
//! returns the session to [`EditSession::Idle`].

use crate::commands::{non_blank, CmdMessage, CmdResult};
use crate::model::{Draft, DraftField, EditSession, ReviewId, ReviewList};
use tracing::debug;

/// Start editing `id`. Any unsaved draft for another review is discarded.
pub fn begin(list: &ReviewList, session: &mut EditSession, id: ReviewId) -> CmdResult {
    let Some(review) = list.get(id) else {
        debug!(id, "edit ignored: no such review");
        return CmdResult::default();
    };

    if let Some(previous) = session.target_id().filter(|&prev| prev != id) {
        debug!(previous, id, "discarding unsaved draft");
    }

    *session = EditSession::Editing {
        target_id: id,
        draft: Draft::from_review(review),
    };

    CmdResult::default().with_message(CmdMessage::info(format!(
        "Editing ({}): {}",
        review.id, review.title
    )))
}

pub fn update_draft(session: &mut EditSession, field: DraftField, value: String) -> CmdResult {
    match session {
        EditSession::Editing { draft, .. } => draft.set(field, value),
        EditSession::Idle => debug!(?field, "draft update ignored: not editing"),
    }
    CmdResult::default()
}

pub fn commit(list: &mut ReviewList, session: &mut EditSession) -> CmdResult {
    let EditSession::Editing { target_id, draft } = std::mem::take(session) else {
        debug!("commit ignored: not editing");
        return CmdResult::default();
    };

    let (Some(title), Some(body)) = (non_blank(&draft.title), non_blank(&draft.body)) else {
        debug!(target_id, "edit discarded: blank title or review");
        return CmdResult::default();
    };

    let Some(review) = list.get_mut(target_id) else {
        debug!(target_id, "edit discarded: review no longer exists");
        return CmdResult::default();
    };

    review.title = title.to_string();
    review.body = body.to_string();
    let review = review.clone();

    CmdResult::changed()
        .with_message(CmdMessage::success(format!(
            "Review updated ({}): {}",
            review.id, review.title
        )))
        .with_affected_review(review)
}
