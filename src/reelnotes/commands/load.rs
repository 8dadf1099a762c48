use crate::commands::{CmdMessage, CmdResult};
use crate::model::{seed_reviews, ReviewList};
use tracing::{debug, warn};

/// What was found in the review slot at startup.
#[derive(Debug)]
pub enum SlotState {
    /// Never written.
    Missing,
    /// Present but could not be read or decoded.
    Unreadable(String),
    Present(ReviewList),
}

/// Decide the starting list. A slot that was never initialized (or cannot
/// be read) gets the example reviews, and `changed` asks for them to be
/// written back. An initialized but empty slot stays empty unless
/// `reseed_when_empty` is set.
pub fn run(state: SlotState, reseed_when_empty: bool) -> (ReviewList, CmdResult) {
    match state {
        SlotState::Present(list) if !list.is_empty() => {
            debug!(count = list.len(), "loaded reviews");
            let mut result = CmdResult::default();
            let dups = list.duplicate_ids();
            if !dups.is_empty() {
                warn!(?dups, "stored reviews share ids");
                result.add_message(CmdMessage::warning(format!(
                    "Stored reviews share ids {:?}; edit and delete only reach the first of each",
                    dups
                )));
            }
            (list, result)
        }
        SlotState::Present(list) if !reseed_when_empty => {
            debug!("review slot is empty; not reseeding");
            (list, CmdResult::default())
        }
        SlotState::Present(_) => seeded(CmdMessage::info("No reviews left, restoring examples")),
        SlotState::Missing => seeded(CmdMessage::info("Starting with example reviews")),
        SlotState::Unreadable(reason) => {
            warn!(%reason, "review slot unreadable, starting over");
            seeded(CmdMessage::warning(format!(
                "Stored reviews could not be read ({}); starting with example reviews",
                reason
            )))
        }
    }
}

fn seeded(message: CmdMessage) -> (ReviewList, CmdResult) {
    (seed_reviews(), CmdResult::changed().with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Review;

    #[test]
    fn missing_slot_is_seeded() {
        let (list, result) = run(SlotState::Missing, false);
        assert!(result.changed);
        assert_eq!(list, seed_reviews());
    }

    #[test]
    fn unreadable_slot_is_seeded_with_warning() {
        let (list, result) = run(SlotState::Unreadable("bad json".into()), false);
        assert!(result.changed);
        assert_eq!(list.len(), 3);
        assert_eq!(
            result.messages[0].level,
            crate::commands::MessageLevel::Warning
        );
    }

    #[test]
    fn stored_reviews_are_kept() {
        let stored = ReviewList::from(vec![Review::new(42, "Heat", "Great diner scene.")]);
        let (list, result) = run(SlotState::Present(stored.clone()), true);
        assert!(!result.changed);
        assert_eq!(list, stored);
    }

    #[test]
    fn duplicate_ids_are_reported_and_kept() {
        let stored = ReviewList::from(vec![
            Review::new(5, "Heat", "Diner scene."),
            Review::new(5, "Ronin", "Car chases."),
        ]);
        let (list, result) = run(SlotState::Present(stored.clone()), false);

        assert!(!result.changed);
        assert_eq!(list, stored);
        assert_eq!(result.messages.len(), 1);
        assert_eq!(
            result.messages[0].level,
            crate::commands::MessageLevel::Warning
        );
        assert!(result.messages[0].content.contains("[5]"));
    }

    #[test]
    fn emptied_slot_stays_empty_by_default() {
        let (list, result) = run(SlotState::Present(ReviewList::new()), false);
        assert!(!result.changed);
        assert!(list.is_empty());
    }

    #[test]
    fn emptied_slot_is_reseeded_when_configured() {
        let (list, result) = run(SlotState::Present(ReviewList::new()), true);
        assert!(result.changed);
        assert_eq!(list, seed_reviews());
    }
}
