//! Pure rotator state.
//!
//! [`RotatorState`] knows nothing about timers. Every transition hands back a
//! [`TransitionTicket`]; the owner schedules the settle and presents the
//! ticket when the delay elapses. Only the ticket of the latest transition
//! clears the flag, so a burst of calls settles one delay after the last one.

use std::num::NonZeroUsize;

use crate::card::CardIndex;

/// Identifies one transition so a stale settle can be told apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "the ticket must be presented to `settle` to clear the transition"]
pub struct TransitionTicket(u64);

/// Which card is shown and whether the slide animation is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotatorState {
    active: CardIndex,
    transitioning: bool,
    epoch: u64,
}

impl Default for RotatorState {
    fn default() -> Self {
        Self {
            active: CardIndex::FIRST,
            transitioning: false,
            epoch: 0,
        }
    }
}

impl RotatorState {
    /// Position of the visible card.
    pub fn active_index(&self) -> usize {
        self.active.get()
    }

    /// The visible card as a checked index.
    pub fn active(&self) -> CardIndex {
        self.active
    }

    /// True between a transition and its settle.
    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Move to the next card, wrapping after the last.
    pub fn advance(&mut self, len: NonZeroUsize) -> TransitionTicket {
        self.active = self.active.next(len);
        self.begin_transition()
    }

    /// Jump straight to `index`.
    pub fn select(&mut self, index: CardIndex) -> TransitionTicket {
        self.active = index;
        self.begin_transition()
    }

    /// Clear the transition flag if `ticket` belongs to the latest transition.
    ///
    /// Returns whether the state changed.
    pub fn settle(&mut self, ticket: TransitionTicket) -> bool {
        if ticket.0 != self.epoch || !self.transitioning {
            return false;
        }
        self.transitioning = false;
        true
    }

    fn begin_transition(&mut self) -> TransitionTicket {
        self.epoch = self.epoch.wrapping_add(1);
        self.transitioning = true;
        TransitionTicket(self.epoch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn len(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn starts_on_first_card_at_rest() {
        let state = RotatorState::default();
        assert_eq!(state.active_index(), 0);
        assert!(!state.is_transitioning());
    }

    #[test]
    fn two_cards_wrap_after_second_advance() {
        let mut state = RotatorState::default();
        let _ = state.advance(len(2));
        assert_eq!(state.active_index(), 1);
        let _ = state.advance(len(2));
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn stale_ticket_does_not_settle() {
        let mut state = RotatorState::default();
        let first = state.advance(len(3));
        let second = state.select(CardIndex::checked(0, len(3)).unwrap());

        assert!(!state.settle(first));
        assert!(state.is_transitioning());
        assert!(state.settle(second));
        assert!(!state.is_transitioning());
        // settling twice is a no-op
        assert!(!state.settle(second));
    }

    proptest! {
        #[test]
        fn n_advances_land_on_i_plus_n_mod_len(count in 1usize..16, start in 0usize..16, steps in 0usize..64) {
            let deck_len = len(count);
            let start = start % count;
            let mut state = RotatorState::default();
            let _ = state.select(CardIndex::checked(start, deck_len).unwrap());
            for _ in 0..steps {
                let _ = state.advance(deck_len);
            }
            prop_assert_eq!(state.active_index(), (start + steps) % count);
        }

        #[test]
        fn select_sets_exact_index(count in 1usize..16, picks in proptest::collection::vec(0usize..16, 1..8)) {
            let deck_len = len(count);
            let mut state = RotatorState::default();
            for pick in picks {
                let target = pick % count;
                let _ = state.select(CardIndex::checked(target, deck_len).unwrap());
                prop_assert_eq!(state.active_index(), target);
                prop_assert!(state.is_transitioning());
            }
        }
    }
}
