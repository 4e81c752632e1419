//! The card rotator: state plus the timers that drive it.
//!
//! Mounting arms a repeating auto-advance timer. Every transition arms a
//! one-shot settle timer that clears the transition flag. The auto-advance
//! timer is re-armed whenever the active card changes, so a manual
//! selection restarts the full countdown. Selecting the card that is already
//! visible leaves the countdown alone.
//!
//! Timer callbacks only hold a weak reference to the rotator, and the rotator
//! owns the timer handles. Unmounting (or dropping) the rotator cancels both
//! timers; anything that still fires afterwards finds nothing to mutate.

use std::cell::{Cell, RefCell};
use std::num::NonZeroUsize;
use std::rc::Rc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::card::CardIndex;
use crate::error::{CarouselError, Result};
use crate::state::{RotatorState, TransitionTicket};
use crate::timer::Scheduler;

/// Timing knobs for the rotator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotatorTiming {
    /// Auto-advance period in milliseconds
    pub advance_every_ms: u64,
    /// Length of the transition flag in milliseconds
    pub transition_ms: u64,
}

impl Default for RotatorTiming {
    fn default() -> Self {
        Self {
            advance_every_ms: 5_000,
            transition_ms: 500,
        }
    }
}

impl RotatorTiming {
    /// Auto-advance period.
    pub fn advance_every(&self) -> Duration {
        Duration::from_millis(self.advance_every_ms)
    }

    /// Transition length.
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    /// Reject zero durations.
    pub fn validate(&self) -> Result<()> {
        if self.advance_every_ms == 0 {
            return Err(CarouselError::ZeroDuration {
                field: "advance_every_ms",
            });
        }
        if self.transition_ms == 0 {
            return Err(CarouselError::ZeroDuration {
                field: "transition_ms",
            });
        }
        Ok(())
    }
}

type Listener = Rc<dyn Fn(&RotatorState)>;

struct Shared<S: Scheduler> {
    len: NonZeroUsize,
    timing: RotatorTiming,
    scheduler: S,
    state: Cell<RotatorState>,
    mounted: Cell<bool>,
    auto_advance_timer: RefCell<Option<S::Handle>>,
    settle_timer: RefCell<Option<S::Handle>>,
    listeners: RefCell<Vec<Listener>>,
}

impl<S: Scheduler + 'static> Shared<S> {
    fn advance(self: &Rc<Self>) {
        if !self.mounted.get() {
            return;
        }
        let mut state = self.state.get();
        let before = state.active();
        let ticket = state.advance(self.len);
        debug!(from = before.get(), to = state.active_index(), "carousel advance");
        self.apply(state, before, ticket);
    }

    fn select(self: &Rc<Self>, index: usize) -> Result<()> {
        if !self.mounted.get() {
            return Ok(());
        }
        let index = CardIndex::checked(index, self.len)?;
        let mut state = self.state.get();
        let before = state.active();
        let ticket = state.select(index);
        debug!(from = before.get(), to = index.get(), "carousel select");
        self.apply(state, before, ticket);
        Ok(())
    }

    fn settle(&self, ticket: TransitionTicket) {
        if !self.mounted.get() {
            return;
        }
        let mut state = self.state.get();
        if state.settle(ticket) {
            self.commit(state);
        }
    }

    fn apply(self: &Rc<Self>, state: RotatorState, before: CardIndex, ticket: TransitionTicket) {
        self.commit(state);
        self.arm_settle(ticket);
        if state.active() != before {
            self.arm_auto_advance();
        }
    }

    fn commit(&self, state: RotatorState) {
        self.state.set(state);
        // listeners may register further listeners
        let listeners: Vec<Listener> = self.listeners.borrow().clone();
        for listener in listeners {
            listener(&state);
        }
    }

    fn arm_auto_advance(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        let task = Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.advance();
            }
        });

        // Replacing the slot drops, and so cancels, the previous interval.
        let previous = match self.scheduler.every(self.timing.advance_every(), task) {
            Ok(handle) => self.auto_advance_timer.replace(Some(handle)),
            Err(err) => {
                error!(error = %err, "carousel auto-advance disabled");
                self.auto_advance_timer.take()
            }
        };
        drop(previous);
    }

    fn arm_settle(self: &Rc<Self>, ticket: TransitionTicket) {
        let weak = Rc::downgrade(self);
        let task = Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.settle(ticket);
            }
        });

        match self.scheduler.once(self.timing.transition(), task) {
            Ok(handle) => drop(self.settle_timer.replace(Some(handle))),
            Err(err) => {
                error!(error = %err, "carousel transition timer failed, settling now");
                drop(self.settle_timer.take());
                self.settle(ticket);
            }
        }
    }

    fn teardown(&self) {
        self.mounted.set(false);
        drop(self.auto_advance_timer.take());
        drop(self.settle_timer.take());
        self.listeners.borrow_mut().clear();
    }
}

/// Owner of the rotator state and its timers.
///
/// Single-threaded by construction: it is neither `Send` nor `Sync`.
pub struct Rotator<S: Scheduler + 'static> {
    shared: Rc<Shared<S>>,
}

impl<S: Scheduler + 'static> Rotator<S> {
    /// Start rotating a deck of `len` cards, beginning at the first card.
    pub fn mount(len: NonZeroUsize, timing: RotatorTiming, scheduler: S) -> Self {
        let shared = Rc::new(Shared {
            len,
            timing,
            scheduler,
            state: Cell::new(RotatorState::default()),
            mounted: Cell::new(true),
            auto_advance_timer: RefCell::new(None),
            settle_timer: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        });
        shared.arm_auto_advance();
        info!(
            cards = len.get(),
            advance_every_ms = timing.advance_every_ms,
            transition_ms = timing.transition_ms,
            "carousel rotator mounted"
        );
        Self { shared }
    }

    /// Current snapshot.
    pub fn state(&self) -> RotatorState {
        self.shared.state.get()
    }

    /// Show the next card, wrapping after the last.
    pub fn advance(&self) {
        self.shared.advance();
    }

    /// Jump to a checked index.
    ///
    /// An index checked against a different deck length is ignored with a
    /// warning.
    pub fn select(&self, index: CardIndex) {
        if let Err(err) = self.shared.select(index.get()) {
            warn!(error = %err, "carousel selection ignored");
        }
    }

    /// Jump to a raw position, rejecting anything outside the deck.
    ///
    /// State is untouched on error.
    pub fn select_index(&self, index: usize) -> Result<()> {
        self.shared.select(index).inspect_err(|err| {
            warn!(error = %err, "carousel selection rejected");
        })
    }

    /// Call `listener` with the new snapshot after every change.
    pub fn on_change(&self, listener: impl Fn(&RotatorState) + 'static) {
        self.shared.listeners.borrow_mut().push(Rc::new(listener));
    }

    /// Stop the rotator and cancel its timers.
    pub fn unmount(self) {
        debug!("carousel rotator unmounting");
        drop(self);
    }
}

impl<S: Scheduler + 'static> Drop for Rotator<S> {
    fn drop(&mut self) {
        self.shared.teardown();
    }
}
