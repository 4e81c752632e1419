//! # aoclima-carousel
//!
//! The card rotator behind the "ACO Dapps." carousel on the AoclimaOptions
//! landing page.
//!
//! The crate has no browser dependencies. Timers are reached through the
//! [`Scheduler`] trait so the same rotator runs on browser timers in the
//! landing app and on a [`VirtualClock`] in tests.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use aoclima_carousel::{Card, CardAction, Deck, Rotator, RotatorTiming, VirtualClock};
//!
//! let deck = Deck::new(vec![
//!     Card::new("One", "First card", "Open", CardAction::Navigate("/one".into())),
//!     Card::new("Two", "Second card", "Open", CardAction::Navigate("/two".into())),
//! ])
//! .unwrap();
//!
//! let clock = VirtualClock::new();
//! let rotator = Rotator::mount(deck.len(), RotatorTiming::default(), clock.clone());
//!
//! clock.advance_by(Duration::from_millis(5_000));
//! assert_eq!(rotator.state().active_index(), 1);
//! assert!(rotator.state().is_transitioning());
//!
//! clock.advance_by(Duration::from_millis(500));
//! assert!(!rotator.state().is_transitioning());
//! ```
//!
//! ## Architecture
//!
//! - [`card`] - cards, the non-empty [`Deck`] and bounded [`CardIndex`]
//! - [`state`] - the pure [`RotatorState`] reducer
//! - [`rotator`] - [`Rotator`], which owns the state and its timers
//! - [`timer`] - the [`Scheduler`] seam and the deterministic [`VirtualClock`]
//! - [`navigation`] - the injected [`Navigator`] capability used by card actions

#![warn(missing_docs)]

pub mod card;
pub mod error;
pub mod navigation;
pub mod rotator;
pub mod state;
pub mod timer;

pub use card::{Card, CardAction, CardIndex, Deck};
pub use error::{CarouselError, Result};
pub use navigation::{Navigator, RecordingNavigator, SharedNavigator};
pub use rotator::{Rotator, RotatorTiming};
pub use state::{RotatorState, TransitionTicket};
pub use timer::{Scheduler, VirtualClock, VirtualHandle};
