//! Cards and the deck they live in.
//!
//! A [`Deck`] is never empty, and a [`CardIndex`] is only handed out after it
//! has been checked against a deck length. Together they keep the rotator's
//! active index valid without runtime recovery.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::error::{CarouselError, Result};
use crate::navigation::Navigator;

/// What happens when a card's button is pressed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum CardAction {
    /// Route to an in-app path, e.g. `/aoclimaoptions`
    Navigate(String),
    /// Open an external URL in a new tab
    OpenExternal(String),
}

/// One slide of the promotional carousel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Card heading
    pub title: String,
    /// Body copy
    pub content: String,
    /// Call-to-action label
    pub button_label: String,
    /// Side effect of the call-to-action
    pub action: CardAction,
}

impl Card {
    /// Build a card from anything string-like.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        button_label: impl Into<String>,
        action: CardAction,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            button_label: button_label.into(),
            action,
        }
    }

    /// Run the card's action through the injected navigator.
    pub fn activate(&self, navigator: &dyn Navigator) {
        match &self.action {
            CardAction::Navigate(path) => {
                tracing::debug!(card = %self.title, %path, "card action: navigate");
                navigator.navigate(path);
            }
            CardAction::OpenExternal(url) => {
                tracing::debug!(card = %self.title, %url, "card action: open external");
                navigator.open_external(url);
            }
        }
    }
}

/// Index proven to address a card in a deck of a known length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardIndex(usize);

impl CardIndex {
    /// The first card. Valid for every deck.
    pub const FIRST: CardIndex = CardIndex(0);

    /// Check `index` against `len`.
    pub fn checked(index: usize, len: NonZeroUsize) -> Result<Self> {
        if index < len.get() {
            Ok(Self(index))
        } else {
            Err(CarouselError::IndexOutOfRange {
                index,
                len: len.get(),
            })
        }
    }

    /// Position in the deck.
    pub fn get(self) -> usize {
        self.0
    }

    /// The following card, wrapping to the first after the last.
    pub fn next(self, len: NonZeroUsize) -> Self {
        Self((self.0 + 1) % len.get())
    }
}

impl From<CardIndex> for usize {
    fn from(index: CardIndex) -> Self {
        index.0
    }
}

/// Fixed, ordered, non-empty sequence of cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Wrap `cards`, refusing an empty list.
    pub fn new(cards: Vec<Card>) -> Result<Self> {
        if cards.is_empty() {
            return Err(CarouselError::EmptyDeck);
        }
        Ok(Self { cards })
    }

    /// Non-empty by construction: a leading card plus any followers.
    pub fn from_first(first: Card, rest: impl IntoIterator<Item = Card>) -> Self {
        let mut cards = vec![first];
        cards.extend(rest);
        Self { cards }
    }

    /// Number of cards; never zero.
    pub fn len(&self) -> NonZeroUsize {
        // Deck::new rejects empty vectors
        NonZeroUsize::new(self.cards.len()).unwrap_or(NonZeroUsize::MIN)
    }

    /// Check a raw position against this deck.
    pub fn index(&self, index: usize) -> Result<CardIndex> {
        CardIndex::checked(index, self.len())
    }

    /// The card at `index`, or `None` when the index was checked against a
    /// longer deck.
    pub fn get(&self, index: CardIndex) -> Option<&Card> {
        self.cards.get(index.get())
    }

    /// Cards in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Cards paired with their checked indices.
    pub fn indexed(&self) -> impl Iterator<Item = (CardIndex, &Card)> {
        self.cards
            .iter()
            .enumerate()
            .map(|(position, card)| (CardIndex(position), card))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::RecordingNavigator;
    use pretty_assertions::assert_eq;

    fn card(title: &str, path: &str) -> Card {
        Card::new(title, "body", "Go", CardAction::Navigate(path.into()))
    }

    #[test]
    fn empty_deck_is_rejected() {
        assert_eq!(Deck::new(vec![]), Err(CarouselError::EmptyDeck));
    }

    #[test]
    fn from_first_keeps_order() {
        let deck = Deck::from_first(card("a", "/a"), [card("b", "/b"), card("c", "/c")]);
        let titles: Vec<&str> = deck.iter().map(|card| card.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
        assert_eq!(Deck::from_first(card("solo", "/"), []).len().get(), 1);
    }

    #[test]
    fn index_is_checked_against_deck() {
        let deck = Deck::new(vec![card("a", "/a"), card("b", "/b")]).unwrap();
        assert_eq!(deck.len().get(), 2);
        assert_eq!(deck.index(1).map(CardIndex::get), Ok(1));
        assert_eq!(
            deck.index(2),
            Err(CarouselError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn get_rejects_index_from_longer_deck() {
        let deck = Deck::from_first(card("solo", "/"), []);
        let foreign = CardIndex::checked(3, NonZeroUsize::new(5).unwrap()).unwrap();

        assert_eq!(deck.get(foreign), None);
        assert_eq!(deck.get(CardIndex::FIRST).map(|card| card.title.as_str()), Some("solo"));
    }

    #[test]
    fn next_wraps_to_first() {
        let len = NonZeroUsize::new(3).unwrap();
        let last = CardIndex::checked(2, len).unwrap();
        assert_eq!(last.next(len), CardIndex::FIRST);

        let single = NonZeroUsize::new(1).unwrap();
        assert_eq!(CardIndex::FIRST.next(single), CardIndex::FIRST);
    }

    #[test]
    fn activate_dispatches_through_navigator() {
        let nav = RecordingNavigator::default();
        card("Trade", "/aoclimaoptions").activate(&nav);
        Card::new(
            "Follow",
            "body",
            "Open",
            CardAction::OpenExternal("https://x.com/NotusOptions".into()),
        )
        .activate(&nav);

        assert_eq!(nav.paths(), vec!["/aoclimaoptions".to_string()]);
        assert_eq!(nav.external(), vec!["https://x.com/NotusOptions".to_string()]);
    }

    #[test]
    fn indexed_pairs_cards_with_positions() {
        let deck = Deck::new(vec![card("a", "/a"), card("b", "/b")]).unwrap();
        let titles: Vec<(usize, &str)> = deck
            .indexed()
            .map(|(index, card)| (index.get(), card.title.as_str()))
            .collect();
        assert_eq!(titles, vec![(0, "a"), (1, "b")]);
    }

    #[test]
    fn action_deserializes_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            action: CardAction,
        }
        let parsed: Wrapper = toml::from_str(
            r#"
action = { kind = "navigate", target = "/aoweatheragent" }
"#,
        )
        .unwrap();
        assert_eq!(parsed.action, CardAction::Navigate("/aoweatheragent".into()));
    }
}
