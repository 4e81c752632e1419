//! "ACO Dapps." carousel.
//!
//! The rotator owns the timers; the component mirrors its snapshots into a
//! signal and drops the rotator on cleanup, which clears both browser timers.

use aoclima_carousel::{
    Card, CardAction, Deck, Rotator, RotatorState, RotatorTiming, Scheduler, SharedNavigator,
};
use leptos::prelude::*;

use crate::routes;

const TRACK_CLASS: &str = "flex px-2 transition-transform duration-500 ease-in-out";
const TRACK_CLASS_MOVING: &str = "flex px-2 transition-transform duration-500 ease-in-out transform";

/// The two dapps promoted on the home page.
pub fn dapp_deck() -> Deck {
    Deck::from_first(
        Card::new(
            "Aoclimaoptions",
            "AoClimOptions is a decentralized weather market that allows you to trade temperature-based binary options.",
            "Trade Now",
            CardAction::Navigate(routes::CLIMA_OPTIONS.into()),
        ),
        [Card::new(
            "AoWeatherAgent",
            "AO Weather Agent, powered by AO, we provide climate insights while keeping your data private.",
            "Make Prediction Now",
            CardAction::Navigate(routes::WEATHER_AGENT.into()),
        )],
    )
}

/// Inline style sliding the track so the active card is in view.
pub fn track_transform(active_index: usize) -> String {
    format!("transform: translateX(-{}%)", active_index * 100)
}

pub fn dot_class(active: bool) -> &'static str {
    if active {
        "h-3 w-3 rounded-full cursor-pointer bg-amber-400"
    } else {
        "h-3 w-3 rounded-full cursor-pointer bg-white"
    }
}

#[component]
pub fn DappCarousel<S>(
    deck: Deck,
    timing: RotatorTiming,
    scheduler: S,
    navigator: SharedNavigator,
) -> impl IntoView
where
    S: Scheduler + 'static,
{
    let state = RwSignal::new(RotatorState::default());

    let rotator = Rotator::mount(deck.len(), timing, scheduler);
    rotator.on_change(move |snapshot| state.set(*snapshot));
    let rotator = StoredValue::new_local(Some(rotator));

    on_cleanup(move || {
        rotator.try_update_value(|slot| drop(slot.take()));
    });

    let cards = deck
        .iter()
        .map(|card| {
            let title = card.title.clone();
            let content = card.content.clone();
            let label = card.button_label.clone();
            let card = card.clone();
            let navigator = navigator.clone();
            view! {
                <div class="min-w-full p-6 bg-gradient-to-tl from-gray-800 to-transparent rounded-xl ml-2 mr-2 first:ml-0 shadow-lg text-md md:text-lg">
                    <h3 class="xl:text-2xl font-semibold mb-4">{title}</h3>
                    <p class="text-gray-400 mb-6">{content}</p>
                    <button
                        class="bg-white text-black px-4 py-2 rounded-full font-medium"
                        on:click=move |_| card.activate(&*navigator)
                    >
                        {label}
                    </button>
                </div>
            }
        })
        .collect_view();

    let dots = deck
        .indexed()
        .map(|(index, card)| {
            let aria = format!("Show {}", card.title);
            view! {
                <span
                    role="button"
                    aria-label=aria
                    class=move || dot_class(state.get().active() == index)
                    on:click=move |_| {
                        rotator.with_value(|slot| {
                            if let Some(rotator) = slot {
                                rotator.select(index);
                            }
                        })
                    }
                ></span>
            }
        })
        .collect_view();

    view! {
        <div class="relative mt-8">
            <div class="w-full overflow-hidden">
                <div
                    class=move || if state.get().is_transitioning() { TRACK_CLASS_MOVING } else { TRACK_CLASS }
                    style=move || track_transform(state.get().active_index())
                >
                    {cards}
                </div>
            </div>
            <div class="flex justify-center mt-4 space-x-2">{dots}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoclima_carousel::{RecordingNavigator, VirtualClock};
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;
    use std::rc::Rc;

    #[test]
    fn deck_routes_to_both_dapps() {
        let deck = dapp_deck();
        let navigator = RecordingNavigator::default();
        for card in deck.iter() {
            card.activate(&navigator);
        }

        assert_eq!(deck.len().get(), 2);
        assert_eq!(
            navigator.paths(),
            vec![routes::CLIMA_OPTIONS.to_string(), routes::WEATHER_AGENT.to_string()]
        );
    }

    #[test]
    fn track_slides_one_card_width_per_index() {
        assert_eq!(track_transform(0), "transform: translateX(-0%)");
        assert_eq!(track_transform(1), "transform: translateX(-100%)");
    }

    #[test]
    fn active_dot_is_highlighted() {
        assert!(dot_class(true).contains("bg-amber-400"));
        assert!(dot_class(false).contains("bg-white"));
    }

    #[test]
    fn renders_first_card_active() {
        let navigator: SharedNavigator = Rc::new(RecordingNavigator::default());
        let html = view! {
            <DappCarousel
                deck=dapp_deck()
                timing=RotatorTiming::default()
                scheduler=VirtualClock::new()
                navigator=navigator
            />
        }
        .to_html();

        assert!(html.contains("Aoclimaoptions"));
        assert!(html.contains("AoWeatherAgent"));
        assert!(html.contains("Trade Now"));
        assert!(html.contains("Make Prediction Now"));
        assert!(html.contains("translateX(-0%)"));
        assert_eq!(html.matches("bg-amber-400").count(), 1);
        assert_eq!(html.matches("role=\"button\"").count(), 2);
    }
}
