// Home page - hero, dapp carousel, trade volume panel
use aoclima_carousel::RotatorTiming;
use leptos::prelude::*;

use crate::navigation::RouterNavigator;
use crate::sections::{DappCarousel, Hero, TradeVolume, dapp_deck};
use crate::timers::BrowserScheduler;

#[component]
pub fn HomePage(timing: RotatorTiming) -> impl IntoView {
    let navigator = RouterNavigator::shared();

    view! {
        <Hero navigator=navigator.clone() />
        <section class="grid grid-cols-1 lg:grid-cols-2 gap-8 p-6">
            <div class="p-6 border border-gray-800 rounded-xl">
                <h2 class="text-2xl md:text-4xl font-bold">
                    <span class="text-amber-400">"ACO"</span>
                    " Dapps."
                </h2>
                <DappCarousel
                    deck=dapp_deck()
                    timing=timing
                    scheduler=BrowserScheduler
                    navigator=navigator
                />
            </div>
            <TradeVolume />
        </section>
    }
}
