use leptos::prelude::*;

use crate::routes;

const LINK_CLASS: &str = "text-gray-400 hover:text-white";

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="flex items-center justify-between px-6 py-4">
            <a href=routes::HOME class="text-xl font-bold">
                "Aoclima"<span class="text-amber-400">"Options"</span>
            </a>
            <div class="flex space-x-6 text-sm md:text-base">
                <a href=routes::HOME class=LINK_CLASS>"Home"</a>
                <a href=routes::REWARDS class=LINK_CLASS>"Rewards"</a>
                <a
                    href=routes::CLIMA_OPTIONS
                    class="bg-white text-black px-4 py-1 rounded-full font-medium"
                >
                    "Launch App"
                </a>
            </div>
        </nav>
    }
}
