use leptos::prelude::*;

use super::TWITTER_URL;
use crate::routes;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-gray-800 px-6 py-8 text-sm text-gray-400">
            <div class="flex flex-col md:flex-row items-center justify-between space-y-4 md:space-y-0">
                <a href=routes::HOME class="text-white font-bold text-lg">
                    "Aoclima"<span class="text-amber-400">"Options"</span>
                </a>
                <div class="flex space-x-6">
                    <a href=routes::REWARDS class="hover:text-white">"Rewards"</a>
                    <a
                        href=TWITTER_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-white"
                    >
                        "Twitter"
                    </a>
                </div>
                <p>"(c)2024 AoclimaOptions. Inspiring the next generation of meteorologists."</p>
            </div>
        </footer>
    }
}
