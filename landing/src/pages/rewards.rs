// Weekly rewards page
use leptos::prelude::*;

use crate::sections::{REWARDS, RewardTable};

#[component]
pub fn RewardPage() -> impl IntoView {
    view! {
        <div class="container mx-auto p-8">
            <h1 class="text-3xl font-bold mb-8 text-center text-white">"Weekly Rewards"</h1>
            <p class="text-lg mb-8 text-center text-gray-400">
                "The top 5 traders will be rewarded every week based on their performance."
            </p>
            <RewardTable rows=&REWARDS />
            <div class="mt-8 text-center">
                <p class="text-gray-400">
                    "Make sure to trade and climb the leaderboard to get a chance to win these amazing rewards!"
                </p>
            </div>
        </div>
    }
}
