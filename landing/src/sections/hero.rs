use aoclima_carousel::SharedNavigator;
use leptos::prelude::*;

use super::{TWITTER_URL, VIDEO_EMBED_URL};
use crate::routes;

#[component]
pub fn Hero(navigator: SharedNavigator) -> impl IntoView {
    let start_trading = move |_| navigator.navigate(routes::CLIMA_OPTIONS);

    view! {
        <section
            class="container pt-8 p-6 pb-10 lg:pb-20 min-w-full flex flex-col lg:flex-row space-y-10 space-x-0 md:space-y-0 md:space-x-5 items-center lg:items-start rounded-b-lg"
            style="background: linear-gradient(to top left, rgba(255, 215, 0, 0.3), rgba(255, 215, 0, 0.03));"
        >
            <div class="container">
                <h1 class="text-2xl md:text-3xl lg:text-5xl font-bold mb-4 text-center lg:text-start">
                    "It's Time to Solve the Weather Problem."
                </h1>
                <p class="text-gray-400 mb-6 text-center lg:text-start">
                    "It’s unfortunate that Hurricanes Helene and Milton have caused "
                    "over 200 deaths and tens of billions of dollars in losses."
                </p>
                <p class="text-gray-400 mb-6 text-center lg:text-start">
                    "What’s more alarming is that the US has only 4,470 meteorologists, "
                    "with an average age of 40 years. Only 19% are between 19 and 30 years old."
                </p>
                <p class="text-gray-400 mb-6 text-center lg:text-start">
                    <span class="font-bold">"Who’s going to solve this weather problem?"</span>
                    " This is why we need to inspire more young people to study meteorology. "
                    "This is what we’re trying to do at AoclimaOptions."
                </p>
                <div class="flex justify-center lg:justify-start space-x-4">
                    <a
                        href=TWITTER_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="bg-white text-black px-6 py-2 rounded-full text-sm lg:text-lg"
                    >
                        "Check us out on Twitter"
                    </a>
                    <button
                        type="button"
                        class="border border-gray-500 px-6 py-2 rounded-full text-gray-400 text-sm lg:text-lg"
                        on:click=start_trading
                    >
                        "Start Trading Today"
                    </button>
                </div>
            </div>
            <Video />
        </section>
    }
}

#[component]
fn Video() -> impl IntoView {
    view! {
        <div class="ml-5 relative w-full lg:w-4/5 md:m-0 flex p-5 lg:p-0 justify-center">
            <iframe
                class="rounded-lg border-0 h-48 w-4/5 md:h-72 md:w-3/4"
                src=VIDEO_EMBED_URL
                title="Learn what is aoclimaOptions."
                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                referrerpolicy="strict-origin-when-cross-origin"
                allowfullscreen=true
            ></iframe>
        </div>
    }
}
