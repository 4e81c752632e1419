// Dapp landing pages linked from the carousel
use leptos::prelude::*;

use crate::routes;

/// A dapp promoted on the home page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dapp {
    ClimaOptions,
    WeatherAgent,
}

impl Dapp {
    pub fn title(self) -> &'static str {
        match self {
            Dapp::ClimaOptions => "AoClimOptions",
            Dapp::WeatherAgent => "AO Weather Agent",
        }
    }

    pub fn tagline(self) -> &'static str {
        match self {
            Dapp::ClimaOptions => "Trade temperature-based binary options on a decentralized weather market.",
            Dapp::WeatherAgent => "Climate insights powered by AO, with your data kept private.",
        }
    }
}

#[component]
pub fn DappPage(dapp: Dapp) -> impl IntoView {
    view! {
        <section class="container mx-auto p-8 text-center">
            <h1 class="text-3xl md:text-5xl font-bold mb-6">{dapp.title()}</h1>
            <p class="text-lg text-gray-400 mb-8">{dapp.tagline()}</p>
            <p class="text-gray-500 mb-8">"Launching soon."</p>
            <a href=routes::HOME class="border border-gray-500 px-6 py-2 rounded-full text-gray-400">
                "Back to home"
            </a>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    #[test]
    fn titles_match_carousel_copy() {
        assert_eq!(Dapp::ClimaOptions.title(), "AoClimOptions");
        assert_eq!(Dapp::WeatherAgent.title(), "AO Weather Agent");
    }

    #[test]
    fn placeholder_links_back_home() {
        let html = view! { <DappPage dapp=Dapp::WeatherAgent /> }.to_html();
        assert!(html.contains("AO Weather Agent"));
        assert!(html.contains("href=\"/\""));
    }
}
