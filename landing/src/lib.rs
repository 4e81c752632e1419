//! AoclimaOptions landing page - Leptos 0.8 edition.
//!
//! The binary in `main.rs` mounts [`App`] into the document body. Everything
//! below the router lives in this library so the static parts can be
//! rendered to HTML in tests.

pub mod chart;
pub mod config;
pub mod logging;
pub mod navigation;
pub mod pages;
pub mod routes;
pub mod sections;
pub mod timers;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use config::LandingConfig;
use pages::{Dapp, DappPage, HomePage, NotFoundPage, RewardPage};
use sections::{Footer, Nav};

#[component]
pub fn App(config: LandingConfig) -> impl IntoView {
    let timing = config.carousel;

    view! {
        <Router>
            <div class="min-h-screen bg-black text-white flex flex-col">
                <Nav />
                <main class="flex-1">
                    <Routes fallback=|| view! { <NotFoundPage /> }>
                        <Route path=path!("/") view=move || view! { <HomePage timing=timing /> } />
                        <Route path=path!("/rewards") view=RewardPage />
                        <Route
                            path=path!("/aoclimaoptions")
                            view=|| view! { <DappPage dapp=Dapp::ClimaOptions /> }
                        />
                        <Route
                            path=path!("/aoweatheragent")
                            view=|| view! { <DappPage dapp=Dapp::WeatherAgent /> }
                        />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}
