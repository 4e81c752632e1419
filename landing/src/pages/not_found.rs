use leptos::prelude::*;

use crate::routes;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="container mx-auto p-8 text-center">
            <h1 class="text-3xl font-bold mb-4">"Page not found"</h1>
            <p class="text-gray-400 mb-8">"There is nothing at this address."</p>
            <a href=routes::HOME class="bg-white text-black px-6 py-2 rounded-full">"Go home"</a>
        </section>
    }
}
