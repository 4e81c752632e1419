use leptos::prelude::*;

use super::BarChart;
use crate::chart;

#[component]
pub fn TradeVolume() -> impl IntoView {
    view! {
        <div
            class="p-0 md:p-6 bg-gray-900 rounded-xl shadow-lg border border-amber-400"
            style="background: linear-gradient(to top right, rgba(120, 120, 120, 0.2), rgba(255, 255, 255, 0));"
        >
            <h2 class="px-4 pt-4 md:p-0 text-lg md:text-xl font-semibold mb-4">
                "Contracts Trade Volume"
            </h2>
            <div class="px-1 md:p-0 h-50 md:h-64 lg:min-h-100">
                <BarChart data=chart::trade_volume() />
            </div>
            <div class="px-4 pb-4 md:p-0 flex justify-between mt-4">
                <div class="text-xl md:text-3xl font-bold">"8.32%"</div>
                <div class="text-sm md:text-base text-green-400 bg-green-900 px-4 py-1 rounded-full">
                    "+17% Improvement"
                </div>
            </div>
        </div>
    }
}
