//! SVG bar chart drawn from a precomputed [`ChartLayout`].

use leptos::prelude::*;

use crate::chart::{self, BarChartData};

const VIEW_WIDTH: f64 = 600.0;
const VIEW_HEIGHT: f64 = 300.0;

/// Grouped bar chart that scales with its container.
#[component]
pub fn BarChart(data: BarChartData) -> impl IntoView {
    let layout = chart::layout(&data, VIEW_WIDTH, VIEW_HEIGHT);
    let tick_x = layout.plot.right() + 8.0;
    let label_y = layout.plot.bottom() + 16.0;

    let legend = layout
        .legend
        .into_iter()
        .map(|entry| {
            view! {
                <g class="chart-legend-entry">
                    <rect
                        x=entry.x.to_string()
                        y="6"
                        width="36"
                        height="12"
                        fill=entry.color
                    />
                    <text x=(entry.x + 42.0).to_string() y="16" fill="#9ca3af" font-size="12">
                        {entry.label}
                    </text>
                </g>
            }
        })
        .collect_view();

    let bars = layout
        .bars
        .into_iter()
        .map(|bar| {
            let aria = format!("{} {}: {}", bar.category, bar.dataset, chart::format_tick(bar.value));
            let tooltip = aria.clone();
            view! {
                <rect
                    class="chart-bar"
                    x=bar.rect.x.to_string()
                    y=bar.rect.y.to_string()
                    width=bar.rect.width.to_string()
                    height=bar.rect.height.to_string()
                    fill=bar.color
                    aria-label=aria
                >
                    <title>{tooltip}</title>
                </rect>
            }
        })
        .collect_view();

    let ticks = layout
        .ticks
        .into_iter()
        .map(|tick| {
            view! {
                <text
                    class="chart-tick"
                    x=tick_x.to_string()
                    y=tick.y.to_string()
                    fill="#9ca3af"
                    font-size="11"
                    dominant-baseline="middle"
                >
                    {tick.text}
                </text>
            }
        })
        .collect_view();

    let categories = layout
        .categories
        .into_iter()
        .map(|label| {
            view! {
                <text
                    class="chart-category"
                    x=label.x.to_string()
                    y=label_y.to_string()
                    fill="#9ca3af"
                    font-size="11"
                    text-anchor="middle"
                >
                    {label.text}
                </text>
            }
        })
        .collect_view();

    view! {
        <svg
            class="w-full h-full"
            viewBox=format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT)
            preserveAspectRatio="none"
            role="img"
        >
            {legend}
            {bars}
            {ticks}
            {categories}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_every_bar_tick_and_label() {
        let html = view! { <BarChart data=chart::trade_volume() /> }.to_html();

        assert_eq!(html.matches("class=\"chart-bar\"").count(), 12);
        assert_eq!(html.matches("class=\"chart-tick\"").count(), 6);
        assert_eq!(html.matches("class=\"chart-category\"").count(), 6);
        assert!(html.contains("Higher Temp"));
        assert!(html.contains("Lower Temp"));
        assert!(html.contains("12,500"));
        assert!(html.contains("Jun Lower Temp: 10,800"));
        // hover tooltip per bar
        assert_eq!(html.matches("<title>").count(), 12);
        assert!(html.contains("<title>Jan Higher Temp: 8,000</title>"));
        assert!(html.contains("rgba(3, 255, 129, 0.6)"));
    }
}
