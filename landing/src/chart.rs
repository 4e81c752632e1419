//! Grouped bar chart: sample data and pure SVG geometry.
//!
//! [`layout`] turns chart data into rectangles and tick positions; the
//! `BarChart` section only draws what it is given.
//!
//! Axis conventions: y begins at zero and is labelled on the right, no grid
//! lines, no axis border, legend on top.

/// One series of bars.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub label: &'static str,
    pub values: Vec<f64>,
    pub color: &'static str,
}

/// Category labels plus one value per label in each dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct BarChartData {
    pub labels: Vec<&'static str>,
    pub datasets: Vec<Dataset>,
}

/// "Contracts Trade Volume" sample data shown on the home page.
pub fn trade_volume() -> BarChartData {
    BarChartData {
        labels: vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
        datasets: vec![
            Dataset {
                label: "Higher Temp",
                values: vec![8000.0, 9000.0, 7000.0, 10000.0, 9500.0, 10500.0],
                color: "rgba(3, 255, 129, 0.6)",
            },
            Dataset {
                label: "Lower Temp",
                values: vec![8500.0, 9200.0, 7800.0, 10500.0, 9800.0, 10800.0],
                color: "rgba(199, 0, 57, 0.6)",
            },
        ],
    }
}

impl BarChartData {
    /// Largest value across all datasets, or zero.
    pub fn max_value(&self) -> f64 {
        self.datasets
            .iter()
            .flat_map(|dataset| dataset.values.iter().copied())
            .filter(|value| value.is_finite())
            .fold(0.0, f64::max)
    }
}

/// Axis-aligned rectangle in SVG user units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub rect: Rect,
    pub color: &'static str,
    pub dataset: &'static str,
    pub category: &'static str,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub y: f64,
    pub value: f64,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryLabel {
    pub x: f64,
    pub text: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub x: f64,
    pub label: &'static str,
    pub color: &'static str,
}

/// Everything needed to draw the chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub plot: Rect,
    pub axis_max: f64,
    pub bars: Vec<Bar>,
    pub ticks: Vec<Tick>,
    pub categories: Vec<CategoryLabel>,
    pub legend: Vec<LegendEntry>,
}

const TICK_COUNT: usize = 5;
const LEGEND_HEIGHT: f64 = 28.0;
const CATEGORY_HEIGHT: f64 = 22.0;
const TICK_GUTTER: f64 = 52.0;
const SIDE_PADDING: f64 = 8.0;
const GROUP_FILL: f64 = 0.8;
const LEGEND_SLOT: f64 = 120.0;

/// Round `max` up to a readable axis bound split into `ticks` steps.
///
/// Steps are 1, 2, 2.5 or 5 times a power of ten. Returns `(bound, step)`.
pub fn nice_bound(max: f64, ticks: usize) -> (f64, f64) {
    let ticks = ticks.max(1) as f64;
    if !max.is_finite() || max <= 0.0 {
        return (ticks, 1.0);
    }

    let raw = max / ticks;
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    let normalized = raw / magnitude;
    let factor = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|candidate| *candidate >= normalized)
        .unwrap_or(10.0);
    let step = factor * magnitude;
    ((max / step).ceil() * step, step)
}

/// Thousands-separated tick label: `12,500`, `0`, `2.5`.
pub fn format_tick(value: f64) -> String {
    if value.fract() != 0.0 {
        return format!("{value:.1}");
    }
    let digits = format!("{}", value.abs() as u64);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (position, ch) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0.0 {
        grouped.insert(0, '-');
    }
    grouped
}

/// Lay out `data` in a `width` × `height` viewport.
pub fn layout(data: &BarChartData, width: f64, height: f64) -> ChartLayout {
    let plot = Rect {
        x: SIDE_PADDING,
        y: LEGEND_HEIGHT,
        width: (width - SIDE_PADDING - TICK_GUTTER).max(0.0),
        height: (height - LEGEND_HEIGHT - CATEGORY_HEIGHT).max(0.0),
    };

    let (axis_max, step) = nice_bound(data.max_value(), TICK_COUNT);
    let scale = |value: f64| (value.max(0.0) / axis_max) * plot.height;

    let group_width = plot.width / data.labels.len().max(1) as f64;
    let bar_width = group_width * GROUP_FILL / data.datasets.len().max(1) as f64;
    let group_inset = group_width * (1.0 - GROUP_FILL) / 2.0;

    let mut bars = Vec::with_capacity(data.labels.len() * data.datasets.len());
    for (category_idx, category) in data.labels.iter().copied().enumerate() {
        let group_x = plot.x + category_idx as f64 * group_width + group_inset;
        for (dataset_idx, dataset) in data.datasets.iter().enumerate() {
            let Some(value) = dataset.values.get(category_idx).copied() else {
                continue;
            };
            let bar_height = scale(value).min(plot.height);
            bars.push(Bar {
                rect: Rect {
                    x: group_x + dataset_idx as f64 * bar_width,
                    y: plot.bottom() - bar_height,
                    width: bar_width,
                    height: bar_height,
                },
                color: dataset.color,
                dataset: dataset.label,
                category,
                value,
            });
        }
    }

    let steps = (axis_max / step).round() as usize;
    let ticks = (0..=steps)
        .map(|i| {
            let value = i as f64 * step;
            Tick {
                y: plot.bottom() - scale(value),
                value,
                text: format_tick(value),
            }
        })
        .collect();

    let categories = data
        .labels
        .iter()
        .copied()
        .enumerate()
        .map(|(idx, text)| CategoryLabel {
            x: plot.x + (idx as f64 + 0.5) * group_width,
            text,
        })
        .collect();

    let legend_start = (width - LEGEND_SLOT * data.datasets.len() as f64).max(0.0) / 2.0;
    let legend = data
        .datasets
        .iter()
        .enumerate()
        .map(|(idx, dataset)| LegendEntry {
            x: legend_start + idx as f64 * LEGEND_SLOT,
            label: dataset.label,
            color: dataset.color,
        })
        .collect();

    ChartLayout {
        width,
        height,
        plot,
        axis_max,
        bars,
        ticks,
        categories,
        legend,
    }
}
