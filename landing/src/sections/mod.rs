// Landing page sections

/// Project account on X (formerly Twitter)
pub const TWITTER_URL: &str = "https://x.com/NotusOptions";

/// Explainer video shown next to the hero copy
pub const VIDEO_EMBED_URL: &str = "https://www.youtube.com/embed/RJwDpYmiQ8s";

mod bar_chart;
mod dapps;
mod footer;
mod hero;
mod nav;
mod reward_table;
mod trade_volume;

pub use bar_chart::BarChart;
pub use dapps::{DappCarousel, dapp_deck, dot_class, track_transform};
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use reward_table::{REWARDS, RewardRow, RewardTable};
pub use trade_volume::TradeVolume;
