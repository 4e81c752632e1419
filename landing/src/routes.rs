//! Paths the router knows about.

pub const HOME: &str = "/";
pub const REWARDS: &str = "/rewards";
pub const CLIMA_OPTIONS: &str = "/aoclimaoptions";
pub const WEATHER_AGENT: &str = "/aoweatheragent";
