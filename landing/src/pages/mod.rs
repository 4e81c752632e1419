// Routed pages

mod dapp;
mod home;
mod not_found;
mod rewards;

pub use dapp::{Dapp, DappPage};
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use rewards::RewardPage;
