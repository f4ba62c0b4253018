pub mod api;
pub mod storage;

pub use api::{EatGoClient, RestaurantApi};
pub use storage::{LocalTokenStorage, TokenStorage};
