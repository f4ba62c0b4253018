/// Login form input and session payloads.
pub mod auth;
/// Regions and categories used to filter restaurants.
pub mod catalog;
/// Restaurant list entries and detail.
pub mod restaurant;
/// Reviews and the review form.
pub mod review;

pub use auth::{LoginField, LoginFields, LoginRequest, LoginResponse};
pub use catalog::{Category, CategoryId, Region, RegionId};
pub use restaurant::{MenuItem, Restaurant, RestaurantId, RestaurantSummary};
pub use review::{Review, ReviewField, ReviewFields, ReviewRequest};
