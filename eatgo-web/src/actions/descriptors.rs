//! Plain action descriptors.
//!
//! Every state change is described by an [`Action`]. Descriptors carry data
//! only; the reducer in [`crate::store`] applies them. On the wire they take
//! the `{ "type": ..., "payload": ... }` shape.

use serde::{Deserialize, Serialize};
use shared::models::{
    Category, CategoryId, LoginField, Region, RegionId, Restaurant, RestaurantSummary,
    ReviewField,
};

/// A state change to apply to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Action {
    /// Replace the region list.
    SetRegions {
        regions: Vec<Region>,
    },
    /// Replace the category list.
    SetCategories {
        categories: Vec<Category>,
    },
    /// Replace the restaurant list.
    SetRestaurants {
        restaurants: Vec<RestaurantSummary>,
    },
    /// `None` clears the detail while another restaurant loads.
    SetRestaurant {
        restaurant: Option<Restaurant>,
    },
    /// Select the region with the given id from the loaded list.
    SelectRegion {
        #[serde(rename = "regionId")]
        region_id: RegionId,
    },
    /// Select the category with the given id from the loaded list.
    SelectCategory {
        #[serde(rename = "categoryId")]
        category_id: CategoryId,
    },
    /// Update one login form input.
    ChangeLoginField {
        name: LoginField,
        value: String,
    },
    /// Keep the token of a successful login.
    SetAccessToken {
        #[serde(rename = "accessToken")]
        access_token: String,
    },
    /// Forget the access token.
    ResetAccessToken,
    /// Update one review form input.
    ChangeReviewField {
        name: ReviewField,
        value: String,
    },
    /// Clear the review form.
    ResetReviewInput,
}

/// `setRegions` with the fetched regions.
pub fn set_regions(regions: Vec<Region>) -> Action {
    Action::SetRegions { regions }
}

/// `setCategories` with the fetched categories.
pub fn set_categories(categories: Vec<Category>) -> Action {
    Action::SetCategories { categories }
}

/// `setRestaurants` with the fetched list.
pub fn set_restaurants(restaurants: Vec<RestaurantSummary>) -> Action {
    Action::SetRestaurants { restaurants }
}

/// `setRestaurant`; `None` clears the current detail.
pub fn set_restaurant(restaurant: Option<Restaurant>) -> Action {
    Action::SetRestaurant { restaurant }
}

/// `selectRegion` by id.
pub fn select_region(region_id: RegionId) -> Action {
    Action::SelectRegion { region_id }
}

/// `selectCategory` by id.
pub fn select_category(category_id: CategoryId) -> Action {
    Action::SelectCategory { category_id }
}

/// `changeLoginField` for one login input.
pub fn change_login_field(name: LoginField, value: impl Into<String>) -> Action {
    Action::ChangeLoginField {
        name,
        value: value.into(),
    }
}

/// `setAccessToken` with the issued token.
pub fn set_access_token(access_token: impl Into<String>) -> Action {
    Action::SetAccessToken {
        access_token: access_token.into(),
    }
}

/// `resetAccessToken`.
pub fn reset_access_token() -> Action {
    Action::ResetAccessToken
}

/// `changeReviewField` for one review input.
pub fn change_review_field(name: ReviewField, value: impl Into<String>) -> Action {
    Action::ChangeReviewField {
        name,
        value: value.into(),
    }
}

/// `resetReviewInput`.
pub fn reset_review_input() -> Action {
    Action::ResetReviewInput
}
