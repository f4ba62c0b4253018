use serde::{Deserialize, Serialize};

use super::{CategoryId, Review};

/// Identifier of a restaurant, as used in `/restaurants/:id`.
pub type RestaurantId = u64;

/// A single entry on a restaurant's menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuItem {
    /// Menu item identifier.
    pub id: u64,
    /// Dish name.
    pub name: String,
}

/// Restaurant as returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantSummary {
    /// Restaurant identifier.
    pub id: RestaurantId,
    /// Category the restaurant belongs to.
    #[serde(default)]
    pub category_id: CategoryId,
    /// Restaurant name.
    pub name: String,
    /// Street address.
    #[serde(default)]
    pub address: String,
}

/// Full restaurant detail including its menu and reviews.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    /// Restaurant identifier.
    pub id: RestaurantId,
    /// Category the restaurant belongs to.
    #[serde(default)]
    pub category_id: CategoryId,
    /// Restaurant name.
    pub name: String,
    /// Street address.
    #[serde(default)]
    pub address: String,
    /// Menu in serving order.
    #[serde(default)]
    pub menu_items: Vec<MenuItem>,
    /// Reviews in the order the API returned them.
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Restaurant {
    /// Reviews ordered from the most recently written one.
    #[must_use]
    pub fn reviews_newest_first(&self) -> Vec<&Review> {
        let mut reviews: Vec<&Review> = self.reviews.iter().collect();
        reviews.sort_by(|a, b| b.id.cmp(&a.id));
        reviews
    }
}
