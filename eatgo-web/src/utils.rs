use shared::models::{Restaurant, RestaurantId};

/// Whether `requested` differs from the restaurant currently held in state.
pub fn is_new_restaurant(current: Option<&Restaurant>, requested: RestaurantId) -> bool {
    current.is_none_or(|restaurant| restaurant.id != requested)
}
