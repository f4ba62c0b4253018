pub mod catalog;
pub mod header;
pub mod layout;
pub mod login_form_container;
pub mod restaurant_container;
pub mod review_form_container;

pub use catalog::{CategoriesContainer, RegionsContainer, RestaurantsContainer};
pub use login_form_container::LoginFormContainer;
pub use restaurant_container::RestaurantContainer;
pub use review_form_container::ReviewFormContainer;
