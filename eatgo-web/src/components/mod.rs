pub(crate) mod header_nav_item;
pub(crate) mod loading;
pub(crate) mod login_form;
pub(crate) mod logout_form;
pub(crate) mod restaurant_detail;
pub(crate) mod restaurant_list;
pub(crate) mod review_form;
pub(crate) mod reviews;
pub(crate) mod selectable_list;

// Re-export components for convenience
pub use loading::Loading;
pub use login_form::LoginForm;
pub use logout_form::LogoutForm;
pub use restaurant_detail::RestaurantDetail;
pub use restaurant_list::RestaurantList;
pub use review_form::ReviewForm;
pub use reviews::Reviews;
pub use selectable_list::{SelectableItem, SelectableList};
