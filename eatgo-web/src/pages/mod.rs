mod about;
mod home;
mod login;
mod not_found;
mod restaurant;
mod restaurants;

pub use about::AboutPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use restaurant::RestaurantPage;
pub use restaurants::RestaurantsPage;
