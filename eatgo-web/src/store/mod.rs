//! Application state and the handle orchestrators use to reach it.

mod reducer;

use std::rc::Rc;

use shared::models::{
    Category, LoginFields, Region, Restaurant, RestaurantSummary, ReviewFields,
};
use yewdux::{Dispatch, Store};

use crate::actions::Action;

/// Everything the views render from.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct AppState {
    /// Regions offered as filters.
    pub regions: Vec<Region>,
    /// Categories offered as filters.
    pub categories: Vec<Category>,
    /// Restaurants matching the current selection.
    pub restaurants: Vec<RestaurantSummary>,
    /// Detail of the restaurant being viewed, `None` while loading.
    pub restaurant: Option<Restaurant>,
    /// Region filter, if one was picked.
    pub selected_region: Option<Region>,
    /// Category filter, if one was picked.
    pub selected_category: Option<Category>,
    /// Pending login form input.
    pub login_fields: LoginFields,
    /// Token of the logged-in user.
    pub access_token: Option<String>,
    /// Pending review form input.
    pub review_fields: ReviewFields,
}

impl AppState {
    /// Whether a non-empty access token is held.
    pub fn is_logged_in(&self) -> bool {
        self.access_token
            .as_deref()
            .is_some_and(|token| !token.is_empty())
    }
}

/// Read access to the current state plus a way to dispatch descriptors.
///
/// Orchestrators only ever see the store through this trait.
pub trait StoreHandle {
    /// Snapshot of the current state.
    fn state(&self) -> Rc<AppState>;

    /// Apply `action` to the state.
    fn dispatch(&self, action: Action);
}

impl StoreHandle for Dispatch<AppState> {
    fn state(&self) -> Rc<AppState> {
        self.get()
    }

    fn dispatch(&self, action: Action) {
        self.apply(action);
    }
}
