//! Asynchronous action creators.
//!
//! Each orchestrator reads the current state through a [`StoreHandle`],
//! calls the API or storage services, and dispatches descriptors in a fixed
//! order. Failures are returned to the caller untouched.

use shared::models::{LoginRequest, RestaurantId, ReviewRequest};

use super::descriptors::{
    reset_access_token, reset_review_input, set_access_token, set_categories, set_regions,
    set_restaurant, set_restaurants,
};
use crate::config::{ACCESS_TOKEN_KEY, FrontendConfig};
use crate::error::ActionError;
use crate::services::api::PostReview;
use crate::services::{EatGoClient, LocalTokenStorage, RestaurantApi, TokenStorage};
use crate::store::StoreHandle;
use crate::utils::is_new_restaurant;

/// Orchestrators that call the services and dispatch descriptors.
#[derive(Debug, Clone)]
pub struct ActionCreators<A, S> {
    api: A,
    storage: S,
    access_token_key: String,
}

impl ActionCreators<EatGoClient, LocalTokenStorage> {
    /// Action creators wired to the shared HTTP client and `localStorage`.
    pub fn browser() -> Self {
        let config = FrontendConfig::new();
        Self::new(EatGoClient::shared(), LocalTokenStorage)
            .with_access_token_key(config.access_token_key)
    }
}

impl<A, S> ActionCreators<A, S>
where
    A: RestaurantApi,
    S: TokenStorage,
{
    /// Action creators over the given services, using the default token key.
    pub fn new(api: A, storage: S) -> Self {
        Self {
            api,
            storage,
            access_token_key: ACCESS_TOKEN_KEY.to_string(),
        }
    }

    /// Persist the access token under `key` instead.
    #[must_use]
    pub fn with_access_token_key(mut self, key: impl Into<String>) -> Self {
        self.access_token_key = key.into();
        self
    }

    /// Fetch regions and categories, then dispatch regions before categories.
    pub async fn load_initial_data(&self, store: &impl StoreHandle) -> Result<(), ActionError> {
        let (regions, categories) =
            futures::try_join!(self.api.fetch_regions(), self.api.fetch_categories())?;

        store.dispatch(set_regions(regions));
        store.dispatch(set_categories(categories));
        Ok(())
    }

    /// Load restaurants for the selected region and category, if both are set.
    pub async fn load_restaurants(&self, store: &impl StoreHandle) -> Result<(), ActionError> {
        let state = store.state();
        let (Some(region), Some(category)) = (&state.selected_region, &state.selected_category)
        else {
            log::debug!("skipping restaurant list: region or category not selected");
            return Ok(());
        };

        let restaurants = self.api.fetch_restaurants(region, category).await?;
        store.dispatch(set_restaurants(restaurants));
        Ok(())
    }

    /// Load restaurant detail, clearing a stale restaurant first.
    pub async fn load_restaurant(
        &self,
        store: &impl StoreHandle,
        restaurant_id: RestaurantId,
    ) -> Result<(), ActionError> {
        if is_new_restaurant(store.state().restaurant.as_ref(), restaurant_id) {
            store.dispatch(set_restaurant(None));
        }

        let restaurant = self.api.fetch_restaurant(restaurant_id).await?;
        store.dispatch(set_restaurant(Some(restaurant)));
        Ok(())
    }

    /// Log in with the pending credentials and keep the returned token.
    ///
    /// An empty token means the login was rejected; nothing is dispatched.
    pub async fn request_login(&self, store: &impl StoreHandle) -> Result<(), ActionError> {
        let credentials = LoginRequest::from(&store.state().login_fields);
        let access_token = self.api.post_login(&credentials).await?;
        if access_token.is_empty() {
            log::debug!("login rejected");
            return Ok(());
        }

        store.dispatch(set_access_token(access_token.clone()));
        self.storage.save(&self.access_token_key, &access_token)?;
        log::info!("logged in");
        Ok(())
    }

    /// Forget the access token and remove it from storage.
    pub fn logout(&self, store: &impl StoreHandle) -> Result<(), ActionError> {
        store.dispatch(reset_access_token());
        self.storage.remove(&self.access_token_key)?;
        log::info!("logged out");
        Ok(())
    }

    /// Post the pending review, then reset the form and reload the detail.
    pub async fn send_review(
        &self,
        store: &impl StoreHandle,
        restaurant_id: RestaurantId,
    ) -> Result<(), ActionError> {
        let state = store.state();
        let request = PostReview {
            restaurant_id,
            access_token: state.access_token.clone().unwrap_or_default(),
            review: ReviewRequest::from(&state.review_fields),
        };
        self.api.post_review(&request).await?;

        store.dispatch(reset_review_input());
        self.load_restaurant(store, restaurant_id).await
    }

    /// Restore a token persisted by an earlier session.
    ///
    /// Returns whether a token was found and dispatched.
    pub fn restore_access_token(&self, store: &impl StoreHandle) -> Result<bool, ActionError> {
        match self.storage.load(&self.access_token_key)? {
            Some(access_token) if !access_token.is_empty() => {
                store.dispatch(set_access_token(access_token));
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
