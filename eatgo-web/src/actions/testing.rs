//! Recording fakes for the store and the services.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use shared::models::{
    Category, LoginRequest, Region, Restaurant, RestaurantId, RestaurantSummary,
};

use crate::actions::Action;
use crate::error::{ApiError, StorageError};
use crate::services::api::PostReview;
use crate::services::{RestaurantApi, TokenStorage};
use crate::store::{AppState, StoreHandle};

pub(crate) fn restaurant(id: RestaurantId, name: &str) -> Restaurant {
    Restaurant {
        id,
        category_id: 1,
        name: name.to_string(),
        address: "서울시 강남구".to_string(),
        ..Restaurant::default()
    }
}

pub(crate) fn restaurant_summary(id: RestaurantId, name: &str) -> RestaurantSummary {
    RestaurantSummary {
        id,
        category_id: 1,
        name: name.to_string(),
        address: "서울시 강남구".to_string(),
    }
}

/// Store that records dispatched actions without reducing them.
#[derive(Debug, Default)]
pub(crate) struct RecordingStore {
    state: Rc<AppState>,
    actions: RefCell<Vec<Action>>,
}

impl RecordingStore {
    pub(crate) fn with_state(state: AppState) -> Self {
        Self {
            state: Rc::new(state),
            actions: RefCell::default(),
        }
    }

    pub(crate) fn actions(&self) -> Vec<Action> {
        self.actions.borrow().clone()
    }
}

impl StoreHandle for RecordingStore {
    fn state(&self) -> Rc<AppState> {
        Rc::clone(&self.state)
    }

    fn dispatch(&self, action: Action) {
        self.actions.borrow_mut().push(action);
    }
}

#[derive(Debug, Default)]
pub(crate) struct FakeApi {
    pub(crate) regions: Vec<Region>,
    pub(crate) categories: Vec<Category>,
    pub(crate) restaurants: Vec<RestaurantSummary>,
    pub(crate) restaurant: Option<Restaurant>,
    pub(crate) access_token: String,
    pub(crate) fail_with_status: Option<u16>,
    pub(crate) calls: RefCell<Vec<String>>,
    pub(crate) posted_reviews: RefCell<Vec<PostReview>>,
}

impl FakeApi {
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub(crate) fn posted_reviews(&self) -> Vec<PostReview> {
        self.posted_reviews.borrow().clone()
    }

    fn record(&self, call: String) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call.clone());
        match self.fail_with_status {
            Some(status) => Err(ApiError::Status { status, url: call }),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl RestaurantApi for FakeApi {
    async fn post_login(&self, credentials: &LoginRequest) -> Result<String, ApiError> {
        self.record(format!("post_login({})", credentials.email))?;
        Ok(self.access_token.clone())
    }

    async fn fetch_regions(&self) -> Result<Vec<Region>, ApiError> {
        self.record("fetch_regions".to_string())?;
        Ok(self.regions.clone())
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.record("fetch_categories".to_string())?;
        Ok(self.categories.clone())
    }

    async fn fetch_restaurants(
        &self,
        region: &Region,
        category: &Category,
    ) -> Result<Vec<RestaurantSummary>, ApiError> {
        self.record(format!("fetch_restaurants({}, {})", region.name, category.id))?;
        Ok(self.restaurants.clone())
    }

    async fn fetch_restaurant(&self, id: RestaurantId) -> Result<Restaurant, ApiError> {
        self.record(format!("fetch_restaurant({id})"))?;
        Ok(self.restaurant.clone().unwrap_or(Restaurant {
            id,
            ..Restaurant::default()
        }))
    }

    async fn post_review(&self, request: &PostReview) -> Result<(), ApiError> {
        self.record(format!("post_review({})", request.restaurant_id))?;
        self.posted_reviews.borrow_mut().push(request.clone());
        Ok(())
    }
}

/// In-memory [`TokenStorage`]; `failing()` rejects every operation.
#[derive(Debug, Default)]
pub(crate) struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
    removed: RefCell<Vec<String>>,
    failing: bool,
}

impl MemoryStorage {
    pub(crate) fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub(crate) fn insert(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub(crate) fn value(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    pub(crate) fn removed(&self) -> Vec<String> {
        self.removed.borrow().clone()
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.failing {
            Err(StorageError::Backend("storage disabled".to_string()))
        } else {
            Ok(())
        }
    }
}

impl TokenStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check()?;
        Ok(self.value(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check()?;
        self.insert(key, value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.check()?;
        self.values.borrow_mut().remove(key);
        self.removed.borrow_mut().push(key.to_string());
        Ok(())
    }
}
