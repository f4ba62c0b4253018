use async_trait::async_trait;
use once_cell::unsync::OnceCell;
use reqwest::{Client, Response, StatusCode};
use shared::models::{
    Category, LoginRequest, LoginResponse, Region, Restaurant, RestaurantId, RestaurantSummary,
    ReviewRequest,
};

use crate::config::FrontendConfig;
use crate::error::ApiError;

thread_local! {
    static SHARED_CLIENT: OnceCell<EatGoClient> = OnceCell::new();
}

/// Review submission, addressed to a restaurant and signed with a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostReview {
    /// Restaurant being reviewed.
    pub restaurant_id: RestaurantId,
    /// Bearer token of the logged-in user.
    pub access_token: String,
    /// Review body.
    pub review: ReviewRequest,
}

/// Remote operations the action layer depends on.
#[async_trait(?Send)]
pub trait RestaurantApi {
    /// Exchange credentials for an access token. An empty string means the
    /// login was rejected.
    async fn post_login(&self, credentials: &LoginRequest) -> Result<String, ApiError>;

    /// All regions.
    async fn fetch_regions(&self) -> Result<Vec<Region>, ApiError>;

    /// All categories.
    async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError>;

    /// Restaurants in `region` and `category`.
    async fn fetch_restaurants(
        &self,
        region: &Region,
        category: &Category,
    ) -> Result<Vec<RestaurantSummary>, ApiError>;

    /// Detail of one restaurant, with menu and reviews.
    async fn fetch_restaurant(&self, id: RestaurantId) -> Result<Restaurant, ApiError>;

    /// Submit a review as the token's owner.
    async fn post_review(&self, request: &PostReview) -> Result<(), ApiError>;
}

/// HTTP client for the EatGo customer and login APIs.
#[derive(Clone, Debug)]
pub struct EatGoClient {
    api_base_url: String,
    login_base_url: String,
    client: Client,
}

impl EatGoClient {
    /// Create a new API client with the provided base URLs.
    pub fn new(api_base_url: &str, login_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            login_base_url: login_base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a client for the configured endpoints.
    pub fn from_config(config: &FrontendConfig) -> Self {
        Self::new(config.api_base_url(), config.login_base_url())
    }

    /// The client shared by every component on this thread.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::from_config(&FrontendConfig::new()))
                .clone()
        })
    }

    fn api_url(&self, path: &str) -> String {
        join_url(&self.api_base_url, path)
    }

    fn login_url(&self, path: &str) -> String {
        join_url(&self.login_base_url, path)
    }
}

#[async_trait(?Send)]
impl RestaurantApi for EatGoClient {
    async fn post_login(&self, credentials: &LoginRequest) -> Result<String, ApiError> {
        let url = self.login_url("session");
        let response = self.client.post(&url).json(credentials).send().await?;
        let status = response.status();
        let body = if status.is_success() {
            Some(response.json::<LoginResponse>().await?)
        } else {
            None
        };
        login_token(status, body, &url)
    }

    async fn fetch_regions(&self) -> Result<Vec<Region>, ApiError> {
        let url = self.api_url("regions");
        let response = self.client.get(&url).send().await?;
        Ok(ensure_success(response, &url)?.json().await?)
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        let url = self.api_url("categories");
        let response = self.client.get(&url).send().await?;
        Ok(ensure_success(response, &url)?.json().await?)
    }

    async fn fetch_restaurants(
        &self,
        region: &Region,
        category: &Category,
    ) -> Result<Vec<RestaurantSummary>, ApiError> {
        let url = self.api_url("restaurants");
        let category_id = category.id.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("region", region.name.as_str()),
                ("category", category_id.as_str()),
            ])
            .send()
            .await?;
        Ok(ensure_success(response, &url)?.json().await?)
    }

    async fn fetch_restaurant(&self, id: RestaurantId) -> Result<Restaurant, ApiError> {
        let url = self.api_url(&format!("restaurants/{id}"));
        let response = self.client.get(&url).send().await?;
        Ok(ensure_success(response, &url)?.json().await?)
    }

    async fn post_review(&self, request: &PostReview) -> Result<(), ApiError> {
        let url = self.api_url(&format!("restaurants/{}/reviews", request.restaurant_id));
        let response = self
            .client
            .post(&url)
            .bearer_auth(&request.access_token)
            .json(&request.review)
            .send()
            .await?;
        ensure_success(response, &url)?;
        Ok(())
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base, path.trim_start_matches('/'))
}

fn ensure_success(response: Response, url: &str) -> Result<Response, ApiError> {
    check_status(response.status(), url)?;
    Ok(response)
}

fn check_status(status: StatusCode, url: &str) -> Result<(), ApiError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        })
    }
}

/// Token carried by a login response.
///
/// A 4xx status is a rejected login and yields an empty token, as does a
/// successful body without a token. Other failures are errors.
fn login_token(
    status: StatusCode,
    body: Option<LoginResponse>,
    url: &str,
) -> Result<String, ApiError> {
    if status.is_client_error() {
        log::debug!("login rejected with status {status}");
        return Ok(String::new());
    }
    check_status(status, url)?;
    Ok(body.map(|body| body.access_token).unwrap_or_default())
}
