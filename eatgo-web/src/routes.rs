use crate::{containers::layout::Layout, pages::*};
use shared::models::RestaurantId;
use strum::EnumIter;
use yew::prelude::*;
use yew_router::prelude::*;

/// The main routes
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/login")]
    Login,
    #[at("/restaurants")]
    Restaurants,
    #[at("/restaurants/:id")]
    Restaurant { id: RestaurantId },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Routes listed in the header navigation.
    pub fn header_routes() -> Vec<MainRoute> {
        vec![
            MainRoute::Home,
            MainRoute::About,
            MainRoute::Restaurants,
            MainRoute::Login,
        ]
    }

    /// Translation key prefix of a navigable route.
    pub fn nav_key(&self) -> &'static str {
        match self {
            MainRoute::Home => "nav.home",
            MainRoute::About => "nav.about",
            MainRoute::Login => "nav.login",
            MainRoute::Restaurants | MainRoute::Restaurant { .. } => "nav.restaurants",
            MainRoute::NotFound => "nav.not_found",
        }
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log::debug!("switching to route {route:?}");
    let current_route = route.clone();
    let page = match route {
        MainRoute::Home => html! { <HomePage /> },
        MainRoute::About => html! { <AboutPage /> },
        MainRoute::Login => html! { <LoginPage /> },
        MainRoute::Restaurants => html! { <RestaurantsPage /> },
        MainRoute::Restaurant { id } => html! { <RestaurantPage {id} /> },
        MainRoute::NotFound => html! { <NotFoundPage /> },
    };

    html! {
        <Layout current_route={Some(current_route)}>
            { page }
        </Layout>
    }
}
