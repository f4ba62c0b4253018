use shared::models::RestaurantSummary;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::routes::MainRoute;

#[derive(Properties, PartialEq, Clone)]
pub struct RestaurantListProps {
    pub restaurants: Vec<RestaurantSummary>,
}

#[function_component(RestaurantList)]
pub fn restaurant_list(props: &RestaurantListProps) -> Html {
    if props.restaurants.is_empty() {
        return html! {};
    }

    html! {
        <ul class="menu bg-base-200 rounded-box">
            { for props.restaurants.iter().map(|restaurant| html! {
                <li key={restaurant.id}>
                    <Link<MainRoute> to={MainRoute::Restaurant { id: restaurant.id }}>
                        { restaurant.name.clone() }
                    </Link<MainRoute>>
                </li>
            }) }
        </ul>
    }
}
