use shared::models::RestaurantId;
use yew::{Html, Properties, function_component, html};

use crate::containers::RestaurantContainer;

#[derive(Properties, PartialEq, Clone)]
pub struct RestaurantPageProps {
    pub id: RestaurantId,
}

/// Restaurant detail page component
#[function_component(RestaurantPage)]
pub fn restaurant_page(props: &RestaurantPageProps) -> Html {
    html! {
        <div class="p-4">
            <RestaurantContainer restaurant_id={props.id} />
        </div>
    }
}
