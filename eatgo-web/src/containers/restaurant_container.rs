use shared::models::RestaurantId;
use yew::prelude::*;
use yewdux::prelude::use_store;

use crate::components::{Loading, RestaurantDetail, Reviews};
use crate::containers::ReviewFormContainer;
use crate::hooks::{spawn_action, use_action_creators};
use crate::store::AppState;

#[derive(Properties, PartialEq, Clone)]
pub struct RestaurantContainerProps {
    pub restaurant_id: RestaurantId,
}

#[function_component(RestaurantContainer)]
pub fn restaurant_container(props: &RestaurantContainerProps) -> Html {
    let (state, dispatch) = use_store::<AppState>();
    let actions = use_action_creators();

    use_effect_with(props.restaurant_id, move |&restaurant_id| {
        spawn_action("load restaurant", async move {
            actions.load_restaurant(&dispatch, restaurant_id).await
        });
        || ()
    });

    let Some(restaurant) = state.restaurant.clone() else {
        return html! { <Loading /> };
    };

    html! {
        <div class="space-y-6">
            <RestaurantDetail restaurant={restaurant.clone()} />
            if state.is_logged_in() {
                <ReviewFormContainer restaurant_id={props.restaurant_id} />
            }
            <Reviews {restaurant} />
        </div>
    }
}
