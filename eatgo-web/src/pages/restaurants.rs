use yew::{Html, function_component, html, use_effect_with};
use yewdux::prelude::use_store;

use crate::containers::{CategoriesContainer, RegionsContainer, RestaurantsContainer};
use crate::hooks::{spawn_action, use_action_creators};
use crate::store::AppState;

/// Restaurant list page: pick a region and category to list restaurants.
#[function_component(RestaurantsPage)]
pub fn restaurants_page() -> Html {
    let (_, dispatch) = use_store::<AppState>();
    let actions = use_action_creators();

    use_effect_with((), move |_| {
        spawn_action("load initial data", async move {
            actions.load_initial_data(&dispatch).await
        });
        || ()
    });

    html! {
        <div class="p-4 space-y-6">
            <RegionsContainer />
            <CategoriesContainer />
            <RestaurantsContainer />
        </div>
    }
}
