//! Region, category and restaurant list containers of the restaurants page.

use yew::prelude::*;
use yewdux::prelude::use_store;

use crate::actions::{select_category, select_region};
use crate::components::{RestaurantList, SelectableItem, SelectableList};
use crate::hooks::{spawn_action, use_action_creators};
use crate::store::{AppState, StoreHandle};

/// Dispatch a selection, then reload restaurants for the new selection.
#[hook]
fn use_select_and_load(select: fn(u64) -> crate::actions::Action) -> Callback<u64> {
    let (_, dispatch) = use_store::<AppState>();
    let actions = use_action_creators();

    Callback::from(move |id: u64| {
        dispatch.dispatch(select(id));
        let dispatch = dispatch.clone();
        let actions = actions.clone();
        spawn_action("load restaurants", async move {
            actions.load_restaurants(&dispatch).await
        });
    })
}

#[function_component(RegionsContainer)]
pub fn regions_container() -> Html {
    let (state, _) = use_store::<AppState>();
    let on_select = use_select_and_load(select_region);

    let items = state
        .regions
        .iter()
        .map(|region| SelectableItem::new(region.id, region.name.clone()))
        .collect::<Vec<_>>();
    let selected = state.selected_region.as_ref().map(|region| region.id);

    html! { <SelectableList {items} {selected} {on_select} /> }
}

#[function_component(CategoriesContainer)]
pub fn categories_container() -> Html {
    let (state, _) = use_store::<AppState>();
    let on_select = use_select_and_load(select_category);

    let items = state
        .categories
        .iter()
        .map(|category| SelectableItem::new(category.id, category.name.clone()))
        .collect::<Vec<_>>();
    let selected = state.selected_category.as_ref().map(|category| category.id);

    html! { <SelectableList {items} {selected} {on_select} /> }
}

#[function_component(RestaurantsContainer)]
pub fn restaurants_container() -> Html {
    let (state, _) = use_store::<AppState>();

    html! { <RestaurantList restaurants={state.restaurants.clone()} /> }
}
