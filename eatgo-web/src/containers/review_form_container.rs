use shared::models::{RestaurantId, ReviewField};
use yew::prelude::*;
use yewdux::prelude::use_store;

use crate::actions::change_review_field;
use crate::components::ReviewForm;
use crate::hooks::{spawn_action, use_action_creators};
use crate::store::{AppState, StoreHandle};

#[derive(Properties, PartialEq, Clone)]
pub struct ReviewFormContainerProps {
    pub restaurant_id: RestaurantId,
}

#[function_component(ReviewFormContainer)]
pub fn review_form_container(props: &ReviewFormContainerProps) -> Html {
    let (state, dispatch) = use_store::<AppState>();
    let actions = use_action_creators();

    let on_change = {
        let dispatch = dispatch.clone();
        Callback::from(move |(name, value): (ReviewField, String)| {
            dispatch.dispatch(change_review_field(name, value));
        })
    };

    let on_submit = {
        let restaurant_id = props.restaurant_id;
        Callback::from(move |()| {
            let dispatch = dispatch.clone();
            let actions = actions.clone();
            spawn_action("send review", async move {
                actions.send_review(&dispatch, restaurant_id).await
            });
        })
    };

    html! {
        <ReviewForm fields={state.review_fields.clone()} {on_change} {on_submit} />
    }
}
