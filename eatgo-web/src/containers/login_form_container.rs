use shared::models::LoginField;
use yew::prelude::*;
use yewdux::prelude::use_store;

use crate::actions::change_login_field;
use crate::components::{LoginForm, LogoutForm};
use crate::hooks::{spawn_action, use_action_creators};
use crate::store::{AppState, StoreHandle};

#[function_component(LoginFormContainer)]
pub fn login_form_container() -> Html {
    let (state, dispatch) = use_store::<AppState>();
    let actions = use_action_creators();

    let on_change = {
        let dispatch = dispatch.clone();
        Callback::from(move |(name, value): (LoginField, String)| {
            dispatch.dispatch(change_login_field(name, value));
        })
    };

    let on_submit = {
        let dispatch = dispatch.clone();
        let actions = actions.clone();
        Callback::from(move |()| {
            let dispatch = dispatch.clone();
            let actions = actions.clone();
            spawn_action("login", async move { actions.request_login(&dispatch).await });
        })
    };

    let on_logout = Callback::from(move |()| {
        if let Err(err) = actions.logout(&dispatch) {
            log::error!("logout failed: {err}");
        }
    });

    html! {
        <div class="card w-full max-w-md shadow-lg bg-base-100 mx-auto">
            if state.is_logged_in() {
                <LogoutForm {on_logout} />
            } else {
                <LoginForm fields={state.login_fields.clone()} {on_change} {on_submit} />
            }
        </div>
    }
}
