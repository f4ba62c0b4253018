use crate::hooks::use_action_creators;
use crate::routes::{MainRoute, switch};
use crate::store::AppState;
use yew::{Html, function_component, html, use_effect_with};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

#[function_component(App)]
pub fn app() -> Html {
    let (_, dispatch) = use_store::<AppState>();
    let actions = use_action_creators();

    // One-shot hydration of a token persisted by an earlier session.
    use_effect_with((), move |_| {
        match actions.restore_access_token(&dispatch) {
            Ok(true) => log::info!("restored persisted access token"),
            Ok(false) => log::debug!("no persisted access token"),
            Err(err) => log::error!("failed to read persisted access token: {err}"),
        }
        || ()
    });

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={switch} />
        </BrowserRouter>
    }
}
