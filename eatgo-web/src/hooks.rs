use std::future::Future;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::{hook, use_memo};

use crate::actions::ActionCreators;
use crate::error::ActionError;
use crate::services::{EatGoClient, LocalTokenStorage};

/// Action creators over the browser services.
pub type BrowserActions = ActionCreators<EatGoClient, LocalTokenStorage>;

/// Action creators bound to the browser services, created once per component.
#[hook]
pub fn use_action_creators() -> Rc<BrowserActions> {
    use_memo((), |_| ActionCreators::browser())
}

/// Run an orchestrator on the browser event loop, logging a failure.
pub fn spawn_action<F>(name: &'static str, action: F)
where
    F: Future<Output = Result<(), ActionError>> + 'static,
{
    spawn_local(async move {
        if let Err(err) = action.await {
            log::error!("{name} failed: {err}");
        }
    });
}
