use yew::{Html, function_component, html};

use crate::containers::LoginFormContainer;

/// Login page component
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold text-center">{ "Log In" }</h1>
            <LoginFormContainer />
        </div>
    }
}
