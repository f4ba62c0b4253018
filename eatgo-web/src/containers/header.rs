use crate::{
    components::header_nav_item::HeaderNavItem,
    routes::MainRoute,
    store::AppState,
};
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let (i18n, ..) = use_translation();
    let is_logged_in = use_selector(AppState::is_logged_in);

    let routes = MainRoute::header_routes()
        .into_iter()
        .filter(|route| !(*is_logged_in && *route == MainRoute::Login))
        .collect::<Vec<_>>();

    html! {
        <nav class="navbar justify-between bg-base-300">
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-ghost text-lg">
                {i18n.t("app.title")}
            </Link<MainRoute>>
            <ul class="menu menu-horizontal">
                { for routes.into_iter().map(|route| html! {
                    <HeaderNavItem
                        current_route={props.current_route.clone()}
                        {route}
                    />
                }) }
            </ul>
            <div class="flex items-center gap-2">
                if *is_logged_in {
                    <Link<MainRoute> to={MainRoute::Login} classes="btn btn-ghost btn-sm">
                        {i18n.t("nav.logout")}
                    </Link<MainRoute>>
                }
            </div>
        </nav>
    }
}
