use i18nrs::yew::use_translation;
use yew::{Html, Properties, classes, function_component, html};
use yew_router::prelude::Link;

use crate::routes::MainRoute;

#[derive(Properties, PartialEq, Eq)]
pub struct HeaderNavItemProps {
    pub route: MainRoute,
    pub current_route: Option<MainRoute>,
}

#[function_component(HeaderNavItem)]
pub fn header_nav_item(props: &HeaderNavItemProps) -> Html {
    let (i18n, ..) = use_translation();

    let route_name = i18n.t(props.route.nav_key());
    let active_route_class = match (&props.current_route, &props.route) {
        (Some(MainRoute::Restaurant { .. }), MainRoute::Restaurants) => "btn-soft",
        (Some(current), route) if current == route => "btn-soft",
        _ => "",
    };

    html! {
      <li>
          <Link<MainRoute> to={props.route.clone()} classes={classes!("btn", "btn-ghost", active_route_class)}>
              {route_name}
          </Link<MainRoute>>
      </li>
    }
}
