use crate::routes::MainRoute;
use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

/// Home page component
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let (i18n, _) = use_translation();

    let card = |icon_id: IconId, route: MainRoute, description: String| {
        let title = i18n.t(route.nav_key());
        html! {
            <div class="card bg-base-200 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">
                        <Icon {icon_id} class="w-6 h-6" />
                        { title.clone() }
                    </h2>
                    <p>{ description }</p>
                    <div class="card-actions justify-end">
                        <Link<MainRoute> to={route} classes="btn btn-primary">
                            { title }
                        </Link<MainRoute>>
                    </div>
                </div>
            </div>
        }
    };

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ "Home" }</h1>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                { card(IconId::HeroiconsOutlineMapPin, MainRoute::Restaurants, i18n.t("home.restaurants")) }
                { card(IconId::HeroiconsOutlineInformationCircle, MainRoute::About, i18n.t("home.about")) }
                { card(IconId::HeroiconsOutlineUserCircle, MainRoute::Login, i18n.t("home.login")) }
            </div>
        </div>
    }
}
