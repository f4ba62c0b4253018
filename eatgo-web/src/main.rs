mod actions;
mod app;
mod components;
mod config;
mod containers;
mod error;
mod hooks;
mod language;
mod logger;
mod pages;
mod routes;
mod services;
mod store;
mod utils;

use app::App;
use config::FrontendConfig;
use i18nrs::yew::I18nProvider;
use i18nrs::yew::I18nProviderConfig;
use language::{DEFAULT_LANGUAGE, translations};
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(InternationalApp)]
fn international_app() -> Html {
    let config = I18nProviderConfig {
        translations: translations(),
        default_language: DEFAULT_LANGUAGE.to_string(),
        ..Default::default()
    };

    html! {
        <YewduxRoot>
            <I18nProvider ..config>
                <App />
            </I18nProvider>
        </YewduxRoot>
    }
}

fn main() {
    // Disable truncation of panic payloads to debug any panics
    std::panic::set_hook(Box::new(|info| {
        if let Some(s) = info.payload().downcast_ref::<String>() {
            web_sys::console::error_1(&format!("Panic: {s}").into());
        } else if let Some(s) = info.payload().downcast_ref::<&str>() {
            web_sys::console::error_1(&format!("Panic: {s}").into());
        } else {
            web_sys::console::error_1(&"Unknown panic".into());
        }
        if let Some(location) = info.location() {
            web_sys::console::error_1(
                &format!(
                    "  at {}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                )
                .into(),
            );
        }
    }));

    let config = FrontendConfig::new();
    if let Err(err) = logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }
    log::info!("starting EatGo against {}", config.api_base_url());

    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        log::error!("no document body to mount the application on");
        return;
    };

    Renderer::<InternationalApp>::with_root(body.into()).render();
}
