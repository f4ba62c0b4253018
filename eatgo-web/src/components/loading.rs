use yew::{Html, function_component, html};

#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="flex items-center justify-center p-6 animate-fadeIn">
            <span class="loading loading-dots loading-md mr-2"></span>
            <span>{"Loading..."}</span>
        </div>
    }
}
