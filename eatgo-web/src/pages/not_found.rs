use yew::{Html, function_component, html};

/// Page shown for unknown paths
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ "Not Found" }</h1>
        </div>
    }
}
