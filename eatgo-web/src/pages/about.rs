use yew::{Html, function_component, html};

/// About page component
#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ "About" }</h1>
            <p>{ "About 페이지" }</p>
            <p>{ "지역과 분류로 레스토랑을 찾고, 로그인해서 리뷰를 남길 수 있어요." }</p>
        </div>
    }
}
