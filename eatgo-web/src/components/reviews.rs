use shared::models::Restaurant;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ReviewsProps {
    pub restaurant: Restaurant,
}

/// Reviews of a restaurant, most recent first.
#[function_component(Reviews)]
pub fn reviews(props: &ReviewsProps) -> Html {
    let reviews = props.restaurant.reviews_newest_first();
    if reviews.is_empty() {
        return html! {};
    }

    html! {
        <section class="space-y-2">
            <h3 class="text-lg font-semibold">{"리뷰"}</h3>
            <ul class="space-y-2">
                { for reviews.into_iter().map(|review| html! {
                    <li key={review.id} class="card bg-base-200 p-3">
                        <div class="font-semibold">{ review.name.clone() }</div>
                        <div>{ format!("{}점", review.score) }</div>
                        <div>{ review.description.clone() }</div>
                    </li>
                }) }
            </ul>
        </section>
    }
}
