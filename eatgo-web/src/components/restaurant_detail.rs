use shared::models::Restaurant;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RestaurantDetailProps {
    pub restaurant: Restaurant,
}

#[function_component(RestaurantDetail)]
pub fn restaurant_detail(props: &RestaurantDetailProps) -> Html {
    let restaurant = &props.restaurant;

    html! {
        <section class="space-y-2">
            <h2 class="text-2xl font-bold">{ restaurant.name.clone() }</h2>
            <p>{ format!("주소: {}", restaurant.address) }</p>
            <h3 class="text-lg font-semibold">{"메뉴"}</h3>
            if restaurant.menu_items.is_empty() {
                <p>{"메뉴가 없어요!"}</p>
            } else {
                <ul class="list-disc ml-6">
                    { for restaurant.menu_items.iter().map(|item| html! {
                        <li key={item.id}>{ item.name.clone() }</li>
                    }) }
                </ul>
            }
        </section>
    }
}
