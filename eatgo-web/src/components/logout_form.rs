use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LogoutFormProps {
    pub on_logout: Callback<()>,
}

#[function_component(LogoutForm)]
pub fn logout_form(props: &LogoutFormProps) -> Html {
    let onclick = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    html! {
        <div class="card-body items-center">
            <button class="btn btn-outline" type="button" {onclick}>
                {"Log out"}
            </button>
        </div>
    }
}
