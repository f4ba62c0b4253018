use shared::models::{LoginField, LoginFields};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LoginFormProps {
    pub fields: LoginFields,
    pub on_change: Callback<(LoginField, String)>,
    pub on_submit: Callback<()>,
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let input = |field: LoginField, label: &str, input_type: &str| {
        let id = format!("login-{field}");
        let on_change = props.on_change.clone();
        let oninput = Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                on_change.emit((field, input.value()));
            }
        });

        html! {
            <div class="form-control">
                <label class="label" for={id.clone()}>
                    <span class="label-text">{label.to_string()}</span>
                </label>
                <input
                    id={id}
                    class="input input-bordered"
                    type={input_type.to_string()}
                    name={field.to_string()}
                    value={props.fields.get(field).to_string()}
                    {oninput}
                />
            </div>
        }
    };

    let onclick = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <form class="card-body">
            { input(LoginField::Email, "E-mail", "email") }
            { input(LoginField::Password, "Password", "password") }
            <div class="form-control mt-6">
                <button class="btn btn-primary" type="button" {onclick}>
                    {"Log In"}
                </button>
            </div>
        </form>
    }
}
