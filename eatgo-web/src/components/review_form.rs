use shared::models::{ReviewField, ReviewFields};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ReviewFormProps {
    pub fields: ReviewFields,
    pub on_change: Callback<(ReviewField, String)>,
    pub on_submit: Callback<()>,
}

#[function_component(ReviewForm)]
pub fn review_form(props: &ReviewFormProps) -> Html {
    let input = |field: ReviewField, label: &str, input_type: &str| {
        let id = format!("review-{field}");
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

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <form class="space-y-3" {onsubmit}>
            { input(ReviewField::Score, "평점", "number") }
            { input(ReviewField::Description, "리뷰내용", "text") }
            <button class="btn btn-primary" type="submit">
                {"리뷰 남기기"}
            </button>
        </form>
    }
}
