use yew::prelude::*;

/// One choice in a [`SelectableList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectableItem {
    pub id: u64,
    pub name: String,
}

impl SelectableItem {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Button text, marked with `(V)` when selected.
    pub fn label(&self, selected: Option<u64>) -> String {
        if selected == Some(self.id) {
            format!("{}(V)", self.name)
        } else {
            self.name.clone()
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct SelectableListProps {
    pub items: Vec<SelectableItem>,
    #[prop_or_default]
    pub selected: Option<u64>,
    pub on_select: Callback<u64>,
}

#[function_component(SelectableList)]
pub fn selectable_list(props: &SelectableListProps) -> Html {
    html! {
        <ul class="flex flex-wrap gap-2">
            { for props.items.iter().map(|item| {
                let id = item.id;
                let on_select = props.on_select.clone();
                let active = if props.selected == Some(id) { "btn-primary" } else { "btn-ghost" };
                html! {
                    <li key={id}>
                        <button
                            class={classes!("btn", "btn-sm", active)}
                            type="button"
                            onclick={Callback::from(move |_: MouseEvent| on_select.emit(id))}
                        >
                            { item.label(props.selected) }
                        </button>
                    </li>
                }
            }) }
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_item_is_marked() {
        let item = SelectableItem::new(1, "서울");

        assert_eq!(item.label(Some(1)), "서울(V)");
        assert_eq!(item.label(Some(2)), "서울");
        assert_eq!(item.label(None), "서울");
    }
}
