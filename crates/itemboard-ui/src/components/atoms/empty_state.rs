//! Placeholder panel for empty lists and unknown routes.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub hint: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    let hint = props
        .hint
        .as_ref()
        .map_or_else(Html::default, |hint| html! { <p class="muted">{hint.clone()}</p> });
    let actions = if props.children.is_empty() {
        Html::default()
    } else {
        html! { <div class="empty-actions">{ for props.children.iter() }</div> }
    };
    html! {
        <section class="empty-state" role="status">
            <h4>{props.title.clone()}</h4>
            {hint}
            {actions}
        </section>
    }
}
