//! Prev/next pager for the items list.

use crate::features::items::logic::PaginationView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PaginationProps {
    pub view: PaginationView,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_prev: Callback<()>,
    #[prop_or_default]
    pub on_next: Callback<()>,
}

#[function_component(Pagination)]
pub(crate) fn pagination(props: &PaginationProps) -> Html {
    let go_prev = props.on_prev.reform(|_: MouseEvent| ());
    let go_next = props.on_next.reform(|_: MouseEvent| ());
    let view = &props.view;

    html! {
        <div class={classes!("join", "pagination", props.class.clone())}>
            <button class="btn join-item" disabled={!view.can_prev} onclick={go_prev}>{"Prev"}</button>
            <span class="join-item pagination-label">{view.label()}</span>
            <button class="btn join-item" disabled={!view.can_next} onclick={go_next}>{"Next"}</button>
        </div>
    }
}
