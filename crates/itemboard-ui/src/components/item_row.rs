//! Single row of the items list.
//!
//! # Design
//! - Rendering is a function of `RowView`; every interaction becomes an
//!   `ItemsAction` handed to the page.
//! - The edit input focuses itself when the row enters edit mode.

use crate::features::items::actions::ItemsAction;
use crate::features::items::logic::{RowMode, RowView};
use itemboard_api_models::Item;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ItemRowProps {
    pub item: Item,
    pub view: RowView,
    pub on_action: Callback<ItemsAction>,
}

#[function_component(ItemRow)]
pub(crate) fn item_row(props: &ItemRowProps) -> Html {
    let input_ref = use_node_ref();
    let id = props.item.id;
    let view = &props.view;

    {
        let input_ref = input_ref.clone();
        use_effect_with_deps(
            move |mode| {
                if *mode == RowMode::Editing {
                    if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                        let _ = input.focus();
                        input.select();
                    }
                }
                || ()
            },
            view.mode,
        );
    }

    let emit = |action: ItemsAction| {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(action.clone()))
    };

    let body = match view.mode {
        RowMode::Editing => {
            let oninput = props.on_action.reform(|event: InputEvent| {
                let input: HtmlInputElement = event.target_unchecked_into();
                ItemsAction::EditDraft(input.value())
            });
            let onkeydown = {
                let on_action = props.on_action.clone();
                Callback::from(move |event: KeyboardEvent| {
                    let key = event.key();
                    if key == "Enter" || key == "Escape" {
                        event.prevent_default();
                    }
                    on_action.emit(ItemsAction::EditKey(key));
                })
            };
            html! {
                <>
                    <input
                        ref={input_ref}
                        class="input input-sm"
                        aria-label="Edit item name"
                        value={view.draft.clone()}
                        disabled={view.saving}
                        {oninput}
                        {onkeydown}
                    />
                    <button class="btn btn-sm btn-primary" disabled={!view.can_save} onclick={emit(ItemsAction::SaveEdit)}>
                        {if view.saving { "Saving…" } else { "Save" }}
                    </button>
                    <button class="btn btn-sm" disabled={view.saving} onclick={emit(ItemsAction::CancelEdit)}>{"Cancel"}</button>
                </>
            }
        }
        RowMode::Viewing | RowMode::ConfirmingDelete => {
            let delete_controls = if view.mode == RowMode::ConfirmingDelete {
                html! {
                    <>
                        <button class="btn btn-sm btn-error" disabled={view.deleting} onclick={emit(ItemsAction::ConfirmDelete(id))}>{"Confirm?"}</button>
                        <button class="btn btn-sm" onclick={emit(ItemsAction::CancelDelete)}>{"Cancel"}</button>
                    </>
                }
            } else {
                html! {
                    <button class="btn btn-sm btn-ghost" disabled={view.deleting} onclick={emit(ItemsAction::AskDelete(id))}>{"Delete"}</button>
                }
            };
            html! {
                <>
                    <span class="item-name">{props.item.name.clone()}</span>
                    <button class="btn btn-sm" disabled={view.saving} onclick={emit(ItemsAction::StartEdit(id))}>{"Edit"}</button>
                    {delete_controls}
                </>
            }
        }
    };

    html! {
        <li class={classes!("item-row", view.deleting.then_some("opacity-50"))}>
            {body}
        </li>
    }
}
