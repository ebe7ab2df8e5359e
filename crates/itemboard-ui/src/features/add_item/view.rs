//! Standalone add-item page.

use crate::app::{Route, use_api_ctx};
use crate::core::store::AppStore;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::use_navigator;
use yewdux::prelude::use_store;

#[function_component(AddItemPage)]
pub(crate) fn add_item_page() -> Html {
    let api = use_api_ctx();
    let navigator = use_navigator();
    let (store, dispatch) = use_store::<AppStore>();
    let form = &store.add_item;

    let oninput = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            dispatch.reduce_mut(|store| {
                store.add_item.name = input.value();
                store.add_item.error = None;
            });
        })
    };

    let onsubmit = {
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let mut name = None;
            dispatch.reduce_mut(|store| name = store.add_item.submit());
            let Some(name) = name else {
                return;
            };
            let client = api.client.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            yew::platform::spawn_local(async move {
                let result = client.create_item(&name).await;
                let mut created = false;
                dispatch.reduce_mut(|store| created = store.add_item.complete(result));
                if created {
                    if let Some(navigator) = navigator {
                        navigator.push(&Route::Items);
                    }
                }
            });
        })
    };

    html! {
        <section class="add-item-page">
            <h1>{"Add item"}</h1>
            <form {onsubmit}>
                <input
                    class="input"
                    placeholder="Item name"
                    aria-label="Item name"
                    value={form.name.clone()}
                    disabled={form.saving}
                    {oninput}
                />
                <button class="btn btn-primary" type="submit" disabled={form.saving}>
                    {if form.saving { "Saving…" } else { "Save" }}
                </button>
            </form>
            {form.error.clone().map(|error| html! {
                <p class="text-error" role="alert">{error}</p>
            }).unwrap_or_default()}
        </section>
    }
}
