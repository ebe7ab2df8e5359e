//! Items list page.
//!
//! # Design
//! - `ItemsState` transitions run inside the yewdux reducer; the returned
//!   effects are executed here, outside the reducer.
//! - Async completions re-enter through the same runner so stale results are
//!   filtered by the state machine, not by the view.

use crate::app::location::{current_search, replace_list_params};
use crate::app::use_api_ctx;
use crate::components::atoms::empty_state::EmptyState;
use crate::components::item_row::ItemRow;
use crate::components::pagination::Pagination;
use crate::core::debounce::TimerSlot;
use crate::core::store::AppStore;
use crate::features::items::actions::{ItemsAction, ItemsEffect};
use crate::features::items::loader::FetchRequest;
use crate::features::items::logic::{page_is_inconsistent, pagination_view, row_view};
use crate::services::api::ApiClient;
use crate::services::error::ApiError;
use gloo::console;
use itemboard_api_models::{SortKey, SortOrder};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_store};

/// Executes effects and feeds completions back into the store.
#[derive(Clone)]
struct EffectRunner {
    client: Rc<ApiClient>,
    dispatch: Dispatch<AppStore>,
    timer: Rc<RefCell<TimerSlot>>,
    add_input: NodeRef,
}

impl EffectRunner {
    fn dispatch(&self, action: ItemsAction) {
        let mut effects = Vec::new();
        self.dispatch.reduce_mut(|store| {
            effects = store.items.apply(action);
        });
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(&self, effect: ItemsEffect) {
        match effect {
            ItemsEffect::Fetch(FetchRequest { token, query }) => {
                let runner = self.clone();
                yew::platform::spawn_local(async move {
                    let result = runner.client.list_items(&query).await;
                    if let Err(err) = &result {
                        log_failure("item list load failed", err);
                    }
                    runner.dispatch(ItemsAction::Loaded { token, result });
                    if page_is_inconsistent(&runner.dispatch.get().items) {
                        console::warn!("item list page exceeds its reported bounds");
                    }
                });
            }
            ItemsEffect::Create { name } => {
                let runner = self.clone();
                yew::platform::spawn_local(async move {
                    let result = runner.client.create_item(&name).await;
                    if let Err(err) = &result {
                        log_failure("item create failed", err);
                    }
                    runner.dispatch(ItemsAction::Created { result });
                });
            }
            ItemsEffect::Update { id, name } => {
                let runner = self.clone();
                yew::platform::spawn_local(async move {
                    let result = runner.client.update_item(id, &name).await;
                    if let Err(err) = &result {
                        log_failure("item update failed", err);
                    }
                    runner.dispatch(ItemsAction::Saved { id, result });
                });
            }
            ItemsEffect::Delete { id } => {
                let runner = self.clone();
                yew::platform::spawn_local(async move {
                    let result = runner.client.delete_item(id).await;
                    if let Err(err) = &result {
                        log_failure("item delete failed", err);
                    }
                    runner.dispatch(ItemsAction::Deleted { id, result });
                });
            }
            ItemsEffect::ReplaceUrl(params) => replace_list_params(&params),
            ItemsEffect::ArmDebounce(ticket) => {
                let runner = self.clone();
                self.timer.borrow_mut().arm(ticket, move |generation| {
                    runner.dispatch(ItemsAction::QuerySettled(generation));
                });
            }
            ItemsEffect::FocusAddInput => {
                if let Some(input) = self.add_input.cast::<HtmlInputElement>() {
                    let _ = input.focus();
                }
            }
        }
    }
}

fn log_failure(what: &str, err: &ApiError) {
    match err.status() {
        Some(status) => console::error!(what, status, err.to_string()),
        None => console::error!(what, err.to_string()),
    }
}

const fn sort_label(sort: SortKey) -> &'static str {
    match sort {
        SortKey::Id => "Newest id",
        SortKey::Name => "Name",
        SortKey::CreatedAt => "Created",
    }
}

#[function_component(ItemsPage)]
pub(crate) fn items_page() -> Html {
    let api = use_api_ctx();
    let add_input = use_node_ref();
    let timer = use_mut_ref(TimerSlot::default);
    let (store, dispatch) = use_store::<AppStore>();
    let runner = {
        let client = api.client.clone();
        let add_input = add_input.clone();
        let timer = timer.clone();
        use_memo(
            move |_| EffectRunner {
                client,
                dispatch,
                timer,
                add_input,
            },
            (),
        )
    };

    {
        let runner = runner.clone();
        use_effect_with_deps(
            move |_| {
                runner.dispatch(ItemsAction::Mount {
                    search: current_search(),
                });
                move || {
                    runner.timer.borrow_mut().cancel();
                    runner.dispatch(ItemsAction::Unmount);
                }
            },
            (),
        );
    }

    let on_action = {
        let runner = runner.clone();
        Callback::from(move |action: ItemsAction| runner.dispatch(action))
    };
    let state = &store.items;

    let on_search = on_action.reform(|event: InputEvent| {
        let input: HtmlInputElement = event.target_unchecked_into();
        ItemsAction::SetQuery(input.value())
    });
    let on_sort = on_action.reform(|event: Event| {
        let select: HtmlSelectElement = event.target_unchecked_into();
        ItemsAction::SetSort(SortKey::parse(&select.value()).unwrap_or_default())
    });
    let on_order = on_action.reform(|event: Event| {
        let select: HtmlSelectElement = event.target_unchecked_into();
        ItemsAction::SetOrder(SortOrder::parse(&select.value()).unwrap_or_default())
    });
    let on_new_name = on_action.reform(|event: InputEvent| {
        let input: HtmlInputElement = event.target_unchecked_into();
        ItemsAction::SetNewName(input.value())
    });
    let on_add = on_action.reform(|event: SubmitEvent| {
        event.prevent_default();
        ItemsAction::SubmitNew
    });
    let on_retry = on_action.reform(|_: MouseEvent| ItemsAction::Reload);
    let on_prev = on_action.reform(|()| ItemsAction::PrevPage);
    let on_next = on_action.reform(|()| ItemsAction::NextPage);

    let banner = state.data.error.as_ref().map_or_else(Html::default, |message| {
        html! {
            <div class="alert alert-error" role="alert">
                <span>{message.clone()}</span>
                <button class="btn btn-sm" onclick={on_retry}>{"Retry"}</button>
            </div>
        }
    });

    let list = if state.data.items.is_empty() && !state.data.loading {
        let hint = if state.params.query.is_empty() {
            "Add one above to get started."
        } else {
            "Try a different search."
        };
        html! { <EmptyState title="No items found" hint={Some(AttrValue::from(hint))} /> }
    } else {
        html! {
            <ul class="item-list">
                { for state.data.items.iter().map(|item| html! {
                    <ItemRow
                        key={item.id}
                        item={item.clone()}
                        view={row_view(state, item)}
                        on_action={on_action.clone()}
                    />
                }) }
            </ul>
        }
    };

    html! {
        <section class="items-page">
            <h1>{"Items"}</h1>
            <form class="add-item" onsubmit={on_add}>
                <input
                    ref={add_input}
                    class="input"
                    placeholder="New item name"
                    aria-label="New item name"
                    value={state.adding.name.clone()}
                    oninput={on_new_name}
                />
                <button class="btn btn-primary" type="submit" disabled={!state.adding.can_submit()}>
                    {if state.adding.submitting { "Adding…" } else { "Add" }}
                </button>
            </form>
            <div class="toolbar">
                <input
                    class="input"
                    type="search"
                    placeholder="Search items"
                    aria-label="Search items"
                    value={state.search_input.clone()}
                    oninput={on_search}
                />
                <select class="select" aria-label="Sort by" onchange={on_sort}>
                    { for SortKey::ALL.iter().map(|sort| html! {
                        <option value={sort.as_str()} selected={*sort == state.params.sort}>
                            {sort_label(*sort)}
                        </option>
                    }) }
                </select>
                <select class="select" aria-label="Sort order" onchange={on_order}>
                    <option value="desc" selected={state.params.order == SortOrder::Desc}>{"Descending"}</option>
                    <option value="asc" selected={state.params.order == SortOrder::Asc}>{"Ascending"}</option>
                </select>
            </div>
            {banner}
            if state.data.loading {
                <p class="muted" aria-live="polite">{"Searching…"}</p>
            }
            {list}
            <Pagination view={pagination_view(state)} {on_prev} {on_next} />
        </section>
    }
}
