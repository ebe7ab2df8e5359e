//! App shell: router, navigation and the shared API context.

use crate::components::atoms::empty_state::EmptyState;
use crate::features::add_item::view::AddItemPage;
use crate::features::home::view::HomePage;
use crate::features::items::view::ItemsPage;
pub(crate) use api::ApiCtx;
pub(crate) use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

mod api;
pub(crate) mod location;
mod preferences;
mod routes;

#[function_component(ItemboardApp)]
pub(crate) fn itemboard_app() -> Html {
    let api_ctx = use_memo(|_| ApiCtx::resolve(), ());

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <nav class="navbar">
                    <Link<Route> to={Route::Home} classes="btn btn-ghost">{"Home"}</Link<Route>>
                    <Link<Route> to={Route::Items} classes="btn btn-ghost">{"Items"}</Link<Route>>
                    <Link<Route> to={Route::AddItem} classes="btn btn-ghost">{"Add item"}</Link<Route>>
                </nav>
                <main class="container">
                    <Switch<Route> render={switch} />
                </main>
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Items => html! { <ItemsPage /> },
        Route::AddItem => html! { <AddItemPage /> },
        Route::NotFound => html! {
            <EmptyState title="Page not found" hint={Some(AttrValue::from("Nothing lives at this address."))}>
                <Link<Route> to={Route::Items} classes="btn">{"Back to items"}</Link<Route>>
            </EmptyState>
        },
    }
}

/// Resolve the API client from context, falling back to a fresh one.
#[hook]
pub(crate) fn use_api_ctx() -> ApiCtx {
    let fallback = use_memo(|_| ApiCtx::resolve(), ());
    use_context::<ApiCtx>().unwrap_or_else(|| (*fallback).clone())
}

/// Mount the UI into `#root`, or the document body when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<ItemboardApp>::with_root(root).render();
    } else {
        yew::Renderer::<ItemboardApp>::new().render();
    }
}
