//! Home page with the API health probe.

use crate::app::use_api_ctx;
use crate::core::store::AppStore;
use crate::features::home::state::HealthStatus;
use gloo::console;
use yew::prelude::*;
use yewdux::prelude::use_store;

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    let api = use_api_ctx();
    let (store, dispatch) = use_store::<AppStore>();

    use_effect_with_deps(
        move |_| {
            dispatch.reduce_mut(|store| store.home = HealthStatus::Checking);
            yew::platform::spawn_local(async move {
                let result = api.client.health().await;
                if let Err(err) = &result {
                    console::error!("health probe failed", err.to_string());
                }
                dispatch.reduce_mut(|store| store.home = HealthStatus::from_result(&result));
            });
            || ()
        },
        (),
    );

    html! {
        <section class="home-page">
            <h1>{"Itemboard"}</h1>
            <p>{"API status: "}<strong>{store.home.label().to_string()}</strong></p>
        </section>
    }
}
