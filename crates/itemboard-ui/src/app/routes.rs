//! Routing definitions for the Itemboard UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/items")]
    Items,
    #[at("/items/new")]
    AddItem,
    #[not_found]
    #[at("/404")]
    NotFound,
}
