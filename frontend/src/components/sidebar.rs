use crate::store::{Action, Route, StoreContext};
use yew::prelude::*;

const PRIMARY_ROUTES: [(Route, &str); 3] = [
    (
        Route::Translate,
        "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm-1 17.93c-3.95-.49-7-3.85-7-7.93 0-.62.08-1.21.21-1.79L9 15v1c0 1.1.9 2 2 2v1.93zm6.9-2.54c-.26-.81-1-1.39-1.9-1.39h-1v-3c0-.55-.45-1-1-1H8v-2h2c.55 0 1-.45 1-1V7h2c1.1 0 2-.9 2-2v-.41c2.93 1.19 5 4.06 5 7.41 0 2.08-.8 3.97-2.1 5.39z",
    ),
    (
        Route::History,
        "M13 3c-4.97 0-9 4.03-9 9H1l3.89 3.89.07.14L9 12H6c0-3.87 3.13-7 7-7s7 3.13 7 7-3.13 7-7 7c-1.93 0-3.68-.79-4.94-2.06l-1.42 1.42C8.27 19.99 10.51 21 13 21c4.97 0 9-4.03 9-9s-4.03-9-9-9zm-1 5v5l4.28 2.54.72-1.21-3.5-2.08V8H12z",
    ),
    (
        Route::Settings,
        "M19.14 12.94c.04-.3.06-.61.06-.94 0-.32-.02-.64-.07-.94l2.03-1.58c.18-.14.23-.41.12-.61l-1.92-3.32c-.12-.22-.37-.29-.59-.22l-2.39.96c-.5-.38-1.03-.7-1.62-.94l-.36-2.54c-.04-.24-.24-.41-.48-.41h-3.84c-.24 0-.43.17-.47.41l-.36 2.54c-.59.24-1.13.57-1.62.94l-2.39-.96c-.22-.08-.47 0-.59.22L3.16 8.87c-.12.21-.08.47.12.61l2.03 1.58c-.05.3-.09.63-.09.94s.02.64.07.94l-2.03 1.58c-.18.14-.23.41-.12.61l1.92 3.32c.12.22.37.29.59.22l2.39-.96c.5.38 1.03.7 1.62.94l.36 2.54c.05.24.24.41.48.41h3.84c.24 0 .44-.17.47-.41l.36-2.54c.59-.24 1.13-.56 1.62-.94l2.39.96c.22.08.47 0 .59-.22l1.92-3.32c.12-.22.07-.47-.12-.61l-2.01-1.58zM12 15.6c-1.98 0-3.6-1.62-3.6-3.6s1.62-3.6 3.6-3.6 3.6 1.62 3.6 3.6-1.62 3.6-3.6 3.6z",
    ),
];

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let store = use_context::<StoreContext>().expect("Store context not found");

    let navigate = {
        let store = store.clone();
        Callback::from(move |route: Route| store.dispatch(Action::Navigate(route)))
    };

    let nav_button = |route: Route, icon: Option<&'static str>| {
        let navigate = navigate.clone();
        let is_active = store.route == route;
        html! {
            <button
                class={classes!("nav-item", is_active.then_some("active"))}
                onclick={move |_| navigate.emit(route)}
            >
                if let Some(path) = icon {
                    <svg viewBox="0 0 24 24"><path d={path}></path></svg>
                }
                <span>{route.label()}</span>
            </button>
        }
    };

    html! {
        <nav class="sidebar">
            <header>
                <div class="sidebar-header-content">
                    <h1 class="app-title">{"Ringua"}</h1>
                    <p class="app-tagline">{"AI Translation"}</p>
                    <span class="badge badge-secondary">{"Beta"}</span>
                </div>
            </header>

            <div class="nav-list">
                { for PRIMARY_ROUTES.iter().map(|(route, icon)| nav_button(*route, Some(*icon))) }
            </div>

            <div class="sidebar-footer">
                { nav_button(Route::About, None) }
                { nav_button(Route::Demo, None) }
                <div class="sidebar-version">{"Ringua v0.1.0"}</div>
            </div>
        </nav>
    }
}
