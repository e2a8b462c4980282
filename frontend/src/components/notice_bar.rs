use crate::store::{Action, Notice, StoreContext};
use yew::prelude::*;

#[function_component(NoticeBar)]
pub fn notice_bar() -> Html {
    let store = use_context::<StoreContext>().expect("Store context not found");

    let Some(notice) = store.notice.clone() else {
        return html! {};
    };

    let on_dismiss = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(Action::DismissNotice))
    };

    let (class, message) = match notice {
        Notice::Info(message) => ("notice notice-info", message),
        Notice::Error(message) => ("notice notice-error", message),
    };

    html! {
        <div class={class} role="status">
            <span>{message}</span>
            <button class="close-btn" onclick={on_dismiss}>{"×"}</button>
        </div>
    }
}
