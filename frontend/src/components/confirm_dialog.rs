use crate::store::{Action, StoreContext};
use shared::navigation::Resolution;
use yew::prelude::*;

/// Asks what to do with unsaved settings before leaving the settings page.
#[function_component(UnsavedChangesDialog)]
pub fn unsaved_changes_dialog() -> Html {
    let store = use_context::<StoreContext>().expect("Store context not found");

    let resolve = |resolution: Resolution| {
        let store = store.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            store.dispatch(Action::ResolveNavigation(resolution));
        })
    };

    let destination = store
        .guard
        .pending()
        .map(|route| route.label())
        .unwrap_or_default();

    html! {
        <div class="modal-overlay" onclick={resolve(Resolution::Cancel)}>
            <div class="modal-content" onclick={|e: MouseEvent| e.stop_propagation()}>
                <div class="modal-header">
                    <h2 class="modal-title">{"未保存の変更があります"}</h2>
                    <button class="close-btn" onclick={resolve(Resolution::Cancel)}>{"×"}</button>
                </div>

                <div class="modal-body">
                    <p>
                        {format!("「{}」へ移動する前に、変更した設定をどうしますか？", destination)}
                    </p>

                    <div class="form-actions">
                        <button class="btn btn-secondary" onclick={resolve(Resolution::Cancel)}>
                            {"キャンセル"}
                        </button>
                        <button class="btn btn-danger" onclick={resolve(Resolution::Discard)}>
                            {"破棄して移動"}
                        </button>
                        <button class="btn btn-primary" onclick={resolve(Resolution::SaveAndGo)}>
                            {"保存して移動"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
