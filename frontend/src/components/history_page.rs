use crate::browser;
use crate::store::{Action, StoreContext};
use shared::catalog::language_name;
use shared::history::{HistoryFilter, HistorySort};
use yew::prelude::*;

#[function_component(HistoryPage)]
pub fn history_page() -> Html {
    let store = use_context::<StoreContext>().expect("Store context not found");

    // Filter state is page-local; only the records live in the store
    let query = use_state(String::new);
    let favorites_only = use_state(|| false);
    let sort = use_state(HistorySort::default);

    let on_query_input = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let on_favorites_toggle = {
        let favorites_only = favorites_only.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            favorites_only.set(input.checked());
        })
    };

    let on_sort_change = {
        let sort = sort.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            sort.set(match select.value().as_str() {
                "model" => HistorySort::Model,
                _ => HistorySort::Date,
            });
        })
    };

    let filter = HistoryFilter {
        query: (!query.is_empty()).then(|| (*query).clone()),
        favorites_only: *favorites_only,
    };
    let records = store.history.list(&filter, *sort);

    html! {
        <div class="page history-page">
            <div class="page-header">
                <div>
                    <h1 class="page-title">{"翻訳履歴"}</h1>
                    <p class="page-subtitle">{"過去の翻訳記録を管理"}</p>
                </div>
                <div class="badge-row">
                    <span class="badge badge-outline">{format!("合計: {}件", store.history.len())}</span>
                    <span class="badge badge-outline">{format!("お気に入り: {}件", store.history.favorite_count())}</span>
                </div>
            </div>

            <div class="card history-filters">
                <input
                    type="search"
                    class="form-input"
                    placeholder="翻訳を検索..."
                    value={(*query).clone()}
                    oninput={on_query_input}
                />
                <label class="switch-label">
                    <input type="checkbox" checked={*favorites_only} onchange={on_favorites_toggle} />
                    {"お気に入りのみ"}
                </label>
                <select class="form-select" onchange={on_sort_change}>
                    <option value="date" selected={*sort == HistorySort::Date}>{"日付順"}</option>
                    <option value="model" selected={*sort == HistorySort::Model}>{"モデル順"}</option>
                </select>
            </div>

            <div class="history-list">
                if records.is_empty() {
                    <div class="empty-state">
                        { if store.history.is_empty() { "翻訳履歴がありません" } else { "条件に一致する翻訳がありません" } }
                    </div>
                }
                { for records.into_iter().map(|record| {
                    let on_favorite = {
                        let store = store.clone();
                        let id = record.id.clone();
                        Callback::from(move |_| store.dispatch(Action::ToggleFavorite(id.clone())))
                    };
                    let on_delete = {
                        let store = store.clone();
                        let id = record.id.clone();
                        Callback::from(move |_| store.dispatch(Action::DeleteRecord(id.clone())))
                    };
                    let copy = |text: &str| {
                        let text = text.to_string();
                        Callback::from(move |_: MouseEvent| {
                            yew::platform::spawn_local(browser::copy_to_clipboard(text.clone()));
                        })
                    };

                    html! {
                        <div class="card history-item" key={record.id.clone()}>
                            <div class="history-meta">
                                <span class="badge badge-secondary">
                                    {format!(
                                        "{} → {}",
                                        language_name(record.source_language),
                                        language_name(record.target_language)
                                    )}
                                </span>
                                <span class="badge badge-outline">{record.ai_model.clone()}</span>
                                <span class="history-date">
                                    {record.created_at.format("%Y/%m/%d %H:%M").to_string()}
                                </span>
                                <div class="panel-actions">
                                    <button
                                        class={classes!("icon-btn", record.is_favorite.then_some("favorite"))}
                                        onclick={on_favorite}
                                        title="お気に入り"
                                    >
                                        { if record.is_favorite { "★" } else { "☆" } }
                                    </button>
                                    <button class="icon-btn icon-btn-danger" onclick={on_delete} title="削除">
                                        {"🗑"}
                                    </button>
                                </div>
                            </div>
                            <div class="history-texts">
                                <div class="history-text">
                                    <p>{record.source_text.clone()}</p>
                                    <button class="btn btn-secondary btn-sm" onclick={copy(&record.source_text)}>{"原文をコピー"}</button>
                                </div>
                                <div class="history-text">
                                    <p>{record.target_text.clone()}</p>
                                    <button class="btn btn-secondary btn-sm" onclick={copy(&record.target_text)}>{"訳文をコピー"}</button>
                                </div>
                            </div>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
