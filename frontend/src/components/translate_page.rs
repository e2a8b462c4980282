use super::language_select::LanguageSelect;
use crate::browser;
use crate::store::{Action, Route, StoreContext};
use shared::models::{LanguageCode, ModelKey};
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

const COPY_ICON: &str = "M16 1H4c-1.1 0-2 .9-2 2v14h2V3h12V1zm3 4H8c-1.1 0-2 .9-2 2v14c0 1.1.9 2 2 2h11c1.1 0 2-.9 2-2V7c0-1.1-.9-2-2-2zm0 16H8V7h11v14z";
const CLEAR_ICON: &str = "M6 19c0 1.1.9 2 2 2h8c1.1 0 2-.9 2-2V7H6v12zM19 4h-3.5l-1-1h-5l-1 1H5v2h14V4z";

fn copy_callback(text: String) -> Callback<MouseEvent> {
    Callback::from(move |_| {
        yew::platform::spawn_local(browser::copy_to_clipboard(text.clone()));
    })
}

#[function_component(TranslatePage)]
pub fn translate_page() -> Html {
    let store = use_context::<StoreContext>().expect("Store context not found");
    let session = &store.session;

    let on_model_change = {
        let store = store.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            if let Some(key) = ModelKey::parse(&select.value()) {
                store.dispatch(Action::SelectModel(key));
            }
        })
    };

    let on_source_language = {
        let store = store.clone();
        Callback::from(move |lang: LanguageCode| store.dispatch(Action::SetSourceLanguage(lang)))
    };

    let on_target_language = {
        let store = store.clone();
        Callback::from(move |lang: LanguageCode| store.dispatch(Action::SetTargetLanguage(lang)))
    };

    let on_swap = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(Action::SwapLanguages))
    };

    let on_source_input = {
        let store = store.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            store.dispatch(Action::SetSourceText(textarea.value()));
        })
    };

    let on_clear = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(Action::ClearSource))
    };

    let on_translate = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(Action::Translate))
    };

    // Ctrl+Enter translates
    let on_source_keydown = {
        let store = store.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && e.ctrl_key() {
                e.prevent_default();
                store.dispatch(Action::Translate);
            }
        })
    };

    let open_settings = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(Action::Navigate(Route::Settings)))
    };

    let selected_key = session.selected_model().map(|m| m.key.to_string());
    let is_translating = session.is_translating();
    let source_text = session.source_text().to_string();
    let target_text = session.target_text().to_string();

    html! {
        <div class="page translate-page">
            <div class="page-header">
                <div>
                    <h1 class="page-title">{"Ringua"}</h1>
                    <p class="page-subtitle">{"AI翻訳アプリケーション"}</p>
                </div>
                <div class="model-picker">
                    <label class="form-label">{"AIモデル:"}</label>
                    if session.models().is_empty() {
                        <button class="btn btn-secondary btn-sm" onclick={open_settings}>
                            {"設定でAPIキーを登録してください"}
                        </button>
                    } else {
                        <select class="form-select" onchange={on_model_change}>
                            { for session.models().iter().map(|model| {
                                let key = model.key.to_string();
                                let selected = selected_key.as_deref() == Some(key.as_str());
                                html! {
                                    <option value={key} {selected}>
                                        {format!("{} ({})", model.model_name, model.provider_name)}
                                    </option>
                                }
                            })}
                        </select>
                    }
                </div>
            </div>

            <div class="card">
                <div class="language-bar">
                    <label class="form-label">{"翻訳元:"}</label>
                    <LanguageSelect
                        value={session.source_language()}
                        include_auto=true
                        onchange={on_source_language}
                    />
                    <button
                        class="icon-btn"
                        onclick={on_swap}
                        disabled={!session.can_swap()}
                        title={if is_translating {
                            "翻訳中は入れ替えできません"
                        } else if session.can_swap() {
                            "言語を入れ替え"
                        } else {
                            "自動検出時は入れ替えできません"
                        }}
                    >
                        {"⇄"}
                    </button>
                    <label class="form-label">{"翻訳先:"}</label>
                    <LanguageSelect value={session.target_language()} onchange={on_target_language} />
                </div>

                <div class="translate-grid">
                    <div class="card text-panel">
                        <div class="panel-header">
                            <h3>{"原文"}</h3>
                            <div class="panel-actions">
                                <button class="icon-btn" onclick={on_clear} disabled={source_text.is_empty()} title="クリア">
                                    <svg viewBox="0 0 24 24"><path d={CLEAR_ICON}></path></svg>
                                </button>
                                <button class="icon-btn" onclick={copy_callback(source_text.clone())} disabled={source_text.is_empty()} title="コピー">
                                    <svg viewBox="0 0 24 24"><path d={COPY_ICON}></path></svg>
                                </button>
                            </div>
                        </div>
                        <textarea
                            class="text-input"
                            value={source_text.clone()}
                            oninput={on_source_input}
                            onkeydown={on_source_keydown}
                            placeholder="翻訳したいテキストを入力してください..."
                        />
                        <span class="badge badge-secondary">
                            {format!("{} 文字", session.source_char_count())}
                        </span>
                    </div>

                    <div class="card text-panel">
                        <div class="panel-header">
                            <h3>{"翻訳結果"}</h3>
                            <div class="panel-actions">
                                <button class="icon-btn" onclick={copy_callback(target_text.clone())} disabled={target_text.is_empty()} title="コピー">
                                    <svg viewBox="0 0 24 24"><path d={COPY_ICON}></path></svg>
                                </button>
                            </div>
                        </div>
                        <textarea
                            class="text-output"
                            value={target_text}
                            readonly=true
                            placeholder={if is_translating { "翻訳中..." } else { "翻訳結果がここに表示されます" }}
                        />
                        if is_translating {
                            <div class="translating-indicator">{"翻訳中..."}</div>
                        }
                    </div>
                </div>

                <div class="translate-actions">
                    <button
                        class="btn btn-primary btn-lg"
                        onclick={on_translate}
                        disabled={!session.can_translate()}
                    >
                        { if is_translating { "翻訳中..." } else { "翻訳する" } }
                    </button>
                </div>
            </div>
        </div>
    }
}
