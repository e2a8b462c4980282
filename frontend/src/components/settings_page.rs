use super::language_select::LanguageSelect;
use crate::browser;
use crate::store::{Action, Notice, StoreContext};
use shared::models::{
    DefaultLanguages, LanguageCode, ModelKey, ProviderConfig, SettingsPatch, Theme,
};
use shared::settings::EXPORT_FILE_NAME;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct ProviderCardProps {
    provider: ProviderConfig,
    default_model: Option<ModelKey>,
}

#[function_component(ProviderCard)]
fn provider_card(props: &ProviderCardProps) -> Html {
    let store = use_context::<StoreContext>().expect("Store context not found");
    let provider_id = props.provider.id.clone();

    let on_enabled = {
        let store = store.clone();
        let provider_id = provider_id.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            store.dispatch(Action::SetProviderEnabled {
                provider_id: provider_id.clone(),
                enabled: input.checked(),
            });
        })
    };

    let on_api_key_input = {
        let store = store.clone();
        let provider_id = provider_id.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            store.dispatch(Action::SetProviderApiKey {
                provider_id: provider_id.clone(),
                key: input.value(),
            });
        })
    };

    let on_endpoint_input = {
        let store = store.clone();
        let provider_id = provider_id.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            store.dispatch(Action::SetProviderEndpoint {
                provider_id: provider_id.clone(),
                endpoint: input.value(),
            });
        })
    };

    let provider = &props.provider;
    let needs_key = provider.enabled && provider.api_key.is_empty();

    html! {
        <div class={classes!("card", "provider-card", (!provider.enabled).then_some("disabled"))}>
            <div class="provider-header">
                <h3>{&provider.name}</h3>
                <label class="switch">
                    <input type="checkbox" checked={provider.enabled} onchange={on_enabled} />
                    <span class="slider round"></span>
                </label>
            </div>

            <div class="form-group">
                <label class="form-label">{"API Key"}</label>
                <input type="password" class="form-input"
                    value={provider.api_key.clone()}
                    oninput={on_api_key_input}
                    placeholder="sk-..."
                />
                if needs_key {
                    <div class="form-hint">{"APIキーが未設定のため、このプロバイダーのモデルは選択できません"}</div>
                }
            </div>

            <div class="form-group">
                <label class="form-label">{"Endpoint"}</label>
                <input type="text" class="form-input"
                    value={provider.endpoint.clone().unwrap_or_default()}
                    oninput={on_endpoint_input}
                    placeholder="既定のエンドポイント"
                />
            </div>

            <div class="model-list">
                { for provider.models.iter().map(|model| {
                    let key = ModelKey::new(&provider.id, &model.id);
                    let is_default = props.default_model.as_ref() == Some(&key);

                    let on_model_enabled = {
                        let store = store.clone();
                        let key = key.clone();
                        Callback::from(move |e: Event| {
                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                            store.dispatch(Action::SetModelEnabled {
                                key: key.clone(),
                                enabled: input.checked(),
                            });
                        })
                    };

                    let on_make_default = {
                        let store = store.clone();
                        let key = key.clone();
                        Callback::from(move |_| store.dispatch(Action::SetDefaultModel(key.clone())))
                    };

                    html! {
                        <div class="model-item" key={model.id.clone()}>
                            <label class="switch-label">
                                <input type="checkbox" checked={model.enabled} onchange={on_model_enabled} />
                                {&model.name}
                            </label>
                            if is_default {
                                <span class="badge badge-primary">{"デフォルト"}</span>
                            } else {
                                <button class="btn btn-secondary btn-sm" onclick={on_make_default}>
                                    {"デフォルトにする"}
                                </button>
                            }
                        </div>
                    }
                })}
            </div>
        </div>
    }
}

#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let store = use_context::<StoreContext>().expect("Store context not found");
    let settings = store.settings.current().clone();
    let is_dirty = store.settings.is_dirty();

    let on_save = {
        let store = store.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            store.dispatch(Action::SaveSettings);
        })
    };

    let on_discard = {
        let store = store.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            store.dispatch(Action::DiscardSettings);
        })
    };

    let on_export = {
        let store = store.clone();
        Callback::from(move |_| {
            let result = store
                .settings
                .export_blob()
                .map_err(|e| e.to_string())
                .and_then(|bytes| {
                    browser::download_json(EXPORT_FILE_NAME, &bytes)
                        .map_err(|e| format!("{:?}", e))
                });
            if let Err(e) = result {
                tracing::error!("Failed to export settings: {}", e);
                store.dispatch(Action::ShowNotice(Notice::Error(format!(
                    "設定をエクスポートできませんでした: {}",
                    e
                ))));
            }
        })
    };

    let on_import = {
        let store = store.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            if let Some(files) = input.files()
                && let Some(file) = files.get(0)
            {
                let store = store.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match browser::read_file(file).await {
                        Ok(bytes) => store.dispatch(Action::ImportSettings(bytes)),
                        Err(e) => {
                            tracing::error!("Failed to read settings file: {:?}", e);
                            store.dispatch(Action::ShowNotice(Notice::Error(
                                "ファイルを読み込めませんでした".to_string(),
                            )));
                        }
                    }
                });
            }
            // Allow importing the same file again
            input.set_value("");
        })
    };

    let on_source_language = {
        let store = store.clone();
        let languages = settings.default_languages;
        Callback::from(move |source: LanguageCode| {
            store.dispatch(Action::UpdateSettings(SettingsPatch::default_languages(
                DefaultLanguages { source, ..languages },
            )));
        })
    };

    let on_target_language = {
        let store = store.clone();
        let languages = settings.default_languages;
        Callback::from(move |target: LanguageCode| {
            store.dispatch(Action::UpdateSettings(SettingsPatch::default_languages(
                DefaultLanguages { target, ..languages },
            )));
        })
    };

    let on_theme_change = {
        let store = store.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            if let Some(theme) = Theme::from_str_opt(&select.value()) {
                store.dispatch(Action::UpdateSettings(SettingsPatch::theme(theme)));
            }
        })
    };

    let on_auto_save = {
        let store = store.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            store.dispatch(Action::UpdateSettings(SettingsPatch::auto_save(
                input.checked(),
            )));
        })
    };

    let on_notifications = {
        let store = store.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            store.dispatch(Action::UpdateSettings(SettingsPatch::notifications(
                input.checked(),
            )));
        })
    };

    html! {
        <div class="page settings-page">
            <div class="page-header">
                <div>
                    <h1 class="page-title">{"設定"}</h1>
                    <p class="page-subtitle">{"アプリケーションの設定を管理"}</p>
                </div>
                <div class="page-actions">
                    <label class="btn btn-secondary">
                        {"インポート"}
                        <input type="file" accept=".json,application/json" style="display: none;" onchange={on_import} />
                    </label>
                    <button class="btn btn-secondary" onclick={on_export}>{"エクスポート"}</button>
                    <button class="btn btn-primary" onclick={on_save} disabled={!is_dirty}>{"設定を保存"}</button>
                </div>
            </div>

            if is_dirty {
                <div class="alert alert-warning">
                    <span>{"未保存の変更があります。設定を保存してください。"}</span>
                    <button class="btn btn-secondary btn-sm" onclick={on_discard}>{"変更を破棄"}</button>
                </div>
            }

            <section class="settings-section">
                <h2 class="section-label">{"AIプロバイダー"}</h2>
                { for settings.providers.iter().map(|provider| html! {
                    <ProviderCard
                        key={provider.id.clone()}
                        provider={provider.clone()}
                        default_model={settings.default_model.clone()}
                    />
                })}
            </section>

            <section class="settings-section card">
                <h2 class="section-label">{"デフォルト言語"}</h2>
                <div class="form-grid-2">
                    <div class="form-group">
                        <label class="form-label">{"翻訳元"}</label>
                        <LanguageSelect
                            value={settings.default_languages.source}
                            include_auto=true
                            onchange={on_source_language}
                        />
                    </div>
                    <div class="form-group">
                        <label class="form-label">{"翻訳先"}</label>
                        <LanguageSelect
                            value={settings.default_languages.target}
                            onchange={on_target_language}
                        />
                    </div>
                </div>
            </section>

            <section class="settings-section card">
                <h2 class="section-label">{"一般"}</h2>
                <div class="form-group">
                    <label class="form-label">{"テーマ"}</label>
                    <select class="form-select" onchange={on_theme_change}>
                        <option value="light" selected={settings.theme == Theme::Light}>{"ライト"}</option>
                        <option value="dark" selected={settings.theme == Theme::Dark}>{"ダーク"}</option>
                        <option value="system" selected={settings.theme == Theme::System}>{"システム"}</option>
                    </select>
                </div>
                <label class="switch-label">
                    <input type="checkbox" checked={settings.auto_save} onchange={on_auto_save} />
                    {"自動保存"}
                </label>
                <label class="switch-label">
                    <input type="checkbox" checked={settings.notifications} onchange={on_notifications} />
                    {"通知"}
                </label>
            </section>
        </div>
    }
}
