use crate::storage::LocalStorageBackend;
use chrono::{DateTime, Utc};
use shared::TranslateError;
use shared::history::HistoryStore;
use shared::models::*;
use shared::navigation::{Attempt, NavigationGuard, Resolution};
use shared::session::TranslationSession;
use shared::settings::SettingsStore;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Translate,
    History,
    Settings,
    About,
    Demo,
}

impl Route {
    pub fn label(self) -> &'static str {
        match self {
            Route::Translate => "翻訳",
            Route::History => "履歴",
            Route::Settings => "設定",
            Route::About => "About",
            Route::Demo => "Demo",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    Info(String),
    Error(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct State {
    pub route: Route,
    pub settings: SettingsStore<LocalStorageBackend>,
    pub guard: NavigationGuard<Route>,
    pub session: TranslationSession,
    pub history: HistoryStore,
    pub notice: Option<Notice>,
}

impl Default for State {
    fn default() -> Self {
        let settings = SettingsStore::open(LocalStorageBackend::default());
        let session = TranslationSession::initialize(settings.current());
        Self {
            route: Route::Translate,
            settings,
            guard: NavigationGuard::new(),
            session,
            history: HistoryStore::with_samples(),
            notice: None,
        }
    }
}

impl State {
    fn info(&mut self, message: impl Into<String>) {
        // Suppressed when notifications are off
        if self.settings.current().notifications {
            self.notice = Some(Notice::Info(message.into()));
        }
    }

    fn error(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::Error(message.into()));
    }

    fn settings_changed(&mut self) {
        let current = self.settings.current().clone();
        self.session.refresh_models(&current);
    }
}

pub enum Action {
    Navigate(Route),
    ResolveNavigation(Resolution),
    UpdateSettings(SettingsPatch),
    SetProviderApiKey { provider_id: String, key: String },
    SetProviderEnabled { provider_id: String, enabled: bool },
    SetProviderEndpoint { provider_id: String, endpoint: String },
    SetModelEnabled { key: ModelKey, enabled: bool },
    SetDefaultModel(ModelKey),
    SaveSettings,
    DiscardSettings,
    ImportSettings(Vec<u8>),
    SetSourceText(String),
    ClearSource,
    SetSourceLanguage(LanguageCode),
    SetTargetLanguage(LanguageCode),
    SelectModel(ModelKey),
    SwapLanguages,
    Translate,
    TranslationFinished {
        ticket: u64,
        result: Result<String, TranslateError>,
        finished_at: DateTime<Utc>,
    },
    ToggleFavorite(String),
    DeleteRecord(String),
    ShowNotice(Notice),
    DismissNotice,
}

impl Reducible for State {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            Action::Navigate(route) => {
                // Only leaving the settings page is guarded.
                if next.route == Route::Settings && route != Route::Settings {
                    if let Attempt::Proceed(route) = next.guard.attempt_from(route, &next.settings) {
                        next.route = route;
                    }
                } else {
                    next.route = route;
                }
            }
            Action::ResolveNavigation(resolution) => {
                match next.guard.resolve(resolution, &mut next.settings) {
                    Ok(Some(route)) => {
                        next.route = route;
                        if resolution == Resolution::SaveAndGo {
                            next.info("設定を保存しました");
                        }
                    }
                    Ok(None) => {}
                    Err(e) => next.error(format!("設定を保存できませんでした: {}", e)),
                }
                next.settings_changed();
            }
            Action::UpdateSettings(patch) => {
                next.settings.update(patch);
                next.settings_changed();
            }
            Action::SetProviderApiKey { provider_id, key } => {
                next.settings.set_provider_api_key(&provider_id, &key);
                next.settings_changed();
            }
            Action::SetProviderEnabled {
                provider_id,
                enabled,
            } => {
                next.settings.set_provider_enabled(&provider_id, enabled);
                next.settings_changed();
            }
            Action::SetProviderEndpoint {
                provider_id,
                endpoint,
            } => {
                next.settings.set_provider_endpoint(&provider_id, &endpoint);
            }
            Action::SetModelEnabled { key, enabled } => {
                next.settings
                    .set_model_enabled(&key.provider_id, &key.model_id, enabled);
                next.settings_changed();
            }
            Action::SetDefaultModel(key) => {
                next.settings
                    .set_default_model(&key.provider_id, &key.model_id);
                next.settings_changed();
            }
            Action::SaveSettings => match next.settings.save() {
                Ok(()) => next.info("設定を保存しました"),
                Err(e) => next.error(format!("設定を保存できませんでした: {}", e)),
            },
            Action::DiscardSettings => {
                next.settings.discard();
                next.settings_changed();
            }
            Action::ImportSettings(bytes) => match next.settings.import_blob(&bytes) {
                Ok(_) => {
                    next.settings_changed();
                    next.info("設定をインポートしました。保存すると反映されます");
                }
                Err(e) => next.error(format!("設定をインポートできませんでした: {}", e)),
            },
            Action::SetSourceText(text) => {
                next.session.set_source_text(text);
            }
            Action::ClearSource => {
                next.session.clear_source();
            }
            Action::SetSourceLanguage(language) => {
                next.session.set_source_language(language);
            }
            Action::SetTargetLanguage(language) => {
                next.session.set_target_language(language);
            }
            Action::SelectModel(key) => {
                next.session.select_model(&key);
            }
            Action::SwapLanguages => {
                next.session.swap_languages();
            }
            Action::Translate => {
                // The job is picked up by the effect in `App`.
                next.session.begin_translation();
            }
            Action::TranslationFinished {
                ticket,
                result,
                finished_at,
            } => match next.session.finish_translation(ticket, result) {
                Ok(Some(done)) => {
                    next.history.record(&done, finished_at);
                }
                Ok(None) => {}
                Err(e) => next.error(format!("翻訳に失敗しました: {}", e)),
            },
            Action::ToggleFavorite(id) => {
                next.history.toggle_favorite(&id);
            }
            Action::DeleteRecord(id) => {
                next.history.delete(&id);
            }
            Action::ShowNotice(notice) => {
                next.notice = Some(notice);
            }
            Action::DismissNotice => {
                next.notice = None;
            }
        }

        next.into()
    }
}

pub type StoreContext = UseReducerHandle<State>;
