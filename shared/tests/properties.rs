//! Property tests for the settings laws.

use proptest::prelude::*;
use shared::models::{
    DefaultLanguages, LanguageCode, ModelConfig, ModelKey, ModelParameters, ProviderConfig,
    SettingsPatch, Theme, UserSettings,
};
use shared::navigation::{Attempt, NavigationGuard};
use shared::session::TranslationSession;
use shared::settings::{
    MemoryStorage, SettingsStore, export_blob, import_blob, resolve_available_models,
};

fn arb_language() -> impl Strategy<Value = LanguageCode> {
    prop::sample::select(LanguageCode::ALL.to_vec())
}

fn arb_target() -> impl Strategy<Value = LanguageCode> {
    prop::sample::select(LanguageCode::targets().collect::<Vec<_>>())
}

fn arb_theme() -> impl Strategy<Value = Theme> {
    prop::sample::select(Theme::ALL.to_vec())
}

fn arb_parameters() -> impl Strategy<Value = Option<ModelParameters>> {
    prop::option::of((0u8..=20, 1u32..=32_000, 0u8..=10).prop_map(|(t, max, p)| {
        ModelParameters {
            temperature: f32::from(t) / 10.0,
            max_tokens: max,
            top_p: f32::from(p) / 10.0,
        }
    }))
}

fn arb_model(id: String) -> impl Strategy<Value = ModelConfig> {
    (
        "[A-Za-z0-9 .-]{0,12}",
        any::<bool>(),
        prop::option::of(any::<bool>()),
        arb_parameters(),
    )
        .prop_map(move |(name, enabled, is_default, parameters)| ModelConfig {
            id: id.clone(),
            name,
            enabled,
            is_default,
            parameters,
        })
}

fn arb_provider(id: String) -> impl Strategy<Value = ProviderConfig> {
    let models = prop::collection::btree_set("[a-z0-9:-]{1,8}", 0..4).prop_flat_map(|ids| {
        ids.into_iter().map(arb_model).collect::<Vec<_>>()
    });
    (
        "[A-Za-z ]{0,12}",
        "[ -~]{0,16}",
        prop::option::of("https://[a-z]{1,8}\\.test/v1"),
        any::<bool>(),
        models,
    )
        .prop_map(move |(name, api_key, endpoint, enabled, models)| ProviderConfig {
            id: id.clone(),
            name,
            api_key,
            endpoint,
            enabled,
            models,
        })
}

fn arb_settings() -> impl Strategy<Value = UserSettings> {
    let providers = prop::collection::btree_set("[a-z]{1,6}", 0..4)
        .prop_flat_map(|ids| ids.into_iter().map(arb_provider).collect::<Vec<_>>());
    (
        providers,
        arb_language(),
        arb_target(),
        arb_theme(),
        any::<bool>(),
        any::<bool>(),
        any::<prop::sample::Index>(),
    )
        .prop_map(
            |(providers, source, target, theme, auto_save, notifications, pick)| {
                let keys: Vec<ModelKey> = providers
                    .iter()
                    .flat_map(|p| p.models.iter().map(|m| ModelKey::new(&p.id, &m.id)))
                    .collect();
                let default_model = (!keys.is_empty()).then(|| pick.get(&keys).clone());
                UserSettings {
                    providers,
                    default_model,
                    default_languages: DefaultLanguages { source, target },
                    theme,
                    auto_save,
                    notifications,
                }
            },
        )
}

fn store_with(settings: UserSettings) -> SettingsStore<MemoryStorage> {
    let mut store = SettingsStore::open(MemoryStorage::new());
    store.import_blob(&export_blob(&settings).unwrap()).unwrap();
    store.save().unwrap();
    store
}

proptest! {
    #[test]
    fn export_import_round_trip(settings in arb_settings()) {
        let blob = export_blob(&settings).unwrap();
        prop_assert_eq!(import_blob(&blob).unwrap(), settings);
    }

    #[test]
    fn available_models_are_always_usable(settings in arb_settings()) {
        for model in resolve_available_models(&settings) {
            let provider = settings.provider(&model.provider_id).unwrap();
            prop_assert!(provider.enabled);
            prop_assert!(!provider.api_key.is_empty());
            prop_assert!(provider.model(&model.key.model_id).unwrap().enabled);
            prop_assert_eq!(&model.key.provider_id, &provider.id);
        }
    }

    #[test]
    fn dirty_flag_laws(settings in arb_settings(), theme in arb_theme(), notify in any::<bool>()) {
        let mut store = store_with(settings.clone());
        prop_assert!(!store.is_dirty());

        store.update(SettingsPatch::theme(theme));
        store.update(SettingsPatch::notifications(notify));
        prop_assert!(store.is_dirty());

        store.discard();
        prop_assert!(!store.is_dirty());
        prop_assert_eq!(store.current(), &settings);

        store.update(SettingsPatch::theme(theme));
        store.save().unwrap();
        prop_assert!(!store.is_dirty());
        prop_assert_eq!(store.last_saved(), store.current());
    }

    #[test]
    fn clean_navigation_never_prompts(settings in arb_settings(), dest in 0u8..5) {
        let store = store_with(settings);
        let mut guard = NavigationGuard::new();
        prop_assert_eq!(guard.attempt_from(dest, &store), Attempt::Proceed(dest));
        prop_assert!(!guard.is_pending());
    }

    #[test]
    fn swap_is_an_involution(
        settings in arb_settings(),
        source in arb_language(),
        text in ".{0,24}",
    ) {
        let mut session = TranslationSession::initialize(&settings);
        session.set_source_language(source);
        session.set_source_text(text);
        let before = session.clone();

        session.swap_languages();
        if source.is_auto() {
            prop_assert_eq!(&session, &before);
        }
        session.swap_languages();
        prop_assert_eq!(session, before);
    }
}
