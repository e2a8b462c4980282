mod browser;
mod components;
mod storage;
mod store;
mod translator;

use components::about_page::AboutPage;
use components::confirm_dialog::UnsavedChangesDialog;
use components::demo_page::DemoPage;
use components::history_page::HistoryPage;
use components::notice_bar::NoticeBar;
use components::settings_page::SettingsPage;
use components::sidebar::Sidebar;
use components::translate_page::TranslatePage;
use shared::session::Translator;
use store::{Action, Route, State, StoreContext};
use translator::DelayedMockTranslator;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    let store = use_reducer(State::default);

    use_effect_with(store.settings.current().theme, |theme| {
        browser::apply_theme(*theme);
    });

    {
        let dispatcher = store.dispatcher();
        use_effect_with(store.session.pending_job().cloned(), move |job| {
            if let Some(job) = job.clone() {
                yew::platform::spawn_local(async move {
                    let result = DelayedMockTranslator::default().translate(&job).await;
                    dispatcher.dispatch(Action::TranslationFinished {
                        ticket: job.ticket,
                        result,
                        finished_at: browser::now(),
                    });
                });
            }
        });
    }

    let page = match store.route {
        Route::Translate => html! { <TranslatePage /> },
        Route::History => html! { <HistoryPage /> },
        Route::Settings => html! { <SettingsPage /> },
        Route::About => html! { <AboutPage /> },
        Route::Demo => html! { <DemoPage /> },
    };

    html! {
        <ContextProvider<StoreContext> context={store.clone()}>
            <div class="app-container">
                <div class="sidebar-container">
                    <Sidebar />
                </div>
                <main class="main-stage">
                    <NoticeBar />
                    {page}
                </main>

                if store.guard.is_pending() {
                    <UnsavedChangesDialog />
                }
            </div>
        </ContextProvider<StoreContext>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
