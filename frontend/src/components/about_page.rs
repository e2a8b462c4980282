use super::markdown::{Markdown, outline};
use crate::browser;
use yew::prelude::*;

const ABOUT: &str = r#"# Ringua

Ringua is an AI translation workspace. Pick a model, type or paste text, and translate between eight languages.

## Features

- Source language auto-detection
- Several AI providers (OpenAI, Anthropic Claude, Google Gemini) with per-model switches
- Translation history with search, favorites and sorting
- Settings export and import as `ringua-settings.json`
- Light, dark and system themes

## Keyboard

| Shortcut | Action |
| --- | --- |
| `Ctrl+Enter` | Translate |

## Privacy

API keys are stored in this browser's local storage only. Translations in this build are produced by a local mock engine, so no text leaves the page.
"#;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    let loaded_at = use_state(browser::now);
    let toc = use_memo((), |_| outline(ABOUT));

    html! {
        <div class="page about-page">
            <nav class="about-toc">
                <ul>
                    { for toc.iter().filter(|(level, ..)| *level == 2).map(|(_, id, text)| html! {
                        <li key={id.clone()}><a href={format!("#{}", id)}>{text.clone()}</a></li>
                    })}
                </ul>
            </nav>
            <article class="card">
                <Markdown content={ABOUT} />
                <p class="form-hint">
                    {format!("ページ読み込み: {}", loaded_at.format("%Y/%m/%d %H:%M:%S UTC"))}
                </p>
            </article>
        </div>
    }
}
