use shared::catalog::language_name;
use shared::models::LanguageCode;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LanguageSelectProps {
    pub value: LanguageCode,
    /// Offer the auto-detect entry. Leave off for target selectors.
    #[prop_or_default]
    pub include_auto: bool,
    pub onchange: Callback<LanguageCode>,
}

#[function_component(LanguageSelect)]
pub fn language_select(props: &LanguageSelectProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            if let Some(code) = LanguageCode::from_code(&select.value()) {
                onchange.emit(code);
            }
        })
    };

    html! {
        <select class="form-select" {onchange}>
            { for LanguageCode::ALL
                .into_iter()
                .filter(|lang| props.include_auto || !lang.is_auto())
                .map(|lang| html! {
                    <option value={lang.code()} selected={lang == props.value}>
                        {language_name(lang)}
                    </option>
                })
            }
        </select>
    }
}
