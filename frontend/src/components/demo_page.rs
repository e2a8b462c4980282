use yew::prelude::*;

fn greet(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        return "Please enter a name.".to_string();
    }
    format!("Hello, {}! You've been greeted from Rust!", name)
}

#[function_component(DemoPage)]
pub fn demo_page() -> Html {
    let name = use_state(String::new);
    let message = use_state(|| None::<String>);

    let on_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_submit = {
        let name = name.clone();
        let message = message.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            message.set(Some(greet(&name)));
        })
    };

    html! {
        <div class="page demo-page">
            <h1 class="page-title">{"Demo"}</h1>
            <form class="demo-form" onsubmit={on_submit}>
                <input
                    class="form-input"
                    value={(*name).clone()}
                    oninput={on_input}
                    placeholder="Enter a name..."
                />
                <button type="submit" class="btn btn-primary">{"Greet"}</button>
            </form>
            if let Some(message) = &*message {
                <p class="demo-message">{message}</p>
            }
        </div>
    }
}
