use yew::prelude::*;

#[function_component(Logo)]
pub fn logo() -> Html {
    html! {
        <div>
            <a href="/">
                <span class="sr-only">{"Course App"}</span>
                <img src="/logo.svg" alt="Logo" width="111" height="48" />
            </a>
        </div>
    }
}
