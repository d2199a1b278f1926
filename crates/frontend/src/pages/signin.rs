//! Sign-in form

use super::form::{Field, FormError, setter, validate_login};
use crate::app::Route;
use catalog_frontend_common::auth::{AuthAction, use_auth};
use catalog_frontend_common::services::AuthApiService;
use catalog_http::types::LoginData;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(SignInPage)]
pub fn sign_in_page() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();

    let identifier = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let onsubmit = {
        let auth = auth.clone();
        let identifier = identifier.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let data = LoginData {
                identifier: identifier.trim().to_string(),
                password: (*password).clone(),
            };
            if let Err(message) = validate_login(&data) {
                error.set(Some(message.to_string()));
                return;
            }

            let auth = auth.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            submitting.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                match AuthApiService::new().login(data).await {
                    Ok(response) => {
                        error.set(None);
                        auth.dispatch(AuthAction::Login(response.jwt));
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Home);
                        }
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
                submitting.set(false);
            });
        })
    };

    if auth.is_authenticated() {
        return html! { <Redirect<Route> to={Route::Home} /> };
    }

    html! {
        <div class="mx-auto max-w-md">
            <h1 class="text-2xl font-bold text-gray-900 mb-6 text-center">{"Sign in"}</h1>
            <form class="rounded bg-white p-6 shadow-md" {onsubmit}>
                <FormError message={(*error).clone()} />
                <Field id="identifier" label="Username or email" value={(*identifier).clone()} on_change={setter(&identifier)} />
                <Field id="password" label="Password" input_type="password" value={(*password).clone()} on_change={setter(&password)} />
                <button
                    type="submit"
                    class="w-full rounded bg-primary hover:bg-primary-hover py-3 font-bold uppercase text-white disabled:opacity-50"
                    disabled={*submitting}
                >
                    {if *submitting { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
            <p class="mt-4 text-center text-sm text-gray-600">
                {"No account yet? "}
                <Link<Route> to={Route::SignUp} classes="text-primary hover:underline">{"Sign up"}</Link<Route>>
            </p>
        </div>
    }
}
