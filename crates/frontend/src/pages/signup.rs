//! Registration form

use super::form::{Field, FormError, setter, validate_registration};
use crate::app::Route;
use catalog_frontend_common::auth::{AuthAction, use_auth};
use catalog_frontend_common::services::AuthApiService;
use catalog_http::types::RegistrationData;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(SignUpPage)]
pub fn sign_up_page() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();

    let username = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let onsubmit = {
        let auth = auth.clone();
        let username = username.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let data = RegistrationData {
                username: username.trim().to_string(),
                email: email.trim().to_string(),
                password: (*password).clone(),
            };
            if let Err(message) = validate_registration(&data) {
                error.set(Some(message.to_string()));
                return;
            }

            let auth = auth.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            submitting.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                // A fresh account comes back with its session token
                match AuthApiService::new().register(data).await {
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
            <h1 class="text-2xl font-bold text-gray-900 mb-6 text-center">{"Create an account"}</h1>
            <form class="rounded bg-white p-6 shadow-md" {onsubmit}>
                <FormError message={(*error).clone()} />
                <Field id="username" label="Username" value={(*username).clone()} on_change={setter(&username)} />
                <Field id="email" label="Email" input_type="email" value={(*email).clone()} on_change={setter(&email)} />
                <Field id="password" label="Password" input_type="password" value={(*password).clone()} on_change={setter(&password)} />
                <button
                    type="submit"
                    class="w-full rounded bg-primary hover:bg-primary-hover py-3 font-bold uppercase text-white disabled:opacity-50"
                    disabled={*submitting}
                >
                    {if *submitting { "Creating account..." } else { "Sign up" }}
                </button>
            </form>
            <p class="mt-4 text-center text-sm text-gray-600">
                {"Already registered? "}
                <Link<Route> to={Route::SignIn} classes="text-primary hover:underline">{"Sign in"}</Link<Route>>
            </p>
        </div>
    }
}
