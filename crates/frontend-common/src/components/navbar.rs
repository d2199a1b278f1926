//! Top navigation bar

use super::{ButtonAction, ButtonContent, Logo, PrimaryButton};
use crate::auth::{AuthAction, use_auth};
use crate::hooks::use_user_name;
use yew::prelude::*;
use yew_router::prelude::use_location;

/// Pages that already are the login flow get no login/logout button
const PATHS_WITHOUT_BUTTON: [&str; 2] = ["/signin", "/signup"];

pub fn should_show_button(path: &str) -> bool {
    !PATHS_WITHOUT_BUTTON.contains(&path)
}

/// The button waits until the stored session has been restored
pub fn button_visible(path: Option<&str>, is_loading: bool) -> bool {
    !is_loading && path.is_none_or(should_show_button)
}

/// Logout when authenticated, a link to the sign-in page otherwise
pub fn session_button(
    is_authenticated: bool,
    on_logout: Callback<MouseEvent>,
) -> (ButtonContent, ButtonAction) {
    if is_authenticated {
        (ButtonContent::text("Logout"), ButtonAction::Click(on_logout))
    } else {
        (
            ButtonContent::text("Login"),
            ButtonAction::Link("/signin".into()),
        )
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let auth = use_auth();
    let user_name = use_user_name(auth.token.clone());
    let path = use_location().map(|location| location.path().to_string());

    let on_logout = {
        let auth = auth.clone();
        Callback::from(move |_: MouseEvent| {
            auth.dispatch(AuthAction::Logout);
        })
    };

    let is_authenticated = auth.is_authenticated();
    let show_button = button_visible(path.as_deref(), auth.is_loading);
    let (content, action) = session_button(is_authenticated, on_logout);

    html! {
        <div class="bg-white shadow-md">
            <header class="container mx-auto">
                <nav class="flex items-center justify-between py-4 px-8">
                    <Logo />
                    <div class="flex flex-row items-center justify-center gap-5">
                        if is_authenticated {
                            <p class="text-gray-700 text-sm font-semibold leading-tight">{user_name}</p>
                        }
                        if show_button {
                            <PrimaryButton {content} {action} />
                        }
                    </div>
                </nav>
            </header>
        </div>
    }
}
