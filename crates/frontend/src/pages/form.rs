//! Shared pieces of the sign-in and sign-up forms

use catalog_http::types::{LoginData, RegistrationData};
use web_sys::HtmlInputElement;
use yew::prelude::*;

const MISSING_FIELDS: &str = "Please fill in all fields.";

pub fn validate_login(data: &LoginData) -> Result<(), &'static str> {
    if data.identifier.trim().is_empty() || data.password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(())
}

pub fn validate_registration(data: &RegistrationData) -> Result<(), &'static str> {
    if data.username.trim().is_empty() || data.email.trim().is_empty() || data.password.is_empty()
    {
        return Err(MISSING_FIELDS);
    }
    if !data.email.contains('@') {
        return Err("Please enter a valid email address.");
    }
    Ok(())
}

#[derive(Properties, Clone, PartialEq)]
pub struct FieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    pub value: String,
    pub on_change: Callback<String>,
}

#[function_component(Field)]
pub fn field(props: &FieldProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <div class="mb-4">
            <label for={props.id.clone()} class="block text-sm font-medium text-gray-700 mb-2">
                {props.label.to_string()}
            </label>
            <input
                id={props.id.clone()}
                type={props.input_type.clone()}
                class="w-full px-3 py-2 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-primary"
                value={props.value.clone()}
                {oninput}
            />
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct FormErrorProps {
    pub message: Option<String>,
}

#[function_component(FormError)]
pub fn form_error(props: &FormErrorProps) -> Html {
    match &props.message {
        Some(message) => html! {
            <p class="mb-4 rounded border border-red-200 bg-red-50 px-3 py-2 text-sm text-red-700">
                {message.clone()}
            </p>
        },
        None => html! {},
    }
}

/// Callback storing a field's new value in `state`
pub fn setter(state: &UseStateHandle<String>) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |value: String| state.set(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(username: &str, email: &str, password: &str) -> RegistrationData {
        RegistrationData {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn test_validate_login() {
        let mut data = LoginData {
            identifier: "ada".into(),
            password: "secret".into(),
        };
        assert!(validate_login(&data).is_ok());

        data.identifier = "  ".into();
        assert_eq!(validate_login(&data), Err(MISSING_FIELDS));
    }

    #[test]
    fn test_validate_registration() {
        assert!(validate_registration(&registration("ada", "ada@example.com", "pw")).is_ok());
        assert_eq!(
            validate_registration(&registration("ada", "", "pw")),
            Err(MISSING_FIELDS)
        );
        assert!(validate_registration(&registration("ada", "ada.example.com", "pw")).is_err());
    }
}
