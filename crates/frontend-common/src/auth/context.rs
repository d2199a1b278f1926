//! Authentication context and provider

use super::storage::LocalTokenStore;
use catalog_core::{Error, Session, SessionAction};
use std::ops::Deref;
use std::rc::Rc;
use yew::prelude::*;

/// Authentication context actions
pub type AuthAction = SessionAction;

/// Authentication context data
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionContextData {
    pub session: Session,
}

impl Deref for SessionContextData {
    type Target = Session;

    fn deref(&self) -> &Self::Target {
        &self.session
    }
}

/// Authentication context
pub type AuthContext = UseReducerHandle<SessionContextData>;

impl Reducible for SessionContextData {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Self {
            session: self.session.apply(action, &LocalTokenStore),
        })
    }
}

/// Auth provider props
#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

/// Auth provider component
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let auth_state = use_reducer(SessionContextData::default);

    // Load the token from localStorage on mount
    {
        let auth_state = auth_state.clone();
        use_effect_with((), move |_| {
            auth_state.dispatch(AuthAction::Restore);
        });
    }

    html! {
        <ContextProvider<AuthContext> context={auth_state}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// Hook to use auth context, failing when no [`AuthProvider`] is in scope
#[hook]
pub fn use_try_auth() -> Result<AuthContext, Error> {
    use_context::<AuthContext>()
        .ok_or_else(|| Error::configuration("use_auth must be used within an AuthProvider"))
}

/// Hook to use auth context.
///
/// # Panics
///
/// When the component is not wrapped in an [`AuthProvider`].
#[hook]
pub fn use_auth() -> AuthContext {
    use_try_auth().unwrap_or_else(|err| panic!("{err}"))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use yew::LocalServerRenderer;

    #[function_component(SessionStatus)]
    fn session_status() -> Html {
        match use_try_auth() {
            Ok(auth) => html! { {format!("in scope, loading={}", auth.is_loading)} },
            Err(Error::Configuration(message)) => html! { {format!("configuration: {message}")} },
            Err(other) => html! { {format!("unexpected: {other}")} },
        }
    }

    #[function_component(ScopedSessionStatus)]
    fn scoped_session_status() -> Html {
        html! {
            <AuthProvider>
                <SessionStatus />
            </AuthProvider>
        }
    }

    #[tokio::test]
    async fn test_auth_outside_provider_is_configuration_error() {
        let rendered = LocalServerRenderer::<SessionStatus>::new()
            .hydratable(false)
            .render()
            .await;
        assert_eq!(
            rendered,
            "configuration: use_auth must be used within an AuthProvider"
        );
    }

    #[tokio::test]
    async fn test_auth_inside_provider_is_available() {
        let rendered = LocalServerRenderer::<ScopedSessionStatus>::new()
            .hydratable(false)
            .render()
            .await;
        // Restore runs in an effect, so the first render is still loading
        assert_eq!(rendered, "in scope, loading=true");
    }
}
