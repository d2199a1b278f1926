//! Display name of the logged-in user

use crate::services::AuthApiService;
use yew::prelude::*;

/// Token of the most recently started lookup.
///
/// Replies for any other token arrived late and are dropped.
#[derive(Debug, Default)]
struct LatestLookup {
    token: Option<String>,
}

impl LatestLookup {
    fn start(&mut self, token: Option<String>) {
        self.token = token;
    }

    fn is_current(&self, token: Option<&str>) -> bool {
        self.token.as_deref() == token
    }
}

/// Resolve the display name for `token`, refetching whenever it changes.
///
/// Empty until the first lookup finishes; afterwards the user's name or the
/// fallback name.
#[hook]
pub fn use_user_name(token: Option<String>) -> String {
    let name = use_state(String::new);
    let latest = use_mut_ref(LatestLookup::default);

    {
        let name = name.clone();
        use_effect_with(token, move |token| {
            latest.borrow_mut().start(token.clone());

            if token.is_some() {
                let token = token.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let resolved = AuthApiService::new().current_user_name(token.clone()).await;
                    if latest.borrow().is_current(token.as_deref()) {
                        name.set(resolved);
                    } else {
                        tracing::debug!("Dropping display name for a replaced session");
                    }
                });
            } else {
                name.set(String::new());
            }
        });
    }

    (*name).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_lookup_is_current() {
        let mut latest = LatestLookup::default();
        latest.start(Some("old".into()));
        latest.start(Some("new".into()));

        assert!(!latest.is_current(Some("old")));
        assert!(latest.is_current(Some("new")));
    }

    #[test]
    fn test_logout_invalidates_pending_lookup() {
        let mut latest = LatestLookup::default();
        latest.start(Some("abc".into()));
        latest.start(None);

        assert!(!latest.is_current(Some("abc")));
    }
}
