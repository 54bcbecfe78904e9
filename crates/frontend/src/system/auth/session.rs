//! Auth session context.
//!
//! One token signal for the whole app: the route gate reads it, the login
//! page writes it, and the generic screens call `expire()` when the backend
//! answers 401/419 so the whole shell falls back to the login page instead
//! of failing silently per screen.

use super::storage;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct Session {
    token: RwSignal<Option<String>>,
}

impl Session {
    /// Reactive: flips the auth gate when the token appears or goes away.
    pub fn is_authenticated(&self) -> bool {
        self.token.get().is_some()
    }

    pub fn sign_in(&self, token: String) {
        storage::save_token(&token);
        self.token.set(Some(token));
    }

    /// Drop credentials, both persisted and in memory.
    pub fn expire(&self) {
        storage::clear_token();
        self.token.set(None);
    }
}

#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    // Restore a previously persisted token on startup.
    let session = Session {
        token: RwSignal::new(storage::auth_token()),
    };
    provide_context(session);

    children()
}

pub fn use_session() -> Session {
    use_context::<Session>().expect("SessionProvider not found in component tree")
}
