//! Client-side session state: the auth token and the user identifier.
//!
//! A [`Session`] is built once at startup and handed to whoever needs it
//! (see [`crate::components::provide_session`]). Each field is a
//! [`Writable<String>`] seeded from persistent storage and mirrored back into
//! it on every change; the empty string stands for "no value".

use std::rc::Rc;

use drive_types::{handles, responses};
use leptos::ReadSignal;

use crate::environment::Environment;
use crate::persist::Bridge;
use crate::settings::Settings;
use crate::storage::{self, KeyValueStorage};
use crate::store::{Subscription, Writable};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Token,
    User,
}

struct Credential {
    store: Writable<String>,
    bridge: Option<Bridge>,
    _write_through: Option<Subscription>,
}

impl Credential {
    fn new(bridge: Option<Bridge>) -> Self {
        let store = Writable::new(bridge.as_ref().map(Bridge::seed).unwrap_or_default());
        let write_through = bridge.as_ref().map(|bridge| bridge.attach(&store));
        Self {
            store,
            bridge,
            _write_through: write_through,
        }
    }

    fn reset(&self) {
        self.store.set(String::new());
        if let Some(bridge) = &self.bridge {
            bridge.clear();
        }
    }
}

struct Inner {
    environment: Environment,
    token: Credential,
    user: Credential,
}

/// Shared handle on the session; clones refer to the same state.
#[derive(Clone)]
pub struct Session {
    inner: Rc<Inner>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("environment", &self.inner.environment)
            .field("authenticated", &self.is_authenticated())
            .field("user", &self.user().get())
            .finish()
    }
}

impl Session {
    /// Builds the session. When `environment` has no persistent storage the
    /// fields start empty, `storage` is never touched and nothing is
    /// persisted.
    pub fn new(
        environment: Environment,
        storage: Option<Rc<dyn KeyValueStorage>>,
        settings: &Settings,
    ) -> Self {
        let storage = storage.filter(|_| environment.has_storage());
        let bridge = |field| {
            storage
                .clone()
                .map(|storage| Bridge::new(storage, settings.key(field)))
        };
        let token = Credential::new(bridge(Field::Token));
        let user = Credential::new(bridge(Field::User));
        tracing::debug!(
            "session initialized ({:?}, authenticated: {})",
            environment,
            !token.store.with(|token| token.is_empty())
        );
        Self {
            inner: Rc::new(Inner {
                environment,
                token,
                user,
            }),
        }
    }

    /// Session for the current page, persisted in `localStorage` when running
    /// in a browser.
    pub fn from_browser(settings: &Settings) -> Self {
        let environment = Environment::detect();
        let storage = if environment.has_storage() {
            storage::local_storage()
        } else {
            None
        };
        Self::new(environment, storage, settings)
    }

    pub fn environment(&self) -> Environment {
        self.inner.environment
    }

    pub fn field(&self, field: Field) -> Writable<String> {
        match field {
            Field::Token => self.inner.token.store,
            Field::User => self.inner.user.store,
        }
    }

    pub fn token(&self) -> Writable<String> {
        self.field(Field::Token)
    }

    pub fn user(&self) -> Writable<String> {
        self.field(Field::User)
    }

    pub fn token_signal(&self) -> ReadSignal<String> {
        self.token().signal()
    }

    pub fn user_signal(&self) -> ReadSignal<String> {
        self.user().signal()
    }

    pub fn is_authenticated(&self) -> bool {
        !self.token().with(|token| token.is_empty())
    }

    pub fn current_user(&self) -> Option<handles::User> {
        Some(self.user().get())
            .filter(|email| !email.is_empty())
            .map(handles::User::new)
    }

    /// `Authorization` header value for API calls, if logged in.
    pub fn authorization(&self) -> Option<String> {
        self.is_authenticated().then(|| {
            responses::Login {
                access_token: self.token().get(),
                token_type: responses::TokenType::Bearer,
            }
            .authorization()
        })
    }

    /// Records a successful `POST /login`.
    pub fn login(&self, response: &responses::Login, user: &handles::User) {
        tracing::info!("logged in as {}", user);
        self.token().set(response.access_token.clone());
        self.user().set(user.email.clone());
    }

    /// Empties both fields and deletes their persisted slots.
    pub fn logout(&self) {
        tracing::info!("logging out");
        self.inner.token.reset();
        self.inner.user.reset();
    }
}
