//! In-memory session state with explicit change notification.
//!
//! DESIGN
//! ======
//! One `SessionStore` exists per application load, built at bootstrap around
//! whatever [`TokenStore`] the host picked, and handed down to UI code from
//! there. No global instance, no framework reactivity: observers are a plain
//! registration list, notified synchronously after every transition.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;

use crate::token::TokenStore;
use crate::types::User;

/// Snapshot of the authentication session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Whether a session token is currently held. True iff `token` is set.
    pub is_authenticated: bool,
    /// Profile of the signed-in user, once known. Stays `None` for a session
    /// restored from persistence until a profile fetch calls
    /// [`SessionStore::set_user`].
    pub user: Option<User>,
    /// The opaque session token, if any.
    pub token: Option<String>,
}

/// Handle identifying one registered observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriberId(u64);

type Subscriber = Box<dyn Fn(&SessionState)>;

/// Observable session store seeded from token persistence.
pub struct SessionStore {
    state: SessionState,
    tokens: Box<dyn TokenStore>,
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_subscriber: u64,
}

impl SessionStore {
    /// Build a store around `tokens`, seeding synchronously: a persisted
    /// token restores an authenticated session (with the user profile still
    /// unknown); otherwise the session starts signed out.
    #[must_use]
    pub fn new(tokens: Box<dyn TokenStore>) -> Self {
        let token = tokens.load();
        let state = SessionState {
            is_authenticated: token.is_some(),
            user: None,
            token,
        };
        Self {
            state,
            tokens,
            subscribers: Vec::new(),
            next_subscriber: 0,
        }
    }

    /// The current snapshot.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The token persistence this store was built around.
    ///
    /// [`login`](Self::login) records the token in memory only; a caller
    /// that wants the session to survive a reload saves the token here as
    /// its own follow-up step.
    #[must_use]
    pub fn tokens(&self) -> &dyn TokenStore {
        self.tokens.as_ref()
    }

    /// Record a successful sign-in, from any prior state.
    ///
    /// Sets all three state fields and notifies observers. Deliberately does
    /// not persist `token`; see [`tokens`](Self::tokens).
    pub fn login(&mut self, user: User, token: String) {
        log::debug!("session authenticated for user id={}", user.id);
        self.state.is_authenticated = true;
        self.state.user = Some(user);
        self.state.token = Some(token);
        self.notify();
    }

    /// Drop the session, from any prior state.
    ///
    /// Clears the persisted token as part of the transition, then resets
    /// every state field and notifies observers. Idempotent.
    pub fn logout(&mut self) {
        log::debug!("session cleared");
        self.tokens.clear();
        self.state = SessionState::default();
        self.notify();
    }

    /// Replace the user profile, leaving authentication status and token
    /// untouched. Permissive by design: callable from any state, typically
    /// right after seeding restored a session whose profile is still unknown.
    pub fn set_user(&mut self, user: User) {
        self.state.user = Some(user);
        self.notify();
    }

    /// Register an observer.
    ///
    /// The observer runs immediately with the current snapshot, then again
    /// synchronously after every transition, until unsubscribed.
    pub fn subscribe(&mut self, subscriber: impl Fn(&SessionState) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        subscriber(&self.state);
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove an observer. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(key, _)| *key != id);
    }

    fn notify(&self) {
        for (_, subscriber) in &self.subscribers {
            subscriber(&self.state);
        }
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}
