use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::AuthApi;
use crate::models::{AuthResponse, LoginPayload, ProfilePayload, RegisterPayload, User};
use crate::storage::{self, TOKEN_KEY};
use crate::toast::Toaster;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SessionPhase {
    // a stored token exists and the profile fetch is still in flight
    Resolving,
    SignedOut,
    SignedIn,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub user: Option<User>,
    pub token: Option<String>,
}

impl SessionState {
    pub fn initial(token: Option<String>) -> SessionState {
        match token {
            Some(token) if !token.is_empty() => SessionState {
                phase: SessionPhase::Resolving,
                user: None,
                token: Some(token),
            },
            _ => SessionState {
                phase: SessionPhase::SignedOut,
                user: None,
                token: None,
            },
        }
    }
}

pub enum SessionAction {
    SignedIn { user: User, token: String },
    Resolved(User),
    SignedOut,
    UserUpdated(User),
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: SessionAction) -> Rc<Self> {
        let next = match action {
            SessionAction::SignedIn { user, token } => SessionState {
                phase: SessionPhase::SignedIn,
                user: Some(user),
                token: Some(token),
            },
            SessionAction::Resolved(user) => SessionState {
                phase: SessionPhase::SignedIn,
                user: Some(user),
                token: self.token.clone(),
            },
            SessionAction::SignedOut => SessionState {
                phase: SessionPhase::SignedOut,
                user: None,
                token: None,
            },
            SessionAction::UserUpdated(user) => SessionState {
                phase: self.phase,
                user: Some(user),
                token: self.token.clone(),
            },
        };
        Rc::new(next)
    }
}

#[derive(Clone, PartialEq)]
pub struct Session {
    handle: UseReducerHandle<SessionState>,
    toaster: Toaster,
}

impl Session {
    pub fn new(handle: UseReducerHandle<SessionState>, toaster: Toaster) -> Session {
        Session { handle, toaster }
    }

    pub fn phase(&self) -> SessionPhase {
        self.handle.phase
    }

    pub fn user(&self) -> Option<&User> {
        self.handle.user.as_ref()
    }

    // validates the stored token by fetching the profile; a failure signs out quietly
    pub fn resolve(&self) {
        let handle = self.handle.clone();
        spawn_local(async move {
            match AuthApi::profile().await {
                Ok(user) => handle.dispatch(SessionAction::Resolved(user)),
                Err(err) => {
                    web_sys::console::error_1(&format!("Session restore failed: {err}").into());
                    storage::remove(TOKEN_KEY);
                    handle.dispatch(SessionAction::SignedOut);
                }
            }
        });
    }

    pub fn login(&self, email: String, password: String, on_done: Callback<()>) {
        let handle = self.handle.clone();
        let toaster = self.toaster.clone();
        spawn_local(async move {
            match AuthApi::login(&LoginPayload { email, password }).await {
                Ok(AuthResponse { user, token }) => {
                    storage::write(TOKEN_KEY, &token);
                    handle.dispatch(SessionAction::SignedIn { user, token });
                    toaster.success("Login successful!");
                }
                Err(err) => toaster.error(&err.user_message("Login failed")),
            }
            on_done.emit(());
        });
    }

    pub fn register(&self, name: String, email: String, password: String, on_done: Callback<()>) {
        let handle = self.handle.clone();
        let toaster = self.toaster.clone();
        spawn_local(async move {
            match AuthApi::register(&RegisterPayload {
                name,
                email,
                password,
            })
            .await
            {
                Ok(AuthResponse { user, token }) => {
                    storage::write(TOKEN_KEY, &token);
                    handle.dispatch(SessionAction::SignedIn { user, token });
                    toaster.success("Registration successful!");
                }
                Err(err) => toaster.error(&err.user_message("Registration failed")),
            }
            on_done.emit(());
        });
    }

    pub fn logout(&self) {
        storage::remove(TOKEN_KEY);
        self.handle.dispatch(SessionAction::SignedOut);
        self.toaster.success("Logged out successfully");
    }

    pub fn update_profile(&self, payload: ProfilePayload, on_done: Callback<()>) {
        let handle = self.handle.clone();
        let toaster = self.toaster.clone();
        spawn_local(async move {
            match AuthApi::update_profile(&payload).await {
                Ok(user) => {
                    handle.dispatch(SessionAction::UserUpdated(user));
                    toaster.success("Profile updated successfully");
                }
                Err(err) => toaster.error(&err.user_message("Update failed")),
            }
            on_done.emit(());
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Preferences;

    fn user(name: &str) -> User {
        User {
            name: name.to_string(),
            email: format!("{}@example.com", name),
            preferences: Preferences::default(),
            created_at: String::new(),
        }
    }

    fn reduce(state: SessionState, action: SessionAction) -> SessionState {
        (*Reducible::reduce(Rc::new(state), action)).clone()
    }

    #[test]
    fn initial_state_resolves_only_with_a_stored_token() {
        assert_eq!(
            SessionState::initial(Some("jwt".to_string())).phase,
            SessionPhase::Resolving
        );
        assert_eq!(
            SessionState::initial(Some(String::new())).phase,
            SessionPhase::SignedOut
        );
        assert_eq!(SessionState::initial(None).phase, SessionPhase::SignedOut);
    }

    #[test]
    fn signing_in_stores_user_and_token() {
        let state = reduce(
            SessionState::initial(None),
            SessionAction::SignedIn {
                user: user("asha"),
                token: "jwt".to_string(),
            },
        );
        assert_eq!(state.phase, SessionPhase::SignedIn);
        assert_eq!(state.user.as_ref().map(|u| u.name.as_str()), Some("asha"));
        assert_eq!(state.token.as_deref(), Some("jwt"));
    }

    #[test]
    fn resolving_keeps_the_existing_token() {
        let state = reduce(
            SessionState::initial(Some("stored".to_string())),
            SessionAction::Resolved(user("asha")),
        );
        assert_eq!(state.phase, SessionPhase::SignedIn);
        assert_eq!(state.token.as_deref(), Some("stored"));
    }

    #[test]
    fn signing_out_clears_everything() {
        let state = reduce(
            SessionState {
                phase: SessionPhase::SignedIn,
                user: Some(user("asha")),
                token: Some("jwt".to_string()),
            },
            SessionAction::SignedOut,
        );
        assert_eq!(state.phase, SessionPhase::SignedOut);
        assert!(state.user.is_none());
        assert!(state.token.is_none());
    }

    #[test]
    fn profile_updates_replace_the_user_only() {
        let state = reduce(
            SessionState {
                phase: SessionPhase::SignedIn,
                user: Some(user("asha")),
                token: Some("jwt".to_string()),
            },
            SessionAction::UserUpdated(user("asha-renamed")),
        );
        assert_eq!(state.phase, SessionPhase::SignedIn);
        assert_eq!(
            state.user.as_ref().map(|u| u.name.as_str()),
            Some("asha-renamed")
        );
        assert_eq!(state.token.as_deref(), Some("jwt"));
    }
}
