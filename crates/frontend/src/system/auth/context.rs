use contracts::shared::api_error::ApiError;
use contracts::system::auth::{is_session_endpoint_missing, session_after_login, SessionInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<SessionInfo>,
    /// The cookie has been checked against the server at least once
    pub checked: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_admin)
    }

    pub fn username(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.username.as_str())
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Re-validate the session cookie once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            refresh_session(set_auth_state).await;
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    (
        expect_context::<ReadSignal<AuthState>>(),
        expect_context::<WriteSignal<AuthState>>(),
    )
}

/// Asks the server who the cookie belongs to and stores the answer
pub async fn refresh_session(set_auth_state: WriteSignal<AuthState>) {
    let session = match api::current_session().await {
        Ok(session) => session,
        Err(e) if is_session_endpoint_missing(&e) => {
            log::debug!("server has no session endpoint; sign-in required");
            None
        }
        Err(e) => {
            log::warn!("session check failed: {}", e);
            None
        }
    };
    log::debug!(
        "session: {}",
        session.as_ref().map(|s| s.username.as_str()).unwrap_or("anonymous")
    );
    set_auth_state.set(AuthState {
        session,
        checked: true,
    });
}

/// Helper: Perform login, then establish the session it opened
pub async fn do_login(
    username: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), String> {
    api::login(username.clone(), password)
        .await
        .map_err(|e| match e {
            ApiError::Unauthorized => "Invalid credentials".to_string(),
            other => other.to_string(),
        })?;

    let session = session_after_login(&username, api::current_session().await)?;
    log::debug!("signed in as {}", session.username);
    set_auth_state.set(AuthState {
        session: Some(session),
        checked: true,
    });
    Ok(())
}

/// Helper: Perform logout; local state is cleared even if the call fails
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Err(e) = api::logout().await {
        log::warn!("logout failed: {}", e);
    }
    set_auth_state.set(AuthState {
        session: None,
        checked: true,
    });
}
