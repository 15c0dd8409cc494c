//! Auth provider: current identity and the login overlay flag.
//!
//! The login flag is independent of whether anyone is logged in: a logged-in
//! visitor can still have it set, and logging out does not open it.

use tower_sessions::Session;
use tower_sessions::session::Error as SessionError;

use crate::models::{CurrentUser, session_keys};

/// Session-backed auth state for one request.
pub struct AuthProvider {
    session: Session,
    user: Option<CurrentUser>,
    login_open: bool,
    error: Option<String>,
}

impl AuthProvider {
    /// Read the identity and login flag from the session.
    ///
    /// The one-shot login error is consumed here so it shows on exactly one
    /// render.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be read.
    pub async fn load(session: Session) -> Result<Self, SessionError> {
        let user = session
            .get::<CurrentUser>(session_keys::CURRENT_USER)
            .await?;
        let login_open = session
            .get::<bool>(session_keys::LOGIN_OVERLAY_OPEN)
            .await?
            .unwrap_or(false);
        let error = session.remove::<String>(session_keys::LOGIN_ERROR).await?;

        Ok(Self {
            session,
            user,
            login_open,
            error,
        })
    }

    #[must_use]
    pub const fn user(&self) -> Option<&CurrentUser> {
        self.user.as_ref()
    }

    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub const fn login_open(&self) -> bool {
        self.login_open
    }

    /// Error from the previous login or register attempt, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Store `user` as the current identity and close the login overlay.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be written.
    pub async fn login(&mut self, user: CurrentUser) -> Result<(), SessionError> {
        // Fresh session id on privilege change
        self.session.cycle_id().await?;
        self.session
            .insert(session_keys::CURRENT_USER, &user)
            .await?;
        self.user = Some(user);
        self.set_login_open(false).await
    }

    /// Clear the current identity.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be written.
    pub async fn logout(&mut self) -> Result<(), SessionError> {
        self.session
            .remove::<CurrentUser>(session_keys::CURRENT_USER)
            .await?;
        self.user = None;
        Ok(())
    }

    /// Replace the stored identity (after a profile rename).
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be written.
    pub async fn refresh(&mut self, user: CurrentUser) -> Result<(), SessionError> {
        self.session
            .insert(session_keys::CURRENT_USER, &user)
            .await?;
        self.user = Some(user);
        Ok(())
    }

    /// Open or close the login overlay.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be written.
    pub async fn set_login_open(&mut self, open: bool) -> Result<(), SessionError> {
        self.session
            .insert(session_keys::LOGIN_OVERLAY_OPEN, open)
            .await?;
        self.login_open = open;
        Ok(())
    }

    /// Queue an error for the next render of the login overlay.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be written.
    pub async fn set_error(&mut self, message: String) -> Result<(), SessionError> {
        self.session
            .insert(session_keys::LOGIN_ERROR, &message)
            .await?;
        self.error = Some(message);
        Ok(())
    }
}
