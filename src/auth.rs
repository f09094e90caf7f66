// src/auth.rs

use reqwest::Method;
use serde_json::Value;

use crate::client::Session;
use crate::error::VanError;
use crate::user::{
    ForgotPasswordRequest, LoginRequest, LoginResponse, RegisterRequest, ResetPasswordRequest,
    User,
};
use crate::EasyVan;

/// Provides login, registration, and password management.
///
/// Obtained via [`EasyVan::auth`]. Login stores the resulting session
/// (token + user) on the client; logout clears it. There is no server-side
/// session object to destroy — the backend issues stateless bearer tokens.
pub struct AuthHandle<'a> {
    client: &'a mut EasyVan,
}

impl<'a> AuthHandle<'a> {
    pub fn new(client: &'a mut EasyVan) -> Self {
        AuthHandle { client }
    }

    /// Logs in with a username and password.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<User, VanError> {
        self._login(LoginRequest {
            username: Some(username),
            email: None,
            password,
        })
        .await
    }

    /// Logs in with an email address and password.
    pub async fn login_with_email(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<User, VanError> {
        self._login(LoginRequest {
            username: None,
            email: Some(email),
            password,
        })
        .await
    }

    async fn _login(&mut self, request: LoginRequest<'_>) -> Result<User, VanError> {
        let response: LoginResponse = self
            .client
            ._request(Method::POST, "auth/login", Some(&request), false, None)
            .await?;

        let user = response.user.clone();
        self.client._set_session(Some(Session {
            token: response.token,
            user: response.user,
        }));
        Ok(user)
    }

    /// Clears the client's session. Purely local.
    pub fn logout(&mut self) {
        self.client._set_session(None);
    }

    /// Registers a new account. Does not log the user in; call
    /// [`AuthHandle::login`] afterwards. The backend confirms with a plain
    /// text body, so only success/failure is surfaced.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), VanError> {
        self.client
            ._request_text(Method::POST, "auth/register", Some(request), false)
            .await?;
        Ok(())
    }

    /// Requests a password reset email.
    pub async fn forgot_password(&self, email: &str) -> Result<(), VanError> {
        let body = ForgotPasswordRequest { email };
        self.client
            ._request_text(Method::POST, "auth/forgot-password", Some(&body), false)
            .await?;
        Ok(())
    }

    /// Completes a password reset with the emailed token.
    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<(), VanError> {
        let body = ResetPasswordRequest {
            token,
            new_password,
        };
        self.client
            ._request_text(Method::POST, "auth/reset-password", Some(&body), false)
            .await?;
        Ok(())
    }

    /// Updates profile fields of the logged-in user and folds the returned
    /// user back into the session.
    pub async fn update_profile(&mut self, changes: &Value) -> Result<User, VanError> {
        let user_id = self
            .client
            .current_user()
            .map(|u| u.id)
            .ok_or(VanError::SessionTokenMissing)?;

        let endpoint = format!("auth/{}", user_id);
        let updated: User = self
            .client
            ._request(Method::PUT, &endpoint, Some(changes), true, None)
            .await?;

        if let Some(session) = self.client.session.as_mut() {
            session.user = updated.clone();
        }
        Ok(updated)
    }
}
