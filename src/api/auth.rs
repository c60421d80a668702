//! Account endpoints: signup, login, logout, and the current user.

use super::ApiClient;
use crate::executor::ClientError;
use crate::models::{
    Ack, ApiOutcome, ApiRequest, ApiResponse, AuthSuccess, LoginRequest, SignupRequest, User,
    UserType,
};
use crate::session::Session;
use log::debug;

impl ApiClient {
    /// `POST /auth/signup` with `{name, email, password, type}`.
    ///
    /// On success the server also logs the new account in, so the session
    /// picks up its cookie.
    pub async fn signup(
        &self,
        session: &Session,
        name: &str,
        email: &str,
        password: &str,
        user_type: UserType,
    ) -> Result<ApiResponse, ClientError> {
        let body = SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            user_type,
        };
        let request = ApiRequest::post(["auth", "signup"]).with_json_from(&body)?;
        self.send(request, session).await
    }

    /// `POST /auth/login` with `{email, password, type}`.
    pub async fn login(
        &self,
        session: &Session,
        email: &str,
        password: &str,
        user_type: UserType,
    ) -> Result<ApiResponse, ClientError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
            user_type,
        };
        let request = ApiRequest::post(["auth", "login"]).with_json_from(&body)?;
        self.send(request, session).await
    }

    /// `POST /auth/logout`, without a body.
    ///
    /// The session is cleared once the server's answer has been decoded,
    /// whatever the status. On any error the session is left intact.
    pub async fn logout(&self, session: &Session) -> Result<ApiResponse, ClientError> {
        let response = self.send(ApiRequest::post(["auth", "logout"]), session).await?;
        session.clear();
        debug!("Session cleared after logout");
        Ok(response)
    }

    /// `GET /auth/me`.
    pub async fn get_current_user(&self, session: &Session) -> Result<ApiResponse, ClientError> {
        self.send(ApiRequest::get(["auth", "me"]), session).await
    }

    pub async fn signup_typed(
        &self,
        session: &Session,
        name: &str,
        email: &str,
        password: &str,
        user_type: UserType,
    ) -> Result<ApiOutcome<AuthSuccess>, ClientError> {
        self.signup(session, name, email, password, user_type)
            .await?
            .into_outcome()
    }

    pub async fn login_typed(
        &self,
        session: &Session,
        email: &str,
        password: &str,
        user_type: UserType,
    ) -> Result<ApiOutcome<AuthSuccess>, ClientError> {
        self.login(session, email, password, user_type)
            .await?
            .into_outcome()
    }

    pub async fn logout_typed(&self, session: &Session) -> Result<ApiOutcome<Ack>, ClientError> {
        self.logout(session).await?.into_outcome()
    }

    /// The logged-in account, or a 401 failure when the session is empty
    /// or expired.
    pub async fn current_user(&self, session: &Session) -> Result<ApiOutcome<User>, ClientError> {
        self.get_current_user(session).await?.into_outcome()
    }
}
