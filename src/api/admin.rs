//! Administrator endpoints. The backend answers 401 unless the session
//! belongs to an Admin account.

use super::ApiClient;
use crate::executor::ClientError;
use crate::models::{Ack, AdminStats, AdminUser, ApiOutcome, ApiRequest, ApiResponse};
use crate::session::Session;
use serde::Serialize;
use std::fmt::Display;

impl ApiClient {
    /// `GET /admin/users`.
    pub async fn get_users(&self, session: &Session) -> Result<ApiResponse, ClientError> {
        self.send(ApiRequest::get(["admin", "users"]), session).await
    }

    /// `PUT /admin/users/{id}` with `data` as the JSON body.
    pub async fn update_user<T: Serialize + ?Sized>(
        &self,
        session: &Session,
        id: impl Display,
        data: &T,
    ) -> Result<ApiResponse, ClientError> {
        let request = ApiRequest::put(["admin".to_string(), "users".to_string(), id.to_string()])
            .with_json_from(data)?;
        self.send(request, session).await
    }

    /// `GET /admin/stats`.
    pub async fn get_admin_stats(&self, session: &Session) -> Result<ApiResponse, ClientError> {
        self.send(ApiRequest::get(["admin", "stats"]), session).await
    }

    pub async fn users(
        &self,
        session: &Session,
    ) -> Result<ApiOutcome<Vec<AdminUser>>, ClientError> {
        self.get_users(session).await?.into_outcome()
    }

    pub async fn update_user_typed<T: Serialize + ?Sized>(
        &self,
        session: &Session,
        id: impl Display,
        data: &T,
    ) -> Result<ApiOutcome<Ack>, ClientError> {
        self.update_user(session, id, data).await?.into_outcome()
    }

    pub async fn admin_stats(
        &self,
        session: &Session,
    ) -> Result<ApiOutcome<AdminStats>, ClientError> {
        self.get_admin_stats(session).await?.into_outcome()
    }
}
