//! Transaction endpoints.

use super::ApiClient;
use crate::executor::ClientError;
use crate::models::{ApiOutcome, ApiRequest, ApiResponse, Created, Transaction, TransactionFilter};
use crate::query::QueryParams;
use crate::session::Session;
use serde::Serialize;

impl ApiClient {
    /// `GET /transactions?{params}`.
    pub async fn get_transactions(
        &self,
        session: &Session,
        params: &QueryParams,
    ) -> Result<ApiResponse, ClientError> {
        let request = ApiRequest::get(["transactions"]).with_query(params.clone());
        self.send(request, session).await
    }

    /// `POST /transactions` with `data` as the JSON body.
    pub async fn create_transaction<T: Serialize + ?Sized>(
        &self,
        session: &Session,
        data: &T,
    ) -> Result<ApiResponse, ClientError> {
        let request = ApiRequest::post(["transactions"]).with_json_from(data)?;
        self.send(request, session).await
    }

    /// Transactions matching `filter`, newest first.
    pub async fn transactions(
        &self,
        session: &Session,
        filter: &TransactionFilter,
    ) -> Result<ApiOutcome<Vec<Transaction>>, ClientError> {
        self.get_transactions(session, &filter.to_query()?)
            .await?
            .into_outcome()
    }

    pub async fn create_transaction_typed<T: Serialize + ?Sized>(
        &self,
        session: &Session,
        data: &T,
    ) -> Result<ApiOutcome<Created>, ClientError> {
        self.create_transaction(session, data).await?.into_outcome()
    }
}
