//! Supply endpoints.

use super::ApiClient;
use crate::executor::ClientError;
use crate::models::{ApiOutcome, ApiRequest, ApiResponse, Created, Supply, SupplyFilter};
use crate::query::QueryParams;
use crate::session::Session;
use serde::Serialize;

impl ApiClient {
    /// `GET /supplies?{params}`.
    pub async fn get_supplies(
        &self,
        session: &Session,
        params: &QueryParams,
    ) -> Result<ApiResponse, ClientError> {
        let request = ApiRequest::get(["supplies"]).with_query(params.clone());
        self.send(request, session).await
    }

    /// `POST /supplies` with `data` as the JSON body.
    pub async fn create_supply<T: Serialize + ?Sized>(
        &self,
        session: &Session,
        data: &T,
    ) -> Result<ApiResponse, ClientError> {
        let request = ApiRequest::post(["supplies"]).with_json_from(data)?;
        self.send(request, session).await
    }

    pub async fn supplies(
        &self,
        session: &Session,
        filter: &SupplyFilter,
    ) -> Result<ApiOutcome<Vec<Supply>>, ClientError> {
        self.get_supplies(session, &filter.to_query()?)
            .await?
            .into_outcome()
    }

    pub async fn create_supply_typed<T: Serialize + ?Sized>(
        &self,
        session: &Session,
        data: &T,
    ) -> Result<ApiOutcome<Created>, ClientError> {
        self.create_supply(session, data).await?.into_outcome()
    }
}
