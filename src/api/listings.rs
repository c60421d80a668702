//! Listing endpoints.

use super::ApiClient;
use crate::executor::ClientError;
use crate::models::{Ack, ApiOutcome, ApiRequest, ApiResponse, Created, Listing, ListingFilter};
use crate::query::QueryParams;
use crate::session::Session;
use serde::Serialize;
use std::fmt::Display;

impl ApiClient {
    /// `GET /listings?{params}`.
    pub async fn get_listings(
        &self,
        session: &Session,
        params: &QueryParams,
    ) -> Result<ApiResponse, ClientError> {
        let request = ApiRequest::get(["listings"]).with_query(params.clone());
        self.send(request, session).await
    }

    /// `POST /listings` with `data` as the JSON body.
    pub async fn create_listing<T: Serialize + ?Sized>(
        &self,
        session: &Session,
        data: &T,
    ) -> Result<ApiResponse, ClientError> {
        let request = ApiRequest::post(["listings"]).with_json_from(data)?;
        self.send(request, session).await
    }

    /// `PUT /listings/{id}` with `data` as the JSON body.
    pub async fn update_listing<T: Serialize + ?Sized>(
        &self,
        session: &Session,
        id: impl Display,
        data: &T,
    ) -> Result<ApiResponse, ClientError> {
        let request =
            ApiRequest::put(["listings".to_string(), id.to_string()]).with_json_from(data)?;
        self.send(request, session).await
    }

    /// Listings matching `filter`, newest first.
    pub async fn listings(
        &self,
        session: &Session,
        filter: &ListingFilter,
    ) -> Result<ApiOutcome<Vec<Listing>>, ClientError> {
        self.get_listings(session, &filter.to_query()?)
            .await?
            .into_outcome()
    }

    pub async fn create_listing_typed<T: Serialize + ?Sized>(
        &self,
        session: &Session,
        data: &T,
    ) -> Result<ApiOutcome<Created>, ClientError> {
        self.create_listing(session, data).await?.into_outcome()
    }

    pub async fn update_listing_typed<T: Serialize + ?Sized>(
        &self,
        session: &Session,
        id: impl Display,
        data: &T,
    ) -> Result<ApiOutcome<Ack>, ClientError> {
        self.update_listing(session, id, data).await?.into_outcome()
    }
}
