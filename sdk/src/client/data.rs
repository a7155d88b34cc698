//! REST ("Data") endpoints under `/workflow-api/data`
//!
//! Every record type exposes the same six operations through a
//! [`DataResource`]. Filtering, sorting and counting happen in the engine.

use crate::client::workflow_api_client::{RequestBody, WorkflowApiClient};
use crate::error::{Result, WorkflowApiError};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;
use std::marker::PhantomData;
use tracing::debug;
use workflow_api_core::paths;
use workflow_api_core::query::filters_to_query_pairs;
use workflow_api_core::{
    ApprovalModel, CollectionResponse, DeleteCollectionResponse, FieldFilter, FieldQuery,
    GlobalParameterModel, ParameterModel, ProcessInstanceModel, SchemeModel, TimerModel,
    TransitionHistoryModel,
};

/// Entry point to the REST endpoints, obtained from [`WorkflowApiClient::data`].
#[derive(Debug, Clone, Copy)]
pub struct DataApi<'a> {
    client: &'a WorkflowApiClient,
}

impl<'a> DataApi<'a> {
    pub(crate) fn new(client: &'a WorkflowApiClient) -> Self {
        Self { client }
    }

    /// Approval history records, keyed by id
    pub fn approvals(&self) -> DataResource<'a, ApprovalModel> {
        DataResource::new(self.client, paths::APPROVALS)
    }

    /// Scheduled timers, keyed by id
    pub fn timers(&self) -> DataResource<'a, TimerModel> {
        DataResource::new(self.client, paths::TIMERS)
    }

    /// Per-instance parameters, keyed by id
    pub fn parameters(&self) -> DataResource<'a, ParameterModel> {
        DataResource::new(self.client, paths::PARAMETERS)
    }

    /// Engine-wide parameters, keyed by id
    pub fn global_parameters(&self) -> DataResource<'a, GlobalParameterModel> {
        DataResource::new(self.client, paths::GLOBAL_PARAMETERS)
    }

    /// Process instances, keyed by id
    pub fn processes(&self) -> DataResource<'a, ProcessInstanceModel> {
        DataResource::new(self.client, paths::PROCESSES)
    }

    /// Transition history, keyed by id
    pub fn transitions(&self) -> DataResource<'a, TransitionHistoryModel> {
        DataResource::new(self.client, paths::TRANSITIONS)
    }

    /// Scheme documents, keyed by scheme code
    pub fn schemes(&self) -> DataResource<'a, SchemeModel> {
        DataResource::new(self.client, paths::SCHEMES)
    }
}

/// CRUD and search for one record type.
///
/// Keys are anything `Display`: a `Uuid` for most records, the scheme code
/// for schemes. They are percent-encoded into the path.
pub struct DataResource<'a, T> {
    client: &'a WorkflowApiClient,
    entity: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for DataResource<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DataResource<'_, T> {}

impl<T> std::fmt::Debug for DataResource<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataResource")
            .field("entity", &self.entity)
            .finish()
    }
}

impl<'a, T> DataResource<'a, T>
where
    T: Serialize + DeserializeOwned,
{
    fn new(client: &'a WorkflowApiClient, entity: &'static str) -> Self {
        Self {
            client,
            entity,
            _marker: PhantomData,
        }
    }

    /// Entity path below `/workflow-api/data`, e.g. `processes/timers`.
    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// `GET /{entity}/{key}`
    pub async fn get(&self, key: impl Display) -> Result<T> {
        let path = paths::data_item(self.entity, &key.to_string());
        self.client
            .execute(Method::GET, &path, &[], RequestBody::Empty)
            .await
    }

    /// `GET /{entity}` with filters, sorts, paging and search as query parameters
    pub async fn get_collection(&self, query: &FieldQuery) -> Result<CollectionResponse<T>> {
        let pairs = query.to_query_pairs()?;
        self.client
            .execute(Method::GET, &paths::data(self.entity), &pairs, RequestBody::Empty)
            .await
    }

    /// `POST /{entity}`, returning the stored record
    pub async fn create(&self, item: &T) -> Result<T> {
        self.client
            .execute(
                Method::POST,
                &paths::data(self.entity),
                &[],
                RequestBody::json(item)?,
            )
            .await
    }

    /// `PUT /{entity}/{key}`, returning the stored record
    pub async fn update(&self, key: impl Display, item: &T) -> Result<T> {
        let path = paths::data_item(self.entity, &key.to_string());
        self.client
            .execute(Method::PUT, &path, &[], RequestBody::json(item)?)
            .await
    }

    /// `DELETE /{entity}/{key}`
    pub async fn delete(&self, key: impl Display) -> Result<()> {
        let path = paths::data_item(self.entity, &key.to_string());
        self.client
            .execute_text(Method::DELETE, &path, &[], RequestBody::Empty)
            .await
            .map(|_| ())
    }

    /// `DELETE /{entity}?filters=..`, deleting every matching record
    ///
    /// An empty filter list matches everything; the engine decides whether to
    /// accept that.
    pub async fn delete_collection(
        &self,
        filters: &[FieldFilter],
    ) -> Result<DeleteCollectionResponse> {
        let pairs = filters_to_query_pairs(filters)?;
        self.client
            .execute(
                Method::DELETE,
                &paths::data(self.entity),
                &pairs,
                RequestBody::Empty,
            )
            .await
    }

    /// Read every page of `query`, `page_size` records per request.
    ///
    /// Starts at `query.skip` and, when `query.take` is set, stops after that
    /// many records. When the engine reports a positive `total`, paging runs
    /// until that many records have been passed, even if the engine caps pages
    /// below `page_size`. Without a total, a short page ends paging. An empty
    /// page always does.
    pub async fn fetch_all(&self, query: &FieldQuery, page_size: u32) -> Result<Vec<T>> {
        if page_size == 0 {
            return Err(WorkflowApiError::InvalidInput(
                "page_size must be positive".to_string(),
            ));
        }

        let mut offset = query.skip.unwrap_or(0);
        let limit = query.take;
        let mut items = Vec::new();

        loop {
            let requested = match limit {
                Some(limit) => {
                    let remaining = limit.saturating_sub(items.len() as u32);
                    if remaining == 0 {
                        break;
                    }
                    remaining.min(page_size)
                }
                None => page_size,
            };

            let page_query = query.clone().skip(offset).take(requested);
            let page = self.get_collection(&page_query).await?;
            let received = page.collection.len() as u32;
            let total = page.total;
            items.extend(page.collection);
            offset = offset.saturating_add(received);

            debug!(
                entity = self.entity,
                offset,
                received,
                total,
                "Fetched collection page"
            );

            let more = if total > 0 {
                i64::from(offset) < total
            } else {
                received == requested
            };
            if received == 0 || !more {
                break;
            }
        }

        Ok(items)
    }
}
