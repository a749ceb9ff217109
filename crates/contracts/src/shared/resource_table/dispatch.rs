//! Runs controller-requested calls against a `ResourceApi`

use std::cell::RefCell;

use async_trait::async_trait;
use serde_json::Value;

use super::super::api_error::ApiError;
use super::super::metadata::ResourceMetadata;
use super::super::record::Record;
use super::state::{ApiCall, ResourceTableState};

/// Remote operations of a resource kind.
///
/// Implemented over HTTP in the browser and by scripted fakes in tests.
#[async_trait(?Send)]
pub trait ResourceApi {
    async fn list(&self, meta: &'static ResourceMetadata) -> Result<Vec<Record>, ApiError>;

    async fn create(&self, meta: &'static ResourceMetadata, payload: &Value)
        -> Result<(), ApiError>;

    async fn update(&self, meta: &'static ResourceMetadata, payload: &Value)
        -> Result<(), ApiError>;

    async fn delete(&self, meta: &'static ResourceMetadata, body: &Value) -> Result<(), ApiError>;

    async fn ingest(&self, meta: &'static ResourceMetadata) -> Result<(), ApiError>;
}

/// Where a table's state lives between awaits
pub trait TableCell {
    /// Applies `f` to the state; `None` once the state is gone
    fn update<R>(&self, f: impl FnOnce(&mut ResourceTableState) -> R) -> Option<R>;
}

impl TableCell for RefCell<ResourceTableState> {
    fn update<R>(&self, f: impl FnOnce(&mut ResourceTableState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Starts a transition and performs whatever calls it leads to
pub async fn drive<A, C>(
    api: &A,
    cell: &C,
    begin: impl FnOnce(&mut ResourceTableState) -> Option<ApiCall>,
) where
    A: ResourceApi + ?Sized,
    C: TableCell,
{
    if let Some(call) = cell.update(begin).flatten() {
        dispatch(api, cell, call).await;
    }
}

/// Performs `call` and every follow-up call until the state is settled
pub async fn dispatch<A, C>(api: &A, cell: &C, call: ApiCall)
where
    A: ResourceApi + ?Sized,
    C: TableCell,
{
    let Some(meta) = cell.update(|state| state.meta()) else {
        return;
    };

    let mut next = Some(call);
    while let Some(call) = next.take() {
        next = perform(api, cell, meta, call).await;
    }
}

async fn perform<A, C>(
    api: &A,
    cell: &C,
    meta: &'static ResourceMetadata,
    call: ApiCall,
) -> Option<ApiCall>
where
    A: ResourceApi + ?Sized,
    C: TableCell,
{
    log::debug!("{}: {}", meta.key, call_name(&call));
    match call {
        ApiCall::List => {
            let result = api.list(meta).await;
            cell.update(|state| state.finish_load(result)).flatten()
        }
        ApiCall::Create(payload) => {
            let result = api.create(meta, &payload).await;
            cell.update(|state| state.finish_submit(result)).flatten()
        }
        ApiCall::Update(payload) => {
            let result = api.update(meta, &payload).await;
            cell.update(|state| state.finish_submit(result)).flatten()
        }
        ApiCall::Delete(body) => {
            let result = api.delete(meta, &body).await;
            cell.update(|state| state.finish_delete(result)).flatten()
        }
        ApiCall::Ingest => {
            let result = api.ingest(meta).await;
            cell.update(|state| state.finish_ingest(result)).flatten()
        }
    }
}

fn call_name(call: &ApiCall) -> &'static str {
    match call {
        ApiCall::List => "list",
        ApiCall::Create(_) => "create",
        ApiCall::Update(_) => "update",
        ApiCall::Delete(_) => "delete",
        ApiCall::Ingest => "ingest",
    }
}
