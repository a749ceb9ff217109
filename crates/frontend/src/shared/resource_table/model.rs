//! HTTP implementation of the resource operations

use async_trait::async_trait;
use contracts::shared::api_error::ApiError;
use contracts::shared::metadata::ResourceMetadata;
use contracts::shared::record::Record;
use contracts::shared::resource_table::ResourceApi;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::{json, Value};

use crate::shared::api_utils::{get_json, post_json};
use crate::system::auth::context::{refresh_session, AuthState};

/// Calls the survey API; a 401 triggers a session re-check so an expired
/// cookie sends the user back to the login page
#[derive(Clone, Copy)]
pub struct HttpResourceApi {
    pub auth: Option<WriteSignal<AuthState>>,
}

impl HttpResourceApi {
    fn watch<T>(&self, result: Result<T, ApiError>) -> Result<T, ApiError> {
        if let (Err(err), Some(set_auth_state)) = (&result, self.auth) {
            if err.is_unauthorized() {
                spawn_local(refresh_session(set_auth_state));
            }
        }
        result
    }
}

#[async_trait(?Send)]
impl ResourceApi for HttpResourceApi {
    async fn list(&self, meta: &'static ResourceMetadata) -> Result<Vec<Record>, ApiError> {
        self.watch(get_json::<Vec<Record>>(meta.endpoints.list).await)
    }

    async fn create(&self, meta: &'static ResourceMetadata, payload: &Value) -> Result<(), ApiError> {
        self.watch(post_json(meta.endpoints.create, payload).await)
    }

    async fn update(&self, meta: &'static ResourceMetadata, payload: &Value) -> Result<(), ApiError> {
        self.watch(post_json(meta.endpoints.update, payload).await)
    }

    async fn delete(&self, meta: &'static ResourceMetadata, body: &Value) -> Result<(), ApiError> {
        self.watch(post_json(meta.endpoints.delete, body).await)
    }

    async fn ingest(&self, meta: &'static ResourceMetadata) -> Result<(), ApiError> {
        self.watch(post_json(meta.endpoints.ingest, &json!({})).await)
    }
}
