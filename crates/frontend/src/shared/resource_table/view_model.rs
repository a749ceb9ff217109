use contracts::domain::ResourceKind;
use contracts::shared::metadata::ResourceMetadata;
use contracts::shared::record::Record;
use contracts::shared::resource_table::{drive, ApiCall, ResourceTableState, TableCell};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::model::HttpResourceApi;
use crate::system::auth::context::AuthState;

/// Controller state held in a signal
#[derive(Clone, Copy)]
pub struct SignalCell(pub RwSignal<ResourceTableState>);

impl TableCell for SignalCell {
    fn update<R>(&self, f: impl FnOnce(&mut ResourceTableState) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

/// ViewModel shared by the table page and its modals
#[derive(Clone, Copy)]
pub struct ResourceTableViewModel {
    pub state: RwSignal<ResourceTableState>,
    api: HttpResourceApi,
}

impl ResourceTableViewModel {
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            state: RwSignal::new(ResourceTableState::new(kind)),
            api: HttpResourceApi {
                auth: use_context::<WriteSignal<AuthState>>(),
            },
        }
    }

    pub fn meta(&self) -> &'static ResourceMetadata {
        self.state.with_untracked(|s| s.meta())
    }

    /// Applies a transition and performs the calls it asks for
    fn run(&self, begin: impl FnOnce(&mut ResourceTableState) -> Option<ApiCall> + 'static) {
        let cell = SignalCell(self.state);
        let api = self.api;
        spawn_local(async move {
            drive(&api, &cell, begin).await;
        });
    }

    pub fn load(&self) {
        self.run(|s| s.begin_load());
    }

    pub fn submit(&self) {
        self.run(|s| s.begin_submit());
    }

    pub fn confirm_delete(&self) {
        self.run(|s| s.begin_delete());
    }

    pub fn ingest(&self) {
        self.run(|s| s.begin_ingest());
    }

    pub fn open_add(&self) {
        self.state.update(|s| s.open_add());
    }

    pub fn open_update(&self, record: &Record) {
        self.state.update(|s| s.open_update(record));
    }

    pub fn set_field(&self, field: &str, value: String) {
        self.state.update(|s| {
            s.set_field(field, value);
        });
    }

    pub fn cancel_form(&self) {
        self.state.update(|s| s.cancel_form());
    }

    pub fn open_delete(&self, record: &Record) {
        self.state.update(|s| s.open_delete(record));
    }

    pub fn cancel_delete(&self) {
        self.state.update(|s| s.cancel_delete());
    }

    pub fn set_search(&self, term: String) {
        if self.state.with_untracked(|s| s.search_term != term) {
            self.state.update(|s| s.set_search_term(term));
        }
    }

    pub fn dismiss_alert(&self) {
        self.state.update(|s| s.dismiss_alert());
    }
}
