//! Controller state of one resource table screen
//!
//! Every transition is synchronous. Transitions that need the network return
//! the `ApiCall` to perform; the matching `finish_*` transition consumes the
//! outcome and may ask for one follow-up call (the authoritative refetch).

use serde_json::{Map, Value};

use super::super::api_error::ApiError;
use super::super::draft::{Draft, FieldError};
use super::super::metadata::ResourceMetadata;
use super::super::record::Record;
use super::super::search::filter_records;
use crate::domain::ResourceKind;

/// Progress of the list fetch
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loading,
    Loaded,
    /// Last fetch failed; previously fetched records are kept
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Add,
    Update,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
}

/// Feedback after a mutation; replaced by the next one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Danger,
            message: message.into(),
        }
    }
}

/// Requests currently awaiting a response, at most one per action
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InFlight {
    pub list: bool,
    /// A refetch was asked for while a list call was running
    pub refetch_pending: bool,
    /// Mode of the submission awaiting a response
    pub submit: Option<FormMode>,
    pub delete: bool,
    pub ingest: bool,
}

/// Network call requested by a transition
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    List,
    Create(Value),
    Update(Value),
    /// Body is `{ <natural key field>: value }`
    Delete(Value),
    Ingest,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceTableState {
    pub kind: ResourceKind,
    /// Last list the server returned, in response order
    pub records: Vec<Record>,
    pub load: LoadState,
    pub selection: Option<Record>,
    pub draft: Draft,
    pub mode: FormMode,
    pub modal_open: bool,
    pub delete_modal_open: bool,
    pub search_term: String,
    pub alert: Option<Alert>,
    pub form_errors: Vec<FieldError>,
    pub in_flight: InFlight,
}

impl ResourceTableState {
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            kind,
            records: Vec::new(),
            load: LoadState::NotLoaded,
            selection: None,
            draft: Draft::empty(kind.metadata()),
            mode: FormMode::Add,
            modal_open: false,
            delete_modal_open: false,
            search_term: String::new(),
            alert: None,
            form_errors: Vec::new(),
            in_flight: InFlight::default(),
        }
    }

    pub fn meta(&self) -> &'static ResourceMetadata {
        self.kind.metadata()
    }

    // ------------------------------------------------------------------
    // List
    // ------------------------------------------------------------------

    /// Requests the list; a second request while one is running is
    /// remembered and issued once the first completes
    pub fn begin_load(&mut self) -> Option<ApiCall> {
        if self.in_flight.list {
            self.in_flight.refetch_pending = true;
            return None;
        }
        self.in_flight.list = true;
        self.load = LoadState::Loading;
        Some(ApiCall::List)
    }

    pub fn finish_load(&mut self, result: Result<Vec<Record>, ApiError>) -> Option<ApiCall> {
        self.in_flight.list = false;
        match result {
            Ok(records) => {
                log::debug!("{}: loaded {} records", self.meta().key, records.len());
                self.records = records;
                self.load = LoadState::Loaded;
            }
            Err(err) => {
                log::warn!("{}: list failed: {}", self.meta().key, err);
                self.load = LoadState::Failed(format!(
                    "Failed to load {}.",
                    self.meta().ui.list_name.to_lowercase()
                ));
            }
        }

        if std::mem::take(&mut self.in_flight.refetch_pending) {
            return self.begin_load();
        }
        None
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Records passing the current search term
    pub fn visible_records(&self) -> Vec<&Record> {
        filter_records(&self.records, &self.search_term, &self.meta().search_fields())
    }

    // ------------------------------------------------------------------
    // Add / update form
    // ------------------------------------------------------------------

    pub fn open_add(&mut self) {
        self.mode = FormMode::Add;
        self.draft = Draft::empty(self.meta());
        self.selection = None;
        self.form_errors.clear();
        self.modal_open = true;
    }

    pub fn open_update(&mut self, record: &Record) {
        self.mode = FormMode::Update;
        self.draft = Draft::from_record(self.meta(), record);
        self.selection = Some(record.clone());
        self.form_errors.clear();
        self.modal_open = true;
    }

    /// Natural key fields cannot be edited in update mode
    pub fn is_locked(&self, field: &str) -> bool {
        self.mode == FormMode::Update && self.meta().natural_key.involves(field)
    }

    /// Returns `false` when the field is locked or unknown
    pub fn set_field(&mut self, field: &str, value: impl Into<String>) -> bool {
        if self.is_locked(field) {
            return false;
        }
        let changed = self.draft.set(field, value);
        if changed {
            self.form_errors.retain(|e| e.field != field);
        }
        changed
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.form_errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn cancel_form(&mut self) {
        self.modal_open = false;
        self.draft = Draft::empty(self.meta());
        self.form_errors.clear();
        self.selection = None;
    }

    /// Validates the draft and requests create/update.
    ///
    /// Invalid drafts stay in the form with `form_errors` filled in. A
    /// submit arriving after the form was closed does nothing.
    pub fn begin_submit(&mut self) -> Option<ApiCall> {
        if !self.modal_open || self.in_flight.submit.is_some() {
            return None;
        }
        match self.draft.to_payload(self.meta()) {
            Ok(payload) => {
                self.form_errors.clear();
                self.in_flight.submit = Some(self.mode);
                Some(match self.mode {
                    FormMode::Add => ApiCall::Create(payload),
                    FormMode::Update => ApiCall::Update(payload),
                })
            }
            Err(errors) => {
                log::debug!("{}: draft rejected ({} errors)", self.meta().key, errors.len());
                self.form_errors = errors;
                None
            }
        }
    }

    pub fn finish_submit(&mut self, result: Result<(), ApiError>) -> Option<ApiCall> {
        let mode = self.in_flight.submit.take()?;
        let ui = self.meta().ui;
        let (done, doing) = match mode {
            FormMode::Add => ("added", "adding"),
            FormMode::Update => ("updated", "updating"),
        };

        match result {
            Ok(()) => {
                self.alert = Some(Alert::success(format!(
                    "{} {} successfully!",
                    ui.element_name, done
                )));
                self.modal_open = false;
                self.draft = Draft::empty(self.meta());
                self.selection = None;
                self.begin_load()
            }
            Err(err) => {
                log::warn!("{}: {} failed: {}", self.meta().key, doing, err);
                self.alert = Some(Alert::danger(format!(
                    "Error {} {}.",
                    doing,
                    ui.element_name.to_lowercase()
                )));
                None
            }
        }
    }

    // ------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------

    pub fn open_delete(&mut self, record: &Record) {
        self.selection = Some(record.clone());
        self.delete_modal_open = true;
    }

    pub fn cancel_delete(&mut self) {
        self.delete_modal_open = false;
        self.selection = None;
    }

    /// Confirmation text for the selected record
    pub fn delete_prompt(&self) -> Option<String> {
        let meta = self.meta();
        let key = self.selection.as_ref()?.natural_key(&meta.natural_key)?;
        Some(format!(
            "Are you sure you want to delete the {} \"{}\"?",
            meta.ui.element_name.to_lowercase(),
            key
        ))
    }

    pub fn begin_delete(&mut self) -> Option<ApiCall> {
        if self.in_flight.delete {
            return None;
        }
        let meta = self.meta();
        let key = self
            .selection
            .as_ref()
            .and_then(|record| record.natural_key(&meta.natural_key));

        let Some(key) = key else {
            log::error!("{}: delete confirmed without an addressable selection", meta.key);
            self.delete_modal_open = false;
            self.selection = None;
            self.alert = Some(self.delete_failed_alert());
            return None;
        };

        let mut body = Map::new();
        body.insert(meta.natural_key.target().to_string(), Value::String(key));
        self.in_flight.delete = true;
        Some(ApiCall::Delete(Value::Object(body)))
    }

    /// Closes the prompt and clears the selection whatever the outcome
    pub fn finish_delete(&mut self, result: Result<(), ApiError>) -> Option<ApiCall> {
        if !std::mem::take(&mut self.in_flight.delete) {
            return None;
        }
        self.delete_modal_open = false;
        self.selection = None;

        match result {
            Ok(()) => {
                self.alert = Some(Alert::success(format!(
                    "{} deleted successfully!",
                    self.meta().ui.element_name
                )));
                self.begin_load()
            }
            Err(err) => {
                log::warn!("{}: delete failed: {}", self.meta().key, err);
                self.alert = Some(self.delete_failed_alert());
                None
            }
        }
    }

    fn delete_failed_alert(&self) -> Alert {
        Alert::danger(format!(
            "Error deleting {}.",
            self.meta().ui.element_name.to_lowercase()
        ))
    }

    // ------------------------------------------------------------------
    // Ingest
    // ------------------------------------------------------------------

    pub fn begin_ingest(&mut self) -> Option<ApiCall> {
        if self.in_flight.ingest {
            return None;
        }
        self.in_flight.ingest = true;
        Some(ApiCall::Ingest)
    }

    pub fn finish_ingest(&mut self, result: Result<(), ApiError>) -> Option<ApiCall> {
        if !std::mem::take(&mut self.in_flight.ingest) {
            return None;
        }
        let list_name = self.meta().ui.list_name;
        match result {
            Ok(()) => {
                self.alert = Some(Alert::success(format!(
                    "{} ingested successfully!",
                    list_name
                )));
                self.begin_load()
            }
            Err(err) => {
                log::warn!("{}: ingest failed: {}", self.meta().key, err);
                self.alert = Some(Alert::danger(format!(
                    "Error ingesting {}.",
                    list_name.to_lowercase()
                )));
                None
            }
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}
