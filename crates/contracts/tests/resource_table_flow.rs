//! End-to-end controller flows against a scripted API

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use contracts::domain::ResourceKind;
use contracts::shared::api_error::ApiError;
use contracts::shared::metadata::{NaturalKey, ResourceMetadata};
use contracts::shared::record::Record;
use contracts::shared::resource_table::{
    dispatch, drive, Alert, AlertKind, LoadState, ResourceApi, ResourceTableState,
};
use futures::executor::block_on;
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq)]
enum Seen {
    List(&'static str),
    Create(&'static str, Value),
    Update(&'static str, Value),
    Delete(&'static str, Value),
    Ingest(&'static str),
}

/// Answers lists from `lists` and mutations from `acks`, in order
#[derive(Default)]
struct ScriptedApi {
    lists: RefCell<VecDeque<Result<Vec<Record>, ApiError>>>,
    acks: RefCell<VecDeque<Result<(), ApiError>>>,
    seen: RefCell<Vec<Seen>>,
}

impl ScriptedApi {
    fn with_list(self, records: Vec<Record>) -> Self {
        self.lists.borrow_mut().push_back(Ok(records));
        self
    }

    fn with_list_error(self, err: ApiError) -> Self {
        self.lists.borrow_mut().push_back(Err(err));
        self
    }

    fn with_ack(self, ack: Result<(), ApiError>) -> Self {
        self.acks.borrow_mut().push_back(ack);
        self
    }

    fn seen(&self) -> Vec<Seen> {
        self.seen.borrow().clone()
    }

    fn list_calls(&self) -> usize {
        self.seen
            .borrow()
            .iter()
            .filter(|s| matches!(s, Seen::List(_)))
            .count()
    }

    fn next_ack(&self) -> Result<(), ApiError> {
        self.acks
            .borrow_mut()
            .pop_front()
            .expect("unscripted mutation")
    }
}

#[async_trait(?Send)]
impl ResourceApi for ScriptedApi {
    async fn list(&self, meta: &'static ResourceMetadata) -> Result<Vec<Record>, ApiError> {
        self.seen.borrow_mut().push(Seen::List(meta.endpoints.list));
        self.lists
            .borrow_mut()
            .pop_front()
            .expect("unscripted list call")
    }

    async fn create(&self, meta: &'static ResourceMetadata, payload: &Value) -> Result<(), ApiError> {
        self.seen
            .borrow_mut()
            .push(Seen::Create(meta.endpoints.create, payload.clone()));
        self.next_ack()
    }

    async fn update(&self, meta: &'static ResourceMetadata, payload: &Value) -> Result<(), ApiError> {
        self.seen
            .borrow_mut()
            .push(Seen::Update(meta.endpoints.update, payload.clone()));
        self.next_ack()
    }

    async fn delete(&self, meta: &'static ResourceMetadata, body: &Value) -> Result<(), ApiError> {
        self.seen
            .borrow_mut()
            .push(Seen::Delete(meta.endpoints.delete, body.clone()));
        self.next_ack()
    }

    async fn ingest(&self, meta: &'static ResourceMetadata) -> Result<(), ApiError> {
        self.seen.borrow_mut().push(Seen::Ingest(meta.endpoints.ingest));
        self.next_ack()
    }
}

fn record(value: Value) -> Record {
    Record::from_value(value).unwrap()
}

fn fertilizers() -> Vec<Record> {
    vec![
        record(json!({"fertilizer_name": "Urea", "n_content": 0.46, "p_content": null, "k_content": null, "f_type": "Synthetic fertilizer"})),
        record(json!({"fertilizer_name": "DAP", "n_content": 0.18, "p_content": 0.46, "k_content": null, "f_type": "Synthetic fertilizer"})),
    ]
}

fn mounted(kind: ResourceKind, api: &ScriptedApi) -> RefCell<ResourceTableState> {
    let cell = RefCell::new(ResourceTableState::new(kind));
    block_on(drive(api, &cell, |s| s.begin_load()));
    cell
}

#[test]
fn test_mount_loads_list() {
    let api = ScriptedApi::default().with_list(fertilizers());
    let cell = mounted(ResourceKind::Fertilizer, &api);

    let state = cell.borrow();
    assert_eq!(state.load, LoadState::Loaded);
    assert_eq!(state.records.len(), 2);
    assert_eq!(api.seen(), vec![Seen::List("/get_fertilizers")]);
}

#[test]
fn test_mount_failure_is_reported() {
    let api = ScriptedApi::default().with_list_error(ApiError::Network("offline".into()));
    let cell = mounted(ResourceKind::SeedlingCost, &api);

    let state = cell.borrow();
    assert_eq!(state.load, LoadState::Failed("Failed to load seedling costs.".into()));
    assert!(state.records.is_empty());
    assert!(state.alert.is_none());
}

#[test]
fn test_search_scenario() {
    let api = ScriptedApi::default().with_list(vec![
        record(json!({"fertilizer_name": "Urea", "price": 12.5})),
        record(json!({"fertilizer_name": "DAP", "price": 20})),
    ]);
    let cell = mounted(ResourceKind::Fertilizer, &api);
    cell.borrow_mut().set_search_term("ur");

    let state = cell.borrow();
    let visible = state.visible_records();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].text("fertilizer_name"), "Urea");
    assert_eq!(visible[0].text("price"), "12.5");
    assert_eq!(api.list_calls(), 1);
}

#[test]
fn test_successful_create_refetches_once_and_closes() {
    let mut updated = fertilizers();
    updated.push(record(json!({"fertilizer_name": "Compost", "f_type": "Organic fertilizer"})));
    let api = ScriptedApi::default()
        .with_list(fertilizers())
        .with_ack(Ok(()))
        .with_list(updated);
    let cell = mounted(ResourceKind::Fertilizer, &api);

    {
        let mut state = cell.borrow_mut();
        state.open_add();
        state.set_field("fertilizer_name", "Compost");
        state.set_field("f_type", "Organic fertilizer");
    }
    block_on(drive(&api, &cell, |s| s.begin_submit()));

    let state = cell.borrow();
    assert_eq!(
        api.seen(),
        vec![
            Seen::List("/get_fertilizers"),
            Seen::Create(
                "/add_fertilizer",
                json!({
                    "fertilizer_name": "Compost",
                    "n_content": null,
                    "p_content": null,
                    "k_content": null,
                    "f_type": "Organic fertilizer"
                })
            ),
            Seen::List("/get_fertilizers"),
        ]
    );
    assert!(!state.modal_open);
    assert_eq!(state.records.len(), 3);
    assert_eq!(state.alert, Some(Alert::success("Fertilizer added successfully!")));
}

#[test]
fn test_failed_create_keeps_modal_and_draft() {
    let api = ScriptedApi::default()
        .with_list(fertilizers())
        .with_ack(Err(ApiError::Status(500)));
    let cell = mounted(ResourceKind::Fertilizer, &api);

    {
        let mut state = cell.borrow_mut();
        state.open_add();
        state.set_field("fertilizer_name", "Compost");
        state.set_field("n_content", "0.02");
        state.set_field("f_type", "Organic fertilizer");
    }
    let draft_before = cell.borrow().draft.clone();
    let records_before = cell.borrow().records.clone();

    block_on(drive(&api, &cell, |s| s.begin_submit()));

    let state = cell.borrow();
    assert_eq!(state.alert, Some(Alert::danger("Error adding fertilizer.")));
    assert!(state.modal_open);
    assert_eq!(state.draft, draft_before);
    assert_eq!(state.records, records_before);
    assert_eq!(api.list_calls(), 1);
    assert!(state.in_flight.submit.is_none());
}

#[test]
fn test_update_sends_seeded_draft() {
    let api = ScriptedApi::default()
        .with_list(fertilizers())
        .with_ack(Ok(()))
        .with_list(fertilizers());
    let cell = mounted(ResourceKind::Fertilizer, &api);

    {
        let mut state = cell.borrow_mut();
        let dap = state.records[1].clone();
        state.open_update(&dap);
        state.set_field("k_content", "0");
    }
    block_on(drive(&api, &cell, |s| s.begin_submit()));

    assert_eq!(
        api.seen()[1],
        Seen::Update(
            "/update_fertilizer",
            json!({
                "fertilizer_name": "DAP",
                "n_content": 0.18,
                "p_content": 0.46,
                "k_content": 0,
                "f_type": "Synthetic fertilizer"
            })
        )
    );
    assert_eq!(
        cell.borrow().alert,
        Some(Alert::success("Fertilizer updated successfully!"))
    );
}

#[test]
fn test_delete_closes_and_clears_either_way() {
    for (ack, expected_lists) in [(Ok(()), 2), (Err(ApiError::Status(404)), 1)] {
        let ok = ack.is_ok();
        let api = ScriptedApi::default()
            .with_list(fertilizers())
            .with_ack(ack)
            .with_list(fertilizers());
        let cell = mounted(ResourceKind::Fertilizer, &api);

        {
            let mut state = cell.borrow_mut();
            let urea = state.records[0].clone();
            state.open_delete(&urea);
        }
        block_on(drive(&api, &cell, |s| s.begin_delete()));

        let state = cell.borrow();
        assert!(!state.delete_modal_open);
        assert!(state.selection.is_none());
        assert_eq!(api.list_calls(), expected_lists);
        assert_eq!(
            api.seen()[1],
            Seen::Delete("/delete_fertilizer", json!({"fertilizer_name": "Urea"}))
        );
        let kind = state.alert.as_ref().map(|a| a.kind);
        assert_eq!(kind, Some(if ok { AlertKind::Success } else { AlertKind::Danger }));
    }
}

/// A row holding only the fields that address it
fn keyed_row(meta: &ResourceMetadata) -> Record {
    let mut row = serde_json::Map::new();
    match &meta.natural_key {
        NaturalKey::Field(name) => {
            row.insert(name.to_string(), json!("key-1"));
        }
        NaturalKey::Composite { parts, .. } => {
            for (i, part) in parts.iter().enumerate() {
                row.insert(part.to_string(), json!(format!("part{}", i)));
            }
        }
    }
    record(Value::Object(row))
}

#[test]
fn test_delete_closes_and_clears_for_every_kind() {
    for kind in ResourceKind::ALL {
        let meta = kind.metadata();
        let row = keyed_row(meta);
        let key = row
            .natural_key(&meta.natural_key)
            .unwrap_or_else(|| panic!("{:?} row has no key", kind));

        for ack in [Ok(()), Err(ApiError::Network("offline".into()))] {
            let ok = ack.is_ok();
            let api = ScriptedApi::default()
                .with_list(vec![row.clone()])
                .with_ack(ack)
                .with_list(vec![]);
            let cell = mounted(kind, &api);

            cell.borrow_mut().open_delete(&row);
            block_on(drive(&api, &cell, |s| s.begin_delete()));

            let state = cell.borrow();
            assert!(!state.delete_modal_open, "{:?}", kind);
            assert!(state.selection.is_none(), "{:?}", kind);
            assert_eq!(
                api.seen()[1],
                Seen::Delete(meta.endpoints.delete, json!({ (meta.natural_key.target()): key })),
                "{:?}",
                kind
            );
            assert_eq!(api.list_calls(), if ok { 2 } else { 1 }, "{:?}", kind);
            let expected = if ok {
                Alert::success(format!("{} deleted successfully!", meta.ui.element_name))
            } else {
                Alert::danger(format!("Error deleting {}.", meta.ui.element_name.to_lowercase()))
            };
            assert_eq!(state.alert, Some(expected), "{:?}", kind);
        }
    }
}

#[test]
fn test_survey_master_delete_uses_derived_id() {
    let row = record(json!({
        "survey_origin": "Uganda",
        "survey_coffee_type": "Robusta",
        "survey_supply_chain": "Direct",
        "survey_year": "2023"
    }));
    let api = ScriptedApi::default()
        .with_list(vec![row.clone()])
        .with_ack(Ok(()))
        .with_list(vec![]);
    let cell = mounted(ResourceKind::SurveyMaster, &api);

    cell.borrow_mut().open_delete(&row);
    block_on(drive(&api, &cell, |s| s.begin_delete()));

    assert_eq!(
        api.seen()[1],
        Seen::Delete(
            "/delete_survey_master_data",
            json!({"survey_id": "Uganda_2023_Robusta_Direct"})
        )
    );
    assert!(cell.borrow().records.is_empty());
}

#[test]
fn test_ingest_success_fetches_exactly_once() {
    let api = ScriptedApi::default()
        .with_list(vec![])
        .with_ack(Ok(()))
        .with_list(fertilizers());
    let cell = mounted(ResourceKind::Fertilizer, &api);

    block_on(drive(&api, &cell, |s| s.begin_ingest()));

    let state = cell.borrow();
    assert_eq!(api.list_calls(), 2);
    assert_eq!(
        api.seen()[1..],
        [Seen::Ingest("/ingest_fertilizers"), Seen::List("/get_fertilizers")]
    );
    assert_eq!(state.alert, Some(Alert::success("Fertilizers ingested successfully!")));
    assert_eq!(state.records.len(), 2);
}

#[test]
fn test_ingest_failure_keeps_list() {
    let api = ScriptedApi::default()
        .with_list(fertilizers())
        .with_ack(Err(ApiError::Unauthorized));
    let cell = mounted(ResourceKind::Fertilizer, &api);

    block_on(drive(&api, &cell, |s| s.begin_ingest()));

    let state = cell.borrow();
    assert_eq!(state.alert, Some(Alert::danger("Error ingesting fertilizers.")));
    assert_eq!(state.records, fertilizers());
    assert_eq!(api.list_calls(), 1);
}

#[test]
fn test_dispatch_runs_explicit_call() {
    let api = ScriptedApi::default().with_list(fertilizers());
    let cell = RefCell::new(ResourceTableState::new(ResourceKind::Fertilizer));

    let call = cell.borrow_mut().begin_load().unwrap();
    block_on(dispatch(&api, &cell, call));
    assert_eq!(cell.borrow().records.len(), 2);
}
