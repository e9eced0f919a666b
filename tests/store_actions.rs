mod common;

use carelog::checklist::{Action, ActionError, ItemType};
use serde_json::json;

#[test]
fn none_state_starts_from_initial_snapshot() {
    let store = common::default_store();
    let next = store.reduce(None, &Action::new("setProgress")).unwrap();
    assert_eq!(next.progress_index(), 1);
    assert_eq!(next.items, store.initial_state().items);
}

#[test]
fn unknown_action_is_identity() {
    let store = common::default_store();
    let mut state = store.initial_state().clone();
    state.started.is_selected = true;

    for kind in ["@ngrx/store/init", "", "SetProgress", "resetEverything"] {
        let next = store
            .reduce(Some(state.clone()), &Action::new(kind))
            .unwrap();
        assert_eq!(next, state, "action '{kind}' changed the state");
    }
}

#[test]
fn dispatching_json_actions() {
    let mut store = common::default_store();

    let action = Action::from_json(r#"{"type":"setItemType","itemType":"carePlan"}"#).unwrap();
    let state = store.dispatch_action(&action).unwrap();
    assert_eq!(state.item_type, ItemType::CarePlan);

    store.dispatch_action(&Action::new("addItem")).unwrap();
    assert_eq!(store.state().items.len(), 3);
    let added = store.state().items[2].clone();
    assert_eq!(added.id.as_str(), "item-3");

    let remove = Action::new("removeItem").with("itemToRemove", json!({ "id": added.id }));
    store.dispatch_action(&remove).unwrap();
    assert_eq!(store.state().items, store.initial_state().items);
}

#[test]
fn set_item_checked_via_action() {
    let mut store = common::default_store();
    let first = store.state().items[0].clone();

    let action =
        Action::new("setItemChecked").with("checkedItem", serde_json::to_value(&first).unwrap());
    let state = store.dispatch_action(&action).unwrap();

    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].id, first.id);
    assert!(state.items[1].is_checked);
}

#[test]
fn missing_id_fails_fast_and_keeps_state() {
    let mut store = common::default_store();
    let before = store.state().clone();

    let action = Action::new("removeItem").with("itemToRemove", json!({ "title": "Shower" }));
    let err = store.dispatch_action(&action).unwrap_err();
    assert!(matches!(
        err,
        ActionError::InvalidPayload {
            action: "removeItem",
            field: "itemToRemove",
            ..
        }
    ));
    assert_eq!(store.state(), &before);
}

#[test]
fn uuid_strategy_generates_distinct_ids() {
    let mut config = carelog::config::Config::default();
    config.items.id_strategy = carelog::config::IdStrategy::Uuid;
    let mut store =
        carelog::store::Store::from_config(&config, common::startup_instant()).unwrap();

    store.dispatch_action(&Action::new("addItem")).unwrap();
    let ids: Vec<&str> = store.state().items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids.len(), 3);
    assert_ne!(ids[0], ids[1]);
    assert_ne!(ids[1], ids[2]);
    assert_ne!(ids[0], ids[2]);
}

#[test]
fn state_serializes_for_view() {
    let store = common::default_store();
    let json = serde_json::to_value(store.state()).unwrap();
    assert_eq!(json["progressIndex"], 0);
    assert_eq!(json["currentDate"], "Monday, 19 October");
    assert_eq!(json["started"]["time"], "09-30 AM");
    assert_eq!(json["finished"]["time"], "10-30 AM");
    assert_eq!(json["items"].as_array().unwrap().len(), 2);
}
