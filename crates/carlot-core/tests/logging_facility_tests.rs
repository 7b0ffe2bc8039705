#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use carlot_core::errors::CarLotError;
use carlot_core::logging_facility::test_capture::{init_test_capture, Phase};
use carlot_core::{log_op_end, log_op_error, log_op_start, CarCollection, VehicleProps};
use common::{corolla_props, toyota_store};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, vehicle_id = "v-start");

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].phase, Some(Phase::Start));
    assert_eq!(events[0].vehicle_id.as_deref(), Some("v-start"));
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.phase == Some(Phase::End))
        .collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].duration_ms, Some(42));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = CarLotError::VehicleNotFound {
        vehicle_id: "v1".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let error_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.phase == Some(Phase::EndError))
        .collect();

    assert_eq!(error_events.len(), 1, "Should have exactly one error event");
    assert_eq!(error_events[0].err_code.as_deref(), Some("ERR_NOT_FOUND"));
    assert_eq!(error_events[0].level, tracing::Level::ERROR);
}

// The facade ops share names across tests, so the assertions below key on the
// vehicle id each test creates or targets.

#[test]
fn test_facade_add_logs_start_and_end_with_vehicle_id() {
    let capture = init_test_capture();
    let mut cars = CarCollection::new(toyota_store());

    let new_id = cars.add(corolla_props(15000, 2018)).unwrap();

    let ends: Vec<_> = capture
        .events_for_vehicle("vehicle_add", &new_id)
        .into_iter()
        .filter(|e| e.phase == Some(Phase::End))
        .collect();
    assert_eq!(ends.len(), 1);
    assert!(ends[0].duration_ms.is_some());
    capture.assert_event_exists("vehicle_add", Phase::Start);
}

#[test]
fn test_facade_failed_update_logs_end_error() {
    let capture = init_test_capture();
    let mut cars = CarCollection::new(toyota_store());

    let result = cars.update("v1", VehicleProps::new("b1", "model-for-log-test", 1, 2000));
    assert!(result.is_err());

    let errors = capture.count_events(|e| {
        e.op == "vehicle_update"
            && e.phase == Some(Phase::EndError)
            && e.err_code.as_deref() == Some("ERR_NOT_FOUND")
    });
    assert!(errors >= 1, "Expected an end_error event for the failed update");
}

#[test]
fn test_delete_missing_vehicle_logs_end_not_error() {
    let capture = init_test_capture();
    let mut cars = CarCollection::new(toyota_store());

    assert!(!cars.delete_car_by_id("v-delete-missing"));

    let events = capture.events_for_vehicle("vehicle_delete", "v-delete-missing");
    let phases: Vec<_> = events.iter().map(|e| e.phase).collect();
    assert_eq!(phases, vec![Some(Phase::Start), Some(Phase::End)]);
    assert_eq!(events[1].removed, Some(false));
    assert!(events.iter().all(|e| e.err_code.is_none()));
}

#[test]
fn test_delete_existing_vehicle_logs_removed() {
    let capture = init_test_capture();
    let mut cars = CarCollection::new(toyota_store());
    let new_id = cars.add(corolla_props(9000, 2015)).unwrap();

    assert!(cars.delete_car_by_id(&new_id));

    let removed = capture.count_events(|e| {
        e.op == "vehicle_delete"
            && e.vehicle_id.as_deref() == Some(new_id.as_str())
            && e.phase == Some(Phase::End)
            && e.removed == Some(true)
    });
    assert_eq!(removed, 1);
}
