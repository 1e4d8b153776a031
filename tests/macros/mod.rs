use rail_result::{try_outcome, Outcome};

use crate::common::*;

fn resource_id(resource: Option<FakeResource>, convertible: bool) -> Outcome<i32, PipelineError> {
    let resource = try_outcome!(get_resource(resource));
    let converted = try_outcome!(convert(resource, convertible));
    Outcome::ok(converted.id)
}

#[test]
fn try_outcome_unwraps_ok_values() {
    assert_eq!(resource_id(Some(FakeResource { id: 9 }), true), Outcome::Ok(9));
}

#[test]
fn try_outcome_returns_early_with_widened_error() {
    assert_eq!(resource_id(None, true), Outcome::Err(PipelineError::Api));
    assert_eq!(
        resource_id(Some(FakeResource { id: 9 }), false),
        Outcome::Err(PipelineError::Conversion)
    );
}

#[test]
fn try_outcome_stops_before_later_steps() {
    let probe = Probe::new();

    let run = |resource: Option<FakeResource>| -> Outcome<(), ApiError> {
        let _ = try_outcome!(get_resource(resource));
        probe.hit();
        Outcome::ok(())
    };

    assert!(run(None).is_err());
    assert_eq!(probe.calls(), 0);
    assert!(run(Some(FakeResource { id: 1 })).is_ok());
    assert_eq!(probe.calls(), 1);
}
