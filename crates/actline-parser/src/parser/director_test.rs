use super::{director_event_from_fields, DirectorUpdateCommand};
use crate::events::{BarrierState, Event, Fade};
use crate::parser::ParseError;
use actline_core::FieldDecodeError;

const TS: i64 = 1_644_458_992_630;

#[test]
fn init_command_produces_instance_init() {
    let event = director_event_from_fields(TS, &["80034FB1", "40000001"])
        .expect("must decode")
        .expect("known command");
    assert_eq!(
        event,
        Event::InstanceInit {
            timestamp: TS,
            instance_id: 0x4FB1,
        }
    );
}

#[test]
fn complete_command_produces_instance_complete() {
    let event = director_event_from_fields(TS, &["80034FB1", "40000002"])
        .expect("must decode")
        .expect("known command");
    assert_eq!(
        event,
        Event::InstanceComplete {
            timestamp: TS,
            instance_id: 0x4FB1,
        }
    );
}

#[test]
fn fade_commands_carry_direction() {
    let out = director_event_from_fields(TS, &["80034FB1", "40000005"])
        .expect("must decode")
        .expect("known command");
    assert_eq!(
        out,
        Event::InstanceFade {
            timestamp: TS,
            instance_id: 0x4FB1,
            state: Fade::Out,
        }
    );

    let fade_in = director_event_from_fields(TS, &["80034FB1", "40000006"])
        .expect("must decode")
        .expect("known command");
    assert_eq!(
        fade_in,
        Event::InstanceFade {
            timestamp: TS,
            instance_id: 0x4FB1,
            state: Fade::In,
        }
    );
}

#[test]
fn barrier_commands_carry_state() {
    let up = director_event_from_fields(TS, &["80034FB1", "40000010"])
        .expect("must decode")
        .expect("known command");
    assert_eq!(
        up,
        Event::BarrierToggle {
            timestamp: TS,
            instance_id: 0x4FB1,
            state: BarrierState::Up,
        }
    );

    let down = director_event_from_fields(TS, &["80034FB1", "40000012"])
        .expect("must decode")
        .expect("known command");
    assert_eq!(
        down,
        Event::BarrierToggle {
            timestamp: TS,
            instance_id: 0x4FB1,
            state: BarrierState::Down,
        }
    );
}

#[test]
fn instance_id_is_the_low_half_of_the_packed_field() {
    let event = director_event_from_fields(TS, &["77770001", "40000001"])
        .expect("must decode")
        .expect("known command");
    assert_eq!(
        event,
        Event::InstanceInit {
            timestamp: TS,
            instance_id: 1,
        }
    );
}

#[test]
fn unknown_command_is_skipped_not_failed() {
    let outcome = director_event_from_fields(TS, &["80034FB1", "40000099"]).expect("must decode");
    assert_eq!(outcome, None);

    let far_outside = director_event_from_fields(TS, &["80034FB1", "DEADBEEF"]).expect("must decode");
    assert_eq!(far_outside, None);
}

#[test]
fn malformed_hex_surfaces_field_error() {
    let error = director_event_from_fields(TS, &["NOTHEX01", "40000001"]).expect_err("must fail");
    assert!(matches!(
        error,
        ParseError::Field(FieldDecodeError::NotHex { .. })
    ));

    let error = director_event_from_fields(TS, &["80034FB1", "NOTHEX"]).expect_err("must fail");
    assert!(matches!(
        error,
        ParseError::Field(FieldDecodeError::NotHex { .. })
    ));
}

#[test]
fn missing_fields_are_reported_by_index() {
    let error = director_event_from_fields(TS, &["80034FB1"]).expect_err("must fail");
    assert_eq!(error, ParseError::MissingField { index: 1 });

    let error = director_event_from_fields(TS, &[]).expect_err("must fail");
    assert_eq!(error, ParseError::MissingField { index: 0 });
}

#[test]
fn command_lookup_covers_the_closed_set() {
    assert_eq!(
        DirectorUpdateCommand::from_code(0x4000_0001),
        Some(DirectorUpdateCommand::Init)
    );
    assert_eq!(
        DirectorUpdateCommand::from_code(0x4000_0002),
        Some(DirectorUpdateCommand::Complete)
    );
    assert_eq!(
        DirectorUpdateCommand::from_code(0x4000_0005),
        Some(DirectorUpdateCommand::FadeOut)
    );
    assert_eq!(
        DirectorUpdateCommand::from_code(0x4000_0006),
        Some(DirectorUpdateCommand::FadeIn)
    );
    assert_eq!(
        DirectorUpdateCommand::from_code(0x4000_0010),
        Some(DirectorUpdateCommand::BarrierUp)
    );
    assert_eq!(
        DirectorUpdateCommand::from_code(0x4000_0012),
        Some(DirectorUpdateCommand::BarrierDown)
    );
    assert_eq!(DirectorUpdateCommand::from_code(0x4000_0099), None);
}
