use crate::error::CoreReason;
use crate::event::{DutyStatus, DutyStatusEvent, EventOrigin};

use super::{Segment, build_segments};

const MIN: i64 = 60_000;

fn ev(minute: i64, status: DutyStatus) -> DutyStatusEvent {
    DutyStatusEvent::new("D-1", minute * MIN, status, EventOrigin::Eld)
}

fn seg(from_min: i64, to_min: i64, status: DutyStatus) -> Segment {
    Segment::new(from_min * MIN, to_min * MIN, status)
}

#[test]
fn empty_events_build_nothing() {
    assert!(build_segments(&[], 1_000 * MIN).unwrap().is_empty());
}

#[test]
fn segments_chain_to_as_of() {
    let events = vec![
        ev(0, DutyStatus::OnDuty),
        ev(30, DutyStatus::Driving),
        ev(150, DutyStatus::OffDuty),
    ];
    let segments = build_segments(&events, 200 * MIN).unwrap();
    assert_eq!(
        segments,
        vec![
            seg(0, 30, DutyStatus::OnDuty),
            seg(30, 150, DutyStatus::Driving),
            seg(150, 200, DutyStatus::OffDuty),
        ]
    );
}

#[test]
fn events_after_as_of_are_excluded() {
    let events = vec![
        ev(0, DutyStatus::Driving),
        ev(100, DutyStatus::OffDuty),
        ev(300, DutyStatus::Driving),
    ];
    let segments = build_segments(&events, 60 * MIN).unwrap();
    assert_eq!(segments, vec![seg(0, 60, DutyStatus::Driving)]);
}

#[test]
fn event_exactly_at_as_of_contributes_nothing() {
    let events = vec![ev(0, DutyStatus::Driving), ev(60, DutyStatus::OffDuty)];
    let segments = build_segments(&events, 60 * MIN).unwrap();
    assert_eq!(segments, vec![seg(0, 60, DutyStatus::Driving)]);
}

#[test]
fn same_timestamp_later_event_wins() {
    let events = vec![
        ev(0, DutyStatus::OnDuty),
        ev(0, DutyStatus::Driving),
        ev(90, DutyStatus::OffDuty),
    ];
    let segments = build_segments(&events, 120 * MIN).unwrap();
    assert_eq!(
        segments,
        vec![
            seg(0, 90, DutyStatus::Driving),
            seg(90, 120, DutyStatus::OffDuty),
        ]
    );
}

#[test]
fn out_of_order_fails_before_building() {
    let events = vec![
        ev(0, DutyStatus::OnDuty),
        ev(60, DutyStatus::Driving),
        ev(30, DutyStatus::OffDuty),
    ];
    let err = build_segments(&events, 120 * MIN).unwrap_err();
    assert_eq!(*err.reason(), CoreReason::InvalidOrder);
}

#[test]
fn out_of_order_after_as_of_still_rejected() {
    let events = vec![
        ev(0, DutyStatus::OnDuty),
        ev(500, DutyStatus::Driving),
        ev(400, DutyStatus::OffDuty),
    ];
    let err = build_segments(&events, 60 * MIN).unwrap_err();
    assert_eq!(*err.reason(), CoreReason::InvalidOrder);
}

#[test]
fn negative_as_of_rejected() {
    let err = build_segments(&[ev(0, DutyStatus::OnDuty)], -1).unwrap_err();
    assert_eq!(*err.reason(), CoreReason::InvalidTimestamp);
}

#[test]
fn negative_event_timestamp_rejected() {
    let events = vec![DutyStatusEvent::new(
        "D-1",
        -MIN,
        DutyStatus::OnDuty,
        EventOrigin::Manual,
    )];
    let err = build_segments(&events, MIN).unwrap_err();
    assert_eq!(*err.reason(), CoreReason::InvalidTimestamp);
}

#[test]
fn clip_to_window() {
    let s = seg(10, 50, DutyStatus::OnDuty);
    assert_eq!(s.clip(20 * MIN, 100 * MIN), Some(seg(20, 50, DutyStatus::OnDuty)));
    assert_eq!(s.clip(50 * MIN, 100 * MIN), None);
    assert_eq!(s.duration_ms(), 40 * MIN);
}
