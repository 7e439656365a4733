//! End-to-end: JSONL event log → event source → compliance monitor.

use std::io::Write;

use hos_config::HosFileConfig;
use hos_core::{CoreReason, RuleId, Severity};
use hos_runtime::{
    Clock, ComplianceMonitor, EventSource, JsonlEventSource, RuntimeReason, SystemClock,
    VirtualClock,
};

const MIN: i64 = 60_000;
const BASE: i64 = 1_760_000_040_000; // minute-aligned

fn line(driver: &str, minute: i64, status: &str, origin: &str) -> String {
    format!(
        r#"{{"timestamp_ms":{},"driver_id":"{driver}","status":"{status}","origin":"{origin}"}}"#,
        BASE + minute * MIN
    )
}

fn write_log(lines: &[String]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# fixture").unwrap();
    for l in lines {
        writeln!(file, "{l}").unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn shift_with_warning_then_violation() {
    let log = write_log(&[
        line("D-7", 0, "ON_DUTY", "eld"),
        line("D-7", 30, "DRIVING", "eld"),
        line("D-7", 270, "OFF_DUTY", "manual"),
        line("D-7", 300, "DRIVING", "eld"),
        // someone else's day does not leak in
        line("D-8", 0, "DRIVING", "eld"),
    ]);
    let source = JsonlEventSource::load(log.path()).unwrap();
    assert_eq!(source.drivers().unwrap(), vec!["D-7", "D-8"]);

    let config: HosFileConfig = "[hos]\nwarning_threshold = \"30m\"\n".parse().unwrap();
    let clock = VirtualClock::starting_at(BASE);
    let monitor = ComplianceMonitor::new(config.hos, source, clock.clone()).unwrap();

    // 240 min driving, 30 min break, then 200 more: 440 driven, break counter at 200.
    clock.set(BASE + 500 * MIN);
    let status = monitor.snapshot("D-7").unwrap();
    assert_eq!(status.remaining_drive_min, 660 - 440);
    assert_eq!(status.break_required_in_min, 480 - 200);
    assert_eq!(status.remaining_duty_window_min, 840 - 500);
    assert_eq!(status.last_break_start_ms, Some(BASE + 270 * MIN));
    assert!(status.alerts.is_empty());

    // 615 min into the window: 555 driven, 105 left.
    clock.set(BASE + 615 * MIN);
    assert!(monitor.assert_compliant("D-7").is_ok());

    // 520 min since the break: past both the 11h and 8h-before-break limits.
    clock.set(BASE + 820 * MIN);
    let status = monitor.snapshot("D-7").unwrap();
    assert_eq!(status.remaining_drive_min, 0);
    assert_eq!(status.remaining_duty_window_min, 20);
    let rules: Vec<_> = status.alerts.iter().map(|a| (a.rule, a.severity)).collect();
    assert_eq!(
        rules,
        vec![
            (RuleId::Drive11, Severity::Violation),
            (RuleId::Duty14, Severity::Warning),
            (RuleId::Break30, Severity::Violation),
        ]
    );
    let err = monitor.assert_compliant("D-7").unwrap_err();
    assert_eq!(*err.reason(), RuntimeReason::Compliance);
}

#[test]
fn out_of_order_log_is_rejected_not_repaired() {
    let log = write_log(&[
        line("D-7", 60, "DRIVING", "eld"),
        line("D-7", 0, "ON_DUTY", "manual"),
    ]);
    let source = JsonlEventSource::load(log.path()).unwrap();
    let clock = VirtualClock::starting_at(BASE + 120 * MIN);
    let monitor = ComplianceMonitor::new(Default::default(), source, clock).unwrap();
    let err = monitor.assert_compliant("D-7").unwrap_err();
    assert_eq!(*err.reason(), RuntimeReason::Core(CoreReason::InvalidOrder));
}

#[test]
fn out_of_order_line_after_as_of_is_still_rejected() {
    let log = write_log(&[
        line("D-1", 0, "ON_DUTY", "eld"),
        line("D-1", 100, "DRIVING", "eld"),
        line("D-1", 50, "OFF_DUTY", "manual"),
    ]);
    let source = JsonlEventSource::load(log.path()).unwrap();
    assert_eq!(source.events_for("D-1").unwrap().len(), 3);
    let clock = VirtualClock::starting_at(BASE + 80 * MIN);
    let monitor = ComplianceMonitor::new(Default::default(), source, clock).unwrap();
    let err = monitor.assert_compliant("D-1").unwrap_err();
    assert_eq!(*err.reason(), RuntimeReason::Core(CoreReason::InvalidOrder));
}

#[test]
fn wall_clock_evaluation_of_recent_log() {
    let now = SystemClock.now_ms();
    let minute = (now - BASE) / MIN;
    let log = write_log(&[
        line("D-7", minute - 90, "ON_DUTY", "eld"),
        line("D-7", minute - 60, "DRIVING", "eld"),
    ]);
    let source = JsonlEventSource::load(log.path()).unwrap();
    let monitor = ComplianceMonitor::new(Default::default(), source, SystemClock).unwrap();
    let status = monitor.snapshot("D-7").unwrap();
    assert!(status.remaining_drive_min <= 600);
    assert!(status.is_compliant());
}

#[test]
fn restart_clears_cycle_in_event_log() {
    let log = write_log(&[
        line("D-7", 0, "ON_DUTY", "eld"),
        line("D-7", 600, "OFF_DUTY", "eld"),
        line("D-7", 1200, "SLEEPER", "eld"),
        line("D-7", 2640, "ON_DUTY", "eld"),
    ]);
    let source = JsonlEventSource::load(log.path()).unwrap();
    let clock = VirtualClock::starting_at(BASE + 2740 * MIN);
    let monitor = ComplianceMonitor::new(Default::default(), source, clock).unwrap();
    assert_eq!(monitor.clock().now_ms(), BASE + 2740 * MIN);

    let status = monitor.snapshot("D-7").unwrap();
    assert_eq!(status.cycle_used_min, 100);
    assert_eq!(status.cycle_remaining_min, 4100);
    assert!(status.is_compliant());
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(JsonlEventSource::load(dir.path().join("absent.jsonl")).is_err());
}
