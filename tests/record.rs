//! Tests for turning call arguments into a record.

use aglog::{LogLevel, shape, shape_at};
use chrono::{TimeZone, Utc};
use serde_json::json;

fn fixed_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 14, 30, 0).unwrap()
}

#[test]
fn primitives_join_and_structures_stay_structured() {
    let record = shape(LogLevel::INFO, &[json!("a"), json!(1), json!({"x": 1})]);
    assert_eq!(record.message(), "a 1");
    assert_eq!(record.args(), &[json!({"x": 1})]);
    assert_eq!(record.level(), LogLevel::INFO);
}

#[test]
fn primitives_are_trimmed() {
    let record = shape_at(
        LogLevel::WARN,
        &[json!("  padded  "), json!(true), json!(" "), json!(2.5)],
        fixed_now(),
    );
    assert_eq!(record.message(), "padded true 2.5");
}

#[test]
fn blank_pieces_are_dropped_from_the_join() {
    let record = shape_at(
        LogLevel::INFO,
        &[json!("a"), json!(""), json!("   "), json!("b")],
        fixed_now(),
    );
    assert_eq!(record.message(), "a b");
}

#[test]
fn whole_floats_render_like_integers() {
    let record = shape_at(
        LogLevel::INFO,
        &[json!("a"), json!(""), json!("b"), json!(1.0)],
        fixed_now(),
    );
    assert_eq!(record.message(), "a b 1");

    let record = shape_at(
        LogLevel::INFO,
        &[json!(-3.0), json!(-0.0), json!(0.25), json!(-7), json!(u64::MAX)],
        fixed_now(),
    );
    assert_eq!(record.message(), "-3 0 0.25 -7 18446744073709551615");
}

#[test]
fn structured_args_keep_call_order() {
    let record = shape_at(
        LogLevel::DEBUG,
        &[json!([1, 2]), json!("mid"), json!(null), json!({"k": "v"})],
        fixed_now(),
    );
    assert_eq!(record.message(), "mid");
    assert_eq!(record.args(), &[json!([1, 2]), json!(null), json!({"k": "v"})]);
}

#[test]
fn leading_timestamp_is_consumed() {
    let record = shape_at(
        LogLevel::INFO,
        &[json!("2024-03-01T12:00:00Z"), json!("started")],
        fixed_now(),
    );
    assert_eq!(
        record.timestamp(),
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    );
    assert_eq!(record.message(), "started");
}

#[test]
fn offsetless_and_date_only_timestamps_are_utc() {
    let record = shape_at(LogLevel::INFO, &[json!("2024-03-01 08:15:00")], fixed_now());
    assert_eq!(
        record.timestamp(),
        Utc.with_ymd_and_hms(2024, 3, 1, 8, 15, 0).unwrap()
    );
    assert_eq!(record.message(), "");

    let record = shape_at(LogLevel::INFO, &[json!("2024-03-01")], fixed_now());
    assert_eq!(
        record.timestamp(),
        Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
    );
}

#[test]
fn non_date_first_argument_uses_clock() {
    let record = shape_at(LogLevel::INFO, &[json!("hello"), json!("world")], fixed_now());
    assert_eq!(record.timestamp(), fixed_now());
    assert_eq!(record.message(), "hello world");
}

#[test]
fn only_first_argument_is_a_timestamp_candidate() {
    let record = shape_at(
        LogLevel::INFO,
        &[json!("at"), json!("2024-03-01T12:00:00Z")],
        fixed_now(),
    );
    assert_eq!(record.timestamp(), fixed_now());
    assert_eq!(record.message(), "at 2024-03-01T12:00:00Z");
}

#[test]
fn shaping_is_deterministic_with_fixed_clock() {
    let args = [json!("x"), json!({"y": [1, 2]})];
    assert_eq!(
        shape_at(LogLevel::Log, &args, fixed_now()),
        shape_at(LogLevel::Log, &args, fixed_now())
    );
}

#[test]
fn empty_call_gives_empty_record() {
    let record = shape_at(LogLevel::Verbose, &[], fixed_now());
    assert_eq!(record.message(), "");
    assert!(record.args().is_empty());
    assert_eq!(record.level(), LogLevel::Verbose);
}
