use chrono::{TimeZone, Utc};
use moelog::{Callsite, ExtraField, Formatter, Level, LogRecord, StructuredFormatter};
use serde_json::Value;

fn record() -> LogRecord {
    let mut rec = LogRecord::new(
        Level::ERROR,
        "billing",
        Callsite::new("charge", 88),
        "card {} declined",
    )
    .with_args(vec!["4242".into()]);
    rec.timestamp = Utc.with_ymd_and_hms(2023, 2, 17, 23, 16, 41).unwrap()
        + chrono::Duration::milliseconds(220);
    rec
}

fn keys(json: &str) -> Vec<String> {
    let value: Value = serde_json::from_str(json).unwrap();
    value.as_object().unwrap().keys().cloned().collect()
}

#[test]
fn canonical_fields() {
    let json = StructuredFormatter::default().format(&record());
    let value: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["@timestamp"], "2023-02-17T23:16:41.220Z");
    assert_eq!(value["log.level"], "ERROR");
    assert_eq!(value["message"], "[billing | charge | LN88]: card 4242 declined");
    assert_eq!(keys(&json), vec!["@timestamp", "log.level", "message"]);
}

#[test]
fn extra_fields_follow_in_declared_order() {
    let formatter = StructuredFormatter::new([
        ExtraField::new("service", "svc_name"),
        ExtraField::new("app.name", "app_name"),
        ExtraField::new("region", "region"),
    ]);
    let rec = record()
        .with_attribute("svc_name", "payments")
        .with_attribute("region", "eu-west-1");

    let json = formatter.format(&rec);
    let value: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(
        keys(&json),
        vec!["@timestamp", "log.level", "message", "service", "app.name", "region"]
    );
    assert_eq!(value["service"], "payments");
    assert_eq!(value["region"], "eu-west-1");
}

#[test]
fn missing_attribute_is_empty_string() {
    let formatter = StructuredFormatter::new([ExtraField::new("service", "svc_name")]);
    let value: Value = serde_json::from_str(&formatter.format(&record())).unwrap();
    assert_eq!(value["service"], Value::String(String::new()));
}

#[test]
fn fields_without_source_are_skipped() {
    let formatter = StructuredFormatter::new([
        ExtraField::new("ignored", ""),
        ExtraField::new("kept", "k"),
    ]);
    assert_eq!(formatter.fields().len(), 1);
    let json = formatter.format(&record());
    assert_eq!(keys(&json), vec!["@timestamp", "log.level", "message", "kept"]);
}

#[test]
fn output_is_single_line() {
    let rec = LogRecord::new(Level::INFO, "root", Callsite::new("main", 1), "line one\nline two");
    let json = StructuredFormatter::default().format(&rec);
    assert!(!json.contains('\n'));
    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["message"], "[root | main | LN1]: line one\nline two");
}

#[test]
fn leading_field_sits_after_timestamp() {
    let formatter = StructuredFormatter::new([
        ExtraField::new("service", "svc_name"),
        ExtraField::new("app.name", "ignored"),
    ])
    .leading_field(ExtraField::new("app.name", "app_name"));
    let rec = record().with_attribute("app_name", "shop");

    let json = formatter.format(&rec);
    assert_eq!(
        keys(&json),
        vec!["@timestamp", "app.name", "log.level", "message", "service"]
    );
    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["app.name"], "shop");
}
