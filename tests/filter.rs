use moelog::{
    AttributeFilter, Callsite, ExtraField, Handler, Level, LogRecord, MemoryOutput, MoeLogger,
    StructuredFormatter,
};
use serde_json::Value;

fn record() -> LogRecord {
    LogRecord::new(Level::WARNING, "root", Callsite::new("main", 1), "hi")
}

#[test]
fn apply_sets_attributes() {
    let filter = AttributeFilter::new([("app_name", "shop"), ("env", "prod")]);
    let mut rec = record().with_attribute("env", "dev");
    filter.apply(&mut rec);
    assert_eq!(rec.attribute("app_name"), "shop");
    assert_eq!(rec.attribute("env"), "prod");
}

#[test]
fn clones_share_values() {
    let filter = AttributeFilter::new([("app_name", "shop")]);
    let other = filter.clone();
    other.set("app_name", "store");
    assert_eq!(filter.get("app_name").as_deref(), Some("store"));
    assert!(filter.same_as(&other));
    assert!(!filter.same_as(&AttributeFilter::default()));
}

#[test]
fn handler_applies_filters_before_formatting() {
    let out = MemoryOutput::new();
    let handler = Handler::new(
        Level::DEBUG,
        StructuredFormatter::new([ExtraField::new("app", "app_name")]),
        out.clone(),
    );
    handler.add_filter(AttributeFilter::new([("app_name", "shop")]));
    handler.handle(&record()).unwrap();

    let value: Value = serde_json::from_str(&out.lines()[0]).unwrap();
    assert_eq!(value["app"], "shop");
}

#[test]
fn handler_finds_first_declaring_filter() {
    let handler = Handler::new(Level::DEBUG, StructuredFormatter::default(), MemoryOutput::new());
    let first = AttributeFilter::new([("app_name", "a")]);
    handler.add_filter(AttributeFilter::new([("env", "x")]));
    handler.add_filter(first.clone());
    handler.add_filter(AttributeFilter::new([("app_name", "b")]));

    assert!(handler.find_filter("app_name").unwrap().same_as(&first));
    assert!(handler.find_filter("missing").is_none());
}

#[test]
fn update_filter_mutates_in_place() {
    let moe = MoeLogger::builder()
        .console_output(MemoryOutput::new())
        .build()
        .unwrap();

    moe.update_filter("app_name", "X");
    moe.update_filter("app_name", "Y");

    assert_eq!(moe.filter_count(), 1);
    assert_eq!(moe.attribute("app_name").as_deref(), Some("Y"));
}

#[test]
fn update_filter_adds_new_filter_for_new_name() {
    let moe = MoeLogger::builder()
        .console_output(MemoryOutput::new())
        .build()
        .unwrap();

    moe.add_filter([("app_name", "shop"), ("env", "prod")]);
    moe.update_filter("env", "staging");
    moe.update_filter("region", "eu");

    assert_eq!(moe.filter_count(), 2);
    assert_eq!(moe.attribute("env").as_deref(), Some("staging"));
    assert_eq!(moe.attribute("region").as_deref(), Some("eu"));
}

#[test]
fn update_is_visible_to_later_records_only() {
    let out = MemoryOutput::new();
    let moe = MoeLogger::builder()
        .structured_output(true)
        .minimum_level("info")
        .extra_field("app", "app_name")
        .console_output(out.clone())
        .build()
        .unwrap();
    let log = moe.root();

    moe.update_filter("app_name", "first");
    log.info("one");
    moe.update_filter("app_name", "second");
    log.info("two");

    let apps: Vec<String> = out
        .lines()
        .iter()
        .map(|line| {
            let value: Value = serde_json::from_str(line).unwrap();
            value["app"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(apps, vec!["first", "second"]);
}
