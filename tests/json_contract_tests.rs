use box_chart_maker::WidgetError;
use box_chart_maker::api::{
    Controller, FormSnapshot, WIDGET_SNAPSHOT_JSON_SCHEMA_V1, WidgetConfig, WidgetSnapshot,
};
use box_chart_maker::core::{ChartOptions, VisEngine};
use box_chart_maker::render::MarkupRegion;

#[test]
fn snapshot_contract_round_trips() {
    let controller = Controller::start(
        WidgetConfig::default(),
        MarkupRegion::default(),
        &FormSnapshot::default(),
    );

    let json = controller
        .snapshot_json_contract_v1_pretty()
        .expect("serialize contract");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["schema_version"], WIDGET_SNAPSHOT_JSON_SCHEMA_V1);
    assert_eq!(value["snapshot"]["items_len"], 36);
    assert_eq!(value["snapshot"]["options"]["vis_engine"], "html");

    let parsed = WidgetSnapshot::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(parsed, controller.snapshot());
}

#[test]
fn bare_snapshot_json_is_accepted() {
    let snapshot = WidgetSnapshot {
        options: ChartOptions::default().with_vis_engine(VisEngine::Vector),
        items_len: 0,
        last_box: 0,
        valid: true,
        error_visible: false,
        output_text: String::new(),
    };
    let json = serde_json::to_string(&snapshot).expect("serialize");
    assert_eq!(
        WidgetSnapshot::from_json_compat_str(&json).expect("parse"),
        snapshot
    );
}

#[test]
fn unknown_schema_version_is_rejected() {
    let snapshot = serde_json::to_value(WidgetSnapshot {
        options: ChartOptions::default(),
        items_len: 1,
        last_box: 1,
        valid: true,
        error_visible: false,
        output_text: String::new(),
    })
    .expect("to value");
    let payload = serde_json::json!({ "schema_version": 2, "snapshot": snapshot });

    let result = WidgetSnapshot::from_json_compat_str(&payload.to_string());
    assert!(matches!(result, Err(WidgetError::InvalidData(message)) if message.contains("2")));
}

#[test]
fn non_numeric_schema_version_is_rejected() {
    let payload = serde_json::json!({ "schema_version": "1", "snapshot": {} });

    let result = WidgetSnapshot::from_json_compat_str(&payload.to_string());
    assert!(
        matches!(result, Err(WidgetError::InvalidData(message)) if message.contains("schema version"))
    );
}

#[test]
fn snapshot_of_failed_startup_reports_banner() {
    let mut form = FormSnapshot::default();
    form.vis_engine = "Raphael".to_owned();
    let controller = Controller::start(WidgetConfig::default(), MarkupRegion::default(), &form);

    let snapshot = controller.snapshot();
    assert!(snapshot.error_visible);
    assert_eq!(snapshot.items_len, 0);
    assert_eq!(snapshot.options.vis_engine, VisEngine::Vector);
    assert!(snapshot.output_text.is_empty());
}

#[test]
fn widget_config_fills_defaults() {
    let config: WidgetConfig =
        serde_json::from_str(r#"{"chart_options":{"dom_id":"votes"}}"#).expect("config json");
    assert_eq!(config.chart_options.dom_id, "votes");
    assert_eq!(config.chart_options.row_length, 10);
    assert_eq!(config.validation_message, "There is a problem with your input.");
    assert!(config.validate_on_change);
}
