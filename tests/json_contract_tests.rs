use chart_bootstrap::api::CHART_CONFIG_JSON_SCHEMA_V1;
use chart_bootstrap::host::StaticDocument;
use chart_bootstrap::{ChartBootstrap, ChartConfig, ChartError};
use serde_json::Value;

fn sample_config() -> ChartConfig {
    let doc = StaticDocument::for_chart("['Jan','Feb']", "[10.5,20]");
    ChartBootstrap::default()
        .build_config(&doc)
        .expect("build config")
}

#[test]
fn payload_uses_renderer_field_names() {
    let json = sample_config().to_json_pretty().expect("serialize");
    let value: Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["type"], "line");
    assert_eq!(value["data"]["labels"], serde_json::json!(["Jan", "Feb"]));
    assert_eq!(value["data"]["datasets"][0]["data"], serde_json::json!([10.5, 20.0]));
    assert_eq!(value["options"]["responsive"], true);
    assert_eq!(value["options"]["plugins"]["legend"]["display"], false);
    assert_eq!(value["options"]["plugins"]["title"]["display"], false);
    assert_eq!(value["options"]["scales"]["y"]["ticks"]["suffix"], "€");
}

#[test]
fn contract_v1_wraps_payload_with_schema_version() {
    let config = sample_config();
    let json = config.to_json_contract_v1_pretty().expect("serialize");
    let value: Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["schema_version"], CHART_CONFIG_JSON_SCHEMA_V1);
    assert_eq!(value["config"]["type"], "line");

    let parsed = ChartConfig::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(parsed, config);
}

#[test]
fn compat_parser_accepts_bare_payload() {
    let config = sample_config();
    let json = config.to_json_pretty().expect("serialize");

    let parsed = ChartConfig::from_json_compat_str(&json).expect("parse bare payload");
    assert_eq!(parsed, config);
    assert_eq!(parsed.format_y_tick(42.0), "42€");
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let json = sample_config()
        .to_json_contract_v1_pretty()
        .expect("serialize")
        .replace("\"schema_version\": 1", "\"schema_version\": 7");

    match ChartConfig::from_json_compat_str(&json) {
        Err(ChartError::InvalidData(message)) => {
            assert!(message.contains("unsupported chart config schema version"));
        }
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[test]
fn payload_with_two_datasets_is_rejected() {
    let json = r#"{
        "type": "line",
        "data": { "labels": [], "datasets": [{ "data": [] }, { "data": [] }] },
        "options": {
            "responsive": true,
            "plugins": { "legend": { "display": false }, "title": { "display": false } },
            "scales": { "y": { "ticks": { "suffix": "€" } } }
        }
    }"#;

    assert!(matches!(
        ChartConfig::from_json_compat_str(json),
        Err(ChartError::InvalidData(_))
    ));
}

#[test]
fn unknown_chart_kind_is_rejected() {
    let json = sample_config()
        .to_json_pretty()
        .expect("serialize")
        .replace("\"line\"", "\"pie\"");

    assert!(ChartConfig::from_json_compat_str(&json).is_err());
}
