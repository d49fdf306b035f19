use chart_bootstrap::ChartBootstrap;
use chart_bootstrap::host::StaticDocument;
use chart_bootstrap::render::NullRenderer;
use proptest::prelude::*;

fn single_quoted(labels: &[String]) -> String {
    let items = labels
        .iter()
        .map(|label| format!("'{label}'"))
        .collect::<Vec<_>>();
    format!("[{}]", items.join(","))
}

proptest! {
    #[test]
    fn decoded_config_preserves_labels_and_values(
        labels in proptest::collection::vec("[A-Za-z0-9 .:-]{0,12}", 0..32),
        values in proptest::collection::vec(
            proptest::num::f64::NORMAL | proptest::num::f64::SUBNORMAL | proptest::num::f64::ZERO,
            0..32
        )
    ) {
        let values_text = serde_json::to_string(&values).expect("encode values");
        let doc = StaticDocument::for_chart(single_quoted(&labels), values_text);
        let mut renderer = NullRenderer::default();

        let config = ChartBootstrap::default()
            .run(&doc, &mut renderer)
            .expect("bootstrap");

        prop_assert_eq!(config.labels(), labels.as_slice());
        prop_assert_eq!(config.values(), values.as_slice());
        for (decoded, expected) in config.values().iter().zip(&values) {
            prop_assert_eq!(decoded.to_bits(), expected.to_bits());
        }
        prop_assert_eq!(renderer.last_label_count, labels.len());
        prop_assert_eq!(renderer.last_point_count, values.len());
    }

    #[test]
    fn build_config_is_idempotent(
        labels in proptest::collection::vec("[a-z]{1,6}", 0..16),
        values in proptest::collection::vec(-1_000i32..1_000, 0..16)
    ) {
        let values_text = serde_json::to_string(&values).expect("encode values");
        let doc = StaticDocument::for_chart(single_quoted(&labels), values_text);
        let bootstrap = ChartBootstrap::default();

        let first = bootstrap.build_config(&doc).expect("first build");
        let second = bootstrap.build_config(&doc).expect("second build");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn tick_labels_end_with_currency_suffix(value in -1.0e6f64..1.0e6) {
        let doc = StaticDocument::for_chart("[]", "[]");
        let config = ChartBootstrap::default().build_config(&doc).expect("build");
        let label = config.format_y_tick(value);
        prop_assert!(label.ends_with('€'));
        let number = label.trim_end_matches('€').parse::<f64>().expect("numeric prefix");
        prop_assert_eq!(number, value);
    }
}
