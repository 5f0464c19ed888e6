use dashboard_charts::api::{DEFAULT_PALETTE, DEFAULT_RADAR_MAX_VALUE};
use dashboard_charts::core::{DataPoint, Series};
use dashboard_charts::render::{Color, RecordingSurface, RenderFrame};
use dashboard_charts::{ChartConfig, ChartEngine, ChartError, ChartKind, Theme};

#[test]
fn chart_config_json_roundtrip() {
    let config = ChartConfig::new(240.0)
        .with_palette(vec![Color::rgb(0.25, 0.5, 0.75)])
        .with_max_value(10.0)
        .with_axis_labels(["Mon", "Tue"])
        .with_duration_ms(600.0)
        .with_animated(false);

    let json = config
        .to_json_pretty()
        .expect("config should serialize to json");
    let restored = ChartConfig::from_json_str(&json).expect("config should deserialize");

    assert_eq!(restored, config);
}

#[test]
fn partial_config_json_uses_defaults() {
    let config = ChartConfig::from_json_str(r#"{ "height": 220.0 }"#).expect("partial config");

    assert_eq!(config.height, 220.0);
    assert!(config.animated);
    assert_eq!(config.duration_ms, 1_000.0);
    assert_eq!(config.padding, 40.0);
    assert_eq!(config.bar_gap, 10.0);
    assert_eq!(config.palette, DEFAULT_PALETTE.to_vec());
    assert_eq!(config.radar_max_value(), DEFAULT_RADAR_MAX_VALUE);
    assert_eq!(config.axis_labels, None);
}

#[test]
fn malformed_config_json_is_invalid_data() {
    let err = ChartConfig::from_json_str("{ not json").expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn theme_and_kind_use_lowercase_tokens() {
    assert_eq!(serde_json::to_string(&Theme::Dark).expect("theme"), "\"dark\"");
    assert_eq!(
        serde_json::from_str::<Theme>("\"light\"").expect("theme"),
        Theme::Light
    );
    assert_eq!(serde_json::to_string(&ChartKind::Pie).expect("kind"), "\"pie\"");
    assert_eq!(
        serde_json::from_str::<ChartKind>("\"radar\"").expect("kind"),
        ChartKind::Radar
    );
}

#[test]
fn series_serializes_as_plain_point_list() {
    let series = Series::new(vec![DataPoint::new("Jan", 12.0), DataPoint::new("Feb", 7.5)]);
    let json = serde_json::to_string(&series).expect("series");
    assert_eq!(
        json,
        r#"[{"label":"Jan","value":12.0},{"label":"Feb","value":7.5}]"#
    );
    let restored: Series = serde_json::from_str(&json).expect("series");
    assert_eq!(restored, series);
}

#[test]
fn drawn_frame_json_roundtrip() {
    let mut engine = ChartEngine::new(RecordingSurface::new(480, 320));
    let series = Series::from_pairs([("North", 30.0), ("South", 45.0), ("West", 25.0)]);
    let config = ChartConfig::default().with_animated(false);
    for kind in [ChartKind::Bar, ChartKind::Line, ChartKind::Pie, ChartKind::Radar] {
        engine
            .render(kind, &series, &config, Theme::Dark)
            .expect("render");
        let frame = engine.surface().expect("surface").snapshot();

        let json = frame.to_json_pretty().expect("frame should serialize");
        let restored = RenderFrame::from_json_str(&json).expect("frame should deserialize");
        assert_eq!(restored.viewport, frame.viewport);
        assert_eq!(restored.len(), frame.len());
        let texts = |frame: &RenderFrame| -> Vec<String> {
            frame.texts().map(|text| text.text.clone()).collect()
        };
        assert_eq!(texts(&restored), texts(&frame));
        assert!(restored.validate().is_ok());
    }
}
