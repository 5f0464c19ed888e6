use approx::assert_abs_diff_eq;
use dashboard_charts::animation::RevealProgress;
use dashboard_charts::api::DEFAULT_PALETTE;
use dashboard_charts::core::Series;
use dashboard_charts::render::{DrawCommand, DrawingSurface, RecordingSurface, TextHAlign};
use dashboard_charts::theme::{Theme, resolve_theme};
use dashboard_charts::{ChartConfig, ChartEngine, ChartKind, RenderOutcome};

fn quarterly() -> Series {
    Series::from_pairs([("Q1", 50.0), ("Q2", 100.0), ("Q3", 25.0)])
}

fn static_config() -> ChartConfig {
    ChartConfig::new(300.0).with_animated(false)
}

#[test]
fn bars_are_laid_out_left_to_right_with_normalized_heights() {
    let mut engine = ChartEngine::new(RecordingSurface::new(400, 300));
    let outcome = engine
        .render(ChartKind::Bar, &quarterly(), &static_config(), Theme::Light)
        .expect("render");
    assert!(matches!(outcome, RenderOutcome::Drawn));

    let frame = engine.surface().expect("surface").snapshot();
    let rects: Vec<_> = frame.rects().copied().collect();
    assert_eq!(rects.len(), 3);

    let expected = [(40.0, 150.0, 110.0), (150.0, 40.0, 220.0), (260.0, 205.0, 55.0)];
    for (index, (rect, (x, y, height))) in rects.iter().zip(expected).enumerate() {
        assert_abs_diff_eq!(rect.x, x, epsilon = 1e-9);
        assert_abs_diff_eq!(rect.y, y, epsilon = 1e-9);
        assert_abs_diff_eq!(rect.width, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(rect.height, height, epsilon = 1e-9);
        assert_eq!(rect.fill_color, DEFAULT_PALETTE[index]);
    }
}

#[test]
fn axis_baseline_comes_first_then_labels_per_bar() {
    let mut engine = ChartEngine::new(RecordingSurface::new(400, 300));
    engine
        .render(ChartKind::Bar, &quarterly(), &static_config(), Theme::Light)
        .expect("render");

    let commands = engine.surface().expect("surface").commands();
    let DrawCommand::Line(axis) = &commands[0] else {
        panic!("first command must be the axis baseline");
    };
    assert_eq!((axis.x1, axis.y1, axis.x2, axis.y2), (40.0, 260.0, 360.0, 260.0));
    assert_eq!(axis.color, resolve_theme(Theme::Light).axis_color);

    let frame = engine.surface().expect("surface").snapshot();
    let texts: Vec<(&str, f64, f64)> = frame
        .texts()
        .map(|text| (text.text.as_str(), text.x, text.y))
        .collect();
    assert_eq!(
        texts,
        vec![
            ("50", 90.0, 132.0),
            ("Q1", 90.0, 266.0),
            ("100", 200.0, 22.0),
            ("Q2", 200.0, 266.0),
            ("25", 310.0, 187.0),
            ("Q3", 310.0, 266.0),
        ]
    );
    assert!(frame.texts().all(|text| text.h_align == TextHAlign::Center));
}

#[test]
fn empty_category_label_is_not_drawn() {
    let series = Series::from_pairs([("", 10.0), ("B", 20.0)]);
    let mut engine = ChartEngine::new(RecordingSurface::new(400, 300));
    engine
        .render(ChartKind::Bar, &series, &static_config(), Theme::Light)
        .expect("render");
    let frame = engine.surface().expect("surface").snapshot();
    let labels: Vec<&str> = frame.texts().map(|text| text.text.as_str()).collect();
    assert_eq!(labels, vec!["10", "20", "B"]);
}

#[test]
fn all_zero_series_draws_flat_bars() {
    let series = Series::from_pairs([("A", 0.0), ("B", 0.0)]);
    let mut engine = ChartEngine::new(RecordingSurface::new(400, 300));
    engine
        .render(ChartKind::Bar, &series, &static_config(), Theme::Light)
        .expect("render");
    let frame = engine.surface().expect("surface").snapshot();
    assert_eq!(frame.rects().count(), 2);
    assert!(frame.rects().all(|rect| rect.height == 0.0 && rect.y == 260.0));
}

#[test]
fn negative_values_are_clamped_to_baseline() {
    let series = Series::from_pairs([("A", -40.0), ("B", 80.0)]);
    let mut engine = ChartEngine::new(RecordingSurface::new(400, 300));
    engine
        .render(ChartKind::Bar, &series, &static_config(), Theme::Light)
        .expect("render");
    let frame = engine.surface().expect("surface").snapshot();
    let heights: Vec<f64> = frame.rects().map(|rect| rect.height).collect();
    assert_eq!(heights, vec![0.0, 220.0]);
}

#[test]
fn palette_cycles_when_shorter_than_series() {
    let palette = vec![DEFAULT_PALETTE[3], DEFAULT_PALETTE[4]];
    let config = static_config().with_palette(palette.clone());
    let series = Series::from_pairs([("a", 1.0), ("b", 2.0), ("c", 3.0)]);
    let mut engine = ChartEngine::new(RecordingSurface::new(400, 300));
    engine
        .render(ChartKind::Bar, &series, &config, Theme::Dark)
        .expect("render");
    let frame = engine.surface().expect("surface").snapshot();
    let colors: Vec<_> = frame.rects().map(|rect| rect.fill_color).collect();
    assert_eq!(colors, vec![palette[0], palette[1], palette[0]]);
}

#[test]
fn progress_scales_every_bar_together() {
    let engine = ChartEngine::new(RecordingSurface::new(400, 300));
    let frame = engine
        .build_frame(
            ChartKind::Bar,
            &quarterly(),
            &static_config(),
            Theme::Light,
            RevealProgress::new(0.5),
        )
        .expect("surface attached");
    let heights: Vec<f64> = frame.rects().map(|rect| rect.height).collect();
    assert_eq!(heights, vec![55.0, 110.0, 27.5]);
}

#[test]
fn value_labels_wait_for_bars_to_start_growing() {
    let engine = ChartEngine::new(RecordingSurface::new(400, 300));
    let frame_at = |fraction: f64| {
        engine
            .build_frame(
                ChartKind::Bar,
                &quarterly(),
                &static_config(),
                Theme::Light,
                RevealProgress::new(fraction),
            )
            .expect("surface attached")
    };

    let start = frame_at(0.0);
    assert_eq!(start.rects().count(), 3);
    let texts: Vec<&str> = start.texts().map(|text| text.text.as_str()).collect();
    assert_eq!(texts, vec!["Q1", "Q2", "Q3"]);

    let early = frame_at(0.5);
    let value_label = early
        .texts()
        .find(|text| text.text == "50")
        .expect("value label once growing");
    assert_abs_diff_eq!(value_label.y, 260.0 - 55.0 - 6.0 - 12.0, epsilon = 1e-9);
}

#[test]
fn hit_test_covers_whole_column_but_not_gaps() {
    let mut engine = ChartEngine::new(RecordingSurface::new(400, 300));
    engine
        .render(ChartKind::Bar, &quarterly(), &static_config(), Theme::Light)
        .expect("render");

    assert_eq!(engine.hit_test(90.0, 200.0), Some(0));
    assert_eq!(engine.hit_test(90.0, 60.0), Some(0));
    assert_eq!(engine.hit_test(200.0, 100.0), Some(1));
    assert_eq!(engine.hit_test(145.0, 200.0), None);
    assert_eq!(engine.hit_test(90.0, 280.0), None);
    assert_eq!(engine.hit_test(10.0, 200.0), None);
}

#[test]
fn config_height_shorter_than_surface_limits_plot_area() {
    let config = ChartConfig::new(200.0).with_animated(false);
    let mut engine = ChartEngine::new(RecordingSurface::new(400, 300));
    engine
        .render(ChartKind::Bar, &quarterly(), &config, Theme::Light)
        .expect("render");
    let surface = engine.surface().expect("surface");
    assert_eq!(surface.size().height, 300);
    let frame = surface.snapshot();
    let tallest = frame
        .rects()
        .map(|rect| rect.height)
        .fold(0.0_f64, f64::max);
    assert_abs_diff_eq!(tallest, 120.0, epsilon = 1e-9);
}
