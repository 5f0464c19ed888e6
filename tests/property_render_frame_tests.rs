use dashboard_charts::animation::RevealProgress;
use dashboard_charts::charts::ChartScene;
use dashboard_charts::core::{Series, Viewport};
use dashboard_charts::theme::Theme;
use dashboard_charts::{ChartConfig, ChartKind};
use proptest::prelude::*;

fn kind_strategy() -> impl Strategy<Value = ChartKind> {
    prop_oneof![
        Just(ChartKind::Bar),
        Just(ChartKind::Line),
        Just(ChartKind::Pie),
        Just(ChartKind::Radar),
    ]
}

proptest! {
    #[test]
    fn frames_are_deterministic_and_valid(
        kind in kind_strategy(),
        values in proptest::collection::vec(-1_000.0f64..1_000.0, 1..32),
        width in 1u32..1_600,
        height in 1u32..1_200,
        progress in 0.0f64..=1.0,
        dark in any::<bool>()
    ) {
        let series = Series::from_pairs(
            values.iter().enumerate().map(|(index, value)| (format!("p{index}"), *value)),
        );
        let config = ChartConfig::default();
        let theme = if dark { Theme::Dark } else { Theme::Light };
        let scene = ChartScene::new(&series, &config, theme, Viewport::new(width, height));
        let renderer = kind.renderer();

        let first = renderer.build_frame(&scene, RevealProgress::new(progress));
        let second = renderer.build_frame(&scene, RevealProgress::new(progress));

        prop_assert_eq!(&first, &second);
        prop_assert!(first.validate().is_ok());
        prop_assert_eq!(renderer.kind(), kind);
    }

    #[test]
    fn hit_test_never_panics_and_stays_in_range(
        kind in kind_strategy(),
        values in proptest::collection::vec(0.0f64..500.0, 0..16),
        x in -100.0f64..900.0,
        y in -100.0f64..700.0
    ) {
        let series = Series::from_pairs(
            values.iter().enumerate().map(|(index, value)| (format!("p{index}"), *value)),
        );
        let config = ChartConfig::default();
        let scene = ChartScene::new(&series, &config, Theme::Light, Viewport::new(800, 600));

        if let Some(index) = kind.renderer().hit_test(&scene, x, y) {
            prop_assert!(index < series.len());
        }
    }
}
