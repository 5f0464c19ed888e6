use std::f64::consts::{FRAC_PI_2, TAU};

use dashboard_charts::core::{
    PlotArea, Series, ValueScale, bar_slots, line_vertices, pie_slices, polar_angle,
};
use proptest::prelude::*;

fn series_from(values: &[f64]) -> Series {
    Series::from_pairs(
        values
            .iter()
            .enumerate()
            .map(|(index, value)| (format!("p{index}"), *value)),
    )
}

proptest! {
    #[test]
    fn bar_slots_stay_inside_padded_area(
        width in 120.0f64..2_000.0,
        height in 120.0f64..1_000.0,
        count in 1usize..64,
        gap in 0.0f64..40.0
    ) {
        let area = PlotArea::from_size(width, height, 40.0);
        let slots = bar_slots(count, area, gap);

        prop_assert_eq!(slots.len(), count);
        for pair in slots.windows(2) {
            prop_assert!(pair[0].x < pair[1].x);
        }
        for slot in &slots {
            prop_assert!(slot.width > 0.0);
            prop_assert!(slot.x >= 40.0 - 1e-6);
            prop_assert!(slot.x + slot.width <= width - 40.0 + 1e-6);
        }
    }

    #[test]
    fn line_vertices_stay_inside_padded_area(
        values in proptest::collection::vec(-500.0f64..500.0, 1..40),
        width in 120.0f64..2_000.0,
        height in 120.0f64..1_000.0
    ) {
        let series = series_from(&values);
        let area = PlotArea::from_size(width, height, 40.0);
        let vertices = line_vertices(&series, ValueScale::from_series_max(&series), area);

        prop_assert_eq!(vertices.len(), values.len());
        for vertex in &vertices {
            prop_assert!(vertex.x.is_finite() && vertex.y.is_finite());
            prop_assert!(vertex.x >= 40.0 - 1e-6 && vertex.x <= width - 40.0 + 1e-6);
            prop_assert!(vertex.y >= 40.0 - 1e-6 && vertex.y <= height - 40.0 + 1e-6);
        }
        for pair in vertices.windows(2) {
            prop_assert!(pair[0].x < pair[1].x);
        }
    }

    #[test]
    fn pie_sweeps_cover_full_circle_or_nothing(
        values in proptest::collection::vec(0.0f64..1_000.0, 1..24)
    ) {
        let series = series_from(&values);
        let slices = pie_slices(&series, 1.0);

        if series.positive_total() > 0.0 {
            let sum: f64 = slices.iter().map(|slice| slice.sweep).sum();
            prop_assert!((sum - TAU).abs() <= 1e-9);
            prop_assert_eq!(slices[0].start, -FRAC_PI_2);
            for pair in slices.windows(2) {
                prop_assert!((pair[0].end() - pair[1].start).abs() <= 1e-9);
            }
        } else {
            prop_assert!(slices.is_empty());
        }
    }

    #[test]
    fn radar_axes_are_evenly_spaced_from_top(count in 1usize..64) {
        prop_assert_eq!(polar_angle(0, count), -FRAC_PI_2);
        let spacing = TAU / count as f64;
        for index in 1..count {
            let delta = polar_angle(index, count) - polar_angle(index - 1, count);
            prop_assert!((delta - spacing).abs() <= 1e-9);
        }
    }
}
