pub mod mapping;
pub mod scale;
pub mod types;

pub use mapping::{
    BarSlot, PixelPoint, PlotArea, SliceAngles, bar_height, bar_slots, line_vertices, line_x,
    line_y, pie_slices, polar_angle, polar_point,
};
pub use scale::ValueScale;
pub use types::{DataPoint, Series, Viewport};
