mod frame;
mod primitives;
mod recording_surface;

pub use frame::{DrawCommand, RenderFrame};
pub use primitives::{
    ArcPrimitive, Color, LinePrimitive, PolygonPrimitive, RectPrimitive, TextHAlign,
    TextPrimitive,
};
pub use recording_surface::RecordingSurface;

use crate::core::Viewport;
use crate::error::ChartResult;

/// Fixed-size immediate-mode drawing target.
///
/// The host creates and sizes the surface; the engine only issues primitive
/// drawing calls against it. Nothing is retained between frames: every frame
/// starts with `clear`.
pub trait DrawingSurface {
    /// Current pixel size of the surface.
    fn size(&self) -> Viewport;

    fn clear(&mut self) -> ChartResult<()>;

    fn stroke_line(&mut self, line: &LinePrimitive) -> ChartResult<()>;

    fn fill_rect(&mut self, rect: &RectPrimitive) -> ChartResult<()>;

    /// Fills the wedge between the arc and its center.
    fn fill_arc(&mut self, arc: &ArcPrimitive) -> ChartResult<()>;

    fn stroke_arc(&mut self, arc: &ArcPrimitive) -> ChartResult<()>;

    fn fill_polygon(&mut self, polygon: &PolygonPrimitive) -> ChartResult<()>;

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()>;

    /// Clears the surface and replays every command of `frame` in order.
    fn draw_frame(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        self.clear()?;
        for command in &frame.commands {
            match command {
                DrawCommand::Line(line) => self.stroke_line(line)?,
                DrawCommand::Rect(rect) => self.fill_rect(rect)?,
                DrawCommand::FillArc(arc) => self.fill_arc(arc)?,
                DrawCommand::StrokeArc(arc) => self.stroke_arc(arc)?,
                DrawCommand::Polygon(polygon) => self.fill_polygon(polygon)?,
                DrawCommand::Text(text) => self.draw_text(text)?,
            }
        }
        Ok(())
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoDrawStats, CairoSurface};
