use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::{
    ArcPrimitive, DrawCommand, DrawingSurface, LinePrimitive, PolygonPrimitive, RectPrimitive,
    RenderFrame, TextPrimitive,
};

/// Headless surface that records every primitive it receives.
///
/// Used by tests and by hosts that want the drawing instructions rather than
/// pixels. Every primitive is validated on arrival, so non-finite geometry
/// fails loudly here instead of silently producing a broken image elsewhere.
/// The recorded commands are the "pixels": two surfaces that recorded equal
/// commands since their last clear show identical output.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    viewport: Viewport,
    commands: Vec<DrawCommand>,
    clear_count: usize,
}

impl RecordingSurface {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            commands: Vec::new(),
            clear_count: 0,
        }
    }

    /// Commands drawn since the most recent clear.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    /// Current visible content as a frame.
    #[must_use]
    pub fn snapshot(&self) -> RenderFrame {
        RenderFrame {
            viewport: self.viewport,
            commands: self.commands.clone(),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
    }

    fn record(&mut self, command: DrawCommand) -> ChartResult<()> {
        command.validate()?;
        self.commands.push(command);
        Ok(())
    }
}

impl DrawingSurface for RecordingSurface {
    fn size(&self) -> Viewport {
        self.viewport
    }

    fn clear(&mut self) -> ChartResult<()> {
        self.commands.clear();
        self.clear_count += 1;
        Ok(())
    }

    fn stroke_line(&mut self, line: &LinePrimitive) -> ChartResult<()> {
        self.record(DrawCommand::Line(*line))
    }

    fn fill_rect(&mut self, rect: &RectPrimitive) -> ChartResult<()> {
        self.record(DrawCommand::Rect(*rect))
    }

    fn fill_arc(&mut self, arc: &ArcPrimitive) -> ChartResult<()> {
        self.record(DrawCommand::FillArc(*arc))
    }

    fn stroke_arc(&mut self, arc: &ArcPrimitive) -> ChartResult<()> {
        self.record(DrawCommand::StrokeArc(*arc))
    }

    fn fill_polygon(&mut self, polygon: &PolygonPrimitive) -> ChartResult<()> {
        self.record(DrawCommand::Polygon(polygon.clone()))
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        self.record(DrawCommand::Text(text.clone()))
    }
}
