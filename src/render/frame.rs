use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{ArcPrimitive, LinePrimitive, PolygonPrimitive, RectPrimitive, TextPrimitive};

/// One immediate-mode drawing instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Line(LinePrimitive),
    Rect(RectPrimitive),
    FillArc(ArcPrimitive),
    StrokeArc(ArcPrimitive),
    Polygon(PolygonPrimitive),
    Text(TextPrimitive),
}

impl DrawCommand {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Line(line) => line.validate(),
            Self::Rect(rect) => rect.validate(),
            Self::FillArc(arc) | Self::StrokeArc(arc) => arc.validate(),
            Self::Polygon(polygon) => polygon.validate(),
            Self::Text(text) => text.validate(),
        }
    }
}

/// Backend-agnostic, fully materialized scene for one chart frame.
///
/// Commands keep their insertion order; surfaces replay them after a clear, so
/// later commands paint over earlier ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub commands: Vec<DrawCommand>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            commands: Vec::new(),
        }
    }

    pub fn push_line(&mut self, line: LinePrimitive) {
        self.commands.push(DrawCommand::Line(line));
    }

    pub fn push_rect(&mut self, rect: RectPrimitive) {
        self.commands.push(DrawCommand::Rect(rect));
    }

    pub fn push_fill_arc(&mut self, arc: ArcPrimitive) {
        self.commands.push(DrawCommand::FillArc(arc));
    }

    pub fn push_stroke_arc(&mut self, arc: ArcPrimitive) {
        self.commands.push(DrawCommand::StrokeArc(arc));
    }

    pub fn push_polygon(&mut self, polygon: PolygonPrimitive) {
        self.commands.push(DrawCommand::Polygon(polygon));
    }

    pub fn push_text(&mut self, text: TextPrimitive) {
        self.commands.push(DrawCommand::Text(text));
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Rect(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn filled_arcs(&self) -> impl Iterator<Item = &ArcPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::FillArc(arc) => Some(arc),
            _ => None,
        })
    }

    pub fn stroked_arcs(&self) -> impl Iterator<Item = &ArcPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::StrokeArc(arc) => Some(arc),
            _ => None,
        })
    }

    pub fn polygons(&self) -> impl Iterator<Item = &PolygonPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Polygon(polygon) => Some(polygon),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text(text) => Some(text),
            _ => None,
        })
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for command in &self.commands {
            command.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| ChartError::InvalidData(format!("failed to serialize frame: {err}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|err| ChartError::InvalidData(format!("failed to parse frame: {err}")))
    }
}
