use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    ArcPrimitive, Color, DrawingSurface, LinePrimitive, PolygonPrimitive, RectPrimitive,
    TextHAlign, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoDrawStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub arcs_drawn: usize,
    pub polygons_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango drawing surface backed by an offscreen image.
///
/// Hosts paint the image onto their own context with `paint_onto`, for
/// example from a GTK `DrawingArea` draw callback.
#[derive(Debug)]
pub struct CairoSurface {
    surface: ImageSurface,
    clear_color: Color,
    stats: CairoDrawStats,
}

impl CairoSurface {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            stats: CairoDrawStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn image(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    /// Counts of primitives drawn since the last clear.
    #[must_use]
    pub fn stats(&self) -> CairoDrawStats {
        self.stats
    }

    /// Paints the current image onto an external context at its origin.
    pub fn paint_onto(&self, context: &Context) -> ChartResult<()> {
        context
            .set_source_surface(&self.surface, 0.0, 0.0)
            .map_err(|err| map_backend_error("failed to set source surface", err))?;
        context
            .paint()
            .map_err(|err| map_backend_error("failed to paint surface", err))
    }

    fn context(&self) -> ChartResult<Context> {
        Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))
    }
}

impl DrawingSurface for CairoSurface {
    fn size(&self) -> Viewport {
        Viewport::new(
            u32::try_from(self.surface.width()).unwrap_or(0),
            u32::try_from(self.surface.height()).unwrap_or(0),
        )
    }

    fn clear(&mut self) -> ChartResult<()> {
        let context = self.context()?;
        apply_color(&context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        self.stats = CairoDrawStats::default();
        Ok(())
    }

    fn stroke_line(&mut self, line: &LinePrimitive) -> ChartResult<()> {
        let context = self.context()?;
        apply_color(&context, line.color);
        context.set_line_width(line.stroke_width);
        context.move_to(line.x1, line.y1);
        context.line_to(line.x2, line.y2);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))?;
        self.stats.lines_drawn += 1;
        Ok(())
    }

    fn fill_rect(&mut self, rect: &RectPrimitive) -> ChartResult<()> {
        let context = self.context()?;
        apply_color(&context, rect.fill_color);
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        self.stats.rects_drawn += 1;
        Ok(())
    }

    fn fill_arc(&mut self, arc: &ArcPrimitive) -> ChartResult<()> {
        let context = self.context()?;
        apply_color(&context, arc.color);
        context.move_to(arc.center_x, arc.center_y);
        context.arc(
            arc.center_x,
            arc.center_y,
            arc.radius,
            arc.start_angle,
            arc.end_angle(),
        );
        context.close_path();
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill arc", err))?;
        self.stats.arcs_drawn += 1;
        Ok(())
    }

    fn stroke_arc(&mut self, arc: &ArcPrimitive) -> ChartResult<()> {
        let context = self.context()?;
        apply_color(&context, arc.color);
        context.set_line_width(arc.stroke_width);
        context.new_sub_path();
        context.arc(
            arc.center_x,
            arc.center_y,
            arc.radius,
            arc.start_angle,
            arc.end_angle(),
        );
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke arc", err))?;
        self.stats.arcs_drawn += 1;
        Ok(())
    }

    fn fill_polygon(&mut self, polygon: &PolygonPrimitive) -> ChartResult<()> {
        let Some((first, rest)) = polygon.points.split_first() else {
            return Ok(());
        };

        let context = self.context()?;
        apply_color(&context, polygon.fill_color);
        context.move_to(first.x, first.y);
        for point in rest {
            context.line_to(point.x, point.y);
        }
        context.close_path();
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill polygon", err))?;
        self.stats.polygons_drawn += 1;
        Ok(())
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        let context = self.context()?;
        let layout = pangocairo::functions::create_layout(&context);
        let font_description = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, _text_height) = layout.pixel_size();
        let x = match text.h_align {
            TextHAlign::Left => text.x,
            TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => text.x - f64::from(text_width),
        };

        apply_color(&context, text.color);
        context.move_to(x, text.y);
        pangocairo::functions::show_layout(&context, &layout);
        self.stats.texts_drawn += 1;
        Ok(())
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
