use std::cell::RefCell;
use std::rc::Rc;

use gtk::glib;
use gtk::prelude::*;
use gtk4 as gtk;
use tracing::{debug, warn};

use crate::animation::{ManualClock, TickStatus};
use crate::api::{ChartConfig, ChartEngine, RenderOutcome};
use crate::charts::ChartKind;
use crate::core::Series;
use crate::error::ChartResult;
use crate::render::CairoSurface;
use crate::theme::Theme;

type SharedEngine = Rc<RefCell<ChartEngine<CairoSurface, ManualClock>>>;

/// GTK4 `DrawingArea` hosting one chart.
///
/// The widget frame clock feeds the animation clock, and the widget tick
/// callback drives `ChartEngine::tick`, so animation runs on the GTK main
/// loop. Resizing replaces the offscreen surface and redraws the last chart in
/// its final state.
pub struct GtkChartHost {
    area: gtk::DrawingArea,
    engine: SharedEngine,
    clock: ManualClock,
}

impl GtkChartHost {
    #[must_use]
    pub fn new() -> Self {
        let area = gtk::DrawingArea::new();
        area.set_hexpand(true);
        area.set_vexpand(true);

        let clock = ManualClock::new();
        let engine: SharedEngine = Rc::new(RefCell::new(ChartEngine::with_clock(
            None,
            clock.clone(),
        )));

        let draw_engine = Rc::clone(&engine);
        area.set_draw_func(move |_area, context, _width, _height| {
            let engine = draw_engine.borrow();
            if let Some(surface) = engine.surface() {
                if let Err(err) = surface.paint_onto(context) {
                    warn!(error = %err, "failed to paint chart surface");
                }
            }
        });

        let resize_engine = Rc::clone(&engine);
        area.connect_resize(move |area, width, height| {
            if width <= 0 || height <= 0 {
                resize_engine.borrow_mut().detach_surface();
                return;
            }
            match CairoSurface::new(width, height) {
                Ok(surface) => {
                    let mut engine = resize_engine.borrow_mut();
                    engine.attach_surface(surface);
                    if let Err(err) = engine.redraw() {
                        warn!(error = %err, "failed to redraw chart after resize");
                    }
                    debug!(width, height, "chart surface resized");
                    area.queue_draw();
                }
                Err(err) => warn!(error = %err, width, height, "failed to create chart surface"),
            }
        });

        let tick_engine = Rc::clone(&engine);
        let tick_clock = clock.clone();
        area.add_tick_callback(move |area, frame_clock| {
            tick_clock.set_ms(frame_clock.frame_time() as f64 / 1000.0);
            let mut engine = tick_engine.borrow_mut();
            if engine.is_animating() {
                match engine.tick() {
                    Ok(TickStatus::Idle) => {}
                    Ok(_) => area.queue_draw(),
                    Err(err) => warn!(error = %err, "chart animation tick failed"),
                }
            }
            glib::ControlFlow::Continue
        });

        Self {
            area,
            engine,
            clock,
        }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    /// Renders a chart into the widget. Before the widget is realized and
    /// sized this is a silent no-op.
    pub fn render(
        &self,
        kind: ChartKind,
        series: &Series,
        config: &ChartConfig,
        theme: Theme,
    ) -> ChartResult<RenderOutcome> {
        if let Some(frame_clock) = self.area.frame_clock() {
            self.clock.set_ms(frame_clock.frame_time() as f64 / 1000.0);
        }
        let outcome = self
            .engine
            .borrow_mut()
            .render(kind, series, config, theme)?;
        self.area.queue_draw();
        Ok(outcome)
    }

    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        self.engine.borrow().hit_test(x, y)
    }
}

impl Default for GtkChartHost {
    fn default() -> Self {
        Self::new()
    }
}
