use tracing::{debug, trace, warn};

use crate::animation::{
    AnimationHandle, AnimationScheduler, Clock, RevealProgress, SystemClock, TickStatus,
};
use crate::charts::{ChartKind, ChartScene, axis_label_mismatch};
use crate::core::Series;
use crate::error::ChartResult;
use crate::render::{DrawingSurface, RenderFrame};
use crate::theme::Theme;

use super::ChartConfig;

/// What a `render` call did.
#[derive(Debug, Clone)]
pub enum RenderOutcome {
    /// No surface is attached, or it has zero size. Nothing was drawn.
    SurfaceUnavailable,
    /// The series was empty. The surface was cleared and nothing else drawn.
    EmptySeries,
    /// The final state was drawn synchronously.
    Drawn,
    /// The first frame was drawn; the host drives the rest through `tick`.
    Animating(AnimationHandle),
}

impl RenderOutcome {
    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self, Self::Animating(_))
    }

    #[must_use]
    pub fn handle(&self) -> Option<&AnimationHandle> {
        match self {
            Self::Animating(handle) => Some(handle),
            _ => None,
        }
    }
}

/// Everything needed to redraw the last rendered chart.
#[derive(Debug, Clone)]
struct ChartJob {
    kind: ChartKind,
    series: Series,
    config: ChartConfig,
    theme: Theme,
}

impl ChartJob {
    fn draw<S: DrawingSurface>(&self, surface: &mut S, progress: RevealProgress) -> ChartResult<()> {
        let scene = ChartScene::new(&self.series, &self.config, self.theme, surface.size());
        let frame = self.kind.renderer().build_frame(&scene, progress);
        surface.draw_frame(&frame)
    }
}

/// Chart instance bound to one drawing surface.
///
/// The engine exclusively owns its surface and at most one in-flight
/// animation. Every `render` cancels that animation before anything is drawn,
/// so frames of two renders never interleave on the surface.
pub struct ChartEngine<S: DrawingSurface, C: Clock = SystemClock> {
    surface: Option<S>,
    scheduler: AnimationScheduler<C, S>,
    current: Option<ChartJob>,
}

impl<S: DrawingSurface + 'static> ChartEngine<S, SystemClock> {
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self::with_clock(Some(surface), SystemClock::new())
    }

    /// Engine whose surface will be attached later by the host.
    #[must_use]
    pub fn detached() -> Self {
        Self::with_clock(None, SystemClock::new())
    }
}

impl<S: DrawingSurface + 'static, C: Clock> ChartEngine<S, C> {
    #[must_use]
    pub fn with_clock(surface: Option<S>, clock: C) -> Self {
        Self {
            surface,
            scheduler: AnimationScheduler::new(clock),
            current: None,
        }
    }

    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Attaches a surface, returning the previous one.
    pub fn attach_surface(&mut self, surface: S) -> Option<S> {
        self.scheduler.cancel();
        self.surface.replace(surface)
    }

    pub fn detach_surface(&mut self) -> Option<S> {
        self.scheduler.cancel();
        self.surface.take()
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        self.scheduler.clock()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.scheduler.is_active()
    }

    /// Cancels the in-flight animation, leaving the last drawn frame in place.
    pub fn cancel_animation(&mut self) -> bool {
        self.scheduler.cancel()
    }

    /// Renders `series` as a `kind` chart.
    ///
    /// Without animation the final state is drawn before returning. With
    /// animation the first frame is drawn and later frames follow from `tick`.
    pub fn render(
        &mut self,
        kind: ChartKind,
        series: &Series,
        config: &ChartConfig,
        theme: Theme,
    ) -> ChartResult<RenderOutcome> {
        if self.scheduler.cancel() {
            debug!(?kind, "superseded in-flight animation");
        }

        let Some(surface) = self.surface.as_mut() else {
            trace!(?kind, "render skipped: no surface attached");
            return Ok(RenderOutcome::SurfaceUnavailable);
        };
        if !surface.size().is_valid() {
            trace!(?kind, "render skipped: surface has zero size");
            return Ok(RenderOutcome::SurfaceUnavailable);
        }

        warn_on_degenerate_input(kind, series, config);
        let job = ChartJob {
            kind,
            series: series.clone(),
            config: config.clone(),
            theme,
        };
        self.current = Some(job.clone());

        if series.is_empty() {
            debug!(?kind, "empty series: surface cleared");
            surface.clear()?;
            return Ok(RenderOutcome::EmptySeries);
        }

        debug!(
            ?kind,
            ?theme,
            points = series.len(),
            animated = config.animated,
            "render chart"
        );

        if !config.animated {
            job.draw(surface, RevealProgress::complete())?;
            return Ok(RenderOutcome::Drawn);
        }

        let handle = self
            .scheduler
            .start(config.duration_ms, move |surface: &mut S, progress| {
                job.draw(surface, RevealProgress::new(progress))
            });
        match self.scheduler.tick(surface)? {
            TickStatus::Completed => Ok(RenderOutcome::Drawn),
            TickStatus::Idle | TickStatus::Running { .. } => Ok(RenderOutcome::Animating(handle)),
        }
    }

    /// Redraws the last rendered chart in its final state, for example after
    /// the host replaced a resized surface.
    pub fn redraw(&mut self) -> ChartResult<RenderOutcome> {
        self.scheduler.cancel();
        let Some(surface) = self.surface.as_mut() else {
            return Ok(RenderOutcome::SurfaceUnavailable);
        };
        if !surface.size().is_valid() {
            return Ok(RenderOutcome::SurfaceUnavailable);
        }
        match self.current.as_ref() {
            Some(job) if !job.series.is_empty() => {
                job.draw(surface, RevealProgress::complete())?;
                Ok(RenderOutcome::Drawn)
            }
            _ => {
                surface.clear()?;
                Ok(RenderOutcome::EmptySeries)
            }
        }
    }

    /// Per-frame entry point for the host.
    pub fn tick(&mut self) -> ChartResult<TickStatus> {
        match self.surface.as_mut() {
            Some(surface) => self.scheduler.tick(surface),
            None => {
                self.scheduler.cancel();
                Ok(TickStatus::Idle)
            }
        }
    }

    /// Tick from a host callback scheduled for `handle`; stale handles are ignored.
    pub fn tick_scheduled(&mut self, handle: &AnimationHandle) -> ChartResult<TickStatus> {
        match self.surface.as_mut() {
            Some(surface) => self.scheduler.tick_scheduled(handle, surface),
            None => Ok(TickStatus::Idle),
        }
    }

    /// Point index under `(x, y)` for the last rendered chart.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        let job = self.current.as_ref()?;
        let viewport = self.surface.as_ref()?.size();
        let scene = ChartScene::new(&job.series, &job.config, job.theme, viewport);
        job.kind.renderer().hit_test(&scene, x, y)
    }

    /// Builds a frame against the attached surface's size without drawing it.
    #[must_use]
    pub fn build_frame(
        &self,
        kind: ChartKind,
        series: &Series,
        config: &ChartConfig,
        theme: Theme,
        progress: RevealProgress,
    ) -> Option<RenderFrame> {
        let viewport = self.surface.as_ref()?.size();
        let scene = ChartScene::new(series, config, theme, viewport);
        Some(kind.renderer().build_frame(&scene, progress))
    }
}

fn warn_on_degenerate_input(kind: ChartKind, series: &Series, config: &ChartConfig) {
    let non_finite = series.non_finite_count();
    if non_finite > 0 {
        warn!(?kind, non_finite, "non-finite values plotted as zero");
    }
    if config.palette.is_empty() {
        warn!(?kind, "empty palette; using default palette");
    }
    let invalid_colors = config.invalid_palette_entries();
    if invalid_colors > 0 {
        warn!(
            ?kind,
            invalid_colors, "palette colors out of range; using default colors"
        );
    }
    match kind {
        ChartKind::Line => {
            if let Some((labels, points)) = axis_label_mismatch(series, config) {
                warn!(
                    labels,
                    points, "axis label override length differs from series length"
                );
            }
        }
        ChartKind::Radar => {
            let max_value = config.radar_max_value();
            if !max_value.is_finite() || max_value <= 0.0 {
                warn!(max_value, "radar max value is not positive; data collapses to center");
            }
        }
        ChartKind::Bar | ChartKind::Pie => {}
    }
}
