use chrono::NaiveDate;
use tracing::debug;

use crate::core::{DataLineStore, DateIndexMapper, ExtraLine, Viewport};
use crate::error::ChartResult;
use crate::interaction::{NavigationEngine, NavigationOutcome, NavigationState};
use crate::render::{RenderFrame, Renderer};

use super::render_frame_builder::{ChartRenderer, FrameOutput};
use super::{ChartEventHandler, DateChartConfig, NoopEventHandler, RenderContext};

/// Main facade owned by one chart instance.
///
/// Owns the navigation state, the loaded data and the render context
/// exclusively. Gestures, ticks and renders must be called from one thread,
/// one at a time; every callback fires synchronously inside that call.
#[derive(Debug)]
pub struct DateChartEngine<R: Renderer, H: ChartEventHandler = NoopEventHandler> {
    pub(super) renderer: R,
    pub(super) handler: H,
    pub(super) context: RenderContext,
    pub(super) calendar: DateIndexMapper,
    pub(super) navigation: NavigationEngine,
    pub(super) lines: DataLineStore,
    pub(super) extra_lines: Vec<ExtraLine>,
    pub(super) redraw_pending: bool,
}

impl<R: Renderer> DateChartEngine<R, NoopEventHandler> {
    pub fn new(renderer: R, config: DateChartConfig, viewport: Viewport) -> ChartResult<Self> {
        Self::with_handler(renderer, NoopEventHandler, config, viewport)
    }
}

impl<R: Renderer, H: ChartEventHandler> DateChartEngine<R, H> {
    pub fn with_handler(
        renderer: R,
        handler: H,
        config: DateChartConfig,
        viewport: Viewport,
    ) -> ChartResult<Self> {
        let context = RenderContext::configure(config, viewport)?;
        let navigation = NavigationEngine::new(context.day_width(), config.navigation);
        Ok(Self {
            renderer,
            handler,
            calendar: DateIndexMapper::new(config.clock),
            navigation,
            context,
            lines: DataLineStore::new(),
            extra_lines: Vec::new(),
            redraw_pending: true,
        })
    }

    #[must_use]
    pub fn config(&self) -> &DateChartConfig {
        self.context.config()
    }

    #[must_use]
    pub fn render_context(&self) -> &RenderContext {
        &self.context
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.context.viewport()
    }

    /// Replaces the config; the previous one stays active if validation fails.
    pub fn set_config(&mut self, config: DateChartConfig) -> ChartResult<()> {
        let context = RenderContext::configure(config, self.context.viewport())?;
        self.install_context(context);
        Ok(())
    }

    /// Re-derives geometry for a new viewport, keeping the centered day.
    pub fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        let context = RenderContext::configure(*self.context.config(), viewport)?;
        self.install_context(context);
        Ok(())
    }

    fn install_context(&mut self, context: RenderContext) {
        debug!(
            width = context.viewport().width,
            height = context.viewport().height,
            "install render context"
        );
        self.calendar = DateIndexMapper::new(context.config().clock);
        self.navigation.set_config(context.config().navigation);
        let outcome = self.navigation.set_day_width(context.day_width());
        self.context = context;
        self.apply_outcome(NavigationOutcome {
            redraw: true,
            ..outcome
        });
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.calendar.today()
    }

    #[must_use]
    pub fn navigation_state(&self) -> NavigationState {
        self.navigation.state()
    }

    /// Day under the selection circle for the current origin.
    #[must_use]
    pub fn centered_date(&self) -> NaiveDate {
        let today = self.today();
        DateIndexMapper::add_days(today, self.navigation.state().left_days()).unwrap_or(today)
    }

    #[must_use]
    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Returns and clears the pending redraw flag. Hosts coalesce repeated
    /// requests into a single frame.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_pending)
    }

    pub(super) fn request_redraw(&mut self) {
        self.redraw_pending = true;
        self.handler.on_redraw_requested();
    }

    /// Runs the draw pass and reports missing months to the handler.
    pub fn build_render_frame(&mut self) -> ChartResult<RenderFrame> {
        let today = self.today();
        let FrameOutput {
            frame,
            missing_months,
        } = ChartRenderer {
            context: &self.context,
            navigation: self.navigation.state(),
            today,
            lines: &self.lines,
            extra_lines: &self.extra_lines,
        }
        .build();

        for month in missing_months {
            self.handler.on_missing_month(month);
        }
        Ok(frame)
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)?;
        self.redraw_pending = false;
        Ok(())
    }

    #[must_use]
    pub fn into_parts(self) -> (R, H) {
        (self.renderer, self.handler)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
