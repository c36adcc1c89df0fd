use tracing::debug;

use crate::core::ChartNode;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{
    HoverCallbacks, HoverTarget, InteractionState, InteractionStateMachine, PointerEvent,
};
use crate::render::Renderer;

use super::{PieChartConfig, SceneOutcome, assemble_scene};

/// Main facade consumed by host applications.
///
/// `PieChart` owns the configuration, the hover state machine and the
/// renderer. Declarations are passed per render pass and never retained.
pub struct PieChart<R: Renderer> {
    renderer: R,
    config: PieChartConfig,
    interaction: InteractionStateMachine,
}

impl<R: Renderer> PieChart<R> {
    pub fn new(renderer: R, config: PieChartConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            interaction: InteractionStateMachine::default(),
        })
    }

    #[must_use]
    pub fn with_callbacks(mut self, callbacks: HoverCallbacks) -> Self {
        self.interaction.set_callbacks(callbacks);
        self
    }

    pub fn set_callbacks(&mut self, callbacks: HoverCallbacks) {
        self.interaction.set_callbacks(callbacks);
    }

    #[must_use]
    pub fn config(&self) -> &PieChartConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PieChartConfig) -> ChartResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub fn interaction_state(&self) -> &InteractionState {
        self.interaction.state()
    }

    /// Builds the render plan for `tree` against the current hover state.
    #[must_use]
    pub fn build_scene(&self, tree: &[ChartNode]) -> SceneOutcome {
        assemble_scene(&self.config, tree, self.interaction.state())
    }

    /// Builds and draws one pass, returning the recoverable errors it hit.
    pub fn render(&mut self, tree: &[ChartNode]) -> ChartResult<Vec<ChartError>> {
        let SceneOutcome { plan, errors } = self.build_scene(tree);
        self.renderer.render(&plan)?;
        debug!(
            items = plan.items.len(),
            errors = errors.len(),
            "rendered pie chart"
        );
        Ok(errors)
    }

    pub fn handle_hover_enter(
        &mut self,
        target: HoverTarget,
        source: PointerEvent,
    ) -> &InteractionState {
        self.interaction.hover_enter(target, source)
    }

    pub fn handle_hover_leave(&mut self, source: PointerEvent) -> &InteractionState {
        self.interaction.hover_leave(source)
    }

    pub fn handle_click(&mut self, target: &HoverTarget, source: &PointerEvent) {
        self.interaction.click(target, source);
    }

    pub fn reset_interaction(&mut self) {
        self.interaction.reset();
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
