mod null_renderer;
mod scene_plan;

pub use null_renderer::NullRenderer;
pub use scene_plan::{
    LegendRenderRequest, SCENE_PLAN_JSON_SCHEMA_V1, SceneItem, SceneItemKind, ScenePlan,
    SliceGroupRequest, StyleMap, SurfaceRequest, TooltipRenderRequest,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, ordered `ScenePlan` so drawing code
/// stays isolated from declaration parsing and interaction logic. Hover events
/// on drawn slices are routed back through `PieChart::handle_hover_enter` and
/// `PieChart::handle_hover_leave`.
pub trait Renderer {
    fn render(&mut self, plan: &ScenePlan) -> ChartResult<()>;
}
