use crate::error::ChartResult;
use crate::render::{Renderer, SceneItem, SceneItemKind, ScenePlan};

/// No-op renderer used by tests and headless usage.
///
/// It still validates the plan and records what a real backend would have
/// drawn, so tests can assert on ordering and counts.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_item_kinds: Vec<SceneItemKind>,
    pub last_legend_rows: usize,
    pub last_slice_group_count: usize,
    pub last_record_count: usize,
    pub last_tooltip_visible: bool,
}

impl Renderer for NullRenderer {
    fn render(&mut self, plan: &ScenePlan) -> ChartResult<()> {
        plan.validate()?;
        self.render_count += 1;
        self.last_item_kinds = plan.item_kinds();
        self.last_legend_rows = 0;
        self.last_slice_group_count = 0;
        self.last_record_count = 0;
        self.last_tooltip_visible = false;

        for item in &plan.items {
            match item {
                SceneItem::Legend(legend) => self.last_legend_rows += legend.data.len(),
                SceneItem::Body(surface) => {
                    self.last_slice_group_count = surface.slice_groups.len();
                    self.last_record_count = surface
                        .slice_groups
                        .iter()
                        .map(|group| group.records.len())
                        .sum();
                }
                SceneItem::Tooltip(tooltip) => self.last_tooltip_visible = tooltip.is_visible(),
            }
        }
        Ok(())
    }
}
