mod chart;
mod chart_config;
mod scene_assembler;

pub use chart::PieChart;
pub use chart_config::PieChartConfig;
pub use scene_assembler::{SceneOutcome, assemble_scene, wrapper_style};
