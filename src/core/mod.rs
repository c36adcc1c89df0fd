pub mod geometry;
pub mod legend;
pub mod series;
pub mod style;
pub mod tree;
pub mod types;

pub use geometry::{
    DEFAULT_OUTER_RADIUS_RATIO, GeometryDefaults, resolve_geometry, resolve_geometry_or_zero,
};
pub use legend::{
    HorizontalAlign, LegendDeclaration, LegendEntry, LegendLayout, VerticalAlign,
    aggregate_legend,
};
pub use series::{ComposedRecord, DataPoint, ExtraFields, SeriesDeclaration, compose};
pub use style::SliceStyle;
pub use tree::{
    ChartNode, DeclarationNode, NodeKind, find_all, find_all_by_type, find_child_by_type,
    find_first,
};
pub use types::{Coordinate, Margin, TooltipDeclaration, ViewBox};
