use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::series::{ExtraFields, compose};
use crate::core::SeriesDeclaration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LegendLayout {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VerticalAlign {
    Top,
    Middle,
    #[default]
    Bottom,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HorizontalAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Legend node declared in a chart tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegendDeclaration {
    pub layout: LegendLayout,
    pub vertical_align: VerticalAlign,
    pub align: HorizontalAlign,
}

impl LegendDeclaration {
    #[must_use]
    pub fn new(layout: LegendLayout, vertical_align: VerticalAlign) -> Self {
        Self {
            layout,
            vertical_align,
            align: HorizontalAlign::default(),
        }
    }

    #[must_use]
    pub fn with_align(mut self, align: HorizontalAlign) -> Self {
        self.align = align;
        self
    }

    /// Only a horizontal legend pinned to the top is drawn above the chart body.
    #[must_use]
    pub fn renders_before_body(self) -> bool {
        self.layout == LegendLayout::Horizontal && self.vertical_align == VerticalAlign::Top
    }
}

/// One legend row: the point name as label, its fill as swatch color, plus
/// the point's remaining attributes (`fill` included).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_dasharray: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Collects legend rows for every series, in series order then point order.
///
/// A series without a data sequence contributes nothing here; scene assembly
/// is responsible for reporting it.
#[must_use]
pub fn aggregate_legend(series: &[&SeriesDeclaration]) -> Vec<LegendEntry> {
    let mut entries = Vec::new();
    for (series_index, declaration) in series.iter().enumerate() {
        let records = match compose(declaration) {
            Ok(records) => records,
            Err(err) => {
                debug!(series_index, error = %err, "legend skips series");
                continue;
            }
        };

        entries.extend(records.into_iter().map(|record| LegendEntry {
            value: record.name,
            color: record.style.fill.clone(),
            fill: record.style.fill,
            stroke: record.style.stroke,
            stroke_width: record.style.stroke_width,
            stroke_dasharray: record.style.stroke_dasharray,
            extra: record.extra,
        }));
    }
    entries
}
