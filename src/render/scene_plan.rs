use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use smallvec::SmallVec;

use crate::core::{
    ComposedRecord, ExtraFields, GeometryDefaults, LegendDeclaration, LegendEntry, Margin,
    SliceStyle, TooltipDeclaration, ViewBox,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::InteractionState;

/// CSS-like style map applied to the chart wrapper.
pub type StyleMap = IndexMap<String, Value>;

pub const SCENE_PLAN_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SceneItemKind {
    Legend,
    Body,
    Tooltip,
}

/// Legend render request: available width plus the aggregated rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendRenderRequest {
    pub width: f64,
    pub declaration: LegendDeclaration,
    pub data: Vec<LegendEntry>,
}

/// Draw request for one series: its records, placement and pass-through
/// attributes. Hover events raised by these slices must be routed back with
/// `series_index` so the chart can identify them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliceGroupRequest {
    pub series_index: usize,
    pub records: Vec<ComposedRecord>,
    #[serde(flatten)]
    pub geometry: GeometryDefaults,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_radius: Option<f64>,
    pub style_overrides: SliceStyle,
    pub attributes: ExtraFields,
}

impl SliceGroupRequest {
    pub fn validate(&self) -> ChartResult<()> {
        let GeometryDefaults {
            cx,
            cy,
            outer_radius,
        } = self.geometry;
        if !cx.is_finite() || !cy.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "slice group {} center must be finite",
                self.series_index
            )));
        }
        if !outer_radius.is_finite() || outer_radius < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "slice group {} outer radius must be finite and >= 0",
                self.series_index
            )));
        }
        if let Some(inner_radius) = self.inner_radius {
            if !inner_radius.is_finite() || inner_radius < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "slice group {} inner radius must be finite and >= 0",
                    self.series_index
                )));
            }
        }
        self.style_overrides.validate()?;
        for record in &self.records {
            record.style.validate()?;
        }
        Ok(())
    }
}

/// The drawing surface hosting every slice group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceRequest {
    pub width: f64,
    pub height: f64,
    pub view_box: ViewBox,
    pub margin: Margin,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub slice_groups: Vec<SliceGroupRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipRenderRequest {
    pub declaration: TooltipDeclaration,
    pub state: InteractionState,
}

impl TooltipRenderRequest {
    /// Tooltip renderers draw nothing while the tooltip is inactive.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state.is_tooltip_active
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SceneItem {
    Legend(LegendRenderRequest),
    Body(SurfaceRequest),
    Tooltip(TooltipRenderRequest),
}

impl SceneItem {
    #[must_use]
    pub fn kind(&self) -> SceneItemKind {
        match self {
            Self::Legend(_) => SceneItemKind::Legend,
            Self::Body(_) => SceneItemKind::Body,
            Self::Tooltip(_) => SceneItemKind::Tooltip,
        }
    }
}

/// Backend-agnostic, ordered render plan for one chart pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenePlan {
    pub wrapper_style: StyleMap,
    pub items: SmallVec<[SceneItem; 3]>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ScenePlanJsonContractV1 {
    schema_version: u32,
    plan: ScenePlan,
}

impl ScenePlan {
    #[must_use]
    pub fn item_kinds(&self) -> Vec<SceneItemKind> {
        self.items.iter().map(SceneItem::kind).collect()
    }

    #[must_use]
    pub fn body(&self) -> Option<&SurfaceRequest> {
        self.items.iter().find_map(|item| match item {
            SceneItem::Body(surface) => Some(surface),
            _ => None,
        })
    }

    #[must_use]
    pub fn legend(&self) -> Option<&LegendRenderRequest> {
        self.items.iter().find_map(|item| match item {
            SceneItem::Legend(legend) => Some(legend),
            _ => None,
        })
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<&TooltipRenderRequest> {
        self.items.iter().find_map(|item| match item {
            SceneItem::Tooltip(tooltip) => Some(tooltip),
            _ => None,
        })
    }

    pub fn validate(&self) -> ChartResult<()> {
        let bodies = self
            .items
            .iter()
            .filter(|item| item.kind() == SceneItemKind::Body)
            .count();
        if bodies != 1 {
            return Err(ChartError::InvalidData(format!(
                "scene plan must contain exactly one chart body, found {bodies}"
            )));
        }
        if let Some(surface) = self.body() {
            for group in &surface.slice_groups {
                group.validate()?;
            }
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        let payload = ScenePlanJsonContractV1 {
            schema_version: SCENE_PLAN_JSON_SCHEMA_V1,
            plan: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize scene plan contract v1: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let payload: ScenePlanJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse scene plan json payload: {e}"))
        })?;
        if payload.schema_version != SCENE_PLAN_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported scene plan schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.plan)
    }
}
