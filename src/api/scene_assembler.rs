use serde_json::Value;
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::core::{
    ChartNode, GeometryDefaults, LegendDeclaration, SeriesDeclaration, SliceStyle,
    TooltipDeclaration, aggregate_legend, compose, find_all, find_first,
    resolve_geometry_or_zero,
};
use crate::error::ChartError;
use crate::interaction::InteractionState;
use crate::render::{
    LegendRenderRequest, SceneItem, ScenePlan, SliceGroupRequest, StyleMap, SurfaceRequest,
    TooltipRenderRequest,
};

use super::PieChartConfig;

/// Result of one assembly pass: the plan plus every recoverable error hit on
/// the way. A non-empty `errors` list never means the plan is unusable.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneOutcome {
    pub plan: ScenePlan,
    pub errors: Vec<ChartError>,
}

impl SceneOutcome {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Builds the ordered render plan for `tree`.
///
/// Order: legend (horizontal + top only), chart body, legend (any other
/// placement), tooltip. Series that fail to compose, or whose group carries
/// invalid geometry or style, render as empty slice groups and are reported
/// in [`SceneOutcome::errors`].
#[must_use]
pub fn assemble_scene(
    config: &PieChartConfig,
    tree: &[ChartNode],
    interaction: &InteractionState,
) -> SceneOutcome {
    let series = find_all::<SeriesDeclaration>(tree);
    let legend = find_first::<LegendDeclaration>(tree).copied();
    let tooltip = find_first::<TooltipDeclaration>(tree).copied();

    debug!(
        series = series.len(),
        legend = legend.is_some(),
        tooltip = tooltip.is_some(),
        "assemble pie chart scene"
    );

    let mut errors = Vec::new();
    let mut items: SmallVec<[SceneItem; 3]> = SmallVec::new();

    let legend_first = legend.is_some_and(LegendDeclaration::renders_before_body);
    if let Some(declaration) = legend.filter(|_| legend_first) {
        items.push(legend_item(config, declaration, &series));
    }

    let slice_groups = series
        .iter()
        .enumerate()
        .map(|(index, declaration)| slice_group(config, index, declaration, &mut errors))
        .collect();
    items.push(SceneItem::Body(SurfaceRequest {
        width: config.width,
        height: config.height,
        view_box: config.effective_view_box(),
        margin: config.margin,
        title: config.title.clone(),
        slice_groups,
    }));

    if let Some(declaration) = legend.filter(|_| !legend_first) {
        items.push(legend_item(config, declaration, &series));
    }

    if let Some(declaration) = tooltip {
        items.push(SceneItem::Tooltip(TooltipRenderRequest {
            declaration,
            state: interaction.clone(),
        }));
    }

    SceneOutcome {
        plan: ScenePlan {
            wrapper_style: wrapper_style(&config.style),
            items,
        },
        errors,
    }
}

/// Base wrapper style with the host style layered on top.
#[must_use]
pub fn wrapper_style(user_style: &StyleMap) -> StyleMap {
    let mut style = StyleMap::new();
    style.insert("position".to_owned(), Value::from("relative"));
    style.insert("cursor".to_owned(), Value::from("default"));
    for (key, value) in user_style {
        style.insert(key.clone(), value.clone());
    }
    style
}

fn legend_item(
    config: &PieChartConfig,
    declaration: LegendDeclaration,
    series: &[&SeriesDeclaration],
) -> SceneItem {
    SceneItem::Legend(LegendRenderRequest {
        width: config.width,
        declaration,
        data: aggregate_legend(series),
    })
}

fn slice_group(
    config: &PieChartConfig,
    series_index: usize,
    declaration: &SeriesDeclaration,
    errors: &mut Vec<ChartError>,
) -> SliceGroupRequest {
    let (geometry, geometry_error) =
        resolve_geometry_or_zero(declaration, config.width, config.height);
    if let Some(err) = geometry_error {
        errors.push(err);
    }

    let records = compose(declaration).unwrap_or_else(|err| {
        let err = err.for_series(series_index);
        warn!(series_index, error = %err, "rendering empty slice group");
        errors.push(err);
        Vec::new()
    });

    let group = SliceGroupRequest {
        series_index,
        records,
        geometry,
        inner_radius: declaration.inner_radius,
        style_overrides: declaration.style.clone(),
        attributes: declaration.extra.clone(),
    };

    match group.validate() {
        Ok(()) => group,
        Err(err) => {
            warn!(series_index, error = %err, "rendering empty slice group");
            errors.push(ChartError::InvalidSeries {
                series_index,
                reason: err.to_string(),
            });
            empty_slice_group(group)
        }
    }
}

// Drops everything a backend could choke on, keeping only pass-through attributes.
fn empty_slice_group(group: SliceGroupRequest) -> SliceGroupRequest {
    SliceGroupRequest {
        series_index: group.series_index,
        records: Vec::new(),
        geometry: GeometryDefaults::new(0.0, 0.0, 0.0),
        inner_radius: None,
        style_overrides: SliceStyle::default(),
        attributes: group.attributes,
    }
}
