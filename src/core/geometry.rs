use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::SeriesDeclaration;
use crate::error::{ChartError, ChartResult};

/// Share of half the shorter container side used as default outer radius.
pub const DEFAULT_OUTER_RADIUS_RATIO: f64 = 0.8;

/// Center and outer radius used to place one series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometryDefaults {
    pub cx: f64,
    pub cy: f64,
    pub outer_radius: f64,
}

impl GeometryDefaults {
    #[must_use]
    pub const fn new(cx: f64, cy: f64, outer_radius: f64) -> Self {
        Self {
            cx,
            cy,
            outer_radius,
        }
    }
}

/// Resolves placement for `series` inside a `width` x `height` container.
///
/// Values declared on the series always win, including an explicit `0.0`.
/// Missing values default to the container center and to
/// `DEFAULT_OUTER_RADIUS_RATIO` of half the shorter side.
pub fn resolve_geometry(
    series: &SeriesDeclaration,
    width: f64,
    height: f64,
) -> ChartResult<GeometryDefaults> {
    validate_container(width, height)?;
    Ok(resolve_unchecked(series, width, height))
}

/// Like [`resolve_geometry`], but an invalid container is logged and replaced
/// by a zero-sized one. The error is returned alongside the fallback geometry.
pub fn resolve_geometry_or_zero(
    series: &SeriesDeclaration,
    width: f64,
    height: f64,
) -> (GeometryDefaults, Option<ChartError>) {
    match resolve_geometry(series, width, height) {
        Ok(geometry) => (geometry, None),
        Err(err) => {
            warn!(
                error = %err,
                "falling back to zero-sized geometry for series"
            );
            (resolve_unchecked(series, 0.0, 0.0), Some(err))
        }
    }
}

fn resolve_unchecked(series: &SeriesDeclaration, width: f64, height: f64) -> GeometryDefaults {
    let max_radius = width.min(height) / 2.0;
    GeometryDefaults {
        cx: series.cx.unwrap_or(width / 2.0),
        cy: series.cy.unwrap_or(height / 2.0),
        outer_radius: series
            .outer_radius
            .unwrap_or(max_radius * DEFAULT_OUTER_RADIUS_RATIO),
    }
}

fn validate_container(width: f64, height: f64) -> ChartResult<()> {
    if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
        return Err(ChartError::InvalidDimension { width, height });
    }
    Ok(())
}
