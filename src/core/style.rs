use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Presentation attributes shared by a series and overridable per data point.
///
/// Every attribute is optional: an unset attribute on an overlay never erases a
/// value set underneath it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliceStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_dasharray: Option<String>,
}

impl SliceStyle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = Some(stroke_width);
        self
    }

    #[must_use]
    pub fn with_stroke_dasharray(mut self, dasharray: impl Into<String>) -> Self {
        self.stroke_dasharray = Some(dasharray.into());
        self
    }

    /// Returns `self` overlaid by `top`: attributes set on `top` win.
    #[must_use]
    pub fn overlay(&self, top: &SliceStyle) -> SliceStyle {
        SliceStyle {
            fill: top.fill.clone().or_else(|| self.fill.clone()),
            stroke: top.stroke.clone().or_else(|| self.stroke.clone()),
            stroke_width: top.stroke_width.or(self.stroke_width),
            stroke_dasharray: top
                .stroke_dasharray
                .clone()
                .or_else(|| self.stroke_dasharray.clone()),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fill.is_none()
            && self.stroke.is_none()
            && self.stroke_width.is_none()
            && self.stroke_dasharray.is_none()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if let Some(width) = self.stroke_width {
            if !width.is_finite() || width < 0.0 {
                return Err(ChartError::InvalidData(
                    "stroke width must be finite and >= 0".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SliceStyle;

    #[test]
    fn overlay_keeps_base_attributes_unset_on_top() {
        let base = SliceStyle::new()
            .with_fill("red")
            .with_stroke("#fff")
            .with_stroke_width(1.0);
        let top = SliceStyle::new().with_fill("blue").with_stroke_dasharray("2 2");

        let merged = base.overlay(&top);

        assert_eq!(merged.fill.as_deref(), Some("blue"));
        assert_eq!(merged.stroke.as_deref(), Some("#fff"));
        assert_eq!(merged.stroke_width, Some(1.0));
        assert_eq!(merged.stroke_dasharray.as_deref(), Some("2 2"));
    }

    #[test]
    fn negative_stroke_width_is_invalid() {
        assert!(SliceStyle::new().with_stroke_width(-1.0).validate().is_err());
        assert!(SliceStyle::new().validate().is_ok());
        assert!(SliceStyle::new().is_empty());
    }
}
