use serde::{Deserialize, Serialize};

use crate::core::{Margin, ViewBox};
use crate::error::{ChartError, ChartResult};
use crate::render::StyleMap;

/// Public chart bootstrap configuration.
///
/// `width` and `height` are required; everything else has a default so hosts
/// can load a partial JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieChartConfig {
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_box: Option<ViewBox>,
    #[serde(default)]
    pub margin: Margin,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub style: StyleMap,
}

impl PieChartConfig {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            view_box: None,
            margin: Margin::default(),
            title: None,
            style: StyleMap::new(),
        }
    }

    #[must_use]
    pub fn with_view_box(mut self, view_box: ViewBox) -> Self {
        self.view_box = Some(view_box);
        self
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_style_property(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.style.insert(key.into(), value.into());
        self
    }

    /// The declared view box, or one covering the whole container.
    #[must_use]
    pub fn effective_view_box(&self) -> ViewBox {
        self.view_box
            .unwrap_or_else(|| ViewBox::new(0.0, 0.0, self.width, self.height))
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width < 0.0
            || self.height < 0.0
        {
            return Err(ChartError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        self.margin.validate()?;
        if let Some(view_box) = self.view_box {
            view_box.validate()?;
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to parse chart config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize chart config json: {e}"))
        })
    }
}
