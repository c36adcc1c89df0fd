use indexmap::IndexMap;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::core::SliceStyle;
use crate::error::{ChartError, ChartResult};

/// Arbitrary per-point or per-series attributes, kept in declaration order.
pub type ExtraFields = IndexMap<String, Value>;

/// One entry of a series' data sequence.
///
/// Points are identified by position inside their series; `name` may repeat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub name: String,
    pub value: f64,
    #[serde(flatten)]
    pub style: SliceStyle,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl DataPoint {
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            style: SliceStyle::default(),
            extra: ExtraFields::new(),
        }
    }

    pub fn from_decimal(name: impl Into<String>, value: Decimal) -> ChartResult<Self> {
        let value = value.to_f64().ok_or_else(|| {
            ChartError::InvalidData("point value cannot be represented as f64".to_owned())
        })?;
        Ok(Self::new(name, value))
    }

    #[must_use]
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.style.fill = Some(fill.into());
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.style.stroke = Some(stroke.into());
        self
    }

    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.style.stroke_width = Some(stroke_width);
        self
    }

    #[must_use]
    pub fn with_stroke_dasharray(mut self, dasharray: impl Into<String>) -> Self {
        self.style.stroke_dasharray = Some(dasharray.into());
        self
    }

    /// Sets an arbitrary attribute. Reserved keys (`name`, `value` and the
    /// style attributes) update the typed fields instead of `extra`.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let value = value.into();
        if !assign_reserved(&key, &value, &mut self.name, &mut self.value, &mut self.style) {
            self.extra.insert(key, value);
        }
        self
    }
}

// Keys with a typed home on a point never land in `extra`. Returns `true` when
// `key` is one of them, whether or not `value` could be used.
fn assign_reserved(
    key: &str,
    value: &Value,
    name: &mut String,
    number: &mut f64,
    style: &mut SliceStyle,
) -> bool {
    match key {
        "name" => *name = text_of(value),
        "value" | "strokeWidth" => {
            let Some(parsed) = value.as_f64() else {
                warn!(key, %value, "ignoring non-numeric point attribute");
                return true;
            };
            if key == "value" {
                *number = parsed;
            } else {
                style.stroke_width = Some(parsed);
            }
        }
        "fill" => style.fill = Some(text_of(value)),
        "stroke" => style.stroke = Some(text_of(value)),
        "strokeDasharray" => style.stroke_dasharray = Some(text_of(value)),
        _ => return false,
    }
    true
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Declaration of one pie (or donut ring) inside a chart tree.
///
/// `data` is optional so that a declaration without a data sequence can be
/// represented and rejected explicitly by [`compose`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesDeclaration {
    #[serde(flatten)]
    pub style: SliceStyle,
    #[serde(default)]
    pub data: Option<Vec<DataPoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cx: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outer_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_radius: Option<f64>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl SeriesDeclaration {
    #[must_use]
    pub fn new(data: Vec<DataPoint>) -> Self {
        Self {
            data: Some(data),
            ..Self::default()
        }
    }

    /// Declaration with no data sequence at all.
    #[must_use]
    pub fn without_data() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_style(mut self, style: SliceStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.style.fill = Some(fill.into());
        self
    }

    #[must_use]
    pub fn with_center(mut self, cx: f64, cy: f64) -> Self {
        self.cx = Some(cx);
        self.cy = Some(cy);
        self
    }

    #[must_use]
    pub fn with_outer_radius(mut self, outer_radius: f64) -> Self {
        self.outer_radius = Some(outer_radius);
        self
    }

    #[must_use]
    pub fn with_inner_radius(mut self, inner_radius: f64) -> Self {
        self.inner_radius = Some(inner_radius);
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// A data point after series-level style has been merged underneath it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposedRecord {
    pub name: String,
    pub value: f64,
    #[serde(flatten)]
    pub style: SliceStyle,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl ComposedRecord {
    #[must_use]
    pub fn from_point(series_style: &SliceStyle, point: &DataPoint) -> Self {
        let mut name = point.name.clone();
        let mut value = point.value;
        let mut point_style = point.style.clone();
        let mut extra = ExtraFields::with_capacity(point.extra.len());
        for (key, field) in &point.extra {
            if !assign_reserved(key, field, &mut name, &mut value, &mut point_style) {
                extra.insert(key.clone(), field.clone());
            }
        }

        Self {
            name,
            value,
            style: series_style.overlay(&point_style),
            extra,
        }
    }
}

/// Flattens a series declaration into one record per data point.
///
/// Order is preserved and the declaration is never mutated, so repeated calls
/// produce identical output. A declaration without a data sequence yields
/// `ChartError::MissingData`; an empty sequence is valid.
pub fn compose(series: &SeriesDeclaration) -> ChartResult<Vec<ComposedRecord>> {
    let data = series
        .data
        .as_deref()
        .ok_or(ChartError::MissingData { series_index: None })?;

    Ok(data
        .iter()
        .map(|point| ComposedRecord::from_point(&series.style, point))
        .collect())
}
