//! Presentation adapters over an [`AggregateViewModel`].
//!
//! Each shape is a pure mapping of the same view model; switching shapes
//! never recomputes the aggregate.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::model::AggregateViewModel;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChartShape {
    /// Part-to-whole: one slice per category.
    #[default]
    Donut,
    /// Single-series comparative: one series, one value per category.
    Bar,
    /// Per-category comparative: one single-valued series per category.
    Column,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub label: String,
    pub value: usize,
    pub percentage: f64,
    /// Text drawn on the slice, e.g. `"16.4%"`.
    pub data_label: String,
    /// Text shown on hover, e.g. `"100 (16.4%)"`.
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<usize>,
}

/// Chart-ready data for one shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ChartSpec {
    PartToWhole {
        slices: Vec<Slice>,
        total: usize,
    },
    SingleSeries {
        categories: Vec<String>,
        series: Series,
    },
    PerCategory {
        categories: Vec<String>,
        series: Vec<Series>,
    },
}

impl ChartSpec {
    pub fn shape(&self) -> ChartShape {
        match self {
            Self::PartToWhole { .. } => ChartShape::Donut,
            Self::SingleSeries { .. } => ChartShape::Bar,
            Self::PerCategory { .. } => ChartShape::Column,
        }
    }
}

/// Series name used by the single-series shape.
pub const SINGLE_SERIES_NAME: &str = "Count";

pub fn render(model: &AggregateViewModel, shape: ChartShape) -> ChartSpec {
    let categories: Vec<String> = model.categories.iter().map(|c| c.label.clone()).collect();

    match shape {
        ChartShape::Donut => ChartSpec::PartToWhole {
            slices: model
                .categories
                .iter()
                .map(|c| Slice {
                    label: c.label.clone(),
                    value: c.count,
                    percentage: c.percentage,
                    data_label: c.percentage_label(),
                    tooltip: c.tooltip(),
                })
                .collect(),
            total: model.total,
        },
        ChartShape::Bar => ChartSpec::SingleSeries {
            categories,
            series: Series {
                name: SINGLE_SERIES_NAME.to_string(),
                values: model.counts(),
            },
        },
        ChartShape::Column => ChartSpec::PerCategory {
            series: model
                .categories
                .iter()
                .map(|c| Series {
                    name: c.label.clone(),
                    values: vec![c.count],
                })
                .collect(),
            categories,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{CategorySource, aggregate};

    fn model() -> AggregateViewModel {
        aggregate(vec![
            CategorySource { label: "Users".to_string(), count: 10 },
            CategorySource { label: "Posts".to_string(), count: 100 },
            CategorySource { label: "Comments".to_string(), count: 500 },
        ])
    }

    #[test]
    fn test_donut_slices() {
        let spec = render(&model(), ChartShape::Donut);
        let ChartSpec::PartToWhole { slices, total } = spec else {
            panic!("expected part-to-whole spec");
        };
        assert_eq!(total, 610);
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].data_label, "1.6%");
        assert_eq!(slices[1].tooltip, "100 (16.4%)");
        assert_eq!(slices[2].value, 500);
    }

    #[test]
    fn test_bar_single_series() {
        let spec = render(&model(), ChartShape::Bar);
        assert_eq!(
            spec,
            ChartSpec::SingleSeries {
                categories: vec!["Users".into(), "Posts".into(), "Comments".into()],
                series: Series {
                    name: SINGLE_SERIES_NAME.to_string(),
                    values: vec![10, 100, 500],
                },
            }
        );
    }

    #[test]
    fn test_column_series_per_category() {
        let spec = render(&model(), ChartShape::Column);
        let ChartSpec::PerCategory { series, categories } = spec else {
            panic!("expected per-category spec");
        };
        assert_eq!(categories.len(), 3);
        assert_eq!(series[1].name, "Posts");
        assert_eq!(series[1].values, vec![100]);
    }

    #[test]
    fn test_shapes_share_the_same_model() {
        let model = model();
        for shape in [ChartShape::Donut, ChartShape::Bar, ChartShape::Column] {
            assert_eq!(render(&model, shape).shape(), shape);
        }
    }

    #[test]
    fn test_shape_parses() {
        assert_eq!("bar".parse::<ChartShape>().unwrap(), ChartShape::Bar);
        assert_eq!(ChartShape::Column.to_string(), "column");
    }
}
