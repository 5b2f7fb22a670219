//! Aggregate view model and the pure aggregation step.

use serde::Serialize;

/// One labelled input to [`aggregate`]: the size of a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySource {
    pub label: String,
    pub count: usize,
}

impl CategorySource {
    /// Counts `collection` under `label`.
    pub fn of<T>(label: impl Into<String>, collection: &[T]) -> Self {
        Self {
            label: label.into(),
            count: collection.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub label: String,
    pub count: usize,
    /// Share of the total in percent, rounded to one decimal place.
    pub percentage: f64,
}

impl Category {
    /// Percentage formatted the way chart labels show it, e.g. `"16.4%"`.
    pub fn percentage_label(&self) -> String {
        format!("{:.1}%", self.percentage)
    }

    /// Count with its share, e.g. `"100 (16.4%)"`.
    pub fn tooltip(&self) -> String {
        format!("{} ({})", self.count, self.percentage_label())
    }
}

/// Ordered categorical counts, derived on demand and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateViewModel {
    pub categories: Vec<Category>,
    pub total: usize,
}

impl AggregateViewModel {
    pub fn labels(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.label.as_str()).collect()
    }

    pub fn counts(&self) -> Vec<usize> {
        self.categories.iter().map(|c| c.count).collect()
    }

    pub fn percentages(&self) -> Vec<f64> {
        self.categories.iter().map(|c| c.percentage).collect()
    }
}

/// Counts each labelled collection and derives its share of the total.
///
/// Pure: identical inputs always produce an identical view model. When the
/// total is zero every percentage is `0.0`.
pub fn aggregate(sources: impl IntoIterator<Item = CategorySource>) -> AggregateViewModel {
    let sources: Vec<CategorySource> = sources.into_iter().collect();
    let total: usize = sources.iter().map(|s| s.count).sum();

    let categories = sources
        .into_iter()
        .map(|source| Category {
            percentage: percentage(source.count, total),
            label: source.label,
            count: source.count,
        })
        .collect();

    AggregateViewModel { categories, total }
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = count as f64 / total as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}
