use model::{AnalysisData, Category};

/// Observation count of one category and its share of all observations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryMetric {
    pub category: Category,
    pub count: u64,
    /// Percent of `metadata.total_observations`; 0 when that total is 0
    pub share_percent: f64,
}

pub fn category_metric(data: &AnalysisData, category: Category) -> CategoryMetric {
    let count = data.executive_metrics.count_for(category.label());
    let total = data.metadata.total_observations;
    let share_percent = if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    };

    CategoryMetric {
        category,
        count,
        share_percent,
    }
}

/// One card per known category, in vocabulary order.
pub fn executive_cards(data: &AnalysisData) -> Vec<CategoryMetric> {
    Category::ALL
        .into_iter()
        .map(|category| category_metric(data, category))
        .collect()
}
