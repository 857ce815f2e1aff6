//! Reshaping of the seasonal and yearly series into chart-ready records.

use model::{Category, SeasonalPattern, YearlyTrend, FALLBACK_HEX};

/// One x-axis position of a chart: a label, its total and every per-category
/// value the source row carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRecord {
    pub label: String,
    pub total: u64,
    pub series: Vec<(String, u64)>,
}

impl ChartRecord {
    /// Value of a named series, if this record carries it.
    pub fn value(&self, key: &str) -> Option<u64> {
        self.series
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| *value)
    }
}

/// Monthly records, in the order the artifact lists the months.
pub fn seasonal_records(patterns: &[SeasonalPattern]) -> Vec<ChartRecord> {
    patterns
        .iter()
        .map(|p| ChartRecord {
            label: p.month_name.clone(),
            total: p.total_events,
            series: owned(p.breakdown()),
        })
        .collect()
}

/// Yearly records, labelled by year, in artifact order.
pub fn yearly_records(trends: &[YearlyTrend]) -> Vec<ChartRecord> {
    trends
        .iter()
        .map(|t| ChartRecord {
            label: t.year.to_string(),
            total: t.total,
            series: owned(t.breakdown()),
        })
        .collect()
}

/// Union of series names across `records`, in first-seen order.
pub fn series_keys(records: &[ChartRecord]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for (key, _) in records.iter().flat_map(|r| r.series.iter()) {
        if !keys.contains(key) {
            keys.push(key.clone());
        }
    }
    keys
}

/// Record with the largest total; the earliest wins a tie.
pub fn peak_record(records: &[ChartRecord]) -> Option<&ChartRecord> {
    records
        .iter()
        .reduce(|best, r| if r.total > best.total { r } else { best })
}

/// Percent change of the total from the first record to the last.
pub fn growth_percent(records: &[ChartRecord]) -> Option<f64> {
    if records.len() < 2 {
        return None;
    }
    let first = records.first()?.total;
    let last = records.last()?.total;
    if first == 0 {
        return None;
    }
    Some((last as f64 - first as f64) / first as f64 * 100.0)
}

/// Title-cases a series key for legends, e.g. `sea_ice` -> `Sea Ice`.
pub fn series_label(key: &str) -> String {
    key.split(['_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Colour of a series, matched to a category by its filter token, e.g. the
/// `storms` series takes the Severe Storms colour.
pub fn series_color(key: &str) -> &'static str {
    let key = key.to_lowercase();
    Category::ALL
        .into_iter()
        .find(|category| key.contains(&category.filter_token().to_lowercase()))
        .map_or(FALLBACK_HEX, |category| category.hex())
}

fn owned(breakdown: Vec<(&str, u64)>) -> Vec<(String, u64)> {
    breakdown
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::AnalysisData;

    const FIXTURE: &str = include_str!("../../../fixtures/analysis_data.json");

    fn data() -> AnalysisData {
        AnalysisData::from_json(FIXTURE).unwrap()
    }

    #[test]
    fn test_seasonal_records_keep_month_order() {
        let data = data();
        let records = seasonal_records(&data.seasonal_patterns);

        let labels: Vec<&str> = records.iter().map(|r| r.label.as_str()).collect();
        let expected: Vec<&str> = data
            .seasonal_patterns
            .iter()
            .map(|p| p.month_name.as_str())
            .collect();
        assert_eq!(labels, expected);
        assert_eq!(labels.first(), Some(&"January"));
        assert_eq!(labels.last(), Some(&"December"));
    }

    #[test]
    fn test_seasonal_records_keep_every_category_once() {
        let data = data();
        let records = seasonal_records(&data.seasonal_patterns);

        for (record, pattern) in records.iter().zip(&data.seasonal_patterns) {
            assert_eq!(record.total, pattern.total_events);
            assert_eq!(record.series.len(), pattern.breakdown().len());
            for (key, value) in pattern.breakdown() {
                assert_eq!(record.value(key), Some(value));
                assert_eq!(record.series.iter().filter(|(k, _)| k == key).count(), 1);
            }
        }
        assert_eq!(
            series_keys(&records),
            vec!["storms".to_string(), "volcanoes".to_string(), "wildfires".to_string()]
        );
    }

    #[test]
    fn test_yearly_records() {
        let data = data();
        let records = yearly_records(&data.yearly_trends);
        assert_eq!(records.len(), 5);
        assert_eq!(records[0].label, "2020");
        assert_eq!(records[0].total, 5120);
        assert_eq!(records[4].value("wildfires"), Some(11570));
        assert_eq!(records[4].value("floods"), None);
    }

    #[test]
    fn test_peak_and_growth() {
        let data = data();
        let seasonal = seasonal_records(&data.seasonal_patterns);
        assert_eq!(peak_record(&seasonal).map(|r| r.label.as_str()), Some("August"));

        let yearly = yearly_records(&data.yearly_trends);
        let growth = growth_percent(&yearly).unwrap();
        assert!((growth - 236.1328125).abs() < 1e-9);
    }

    #[test]
    fn test_peak_tie_keeps_first() {
        let records = vec![
            ChartRecord { label: "a".into(), total: 5, series: vec![] },
            ChartRecord { label: "b".into(), total: 5, series: vec![] },
        ];
        assert_eq!(peak_record(&records).map(|r| r.label.as_str()), Some("a"));
        assert_eq!(peak_record(&[]), None);
    }

    #[test]
    fn test_growth_needs_two_records_and_nonzero_start() {
        let one = vec![ChartRecord { label: "2020".into(), total: 5, series: vec![] }];
        assert_eq!(growth_percent(&one), None);

        let zero_start = vec![
            ChartRecord { label: "2020".into(), total: 0, series: vec![] },
            ChartRecord { label: "2021".into(), total: 9, series: vec![] },
        ];
        assert_eq!(growth_percent(&zero_start), None);
    }

    #[test]
    fn test_series_label() {
        assert_eq!(series_label("storms"), "Storms");
        assert_eq!(series_label("sea_and_lake_ice"), "Sea And Lake Ice");
    }

    #[test]
    fn test_series_color() {
        assert_eq!(series_color("storms"), Category::SevereStorms.hex());
        assert_eq!(series_color("wildfires"), Category::Wildfires.hex());
        assert_eq!(series_color("volcanoes"), Category::Volcanoes.hex());
        assert_eq!(series_color("dust"), FALLBACK_HEX);
    }
}
