use ddi_ingest::RawStatistic;
use ddi_model::Statistics;

/// Collects summary statistics in document order. Values stay text.
pub fn extract_statistics(raw: &[RawStatistic]) -> Statistics {
    let mut statistics = Statistics::default();
    for stat in raw {
        let value = stat.value.as_deref().unwrap_or_default().trim().to_string();
        statistics.push(stat.kind.clone(), value);
    }
    statistics
}
