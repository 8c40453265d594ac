// Time series domain models
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub label: String,
    pub value: f64,
}

impl TimeSeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Fixed value range a chart is drawn against instead of the data's own min/max
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueDomain {
    pub min: f64,
    pub max: f64,
}

/// Fixed-length FIFO window of points.
///
/// The length is set at construction and never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RollingSeries {
    points: VecDeque<TimeSeriesPoint>,
}

impl RollingSeries {
    pub fn new(points: Vec<TimeSeriesPoint>) -> Self {
        Self {
            points: points.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// New window with the oldest point dropped and `point` appended
    pub fn pushed(&self, point: TimeSeriesPoint) -> Self {
        // zero-length windows stay empty
        if self.is_empty() {
            return self.clone();
        }
        let mut points = self.points.clone();
        points.pop_front();
        points.push_back(point);
        Self { points }
    }

    pub fn to_vec(&self) -> Vec<TimeSeriesPoint> {
        self.points.iter().cloned().collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub id: String,
    pub title: String,
    pub domain: Option<ValueDomain>,
    pub points: Vec<TimeSeriesPoint>,
}

impl ChartSeries {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        domain: Option<ValueDomain>,
        points: Vec<TimeSeriesPoint>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            domain,
            points,
        }
    }

    pub fn latest(&self) -> Option<f64> {
        self.points.last().map(|p| p.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hourly(len: usize) -> Vec<TimeSeriesPoint> {
        (0..len)
            .map(|i| TimeSeriesPoint::new(format!("{}:00", i), i as f64))
            .collect()
    }

    #[test]
    fn test_push_keeps_length_and_order() {
        let series = RollingSeries::new(hourly(24));
        let next = series.pushed(TimeSeriesPoint::new("12:34", 99.0));

        assert_eq!(next.len(), 24);
        let points = next.to_vec();
        assert_eq!(points[0].label, "1:00");
        assert_eq!(points[23].label, "12:34");
        assert_eq!(points[23].value, 99.0);
        // source window untouched
        assert_eq!(series.to_vec()[0].label, "0:00");
    }

    #[test]
    fn test_push_on_empty_window() {
        let series = RollingSeries::new(Vec::new());
        let next = series.pushed(TimeSeriesPoint::new("x", 1.0));
        assert_eq!(next.len(), 0);
        assert!(next.to_vec().is_empty());
    }

    #[test]
    fn test_latest_value() {
        let chart = ChartSeries::new("perf", "Performance", None, hourly(3));
        assert_eq!(chart.latest(), Some(2.0));
        assert_eq!(ChartSeries::new("e", "Empty", None, Vec::new()).latest(), None);
    }
}
