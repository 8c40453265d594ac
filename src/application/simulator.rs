// Dashboard state container and simulated telemetry
//
// Every change goes through `DashboardState::apply`, which consumes the old
// state and returns a new one.
use crate::domain::activity::ActivityItem;
use crate::domain::dashboard::{DashboardSeed, Gauge};
use crate::domain::facility::FacilityPoint;
use crate::domain::industry::Industry;
use crate::domain::metric::{Metric, MetricForm, Trend};
use crate::domain::series::{ChartSeries, RollingSeries, TimeSeriesPoint, ValueDomain};
use chrono::NaiveTime;
use rand::Rng;

/// Relative size of the per-tick random walk (±1% of the current value)
const WALK_FACTOR: f64 = 0.02;
/// Fresh percent change drawn each tick from -CHANGE_SPREAD..CHANGE_SPREAD
const CHANGE_SPREAD: f64 = 5.0;
const HISTORY_DAYS: usize = 30;

const PERFORMANCE_RANGE: (f64, f64) = (80.0, 100.0);
const EFFICIENCY_RANGE: (f64, f64) = (85.0, 100.0);
const HISTORY_RANGE: (f64, f64) = (75.0, 100.0);
const PERFORMANCE_DOMAIN: ValueDomain = ValueDomain { min: 60.0, max: 100.0 };

#[derive(Debug, Clone)]
pub enum DashboardEvent {
    /// Periodic telemetry update, labelled with the wall-clock time
    Tick { at: NaiveTime },
    /// User-submitted KPI; `id` is the proposed identifier
    AddMetric { form: MetricForm, id: String },
    /// Outcome of parsing an uploaded file. Never merged into the dashboard.
    FileImported { file_name: String, records: usize },
    /// Switch to another industry's data set
    Reseed(DashboardSeed),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Ticked,
    MetricAdded(Metric),
    Rejected,
    Reseeded,
    Unchanged,
}

/// Snapshot of everything the dashboard shows
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub industry: Industry,
    pub title: String,
    pub metrics: Vec<Metric>,
    pub gauges: Vec<Gauge>,
    pub facilities: Vec<FacilityPoint>,
    pub activities: Vec<ActivityItem>,
    pub performance: RollingSeries,
    pub efficiency: ChartSeries,
    pub historical: ChartSeries,
    pub ticks: u64,
}

impl DashboardState {
    pub fn from_seed<R: Rng>(seed: DashboardSeed, series_length: usize, rng: &mut R) -> Self {
        let performance = RollingSeries::new(hourly_points(series_length, PERFORMANCE_RANGE, rng));
        let efficiency = ChartSeries::new(
            "efficiency",
            "Efficiency Metrics",
            None,
            hourly_points(series_length, EFFICIENCY_RANGE, rng),
        );
        let historical = ChartSeries::new(
            "historical",
            "Historical Trends",
            None,
            (0..HISTORY_DAYS)
                .map(|i| TimeSeriesPoint::new(format!("Day {}", i + 1), sample(HISTORY_RANGE, rng)))
                .collect(),
        );

        Self {
            industry: seed.industry,
            title: seed.title,
            metrics: seed.metrics,
            gauges: seed.gauges,
            facilities: seed.facilities,
            activities: seed.activities,
            performance,
            efficiency,
            historical,
            ticks: 0,
        }
    }

    /// Single entry point for every state change
    pub fn apply<R: Rng>(self, event: DashboardEvent, rng: &mut R) -> (Self, Outcome) {
        match event {
            DashboardEvent::Tick { at } => (self.ticked(at, rng), Outcome::Ticked),
            DashboardEvent::AddMetric { form, id } => self.with_metric(form, id),
            DashboardEvent::FileImported { file_name, records } => {
                tracing::debug!("Upload {} ({} records) left out of dashboard state", file_name, records);
                (self, Outcome::Unchanged)
            }
            DashboardEvent::Reseed(seed) => {
                let series_length = self.performance.len();
                (Self::from_seed(seed, series_length, rng), Outcome::Reseeded)
            }
        }
    }

    /// The live performance series in chart form
    pub fn performance_chart(&self) -> ChartSeries {
        ChartSeries::new(
            "performance",
            "Performance Trends",
            Some(PERFORMANCE_DOMAIN),
            self.performance.to_vec(),
        )
    }

    fn ticked<R: Rng>(self, at: NaiveTime, rng: &mut R) -> Self {
        // trend is a coin flip on purpose; it does not follow the sign of change
        let metrics = self
            .metrics
            .into_iter()
            .map(|metric| Metric {
                value: metric.value + rng.gen_range(-0.5..0.5) * metric.value * WALK_FACTOR,
                change: rng.gen_range(-CHANGE_SPREAD..CHANGE_SPREAD),
                trend: if rng.gen_bool(0.5) { Trend::Up } else { Trend::Down },
                ..metric
            })
            .collect();

        let label = at.format("%H:%M").to_string();
        let performance = self
            .performance
            .pushed(TimeSeriesPoint::new(label, sample(PERFORMANCE_RANGE, rng)));

        Self {
            metrics,
            performance,
            ticks: self.ticks + 1,
            ..self
        }
    }

    fn with_metric(mut self, form: MetricForm, id: String) -> (Self, Outcome) {
        let id = self.unique_metric_id(id);
        match form.into_metric(id) {
            Some(metric) => {
                self.metrics.push(metric.clone());
                (self, Outcome::MetricAdded(metric))
            }
            None => (self, Outcome::Rejected),
        }
    }

    fn unique_metric_id(&self, proposed: String) -> String {
        let taken = |id: &str| self.metrics.iter().any(|m| m.id == id);
        if !taken(&proposed) {
            return proposed;
        }
        let mut n = 1;
        loop {
            let candidate = format!("{}-{}", proposed, n);
            if !taken(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}

fn sample<R: Rng>((lo, hi): (f64, f64), rng: &mut R) -> f64 {
    rng.gen_range(lo..=hi)
}

fn hourly_points<R: Rng>(len: usize, range: (f64, f64), rng: &mut R) -> Vec<TimeSeriesPoint> {
    (0..len)
        .map(|i| TimeSeriesPoint::new(format!("{}:00", i), sample(range, rng)))
        .collect()
}
