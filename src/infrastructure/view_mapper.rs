// Mapper from dashboard state to render-ready JSON view models
use crate::application::simulator::DashboardState;
use crate::domain::activity::{ActivityItem, ActivityKind};
use crate::domain::dashboard::Gauge;
use crate::domain::facility::{FacilityPoint, FacilityStatus};
use crate::domain::geometry::{area_path, line_path, map_points, Band, ChartFrame, GaugeArc};
use crate::domain::icon::{Icon, Tone};
use crate::domain::industry::Industry;
use crate::domain::metric::{Metric, Trend};
use crate::domain::series::ChartSeries;
use serde::Serialize;

/// Geometry settings the views are drawn with
#[derive(Debug, Clone, Copy)]
pub struct ViewSettings {
    /// Frame for the live performance chart
    pub frame: ChartFrame,
    pub gauge_radius: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub industry: Industry,
    pub title: String,
    pub ticks: u64,
    pub metrics: Vec<MetricView>,
    pub gauges: Vec<GaugeView>,
    pub charts: Vec<ChartView>,
    pub facilities: Vec<FacilityView>,
    pub activities: Vec<ActivityView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricView {
    pub id: String,
    pub name: String,
    pub category: String,
    pub icon: Icon,
    pub value: f64,
    pub unit: String,
    pub display_value: String,
    pub trend: Trend,
    pub tone: Tone,
    pub change: f64,
    pub display_change: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GaugeView {
    pub title: String,
    pub display_value: String,
    pub percentage: f64,
    pub display_percentage: String,
    pub dash_array: String,
    pub band: Band,
    pub tone: Tone,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartView {
    pub id: String,
    pub title: String,
    pub labels: Vec<String>,
    pub line_path: String,
    pub area_path: String,
    pub current: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FacilityView {
    pub id: String,
    pub name: String,
    pub status: FacilityStatus,
    pub tone: Tone,
    pub value: String,
    pub map_x: f64,
    pub map_y: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityView {
    pub id: String,
    pub kind: ActivityKind,
    pub tone: Tone,
    pub title: String,
    pub description: String,
    pub timestamp: String,
}

pub fn dashboard_to_view(state: &DashboardState, settings: &ViewSettings) -> DashboardView {
    let charts = vec![
        chart_to_view(&state.performance_chart(), &settings.frame),
        chart_to_view(&state.efficiency, &ChartFrame::full()),
        chart_to_view(&state.historical, &ChartFrame::full()),
    ];

    DashboardView {
        industry: state.industry.clone(),
        title: state.title.clone(),
        ticks: state.ticks,
        metrics: state.metrics.iter().map(metric_to_view).collect(),
        gauges: state
            .gauges
            .iter()
            .map(|g| gauge_to_view(g, settings.gauge_radius))
            .collect(),
        charts,
        facilities: state.facilities.iter().map(facility_to_view).collect(),
        activities: state.activities.iter().map(activity_to_view).collect(),
    }
}

fn metric_to_view(metric: &Metric) -> MetricView {
    // percentages keep one decimal, everything else is shown whole
    let precision = if metric.unit == "%" { 1 } else { 0 };

    MetricView {
        id: metric.id.clone(),
        name: metric.name.clone(),
        category: metric.category.clone(),
        icon: metric.icon,
        value: metric.value,
        unit: metric.unit.clone(),
        display_value: format!("{:.*}{}", precision, metric.value, metric.unit),
        trend: metric.trend,
        tone: metric.trend.tone(),
        change: metric.change,
        display_change: format!("{:.1}%", metric.change.abs()),
    }
}

fn gauge_to_view(gauge: &Gauge, radius: f64) -> GaugeView {
    let arc = GaugeArc::new(gauge.value, gauge.max, radius);
    let band = arc.band();

    GaugeView {
        title: gauge.title.clone(),
        display_value: format!("{}{}", gauge.value, gauge.unit),
        percentage: arc.percentage,
        display_percentage: format!("{:.1}%", arc.percentage),
        dash_array: arc.dash_array(),
        band,
        tone: band.tone(),
    }
}

fn chart_to_view(series: &ChartSeries, frame: &ChartFrame) -> ChartView {
    let values: Vec<f64> = series.points.iter().map(|p| p.value).collect();
    let points = map_points(&values, series.domain, frame);

    ChartView {
        id: series.id.clone(),
        title: series.title.clone(),
        labels: series.points.iter().map(|p| p.label.clone()).collect(),
        line_path: line_path(&points).to_string(),
        area_path: area_path(&points, frame).to_string(),
        current: series.latest().map(|v| format!("{:.1}", v)),
    }
}

fn facility_to_view(facility: &FacilityPoint) -> FacilityView {
    let (map_x, map_y) = facility.map_position();

    FacilityView {
        id: facility.id.clone(),
        name: facility.name.clone(),
        status: facility.status,
        tone: facility.status.tone(),
        value: facility.value.clone(),
        map_x,
        map_y,
    }
}

fn activity_to_view(activity: &ActivityItem) -> ActivityView {
    ActivityView {
        id: activity.id.clone(),
        kind: activity.kind,
        tone: activity.kind.tone(),
        title: activity.title.clone(),
        description: activity.description.clone(),
        timestamp: activity.timestamp.clone(),
    }
}
