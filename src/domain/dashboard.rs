// Dashboard domain model
use super::activity::ActivityItem;
use super::facility::FacilityPoint;
use super::industry::Industry;
use super::metric::Metric;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gauge {
    pub title: String,
    pub value: f64,
    pub max: f64,
    pub unit: String,
}

/// Everything a dashboard starts from when an industry is selected
#[derive(Debug, Clone)]
pub struct DashboardSeed {
    pub industry: Industry,
    pub title: String,
    pub metrics: Vec<Metric>,
    pub gauges: Vec<Gauge>,
    pub facilities: Vec<FacilityPoint>,
    pub activities: Vec<ActivityItem>,
}
