// Seed repository backed by TOML fixtures compiled into the binary
use crate::application::error::DashboardError;
use crate::application::seed_repository::SeedRepository;
use crate::domain::activity::ActivityItem;
use crate::domain::dashboard::{DashboardSeed, Gauge};
use crate::domain::facility::FacilityPoint;
use crate::domain::icon::Icon;
use crate::domain::industry::Industry;
use crate::domain::metric::Metric;
use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;

const EMBEDDED_FIXTURES: &str = include_str!("../../fixtures/industries.toml");
const DEFAULT_TITLE: &str = "Industrial Analytics Hub";

#[derive(Debug, Deserialize)]
struct FixtureFile {
    general: Profile,
    #[serde(default)]
    industries: Vec<IndustryFixture>,
}

#[derive(Debug, Default, Deserialize)]
struct Profile {
    #[serde(default)]
    metrics: Vec<Metric>,
    #[serde(default)]
    gauges: Vec<Gauge>,
    #[serde(default)]
    facilities: Vec<FacilityPoint>,
    #[serde(default)]
    activities: Vec<ActivityItem>,
}

#[derive(Debug, Deserialize)]
struct IndustryFixture {
    id: String,
    name: String,
    description: String,
    icon: Icon,
    title: Option<String>,
    metrics: Option<Vec<Metric>>,
    gauges: Option<Vec<Gauge>>,
    facilities: Option<Vec<FacilityPoint>>,
    activities: Option<Vec<ActivityItem>>,
}

impl IndustryFixture {
    fn industry(&self) -> Industry {
        Industry {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            icon: self.icon,
        }
    }
}

#[derive(Debug)]
pub struct FixtureRepository {
    fixtures: FixtureFile,
}

impl FixtureRepository {
    /// Repository over the fixtures shipped with the service
    pub fn embedded() -> anyhow::Result<Self> {
        Self::from_toml(EMBEDDED_FIXTURES)
    }

    pub fn from_toml(source: &str) -> anyhow::Result<Self> {
        let fixtures: FixtureFile = toml::from_str(source).context("Failed to parse seed fixtures")?;
        tracing::debug!("Loaded fixtures for {} industries", fixtures.industries.len());
        Ok(Self { fixtures })
    }
}

#[async_trait]
impl SeedRepository for FixtureRepository {
    async fn list_industries(&self) -> Result<Vec<Industry>, DashboardError> {
        Ok(self.fixtures.industries.iter().map(IndustryFixture::industry).collect())
    }

    async fn load_seed(&self, industry_id: &str) -> Result<DashboardSeed, DashboardError> {
        let fixture = self
            .fixtures
            .industries
            .iter()
            .find(|i| i.id == industry_id)
            .ok_or_else(|| DashboardError::UnknownIndustry(industry_id.to_string()))?;
        let general = &self.fixtures.general;

        Ok(DashboardSeed {
            industry: fixture.industry(),
            title: fixture.title.clone().unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            metrics: fixture.metrics.clone().unwrap_or_else(|| general.metrics.clone()),
            gauges: fixture.gauges.clone().unwrap_or_else(|| general.gauges.clone()),
            facilities: fixture.facilities.clone().unwrap_or_else(|| general.facilities.clone()),
            activities: fixture.activities.clone().unwrap_or_else(|| general.activities.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::metric::Trend;

    #[tokio::test]
    async fn test_embedded_fixtures_list_all_industries() {
        let repo = FixtureRepository::embedded().unwrap();
        let ids: Vec<String> = repo
            .list_industries()
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.id)
            .collect();

        assert_eq!(
            ids,
            vec!["smart-city", "electrical", "chemical", "manufacturing", "automotive", "technology", "construction"]
        );
    }

    #[tokio::test]
    async fn test_smart_city_seed() {
        let repo = FixtureRepository::embedded().unwrap();
        let seed = repo.load_seed("smart-city").await.unwrap();

        assert_eq!(seed.title, "Smart City Dashboard");
        assert_eq!(seed.metrics.len(), 6);
        assert_eq!(seed.metrics[0].name, "Energy Consumption");
        assert_eq!(seed.metrics[0].trend, Trend::Down);
        assert_eq!(seed.metrics[1].icon, Icon::Car);
        // explicitly empty, not inherited
        assert!(seed.gauges.is_empty());
        assert_eq!(seed.facilities.len(), 4);
    }

    #[tokio::test]
    async fn test_missing_sections_fall_back_to_general() {
        let repo = FixtureRepository::embedded().unwrap();

        let manufacturing = repo.load_seed("manufacturing").await.unwrap();
        assert_eq!(manufacturing.title, DEFAULT_TITLE);
        assert_eq!(manufacturing.metrics[0].name, "Production Output");
        assert_eq!(manufacturing.facilities[0].name, "Facility A");
        assert_eq!(manufacturing.activities[0].title, "System Update Complete");

        let technology = repo.load_seed("technology").await.unwrap();
        assert_eq!(technology.industry.icon, Icon::Cpu);
        assert_eq!(technology.metrics[0].name, "Performance");
        assert_eq!(technology.gauges.len(), 3);
    }

    #[tokio::test]
    async fn test_unknown_industry() {
        let repo = FixtureRepository::embedded().unwrap();
        let err = repo.load_seed("mining").await.unwrap_err();
        assert!(matches!(err, DashboardError::UnknownIndustry(id) if id == "mining"));
    }

    #[test]
    fn test_invalid_fixtures_are_rejected() {
        assert!(FixtureRepository::from_toml("industries = 3").is_err());
    }
}
