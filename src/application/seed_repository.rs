// Repository trait for dashboard seed data
use crate::application::error::DashboardError;
use crate::domain::dashboard::DashboardSeed;
use crate::domain::industry::Industry;
use async_trait::async_trait;

#[async_trait]
pub trait SeedRepository: Send + Sync {
    /// List every industry a dashboard can be switched to
    async fn list_industries(&self) -> Result<Vec<Industry>, DashboardError>;

    /// Seed data for one industry, with any missing sections filled from the
    /// general profile
    async fn load_seed(&self, industry_id: &str) -> Result<DashboardSeed, DashboardError>;
}
