// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::view_mapper::ViewSettings;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub view_settings: ViewSettings,
}
