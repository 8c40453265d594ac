use crate::application::dashboard_service::SimulatorSettings;
use crate::domain::geometry::ChartFrame;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub simulator: SimulatorConfig,
    pub chart: ChartConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind_addr: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SimulatorConfig {
    pub tick_interval_secs: u64,
    pub series_length: usize,
    pub default_industry: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChartConfig {
    pub left: f64,
    pub width: f64,
    pub top: f64,
    pub bottom: f64,
    pub gauge_radius: f64,
}

impl SimulatorConfig {
    pub fn settings(&self) -> SimulatorSettings {
        SimulatorSettings {
            tick_interval: Duration::from_secs(self.tick_interval_secs.max(1)),
            series_length: self.series_length,
        }
    }
}

impl ChartConfig {
    pub fn frame(&self) -> ChartFrame {
        ChartFrame {
            left: self.left,
            width: self.width,
            top: self.top,
            bottom: self.bottom,
        }
    }
}

fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
    let frame = ChartFrame::default();
    config::Config::builder()
        .set_default("server.bind_addr", "0.0.0.0:8080")?
        .set_default("simulator.tick_interval_secs", 5_i64)?
        .set_default("simulator.series_length", 24_i64)?
        .set_default("simulator.default_industry", "smart-city")?
        .set_default("chart.left", frame.left)?
        .set_default("chart.width", frame.width)?
        .set_default("chart.top", frame.top)?
        .set_default("chart.bottom", frame.bottom)?
        .set_default("chart.gauge_radius", 40.0)
}

/// Defaults, then `config/dashboard.*` if present, then `DASHBOARD__*` env vars
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = builder()?
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(config::Environment::with_prefix("DASHBOARD").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: AppConfig = builder().unwrap().build().unwrap().try_deserialize().unwrap();

        assert_eq!(config.server.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.simulator.tick_interval_secs, 5);
        assert_eq!(config.simulator.series_length, 24);
        assert_eq!(config.simulator.default_industry, "smart-city");
        assert_eq!(config.chart.frame(), ChartFrame::default());
        assert_eq!(config.chart.gauge_radius, 40.0);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let source = r#"
            [simulator]
            tick_interval_secs = 0
            default_industry = "chemical"

            [chart]
            left = 0.0
            width = 100.0
        "#;
        let config: AppConfig = builder()
            .unwrap()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.simulator.default_industry, "chemical");
        assert_eq!(config.simulator.series_length, 24);
        // zero would spin the ticker
        assert_eq!(config.simulator.settings().tick_interval, Duration::from_secs(1));
        assert_eq!(config.chart.frame().width, 100.0);
        assert_eq!(config.chart.frame().top, 10.0);
    }
}
