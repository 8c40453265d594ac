// Closed set of render tags used by the dashboard
use serde::{Deserialize, Serialize};

/// Icon tag attached to metrics and industries.
///
/// The front end owns the actual glyphs; the service only guarantees that
/// every tag it emits is one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Zap,
    Car,
    Droplets,
    Wind,
    Users,
    Building,
    Flask,
    Factory,
    Wrench,
    Cpu,
    TrendingUp,
}

/// Color family for statuses and activity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Caution,
    Critical,
    Accent,
    Neutral,
}
