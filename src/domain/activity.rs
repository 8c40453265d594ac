// Activity feed domain model
use super::icon::Tone;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Success,
    Warning,
    Maintenance,
    Info,
}

impl ActivityKind {
    pub fn tone(self) -> Tone {
        match self {
            ActivityKind::Success => Tone::Positive,
            ActivityKind::Warning => Tone::Caution,
            ActivityKind::Maintenance => Tone::Accent,
            ActivityKind::Info => Tone::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub id: String,
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    /// Relative display time, e.g. "5 min ago"
    pub timestamp: String,
}
