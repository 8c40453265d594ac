// Facility map domain model
use super::icon::Tone;
use serde::{Deserialize, Serialize};

/// Map markers stay this far inside the 0..100 frame
const MAP_INSET: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacilityStatus {
    Operational,
    Maintenance,
    Alert,
}

impl FacilityStatus {
    pub fn tone(self) -> Tone {
        match self {
            FacilityStatus::Operational => Tone::Positive,
            FacilityStatus::Maintenance => Tone::Caution,
            FacilityStatus::Alert => Tone::Critical,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityPoint {
    pub id: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub status: FacilityStatus,
    pub value: String,
}

impl FacilityPoint {
    /// Marker position on the map, clamped so the marker is never cut off
    pub fn map_position(&self) -> (f64, f64) {
        (clamp_to_map(self.x), clamp_to_map(self.y))
    }
}

fn clamp_to_map(coord: f64) -> f64 {
    coord.clamp(MAP_INSET, 100.0 - MAP_INSET)
}
