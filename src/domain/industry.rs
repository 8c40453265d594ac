// Industry domain model
use super::icon::Icon;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Industry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: Icon,
}
