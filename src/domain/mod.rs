// Domain layer - Dashboard entities and pure chart geometry
pub mod activity;
pub mod dashboard;
pub mod facility;
pub mod geometry;
pub mod icon;
pub mod industry;
pub mod metric;
pub mod series;
