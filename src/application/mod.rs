// Application layer - Simulation, use cases and ports
pub mod dashboard_service;
pub mod error;
pub mod file_import;
pub mod seed_repository;
pub mod simulator;
