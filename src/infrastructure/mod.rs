// Infrastructure layer - External dependencies and adapters
pub mod chunked_json;
pub mod config;
pub mod fixture_repository;
pub mod http_response;
pub mod view_mapper;
