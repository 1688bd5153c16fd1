//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation (tool records consumed by the importer)
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::ToolRecord;
pub use responses::{
    ApiResponse, CategoryCountResponse, HealthChecks, HealthResponse, ImportReport,
    ReadinessResponse, ToolResponse, VoteResponse,
};
