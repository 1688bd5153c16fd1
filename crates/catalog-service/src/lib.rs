//! # catalog-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

#[cfg(feature = "test-util")]
pub mod testing;

pub use dto::{
    ApiResponse, CategoryCountResponse, HealthChecks, HealthResponse, ImportReport,
    ReadinessResponse, ToolRecord, ToolResponse, VoteResponse,
};
pub use services::{
    ImportOptions, ImportService, ListOptions, ReadmeFetcher, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, ToolService, VoteService,
};
