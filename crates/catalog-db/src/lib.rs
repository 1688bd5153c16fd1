//! # catalog-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `catalog-core`. It handles:
//!
//! - Connection pool management
//! - Schema bootstrap
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations, including the atomic vote toggle
//!
//! ## Usage
//!
//! ```rust,ignore
//! use catalog_db::pool::{create_pool, DatabaseConfig};
//! use catalog_db::repositories::PgToolRepository;
//! use catalog_core::traits::ToolRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig {
//!         url: std::env::var("DATABASE_URL")?,
//!         ..DatabaseConfig::default()
//!     };
//!     let pool = create_pool(&config).await?;
//!     catalog_db::run_migrations(&pool).await?;
//!     let tool_repo = PgToolRepository::new(pool);
//!
//!     let tools = tool_repo.list_all(1000).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{close_pool, create_pool, DatabaseConfig, PgPool};
pub use repositories::{PgToolRepository, PgVoteRepository};
pub use schema::run_migrations;
