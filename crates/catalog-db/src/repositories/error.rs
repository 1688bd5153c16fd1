//! Error handling utilities for repositories

use catalog_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Whether the error is a foreign key violation (the referenced row is gone)
pub fn is_foreign_key_violation(e: &SqlxError) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_foreign_key_violation())
}

/// Create a "tool not found" error
pub fn tool_not_found(name: &str) -> DomainError {
    DomainError::ToolNotFound(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_error_maps_to_database_error() {
        let err = map_db_error(SqlxError::RowNotFound);
        assert!(matches!(err, DomainError::DatabaseError(_)));
        assert!(!is_foreign_key_violation(&SqlxError::RowNotFound));
    }

    #[test]
    fn test_tool_not_found() {
        let err = tool_not_found("docker");
        assert!(err.is_not_found());
    }
}
