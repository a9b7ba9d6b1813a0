use diesel::r2d2::PoolError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

use crate::domain::types::TypeConstraintError;

/// Failures reported by the persistence layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => RepositoryError::NotFound,

            DieselError::DatabaseError(kind, info) => {
                let message = info.message().to_string();
                match kind {
                    DatabaseErrorKind::NotNullViolation => RepositoryError::ConstraintViolation(
                        format!("Phone field missing: {message}"),
                    ),
                    DatabaseErrorKind::CheckViolation => RepositoryError::ConstraintViolation(
                        format!("Phone field rejected: {message}"),
                    ),
                    DatabaseErrorKind::UniqueViolation => {
                        RepositoryError::ConstraintViolation(format!("Duplicate phone: {message}"))
                    }
                    _ => RepositoryError::DatabaseError(message),
                }
            }

            DieselError::SerializationError(e) | DieselError::DeserializationError(e) => {
                RepositoryError::ValidationError(format!("Phone row conversion failed: {e}"))
            }

            DieselError::QueryBuilderError(e) => {
                RepositoryError::ValidationError(format!("Invalid catalog query: {e}"))
            }

            other => RepositoryError::Unexpected(format!("Unexpected diesel error: {other}")),
        }
    }
}

impl From<PoolError> for RepositoryError {
    fn from(err: PoolError) -> Self {
        RepositoryError::ConnectionError(format!("Connection error: {err}"))
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_not_found() {
        assert!(matches!(
            RepositoryError::from(DieselError::NotFound),
            RepositoryError::NotFound
        ));
    }

    #[test]
    fn not_null_violation_maps_to_constraint_violation() {
        let err = DieselError::DatabaseError(
            DatabaseErrorKind::NotNullViolation,
            Box::new("NOT NULL constraint failed: phones.name".to_string()),
        );
        match RepositoryError::from(err) {
            RepositoryError::ConstraintViolation(msg) => {
                assert!(msg.contains("phones.name"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn check_violation_maps_to_constraint_violation() {
        let err = DieselError::DatabaseError(
            DatabaseErrorKind::CheckViolation,
            Box::new("CHECK constraint failed: trim(name) <> ''".to_string()),
        );
        assert!(matches!(
            RepositoryError::from(err),
            RepositoryError::ConstraintViolation(_)
        ));
    }

    #[test]
    fn transaction_errors_are_unexpected() {
        assert!(matches!(
            RepositoryError::from(DieselError::RollbackTransaction),
            RepositoryError::Unexpected(_)
        ));
    }

    #[test]
    fn type_constraint_maps_to_validation_error() {
        let err = RepositoryError::from(TypeConstraintError::NonPositiveId);
        assert!(matches!(err, RepositoryError::ValidationError(_)));
    }
}
