//! Conversions from external infrastructure errors into domain errors.

use bookline_domain::BooklineError;
use r2d2::Error as PoolError;
use rusqlite::Error as SqlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub BooklineError);

impl From<InfraError> for BooklineError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<BooklineError> for InfraError {
    fn from(value: BooklineError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoBooklineError {
    fn into_bookline(self) -> BooklineError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → BooklineError */
/* -------------------------------------------------------------------------- */

impl IntoBooklineError for SqlError {
    fn into_bookline(self) -> BooklineError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match (err.code, err.extended_code) {
                    (ErrorCode::DatabaseBusy, _) => {
                        BooklineError::Database("database is busy".into())
                    }
                    (ErrorCode::DatabaseLocked, _) => {
                        BooklineError::Database("database is locked".into())
                    }
                    (ErrorCode::ConstraintViolation, 2067) => {
                        BooklineError::Database("unique constraint violation".into())
                    }
                    (ErrorCode::ConstraintViolation, 787) => {
                        BooklineError::Database("foreign key constraint violation".into())
                    }
                    _ => BooklineError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => BooklineError::NotFound("no rows returned by query".into()),
            RE::FromSqlConversionFailure(_, _, cause) => {
                BooklineError::Database(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                BooklineError::Database(format!("invalid column type: {ty}"))
            }
            RE::Utf8Error(_) => {
                BooklineError::Database("invalid UTF-8 returned from sqlite".into())
            }
            RE::InvalidParameterName(parameter_name) => {
                BooklineError::Database(format!("invalid parameter name: {parameter_name}"))
            }
            RE::InvalidPath(path) => BooklineError::Database(format!(
                "invalid database path: {}",
                path.to_string_lossy()
            )),
            RE::InvalidQuery => BooklineError::Database("invalid SQL query".into()),
            other => BooklineError::Database(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_bookline())
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → BooklineError */
/* -------------------------------------------------------------------------- */

impl IntoBooklineError for PoolError {
    fn into_bookline(self) -> BooklineError {
        BooklineError::Database(format!("connection pool error: {self}"))
    }
}

impl From<PoolError> for InfraError {
    fn from(value: PoolError) -> Self {
        InfraError(value.into_bookline())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
