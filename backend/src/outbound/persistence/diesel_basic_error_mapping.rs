//! Diesel and pool error mapping shared by the journal repositories.
//!
//! Driver detail is logged at debug level and replaced by fixed messages so
//! nothing from the database reaches the domain error text.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Map pool failures through a repository's connection constructor.
pub fn map_basic_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    connection(message)
}

/// Map Diesel failures onto query and connection constructors.
pub fn map_basic_diesel_error<E, Q, C>(error: DieselError, query: Q, connection: C) -> E
where
    Q: Fn(&'static str) -> E,
    C: Fn(&'static str) -> E,
{
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _)
        | DieselError::BrokenTransactionManager => connection("database connection error"),
        _ => query("database error"),
    }
}

/// Whether `error` is a unique-constraint violation on `constraint`.
pub fn is_unique_violation(error: &DieselError, constraint: &str) -> bool {
    matches!(
        error,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info)
            if info.constraint_name() == Some(constraint)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, PartialEq, Eq)]
    enum Mapped {
        Query(&'static str),
        Connection(&'static str),
    }

    fn map(error: DieselError) -> Mapped {
        map_basic_diesel_error(error, Mapped::Query, Mapped::Connection)
    }

    #[rstest]
    #[case(DieselError::NotFound, Mapped::Query("record not found"))]
    #[case(DieselError::RollbackTransaction, Mapped::Query("database error"))]
    #[case(
        DieselError::BrokenTransactionManager,
        Mapped::Connection("database connection error")
    )]
    #[case(
        DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new(String::from("server closed the connection")),
        ),
        Mapped::Connection("database connection error")
    )]
    #[case(
        DieselError::DatabaseError(
            DatabaseErrorKind::ForeignKeyViolation,
            Box::new(String::from("violates foreign key")),
        ),
        Mapped::Query("database error")
    )]
    fn diesel_errors_map_to_fixed_messages(#[case] error: DieselError, #[case] expected: Mapped) {
        assert_eq!(map(error), expected);
    }

    #[rstest]
    fn pool_errors_keep_their_message() {
        let message: String = map_basic_pool_error(PoolError::checkout("timed out"), |m| m);
        assert_eq!(message, "timed out");
    }

    #[rstest]
    fn unique_violation_requires_matching_constraint() {
        // `String` database error info reports no constraint name.
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new(String::from("duplicate key")),
        );
        assert!(!is_unique_violation(&error, "users_user_name_key"));
        assert!(!is_unique_violation(&DieselError::NotFound, "users_user_name_key"));
    }
}
