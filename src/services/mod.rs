use sea_orm::{DbErr, SqlErr};

use crate::response::ServiceOutcome;

pub mod cart_service;
pub mod customer_service;
pub mod product_service;

/// Convert a storage failure into an Error outcome. Constraint violations
/// add a caller-facing hint; everything else stays generic and goes to the
/// log in full.
pub(crate) fn db_failure(context: &str, err: DbErr) -> ServiceOutcome {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::warn!(%detail, "unique constraint violation");
            ServiceOutcome::error([
                context.to_string(),
                "The change conflicts with existing data.".to_string(),
            ])
        }
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            tracing::warn!(%detail, "foreign key constraint violation");
            ServiceOutcome::error([
                context.to_string(),
                "A referenced record does not exist.".to_string(),
            ])
        }
        _ => {
            tracing::error!(error = %err, "unexpected storage failure");
            ServiceOutcome::error([context.to_string()])
        }
    }
}
