//! Coupons service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CouponsServiceError {
    #[error("failed to acquire database connection")]
    Connection(#[source] Error),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CouponsServiceError {
    fn from(error: Error) -> Self {
        match error {
            Error::PoolTimedOut | Error::PoolClosed | Error::Io(_) | Error::Tls(_) => {
                Self::Connection(error)
            }
            _ => Self::Sql(error),
        }
    }
}
