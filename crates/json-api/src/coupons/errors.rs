//! Coupon Errors

use salvo::http::StatusError;
use tracing::error;

use discount_app::domain::coupons::CouponsServiceError;

pub(crate) fn into_status_error(error: CouponsServiceError) -> StatusError {
    match error {
        CouponsServiceError::Connection(source) => {
            error!("failed to reach coupon store: {source}");

            StatusError::service_unavailable()
        }
        CouponsServiceError::Sql(source) => {
            error!("coupon store query failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
