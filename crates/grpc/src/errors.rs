//! Coupon store errors as gRPC statuses.

use tonic::Status;
use tracing::error;

use discount_app::domain::coupons::CouponsServiceError;

pub(crate) fn into_status(error: CouponsServiceError) -> Status {
    match error {
        CouponsServiceError::Connection(source) => {
            error!("failed to reach coupon store: {source}");

            Status::unavailable("coupon store unavailable")
        }
        CouponsServiceError::Sql(source) => {
            error!("coupon store query failed: {source}");

            Status::internal("internal error")
        }
    }
}
