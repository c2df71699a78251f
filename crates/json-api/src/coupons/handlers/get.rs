//! Get Discount Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use discount_app::domain::coupons::records::CouponRecord;

use crate::{coupons::errors::into_status_error, extensions::*};

/// Coupon Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CouponResponse {
    /// Database identifier, `0` for the no-discount placeholder
    pub id: i32,

    /// Product the discount applies to
    pub product_name: String,

    /// Human-readable description
    pub description: String,

    /// Discount amount
    pub amount: i32,
}

impl From<CouponRecord> for CouponResponse {
    fn from(coupon: CouponRecord) -> Self {
        CouponResponse {
            id: coupon.id,
            product_name: coupon.product_name,
            description: coupon.description,
            amount: coupon.amount,
        }
    }
}

/// Get Discount Handler
///
/// Unknown products yield the "No Discount" placeholder rather than a 404.
#[endpoint(
    tags("discount"),
    summary = "Get Discount",
    responses(
        (status_code = StatusCode::OK, description = "Discount for the product"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Coupon store unavailable"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    product_name: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CouponResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let coupon = state
        .coupons
        .get_discount(&product_name.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(coupon.into()))
}
