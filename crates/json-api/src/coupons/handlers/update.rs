//! Update Discount Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use discount_app::domain::coupons::{data::CouponUpdate, records::CouponId};

use crate::{
    coupons::{errors::into_status_error, handlers::DiscountOutcomeResponse},
    extensions::*,
};

/// Update Discount Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCouponRequest {
    /// Identifier of the coupon to overwrite
    pub id: CouponId,
    pub product_name: String,
    #[serde(default)]
    pub description: String,
    pub amount: i32,
}

impl From<UpdateCouponRequest> for CouponUpdate {
    fn from(request: UpdateCouponRequest) -> Self {
        CouponUpdate {
            id: request.id,
            product_name: request.product_name,
            description: request.description,
            amount: request.amount,
        }
    }
}

/// Update Discount Handler
///
/// Responds `200` with `success: false` when no coupon has the given id.
#[endpoint(
    tags("discount"),
    summary = "Update Discount",
    responses(
        (status_code = StatusCode::OK, description = "Update attempted"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Coupon store unavailable"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "discount.update",
    skip(json, depot),
    fields(coupon_id = tracing::field::Empty, amount = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<UpdateCouponRequest>,
    depot: &mut Depot,
) -> Result<Json<DiscountOutcomeResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let request = json.into_inner();

    let span = tracing::Span::current();

    span.record("coupon_id", request.id);
    span.record("amount", request.amount);

    let success = state
        .coupons
        .update_discount(request.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(DiscountOutcomeResponse { success }))
}
