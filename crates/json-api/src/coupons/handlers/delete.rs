//! Delete Discount Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    coupons::{errors::into_status_error, handlers::DiscountOutcomeResponse},
    extensions::*,
};

/// Delete Discount Handler
///
/// Removes every coupon with the product name.
#[endpoint(
    tags("discount"),
    summary = "Delete Discount",
    responses(
        (status_code = StatusCode::OK, description = "Delete attempted"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Coupon store unavailable"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    product_name: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<DiscountOutcomeResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let success = state
        .coupons
        .delete_discount(&product_name.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(DiscountOutcomeResponse { success }))
}
