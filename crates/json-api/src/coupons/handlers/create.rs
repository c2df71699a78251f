//! Create Discount Handler

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use discount_app::domain::coupons::data::NewCoupon;

use crate::{
    coupons::{errors::into_status_error, handlers::DiscountOutcomeResponse},
    extensions::*,
};

/// Create Discount Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCouponRequest {
    pub product_name: String,
    #[serde(default)]
    pub description: String,
    pub amount: i32,
}

impl From<CreateCouponRequest> for NewCoupon {
    fn from(request: CreateCouponRequest) -> Self {
        NewCoupon {
            product_name: request.product_name,
            description: request.description,
            amount: request.amount,
        }
    }
}

/// Create Discount Handler
#[endpoint(
    tags("discount"),
    summary = "Create Discount",
    responses(
        (status_code = StatusCode::CREATED, description = "Discount created"),
        (status_code = StatusCode::OK, description = "No row written"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Coupon store unavailable"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCouponRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<DiscountOutcomeResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let coupon: NewCoupon = json.into_inner().into();

    let location = format!(
        "/api/v1/discount/{}",
        urlencoding::encode(&coupon.product_name)
    );

    let success = state
        .coupons
        .create_discount(coupon)
        .await
        .map_err(into_status_error)?;

    if success {
        res.add_header(LOCATION, location, true)
            .or_500("failed to set location header")?
            .status_code(StatusCode::CREATED);
    }

    Ok(Json(DiscountOutcomeResponse { success }))
}
