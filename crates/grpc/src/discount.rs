//! Discount gRPC service.

use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::info;

use discount_app::domain::coupons::CouponsService;

use crate::{
    errors::into_status,
    proto::{CouponModel, GetDiscountRequest, discount_proto_service_server::DiscountProtoService},
};

/// Read-only gRPC view over the coupon store.
pub(crate) struct DiscountService {
    coupons: Arc<dyn CouponsService>,
}

impl DiscountService {
    #[must_use]
    pub(crate) fn new(coupons: Arc<dyn CouponsService>) -> Self {
        Self { coupons }
    }
}

#[tonic::async_trait]
impl DiscountProtoService for DiscountService {
    async fn get_discount(
        &self,
        request: Request<GetDiscountRequest>,
    ) -> Result<Response<CouponModel>, Status> {
        let GetDiscountRequest { product_name } = request.into_inner();

        let coupon = self
            .coupons
            .find_discount(&product_name)
            .await
            .map_err(into_status)?
            .ok_or_else(|| {
                Status::not_found(format!(
                    "Discount with product name {product_name} not found"
                ))
            })?;

        info!(
            product_name = %coupon.product_name,
            amount = coupon.amount,
            "discount retrieved"
        );

        Ok(Response::new(coupon.into()))
    }
}
