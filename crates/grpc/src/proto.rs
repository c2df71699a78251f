//! Wire messages of the `discount.DiscountProtoService` gRPC service.
//!
//! Field numbers follow `proto/discount.proto` at the workspace root.

use discount_app::domain::coupons::records::CouponRecord;

/// Request for a single product's discount.
#[derive(Clone, PartialEq, prost::Message)]
pub struct GetDiscountRequest {
    #[prost(string, tag = "1")]
    pub product_name: String,
}

/// A coupon as sent to gRPC clients.
#[derive(Clone, PartialEq, prost::Message)]
pub struct CouponModel {
    #[prost(int32, tag = "1")]
    pub id: i32,

    #[prost(string, tag = "2")]
    pub product_name: String,

    #[prost(string, tag = "3")]
    pub description: String,

    #[prost(int32, tag = "4")]
    pub amount: i32,
}

impl From<CouponRecord> for CouponModel {
    fn from(coupon: CouponRecord) -> Self {
        Self {
            id: coupon.id,
            product_name: coupon.product_name,
            description: coupon.description,
            amount: coupon.amount,
        }
    }
}

include!(concat!(env!("OUT_DIR"), "/discount.DiscountProtoService.rs"));
