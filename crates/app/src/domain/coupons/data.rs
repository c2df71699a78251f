//! Coupons Data

use crate::domain::coupons::records::CouponId;

/// New Coupon Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCoupon {
    pub product_name: String,
    pub description: String,
    pub amount: i32,
}

/// Coupon Update Data
///
/// The row is matched by `id`; every other field overwrites the stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouponUpdate {
    pub id: CouponId,
    pub product_name: String,
    pub description: String,
    pub amount: i32,
}
