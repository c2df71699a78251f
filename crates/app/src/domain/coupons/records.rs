//! Coupon Records

/// Coupon identifier, assigned by the database.
pub type CouponId = i32;

/// Product name used when no coupon matches a lookup.
pub const NO_DISCOUNT_PRODUCT_NAME: &str = "No Discount";

/// Description used when no coupon matches a lookup.
pub const NO_DISCOUNT_DESCRIPTION: &str = "No Discount Desc";

/// Coupon Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouponRecord {
    pub id: CouponId,
    pub product_name: String,
    pub description: String,
    pub amount: i32,
}

impl CouponRecord {
    /// Placeholder coupon returned in place of a missing row.
    ///
    /// It carries identifier `0`, which the database never assigns.
    #[must_use]
    pub fn no_discount() -> Self {
        Self {
            id: 0,
            product_name: NO_DISCOUNT_PRODUCT_NAME.to_string(),
            description: NO_DISCOUNT_DESCRIPTION.to_string(),
            amount: 0,
        }
    }

    /// Whether this is the [`CouponRecord::no_discount`] placeholder.
    #[cfg(test)]
    pub(crate) fn is_no_discount(&self) -> bool {
        *self == Self::no_discount()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_discount_has_fixed_fields() {
        let coupon = CouponRecord::no_discount();

        assert_eq!(coupon.id, 0);
        assert_eq!(coupon.product_name, "No Discount");
        assert_eq!(coupon.description, "No Discount Desc");
        assert_eq!(coupon.amount, 0);
        assert!(coupon.is_no_discount());
    }

    #[test]
    fn stored_coupon_is_not_no_discount() {
        let coupon = CouponRecord {
            id: 7,
            product_name: "No Discount".to_string(),
            description: "No Discount Desc".to_string(),
            amount: 0,
        };

        assert!(!coupon.is_no_discount());
    }
}
