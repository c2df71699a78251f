//! Coupons service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::coupons::{
        data::{CouponUpdate, NewCoupon},
        errors::CouponsServiceError,
        records::CouponRecord,
        repository::PgCouponsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCouponsService {
    db: Db,
    repository: PgCouponsRepository,
}

impl PgCouponsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCouponsRepository::new(),
        }
    }
}

#[async_trait]
impl CouponsService for PgCouponsService {
    async fn find_discount(
        &self,
        product_name: &str,
    ) -> Result<Option<CouponRecord>, CouponsServiceError> {
        let mut conn = self.db.acquire().await?;

        let coupon = self.repository.find_coupon(&mut conn, product_name).await?;

        Ok(coupon)
    }

    async fn get_discount(&self, product_name: &str) -> Result<CouponRecord, CouponsServiceError> {
        let coupon = self.find_discount(product_name).await?;

        Ok(coupon.unwrap_or_else(|| {
            debug!(product_name, "no coupon found, using no-discount placeholder");

            CouponRecord::no_discount()
        }))
    }

    async fn create_discount(&self, coupon: NewCoupon) -> Result<bool, CouponsServiceError> {
        let mut conn = self.db.acquire().await?;

        let rows_affected = self.repository.create_coupon(&mut conn, coupon).await?;

        Ok(rows_affected > 0)
    }

    async fn update_discount(&self, update: CouponUpdate) -> Result<bool, CouponsServiceError> {
        let mut conn = self.db.acquire().await?;

        let rows_affected = self.repository.update_coupon(&mut conn, update).await?;

        Ok(rows_affected > 0)
    }

    async fn delete_discount(&self, product_name: &str) -> Result<bool, CouponsServiceError> {
        let mut conn = self.db.acquire().await?;

        let rows_affected = self
            .repository
            .delete_coupons(&mut conn, product_name)
            .await?;

        Ok(rows_affected > 0)
    }
}

#[automock]
#[async_trait]
pub trait CouponsService: Send + Sync {
    /// Looks up one coupon by exact product name.
    ///
    /// When several coupons share the name, any one of them is returned.
    async fn find_discount(
        &self,
        product_name: &str,
    ) -> Result<Option<CouponRecord>, CouponsServiceError>;

    /// Looks up one coupon by exact product name, falling back to
    /// [`CouponRecord::no_discount`] when none matches.
    async fn get_discount(&self, product_name: &str) -> Result<CouponRecord, CouponsServiceError>;

    /// Inserts a coupon. Returns whether a row was written.
    async fn create_discount(&self, coupon: NewCoupon) -> Result<bool, CouponsServiceError>;

    /// Overwrites the coupon with the update's identifier. Returns `false` when
    /// no coupon has that identifier.
    async fn update_discount(&self, update: CouponUpdate) -> Result<bool, CouponsServiceError>;

    /// Deletes every coupon with the given product name. Returns whether any
    /// row was removed.
    async fn delete_discount(&self, product_name: &str) -> Result<bool, CouponsServiceError>;
}

#[cfg(test)]
mod tests {
    use sqlx::{query_as, query_scalar};
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    const ALL_COUPONS_SQL: &str =
        "SELECT id, product_name, description, amount FROM coupon ORDER BY id";

    fn new_coupon(product_name: &str, amount: i32) -> NewCoupon {
        NewCoupon {
            product_name: product_name.to_string(),
            description: format!("{product_name} Discount"),
            amount,
        }
    }

    async fn all_coupons(ctx: &TestContext) -> Result<Vec<CouponRecord>, sqlx::Error> {
        query_as::<_, CouponRecord>(ALL_COUPONS_SQL)
            .fetch_all(ctx.db.pool())
            .await
    }

    async fn count_named(ctx: &TestContext, product_name: &str) -> Result<i64, sqlx::Error> {
        query_scalar("SELECT COUNT(*) FROM coupon WHERE product_name = $1")
            .bind(product_name)
            .fetch_one(ctx.db.pool())
            .await
    }

    #[tokio::test]
    async fn get_discount_unknown_product_returns_no_discount() -> TestResult {
        let ctx = TestContext::new().await;

        let coupon = ctx.coupons.get_discount("Nokia 3310").await?;

        assert_eq!(coupon, CouponRecord::no_discount());

        Ok(())
    }

    #[tokio::test]
    async fn find_discount_unknown_product_returns_none() -> TestResult {
        let ctx = TestContext::new().await;

        let coupon = ctx.coupons.find_discount("Nokia 3310").await?;

        assert!(coupon.is_none(), "expected no coupon, got {coupon:?}");

        Ok(())
    }

    #[tokio::test]
    async fn get_discount_returns_seeded_coupon() -> TestResult {
        let ctx = TestContext::new().await;

        let coupon = ctx.coupons.get_discount("IPhone X").await?;

        assert_eq!(coupon.product_name, "IPhone X");
        assert_eq!(coupon.description, "IPhone Discount");
        assert_eq!(coupon.amount, 150);

        Ok(())
    }

    #[tokio::test]
    async fn create_discount_then_get_returns_inserted_values() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx
            .coupons
            .create_discount(new_coupon("Pixel 9", 75))
            .await?;

        let coupon = ctx.coupons.get_discount("Pixel 9").await?;

        assert!(created);
        assert!(coupon.id > 0, "identifier should be assigned");
        assert_eq!(coupon.product_name, "Pixel 9");
        assert_eq!(coupon.description, "Pixel 9 Discount");
        assert_eq!(coupon.amount, 75);

        Ok(())
    }

    #[tokio::test]
    async fn create_discount_accepts_negative_amount() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx
            .coupons
            .create_discount(new_coupon("Pixel 9", -10))
            .await?;

        let coupon = ctx.coupons.get_discount("Pixel 9").await?;

        assert!(created);
        assert_eq!(coupon.amount, -10);

        Ok(())
    }

    #[tokio::test]
    async fn update_discount_reflects_new_amount() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.coupons
            .create_discount(new_coupon("Pixel 9", 75))
            .await?;

        let existing = ctx.coupons.get_discount("Pixel 9").await?;

        let updated = ctx
            .coupons
            .update_discount(CouponUpdate {
                id: existing.id,
                product_name: existing.product_name.clone(),
                description: existing.description.clone(),
                amount: 120,
            })
            .await?;

        let coupon = ctx.coupons.get_discount("Pixel 9").await?;

        assert!(updated);
        assert_eq!(coupon.id, existing.id);
        assert_eq!(coupon.amount, 120);

        Ok(())
    }

    #[tokio::test]
    async fn update_discount_can_rename_product() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.coupons
            .create_discount(new_coupon("Pixel 9", 75))
            .await?;

        let existing = ctx.coupons.get_discount("Pixel 9").await?;

        ctx.coupons
            .update_discount(CouponUpdate {
                id: existing.id,
                product_name: "Pixel 9 Pro".to_string(),
                description: "Pixel 9 Pro Discount".to_string(),
                amount: 90,
            })
            .await?;

        let old = ctx.coupons.get_discount("Pixel 9").await?;
        let renamed = ctx.coupons.get_discount("Pixel 9 Pro").await?;

        assert!(old.is_no_discount(), "old name should no longer match");
        assert_eq!(renamed.id, existing.id);
        assert_eq!(renamed.description, "Pixel 9 Pro Discount");

        Ok(())
    }

    #[tokio::test]
    async fn update_discount_unknown_id_returns_false() -> TestResult {
        let ctx = TestContext::new().await;

        let before = all_coupons(&ctx).await?;

        let updated = ctx
            .coupons
            .update_discount(CouponUpdate {
                id: i32::MAX,
                product_name: "IPhone X".to_string(),
                description: "Changed".to_string(),
                amount: 1,
            })
            .await?;

        let after = all_coupons(&ctx).await?;

        assert!(!updated);
        assert_eq!(before, after, "no coupon should be modified");

        Ok(())
    }

    #[tokio::test]
    async fn delete_discount_makes_lookup_return_no_discount() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.coupons
            .create_discount(new_coupon("Pixel 9", 75))
            .await?;

        let deleted = ctx.coupons.delete_discount("Pixel 9").await?;
        let coupon = ctx.coupons.get_discount("Pixel 9").await?;

        assert!(deleted);
        assert!(coupon.is_no_discount(), "expected placeholder, got {coupon:?}");

        Ok(())
    }

    #[tokio::test]
    async fn delete_discount_removes_every_duplicate() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.coupons
            .create_discount(new_coupon("Pixel 9", 75))
            .await?;
        ctx.coupons
            .create_discount(new_coupon("Pixel 9", 80))
            .await?;

        assert_eq!(count_named(&ctx, "Pixel 9").await?, 2);

        let deleted = ctx.coupons.delete_discount("Pixel 9").await?;

        assert!(deleted);
        assert_eq!(count_named(&ctx, "Pixel 9").await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn delete_discount_unknown_product_returns_false() -> TestResult {
        let ctx = TestContext::new().await;

        let before = all_coupons(&ctx).await?;

        let deleted = ctx.coupons.delete_discount("Nokia 3310").await?;

        let after = all_coupons(&ctx).await?;

        assert!(!deleted);
        assert_eq!(before, after, "table should be unchanged");

        Ok(())
    }

    #[tokio::test]
    async fn get_discount_with_duplicates_returns_one_of_them() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.coupons
            .create_discount(new_coupon("Pixel 9", 75))
            .await?;
        ctx.coupons
            .create_discount(new_coupon("Pixel 9", 80))
            .await?;

        let coupon = ctx.coupons.get_discount("Pixel 9").await?;

        assert_eq!(coupon.product_name, "Pixel 9");
        assert!(
            coupon.amount == 75 || coupon.amount == 80,
            "expected one of the duplicates, got {coupon:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn closed_pool_returns_connection_error() {
        let ctx = TestContext::new().await;

        ctx.db.pool().close().await;

        let result = ctx.coupons.find_discount("IPhone X").await;

        assert!(
            matches!(result, Err(CouponsServiceError::Connection(_))),
            "expected Connection, got {result:?}"
        );
    }
}
