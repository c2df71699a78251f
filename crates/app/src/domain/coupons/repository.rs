//! Coupons Repository

use sqlx::{FromRow, PgConnection, Postgres, Row, postgres::PgRow, query, query_as};

use crate::domain::coupons::{
    data::{CouponUpdate, NewCoupon},
    records::CouponRecord,
};

const FIND_COUPON_SQL: &str = include_str!("sql/find_coupon.sql");
const CREATE_COUPON_SQL: &str = include_str!("sql/create_coupon.sql");
const UPDATE_COUPON_SQL: &str = include_str!("sql/update_coupon.sql");
const DELETE_COUPON_SQL: &str = include_str!("sql/delete_coupon.sql");

/// PostgreSQL-backed coupons repository.
///
/// Every method issues exactly one statement on the connection it is given.
#[derive(Debug, Clone, Default)]
pub(crate) struct PgCouponsRepository;

impl PgCouponsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_coupon(
        &self,
        conn: &mut PgConnection,
        product_name: &str,
    ) -> Result<Option<CouponRecord>, sqlx::Error> {
        query_as::<Postgres, CouponRecord>(FIND_COUPON_SQL)
            .bind(product_name)
            .fetch_optional(&mut *conn)
            .await
    }

    pub(crate) async fn create_coupon(
        &self,
        conn: &mut PgConnection,
        coupon: NewCoupon,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(CREATE_COUPON_SQL)
            .bind(coupon.product_name)
            .bind(coupon.description)
            .bind(coupon.amount)
            .execute(&mut *conn)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn update_coupon(
        &self,
        conn: &mut PgConnection,
        update: CouponUpdate,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(UPDATE_COUPON_SQL)
            .bind(update.id)
            .bind(update.product_name)
            .bind(update.description)
            .bind(update.amount)
            .execute(&mut *conn)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_coupons(
        &self,
        conn: &mut PgConnection,
        product_name: &str,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_COUPON_SQL)
            .bind(product_name)
            .execute(&mut *conn)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for CouponRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            product_name: row.try_get("product_name")?,
            description: row.try_get("description")?,
            amount: row.try_get("amount")?,
        })
    }
}
