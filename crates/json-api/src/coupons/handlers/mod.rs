//! Coupon Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod update;

/// Result of a create, update or delete request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DiscountOutcomeResponse {
    /// Whether any coupon row was written or removed
    pub success: bool,
}
