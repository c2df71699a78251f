//! State

use std::sync::Arc;

use discount_app::{context::AppContext, domain::coupons::CouponsService};

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) coupons: Arc<dyn CouponsService>,
}

impl State {
    #[must_use]
    pub(crate) fn new(coupons: Arc<dyn CouponsService>) -> Self {
        Self { coupons }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self::new(app.coupons))
    }
}
