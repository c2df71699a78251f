//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use discount_app::domain::coupons::MockCouponsService;

use crate::state::State;

pub(crate) fn state_with_coupons(coupons: MockCouponsService) -> Arc<State> {
    Arc::new(State::new(Arc::new(coupons)))
}

pub(crate) fn coupons_service(coupons: MockCouponsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_coupons(coupons)))
            .push(route),
    )
}
