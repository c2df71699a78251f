//! Discount Domain Concerns

pub mod coupons;
