//! Domain models for the sales dataset generator
//!
//! These are the pre-persistence row types handed to the sink. Generated
//! identifiers come back from the sink; rows therefore carry foreign keys
//! but never their own id.
//!
//! CRITICAL: All money values are i64 (cents)

pub mod catalog;
pub mod customer;
pub mod order;

// Re-exports
pub use catalog::{
    Category, CategoryKind, Channel, ChannelType, Item, OptionGroup, PaymentType, Product, Store,
    SubBrand, BRAND_ID,
};
pub use customer::{Customer, Gender, RegistrationOrigin};
pub use order::{
    AddressDraft, CourierType, CustomizationDraft, Delivery, DeliveryAddress, DeliveryDraft,
    DeliveryType, LineCustomization, Order, OrderAggregate, OrderLine, OrderLineDraft, OrderStatus,
    Payment,
};

/// Round a fractional cent amount to whole cents.
///
/// Percentage-based charges (discount, increase, service tax) are computed
/// in f64 and rounded exactly once, here.
pub fn round_cents(value: f64) -> i64 {
    value.round() as i64
}

/// Fraction of an amount, rounded to whole cents.
pub fn pct_of(amount_cents: i64, fraction: f64) -> i64 {
    round_cents(amount_cents as f64 * fraction)
}

/// Round a geographic coordinate to 6 decimal places.
pub fn round_coord(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}
