//! Order aggregate models
//!
//! An order ("sale") owns its lines, each line owns its customizations, and
//! a completed order on a delivery channel additionally owns a delivery
//! record with its address. Completed orders own exactly one payment.
//!
//! Two layers live here:
//! - draft types (`OrderAggregate`, `OrderLineDraft`, ...) produced by the
//!   order synthesizer before any id exists;
//! - persisted row types (`OrderLine`, `Delivery`, ...) built by the
//!   orchestrator once parent ids come back from the sink.
//!
//! CRITICAL: All money values are i64 (cents)

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Terminal order status
///
/// Orders are generated directly in a terminal state; there is no lifecycle
/// to walk through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Status string used by the relational schema
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

/// Who employs the courier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourierType {
    Platform,
    Own,
    ThirdParty,
}

impl CourierType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourierType::Platform => "PLATFORM",
            CourierType::Own => "OWN",
            CourierType::ThirdParty => "THIRD_PARTY",
        }
    }
}

/// How the order leaves the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryType {
    Delivery,
    Takeout,
    Indoor,
}

impl DeliveryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryType::Delivery => "DELIVERY",
            DeliveryType::Takeout => "TAKEOUT",
            DeliveryType::Indoor => "INDOOR",
        }
    }
}

/// One order ("sale")
///
/// Invariants:
/// - `total_amount = total_amount_items - discount + increase + delivery_fee + service_tax`
/// - `value_paid = total_amount` when Completed, `0` when Cancelled
/// - `customer_name` is Some iff `customer_id` is None (guest checkout)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub store_id: u64,
    pub channel_id: u64,
    pub customer_id: Option<u64>,
    pub customer_name: Option<String>,
    pub created_at: NaiveDateTime,
    pub status: OrderStatus,
    pub total_amount_items: i64,
    pub discount: i64,
    pub discount_reason: Option<String>,
    pub increase: i64,
    pub delivery_fee: i64,
    pub service_tax: i64,
    pub total_amount: i64,
    pub value_paid: i64,
    pub production_seconds: Option<u32>,
    pub delivery_seconds: Option<u32>,
    pub people_quantity: Option<u8>,
    pub origin: String,
}

impl Order {
    pub fn is_completed(&self) -> bool {
        self.status == OrderStatus::Completed
    }
}

/// One product line on an order ("product sale")
///
/// Invariant: `total_price = (base_price + Σ customization prices) × quantity`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub order_id: u64,
    pub product_id: u64,
    pub quantity: u32,
    pub base_price: i64,
    pub total_price: i64,
}

/// One customization item attached to an order line ("item product sale")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineCustomization {
    pub order_line_id: u64,
    pub item_id: u64,
    pub option_group_id: Option<u64>,
    pub quantity: u32,
    pub additional_price: i64,
    pub price: i64,
    pub amount: u32,
}

/// Delivery record, 0:1 per order
///
/// Exists iff the channel is a delivery channel and the order completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    pub order_id: u64,
    pub courier_name: String,
    pub courier_phone: String,
    pub courier_type: CourierType,
    pub delivery_type: DeliveryType,
    pub status: String,
    pub delivery_fee: i64,
    pub courier_fee: i64,
}

/// Delivery address, 1:1 with a delivery record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryAddress {
    pub order_id: u64,
    pub delivery_id: u64,
    pub street: String,
    pub number: String,
    pub complement: Option<String>,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Payment record, exactly one per completed order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub order_id: u64,
    pub payment_type_id: u64,
    pub value: i64,
}

// ============================================================================
// Draft Types (pre-persistence)
// ============================================================================

/// Complete order aggregate as produced by the synthesizer
///
/// Foreign keys to catalog entities are resolved; ids of the order itself,
/// its lines and its delivery record are assigned by the sink at persist
/// time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderAggregate {
    pub order: Order,
    pub lines: Vec<OrderLineDraft>,
    pub delivery: Option<DeliveryDraft>,
    /// Some iff the order completed
    pub payment_type_id: Option<u64>,
}

/// Order line before the parent order id exists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineDraft {
    pub product_id: u64,
    pub quantity: u32,
    pub base_price: i64,
    pub total_price: i64,
    pub customizations: Vec<CustomizationDraft>,
}

/// Customization before the parent line id exists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomizationDraft {
    pub item_id: u64,
    pub option_group_id: Option<u64>,
    pub additional_price: i64,
    pub price: i64,
}

/// Delivery record plus address, before ids exist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryDraft {
    pub courier_name: String,
    pub courier_phone: String,
    pub courier_type: CourierType,
    pub delivery_type: DeliveryType,
    pub delivery_fee: i64,
    pub courier_fee: i64,
    pub address: AddressDraft,
}

/// Address fields for a delivery draft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressDraft {
    pub street: String,
    pub number: String,
    pub complement: Option<String>,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_strings() {
        assert_eq!(OrderStatus::Completed.as_str(), "COMPLETED");
        assert_eq!(OrderStatus::Cancelled.as_str(), "CANCELLED");
    }

    #[test]
    fn test_courier_and_delivery_type_strings() {
        assert_eq!(CourierType::ThirdParty.as_str(), "THIRD_PARTY");
        assert_eq!(DeliveryType::Takeout.as_str(), "TAKEOUT");
    }
}
