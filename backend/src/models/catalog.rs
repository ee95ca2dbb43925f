//! Catalog reference models
//!
//! Static reference entities created once during seeding: sub-brands,
//! channels, categories, products, items, option groups, stores and payment
//! types. All are immutable after insertion and referenced by id from the
//! order stream.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The single brand the whole dataset belongs to.
pub const BRAND_ID: u64 = 1;

/// Ordering avenue type
///
/// Physical channels are in-person; Delivery covers third-party platforms
/// and direct digital channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelType {
    Physical,
    Delivery,
}

impl ChannelType {
    /// Single-letter code used by the relational schema
    pub fn as_code(&self) -> &'static str {
        match self {
            ChannelType::Physical => "P",
            ChannelType::Delivery => "D",
        }
    }
}

/// Category kind: product categories vs. customization-item categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryKind {
    Product,
    Item,
}

impl CategoryKind {
    pub fn as_code(&self) -> &'static str {
        match self {
            CategoryKind::Product => "P",
            CategoryKind::Item => "I",
        }
    }
}

/// Sub-brand under the main brand (e.g. the burger line vs. the pizza line)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubBrand {
    pub brand_id: u64,
    pub name: String,
}

/// Ordering channel
///
/// `weight` drives weight-proportional channel selection; weights across
/// channels need not sum to 1. `commission_pct` is the platform take rate
/// (informational, not used in order arithmetic).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub brand_id: u64,
    pub name: String,
    pub description: String,
    pub channel_type: ChannelType,
    pub weight: f64,
    pub commission_pct: f64,
}

/// Accepted payment method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentType {
    pub brand_id: u64,
    pub description: String,
}

/// Product or item category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub brand_id: u64,
    pub name: String,
    pub kind: CategoryKind,
}

/// Sellable product
///
/// Pricing and sampling attributes (base price, popularity, customization
/// flag) live on the in-memory reference handle kept by the seeder, not on
/// the persisted row, mirroring a POS catalog where price books are managed
/// elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub brand_id: u64,
    pub sub_brand_id: u64,
    pub category_id: u64,
    pub name: String,
    pub pos_uuid: Uuid,
}

/// Customization add-on (topping, sauce, side)
///
/// Items are independent of any specific product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub brand_id: u64,
    pub sub_brand_id: u64,
    pub category_id: u64,
    pub name: String,
    pub pos_uuid: Uuid,
}

/// Named customization choice category (e.g. "Tamanho", "Remover")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionGroup {
    pub brand_id: u64,
    pub name: String,
}

/// Physical store location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub brand_id: u64,
    pub sub_brand_id: u64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub district: String,
    pub street: String,
    pub number: u32,
    pub latitude: f64,
    pub longitude: f64,
    pub is_active: bool,
    pub is_own: bool,
    pub creation_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_type_codes() {
        assert_eq!(ChannelType::Physical.as_code(), "P");
        assert_eq!(ChannelType::Delivery.as_code(), "D");
    }

    #[test]
    fn test_category_kind_codes() {
        assert_eq!(CategoryKind::Product.as_code(), "P");
        assert_eq!(CategoryKind::Item.as_code(), "I");
    }
}
