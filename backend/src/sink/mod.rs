//! Persistence sink abstraction
//!
//! The generator treats storage as an opaque relational sink: one insert
//! operation per entity type returning the generated identifier, plus
//! explicit commit/rollback. The orchestrator never sees SQL; it only sees
//! ids coming back, which it threads into child rows as foreign keys.
//!
//! `MemorySink` is the bundled implementation, used by the test suite and
//! by the CLI's JSON export. A database-backed sink only has to implement
//! [`SalesSink`].

pub mod memory;

pub use memory::MemorySink;

use thiserror::Error;

use crate::models::{
    Category, Channel, Customer, Delivery, DeliveryAddress, Item, LineCustomization, OptionGroup,
    Order, OrderLine, Payment, PaymentType, Product, Store, SubBrand,
};

/// Errors surfaced by a persistence sink
#[derive(Debug, Error)]
pub enum SinkError {
    /// Connection could not be established; nothing was written
    #[error("connection failed: {0}")]
    Connection(String),

    /// A write failed mid-run; uncommitted work must be rolled back
    #[error("write failed: {0}")]
    Write(String),

    /// Commit or rollback failed
    #[error("transaction control failed: {0}")]
    Transaction(String),
}

/// Opaque relational sink for generated entities
///
/// Every insert returns the generated identifier for the new row. Writes
/// become durable only at `commit`; `rollback` discards everything since
/// the last commit.
pub trait SalesSink {
    fn insert_sub_brand(&mut self, row: &SubBrand) -> Result<u64, SinkError>;
    fn insert_channel(&mut self, row: &Channel) -> Result<u64, SinkError>;
    fn insert_payment_type(&mut self, row: &PaymentType) -> Result<u64, SinkError>;
    fn insert_category(&mut self, row: &Category) -> Result<u64, SinkError>;
    fn insert_product(&mut self, row: &Product) -> Result<u64, SinkError>;
    fn insert_item(&mut self, row: &Item) -> Result<u64, SinkError>;
    fn insert_option_group(&mut self, row: &OptionGroup) -> Result<u64, SinkError>;
    fn insert_store(&mut self, row: &Store) -> Result<u64, SinkError>;
    fn insert_customer(&mut self, row: &Customer) -> Result<u64, SinkError>;

    fn insert_order(&mut self, row: &Order) -> Result<u64, SinkError>;
    fn insert_order_line(&mut self, row: &OrderLine) -> Result<u64, SinkError>;
    fn insert_line_customization(&mut self, row: &LineCustomization) -> Result<u64, SinkError>;
    fn insert_delivery(&mut self, row: &Delivery) -> Result<u64, SinkError>;
    fn insert_delivery_address(&mut self, row: &DeliveryAddress) -> Result<u64, SinkError>;
    fn insert_payment(&mut self, row: &Payment) -> Result<u64, SinkError>;

    /// Make all inserts since the last commit durable
    fn commit(&mut self) -> Result<(), SinkError>;

    /// Discard all inserts since the last commit
    fn rollback(&mut self) -> Result<(), SinkError>;
}
