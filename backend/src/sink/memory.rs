//! In-memory relational sink
//!
//! Holds every table as a vector of (id, row) pairs with a per-table id
//! sequence and a committed-length watermark. Rollback truncates each table
//! back to its watermark, matching the batch semantics of a real database
//! transaction.
//!
//! The whole sink serializes to JSON, which is how the CLI exports a
//! generated dataset for inspection or downstream loading.

use serde::Serialize;

use super::{SalesSink, SinkError};
use crate::models::{
    Category, Channel, Customer, Delivery, DeliveryAddress, Item, LineCustomization, OptionGroup,
    Order, OrderLine, Payment, PaymentType, Product, Store, SubBrand,
};

/// One table: rows keyed by generated id, with a commit watermark
#[derive(Debug, Clone, Serialize)]
pub struct Table<T> {
    rows: Vec<(u64, T)>,
    #[serde(skip)]
    committed_len: usize,
    #[serde(skip)]
    next_id: u64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            committed_len: 0,
            next_id: 1,
        }
    }
}

impl<T: Clone> Table<T> {
    fn insert(&mut self, row: &T) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.push((id, row.clone()));
        id
    }

    fn commit(&mut self) {
        self.committed_len = self.rows.len();
    }

    fn rollback(&mut self) {
        self.rows.truncate(self.committed_len);
        // Ids of rolled-back rows are not reused, like a database sequence
    }

    /// All rows, committed and pending
    pub fn rows(&self) -> &[(u64, T)] {
        &self.rows
    }

    /// Look up a row by generated id
    pub fn get(&self, id: u64) -> Option<&T> {
        self.rows
            .iter()
            .find(|(row_id, _)| *row_id == id)
            .map(|(_, row)| row)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// In-memory implementation of [`SalesSink`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct MemorySink {
    pub sub_brands: Table<SubBrand>,
    pub channels: Table<Channel>,
    pub payment_types: Table<PaymentType>,
    pub categories: Table<Category>,
    pub products: Table<Product>,
    pub items: Table<Item>,
    pub option_groups: Table<OptionGroup>,
    pub stores: Table<Store>,
    pub customers: Table<Customer>,
    pub orders: Table<Order>,
    pub order_lines: Table<OrderLine>,
    pub line_customizations: Table<LineCustomization>,
    pub deliveries: Table<Delivery>,
    pub delivery_addresses: Table<DeliveryAddress>,
    pub payments: Table<Payment>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SalesSink for MemorySink {
    fn insert_sub_brand(&mut self, row: &SubBrand) -> Result<u64, SinkError> {
        Ok(self.sub_brands.insert(row))
    }

    fn insert_channel(&mut self, row: &Channel) -> Result<u64, SinkError> {
        Ok(self.channels.insert(row))
    }

    fn insert_payment_type(&mut self, row: &PaymentType) -> Result<u64, SinkError> {
        Ok(self.payment_types.insert(row))
    }

    fn insert_category(&mut self, row: &Category) -> Result<u64, SinkError> {
        Ok(self.categories.insert(row))
    }

    fn insert_product(&mut self, row: &Product) -> Result<u64, SinkError> {
        Ok(self.products.insert(row))
    }

    fn insert_item(&mut self, row: &Item) -> Result<u64, SinkError> {
        Ok(self.items.insert(row))
    }

    fn insert_option_group(&mut self, row: &OptionGroup) -> Result<u64, SinkError> {
        Ok(self.option_groups.insert(row))
    }

    fn insert_store(&mut self, row: &Store) -> Result<u64, SinkError> {
        Ok(self.stores.insert(row))
    }

    fn insert_customer(&mut self, row: &Customer) -> Result<u64, SinkError> {
        Ok(self.customers.insert(row))
    }

    fn insert_order(&mut self, row: &Order) -> Result<u64, SinkError> {
        Ok(self.orders.insert(row))
    }

    fn insert_order_line(&mut self, row: &OrderLine) -> Result<u64, SinkError> {
        Ok(self.order_lines.insert(row))
    }

    fn insert_line_customization(&mut self, row: &LineCustomization) -> Result<u64, SinkError> {
        Ok(self.line_customizations.insert(row))
    }

    fn insert_delivery(&mut self, row: &Delivery) -> Result<u64, SinkError> {
        Ok(self.deliveries.insert(row))
    }

    fn insert_delivery_address(&mut self, row: &DeliveryAddress) -> Result<u64, SinkError> {
        Ok(self.delivery_addresses.insert(row))
    }

    fn insert_payment(&mut self, row: &Payment) -> Result<u64, SinkError> {
        Ok(self.payments.insert(row))
    }

    fn commit(&mut self) -> Result<(), SinkError> {
        self.sub_brands.commit();
        self.channels.commit();
        self.payment_types.commit();
        self.categories.commit();
        self.products.commit();
        self.items.commit();
        self.option_groups.commit();
        self.stores.commit();
        self.customers.commit();
        self.orders.commit();
        self.order_lines.commit();
        self.line_customizations.commit();
        self.deliveries.commit();
        self.delivery_addresses.commit();
        self.payments.commit();
        Ok(())
    }

    fn rollback(&mut self) -> Result<(), SinkError> {
        self.sub_brands.rollback();
        self.channels.rollback();
        self.payment_types.rollback();
        self.categories.rollback();
        self.products.rollback();
        self.items.rollback();
        self.option_groups.rollback();
        self.stores.rollback();
        self.customers.rollback();
        self.orders.rollback();
        self.order_lines.rollback();
        self.line_customizations.rollback();
        self.deliveries.rollback();
        self.delivery_addresses.rollback();
        self.payments.rollback();
        Ok(())
    }
}
