//! Restaurant Sales Dataset Generator - Core Engine
//!
//! Synthesizes a multi-month, multi-store restaurant point-of-sale dataset
//! with plausible statistical structure: weekday seasonality, meal-time
//! demand curves, channel mix, an anomaly window and a promotion spike.
//!
//! # Architecture
//!
//! - **core**: calendar span and timestamp assembly
//! - **models**: domain row types (catalog, customers, order aggregate)
//! - **seeder**: static reference data generation (catalog & actors)
//! - **demand**: daily volume and hourly demand curve
//! - **synth**: single-order synthesis
//! - **sink**: opaque relational persistence (insert/commit/rollback)
//! - **events**: structured progress reporting
//! - **orchestrator**: the day-by-day generation loop
//! - **rng**: deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (cents)
//! 2. All randomness is deterministic (seeded RNG)
//! 3. Child rows are persisted after their parents, so every foreign key
//!    references an existing row

// Module declarations
pub mod core;
pub mod demand;
pub mod events;
pub mod models;
pub mod orchestrator;
pub mod rng;
pub mod seeder;
pub mod sink;
pub mod synth;

// Re-exports for convenience
pub use demand::{DemandConfig, DemandModel, WEEKDAY_MULT};
pub use events::{NullProgress, ProgressEvent, ProgressHandler, ProgressLog};
pub use models::{
    Channel, ChannelType, Customer, Delivery, DeliveryAddress, LineCustomization, Order,
    OrderAggregate, OrderLine, OrderStatus, Payment, Product, Store,
};
pub use orchestrator::{GeneratorConfig, GeneratorError, Orchestrator, RunSummary};
pub use rng::RngManager;
pub use seeder::{Catalog, SeedCounts};
pub use sink::{MemorySink, SalesSink, SinkError};
pub use synth::{OrderContext, OrderSynthesizer, SynthesizerConfig};
