//! Generation engine
//!
//! Main loop integrating all components:
//! - Catalog & actor seeding (static reference data)
//! - Demand model (daily volume, hourly curve, special days)
//! - Order synthesizer (one consistent aggregate per order)
//! - Persistence sink (batched commits, rollback on failure)
//! - Progress events (structured, no printing in the core)
//!
//! # Architecture
//!
//! ```text
//! For each day d in [start, end]:
//! 1. Draw the daily order count (weekday, anomaly, promotion effects)
//! 2. For each order:
//!    a. Draw hour (weighted curve), minute, second
//!    b. Choose store (uniform), channel (weight-proportional),
//!       customer (p = 0.7, else guest)
//!    c. Synthesize the aggregate
//!    d. Persist order → lines → customizations → delivery → payment
//!    e. Commit every `batch_size` orders
//! 3. Commit at the day boundary
//! 4. Emit a monthly summary event when a month closes
//! ```
//!
//! # Determinism
//!
//! All randomness flows through one `RngManager` seeded from the config.
//! Same seed + same config = identical dataset.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::calendar::{is_month_start, timestamp, DateSpan};
use crate::demand::{DemandConfig, DemandModel};
use crate::events::{ProgressEvent, ProgressHandler};
use crate::models::{Delivery, DeliveryAddress, LineCustomization, OrderAggregate, OrderLine, Payment};
use crate::rng::RngManager;
use crate::seeder::{seed_all, SeedCounts};
use crate::sink::{SalesSink, SinkError};
use crate::synth::{OrderContext, OrderSynthesizer, SynthesizerConfig};

// ============================================================================
// Configuration
// ============================================================================

/// Complete generation run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// RNG seed; fully determines the dataset together with the rest of
    /// the config
    pub rng_seed: u64,

    /// First simulated day
    pub start_date: NaiveDate,

    /// Simulation span in 30-day months
    pub months: u32,

    /// How many of each reference entity to seed
    pub seed_counts: SeedCounts,

    /// Orders per mid-day commit batch
    pub batch_size: u64,

    /// Probability an order is attached to a registered customer
    /// (otherwise guest checkout)
    pub customer_prob: f64,

    /// Demand model tuning
    pub demand: DemandConfig,

    /// Order composition tuning
    pub synthesizer: SynthesizerConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rng_seed: 42,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid default date"),
            months: 6,
            seed_counts: SeedCounts::default(),
            batch_size: 1000,
            customer_prob: 0.7,
            demand: DemandConfig::default(),
            synthesizer: SynthesizerConfig::default(),
        }
    }
}

/// Totals reported at the end of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunSummary {
    pub total_orders: u64,
    pub total_lines: u64,
    pub total_customizations: u64,
    pub stores: usize,
    pub products: usize,
    pub items: usize,
    pub customers: usize,
}

/// Generation error types
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Configuration validation error
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Persistence failure; uncommitted work has been rolled back
    #[error(transparent)]
    Sink(#[from] SinkError),
}

// ============================================================================
// Orchestrator
// ============================================================================

/// Drives one complete generation run
pub struct Orchestrator {
    config: GeneratorConfig,
    rng: RngManager,
    synthesizer: OrderSynthesizer,
}

impl Orchestrator {
    /// Create a new orchestrator from configuration
    ///
    /// # Errors
    /// Returns `GeneratorError::InvalidConfig` when counts or span are
    /// unusable.
    pub fn new(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        Self::validate_config(&config)?;
        let rng = RngManager::new(config.rng_seed);
        let synthesizer = OrderSynthesizer::new(config.synthesizer);
        Ok(Self {
            config,
            rng,
            synthesizer,
        })
    }

    fn validate_config(config: &GeneratorConfig) -> Result<(), GeneratorError> {
        if config.months == 0 {
            return Err(GeneratorError::InvalidConfig(
                "months must be > 0".to_string(),
            ));
        }
        if config.batch_size == 0 {
            return Err(GeneratorError::InvalidConfig(
                "batch_size must be > 0".to_string(),
            ));
        }
        if config.seed_counts.stores == 0 {
            return Err(GeneratorError::InvalidConfig(
                "stores must be > 0".to_string(),
            ));
        }
        // One product per category minimum, or synthesis has nothing to sample
        if config.seed_counts.products < 6 {
            return Err(GeneratorError::InvalidConfig(
                "products must be >= 6 (one per category)".to_string(),
            ));
        }
        if config.seed_counts.items == 0 {
            return Err(GeneratorError::InvalidConfig(
                "items must be > 0".to_string(),
            ));
        }
        if config.seed_counts.customers == 0 {
            return Err(GeneratorError::InvalidConfig(
                "customers must be > 0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&config.customer_prob) {
            return Err(GeneratorError::InvalidConfig(
                "customer_prob must be in [0, 1]".to_string(),
            ));
        }
        // A non-positive mean would make the daily redraw loop spin forever
        if config.demand.daily_mean <= 0.0 {
            return Err(GeneratorError::InvalidConfig(
                "daily_mean must be > 0".to_string(),
            ));
        }
        if config.demand.daily_std < 0.0 {
            return Err(GeneratorError::InvalidConfig(
                "daily_std must be >= 0".to_string(),
            ));
        }
        if config.demand.anomaly_multiplier < 0.0 {
            return Err(GeneratorError::InvalidConfig(
                "anomaly_multiplier must be >= 0".to_string(),
            ));
        }
        if config.demand.promotion_multiplier < 0.0 {
            return Err(GeneratorError::InvalidConfig(
                "promotion_multiplier must be >= 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Run the full generation: seed, then the day loop.
    ///
    /// On any sink failure, uncommitted work is rolled back and the error
    /// propagates; everything committed in earlier batches stays.
    pub fn run(
        &mut self,
        sink: &mut dyn SalesSink,
        progress: &mut dyn ProgressHandler,
    ) -> Result<RunSummary, GeneratorError> {
        match self.run_inner(sink, progress) {
            Ok(summary) => Ok(summary),
            Err(err) => {
                // Best effort: the original failure is the one to report
                let _ = sink.rollback();
                Err(err)
            }
        }
    }

    fn run_inner(
        &mut self,
        sink: &mut dyn SalesSink,
        progress: &mut dyn ProgressHandler,
    ) -> Result<RunSummary, GeneratorError> {
        let catalog = seed_all(
            sink,
            &mut self.rng,
            &self.config.seed_counts,
            self.config.start_date,
        )?;

        progress.on_event(&ProgressEvent::SeedingCompleted {
            stores: catalog.store_ids.len(),
            products: catalog.products.len(),
            items: catalog.items.len(),
            customers: catalog.customer_ids.len(),
        });

        let demand = DemandModel::new(self.config.demand, self.config.start_date, &mut self.rng);
        let span = DateSpan::from_months(self.config.start_date, self.config.months);
        let channel_weights = catalog.channel_weights();

        let mut summary = RunSummary {
            stores: catalog.store_ids.len(),
            products: catalog.products.len(),
            items: catalog.items.len(),
            customers: catalog.customer_ids.len(),
            ..RunSummary::default()
        };

        for day in span.days() {
            let daily_orders = demand.daily_order_count(day, &mut self.rng);

            for _ in 0..daily_orders {
                let hour = demand.sample_hour(&mut self.rng);
                let minute = self.rng.range(0, 60) as u32;
                let second = self.rng.range(0, 60) as u32;
                let created_at = timestamp(day, hour, minute, second);

                let store_id = *self.rng.choice(&catalog.store_ids);
                let channel = catalog.channels[self.rng.weighted_index(&channel_weights)];
                let customer_id = if self.rng.bernoulli(self.config.customer_prob) {
                    Some(*self.rng.choice(&catalog.customer_ids))
                } else {
                    None
                };

                let aggregate = self.synthesizer.build(
                    &catalog,
                    OrderContext {
                        timestamp: created_at,
                        store_id,
                        channel: &channel,
                        customer_id,
                    },
                    &mut self.rng,
                );

                persist_aggregate(sink, &aggregate, &mut summary)?;

                if summary.total_orders % self.config.batch_size == 0 {
                    sink.commit()?;
                    progress.on_event(&ProgressEvent::BatchCommitted {
                        total_orders: summary.total_orders,
                    });
                }
            }

            // Day boundary commit
            sink.commit()?;

            if let Some(next_day) = day.succ_opt() {
                if is_month_start(next_day) {
                    progress.on_event(&ProgressEvent::MonthCompleted {
                        year: day.year(),
                        month: day.month(),
                        total_orders: summary.total_orders,
                    });
                }
            }
        }

        progress.on_event(&ProgressEvent::RunCompleted {
            total_orders: summary.total_orders,
            total_lines: summary.total_lines,
            total_customizations: summary.total_customizations,
        });

        Ok(summary)
    }

    /// Reference to the run configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}

/// Persist one order aggregate, children after parents.
///
/// Foreign keys are filled from the ids the sink hands back, so every
/// child row references an already-persisted parent.
fn persist_aggregate(
    sink: &mut dyn SalesSink,
    aggregate: &OrderAggregate,
    summary: &mut RunSummary,
) -> Result<(), SinkError> {
    let order_id = sink.insert_order(&aggregate.order)?;
    summary.total_orders += 1;

    for line in &aggregate.lines {
        let line_id = sink.insert_order_line(&OrderLine {
            order_id,
            product_id: line.product_id,
            quantity: line.quantity,
            base_price: line.base_price,
            total_price: line.total_price,
        })?;
        summary.total_lines += 1;

        for customization in &line.customizations {
            sink.insert_line_customization(&LineCustomization {
                order_line_id: line_id,
                item_id: customization.item_id,
                option_group_id: customization.option_group_id,
                quantity: 1,
                additional_price: customization.additional_price,
                price: customization.price,
                amount: 1,
            })?;
            summary.total_customizations += 1;
        }
    }

    if let Some(delivery) = &aggregate.delivery {
        let delivery_id = sink.insert_delivery(&Delivery {
            order_id,
            courier_name: delivery.courier_name.clone(),
            courier_phone: delivery.courier_phone.clone(),
            courier_type: delivery.courier_type,
            delivery_type: delivery.delivery_type,
            status: "DELIVERED".to_string(),
            delivery_fee: delivery.delivery_fee,
            courier_fee: delivery.courier_fee,
        })?;

        let addr = &delivery.address;
        sink.insert_delivery_address(&DeliveryAddress {
            order_id,
            delivery_id,
            street: addr.street.clone(),
            number: addr.number.clone(),
            complement: addr.complement.clone(),
            neighborhood: addr.neighborhood.clone(),
            city: addr.city.clone(),
            state: addr.state.clone(),
            postal_code: addr.postal_code.clone(),
            latitude: addr.latitude,
            longitude: addr.longitude,
        })?;
    }

    if let Some(payment_type_id) = aggregate.payment_type_id {
        sink.insert_payment(&Payment {
            order_id,
            payment_type_id,
            value: aggregate.order.value_paid,
        })?;
    }

    Ok(())
}
