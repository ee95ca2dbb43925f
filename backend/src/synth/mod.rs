//! Order synthesizer
//!
//! Builds one internally consistent order aggregate: popularity-weighted
//! product lines with optional customizations, discount/surcharge/fee
//! arithmetic, terminal status, and the conditional delivery and payment
//! sub-records. All draws come from the shared RNG; given the same draws
//! the output is fully determined.
//!
//! No retries and no validation failures exist here: every value is
//! constructed to satisfy the aggregate invariants, so the only failure
//! path in the pipeline is the persistence sink downstream.
//!
//! CRITICAL: All money values are i64 (cents)

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::{
    pct_of, round_cents, round_coord, AddressDraft, ChannelType, CourierType, CustomizationDraft,
    DeliveryDraft, DeliveryType, Order, OrderAggregate, OrderLineDraft, OrderStatus,
};
use crate::rng::RngManager;
use crate::seeder::{names, Catalog, ChannelRef};

/// Named reasons attached to discounts
const DISCOUNT_REASONS: &[&str] = &[
    "Cupom de desconto",
    "Promoção do dia",
    "Cliente fidelidade",
    "Desconto gerente",
    "Primeira compra",
    "Aniversário",
];

/// Fixed delivery fee menu, in cents
const DELIVERY_FEES: &[i64] = &[500, 700, 900, 1200, 1500];

const COURIER_TYPES: &[CourierType] = &[
    CourierType::Platform,
    CourierType::Own,
    CourierType::ThirdParty,
];

const DELIVERY_TYPES: &[DeliveryType] = &[
    DeliveryType::Delivery,
    DeliveryType::Takeout,
    DeliveryType::Indoor,
];

/// Courier keeps 60% of the delivery fee
const COURIER_FEE_SHARE: f64 = 0.6;

/// Delivery address bounding box (national)
const LAT_BOUNDS: (f64, f64) = (-33.0, -5.0);
const LON_BOUNDS: (f64, f64) = (-74.0, -34.0);

/// Inputs for one order, chosen by the orchestrator's day loop
#[derive(Debug, Clone, Copy)]
pub struct OrderContext<'a> {
    pub timestamp: NaiveDateTime,
    pub store_id: u64,
    pub channel: &'a ChannelRef,
    /// None means guest checkout
    pub customer_id: Option<u64>,
}

/// Probabilities and ranges driving order composition
///
/// Defaults carry the production values; tests tighten individual knobs to
/// force specific branches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SynthesizerConfig {
    /// Rate of the exponential basket-size draw
    pub basket_rate: f64,

    /// Maximum lines per order
    pub max_lines: usize,

    /// Probability that a customizable product actually gets customized
    pub customization_prob: f64,

    /// Probability that a customization carries an option group tag
    pub option_group_prob: f64,

    /// Probability of a discount, and its fraction bounds
    pub discount_prob: f64,
    pub discount_range: (f64, f64),

    /// Probability of a surcharge, and its fraction bounds
    pub increase_prob: f64,
    pub increase_range: (f64, f64),

    /// Probability of the 10% service tax
    pub service_tax_prob: f64,

    /// Service tax fraction
    pub service_tax_rate: f64,

    /// Probability the order completes (vs. cancels)
    pub completion_prob: f64,
}

impl Default for SynthesizerConfig {
    fn default() -> Self {
        Self {
            basket_rate: 0.5,
            max_lines: 5,
            customization_prob: 0.6,
            option_group_prob: 0.5,
            discount_prob: 0.2,
            discount_range: (0.05, 0.30),
            increase_prob: 0.05,
            increase_range: (0.02, 0.10),
            service_tax_prob: 0.3,
            service_tax_rate: 0.10,
            completion_prob: 0.95,
        }
    }
}

/// Builds one complete order aggregate per call
#[derive(Debug, Clone, Default)]
pub struct OrderSynthesizer {
    config: SynthesizerConfig,
}

impl OrderSynthesizer {
    pub fn new(config: SynthesizerConfig) -> Self {
        Self { config }
    }

    /// Synthesize one order aggregate.
    ///
    /// # Panics
    /// Panics if the catalog has no products, items or payment types; the
    /// orchestrator seeds all three before the first call.
    pub fn build(
        &self,
        catalog: &Catalog,
        ctx: OrderContext<'_>,
        rng: &mut RngManager,
    ) -> OrderAggregate {
        let cfg = &self.config;
        let is_delivery = ctx.channel.channel_type == ChannelType::Delivery;

        // Basket size: exponential draw favoring small baskets, capped
        let line_count = (rng.exponential(cfg.basket_rate).floor() as usize + 1)
            .clamp(1, cfg.max_lines);

        let product_weights = catalog.product_weights();
        let mut lines = Vec::with_capacity(line_count);
        let mut subtotal: i64 = 0;

        for _ in 0..line_count {
            let product = &catalog.products[rng.weighted_index(&product_weights)];
            let quantity = rng.range_inclusive(1, 3) as u32;

            let mut customizations = Vec::new();
            let mut additions: i64 = 0;

            if product.has_customization && rng.bernoulli(cfg.customization_prob) {
                let num_items = rng.range_inclusive(1, 4);
                for _ in 0..num_items {
                    let item = rng.choice(&catalog.items);
                    additions += item.price;

                    let option_group_id = if rng.bernoulli(cfg.option_group_prob) {
                        Some(*rng.choice(&catalog.option_group_ids))
                    } else {
                        None
                    };

                    customizations.push(CustomizationDraft {
                        item_id: item.id,
                        option_group_id,
                        additional_price: item.price,
                        price: item.price,
                    });
                }
            }

            let total_price = (product.base_price + additions) * quantity as i64;
            subtotal += total_price;

            lines.push(OrderLineDraft {
                product_id: product.id,
                quantity,
                base_price: product.base_price,
                total_price,
                customizations,
            });
        }

        let (discount, discount_reason) = if rng.bernoulli(cfg.discount_prob) {
            let fraction = rng.uniform(cfg.discount_range.0, cfg.discount_range.1);
            (
                pct_of(subtotal, fraction),
                Some(rng.choice(DISCOUNT_REASONS).to_string()),
            )
        } else {
            (0, None)
        };

        let increase = if rng.bernoulli(cfg.increase_prob) {
            pct_of(subtotal, rng.uniform(cfg.increase_range.0, cfg.increase_range.1))
        } else {
            0
        };

        let delivery_fee = if is_delivery {
            *rng.choice(DELIVERY_FEES)
        } else {
            0
        };

        let service_tax = if rng.bernoulli(cfg.service_tax_prob) {
            pct_of(subtotal, cfg.service_tax_rate)
        } else {
            0
        };

        let status = if rng.bernoulli(cfg.completion_prob) {
            OrderStatus::Completed
        } else {
            OrderStatus::Cancelled
        };

        let total_amount = subtotal - discount + increase + delivery_fee + service_tax;
        let value_paid = match status {
            OrderStatus::Completed => total_amount,
            OrderStatus::Cancelled => 0,
        };

        let production_seconds = match status {
            OrderStatus::Completed => Some(rng.range_inclusive(300, 2400) as u32),
            OrderStatus::Cancelled => None,
        };
        let delivery_seconds = if is_delivery && status == OrderStatus::Completed {
            Some(rng.range_inclusive(600, 3600) as u32)
        } else {
            None
        };

        // Physical orders record how many people sat down
        let people_quantity = if is_delivery {
            None
        } else {
            Some(rng.range_inclusive(1, 8) as u8)
        };

        // Guest checkout stores a synthetic display name on the order
        let customer_name = match ctx.customer_id {
            Some(_) => None,
            None => Some(names::full_name(rng)),
        };

        let delivery = if is_delivery && status == OrderStatus::Completed {
            Some(self.build_delivery(delivery_fee, rng))
        } else {
            None
        };

        let payment_type_id = match status {
            OrderStatus::Completed => Some(*rng.choice(&catalog.payment_type_ids)),
            OrderStatus::Cancelled => None,
        };

        OrderAggregate {
            order: Order {
                store_id: ctx.store_id,
                channel_id: ctx.channel.id,
                customer_id: ctx.customer_id,
                customer_name,
                created_at: ctx.timestamp,
                status,
                total_amount_items: subtotal,
                discount,
                discount_reason,
                increase,
                delivery_fee,
                service_tax,
                total_amount,
                value_paid,
                production_seconds,
                delivery_seconds,
                people_quantity,
                origin: "POS".to_string(),
            },
            lines,
            delivery,
            payment_type_id,
        }
    }

    /// Courier identity, fee split and synthesized drop-off address
    fn build_delivery(&self, delivery_fee: i64, rng: &mut RngManager) -> DeliveryDraft {
        // Coordinates drawn around the metro area, then clamped to the
        // national bounding box
        let latitude = round_coord(
            (-23.5 + rng.uniform(-10.0, 5.0)).clamp(LAT_BOUNDS.0, LAT_BOUNDS.1),
        );
        let longitude = round_coord(
            (-46.6 + rng.uniform(-10.0, 10.0)).clamp(LON_BOUNDS.0, LON_BOUNDS.1),
        );

        let complement = match rng.range(0, 3) {
            0 => Some("Apto 101".to_string()),
            1 => Some("Casa".to_string()),
            _ => None,
        };

        DeliveryDraft {
            courier_name: names::full_name(rng),
            courier_phone: names::phone(rng),
            courier_type: *rng.choice(COURIER_TYPES),
            delivery_type: *rng.choice(DELIVERY_TYPES),
            delivery_fee,
            courier_fee: round_cents(delivery_fee as f64 * COURIER_FEE_SHARE),
            address: AddressDraft {
                street: names::street(rng),
                number: rng.range(10, 10_000).to_string(),
                complement,
                neighborhood: names::neighborhood(rng),
                city: names::city(rng),
                state: names::state_code(rng),
                postal_code: names::postal_code(rng),
                latitude,
                longitude,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calendar::timestamp;
    use crate::seeder::{seed_all, SeedCounts};
    use crate::sink::MemorySink;
    use chrono::NaiveDate;

    fn catalog(seed: u64) -> Catalog {
        let mut sink = MemorySink::new();
        let mut rng = RngManager::new(seed);
        let counts = SeedCounts {
            stores: 3,
            products: 12,
            items: 8,
            customers: 10,
        };
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        seed_all(&mut sink, &mut rng, &counts, start).unwrap()
    }

    fn build_one(seed: u64, channel_idx: usize, customer_id: Option<u64>) -> OrderAggregate {
        let catalog = catalog(seed);
        let mut rng = RngManager::new(seed.wrapping_mul(31).wrapping_add(1));
        let synth = OrderSynthesizer::default();
        let ts = timestamp(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(), 12, 30, 0);
        let channel = catalog.channels[channel_idx];
        synth.build(
            &catalog,
            OrderContext {
                timestamp: ts,
                store_id: catalog.store_ids[0],
                channel: &channel,
                customer_id,
            },
            &mut rng,
        )
    }

    #[test]
    fn test_order_total_invariant() {
        for seed in 1..100 {
            let agg = build_one(seed, (seed % 6) as usize, Some(1));
            let o = &agg.order;
            assert_eq!(
                o.total_amount,
                o.total_amount_items - o.discount + o.increase + o.delivery_fee + o.service_tax
            );
            match o.status {
                OrderStatus::Completed => assert_eq!(o.value_paid, o.total_amount),
                OrderStatus::Cancelled => assert_eq!(o.value_paid, 0),
            }
        }
    }

    #[test]
    fn test_line_total_invariant() {
        for seed in 1..100 {
            let agg = build_one(seed, (seed % 6) as usize, Some(1));
            let mut subtotal = 0;
            for line in &agg.lines {
                let additions: i64 = line.customizations.iter().map(|c| c.price).sum();
                assert_eq!(
                    line.total_price,
                    (line.base_price + additions) * line.quantity as i64
                );
                assert!((1..=3).contains(&line.quantity));
                subtotal += line.total_price;
            }
            assert_eq!(agg.order.total_amount_items, subtotal);
            assert!((1..=5).contains(&agg.lines.len()));
        }
    }

    #[test]
    fn test_physical_channel_has_no_delivery() {
        for seed in 1..50 {
            // Channel 0 is Presencial
            let agg = build_one(seed, 0, Some(1));
            assert_eq!(agg.order.delivery_fee, 0);
            assert!(agg.delivery.is_none());
            assert!(agg.order.delivery_seconds.is_none());
            assert!(agg.order.people_quantity.is_some());
        }
    }

    #[test]
    fn test_delivery_record_iff_completed_on_delivery_channel() {
        for seed in 1..100 {
            // Channel 1 is iFood (delivery)
            let agg = build_one(seed, 1, Some(1));
            assert!(DELIVERY_FEES.contains(&agg.order.delivery_fee));
            assert!(agg.order.people_quantity.is_none());

            match agg.order.status {
                OrderStatus::Completed => {
                    let delivery = agg.delivery.as_ref().expect("completed delivery order");
                    assert_eq!(
                        delivery.courier_fee,
                        round_cents(delivery.delivery_fee as f64 * 0.6)
                    );
                    let addr = &delivery.address;
                    assert!(addr.latitude >= -33.0 && addr.latitude <= -5.0);
                    assert!(addr.longitude >= -74.0 && addr.longitude <= -34.0);
                }
                OrderStatus::Cancelled => assert!(agg.delivery.is_none()),
            }
        }
    }

    #[test]
    fn test_payment_iff_completed() {
        for seed in 1..100 {
            let agg = build_one(seed, (seed % 6) as usize, Some(1));
            match agg.order.status {
                OrderStatus::Completed => {
                    assert!(agg.payment_type_id.is_some());
                    assert!(agg.order.production_seconds.is_some());
                }
                OrderStatus::Cancelled => {
                    assert!(agg.payment_type_id.is_none());
                    assert!(agg.order.production_seconds.is_none());
                }
            }
        }
    }

    #[test]
    fn test_guest_checkout_gets_synthetic_name() {
        let agg = build_one(5, 0, None);
        assert!(agg.order.customer_id.is_none());
        assert!(agg.order.customer_name.is_some());

        let agg = build_one(5, 0, Some(7));
        assert_eq!(agg.order.customer_id, Some(7));
        assert!(agg.order.customer_name.is_none());
    }

    #[test]
    fn test_customizations_only_on_customizable_products() {
        let catalog = catalog(11);
        let synth = OrderSynthesizer::default();
        let ts = timestamp(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(), 20, 0, 0);
        let mut rng = RngManager::new(1234);

        for _ in 0..200 {
            let channel = catalog.channels[0];
            let agg = synth.build(
                &catalog,
                OrderContext {
                    timestamp: ts,
                    store_id: catalog.store_ids[0],
                    channel: &channel,
                    customer_id: Some(1),
                },
                &mut rng,
            );
            for line in &agg.lines {
                if line.customizations.is_empty() {
                    continue;
                }
                let product = catalog
                    .products
                    .iter()
                    .find(|p| p.id == line.product_id)
                    .unwrap();
                assert!(
                    product.has_customization,
                    "non-customizable product {} got customizations",
                    product.id
                );
                assert!((1..=4).contains(&line.customizations.len()));
            }
        }
    }

    #[test]
    fn test_discount_bounds() {
        for seed in 1..200 {
            let agg = build_one(seed, 0, Some(1));
            let o = &agg.order;
            if o.discount > 0 {
                assert!(o.discount_reason.is_some());
                let fraction = o.discount as f64 / o.total_amount_items as f64;
                // Rounding can push the ratio a hair past the bounds
                assert!(fraction > 0.049 && fraction < 0.301, "fraction {}", fraction);
            } else {
                assert!(o.discount_reason.is_none());
            }
        }
    }
}
