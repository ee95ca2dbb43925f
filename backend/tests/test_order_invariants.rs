//! Property tests for order aggregate invariants
//!
//! Builds orders across arbitrary seeds and channel choices and asserts the
//! aggregate arithmetic and conditional sub-records hold in every case.
//!
//! CRITICAL: All money values are i64 (cents)

use chrono::NaiveDate;
use proptest::prelude::*;
use sales_generator_core_rs::models::round_cents;
use sales_generator_core_rs::synth::{OrderContext, OrderSynthesizer};
use sales_generator_core_rs::core::calendar::timestamp;
use sales_generator_core_rs::seeder::{seed_all, Catalog, SeedCounts};
use sales_generator_core_rs::{ChannelType, MemorySink, OrderStatus, RngManager};

fn small_catalog(seed: u64) -> Catalog {
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

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn order_invariants_hold(
        seed in 1u64..100_000,
        channel_idx in 0usize..6,
        guest in any::<bool>(),
    ) {
        let catalog = small_catalog(seed % 97 + 1);
        let synth = OrderSynthesizer::default();
        let mut rng = RngManager::new(seed);
        let channel = catalog.channels[channel_idx];
        let customer_id = if guest { None } else { Some(1) };

        let agg = synth.build(
            &catalog,
            OrderContext {
                timestamp: timestamp(
                    NaiveDate::from_ymd_opt(2024, 2, 15).unwrap(),
                    12,
                    0,
                    0,
                ),
                store_id: catalog.store_ids[0],
                channel: &channel,
                customer_id,
            },
            &mut rng,
        );
        let o = &agg.order;

        // Line arithmetic and basket bounds
        prop_assert!((1..=5).contains(&agg.lines.len()));
        let mut subtotal = 0i64;
        for line in &agg.lines {
            prop_assert!((1..=3).contains(&line.quantity));
            let additions: i64 = line.customizations.iter().map(|c| c.price).sum();
            prop_assert_eq!(
                line.total_price,
                (line.base_price + additions) * line.quantity as i64
            );
            prop_assert!(line.customizations.len() <= 4);
            subtotal += line.total_price;
        }
        prop_assert_eq!(o.total_amount_items, subtotal);

        // Money fields never go negative
        prop_assert!(o.discount >= 0);
        prop_assert!(o.increase >= 0);
        prop_assert!(o.service_tax >= 0);
        prop_assert!(o.delivery_fee >= 0);
        prop_assert!(o.total_amount >= 0);

        // Total decomposition
        prop_assert_eq!(
            o.total_amount,
            o.total_amount_items - o.discount + o.increase + o.delivery_fee + o.service_tax
        );
        prop_assert_eq!(o.discount > 0, o.discount_reason.is_some());

        // Status-dependent fields
        match o.status {
            OrderStatus::Completed => {
                prop_assert_eq!(o.value_paid, o.total_amount);
                prop_assert!(o.production_seconds.is_some());
                prop_assert!(agg.payment_type_id.is_some());
            }
            OrderStatus::Cancelled => {
                prop_assert_eq!(o.value_paid, 0);
                prop_assert!(o.production_seconds.is_none());
                prop_assert!(agg.payment_type_id.is_none());
                prop_assert!(agg.delivery.is_none());
            }
        }

        // Channel-dependent fields
        let is_delivery = channel.channel_type == ChannelType::Delivery;
        if is_delivery {
            prop_assert!(o.delivery_fee > 0);
            prop_assert!(o.people_quantity.is_none());
        } else {
            prop_assert_eq!(o.delivery_fee, 0);
            prop_assert!(agg.delivery.is_none());
            prop_assert!(o.delivery_seconds.is_none());
            let people = o.people_quantity.unwrap();
            prop_assert!((1..=8).contains(&people));
        }

        // Delivery record exists iff delivery channel and completed
        let expect_delivery = is_delivery && o.status == OrderStatus::Completed;
        prop_assert_eq!(agg.delivery.is_some(), expect_delivery);
        if let Some(delivery) = &agg.delivery {
            prop_assert_eq!(delivery.delivery_fee, o.delivery_fee);
            prop_assert_eq!(
                delivery.courier_fee,
                round_cents(delivery.delivery_fee as f64 * 0.6)
            );
            let addr = &delivery.address;
            prop_assert!(addr.latitude >= -33.0 && addr.latitude <= -5.0);
            prop_assert!(addr.longitude >= -74.0 && addr.longitude <= -34.0);
        }

        // Guest checkout carries a display name, registered customers don't
        prop_assert_eq!(o.customer_id.is_none(), o.customer_name.is_some());
    }

    #[test]
    fn same_draws_same_order(seed in 1u64..10_000) {
        let catalog = small_catalog(7);
        let synth = OrderSynthesizer::default();
        let channel = catalog.channels[1];
        let ctx = OrderContext {
            timestamp: timestamp(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), 20, 15, 0),
            store_id: catalog.store_ids[0],
            channel: &channel,
            customer_id: Some(2),
        };

        let mut rng1 = RngManager::new(seed);
        let mut rng2 = RngManager::new(seed);
        prop_assert_eq!(
            synth.build(&catalog, ctx, &mut rng1),
            synth.build(&catalog, ctx, &mut rng2)
        );
    }
}
