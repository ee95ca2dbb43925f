//! Catalog & actor seeding
//!
//! Produces the static reference entities the order stream points at:
//! sub-brands, channels, payment types, categories, products, items, option
//! groups, stores and customers. Pure generation with no temporal logic;
//! every row goes through the sink and the returned ids are kept on
//! lightweight in-memory handles for sampling during order synthesis.
//!
//! Each phase commits on completion, so a failed later phase never loses
//! earlier reference data.

pub mod names;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{
    round_coord, Category, CategoryKind, Channel, ChannelType, Customer, Gender, Item,
    OptionGroup, PaymentType, Product, RegistrationOrigin, Store, SubBrand, BRAND_ID,
};
use crate::rng::RngManager;
use crate::sink::{SalesSink, SinkError};

/// Fixed sub-brand names
const SUB_BRANDS: &[&str] = &["Challenge Burger", "Challenge Pizza", "Challenge Sushi"];

/// Channel definitions: name, type, sampling weight, commission percent
const CHANNEL_DEFS: &[(&str, ChannelType, f64, f64)] = &[
    ("Presencial", ChannelType::Physical, 0.40, 0.0),
    ("iFood", ChannelType::Delivery, 0.30, 27.0),
    ("Rappi", ChannelType::Delivery, 0.15, 25.0),
    ("Uber Eats", ChannelType::Delivery, 0.08, 30.0),
    ("WhatsApp", ChannelType::Delivery, 0.05, 0.0),
    ("App Próprio", ChannelType::Delivery, 0.02, 0.0),
];

const PAYMENT_TYPE_NAMES: &[&str] = &[
    "Dinheiro",
    "Cartão de Crédito",
    "Cartão de Débito",
    "PIX",
    "Vale Refeição",
    "Vale Alimentação",
];

/// Product categories with their name prefixes
const PRODUCT_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Burgers",
        &["X-Burger", "Cheeseburger", "Bacon Burger", "Double Burger", "Veggie Burger"],
    ),
    (
        "Pizzas",
        &["Pizza Margherita", "Pizza Calabresa", "Pizza 4 Queijos", "Pizza Portuguesa", "Pizza Frango"],
    ),
    (
        "Pratos",
        &["Prato Executivo", "Filé", "Frango Grelhado", "Lasanha", "Risoto"],
    ),
    (
        "Combos",
        &["Combo Família", "Combo Individual", "Combo Duplo", "Combo Kids", "Combo Executivo"],
    ),
    (
        "Sobremesas",
        &["Brownie", "Pudim", "Sorvete", "Petit Gateau", "Torta"],
    ),
    (
        "Bebidas",
        &["Refrigerante", "Suco", "Água", "Cerveja", "Vinho"],
    ),
];

/// Item categories with their fixed item names
const ITEM_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Complementos",
        &[
            "Bacon", "Queijo Cheddar", "Queijo Mussarela", "Ovo", "Alface", "Tomate", "Cebola",
            "Picles", "Jalapeño", "Cogumelos", "Abacaxi", "Catupiry",
        ],
    ),
    (
        "Molhos",
        &[
            "Molho Barbecue", "Molho Mostarda", "Molho Especial", "Maionese", "Ketchup",
            "Molho Picante", "Molho Ranch", "Molho Tártaro",
        ],
    ),
    (
        "Adicionais",
        &[
            "Batata Frita", "Onion Rings", "Nuggets", "Salada", "Arroz", "Feijão", "Farofa",
            "Vinagrete",
        ],
    ),
];

const OPTION_GROUP_NAMES: &[&str] = &["Adicionais", "Remover", "Ponto da Carne", "Tamanho"];

/// Size suffix cycle for product names
const SIZE_SUFFIXES: &[&str] = &["P", "M", "G"];

/// How many entities of each kind to seed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedCounts {
    pub stores: usize,
    pub products: usize,
    pub items: usize,
    pub customers: usize,
}

impl Default for SeedCounts {
    fn default() -> Self {
        Self {
            stores: 50,
            products: 500,
            items: 200,
            customers: 10_000,
        }
    }
}

/// Sampling handle for a persisted channel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelRef {
    pub id: u64,
    pub channel_type: ChannelType,
    pub weight: f64,
}

/// Sampling handle for a persisted product
///
/// `popularity` is Beta(2, 5)-distributed; it drives selection frequency,
/// not price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductRef {
    pub id: u64,
    /// Base price in cents
    pub base_price: i64,
    pub popularity: f64,
    pub has_customization: bool,
}

/// Sampling handle for a persisted customization item
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemRef {
    pub id: u64,
    /// Add-on price in cents
    pub price: i64,
}

/// All seeded reference data, as sampled by the demand loop and synthesizer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub sub_brand_ids: Vec<u64>,
    pub channels: Vec<ChannelRef>,
    pub payment_type_ids: Vec<u64>,
    pub option_group_ids: Vec<u64>,
    pub store_ids: Vec<u64>,
    pub products: Vec<ProductRef>,
    pub items: Vec<ItemRef>,
    pub customer_ids: Vec<u64>,
}

impl Catalog {
    /// Channel sampling weights, in channel order
    pub fn channel_weights(&self) -> Vec<f64> {
        self.channels.iter().map(|c| c.weight).collect()
    }

    /// Product sampling weights (popularity), in product order
    pub fn product_weights(&self) -> Vec<f64> {
        self.products.iter().map(|p| p.popularity).collect()
    }
}

/// Seed everything: base reference data, stores, catalog, customers.
///
/// `reference_date` anchors all backdated fields (store creation dates,
/// customer registrations, birth dates); using the run's start date keeps
/// the dataset fully determined by seed + config.
pub fn seed_all(
    sink: &mut dyn SalesSink,
    rng: &mut RngManager,
    counts: &SeedCounts,
    reference_date: NaiveDate,
) -> Result<Catalog, SinkError> {
    let mut catalog = Catalog::default();
    seed_base(sink, rng, &mut catalog)?;
    seed_stores(sink, rng, &mut catalog, counts.stores, reference_date)?;
    seed_catalog_entries(sink, rng, &mut catalog, counts.products, counts.items)?;
    seed_customers(sink, rng, &mut catalog, counts.customers, reference_date)?;
    Ok(catalog)
}

/// Sub-brands, channels, payment types and option groups
fn seed_base(
    sink: &mut dyn SalesSink,
    _rng: &mut RngManager,
    catalog: &mut Catalog,
) -> Result<(), SinkError> {
    for name in SUB_BRANDS {
        let id = sink.insert_sub_brand(&SubBrand {
            brand_id: BRAND_ID,
            name: name.to_string(),
        })?;
        catalog.sub_brand_ids.push(id);
    }

    for (name, channel_type, weight, commission_pct) in CHANNEL_DEFS {
        let id = sink.insert_channel(&Channel {
            brand_id: BRAND_ID,
            name: name.to_string(),
            description: format!("Canal {}", name),
            channel_type: *channel_type,
            weight: *weight,
            commission_pct: *commission_pct,
        })?;
        catalog.channels.push(ChannelRef {
            id,
            channel_type: *channel_type,
            weight: *weight,
        });
    }

    for description in PAYMENT_TYPE_NAMES {
        let id = sink.insert_payment_type(&PaymentType {
            brand_id: BRAND_ID,
            description: description.to_string(),
        })?;
        catalog.payment_type_ids.push(id);
    }

    for name in OPTION_GROUP_NAMES {
        let id = sink.insert_option_group(&OptionGroup {
            brand_id: BRAND_ID,
            name: name.to_string(),
        })?;
        catalog.option_group_ids.push(id);
    }

    sink.commit()
}

/// Store locations, clustered around the São Paulo metro area
fn seed_stores(
    sink: &mut dyn SalesSink,
    rng: &mut RngManager,
    catalog: &mut Catalog,
    num_stores: usize,
    reference_date: NaiveDate,
) -> Result<(), SinkError> {
    // City pool drawn once per run so stores cluster in a few cities
    let city_pool: Vec<String> = (0..20).map(|_| names::city(rng)).collect();

    for _ in 0..num_stores {
        let city = rng.choice(&city_pool).clone();
        let sub_brand_id = *rng.choice(&catalog.sub_brand_ids);
        let is_active = rng.bernoulli(0.9);
        let is_own = rng.bernoulli(0.3);

        let latitude = round_coord(-23.5 + rng.uniform(-2.0, 2.0));
        let longitude = round_coord(-46.6 + rng.uniform(-3.0, 3.0));

        let id = sink.insert_store(&Store {
            brand_id: BRAND_ID,
            sub_brand_id,
            name: names::store_name(rng, &city),
            city,
            state: names::state_code(rng),
            district: names::neighborhood(rng),
            street: names::street(rng),
            number: rng.range(10, 10_000) as u32,
            latitude,
            longitude,
            is_active,
            is_own,
            // Opened between two years and six months before the run
            creation_date: reference_date - Duration::days(rng.range_inclusive(180, 720)),
        })?;
        catalog.store_ids.push(id);
    }

    sink.commit()
}

/// Product and item categories, products with sampling attributes, items
fn seed_catalog_entries(
    sink: &mut dyn SalesSink,
    rng: &mut RngManager,
    catalog: &mut Catalog,
    num_products: usize,
    num_items: usize,
) -> Result<(), SinkError> {
    let per_category = num_products / PRODUCT_CATEGORIES.len();

    for (cat_name, prefixes) in PRODUCT_CATEGORIES {
        let category_id = sink.insert_category(&Category {
            brand_id: BRAND_ID,
            name: cat_name.to_string(),
            kind: CategoryKind::Product,
        })?;

        for i in 0..per_category {
            let prefix = rng.choice(prefixes);
            let size = SIZE_SUFFIXES[i % SIZE_SUFFIXES.len()];
            let name = format!("{} {} #{:03}", prefix, size, i + 1);

            let id = sink.insert_product(&Product {
                brand_id: BRAND_ID,
                sub_brand_id: *rng.choice(&catalog.sub_brand_ids),
                category_id,
                name,
                pos_uuid: Uuid::from_u64_pair(rng.next(), rng.next()),
            })?;

            catalog.products.push(ProductRef {
                id,
                base_price: rng.range(1500, 12_001),
                popularity: rng.beta(2.0, 5.0),
                has_customization: rng.bernoulli(0.6),
            });
        }
    }

    // Item names come from fixed per-category lists; the requested count
    // caps how far into the lists we go
    let mut remaining = num_items;
    for (cat_name, item_names) in ITEM_CATEGORIES {
        if remaining == 0 {
            break;
        }

        let category_id = sink.insert_category(&Category {
            brand_id: BRAND_ID,
            name: cat_name.to_string(),
            kind: CategoryKind::Item,
        })?;

        for item_name in item_names.iter().take(remaining) {
            let id = sink.insert_item(&Item {
                brand_id: BRAND_ID,
                sub_brand_id: *rng.choice(&catalog.sub_brand_ids),
                category_id,
                name: item_name.to_string(),
                pos_uuid: Uuid::from_u64_pair(rng.next(), rng.next()),
            })?;

            catalog.items.push(ItemRef {
                id,
                price: rng.range(200, 1501),
            });
            remaining -= 1;
        }
    }

    sink.commit()
}

/// Registered customers with demographic and registration fields
fn seed_customers(
    sink: &mut dyn SalesSink,
    rng: &mut RngManager,
    catalog: &mut Catalog,
    num_customers: usize,
    reference_date: NaiveDate,
) -> Result<(), SinkError> {
    const GENDERS: &[Gender] = &[Gender::M, Gender::F, Gender::NB, Gender::O];
    const ORIGINS: &[RegistrationOrigin] = &[
        RegistrationOrigin::QrCode,
        RegistrationOrigin::Link,
        RegistrationOrigin::Balcony,
        RegistrationOrigin::Pos,
    ];

    for _ in 0..num_customers {
        let name = names::full_name(rng);
        let email = names::email(rng, &name);

        let registered_on = reference_date - Duration::days(rng.range_inclusive(0, 720));
        let created_at = registered_on
            .and_hms_opt(
                rng.range(0, 24) as u32,
                rng.range(0, 60) as u32,
                rng.range(0, 60) as u32,
            )
            .expect("clock draw out of range");

        let id = sink.insert_customer(&Customer {
            name,
            email,
            phone: names::phone(rng),
            cpf: names::cpf(rng),
            // Ages 18 to 75
            birth_date: reference_date - Duration::days(rng.range_inclusive(18 * 365, 75 * 365)),
            gender: *rng.choice(GENDERS),
            agree_terms: rng.bernoulli(0.5),
            receive_promotions: rng.bernoulli(1.0 / 3.0),
            registration_origin: *rng.choice(ORIGINS),
            created_at,
        })?;
        catalog.customer_ids.push(id);
    }

    sink.commit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    fn reference_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn small_counts() -> SeedCounts {
        SeedCounts {
            stores: 5,
            products: 18,
            items: 10,
            customers: 20,
        }
    }

    #[test]
    fn test_seed_all_counts() {
        let mut sink = MemorySink::new();
        let mut rng = RngManager::new(42);
        let catalog = seed_all(&mut sink, &mut rng, &small_counts(), reference_date()).unwrap();

        assert_eq!(catalog.sub_brand_ids.len(), 3);
        assert_eq!(catalog.channels.len(), 6);
        assert_eq!(catalog.payment_type_ids.len(), 6);
        assert_eq!(catalog.option_group_ids.len(), 4);
        assert_eq!(catalog.store_ids.len(), 5);
        assert_eq!(catalog.products.len(), 18);
        assert_eq!(catalog.items.len(), 10);
        assert_eq!(catalog.customer_ids.len(), 20);

        assert_eq!(sink.stores.len(), 5);
        assert_eq!(sink.products.len(), 18);
        assert_eq!(sink.items.len(), 10);
        assert_eq!(sink.customers.len(), 20);
        // 6 product categories + as many item categories as the cap reached
        assert!(sink.categories.len() >= 7);
    }

    #[test]
    fn test_product_attributes_in_range() {
        let mut sink = MemorySink::new();
        let mut rng = RngManager::new(42);
        let catalog = seed_all(&mut sink, &mut rng, &small_counts(), reference_date()).unwrap();

        for product in &catalog.products {
            assert!((1500..=12_000).contains(&product.base_price));
            assert!(product.popularity >= 0.0 && product.popularity < 1.0);
        }
        for item in &catalog.items {
            assert!((200..=1500).contains(&item.price));
        }
    }

    #[test]
    fn test_item_count_capped_by_fixed_lists() {
        let mut sink = MemorySink::new();
        let mut rng = RngManager::new(42);
        let mut counts = small_counts();
        counts.items = 200;
        let catalog = seed_all(&mut sink, &mut rng, &counts, reference_date()).unwrap();

        let total_names: usize = ITEM_CATEGORIES.iter().map(|(_, names)| names.len()).sum();
        assert_eq!(catalog.items.len(), total_names);
    }

    #[test]
    fn test_seeding_is_deterministic() {
        let run = || {
            let mut sink = MemorySink::new();
            let mut rng = RngManager::new(99);
            seed_all(&mut sink, &mut rng, &small_counts(), reference_date()).unwrap()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_channel_weights_match_definitions() {
        let mut sink = MemorySink::new();
        let mut rng = RngManager::new(42);
        let catalog = seed_all(&mut sink, &mut rng, &small_counts(), reference_date()).unwrap();

        let weights = catalog.channel_weights();
        assert_eq!(weights, vec![0.40, 0.30, 0.15, 0.08, 0.05, 0.02]);
    }
}
