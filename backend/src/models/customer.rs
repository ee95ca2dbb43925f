//! Customer model
//!
//! Registered customers. Orders reference zero or one customer; guest
//! checkout stores a synthetic display name on the order instead.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Self-declared gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    M,
    F,
    NB,
    O,
}

/// Where the customer registration came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationOrigin {
    QrCode,
    Link,
    Balcony,
    Pos,
}

/// Registered customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cpf: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub agree_terms: bool,
    pub receive_promotions: bool,
    pub registration_origin: RegistrationOrigin,
    pub created_at: NaiveDateTime,
}
