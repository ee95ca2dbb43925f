//! Synthetic identity and address generation
//!
//! Fixed Brazilian-flavored word tables plus combinators over the seeded
//! RNG. Every generated person, store and address in the dataset comes from
//! these tables, so a seed fully determines all text content.

use crate::rng::RngManager;

pub const FIRST_NAMES: &[&str] = &[
    "Ana", "Beatriz", "Bruno", "Camila", "Carlos", "Daniela", "Diego", "Eduarda", "Felipe",
    "Fernanda", "Gabriel", "Gustavo", "Helena", "Igor", "Isabela", "João", "Juliana", "Larissa",
    "Leonardo", "Letícia", "Lucas", "Mariana", "Mateus", "Patrícia", "Paulo", "Rafael", "Renata",
    "Rodrigo", "Sofia", "Thiago", "Vanessa", "Vinícius",
];

pub const LAST_NAMES: &[&str] = &[
    "Almeida", "Alves", "Araújo", "Barbosa", "Carvalho", "Castro", "Costa", "Dias", "Ferreira",
    "Gomes", "Lima", "Martins", "Melo", "Monteiro", "Moreira", "Nascimento", "Oliveira",
    "Pereira", "Ribeiro", "Rocha", "Rodrigues", "Santos", "Silva", "Souza",
];

pub const CITIES: &[&str] = &[
    "São Paulo", "Campinas", "Santos", "Guarulhos", "Osasco", "Sorocaba", "Ribeirão Preto",
    "São José dos Campos", "Jundiaí", "Piracicaba", "Bauru", "Franca", "Limeira", "Barueri",
    "Mogi das Cruzes", "Santo André", "São Bernardo do Campo", "Diadema", "Taubaté", "Americana",
];

pub const STREET_NAMES: &[&str] = &[
    "Rua das Flores", "Avenida Paulista", "Rua XV de Novembro", "Avenida Brasil",
    "Rua Sete de Setembro", "Rua Barão do Rio Branco", "Avenida Getúlio Vargas",
    "Rua Tiradentes", "Rua Dom Pedro II", "Avenida Santos Dumont", "Rua São João",
    "Rua Marechal Deodoro", "Avenida Independência", "Rua Coronel Oliveira",
    "Travessa das Acácias", "Rua Visconde de Mauá",
];

pub const NEIGHBORHOODS: &[&str] = &[
    "Centro", "Jardim Paulista", "Vila Mariana", "Bela Vista", "Moema", "Pinheiros",
    "Santa Cecília", "Vila Madalena", "Tatuapé", "Ipiranga", "Lapa", "Butantã",
];

pub const STATE_CODES: &[&str] = &["SP", "RJ", "MG", "PR", "SC", "RS", "BA", "PE", "GO", "ES"];

pub const EMAIL_DOMAINS: &[&str] = &["gmail.com", "hotmail.com", "outlook.com", "yahoo.com.br"];

const STORE_DESCRIPTORS: &[&str] = &[
    "Restaurante", "Cantina", "Cozinha", "Casa", "Empório", "Bistrô", "Grill", "Espaço",
];

/// Full display name, e.g. "Mariana Souza"
pub fn full_name(rng: &mut RngManager) -> String {
    format!(
        "{} {}",
        rng.choice(FIRST_NAMES),
        rng.choice(LAST_NAMES)
    )
}

/// Email derived from a display name, e.g. "mariana.souza42@gmail.com"
pub fn email(rng: &mut RngManager, name: &str) -> String {
    let local: String = name
        .to_lowercase()
        .chars()
        .map(|c| match c {
            ' ' => '.',
            'á' | 'â' | 'ã' => 'a',
            'é' | 'ê' => 'e',
            'í' => 'i',
            'ó' | 'ô' | 'õ' => 'o',
            'ú' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect();
    let suffix = rng.range(1, 1000);
    format!("{}{}@{}", local, suffix, rng.choice(EMAIL_DOMAINS))
}

/// Mobile phone in the national format, e.g. "(11) 91234-5678"
pub fn phone(rng: &mut RngManager) -> String {
    format!(
        "({:02}) 9{:04}-{:04}",
        rng.range(11, 100),
        rng.range(0, 10_000),
        rng.range(0, 10_000)
    )
}

/// CPF-shaped document number, e.g. "123.456.789-09"
///
/// Digits are random; no check-digit arithmetic, this is display data only.
pub fn cpf(rng: &mut RngManager) -> String {
    format!(
        "{:03}.{:03}.{:03}-{:02}",
        rng.range(0, 1000),
        rng.range(0, 1000),
        rng.range(0, 1000),
        rng.range(0, 100)
    )
}

/// Postal code, e.g. "04538-132"
pub fn postal_code(rng: &mut RngManager) -> String {
    format!("{:05}-{:03}", rng.range(0, 100_000), rng.range(0, 1000))
}

pub fn street(rng: &mut RngManager) -> String {
    rng.choice(STREET_NAMES).to_string()
}

pub fn city(rng: &mut RngManager) -> String {
    rng.choice(CITIES).to_string()
}

pub fn neighborhood(rng: &mut RngManager) -> String {
    rng.choice(NEIGHBORHOODS).to_string()
}

pub fn state_code(rng: &mut RngManager) -> String {
    rng.choice(STATE_CODES).to_string()
}

/// Store display name, e.g. "Cantina Oliveira - Campinas"
pub fn store_name(rng: &mut RngManager, city: &str) -> String {
    format!(
        "{} {} - {}",
        rng.choice(STORE_DESCRIPTORS),
        rng.choice(LAST_NAMES),
        city
    )
}
