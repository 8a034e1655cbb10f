//! Word pools for synthetic names, addresses and products.

use rand::Rng;
use rand::distr::Alphanumeric;
use rand::seq::IndexedRandom;

pub const FIRST_NAMES: &[&str] = &[
    "Olivia", "Liam", "Emma", "Noah", "Ava", "Elijah", "Sophia", "James", "Isabella", "Lucas",
    "Mia", "Mateo", "Amelia", "Ethan", "Harper", "Aiden", "Evelyn", "Leo", "Aria", "Kai",
    "Chloe", "Omar", "Priya", "Hiro", "Zara", "Diego", "Fatima", "Jonas", "Ingrid", "Tariq",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Garcia", "Brown", "Miller", "Davis", "Rodriguez", "Martinez",
    "Hernandez", "Lopez", "Wilson", "Anderson", "Thomas", "Taylor", "Moore", "Jackson",
    "Nguyen", "Kim", "Patel", "O'Brien", "Schmidt", "Rossi", "Tanaka", "Okafor", "Silva",
    "Novak", "Larsen", "Haddad", "Kowalski", "Murphy",
];

pub const EMAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "icloud.com",
    "proton.me",
];

pub const STREET_NAMES: &[&str] = &[
    "Maple", "Oak", "Cedar", "Pine", "Elm", "Washington", "Lake", "Hill", "Park", "Sunset",
    "River", "Highland", "Church", "Mill", "Spring",
];

pub const STREET_SUFFIXES: &[&str] = &["St.", "Ave.", "Blvd.", "Rd.", "Ln.", "Dr.", "Way"];

/// `(city, state)` pairs.
pub const CITIES: &[(&str, &str)] = &[
    ("Portland", "OR"),
    ("Austin", "TX"),
    ("Denver", "CO"),
    ("Columbus", "OH"),
    ("Raleigh", "NC"),
    ("Madison", "WI"),
    ("Boise", "ID"),
    ("Tucson", "AZ"),
    ("Albany", "NY"),
    ("Savannah", "GA"),
];

pub const PRODUCT_ADJECTIVES: &[&str] = &[
    "Ergonomic", "Handcrafted", "Rustic", "Sleek", "Practical", "Refined", "Gorgeous",
    "Intelligent", "Licensed", "Recycled", "Tasty", "Luxurious", "Modern", "Small",
];

pub const PRODUCT_MATERIALS: &[&str] = &[
    "Cotton", "Steel", "Wooden", "Granite", "Bamboo", "Leather", "Plastic", "Rubber", "Frozen",
    "Fresh", "Bronze", "Concrete", "Silk",
];

pub const PRODUCT_NOUNS: &[&str] = &[
    "Chair", "Shoes", "Gloves", "Table", "Hat", "Keyboard", "Towels", "Bike", "Soap", "Pizza",
    "Computer", "Shirt", "Lamp", "Wallet", "Backpack",
];

pub const PRODUCT_CATEGORIES: &[&str] = &[
    "Apparel",
    "Accessories",
    "Footwear",
    "Electronics",
    "Home",
    "Outdoors",
];

pub const DISCOUNT_PREFIXES: &[&str] = &[
    "SAVE", "SUMMER", "SPECIAL", "NEW", "WELCOME", "FLASH", "HOLIDAY",
];

/// Pick one entry of a non-empty pool.
pub fn pick<'a, R: Rng + ?Sized>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool.choose(rng).copied().unwrap_or_default()
}

/// A random `First Last` pair.
pub fn person_name<R: Rng + ?Sized>(rng: &mut R) -> (&'static str, &'static str) {
    (pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
}

/// Three-part commerce product name, e.g. "Rustic Bamboo Lamp".
pub fn product_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{} {} {}",
        pick(rng, PRODUCT_ADJECTIVES),
        pick(rng, PRODUCT_MATERIALS),
        pick(rng, PRODUCT_NOUNS)
    )
}

/// Full street address, e.g. "4127 Cedar Ave. Apt. 12, Denver, CO 80211".
pub fn street_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    let number = rng.random_range(10..10_000);
    let street = pick(rng, STREET_NAMES);
    let suffix = pick(rng, STREET_SUFFIXES);
    let (city, state) = CITIES.choose(rng).copied().unwrap_or(("Springfield", "IL"));
    let zip = rng.random_range(10_000..100_000);

    if rng.random_bool(0.3) {
        let unit = rng.random_range(1..400);
        format!("{number} {street} {suffix} Apt. {unit}, {city}, {state} {zip}")
    } else {
        format!("{number} {street} {suffix}, {city}, {state} {zip}")
    }
}

/// Upper-case alphanumeric code of `len` characters.
pub fn upper_alphanumeric<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(rng.sample(Alphanumeric)).to_ascii_uppercase())
        .collect()
}

/// A UUID built from the generator's own randomness, so seeded runs repeat.
pub fn uuid<R: Rng + ?Sized>(rng: &mut R) -> uuid::Uuid {
    let mut bytes = [0_u8; 16];
    rng.fill(&mut bytes);
    uuid::Builder::from_random_bytes(bytes).into_uuid()
}

/// Avatar URL derived from a stable identifier.
pub fn avatar_url(seed: &str) -> String {
    format!("https://i.pravatar.cc/150?u={seed}")
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_upper_alphanumeric() {
        let mut rng = StdRng::seed_from_u64(1);
        let code = upper_alphanumeric(&mut rng, 10);
        assert_eq!(code.len(), 10);
        assert!(code.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_uuid_is_v4() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(uuid(&mut rng).get_version_num(), 4);
    }

    #[test]
    fn test_product_name_has_three_words() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(product_name(&mut rng).split(' ').count(), 3);
    }
}
