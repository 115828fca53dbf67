//! Payment card providers.
//!
//! Card numbers carry a valid issuer prefix for a randomly chosen network and
//! a Luhn check digit.

use crate::random::{random_element, random_string_number};
use crate::registry::{ProviderError, ProviderResult};
use fakegen_core::{FakeType, FakeValue};
use rand::rngs::StdRng;

/// A card network, its issuer prefixes and its number length.
struct CardNetwork {
    name: &'static str,
    prefixes: &'static [&'static str],
    length: usize,
}

const NETWORKS: &[CardNetwork] = &[
    CardNetwork {
        name: "VISA",
        prefixes: &["4539", "4556", "4916", "4532", "4929", "4485", "4716"],
        length: 16,
    },
    CardNetwork {
        name: "MasterCard",
        prefixes: &["51", "52", "53", "54", "55"],
        length: 16,
    },
    CardNetwork {
        name: "American Express",
        prefixes: &["34", "37"],
        length: 15,
    },
    CardNetwork {
        name: "Discover",
        prefixes: &["6011"],
        length: 16,
    },
    CardNetwork {
        name: "JCB",
        prefixes: &["3528", "3589"],
        length: 16,
    },
    CardNetwork {
        name: "Diners Club",
        prefixes: &["300", "301", "302", "303", "36", "38"],
        length: 14,
    },
];

fn random_network(rng: &mut StdRng) -> Result<&'static CardNetwork, ProviderError> {
    random_element(rng, NETWORKS).ok_or_else(|| ProviderError::new("no card networks"))
}

pub fn cc_type(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    let network = random_network(rng)?;
    Ok(FakeValue::String(network.name.to_string()))
}

pub fn cc_number(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    let network = random_network(rng)?;
    let prefix = random_element(rng, network.prefixes)
        .ok_or_else(|| ProviderError::new(format!("{} has no prefixes", network.name)))?;

    let mut number = String::with_capacity(network.length);
    number.push_str(prefix);
    number.push_str(&random_string_number(rng, network.length - prefix.len() - 1));
    number.push(luhn_check_digit(&number));
    Ok(FakeValue::String(number))
}

/// Check digit that makes `payload` followed by it pass the Luhn test.
fn luhn_check_digit(payload: &str) -> char {
    let sum: u32 = payload
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let digit = u32::from(b - b'0');
            if i % 2 == 0 {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                digit
            }
        })
        .sum();
    let check = (10 - sum % 10) % 10;
    char::from(b'0' + check as u8)
}
