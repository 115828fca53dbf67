//! Network and account identity providers.

use crate::random::{random_element, random_string};
use crate::registry::ProviderResult;
use fake::faker::internet::en::{
    DomainSuffix, IPv4, IPv6, MACAddress, Password, SafeEmail, Username,
};
use fake::faker::lorem::en::Word;
use fake::Fake;
use fakegen_core::{FakeType, FakeValue};
use rand::rngs::StdRng;
use rand::Rng;

const URL_SCHEMES: &[&str] = &["http", "https"];

pub fn email(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    Ok(FakeValue::String(SafeEmail().fake_with_rng(rng)))
}

pub fn mac_address(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    Ok(FakeValue::String(MACAddress().fake_with_rng(rng)))
}

pub fn domain_name(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    Ok(FakeValue::String(random_domain(rng)))
}

pub fn url(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    let scheme = random_element(rng, URL_SCHEMES).copied().unwrap_or("http");
    let host = if rng.gen_bool(0.5) {
        format!("www.{}", random_domain(rng))
    } else {
        random_domain(rng)
    };

    let url = if rng.gen_bool(0.5) {
        let path: String = Username().fake_with_rng(rng);
        format!("{scheme}://{host}/{path}")
    } else {
        format!("{scheme}://{host}/")
    };
    Ok(FakeValue::String(url))
}

pub fn username(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    Ok(FakeValue::String(Username().fake_with_rng(rng)))
}

pub fn ipv4(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    Ok(FakeValue::String(IPv4().fake_with_rng(rng)))
}

pub fn ipv6(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    Ok(FakeValue::String(IPv6().fake_with_rng(rng)))
}

pub fn password(_: &FakeType, rng: &mut StdRng) -> ProviderResult {
    Ok(FakeValue::String(Password(8..20).fake_with_rng(rng)))
}

fn random_domain(rng: &mut StdRng) -> String {
    let word: String = Word().fake_with_rng(rng);
    let label = if word.chars().all(|c| c.is_ascii_alphabetic()) {
        word.to_lowercase()
    } else {
        random_string(rng, 7).to_lowercase()
    };
    let suffix: String = DomainSuffix().fake_with_rng(rng);
    format!("{label}.{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::net::{Ipv4Addr, Ipv6Addr};

    fn text(value: ProviderResult) -> String {
        value.unwrap().as_str().unwrap().to_string()
    }

    #[test]
    fn test_email_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let email = text(email(&FakeType::String, &mut rng));
            let (local, domain) = email.split_once('@').unwrap();
            assert!(!local.is_empty());
            assert!(domain.contains('.'));
        }
    }

    #[test]
    fn test_ip_addresses_parse() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            text(ipv4(&FakeType::String, &mut rng))
                .parse::<Ipv4Addr>()
                .unwrap();
            text(ipv6(&FakeType::String, &mut rng))
                .parse::<Ipv6Addr>()
                .unwrap();
        }
    }

    #[test]
    fn test_mac_address_has_six_octets() {
        let mut rng = StdRng::seed_from_u64(42);
        let mac = text(mac_address(&FakeType::String, &mut rng));
        let octets: Vec<&str> = mac.split(':').collect();
        assert_eq!(octets.len(), 6);
        assert!(octets
            .iter()
            .all(|o| o.len() == 2 && o.chars().all(|c| c.is_ascii_hexdigit())));
    }

    #[test]
    fn test_url_and_domain() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let url = text(url(&FakeType::String, &mut rng));
            assert!(url.starts_with("http://") || url.starts_with("https://"));

            let domain = text(domain_name(&FakeType::String, &mut rng));
            let (label, suffix) = domain.split_once('.').unwrap();
            assert!(!label.is_empty());
            assert!(!suffix.is_empty());
        }
    }

    #[test]
    fn test_password_length() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let password = text(password(&FakeType::String, &mut rng));
            assert!((8..20).contains(&password.chars().count()));
        }
    }
}
