//! Internet providers: addresses, hosts and credentials.

use crate::{lorem, person, pick};
use faker_core::{ProviderContext, ProviderResult, Value};
use rand::Rng;

const TLDS: &[&str] = &["com", "net", "org", "io", "info", "biz", "dev"];
const PASSWORD_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

fn user_handle<R: Rng>(rng: &mut R) -> String {
    let first = pick(rng, person::FIRST_NAMES).to_lowercase();
    format!("{first}{}", rng.random_range(1..1000))
}

fn host<R: Rng>(rng: &mut R) -> String {
    format!("{}.{}", pick(rng, lorem::WORDS), pick(rng, TLDS))
}

/// `email`: `handle@word.tld`.
pub fn email(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    let rng = ctx.rng();
    let handle = user_handle(rng);
    Ok(Value::String(format!("{handle}@{}", host(rng))))
}

/// `username`: lower-case first name followed by a number.
pub fn username(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    Ok(Value::String(user_handle(ctx.rng())))
}

/// `domain_name`: `word.tld`.
pub fn domain_name(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    Ok(Value::String(host(ctx.rng())))
}

/// `url`: `https://www.word.tld/word`.
pub fn url(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    let rng = ctx.rng();
    let domain = host(rng);
    Ok(Value::String(format!(
        "https://www.{domain}/{}",
        pick(rng, lorem::WORDS)
    )))
}

/// `ipv4`: dotted quad.
pub fn ipv4(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    let octets: [u8; 4] = ctx.rng().random();
    Ok(Value::String(
        std::net::Ipv4Addr::from(octets).to_string(),
    ))
}

/// `ipv6`: eight colon-separated hex groups.
pub fn ipv6(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    let rng = ctx.rng();
    let groups: Vec<String> = (0..8)
        .map(|_| format!("{:x}", rng.random::<u16>()))
        .collect();
    Ok(Value::String(groups.join(":")))
}

/// `mac_address`: six colon-separated hex bytes.
pub fn mac_address(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    let bytes: [u8; 6] = ctx.rng().random();
    let parts: Vec<String> = bytes.iter().map(|b| format!("{b:02x}")).collect();
    Ok(Value::String(parts.join(":")))
}

/// `password`: 16 alphanumeric characters.
pub fn password(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    let rng = ctx.rng();
    let password: String = (0..16)
        .map(|_| char::from(PASSWORD_CHARS[rng.random_range(0..PASSWORD_CHARS.len())]))
        .collect();
    Ok(Value::String(password))
}

#[cfg(test)]
mod tests {
    use super::*;
    use faker_core::Shape;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn run(provider: crate::ProviderFn) -> String {
        let mut rng = StdRng::seed_from_u64(42);
        let shape = Shape::String;
        let mut ctx = ProviderContext::new(&shape, &mut rng);
        match provider(&mut ctx).unwrap() {
            Value::String(s) => s,
            other => panic!("Expected string, got {other:?}"),
        }
    }

    #[test]
    fn test_email_shape() {
        let email = run(email);
        let (user, domain) = email.split_once('@').expect("email has an @");
        assert!(!user.is_empty());
        assert!(domain.contains('.'));
    }

    #[test]
    fn test_ipv4_parses() {
        let ip = run(ipv4);
        assert!(ip.parse::<std::net::Ipv4Addr>().is_ok());
    }

    #[test]
    fn test_ipv6_parses() {
        let ip = run(ipv6);
        assert!(ip.parse::<std::net::Ipv6Addr>().is_ok());
    }

    #[test]
    fn test_mac_address_format() {
        let mac = run(mac_address);
        assert_eq!(mac.len(), 17);
        assert_eq!(mac.matches(':').count(), 5);
    }

    #[test]
    fn test_password_alphabet() {
        let password = run(password);
        assert_eq!(password.len(), 16);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
