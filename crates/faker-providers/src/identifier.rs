//! UUID providers.
//!
//! UUIDs are built from the session RNG rather than the OS, so a seeded
//! session produces the same identifiers on every run.

use faker_core::{ProviderContext, ProviderResult, Value};
use rand::Rng;
use uuid::Uuid;

fn random_uuid<R: Rng>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);
    // Set version (4) and variant (RFC 4122)
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    Uuid::from_bytes(bytes)
}

/// `uuid_digit`: 32 hex digits without hyphens.
pub fn uuid_digit(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    Ok(Value::String(random_uuid(ctx.rng()).simple().to_string()))
}

/// `uuid_hyphenated`: canonical 8-4-4-4-12 form.
pub fn uuid_hyphenated(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    Ok(Value::String(random_uuid(ctx.rng()).hyphenated().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use faker_core::Shape;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uuid_forms() {
        let mut rng = StdRng::seed_from_u64(42);
        let shape = Shape::String;
        let mut ctx = ProviderContext::new(&shape, &mut rng);

        let Value::String(digit) = uuid_digit(&mut ctx).unwrap() else {
            panic!("Expected string");
        };
        assert_eq!(digit.len(), 32);
        assert!(!digit.contains('-'));

        let Value::String(hyphenated) = uuid_hyphenated(&mut ctx).unwrap() else {
            panic!("Expected string");
        };
        let parsed = Uuid::parse_str(&hyphenated).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn test_seeded_uuid_is_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(random_uuid(&mut a), random_uuid(&mut b));
    }
}
