//! Phone number providers.

use crate::{digits, pick};
use faker_core::{ProviderContext, ProviderResult, Value};

const TOLL_FREE_PREFIXES: &[&str] = &["800", "888", "877", "866", "855"];

/// `phone_number`: `XXX-XXX-XXXX`.
pub fn phone_number(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    let rng = ctx.rng();
    Ok(Value::String(format!(
        "{}-{}-{}",
        digits(rng, 3),
        digits(rng, 3),
        digits(rng, 4)
    )))
}

/// `toll_free_number`: `(800) XXX-XXXX`.
pub fn toll_free_number(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    let rng = ctx.rng();
    let prefix = pick(rng, TOLL_FREE_PREFIXES);
    Ok(Value::String(format!(
        "({prefix}) {}-{}",
        digits(rng, 3),
        digits(rng, 4)
    )))
}

/// `e_164_phone_number`: `+` followed by 11 digits.
pub fn e164_phone_number(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    Ok(Value::String(format!("+1{}", digits(ctx.rng(), 10))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use faker_core::Shape;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_phone_formats() {
        let mut rng = StdRng::seed_from_u64(42);
        let shape = Shape::String;
        let mut ctx = ProviderContext::new(&shape, &mut rng);

        let Value::String(phone) = phone_number(&mut ctx).unwrap() else {
            panic!("Expected string");
        };
        assert_eq!(phone.len(), 12);

        let Value::String(e164) = e164_phone_number(&mut ctx).unwrap() else {
            panic!("Expected string");
        };
        assert!(e164.starts_with("+1"));
        assert_eq!(e164.len(), 12);

        let Value::String(toll_free) = toll_free_number(&mut ctx).unwrap() else {
            panic!("Expected string");
        };
        assert!(toll_free.starts_with('('));
    }
}
