//! Currency and amount providers.

use crate::pick;
use faker_core::{ProviderContext, ProviderResult, Value};
use rand::Rng;

const CURRENCIES: &[&str] = &[
    "USD", "EUR", "GBP", "JPY", "CHF", "CAD", "AUD", "CNY", "SEK", "NZD", "MXN", "SGD",
];

fn random_amount<R: Rng>(rng: &mut R) -> f64 {
    let cents: u32 = rng.random_range(0..10_000_000);
    f64::from(cents) / 100.0
}

/// `currency`: ISO 4217 code.
pub fn currency(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    Ok(Value::String(pick(ctx.rng(), CURRENCIES).to_string()))
}

/// `amount`: non-negative value with two decimal places.
pub fn amount(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    Ok(Value::Float64(random_amount(ctx.rng())))
}

/// `amount_with_currency`: e.g. `USD 49.95`.
pub fn amount_with_currency(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    let rng = ctx.rng();
    let code = pick(rng, CURRENCIES);
    Ok(Value::String(format!("{code} {:.2}", random_amount(rng))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use faker_core::Shape;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_amount_with_currency() {
        let mut rng = StdRng::seed_from_u64(42);
        let shape = Shape::String;
        let mut ctx = ProviderContext::new(&shape, &mut rng);

        let Value::String(s) = amount_with_currency(&mut ctx).unwrap() else {
            panic!("Expected string");
        };
        let (code, number) = s.split_once(' ').unwrap();
        assert!(CURRENCIES.contains(&code));
        assert!(number.parse::<f64>().unwrap() >= 0.0);
    }
}
