//! Geographic coordinate providers.

use faker_core::{ProviderContext, ProviderResult, Value};
use rand::Rng;

/// `lat`: latitude in `[-90, 90)`.
pub fn latitude(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    Ok(Value::Float64(ctx.rng().random_range(-90.0..90.0)))
}

/// `long`: longitude in `[-180, 180)`.
pub fn longitude(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    Ok(Value::Float64(ctx.rng().random_range(-180.0..180.0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use faker_core::Shape;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_coordinates_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let shape = Shape::Float64;
        let mut ctx = ProviderContext::new(&shape, &mut rng);

        for _ in 0..100 {
            let Value::Float64(lat) = latitude(&mut ctx).unwrap() else {
                panic!("Expected float");
            };
            let Value::Float64(long) = longitude(&mut ctx).unwrap() else {
                panic!("Expected float");
            };
            assert!((-90.0..90.0).contains(&lat));
            assert!((-180.0..180.0).contains(&long));
        }
    }
}
