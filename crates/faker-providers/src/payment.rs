//! Credit card providers.

use crate::digits;
use faker_core::{ProviderContext, ProviderResult, Value};
use rand::Rng;

/// Card network, its number prefix and total length.
const NETWORKS: &[(&str, &str, usize)] = &[
    ("VISA", "4", 16),
    ("MasterCard", "51", 16),
    ("American Express", "34", 15),
    ("Discover", "6011", 16),
];

/// Luhn check digit for the given digit string.
fn luhn_check_digit(payload: &str) -> u32 {
    let sum: u32 = payload
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, d)| {
            if i % 2 == 0 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();
    (10 - sum % 10) % 10
}

/// `cc_type`: card network name.
pub fn cc_type(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    let (name, _, _) = NETWORKS[ctx.rng().random_range(0..NETWORKS.len())];
    Ok(Value::String(name.to_string()))
}

/// `cc_number`: Luhn-valid card number for a random network.
pub fn cc_number(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    let rng = ctx.rng();
    let (_, prefix, len) = NETWORKS[rng.random_range(0..NETWORKS.len())];
    let mut number = prefix.to_string();
    number.push_str(&digits(rng, len - prefix.len() - 1));
    let check = luhn_check_digit(&number);
    number.push_str(&check.to_string());
    Ok(Value::String(number))
}
