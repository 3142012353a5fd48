//! Built-in providers for the fixture-faker framework.
//!
//! Every provider here is a plain function satisfying the
//! [`Provider`](faker_core::Provider) contract. The generator pre-registers
//! the whole [`BUILTINS`] table under the names below, so a field annotated
//! with e.g. `email` or `uuid_hyphenated` resolves without any setup.
//!
//! # Providers
//!
//! - Internet: `email`, `username`, `domain_name`, `url`, `ipv4`, `ipv6`,
//!   `mac_address`, `password`
//! - Person: `first_name`, `first_name_male`, `first_name_female`,
//!   `last_name`, `name`, `title_male`, `title_female`
//! - Phone: `phone_number`, `toll_free_number`, `e_164_phone_number`
//! - Date/time: `unix_time`, `date`, `time`, `month_name`, `year`,
//!   `day_of_week`, `day_of_month`, `timestamp`, `century`, `timezone`,
//!   `time_period`
//! - Lorem: `word`, `sentence`, `paragraph`
//! - Price: `currency`, `amount`, `amount_with_currency`
//! - Payment: `cc_type`, `cc_number`
//! - Identifier: `uuid_digit`, `uuid_hyphenated`
//! - Address: `lat`, `long`

pub mod address;
pub mod datetime;
pub mod identifier;
pub mod internet;
pub mod lorem;
pub mod payment;
pub mod person;
pub mod phone;
pub mod price;

use faker_core::{ProviderContext, ProviderResult, Shape, Value};
use rand::Rng;

/// Function signature shared by all built-in providers.
pub type ProviderFn = fn(&mut ProviderContext<'_>) -> ProviderResult;

/// Name/function table of every built-in provider.
pub const BUILTINS: &[(&str, ProviderFn)] = &[
    ("email", internet::email),
    ("username", internet::username),
    ("domain_name", internet::domain_name),
    ("url", internet::url),
    ("ipv4", internet::ipv4),
    ("ipv6", internet::ipv6),
    ("mac_address", internet::mac_address),
    ("password", internet::password),
    ("first_name", person::first_name),
    ("first_name_male", person::first_name_male),
    ("first_name_female", person::first_name_female),
    ("last_name", person::last_name),
    ("name", person::name),
    ("title_male", person::title_male),
    ("title_female", person::title_female),
    ("phone_number", phone::phone_number),
    ("toll_free_number", phone::toll_free_number),
    ("e_164_phone_number", phone::e164_phone_number),
    ("unix_time", datetime::unix_time),
    ("date", datetime::date),
    ("time", datetime::time),
    ("month_name", datetime::month_name),
    ("year", datetime::year),
    ("day_of_week", datetime::day_of_week),
    ("day_of_month", datetime::day_of_month),
    ("timestamp", datetime::timestamp),
    ("century", datetime::century),
    ("timezone", datetime::timezone),
    ("time_period", datetime::time_period),
    ("word", lorem::word),
    ("sentence", lorem::sentence),
    ("paragraph", lorem::paragraph),
    ("currency", price::currency),
    ("amount", price::amount),
    ("amount_with_currency", price::amount_with_currency),
    ("cc_type", payment::cc_type),
    ("cc_number", payment::cc_number),
    ("uuid_digit", identifier::uuid_digit),
    ("uuid_hyphenated", identifier::uuid_hyphenated),
    ("lat", address::latitude),
    ("long", address::longitude),
];

/// Pick a random element from a non-empty pool.
pub(crate) fn pick<'a, R: Rng>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool[rng.random_range(0..pool.len())]
}

/// Random string of ASCII digits of the given length.
pub(crate) fn digits<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

/// Render an integer as text when the target field is a string.
pub(crate) fn integer_for(shape: &Shape, n: i64) -> Value {
    match shape {
        Shape::String => Value::String(n.to_string()),
        _ => Value::Int64(n),
    }
}
