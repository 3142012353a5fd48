//! Date and time providers.
//!
//! All providers draw a random instant between the Unix epoch and the
//! current time and render a component of it.

use crate::{integer_for, pick};
use chrono::{DateTime, Datelike, Utc};
use faker_core::{ProviderContext, ProviderError, ProviderResult, Value};
use rand::Rng;

const CENTURIES: &[&str] = &[
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII", "XIII", "XIV",
    "XV", "XVI", "XVII", "XVIII", "XIX", "XX", "XXI",
];

const TIMEZONES: &[&str] = &[
    "Africa/Cairo",
    "America/New_York",
    "America/Sao_Paulo",
    "Asia/Kolkata",
    "Asia/Tokyo",
    "Australia/Sydney",
    "Europe/Berlin",
    "Europe/London",
    "Pacific/Auckland",
    "UTC",
];

const PERIODS: &[&str] = &["AM", "PM"];

fn random_instant<R: Rng>(rng: &mut R) -> Result<DateTime<Utc>, ProviderError> {
    let secs = rng.random_range(0..Utc::now().timestamp().max(1));
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| ProviderError::new(format!("timestamp {secs} out of range")))
}

/// `unix_time`: seconds since the epoch.
pub fn unix_time(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    let instant = random_instant(ctx.rng())?;
    Ok(integer_for(ctx.shape(), instant.timestamp()))
}

/// `date`: `YYYY-MM-DD`.
pub fn date(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    let instant = random_instant(ctx.rng())?;
    Ok(Value::String(instant.format("%Y-%m-%d").to_string()))
}

/// `time`: `HH:MM:SS`.
pub fn time(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    let instant = random_instant(ctx.rng())?;
    Ok(Value::String(instant.format("%H:%M:%S").to_string()))
}

/// `month_name`: full English month name.
pub fn month_name(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    let instant = random_instant(ctx.rng())?;
    Ok(Value::String(instant.format("%B").to_string()))
}

/// `year`
pub fn year(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    let instant = random_instant(ctx.rng())?;
    Ok(integer_for(ctx.shape(), i64::from(instant.year())))
}

/// `day_of_week`: full English weekday name.
pub fn day_of_week(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    let instant = random_instant(ctx.rng())?;
    Ok(Value::String(instant.format("%A").to_string()))
}

/// `day_of_month`
pub fn day_of_month(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    let instant = random_instant(ctx.rng())?;
    Ok(integer_for(ctx.shape(), i64::from(instant.day())))
}

/// `timestamp`: `YYYY-MM-DD HH:MM:SS`.
pub fn timestamp(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    let instant = random_instant(ctx.rng())?;
    Ok(Value::String(instant.format("%Y-%m-%d %H:%M:%S").to_string()))
}

/// `century`: Roman numeral.
pub fn century(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    Ok(Value::String(pick(ctx.rng(), CENTURIES).to_string()))
}

/// `timezone`: IANA zone name.
pub fn timezone(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    Ok(Value::String(pick(ctx.rng(), TIMEZONES).to_string()))
}

/// `time_period`: `AM` or `PM`.
pub fn time_period(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    Ok(Value::String(pick(ctx.rng(), PERIODS).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use faker_core::Shape;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_unix_time_follows_shape() {
        let mut rng = StdRng::seed_from_u64(42);

        let shape = Shape::Int64;
        let mut ctx = ProviderContext::new(&shape, &mut rng);
        let Value::Int64(secs) = unix_time(&mut ctx).unwrap() else {
            panic!("Expected int64");
        };
        assert!(secs >= 0 && secs <= Utc::now().timestamp());

        let shape = Shape::String;
        let mut ctx = ProviderContext::new(&shape, &mut rng);
        let Value::String(text) = unix_time(&mut ctx).unwrap() else {
            panic!("Expected string");
        };
        assert!(text.parse::<i64>().is_ok());
    }

    #[test]
    fn test_date_parses() {
        let mut rng = StdRng::seed_from_u64(42);
        let shape = Shape::String;
        let mut ctx = ProviderContext::new(&shape, &mut rng);

        let Value::String(text) = date(&mut ctx).unwrap() else {
            panic!("Expected string");
        };
        assert!(NaiveDate::parse_from_str(&text, "%Y-%m-%d").is_ok());
    }

    #[test]
    fn test_day_of_month_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let shape = Shape::Int64;
        let mut ctx = ProviderContext::new(&shape, &mut rng);

        for _ in 0..50 {
            let Value::Int64(day) = day_of_month(&mut ctx).unwrap() else {
                panic!("Expected int64");
            };
            assert!((1..=31).contains(&day));
        }
    }
}
