//! Person providers: names and titles.

use crate::pick;
use faker_core::{ProviderContext, ProviderResult, Value};
use rand::Rng;

pub(crate) const FIRST_NAMES_MALE: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph", "Thomas",
    "Charles", "Daniel", "Matthew", "Anthony", "Mark", "Paul", "Steven",
];

pub(crate) const FIRST_NAMES_FEMALE: &[&str] = &[
    "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan", "Jessica", "Sarah",
    "Karen", "Nancy", "Lisa", "Margaret", "Sandra", "Ashley", "Emily",
];

pub(crate) const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda", "William",
    "Elizabeth", "David", "Barbara", "Richard", "Susan", "Joseph", "Jessica",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Wilson", "Anderson", "Taylor", "Moore",
];

const TITLES_MALE: &[&str] = &["Mr.", "Dr.", "Prof.", "Lord", "King", "Prince"];
const TITLES_FEMALE: &[&str] = &["Mrs.", "Ms.", "Miss", "Dr.", "Prof.", "Lady", "Queen", "Princess"];

/// `first_name`
pub fn first_name(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    Ok(Value::String(pick(ctx.rng(), FIRST_NAMES).to_string()))
}

/// `first_name_male`
pub fn first_name_male(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    Ok(Value::String(pick(ctx.rng(), FIRST_NAMES_MALE).to_string()))
}

/// `first_name_female`
pub fn first_name_female(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    Ok(Value::String(pick(ctx.rng(), FIRST_NAMES_FEMALE).to_string()))
}

/// `last_name`
pub fn last_name(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    Ok(Value::String(pick(ctx.rng(), LAST_NAMES).to_string()))
}

/// `name`: optional title, first and last name.
pub fn name(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    let rng = ctx.rng();
    let (titles, firsts) = if rng.random_bool(0.5) {
        (TITLES_MALE, FIRST_NAMES_MALE)
    } else {
        (TITLES_FEMALE, FIRST_NAMES_FEMALE)
    };
    let title = pick(rng, titles);
    let first = pick(rng, firsts);
    let last = pick(rng, LAST_NAMES);
    Ok(Value::String(format!("{title} {first} {last}")))
}

/// `title_male`
pub fn title_male(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    Ok(Value::String(pick(ctx.rng(), TITLES_MALE).to_string()))
}

/// `title_female`
pub fn title_female(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    Ok(Value::String(pick(ctx.rng(), TITLES_FEMALE).to_string()))
}
