//! Placeholder text providers.

use crate::pick;
use faker_core::{ProviderContext, ProviderResult, Value};
use rand::Rng;

pub(crate) const WORDS: &[&str] = &[
    "alias", "consequatur", "aut", "perferendis", "sit", "voluptatem", "accusantium",
    "doloremque", "aperiam", "eaque", "ipsa", "quae", "ab", "illo", "inventore", "veritatis",
    "et", "quasi", "architecto", "beatae", "vitae", "dicta", "sunt", "explicabo", "aspernatur",
    "odit", "fugit", "sed", "quia", "consequuntur", "magni", "dolores", "eos", "qui",
    "ratione", "sequi", "nesciunt", "neque", "dolorem", "ipsum", "porro", "quisquam",
];

fn sentence_text<R: Rng>(rng: &mut R) -> String {
    let count = rng.random_range(4..12);
    let words: Vec<&str> = (0..count).map(|_| pick(&mut *rng, WORDS)).collect();
    let mut sentence = words.join(" ");
    if let Some(first) = sentence.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    sentence.push('.');
    sentence
}

/// `word`
pub fn word(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    Ok(Value::String(pick(ctx.rng(), WORDS).to_string()))
}

/// `sentence`: capitalized words ending with a full stop.
pub fn sentence(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    Ok(Value::String(sentence_text(ctx.rng())))
}

/// `paragraph`: a few sentences.
pub fn paragraph(ctx: &mut ProviderContext<'_>) -> ProviderResult {
    let rng = ctx.rng();
    let count = rng.random_range(3..7);
    let sentences: Vec<String> = (0..count).map(|_| sentence_text(&mut *rng)).collect();
    Ok(Value::String(sentences.join(" ")))
}
