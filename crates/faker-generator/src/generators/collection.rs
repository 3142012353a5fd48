//! Collection length policy.

use crate::config::FakerConfig;
use rand::Rng;

/// Length of the next slice or map.
///
/// Fixed mode returns `collection_size`; random mode draws from
/// `[0, collection_size)`, with a bound of 0 giving 0.
pub fn collection_size<R: Rng>(rng: &mut R, config: &FakerConfig) -> usize {
    if config.force_empty_collections {
        return 0;
    }
    if config.fixed_collection_size {
        return config.collection_size;
    }
    if config.collection_size == 0 {
        return 0;
    }
    rng.random_range(0..config.collection_size)
}
