//! # Icon URL Resolver
//!
//! Builds sprite URLs on the external image host. Pure string work, no I/O.
//!
//! Generations before [`MODERN_SPRITE_GENERATION`] use the `silver/normal`
//! sprite set; later generations use `x-y/normal`. The name is inserted into
//! the path verbatim and is not checked against the dataset.

use crate::primitives::{MODERN_SPRITE_GENERATION, SPRITE_BASE_URL};

/// Sprite set for a generation.
#[must_use]
pub fn sprite_set(generation: i64) -> &'static str {
    if generation < MODERN_SPRITE_GENERATION {
        "silver/normal"
    } else {
        "x-y/normal"
    }
}

/// Build the icon URL for `name` in `generation`.
#[must_use]
pub fn icon_url(name: &str, generation: i64) -> String {
    format!("{}/{}/{}.png", SPRITE_BASE_URL, sprite_set(generation), name)
}
