//! PokeAPI document decoding for typedex.
//!
//! Fetching and caching documents is left to the caller; this crate takes
//! `/type/{id}`, `/pokemon/{name}` and `/pokemon?limit=...` JSON bodies that are already at hand
//! and turns them into [`typedex_matchup`] values.

use thiserror::Error;

mod index;
mod loader;
mod pokemon;
mod resource;
mod type_resource;

pub use index::{NamedResourceList, PokemonIndex, parse_pokemon_index};
pub use loader::{ChartLoader, LoadOptions, load_chart};
pub use pokemon::{
    Ability, AbilitySlot, Artwork, Cries, DexEntry, OtherSprites, PokemonResource,
    PokemonTypeSlot, Sprites, parse_pokemon_resource,
};
pub use resource::{LocalizedName, NamedResource};
pub use type_resource::{DamageRelations, TypeResource, parse_type_resource};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid document format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Unknown elemental type: {0}")]
    UnknownType(String),

    #[error("Empty document")]
    EmptyDocument,
}
