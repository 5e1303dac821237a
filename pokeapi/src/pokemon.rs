use std::io::Read;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::Deserialize;
use typedex_matchup::{EffectivenessResult, ElementalType, ResolveError, TypeChart, resolve};

use crate::ParseError;
use crate::resource::NamedResource;

/// A `/pokemon/{name}` document, reduced to the fields typedex uses
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonResource {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub species: NamedResource,
    pub types: Vec<PokemonTypeSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub cries: Cries,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonTypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
    pub slot: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Artwork,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Artwork {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Cries {
    pub latest: Option<String>,
    pub legacy: Option<String>,
}

/// An ability a Pokemon can have
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ability {
    pub name: String,
    pub hidden: bool,
}

/// What typedex knows about one Pokemon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DexEntry {
    pub name: String,
    /// National dex number, taken from the species rather than the form
    pub dex_number: u32,
    /// Types in slot order
    pub types: Vec<ElementalType>,
    /// Abilities in slot order
    pub abilities: Vec<Ability>,
    pub artwork: Option<String>,
    pub shiny_artwork: Option<String>,
    pub cry: Option<String>,
}

impl DexEntry {
    /// Weaknesses and resistances of this Pokemon's type combination
    pub fn matchups(&self, chart: &TypeChart) -> Result<EffectivenessResult, ResolveError> {
        resolve(chart, &self.types)
    }

    pub fn hidden_ability(&self) -> Option<&Ability> {
        self.abilities.iter().find(|a| a.hidden)
    }
}

impl PokemonResource {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).context("Failed to decode pokemon document")
    }

    pub fn into_entry(self) -> Result<DexEntry> {
        if self.types.is_empty() {
            return Err(ParseError::MissingField("types".to_string()).into());
        }

        // Regional forms have their own resource id; the species id is the dex number
        let dex_number = self.species.id().ok_or_else(|| {
            ParseError::InvalidFormat(format!("species url without id: {}", self.species.url))
        })?;

        let mut types = self.types;
        types.sort_by_key(|t| t.slot);
        let mut abilities = self.abilities;
        abilities.sort_by_key(|a| a.slot);

        let artwork = self.sprites.other.official_artwork;

        Ok(DexEntry {
            name: self.name,
            dex_number,
            types: types
                .into_iter()
                .map(|t| ElementalType::from(t.kind.name))
                .collect(),
            abilities: abilities
                .into_iter()
                .map(|a| Ability {
                    name: a.ability.name,
                    hidden: a.is_hidden,
                })
                .collect(),
            artwork: artwork.front_default,
            shiny_artwork: artwork.front_shiny,
            cry: self.cries.latest,
        })
    }
}

impl FromStr for PokemonResource {
    type Err = anyhow::Error;

    fn from_str(document: &str) -> Result<Self> {
        parse_pokemon_resource(document)
    }
}

/// Decode a pokemon document
pub fn parse_pokemon_resource(document: &str) -> Result<PokemonResource> {
    if document.trim().is_empty() {
        return Err(ParseError::EmptyDocument.into());
    }

    serde_json::from_str(document).context("Failed to decode pokemon document")
}
