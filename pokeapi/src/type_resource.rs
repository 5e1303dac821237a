use std::io::Read;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::Deserialize;
use typedex_matchup::{DamageRelationSet, ElementalType, IntegrityPolicy};

use crate::ParseError;
use crate::resource::{LocalizedName, NamedResource, capitalize};

/// A `/type/{id}` document
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeResource {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub names: Vec<LocalizedName>,
    pub damage_relations: DamageRelations,
}

/// The `damage_relations` block of a type document.
///
/// The `*_from` lists describe this type defending; the `*_to` lists
/// describe it attacking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DamageRelations {
    #[serde(default)]
    pub double_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub no_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub double_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub no_damage_to: Vec<NamedResource>,
}

fn names(list: &[NamedResource]) -> impl Iterator<Item = &str> {
    list.iter().map(|r| r.name.as_str())
}

impl TypeResource {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).context("Failed to decode type document")
    }

    pub fn elemental_type(&self) -> ElementalType {
        ElementalType::new(self.name.as_str())
    }

    /// Localized name for `language` (e.g. "en"), falling back to the
    /// capitalized resource name
    pub fn display_name(&self, language: &str) -> String {
        self.names
            .iter()
            .find(|n| n.language.name == language)
            .map(|n| n.name.clone())
            .unwrap_or_else(|| capitalize(&self.name))
    }

    /// Defensive relations of this type
    pub fn relations(&self, policy: IntegrityPolicy) -> Result<DamageRelationSet> {
        let relations = &self.damage_relations;
        DamageRelationSet::with_policy(
            names(&relations.double_damage_from),
            names(&relations.half_damage_from),
            names(&relations.no_damage_from),
            policy,
        )
        .with_context(|| format!("Invalid damage relations for type {}", self.name))
    }
}

impl FromStr for TypeResource {
    type Err = anyhow::Error;

    fn from_str(document: &str) -> Result<Self> {
        parse_type_resource(document)
    }
}

/// Decode a type document
pub fn parse_type_resource(document: &str) -> Result<TypeResource> {
    if document.trim().is_empty() {
        return Err(ParseError::EmptyDocument.into());
    }

    let resource: TypeResource =
        serde_json::from_str(document).context("Failed to decode type document")?;
    if resource.name.is_empty() {
        return Err(ParseError::MissingField("name".to_string()).into());
    }

    Ok(resource)
}
