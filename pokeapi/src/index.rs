use std::collections::BTreeSet;
use std::io::{BufRead, Read, Write};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::ParseError;
use crate::resource::NamedResource;

/// A paginated list endpoint such as `/pokemon?limit=10000`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NamedResourceList {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// Every creature name the API knows, used to check a name before fetching
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PokemonIndex {
    names: BTreeSet<String>,
}

impl PokemonIndex {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let list: NamedResourceList =
            serde_json::from_reader(reader).context("Failed to decode pokemon list")?;
        Ok(list.into())
    }

    /// Read a names file holding one name per line
    pub fn from_lines<R: BufRead>(reader: R) -> Result<Self> {
        let mut names = BTreeSet::new();
        for line in reader.lines() {
            let line = line.context("Failed to read pokemon names")?;
            let name = line.trim();
            if !name.is_empty() {
                names.insert(name.to_string());
            }
        }
        Ok(Self { names })
    }

    /// Write one name per line, the format [`PokemonIndex::from_lines`] reads
    pub fn write_lines<W: Write>(&self, mut writer: W) -> Result<()> {
        for name in &self.names {
            writeln!(writer, "{}", name).context("Failed to write pokemon names")?;
        }
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl From<NamedResourceList> for PokemonIndex {
    fn from(list: NamedResourceList) -> Self {
        if list.next.is_some() {
            tracing::warn!(
                count = list.count,
                "Pokemon list is paginated, later pages are missing"
            );
        }
        let names: BTreeSet<String> = list.results.into_iter().map(|r| r.name).collect();
        tracing::debug!(count = names.len(), "Pokemon index loaded");
        Self { names }
    }
}

impl FromStr for PokemonIndex {
    type Err = anyhow::Error;

    fn from_str(document: &str) -> Result<Self> {
        parse_pokemon_index(document)
    }
}

/// Decode a `/pokemon?limit=...` list document
pub fn parse_pokemon_index(document: &str) -> Result<PokemonIndex> {
    if document.trim().is_empty() {
        return Err(ParseError::EmptyDocument.into());
    }

    let list: NamedResourceList =
        serde_json::from_str(document).context("Failed to decode pokemon list")?;
    Ok(list.into())
}
