use std::io::Read;

use anyhow::{Context, Result};
use typedex_matchup::{IntegrityPolicy, Type, TypeChart, TypeChartBuilder};

use crate::ParseError;
use crate::type_resource::{TypeResource, parse_type_resource};

/// Options controlling how type documents become a chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadOptions {
    /// What to do with a type listed in two relation lists
    pub integrity: IntegrityPolicy,
    /// Refuse documents for types outside the known enumeration
    /// (PokeAPI also serves "unknown" and "shadow")
    pub require_known_types: bool,
}

/// Builds a [`TypeChart`] from type documents, one document per type
#[derive(Debug, Default)]
pub struct ChartLoader {
    options: LoadOptions,
    builder: TypeChartBuilder,
}

impl ChartLoader {
    pub fn new(options: LoadOptions) -> Self {
        Self {
            options,
            builder: TypeChart::builder(),
        }
    }

    pub fn load_resource(&mut self, resource: &TypeResource) -> Result<()> {
        if self.options.require_known_types && Type::from_name(&resource.name).is_none() {
            return Err(ParseError::UnknownType(resource.name.clone()).into());
        }

        let relations = resource.relations(self.options.integrity)?;
        self.builder
            .insert(resource.elemental_type(), relations)
            .with_context(|| format!("Failed to add type {} to chart", resource.name))?;

        tracing::debug!(defending = %resource.name, id = resource.id, "Loaded type relations");
        Ok(())
    }

    pub fn load_str(&mut self, document: &str) -> Result<()> {
        let resource = parse_type_resource(document)?;
        self.load_resource(&resource)
    }

    pub fn load_reader<R: Read>(&mut self, reader: R) -> Result<()> {
        let resource = TypeResource::from_reader(reader)?;
        self.load_resource(&resource)
    }

    pub fn finish(self) -> TypeChart {
        self.builder.build()
    }
}

/// Build a chart from a batch of type documents
pub fn load_chart<I, S>(documents: I, options: LoadOptions) -> Result<TypeChart>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut loader = ChartLoader::new(options);
    for (index, document) in documents.into_iter().enumerate() {
        loader
            .load_str(document.as_ref())
            .with_context(|| format!("Type document #{}", index))?;
    }
    Ok(loader.finish())
}
