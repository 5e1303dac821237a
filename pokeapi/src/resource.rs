use serde::Deserialize;

/// A `{ "name", "url" }` reference to another PokeAPI resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl NamedResource {
    /// Numeric id at the end of the resource URL, e.g. `.../pokemon-species/38/`
    pub fn id(&self) -> Option<u32> {
        self.url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .and_then(|segment| segment.parse().ok())
    }
}

/// A name in one language
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocalizedName {
    pub name: String,
    pub language: NamedResource,
}

/// Capitalize the first letter of each hyphen-separated word
pub(crate) fn capitalize(name: &str) -> String {
    name.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join("-")
}
