//! Compiled-in page content.
//!
//! Everything shown on screen comes from the constants in this module. The
//! fact list is the only piece that may be replaced, once, at startup (see
//! [`ContentStore::with_facts`]). Nothing here is mutated after construction.

mod data;

pub use data::{BREEDS, CARE_TIPS, FACTS, INTRO, TITLE};

/// Static description of a cat breed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreedRecord {
    pub name: &'static str,
    pub description: &'static str,
    /// External image URL. Displayed as-is, never fetched.
    pub image_ref: &'static str,
}

/// Read-only ordered sequences of breeds, facts and care tips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentStore {
    breeds: &'static [BreedRecord],
    facts: Vec<String>,
    care_tips: &'static [&'static str],
}

impl ContentStore {
    /// Content exactly as embedded in the binary.
    pub fn embedded() -> Self {
        Self {
            breeds: &BREEDS,
            facts: FACTS.iter().map(|fact| fact.to_string()).collect(),
            care_tips: &CARE_TIPS,
        }
    }

    /// Embedded content with the fact list replaced.
    ///
    /// An empty list is accepted here; the fact rotator refuses to start over
    /// it, which is where the error surfaces.
    pub fn with_facts(facts: Vec<String>) -> Self {
        Self {
            facts,
            ..Self::embedded()
        }
    }

    pub fn title(&self) -> &'static str {
        TITLE
    }

    pub fn intro(&self) -> &'static str {
        INTRO
    }

    pub fn breeds(&self) -> &[BreedRecord] {
        self.breeds
    }

    pub fn breed(&self, index: usize) -> Option<&BreedRecord> {
        self.breeds.get(index)
    }

    pub fn facts(&self) -> &[String] {
        &self.facts
    }

    pub fn fact(&self, index: usize) -> Option<&str> {
        self.facts.get(index).map(String::as_str)
    }

    pub fn fact_count(&self) -> usize {
        self.facts.len()
    }

    pub fn care_tips(&self) -> &[&'static str] {
        self.care_tips
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::embedded()
    }
}
