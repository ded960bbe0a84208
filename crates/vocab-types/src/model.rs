use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Dialect section of a dictionary page
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    Uk,
    Us,
    Business,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Uk, Region::Us, Region::Business];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Uk => "uk",
            Region::Us => "us",
            Region::Business => "business",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uk" => Ok(Region::Uk),
            "us" => Ok(Region::Us),
            "business" | "business_english" => Ok(Region::Business),
            other => Err(format!("unknown region '{other}', expected uk, us or business")),
        }
    }
}

/// Entries of one looked-up page, grouped by region.
///
/// Every region is always present as a key; a region the page did not
/// contain maps to an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<Region, Vec<Entry>>",
    into = "BTreeMap<Region, Vec<Entry>>"
)]
pub struct DictionaryResult {
    regions: BTreeMap<Region, Vec<Entry>>,
}

impl DictionaryResult {
    pub fn empty() -> Self {
        Self {
            regions: Region::ALL.iter().map(|r| (*r, Vec::new())).collect(),
        }
    }

    pub fn entries(&self, region: Region) -> &[Entry] {
        self.regions.get(&region).map(Vec::as_slice).unwrap_or_default()
    }

    /// Replace the entries of a region (a later region block wins)
    pub fn set(&mut self, region: Region, entries: Vec<Entry>) {
        self.regions.insert(region, entries);
    }

    pub fn regions(&self) -> impl Iterator<Item = (Region, &[Entry])> {
        self.regions.iter().map(|(r, e)| (*r, e.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.regions.values().all(Vec::is_empty)
    }
}

impl Default for DictionaryResult {
    fn default() -> Self {
        Self::empty()
    }
}

/// Regions missing from the map come back empty
impl From<BTreeMap<Region, Vec<Entry>>> for DictionaryResult {
    fn from(regions: BTreeMap<Region, Vec<Entry>>) -> Self {
        let mut result = Self::empty();
        for (region, entries) in regions {
            result.set(region, entries);
        }
        result
    }
}

impl From<DictionaryResult> for BTreeMap<Region, Vec<Entry>> {
    fn from(result: DictionaryResult) -> Self {
        result.regions
    }
}

/// One headword grouping within a region
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub general_info: GeneralInfo,
    pub senses: Vec<Sense>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralInfo {
    pub headword: String,
    pub part_of_speech: String,
    pub uk_audio: String,
    pub us_audio: String,
    pub irregular_forms: String,
}

/// Definitions sharing a word function (e.g. "verb (MOVE FAST)")
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    pub word_function: String,
    pub definitions: Vec<Definition>,
}

impl Sense {
    /// The only definition navigation ever surfaces
    pub fn first_definition(&self) -> Option<&Definition> {
        self.definitions.first()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub level: String,
    pub explanation: String,
    /// Never empty
    pub examples: Vec<String>,
}

impl Definition {
    pub fn new(level: String, explanation: String, examples: Vec<String>) -> Self {
        let examples = if examples.is_empty() {
            vec![String::new()]
        } else {
            examples
        };

        Self {
            level,
            explanation,
            examples,
        }
    }
}

impl Default for Definition {
    fn default() -> Self {
        Self::new(String::new(), String::new(), Vec::new())
    }
}
