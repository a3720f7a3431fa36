//! Game format registry.
//!
//! Loads the catalog YAML (see `catalog/games.yaml`) into an immutable map
//! from game code to [`FormatDescriptor`]. A catalog only loads when every
//! grammar compiles, every code is unique, and every entry's example passes
//! its own normalizer and grammar.

use crate::error::CatalogError;
use crate::grammar::Grammar;
use crate::normalizer::{self, Normalizer};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// The catalog shipped with the crate
pub const BUILTIN_CATALOG: &str = include_str!("../catalog/games.yaml");

lazy_static! {
    static ref BUILTIN: Registry =
        Registry::from_yaml(BUILTIN_CATALOG).expect("built-in catalog must load");
}

/// Top-level catalog file structure
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogFile {
    pub version: String,
    pub games: Vec<GameEntry>,
}

/// A single game as written in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEntry {
    pub code: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    pub pattern: String,
    pub example: String,
    #[serde(default)]
    pub normalizer: Option<Normalizer>,
}

/// Accepted identifier format for one game
#[derive(Debug, Clone)]
pub struct FormatDescriptor {
    pub code: String,
    pub display_name: String,
    pub grammar: Grammar,
    pub example: String,
    pub normalizer: Option<Normalizer>,
}

impl FormatDescriptor {
    fn compile(entry: GameEntry) -> Result<Self, CatalogError> {
        let grammar = Grammar::compile(&entry.pattern).map_err(|source| {
            CatalogError::InvalidGrammar {
                code: entry.code.clone(),
                source,
            }
        })?;

        Ok(Self {
            code: entry.code,
            display_name: entry.display_name,
            grammar,
            example: entry.example,
            normalizer: entry.normalizer,
        })
    }

    /// Apply this game's normalizer, or trim when it has none
    pub fn normalize(&self, raw_text: &str) -> String {
        normalizer::normalize(self.normalizer, raw_text)
    }

    /// Whether this game's own example is accepted; returns the normalized example
    fn example_holds(&self) -> (bool, String) {
        let clean = self.normalize(&self.example);
        (self.grammar.is_full_match(&clean), clean)
    }
}

/// An entry whose example fails its own format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleDefect {
    pub code: String,
    pub example: String,
    pub clean_text: String,
}

/// Immutable lookup table from game code to format
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: HashMap<String, FormatDescriptor>,
}

impl Registry {
    /// The process-wide registry built from [`BUILTIN_CATALOG`]
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    /// Load a catalog from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Build a registry from catalog YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_yaml::from_str(yaml)?;
        let registry = Self::from_entries(file.games)?;
        info!(version = %file.version, games = registry.len(), "catalog loaded");
        Ok(registry)
    }

    /// Build a registry from already-parsed entries
    pub fn from_entries(entries: Vec<GameEntry>) -> Result<Self, CatalogError> {
        let mut map = HashMap::with_capacity(entries.len());

        for entry in entries {
            if entry.code.trim().is_empty() {
                return Err(CatalogError::EmptyCode);
            }
            if map.contains_key(&entry.code) {
                return Err(CatalogError::DuplicateCode(entry.code));
            }
            let descriptor = FormatDescriptor::compile(entry)?;
            map.insert(descriptor.code.clone(), descriptor);
        }

        let registry = Registry { entries: map };
        if let Some(defect) = registry.check_consistency().into_iter().next() {
            return Err(CatalogError::ExampleMismatch {
                code: defect.code,
                example: defect.example,
                clean_text: defect.clean_text,
            });
        }
        Ok(registry)
    }

    pub fn lookup(&self, code: &str) -> Option<&FormatDescriptor> {
        self.entries.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All descriptors, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &FormatDescriptor> {
        self.entries.values()
    }

    /// Registered codes, sorted
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Every entry whose example, once normalized, fails its grammar. Sorted by code.
    pub fn check_consistency(&self) -> Vec<ExampleDefect> {
        let mut defects: Vec<ExampleDefect> = self
            .iter()
            .filter_map(|d| {
                let (holds, clean_text) = d.example_holds();
                (!holds).then(|| ExampleDefect {
                    code: d.code.clone(),
                    example: d.example.clone(),
                    clean_text,
                })
            })
            .collect();
        defects.sort_by(|a, b| a.code.cmp(&b.code));
        defects
    }
}
