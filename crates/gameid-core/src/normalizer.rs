//! Identifier normalization.
//!
//! Every identifier is trimmed. Games whose identifiers carry a second token
//! (zone id, server) pick one of the [`Normalizer`] transforms in the catalog
//! so their grammars can stay simple:
//! - `bracket_secondary`: `12345678 (1234)` → `12345678 1234`
//! - `server_alias`: `812345678 Asia` → `812345678 os_asia`

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

lazy_static! {
    /// Regional server names and canonical codes, keyed by lowercase alias
    static ref SERVER_ALIASES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("asia", "os_asia");
        m.insert("os_asia", "os_asia");
        m.insert("america", "os_usa");
        m.insert("usa", "os_usa");
        m.insert("us", "os_usa");
        m.insert("na", "os_usa");
        m.insert("os_usa", "os_usa");
        m.insert("euro", "os_euro");
        m.insert("europe", "os_euro");
        m.insert("eu", "os_euro");
        m.insert("os_euro", "os_euro");
        m.insert("tw", "os_cht");
        m.insert("hk", "os_cht");
        m.insert("mo", "os_cht");
        m.insert("cht", "os_cht");
        m.insert("os_cht", "os_cht");
        m
    };

    /// Multiple whitespace pattern
    static ref MULTI_SPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// A per-game transform applied before grammar matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalizer {
    /// "primary (secondary)" with optional brackets and loose spacing
    BracketSecondary,
    /// "primary server" where server may be a regional alias
    ServerAlias,
}

impl Normalizer {
    pub fn apply(self, text: &str) -> String {
        match self {
            Normalizer::BracketSecondary => strip_brackets(text),
            Normalizer::ServerAlias => resolve_server(text),
        }
    }
}

/// Normalize with an optional per-game transform, trimming when there is none
pub fn normalize(normalizer: Option<Normalizer>, text: &str) -> String {
    match normalizer {
        Some(n) => n.apply(text),
        None => text.trim().to_string(),
    }
}

/// Treat parentheses as separators and collapse whitespace
pub fn strip_brackets(text: &str) -> String {
    let spaced: String = text
        .chars()
        .map(|c| if c == '(' || c == ')' { ' ' } else { c })
        .collect();
    collapse_whitespace(&spaced)
}

/// Split into primary id and server, resolving the server through the alias table
pub fn resolve_server(text: &str) -> String {
    let collapsed = collapse_whitespace(text);
    let mut parts = collapsed.splitn(2, ' ');
    let primary_id = parts.next().unwrap_or("");
    let raw_server = parts.next().unwrap_or("");

    format!("{} {}", primary_id, canonical_server(raw_server))
        .trim()
        .to_string()
}

/// Map a server token to its canonical code.
///
/// Lookup is case-insensitive. Tokens that are not in the alias table come
/// back unchanged.
pub fn canonical_server(token: &str) -> String {
    SERVER_ALIASES
        .get(token.to_lowercase().as_str())
        .map(|code| code.to_string())
        .unwrap_or_else(|| token.to_string())
}

fn collapse_whitespace(text: &str) -> String {
    MULTI_SPACE.replace_all(text.trim(), " ").to_string()
}
