//! Identifier grammars.
//!
//! Catalog patterns are plain regular expressions. Compilation wraps each one
//! in `^(?:...)$`, so a grammar only ever accepts the whole normalized
//! identifier, whether or not the catalog author anchored it.

use regex::Regex;

/// A compiled, fully anchored identifier format
#[derive(Debug, Clone)]
pub struct Grammar {
    source: String,
    regex: Regex,
}

impl Grammar {
    /// Compile a catalog pattern
    pub fn compile(pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&anchor(pattern))?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// The pattern as written in the catalog
    pub fn source(&self) -> &str {
        &self.source
    }

    /// True when the grammar matches all of `text`
    pub fn is_full_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

// The non-capturing group keeps top-level alternations inside the anchors.
fn anchor(pattern: &str) -> String {
    format!("^(?:{})$", pattern)
}
