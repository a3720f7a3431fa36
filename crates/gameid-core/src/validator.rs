//! Identifier validation.
//!
//! Looks up the game's format, normalizes the raw text and checks it against
//! the anchored grammar. A mismatch is reported in the result, never as an
//! error. Unknown game codes accept any input after trimming.

use crate::registry::{FormatDescriptor, Registry};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome of validating one identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Normalized identifier, present even when invalid
    pub clean_text: String,
    /// User-facing message, set iff `is_valid` is false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    fn accepted(clean_text: String) -> Self {
        Self {
            is_valid: true,
            clean_text,
            error: None,
        }
    }

    fn rejected(clean_text: String, descriptor: &FormatDescriptor) -> Self {
        Self {
            is_valid: false,
            clean_text,
            error: Some(format_error(&descriptor.display_name, &descriptor.example)),
        }
    }
}

/// User-facing format mismatch message. The wording is consumed downstream verbatim.
pub fn format_error(display_name: &str, example: &str) -> String {
    format!("Format ID {} salah. Contoh: {}", display_name, example)
}

impl Registry {
    /// Validate `raw_text` as an account identifier for `game_code`
    pub fn validate(&self, raw_text: &str, game_code: &str) -> ValidationResult {
        let Some(descriptor) = self.lookup(game_code) else {
            return ValidationResult::accepted(raw_text.trim().to_string());
        };

        let clean_text = descriptor.normalize(raw_text);
        if descriptor.grammar.is_full_match(&clean_text) {
            ValidationResult::accepted(clean_text)
        } else {
            debug!(game = game_code, clean_text = %clean_text, "identifier format mismatch");
            ValidationResult::rejected(clean_text, descriptor)
        }
    }
}
