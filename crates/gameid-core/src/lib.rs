//! GameID Core: account identifier formats for game top-up orders
//!
//! Each supported game has a [`FormatDescriptor`] describing what a
//! well-formed account identifier looks like (numeric UID, UID plus zone or
//! server, `name#tag`, username). [`validate`] normalizes raw user text for a
//! game and checks it against that game's anchored grammar.
//!
//! The crate does no I/O beyond optionally reading a catalog file at startup;
//! the built-in catalog is embedded and shared read-only by all callers.
//!
//! # Example
//!
//! ```
//! use gameid_core::validate;
//!
//! let result = validate("12345678 (1234)", "mobile-legends");
//! assert!(result.is_valid);
//! assert_eq!(result.clean_text, "12345678 1234");
//!
//! let result = validate("812345678 asia", "genshin-impact");
//! assert_eq!(result.clean_text, "812345678 os_asia");
//!
//! // Games without a registered format accept any trimmed input
//! assert!(validate("  whatever ", "not-a-game").is_valid);
//! ```

pub mod error;
pub mod grammar;
pub mod normalizer;
pub mod registry;
pub mod validator;

pub use error::CatalogError;
pub use grammar::Grammar;
pub use normalizer::Normalizer;
pub use registry::{ExampleDefect, FormatDescriptor, GameEntry, Registry, BUILTIN_CATALOG};
pub use validator::{format_error, ValidationResult};

/// Validate an identifier against the built-in catalog
pub fn validate(raw_text: &str, game_code: &str) -> ValidationResult {
    Registry::builtin().validate(raw_text, game_code)
}
