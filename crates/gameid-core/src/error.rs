//! Catalog loading errors.
//!
//! Validation never fails; only building a [`Registry`](crate::Registry)
//! from catalog data can.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("READ/{path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("PARSE/{0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("GRAMMAR/{code}: {source}")]
    InvalidGrammar {
        code: String,
        #[source]
        source: regex::Error,
    },

    #[error("CATALOG/empty game code")]
    EmptyCode,

    #[error("CATALOG/duplicate game code '{0}'")]
    DuplicateCode(String),

    #[error("CATALOG/example '{example}' for '{code}' normalizes to '{clean_text}', which its grammar rejects")]
    ExampleMismatch {
        code: String,
        example: String,
        clean_text: String,
    },
}
