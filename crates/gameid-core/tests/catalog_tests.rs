//! Integration tests for gameid-core against the built-in catalog.
//!
//! These exercise the public `validate` entry point with the real
//! `catalog/games.yaml` data shipped in the crate.

use gameid_core::{validate, Registry, ValidationResult};

/// Inputs used to probe every game, including awkward whitespace and brackets
const PROBES: &[&str] = &[
    "",
    " ",
    "\t\n",
    "123456789",
    "  12345678 (1234)  ",
    "812345678 Asia ",
    "RiotUser#WR1\n",
    "(  )",
    " a  b  c ",
    "\u{00a0}builder\u{3000}",
];

// =============================================================================
// Catalog self-consistency
// =============================================================================

#[test]
fn test_builtin_catalog_loads() {
    let registry = Registry::builtin();
    assert!(registry.len() >= 10);
    assert!(registry.check_consistency().is_empty());
}

#[test]
fn test_every_example_validates() {
    let registry = Registry::builtin();
    for descriptor in registry.iter() {
        let result = registry.validate(&descriptor.example, &descriptor.code);
        assert!(
            result.is_valid,
            "Example {:?} rejected for {} (normalized to {:?})",
            descriptor.example, descriptor.code, result.clean_text
        );
    }
}

#[test]
fn test_codes_are_sorted_and_unique() {
    let codes = Registry::builtin().codes();
    let mut sorted = codes.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(codes, sorted);
}

// =============================================================================
// Unknown games and trimming
// =============================================================================

#[test]
fn test_unknown_game_accepts_trimmed_input() {
    for code in ["", "unknown", "MOBILE-LEGENDS", "free fire"] {
        for raw in PROBES {
            let result = validate(raw, code);
            assert!(result.is_valid, "Rejected {:?} for unknown code {:?}", raw, code);
            assert_eq!(result.clean_text, raw.trim());
            assert_eq!(result.error, None);
        }
    }
}

#[test]
fn test_clean_text_never_padded() {
    let registry = Registry::builtin();
    for code in registry.codes() {
        for raw in PROBES {
            let clean = registry.validate(raw, code).clean_text;
            assert_eq!(clean, clean.trim(), "Padded output for {:?} / {}", raw, code);
        }
    }
}

#[test]
fn test_error_present_iff_invalid() {
    let registry = Registry::builtin();
    for code in registry.codes() {
        for raw in PROBES {
            let result = registry.validate(raw, code);
            assert_eq!(result.error.is_some(), !result.is_valid, "{:?} / {}", raw, code);
        }
    }
}

// =============================================================================
// Bracket normalizer (Mobile Legends)
// =============================================================================

#[test]
fn test_bracket_forms_agree() {
    let forms = ["12345678(1234)", "12345678 (1234)", "12345678   1234"];
    let results: Vec<ValidationResult> = forms
        .iter()
        .map(|raw| validate(raw, "mobile-legends"))
        .collect();

    for result in &results {
        assert_eq!(result, &results[0]);
    }
    assert!(results[0].is_valid);
    assert_eq!(results[0].clean_text, "12345678 1234");
}

#[test]
fn test_bracket_missing_zone() {
    let result = validate("12345678", "mobile-legends");
    assert!(!result.is_valid);
    assert_eq!(
        result.error.as_deref(),
        Some("Format ID Mobile Legends salah. Contoh: 12345678 (1234)")
    );
}

// =============================================================================
// Server alias normalizer (Genshin Impact)
// =============================================================================

#[test]
fn test_region_alias_matches_canonical_code() {
    let alias = validate("812345678 asia", "genshin-impact");
    let canonical = validate("812345678 os_asia", "genshin-impact");

    assert_eq!(alias.clean_text, "812345678 os_asia");
    assert_eq!(canonical.clean_text, "812345678 os_asia");
    assert!(alias.is_valid);
    assert!(canonical.is_valid);
}

#[test]
fn test_region_alias_variations() {
    let cases = [
        ("612345678 America", "612345678 os_usa"),
        ("612345678 usa", "612345678 os_usa"),
        ("712345678 Euro", "712345678 os_euro"),
        ("712345678 europe", "712345678 os_euro"),
        ("912345678 TW", "912345678 os_cht"),
        ("912345678 hk", "912345678 os_cht"),
        ("912345678 cht", "912345678 os_cht"),
    ];

    for (raw, expected) in cases {
        let result = validate(raw, "genshin-impact");
        assert!(result.is_valid, "Failed for: {}", raw);
        assert_eq!(result.clean_text, expected, "Wrong server for: {}", raw);
    }
}

#[test]
fn test_unknown_server_passes_through() {
    let result = validate("812345678 xx", "genshin-impact");
    assert_eq!(result.clean_text, "812345678 xx");
    assert!(!result.is_valid);
}

#[test]
fn test_missing_server() {
    let result = validate("  812345678 ", "genshin-impact");
    assert_eq!(result.clean_text, "812345678");
    assert!(!result.is_valid);
}

// =============================================================================
// Numeric bounds (Free Fire: 5 to 12 digits)
// =============================================================================

#[test]
fn test_numeric_length_bounds() {
    assert!(!validate("1234", "free-fire").is_valid);
    assert!(validate("12345", "free-fire").is_valid);
    assert!(validate("123456789012", "free-fire").is_valid);
    assert!(!validate("1234567890123", "free-fire").is_valid);
}

#[test]
fn test_numeric_rejects_non_ascii_digits() {
    assert!(!validate("١٢٣٤٥٦٧", "free-fire").is_valid);
    assert!(!validate("12345 678", "free-fire").is_valid);
    assert!(!validate("+12345678", "free-fire").is_valid);
}

#[test]
fn test_error_message_literal() {
    let result = validate("abc", "free-fire");
    assert_eq!(result.clean_text, "abc");
    assert_eq!(
        result.error.as_deref(),
        Some("Format ID Free Fire salah. Contoh: 123456789")
    );
}

// =============================================================================
// Tag form (Riot ID)
// =============================================================================

#[test]
fn test_tag_form() {
    assert!(validate("RiotUser#WR1", "wild-rift").is_valid);
    assert!(!validate("RiotUser", "wild-rift").is_valid);
    assert!(!validate("RiotUser#", "wild-rift").is_valid);
    assert!(!validate("RiotUser#TOOLONG", "wild-rift").is_valid);
    assert!(!validate("#WR1", "wild-rift").is_valid);
}

#[test]
fn test_tag_form_keeps_case() {
    let result = validate("  riotuser#wr1 ", "wild-rift");
    assert!(result.is_valid);
    assert_eq!(result.clean_text, "riotuser#wr1");
}

// =============================================================================
// Usernames
// =============================================================================

#[test]
fn test_username_punctuation() {
    assert!(validate("zepetto_123", "point-blank").is_valid);
    assert!(validate("ze.pet-to", "point-blank").is_valid);
    assert!(!validate("ze pet to", "point-blank").is_valid);
    assert!(!validate("zep@tto", "point-blank").is_valid);
}

// =============================================================================
// Sharing
// =============================================================================

#[test]
fn test_concurrent_validation() {
    let registry = Registry::builtin();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                scope.spawn(move || {
                    let raw = format!("{} (1234)", 10_000_000 + i);
                    registry.validate(&raw, "mobile-legends")
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap().is_valid);
        }
    });
}
