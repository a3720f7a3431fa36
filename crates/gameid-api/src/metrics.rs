//! Prometheus counters for validation outcomes, served on `/metrics`.
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

/// Label used for every game code the catalog does not know, so arbitrary
/// client input cannot grow the label set
pub const UNREGISTERED_GAME: &str = "_unregistered";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Valid,
    Invalid,
    Unregistered,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Valid => "valid",
            Outcome::Invalid => "invalid",
            Outcome::Unregistered => "unregistered",
        }
    }
}

pub struct ValidationMetrics {
    registry: Registry,
    validations: IntCounterVec,
}

impl ValidationMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();
        let validations = IntCounterVec::new(
            Opts::new(
                "gameid_validations_total",
                "Identifier validations by game and outcome",
            ),
            &["game", "outcome"],
        )?;
        registry.register(Box::new(validations.clone()))?;
        Ok(Self {
            registry,
            validations,
        })
    }

    pub fn observe(&self, game: &str, outcome: Outcome) {
        let game = match outcome {
            Outcome::Unregistered => UNREGISTERED_GAME,
            _ => game,
        };
        self.validations
            .with_label_values(&[game, outcome.as_str()])
            .inc();
    }

    pub fn encode(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).to_string())
    }
}
