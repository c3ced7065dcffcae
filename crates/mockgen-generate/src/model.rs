use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::GenerationError;
use crate::faker_rs::locales::LocaleKey;

/// Probability that an optional field is left out of a record.
pub const DEFAULT_OPTIONAL_DROP_PROBABILITY: f64 = 0.7;
/// Shortest array produced for a typed element.
pub const DEFAULT_ARRAY_MIN_LEN: usize = 1;
/// Longest array produced for a typed element.
pub const DEFAULT_ARRAY_MAX_LEN: usize = 5;
const ARRAY_LEN_CEILING: usize = 10_000;

/// Options for the synthesizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisOptions {
    /// Chance in `[0, 1]` that an optional field is omitted.
    pub optional_drop_probability: f64,
    /// Inclusive lower bound on generated array lengths.
    pub array_min_len: usize,
    /// Inclusive upper bound on generated array lengths.
    pub array_max_len: usize,
    /// Locale used for semantic (name-derived) values.
    pub locale: LocaleKey,
    /// Anchor for date windows; the current time when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_time: Option<DateTime<Utc>>,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            optional_drop_probability: DEFAULT_OPTIONAL_DROP_PROBABILITY,
            array_min_len: DEFAULT_ARRAY_MIN_LEN,
            array_max_len: DEFAULT_ARRAY_MAX_LEN,
            locale: LocaleKey::EnUs,
            reference_time: None,
        }
    }
}

impl SynthesisOptions {
    pub fn validate(&self) -> Result<(), GenerationError> {
        let probability = self.optional_drop_probability;
        if !(0.0..=1.0).contains(&probability) {
            return Err(GenerationError::InvalidOptions(format!(
                "optional_drop_probability must be within [0, 1], got {probability}"
            )));
        }
        if self.array_min_len > self.array_max_len {
            return Err(GenerationError::InvalidOptions(format!(
                "array_min_len ({}) must be <= array_max_len ({})",
                self.array_min_len, self.array_max_len
            )));
        }
        if self.array_max_len > ARRAY_LEN_CEILING {
            return Err(GenerationError::InvalidOptions(format!(
                "array_max_len must be <= {ARRAY_LEN_CEILING}"
            )));
        }
        Ok(())
    }
}

/// A field that could not be synthesized as declared and fell back to null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegradedField {
    /// Dotted path from the interface root, e.g. `User.settings.theme`.
    pub path: String,
    pub kind: String,
    pub reason: String,
}

/// Summary of a synthesis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SynthesisReport {
    pub interface: String,
    pub records_requested: u64,
    pub records_generated: u64,
    pub optional_dropped: u64,
    pub heuristic_hits: u64,
    pub fallback_count: u64,
    pub category_usage: BTreeMap<String, u64>,
    pub degraded: Vec<DegradedField>,
}

impl SynthesisReport {
    pub fn new(interface: impl Into<String>, records_requested: u64) -> Self {
        Self {
            interface: interface.into(),
            records_requested,
            ..Self::default()
        }
    }

    pub fn record_dropped(&mut self) {
        self.optional_dropped += 1;
    }

    pub fn record_heuristic(&mut self, category: &str) {
        self.heuristic_hits += 1;
        *self.category_usage.entry(category.to_string()).or_insert(0) += 1;
    }

    pub fn record_fallback(&mut self) {
        self.fallback_count += 1;
    }

    pub fn record_degraded(&mut self, field: DegradedField) {
        self.degraded.push(field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let options = SynthesisOptions::default();
        assert_eq!(options.optional_drop_probability, 0.7);
        assert_eq!((options.array_min_len, options.array_max_len), (1, 5));
        assert!(options.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_probability() {
        let options = SynthesisOptions {
            optional_drop_probability: 1.5,
            ..SynthesisOptions::default()
        };
        assert!(matches!(
            options.validate(),
            Err(GenerationError::InvalidOptions(_))
        ));

        let options = SynthesisOptions {
            optional_drop_probability: f64::NAN,
            ..SynthesisOptions::default()
        };
        assert!(options.validate().is_err());
    }

    #[test]
    fn rejects_inverted_array_bounds() {
        let options = SynthesisOptions {
            array_min_len: 4,
            array_max_len: 2,
            ..SynthesisOptions::default()
        };
        let err = options.validate().unwrap_err();
        assert!(err.to_string().contains("array_min_len (4)"));
    }

    #[test]
    fn partial_options_deserialize_over_defaults() {
        let options: SynthesisOptions =
            serde_json::from_str(r#"{ "array_max_len": 3, "locale": "pt_BR" }"#)
                .expect("parse options");
        assert_eq!(options.array_max_len, 3);
        assert_eq!(options.array_min_len, DEFAULT_ARRAY_MIN_LEN);
        assert_eq!(options.locale, LocaleKey::PtBr);
    }
}
