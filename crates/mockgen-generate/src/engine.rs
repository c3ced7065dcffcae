use std::time::Instant;

use chrono::{DateTime, Utc};
use rand::seq::IndexedRandom;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use mockgen_core::{InterfaceInfo, PropertyInfo, PropertyShape};

use crate::errors::GenerationError;
use crate::generators::primitives::{
    DEFAULT_NUMBER_MAX, DEFAULT_NUMBER_MIN, DEFAULT_NUMBER_SCALE, DEFAULT_TEXT_LEN, alphanumeric,
    decimal_in, dynamic_value,
};
use crate::generators::semantic::{TemporalCategory, classify, classify_numeric, classify_temporal};
use crate::generators::{GeneratedRecord, GeneratedValue};
use crate::model::{DegradedField, SynthesisOptions, SynthesisReport};

/// Name schema extractors give to array elements; such elements borrow the
/// array field's name for semantic hints.
pub const ELEMENT_PLACEHOLDER: &str = "element";

/// Records plus the report of the run that produced them.
#[derive(Debug, Clone)]
pub struct SynthesisResult {
    pub records: Vec<GeneratedRecord>,
    pub report: SynthesisReport,
}

/// Entry point for synthesizing records from an interface.
#[derive(Debug, Clone, Default)]
pub struct Synthesizer {
    options: SynthesisOptions,
}

impl Synthesizer {
    pub fn new(options: SynthesisOptions) -> Result<Self, GenerationError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &SynthesisOptions {
        &self.options
    }

    /// Produce `count` independent records, in request order.
    pub fn synthesize(
        &self,
        interface: &InterfaceInfo,
        count: i64,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<GeneratedRecord>, GenerationError> {
        Ok(self.synthesize_with_report(interface, count, rng)?.records)
    }

    /// Same as [`Synthesizer::synthesize_with_report`] with a `ChaCha8Rng`
    /// seeded from `seed`.
    pub fn synthesize_seeded(
        &self,
        interface: &InterfaceInfo,
        count: i64,
        seed: u64,
    ) -> Result<SynthesisResult, GenerationError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.synthesize_with_report(interface, count, &mut rng)
    }

    pub fn synthesize_with_report(
        &self,
        interface: &InterfaceInfo,
        count: i64,
        rng: &mut dyn RngCore,
    ) -> Result<SynthesisResult, GenerationError> {
        let requested = usize::try_from(count).map_err(|_| GenerationError::InvalidCount(count))?;
        let start = Instant::now();
        let reference = self.reference_time();
        let mut report = SynthesisReport::new(interface.name.clone(), requested as u64);
        let mut records = Vec::with_capacity(requested);

        info!(
            interface = %interface.name,
            count = requested,
            fields = interface.properties.len(),
            "synthesis started"
        );

        for index in 0..requested {
            let mut ctx = SynthesisContext {
                options: &self.options,
                reference,
                report: &mut report,
                rng: &mut *rng,
            };
            let record = ctx.record(&interface.name, &interface.properties);
            debug!(interface = %interface.name, index, fields = record.len(), "record synthesized");
            records.push(record);
        }

        report.records_generated = records.len() as u64;
        info!(
            interface = %interface.name,
            records = report.records_generated,
            optional_dropped = report.optional_dropped,
            degraded = report.degraded.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "synthesis completed"
        );

        Ok(SynthesisResult { records, report })
    }

    /// Value for a single field, outside of any record.
    pub fn synthesize_value(
        &self,
        property: &PropertyInfo,
        rng: &mut dyn RngCore,
    ) -> GeneratedValue {
        let mut report = SynthesisReport::default();
        let mut ctx = SynthesisContext {
            options: &self.options,
            reference: self.reference_time(),
            report: &mut report,
            rng,
        };
        ctx.value(&property.name, property, &property.name)
    }

    fn reference_time(&self) -> DateTime<Utc> {
        let reference = self.options.reference_time.unwrap_or_else(Utc::now);
        DateTime::from_timestamp_millis(reference.timestamp_millis()).unwrap_or(reference)
    }
}

struct SynthesisContext<'a> {
    options: &'a SynthesisOptions,
    reference: DateTime<Utc>,
    report: &'a mut SynthesisReport,
    rng: &'a mut dyn RngCore,
}

impl SynthesisContext<'_> {
    fn record(&mut self, path: &str, fields: &[PropertyInfo]) -> GeneratedRecord {
        let mut record = GeneratedRecord::with_capacity(fields.len());
        for field in fields {
            if field.is_optional && self.rng.random_bool(self.options.optional_drop_probability) {
                self.report.record_dropped();
                continue;
            }
            let field_path = format!("{path}.{}", field.name);
            let value = self.value(&field_path, field, &field.name);
            record.insert(field.name.clone(), value);
        }
        record
    }

    /// `hint` is the name used for semantic lookups; it differs from
    /// `property.name` for array elements and union alternatives.
    fn value(&mut self, path: &str, property: &PropertyInfo, hint: &str) -> GeneratedValue {
        if let Some(literal) = &property.literal_value {
            return GeneratedValue::Text(literal.clone());
        }

        match &property.shape {
            PropertyShape::LiteralSet { literal_values } => {
                match literal_values.choose(&mut *self.rng) {
                    Some(value) => GeneratedValue::Text(value.clone()),
                    None => self.degrade(path, property, "literal set has no values"),
                }
            }
            PropertyShape::String => self.text(hint),
            PropertyShape::Number => self.number(hint),
            PropertyShape::Boolean => GeneratedValue::Bool(self.rng.random_bool(0.5)),
            PropertyShape::Date => self.timestamp(hint),
            PropertyShape::Array { element_type: None } => GeneratedValue::Array(Vec::new()),
            PropertyShape::Array {
                element_type: Some(element),
            } => {
                let len = self
                    .rng
                    .random_range(self.options.array_min_len..=self.options.array_max_len);
                let element_hint = if element.name.is_empty() || element.name == ELEMENT_PLACEHOLDER
                {
                    hint
                } else {
                    element.name.as_str()
                };
                let element_path = format!("{path}[]");
                let items = (0..len)
                    .map(|_| self.value(&element_path, element, element_hint))
                    .collect();
                GeneratedValue::Array(items)
            }
            PropertyShape::Object { fields } => GeneratedValue::Object(self.record(path, fields)),
            PropertyShape::Union { alternatives } => match alternatives.choose(&mut *self.rng) {
                Some(alternative) => self.value(path, alternative, hint),
                None => self.degrade(path, property, "union has no alternatives"),
            },
            PropertyShape::Dynamic => dynamic_value(&mut *self.rng, self.reference),
            PropertyShape::Unresolved => {
                debug!(path, "unresolved field synthesized as null");
                GeneratedValue::Null
            }
        }
    }

    fn text(&mut self, hint: &str) -> GeneratedValue {
        match classify(hint) {
            Some(category) => {
                self.report.record_heuristic(category.as_str());
                GeneratedValue::Text(category.generate(self.options.locale, &mut *self.rng))
            }
            None => {
                self.report.record_fallback();
                GeneratedValue::Text(alphanumeric(&mut *self.rng, DEFAULT_TEXT_LEN))
            }
        }
    }

    fn number(&mut self, hint: &str) -> GeneratedValue {
        match classify_numeric(hint) {
            Some(category) => {
                self.report.record_heuristic(category.as_str());
                category.generate(&mut *self.rng)
            }
            None => {
                self.report.record_fallback();
                GeneratedValue::Float(decimal_in(
                    &mut *self.rng,
                    DEFAULT_NUMBER_MIN,
                    DEFAULT_NUMBER_MAX,
                    DEFAULT_NUMBER_SCALE,
                ))
            }
        }
    }

    fn timestamp(&mut self, hint: &str) -> GeneratedValue {
        let category = match classify_temporal(hint) {
            Some(category) => {
                self.report.record_heuristic(category.as_str());
                category
            }
            None => {
                self.report.record_fallback();
                TemporalCategory::Recent
            }
        };
        GeneratedValue::Timestamp(category.generate(self.reference, &mut *self.rng))
    }

    fn degrade(&mut self, path: &str, property: &PropertyInfo, reason: &str) -> GeneratedValue {
        warn!(path, kind = %property.kind(), reason, "field degraded to null");
        self.report.record_degraded(DegradedField {
            path: path.to_string(),
            kind: property.kind().to_string(),
            reason: reason.to_string(),
        });
        GeneratedValue::Null
    }
}
