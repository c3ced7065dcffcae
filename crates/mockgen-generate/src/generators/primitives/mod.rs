use std::ops::RangeInclusive;

use chrono::{DateTime, Duration, Utc};
use rand::{Rng, RngCore};

use crate::generators::{GeneratedRecord, GeneratedValue};

pub const DEFAULT_TEXT_LEN: usize = 10;
pub const DEFAULT_NUMBER_MIN: f64 = 1.0;
pub const DEFAULT_NUMBER_MAX: f64 = 1000.0;
pub const DEFAULT_NUMBER_SCALE: i32 = 2;
pub const DYNAMIC_INT_MAX: i64 = 1_000_000;
const DEFAULT_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Random alphanumeric token of `len` characters.
pub fn alphanumeric(rng: &mut dyn RngCore, len: usize) -> String {
    (0..len)
        .map(|_| char::from(DEFAULT_CHARSET[rng.random_range(0..DEFAULT_CHARSET.len())]))
        .collect()
}

pub fn int_in(rng: &mut dyn RngCore, range: RangeInclusive<i64>) -> i64 {
    rng.random_range(range)
}

/// Uniform value in `[min, max]`, rounded to `scale` decimal places.
pub fn decimal_in(rng: &mut dyn RngCore, min: f64, max: f64, scale: i32) -> f64 {
    let value = rng.random_range(min..=max);
    let factor = 10_f64.powi(scale);
    let rounded = (value * factor).round() / factor;
    rounded.clamp(min, max)
}

/// Uniform instant in `[reference - back, reference + ahead]`, at millisecond
/// resolution.
pub fn timestamp_around(
    rng: &mut dyn RngCore,
    reference: DateTime<Utc>,
    back: Duration,
    ahead: Duration,
) -> DateTime<Utc> {
    let low = -back.num_milliseconds();
    let high = ahead.num_milliseconds();
    let offset = if low < high {
        rng.random_range(low..=high)
    } else {
        low
    };
    reference + Duration::milliseconds(offset)
}

/// Value for an intentionally untyped field.
pub fn dynamic_value(rng: &mut dyn RngCore, reference: DateTime<Utc>) -> GeneratedValue {
    match rng.random_range(0..6) {
        0 => GeneratedValue::Text(alphanumeric(rng, DEFAULT_TEXT_LEN)),
        1 => GeneratedValue::Int(int_in(rng, 0..=DYNAMIC_INT_MAX)),
        2 => GeneratedValue::Bool(rng.random_bool(0.5)),
        3 => GeneratedValue::Timestamp(timestamp_around(
            rng,
            reference,
            Duration::days(1),
            Duration::zero(),
        )),
        4 => GeneratedValue::Object(GeneratedRecord::new()),
        _ => GeneratedValue::Array(Vec::new()),
    }
}
