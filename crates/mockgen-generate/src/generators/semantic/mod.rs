//! Name-derived hints for value synthesis.
//!
//! Each table is an ordered list of `(substring, category)` pairs matched
//! against the lower-cased field name; the first pair whose substring occurs
//! in the name wins. Specific rules sit above generic ones (`first` above
//! `name`, `image` above `url`, `average` above `age`).

use chrono::{DateTime, Duration, Utc};
use rand::RngCore;

use crate::faker_rs::{FakeRsAdapter, FakerId, LocaleKey};
use crate::generators::GeneratedValue;
use crate::generators::primitives::{alphanumeric, decimal_in, int_in, timestamp_around};

/// Semantic category for text fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SemanticCategory {
    Email,
    FullName,
    FirstName,
    LastName,
    Username,
    Phone,
    StreetAddress,
    City,
    State,
    PostalCode,
    Country,
    Url,
    ImageUrl,
    Color,
    Description,
    Title,
    Identifier,
    Uuid,
    Sku,
    Word,
}

/// Semantic category for numeric fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumericCategory {
    Identifier,
    Age,
    Price,
    Rating,
    Year,
    Quantity,
    Count,
    Dimension,
    Weight,
}

/// Semantic category for date fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TemporalCategory {
    BirthDate,
    Past,
    Recent,
    Future,
}

pub const TEXT_RULES: &[(&str, SemanticCategory)] = &[
    ("email", SemanticCategory::Email),
    ("uuid", SemanticCategory::Uuid),
    ("guid", SemanticCategory::Uuid),
    ("first", SemanticCategory::FirstName),
    ("given", SemanticCategory::FirstName),
    ("last", SemanticCategory::LastName),
    ("surname", SemanticCategory::LastName),
    ("family", SemanticCategory::LastName),
    ("username", SemanticCategory::Username),
    ("user_name", SemanticCategory::Username),
    ("nickname", SemanticCategory::Username),
    ("login", SemanticCategory::Username),
    ("name", SemanticCategory::FullName),
    ("phone", SemanticCategory::Phone),
    ("mobile", SemanticCategory::Phone),
    ("address", SemanticCategory::StreetAddress),
    ("street", SemanticCategory::StreetAddress),
    ("city", SemanticCategory::City),
    ("state", SemanticCategory::State),
    ("region", SemanticCategory::State),
    ("province", SemanticCategory::State),
    ("zip", SemanticCategory::PostalCode),
    ("postal", SemanticCategory::PostalCode),
    ("postcode", SemanticCategory::PostalCode),
    ("country", SemanticCategory::Country),
    ("image", SemanticCategory::ImageUrl),
    ("avatar", SemanticCategory::ImageUrl),
    ("photo", SemanticCategory::ImageUrl),
    ("picture", SemanticCategory::ImageUrl),
    ("thumbnail", SemanticCategory::ImageUrl),
    ("url", SemanticCategory::Url),
    ("website", SemanticCategory::Url),
    ("homepage", SemanticCategory::Url),
    ("link", SemanticCategory::Url),
    ("color", SemanticCategory::Color),
    ("colour", SemanticCategory::Color),
    ("description", SemanticCategory::Description),
    ("summary", SemanticCategory::Description),
    ("comment", SemanticCategory::Description),
    ("bio", SemanticCategory::Description),
    ("title", SemanticCategory::Title),
    ("headline", SemanticCategory::Title),
    ("sku", SemanticCategory::Sku),
    ("tag", SemanticCategory::Word),
    ("keyword", SemanticCategory::Word),
    ("categor", SemanticCategory::Word),
    ("material", SemanticCategory::Word),
    ("id", SemanticCategory::Identifier),
];

pub const NUMERIC_RULES: &[(&str, NumericCategory)] = &[
    ("price", NumericCategory::Price),
    ("amount", NumericCategory::Price),
    ("cost", NumericCategory::Price),
    ("rating", NumericCategory::Rating),
    ("average", NumericCategory::Rating),
    ("score", NumericCategory::Rating),
    ("width", NumericCategory::Dimension),
    ("height", NumericCategory::Dimension),
    ("depth", NumericCategory::Dimension),
    ("length", NumericCategory::Dimension),
    ("weight", NumericCategory::Weight),
    ("year", NumericCategory::Year),
    ("stock", NumericCategory::Quantity),
    ("quantity", NumericCategory::Quantity),
    ("qty", NumericCategory::Quantity),
    ("id", NumericCategory::Identifier),
    ("count", NumericCategory::Count),
    ("age", NumericCategory::Age),
];

pub const TEMPORAL_RULES: &[(&str, TemporalCategory)] = &[
    ("birth", TemporalCategory::BirthDate),
    ("dob", TemporalCategory::BirthDate),
    ("created", TemporalCategory::Past),
    ("updated", TemporalCategory::Recent),
    ("modified", TemporalCategory::Recent),
    ("future", TemporalCategory::Future),
    ("due", TemporalCategory::Future),
    ("expire", TemporalCategory::Future),
    ("deadline", TemporalCategory::Future),
    ("time", TemporalCategory::Recent),
    ("login", TemporalCategory::Recent),
];

pub const ID_MIN: i64 = 1;
pub const ID_MAX: i64 = 10_000;
pub const AGE_MIN: i64 = 18;
pub const AGE_MAX: i64 = 90;
pub const PRICE_MIN: f64 = 1.0;
pub const PRICE_MAX: f64 = 1000.0;
pub const RATING_MIN: f64 = 1.0;
pub const RATING_MAX: f64 = 5.0;
pub const YEAR_MIN: i64 = 1970;
pub const YEAR_MAX: i64 = 2023;
pub const QUANTITY_MIN: i64 = 0;
pub const QUANTITY_MAX: i64 = 100;
pub const COUNT_MIN: i64 = 1;
pub const COUNT_MAX: i64 = 500;
pub const DIMENSION_MIN: f64 = 1.0;
pub const DIMENSION_MAX: f64 = 100.0;
pub const WEIGHT_MIN: f64 = 0.1;
pub const WEIGHT_MAX: f64 = 20.0;

pub const BIRTH_MIN_AGE_DAYS: i64 = 18 * 365;
pub const BIRTH_MAX_AGE_DAYS: i64 = 80 * 365;
pub const PAST_WINDOW_DAYS: i64 = 365;
pub const RECENT_WINDOW_DAYS: i64 = 1;
pub const FUTURE_WINDOW_DAYS: i64 = 365;

const IDENTIFIER_LEN: usize = 10;
const SKU_LEN: usize = 8;
const IMAGE_SEED_LEN: usize = 8;

fn first_match<C: Copy>(rules: &[(&str, C)], field_name: &str) -> Option<C> {
    let name = field_name.to_lowercase();
    rules
        .iter()
        .find(|(needle, _)| name.contains(*needle))
        .map(|(_, category)| *category)
}

/// Text category for a field name, if any rule applies.
pub fn classify(field_name: &str) -> Option<SemanticCategory> {
    first_match(TEXT_RULES, field_name)
}

pub fn classify_numeric(field_name: &str) -> Option<NumericCategory> {
    first_match(NUMERIC_RULES, field_name)
}

pub fn classify_temporal(field_name: &str) -> Option<TemporalCategory> {
    first_match(TEMPORAL_RULES, field_name)
}

impl SemanticCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "text.email",
            Self::FullName => "text.full_name",
            Self::FirstName => "text.first_name",
            Self::LastName => "text.last_name",
            Self::Username => "text.username",
            Self::Phone => "text.phone",
            Self::StreetAddress => "text.street_address",
            Self::City => "text.city",
            Self::State => "text.state",
            Self::PostalCode => "text.postal_code",
            Self::Country => "text.country",
            Self::Url => "text.url",
            Self::ImageUrl => "text.image_url",
            Self::Color => "text.color",
            Self::Description => "text.description",
            Self::Title => "text.title",
            Self::Identifier => "text.identifier",
            Self::Uuid => "text.uuid",
            Self::Sku => "text.sku",
            Self::Word => "text.word",
        }
    }

    /// Plausible non-empty text for this category.
    pub fn generate(self, locale: LocaleKey, rng: &mut dyn RngCore) -> String {
        match self {
            Self::Email => FakeRsAdapter::text(FakerId::SafeEmail, locale, rng),
            Self::FullName => FakeRsAdapter::text(FakerId::FullName, locale, rng),
            Self::FirstName => FakeRsAdapter::text(FakerId::FirstName, locale, rng),
            Self::LastName => FakeRsAdapter::text(FakerId::LastName, locale, rng),
            Self::Username => FakeRsAdapter::text(FakerId::Username, locale, rng),
            Self::Phone => FakeRsAdapter::text(FakerId::PhoneNumber, locale, rng),
            Self::StreetAddress => {
                let number = FakeRsAdapter::text(FakerId::BuildingNumber, locale, rng);
                let street = FakeRsAdapter::text(FakerId::StreetName, locale, rng);
                format!("{number} {street}")
            }
            Self::City => FakeRsAdapter::text(FakerId::CityName, locale, rng),
            Self::State => FakeRsAdapter::text(FakerId::StateName, locale, rng),
            Self::PostalCode => FakeRsAdapter::text(FakerId::ZipCode, locale, rng),
            Self::Country => FakeRsAdapter::text(FakerId::CountryName, locale, rng),
            Self::Url => {
                let host = slugify(&FakeRsAdapter::text(FakerId::Word, locale, rng));
                let host = if host.is_empty() {
                    alphanumeric(rng, IDENTIFIER_LEN).to_lowercase()
                } else {
                    host
                };
                let suffix = FakeRsAdapter::text(FakerId::DomainSuffix, locale, rng);
                format!("https://www.{host}.{suffix}")
            }
            Self::ImageUrl => {
                let seed = alphanumeric(rng, IMAGE_SEED_LEN);
                format!("https://picsum.photos/seed/{seed}/640/480")
            }
            Self::Color => FakeRsAdapter::text(FakerId::HexColor, locale, rng),
            Self::Description => FakeRsAdapter::text(FakerId::Paragraph, locale, rng),
            Self::Title => FakeRsAdapter::text(FakerId::Sentence, locale, rng),
            Self::Identifier => alphanumeric(rng, IDENTIFIER_LEN),
            Self::Uuid => random_uuid(rng),
            Self::Sku => alphanumeric(rng, SKU_LEN).to_uppercase(),
            Self::Word => FakeRsAdapter::text(FakerId::Word, locale, rng),
        }
    }
}

impl NumericCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Identifier => "number.identifier",
            Self::Age => "number.age",
            Self::Price => "number.price",
            Self::Rating => "number.rating",
            Self::Year => "number.year",
            Self::Quantity => "number.quantity",
            Self::Count => "number.count",
            Self::Dimension => "number.dimension",
            Self::Weight => "number.weight",
        }
    }

    pub fn generate(self, rng: &mut dyn RngCore) -> GeneratedValue {
        match self {
            Self::Identifier => GeneratedValue::Int(int_in(rng, ID_MIN..=ID_MAX)),
            Self::Age => GeneratedValue::Int(int_in(rng, AGE_MIN..=AGE_MAX)),
            Self::Price => GeneratedValue::Float(decimal_in(rng, PRICE_MIN, PRICE_MAX, 2)),
            Self::Rating => GeneratedValue::Float(decimal_in(rng, RATING_MIN, RATING_MAX, 1)),
            Self::Year => GeneratedValue::Int(int_in(rng, YEAR_MIN..=YEAR_MAX)),
            Self::Quantity => GeneratedValue::Int(int_in(rng, QUANTITY_MIN..=QUANTITY_MAX)),
            Self::Count => GeneratedValue::Int(int_in(rng, COUNT_MIN..=COUNT_MAX)),
            Self::Dimension => {
                GeneratedValue::Float(decimal_in(rng, DIMENSION_MIN, DIMENSION_MAX, 1))
            }
            Self::Weight => GeneratedValue::Float(decimal_in(rng, WEIGHT_MIN, WEIGHT_MAX, 2)),
        }
    }
}

impl TemporalCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BirthDate => "date.birth",
            Self::Past => "date.past",
            Self::Recent => "date.recent",
            Self::Future => "date.future",
        }
    }

    pub fn generate(self, reference: DateTime<Utc>, rng: &mut dyn RngCore) -> DateTime<Utc> {
        match self {
            Self::BirthDate => timestamp_around(
                rng,
                reference - Duration::days(BIRTH_MIN_AGE_DAYS),
                Duration::days(BIRTH_MAX_AGE_DAYS - BIRTH_MIN_AGE_DAYS),
                Duration::zero(),
            ),
            Self::Past => timestamp_around(
                rng,
                reference,
                Duration::days(PAST_WINDOW_DAYS),
                Duration::zero(),
            ),
            Self::Recent => timestamp_around(
                rng,
                reference,
                Duration::days(RECENT_WINDOW_DAYS),
                Duration::zero(),
            ),
            Self::Future => timestamp_around(
                rng,
                reference,
                Duration::zero(),
                Duration::days(FUTURE_WINDOW_DAYS),
            ),
        }
    }
}

fn random_uuid(rng: &mut dyn RngCore) -> String {
    let mut bytes = [0_u8; 16];
    rng.fill_bytes(&mut bytes);
    uuid::Builder::from_random_bytes(bytes)
        .into_uuid()
        .to_string()
}

fn slugify(value: &str) -> String {
    value
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .flat_map(|ch| ch.to_lowercase())
        .collect()
}
