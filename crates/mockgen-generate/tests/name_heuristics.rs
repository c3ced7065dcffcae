use chrono::{DateTime, Duration};
use mockgen_core::PropertyInfo;
use mockgen_generate::{
    GeneratedValue, LocaleKey, SemanticCategory, SynthesisOptions, Synthesizer, classify,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const REFERENCE_MILLIS: i64 = 1_700_000_000_000;

fn synthesizer(locale: LocaleKey) -> Synthesizer {
    Synthesizer::new(SynthesisOptions {
        locale,
        reference_time: DateTime::from_timestamp_millis(REFERENCE_MILLIS),
        ..SynthesisOptions::default()
    })
    .expect("valid options")
}

fn sample(property: &PropertyInfo, times: usize) -> Vec<GeneratedValue> {
    let synthesizer = synthesizer(LocaleKey::EnUs);
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    (0..times)
        .map(|_| synthesizer.synthesize_value(property, &mut rng))
        .collect()
}

#[test]
fn rule_order_resolves_overlapping_names() {
    assert_eq!(classify("email"), Some(SemanticCategory::Email));
    assert_eq!(classify("firstName"), Some(SemanticCategory::FirstName));
    assert_eq!(classify("companyName"), Some(SemanticCategory::FullName));
    assert_eq!(classify("thumbnailUrl"), Some(SemanticCategory::ImageUrl));
    assert_eq!(classify("homepage"), Some(SemanticCategory::Url));
    assert_eq!(classify("userId"), Some(SemanticCategory::Identifier));
    assert_eq!(classify("flavor"), None);
}

#[test]
fn email_fields_look_like_emails() {
    for value in sample(&PropertyInfo::string("contactEmail"), 50) {
        let email = value.as_str().expect("text");
        let (local, domain) = email.split_once('@').expect("has @");
        assert!(!local.is_empty());
        assert!(domain.contains('.'));
    }
}

#[test]
fn url_fields_are_absolute() {
    for name in ["website", "avatar"] {
        for value in sample(&PropertyInfo::string(name), 20) {
            assert!(value.as_str().expect("text").starts_with("https://"));
        }
    }
}

#[test]
fn unmatched_text_falls_back_to_token() {
    for value in sample(&PropertyInfo::string("flavor"), 20) {
        let token = value.as_str().expect("text");
        assert_eq!(token.len(), 10);
        assert!(token.chars().all(|ch| ch.is_ascii_alphanumeric()));
    }
}

#[test]
fn numeric_hints_shape_numbers() {
    for value in sample(&PropertyInfo::number("age"), 100) {
        assert!((18..=90).contains(&value.as_i64().expect("integer age")));
    }
    for value in sample(&PropertyInfo::number("price"), 100) {
        let price = value.as_f64().expect("price");
        assert!((1.0..=1000.0).contains(&price));
        assert!(((price * 100.0).round() - price * 100.0).abs() < 1e-6);
    }
    for value in sample(&PropertyInfo::number("power"), 100) {
        let number = value.as_f64().expect("fallback number");
        assert!((1.0..=1000.0).contains(&number));
    }
}

#[test]
fn temporal_hints_pick_windows() {
    let reference = DateTime::from_timestamp_millis(REFERENCE_MILLIS).expect("valid instant");
    for value in sample(&PropertyInfo::date("expiresAt"), 50) {
        match value {
            GeneratedValue::Timestamp(at) => {
                assert!(at >= reference);
                assert!(at <= reference + Duration::days(365));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
    for value in sample(&PropertyInfo::date("publishedOn"), 50) {
        match value {
            GeneratedValue::Timestamp(at) => {
                assert!(at <= reference);
                assert!(at >= reference - Duration::days(1));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}

#[test]
fn locale_switches_fake_data_set() {
    let synthesizer = synthesizer(LocaleKey::PtBr);
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let value = synthesizer.synthesize_value(&PropertyInfo::string("city"), &mut rng);
    assert!(!value.as_str().expect("text").is_empty());
}
