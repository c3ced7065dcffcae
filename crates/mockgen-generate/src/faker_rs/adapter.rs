use fake::Fake;
use fake::faker::address::raw::{
    BuildingNumber, CityName, CountryName, StateName, StreetName, ZipCode,
};
use fake::faker::color::raw::HexColor;
use fake::faker::internet::raw::{DomainSuffix, SafeEmail, Username};
use fake::faker::lorem::raw::{Paragraph, Sentence, Word};
use fake::faker::name::raw::{FirstName, LastName, Name};
use fake::faker::phone_number::raw::PhoneNumber;
use fake::locales::{EN, PT_BR};
use rand::RngCore;

use crate::faker_rs::locales::LocaleKey;

const TITLE_WORDS: std::ops::Range<usize> = 3..8;
const PARAGRAPH_SENTENCES: std::ops::Range<usize> = 2..5;

/// `fake` generators the semantic layer draws from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FakerId {
    FullName,
    FirstName,
    LastName,
    Username,
    SafeEmail,
    PhoneNumber,
    StreetName,
    BuildingNumber,
    CityName,
    StateName,
    ZipCode,
    CountryName,
    DomainSuffix,
    HexColor,
    Word,
    Sentence,
    Paragraph,
}

pub struct FakeRsAdapter;

/// `FakerId` dispatch for one concrete `fake` locale. Raw fakers are
/// implemented per locale type, not for any `L: Data`.
macro_rules! fake_text_for {
    ($locale:expr, $id:expr, $rng:expr) => {
        match $id {
            FakerId::FullName => Name($locale).fake_with_rng($rng),
            FakerId::FirstName => FirstName($locale).fake_with_rng($rng),
            FakerId::LastName => LastName($locale).fake_with_rng($rng),
            FakerId::Username => Username($locale).fake_with_rng($rng),
            FakerId::SafeEmail => SafeEmail($locale).fake_with_rng($rng),
            FakerId::PhoneNumber => PhoneNumber($locale).fake_with_rng($rng),
            FakerId::StreetName => StreetName($locale).fake_with_rng($rng),
            FakerId::BuildingNumber => BuildingNumber($locale).fake_with_rng($rng),
            FakerId::CityName => CityName($locale).fake_with_rng($rng),
            FakerId::StateName => StateName($locale).fake_with_rng($rng),
            FakerId::ZipCode => ZipCode($locale).fake_with_rng($rng),
            FakerId::CountryName => CountryName($locale).fake_with_rng($rng),
            FakerId::DomainSuffix => DomainSuffix($locale).fake_with_rng($rng),
            FakerId::HexColor => HexColor($locale).fake_with_rng($rng),
            FakerId::Word => Word($locale).fake_with_rng($rng),
            FakerId::Sentence => Sentence($locale, TITLE_WORDS).fake_with_rng($rng),
            FakerId::Paragraph => Paragraph($locale, PARAGRAPH_SENTENCES).fake_with_rng($rng),
        }
    };
}

impl FakeRsAdapter {
    pub fn text(id: FakerId, locale: LocaleKey, rng: &mut dyn RngCore) -> String {
        match locale {
            LocaleKey::EnUs => fake_text_for!(EN, id, rng),
            LocaleKey::PtBr => fake_text_for!(PT_BR, id, rng),
        }
    }
}
