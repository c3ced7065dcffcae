pub mod adapter;
pub mod locales;

pub use adapter::{FakeRsAdapter, FakerId};
pub use locales::LocaleKey;
