use std::path::Path;

use mockgen_generate::{LocaleKey, SynthesisOptions};

use crate::CliError;

/// Synthesis options from an optional toml file, with CLI overrides on top.
///
/// Keys missing from the file keep their defaults.
pub fn resolve_options(
    config: Option<&Path>,
    locale: Option<&str>,
) -> Result<SynthesisOptions, CliError> {
    let mut options = match config {
        Some(path) => load_options(path)?,
        None => SynthesisOptions::default(),
    };

    if let Some(value) = locale {
        options.locale = LocaleKey::parse(value).ok_or_else(|| {
            CliError::InvalidConfig(format!(
                "unsupported locale '{value}' (expected en_US or pt_BR)"
            ))
        })?;
    }

    Ok(options)
}

pub fn load_options(path: &Path) -> Result<SynthesisOptions, CliError> {
    let content = std::fs::read_to_string(path)?;
    parse_options(&content)
}

fn parse_options(content: &str) -> Result<SynthesisOptions, CliError> {
    Ok(toml::from_str(content)?)
}
