use lipi_engine::settings::{self, parse_settings_toml, Settings};

use super::{die, read_file, CliError};

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let s = die!(validate_file(file), "Error: {}");
    println!("OK: {}", summary(&s));
}

/// Install a settings file as the process-wide configuration.
pub fn load_settings(file: &str) {
    die!(install_file(file), "Error loading settings: {}");
}

pub fn validate_file(file: &str) -> Result<Settings, CliError> {
    let content = read_file(file)?;
    Ok(parse_settings_toml(&content)?)
}

fn install_file(file: &str) -> Result<(), CliError> {
    let content = read_file(file)?;
    Ok(settings::init_custom(content)?)
}

pub fn summary(s: &Settings) -> String {
    format!(
        "script.bare_final_consonant={}, script.hiatus_diaeresis={}, \
         holding.word_boundary_lookback={}, pause.om={}, normalize.tone_variants={}",
        s.script.bare_final_consonant,
        s.script.hiatus_diaeresis,
        s.holding.word_boundary_lookback,
        s.pause.om,
        s.normalize.tone_variant_count()
    )
}
