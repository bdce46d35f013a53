use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub icon: IconConfig,
    pub titles: TitleConfig,
    #[serde(default)]
    pub seed: Vec<SeedFeature>,
}

/// Constraints applied to a candidate icon file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct IconConfig {
    /// Upper bound for the file size, inclusive
    pub max_bytes: u64,
    /// Declared media types accepted as-is
    pub media_types: Vec<String>,
    /// Filename suffixes accepted when the media type is missing or wrong
    #[serde(default)]
    pub fallback_suffixes: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TitleConfig {
    /// Minimum number of non-space characters in a title
    pub min_letters: usize,
}

/// Record loaded into the catalog at startup
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SeedFeature {
    pub code: String,
    pub english_title: String,
    pub arabic_title: String,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub active: bool,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[icon]
max_bytes = 2097152
media_types = ["image/png", "image/jpeg", "image/jpg", "image/svg+xml"]
fallback_suffixes = [".svg"]

[titles]
min_letters = 2

[[seed]]
code = "1001"
english_title = "A/C"
arabic_title = "مُكيّف"
active = false

[[seed]]
code = "1002"
english_title = "Furniture"
arabic_title = "أثاث"
active = false
"#;

/// Load the embedded default configuration
pub fn load_config() -> anyhow::Result<Config> {
    load_config_from(DEFAULT_CONFIG)
}

/// Parse configuration from a TOML document (e.g. an override kept by the host)
pub fn load_config_from(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.icon.max_bytes == 0 {
        anyhow::bail!("icon.max_bytes must be positive");
    }
    if config.titles.min_letters == 0 {
        anyhow::bail!("titles.min_letters must be positive");
    }
    Ok(config)
}

/// Load an override if one is given and valid, otherwise the embedded default
pub fn load_config_or_default(override_toml: Option<&str>) -> Config {
    if let Some(contents) = override_toml {
        match load_config_from(contents) {
            Ok(config) => {
                log::info!("Using configuration override");
                return config;
            }
            Err(e) => log::warn!("Ignoring invalid configuration override: {}", e),
        }
    }
    default_config()
}

pub fn default_config() -> Config {
    // Embedded document, checked by test_default_config_loads
    toml::from_str(DEFAULT_CONFIG).unwrap_or_else(|e| panic!("embedded config is invalid: {e}"))
}
