use contracts::shared::config::{load_config_or_default, Config};
use web_sys::window;

/// localStorage key holding an optional TOML configuration override
pub const CONFIG_STORAGE_KEY: &str = "features_admin.config";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Get the configuration override from localStorage
fn get_config_override() -> Option<String> {
    get_local_storage()?.get_item(CONFIG_STORAGE_KEY).ok()?
}

/// Load the app configuration, preferring a valid override over the embedded default
pub fn load_app_config() -> Config {
    let config = load_config_or_default(get_config_override().as_deref());
    log::info!(
        "Configuration loaded: {} seed features, icon limit {} bytes",
        config.seed.len(),
        config.icon.max_bytes
    );
    config
}
