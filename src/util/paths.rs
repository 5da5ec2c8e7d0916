use std::path::PathBuf;
use std::sync::RwLock;

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "fileman.toml";

/// Environment variable naming a config file
pub const CONFIG_ENV_VAR: &str = "FILEMAN_CONFIG";

// Global config file override (for --config flag and tests)
static CONFIG_FILE_OVERRIDE: RwLock<Option<PathBuf>> = RwLock::new(None);

/// Set config file override (used by --config flag and tests)
pub fn set_config_file_override(path: Option<PathBuf>) {
    let mut override_path = CONFIG_FILE_OVERRIDE
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *override_path = path;
}

/// Get current config file override
pub fn get_config_file_override() -> Option<PathBuf> {
    CONFIG_FILE_OVERRIDE
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

/// Find the config file by searching in priority order:
/// 1. Override from --config flag or set_config_file_override() (always wins, even if missing)
/// 2. Environment variable FILEMAN_CONFIG
/// 3. `./fileman.toml` in the current working directory
/// 4. User config directory (`~/.config/fileman/settings.toml` on Unix)
///
/// Returns `None` when nothing is found; callers fall back to defaults.
///
/// `main` calls this before the global logger exists, so the `debug!`
/// lines only show up in tests or library use. A `FILEMAN_CONFIG` that
/// points nowhere is reported on stderr instead.
pub fn find_config_file() -> Option<PathBuf> {
    if let Some(override_path) = get_config_file_override() {
        tracing::debug!("Using config file override: {:?}", override_path);
        return Some(override_path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        let env_config = PathBuf::from(env_path);
        if env_config.exists() {
            tracing::debug!("Found config file from {}: {:?}", CONFIG_ENV_VAR, env_config);
            return Some(env_config);
        }
        // The logger is not installed yet, so tell the user directly
        eprintln!("Warning: {} points to a missing file: {:?}", CONFIG_ENV_VAR, env_config);
    }

    if let Ok(cwd) = std::env::current_dir() {
        let cwd_config = cwd.join(LOCAL_CONFIG_FILE);
        if cwd_config.exists() {
            tracing::debug!("Found config file at: {:?}", cwd_config);
            return Some(cwd_config);
        }
    }

    if let Some(user_config) = get_user_config_file() {
        if user_config.exists() {
            tracing::debug!("Found config file at: {:?}", user_config);
            return Some(user_config);
        }
    }

    None
}

/// Platform-specific user config file
/// - Windows: `%APPDATA%\fileman\settings.toml`
/// - Unix: `~/.config/fileman/settings.toml`
fn get_user_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("fileman").join("settings.toml"))
}
