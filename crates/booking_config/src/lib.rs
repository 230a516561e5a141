use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;
pub mod models;
pub use models::*;

/// Loads the configuration from `config/default`, `config/{RUN_ENV}` and the
/// environment, in that order of precedence (later wins).
///
/// The config directory defaults to `./config` and can be moved with
/// `CONFIG_DIR`. Environment overrides use the `PREFIX` (default `BOOKING`)
/// with `__` as separator, e.g. `BOOKING__BOOKING__DEFAULT_TIMEZONE=Europe/Zurich`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let config_dir = env::var("CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config"));
    load_config_from(&config_dir)
}

/// Same as [`load_config`] but with an explicit config directory.
pub fn load_config_from(config_dir: &Path) -> Result<AppConfig, ConfigError> {
    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env::var("PREFIX").unwrap_or_else(|_| "BOOKING".to_string());

    let default_path = config_dir.join("default");
    let env_path = config_dir.join(&run_env);

    debug!(
        "Loading config from {} and {}",
        default_path.display(),
        env_path.display()
    );

    let builder = Config::builder()
        .add_source(File::with_name(path_str(&default_path)?).required(false))
        .add_source(File::with_name(path_str(&env_path)?).required(false))
        .add_source(Environment::with_prefix(&prefix).separator("__"));

    builder.build()?.try_deserialize()
}

fn path_str(path: &Path) -> Result<&str, ConfigError> {
    path.to_str()
        .ok_or_else(|| ConfigError::Message(format!("non-utf8 config path: {}", path.display())))
}

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

/// Returns the process-wide configuration, loading it on first use.
pub fn get_config() -> Result<&'static AppConfig, ConfigError> {
    CONFIG.get_or_try_init(load_config)
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// The file name comes from `DOTENV_OVERRIDE`, then from a first command line
/// argument starting with `.env`, and defaults to `.env`. A missing file is
/// not an error. Returns the path that was used.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path_override = env::var("DOTENV_OVERRIDE").ok();
    let dotenv_path_arg = env::args().nth(1).filter(|s| s.starts_with(".env"));

    let dotenv_path = dotenv_path_override
        .or(dotenv_path_arg)
        .unwrap_or_else(|| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_config_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            r#"
[booking]
session_id = "session-1"
user_id = "host-1"
default_timezone = "Europe/Zurich"

[logging]
level = "debug"

[timezones]
"Europe/Zurich" = "CET"
"#,
        )
        .unwrap();

        let config = load_config_from(dir.path()).unwrap();
        assert_eq!(config.booking.session_id, "session-1");
        assert_eq!(config.booking.user_id, "host-1");
        assert_eq!(config.booking.default_timezone, "Europe/Zurich");
        assert_eq!(config.booking.clock_month_offset, 0);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.timezones.get("Europe/Zurich").map(String::as_str), Some("CET"));
        assert!(config.fixture_path.is_none());
    }

    #[test]
    fn test_defaults_when_sections_are_missing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[booking]\nsession_id = \"s\"\nuser_id = \"u\"\n",
        )
        .unwrap();

        let config = load_config_from(dir.path()).unwrap();
        assert_eq!(config.booking.default_timezone, "UTC");
        assert_eq!(config.logging.level, "info");
        assert!(config.timezones.is_empty());
    }

    // Only test that touches CONFIG_DIR, since get_config caches for the process.
    #[test]
    fn test_get_config_loads_once_from_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[booking]\nsession_id = \"cached\"\nuser_id = \"host\"\n",
        )
        .unwrap();
        env::set_var("CONFIG_DIR", dir.path());

        let first = get_config().unwrap();
        let second = get_config().unwrap();

        assert_eq!(first.booking.session_id, "cached");
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_missing_booking_section_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.toml"), "[logging]\nlevel = \"warn\"\n").unwrap();

        assert!(load_config_from(dir.path()).is_err());
    }
}
