//! Load a project `.env` and expose typed service settings for Zeenat.
//!
//! Env keys are applied with priority **existing env > .env** (the `dotenv`
//! crate never overwrites variables that are already set). Call
//! [`load_and_apply`] once at startup, then read a [`Settings`] snapshot with
//! [`Settings::from_env`].

use std::path::Path;

use thiserror::Error;

/// API key for the hosted generative model.
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
/// Model id override (defaults to [`Settings::DEFAULT_MODEL`]).
pub const ENV_MODEL: &str = "ZEENAT_MODEL";
/// Base URL override for the generative language service.
pub const ENV_BASE_URL: &str = "GEMINI_BASE_URL";
/// Default UI language tag: `en`, `ur`, or `roman`.
pub const ENV_LANGUAGE: &str = "ZEENAT_LANG";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("read .env: {0}")]
    DotenvRead(#[from] dotenv::Error),
}

/// Applies a project `.env` to the process environment, keeping any variables
/// that are already set.
///
/// * `override_dir`: if `Some`, look for `.env` in this directory instead of
///   `std::env::current_dir()`. A missing file is not an error.
pub fn load_and_apply(override_dir: Option<&Path>) -> Result<(), LoadError> {
    let dir = match override_dir {
        Some(d) => d.to_path_buf(),
        None => match std::env::current_dir() {
            Ok(d) => d,
            Err(_) => return Ok(()),
        },
    };
    let path = dir.join(".env");
    if path.is_file() {
        dotenv::from_path(&path)?;
    }
    Ok(())
}

/// Snapshot of the service settings Zeenat reads from the environment.
///
/// `api_key` stays `None` when unset so the caller decides whether a missing
/// key is fatal (the real client) or irrelevant (tests with a mock).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    /// Raw language tag (`en` / `ur` / `roman`); parsed by the consumer.
    pub default_language: String,
}

impl Settings {
    pub const DEFAULT_MODEL: &'static str = "gemini-3-flash-preview";
    pub const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com";
    pub const DEFAULT_LANGUAGE: &'static str = "ur";

    /// Reads the current process environment into a settings snapshot.
    pub fn from_env() -> Self {
        let nonempty = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());
        Self {
            api_key: nonempty(ENV_API_KEY),
            model: nonempty(ENV_MODEL).unwrap_or_else(|| Self::DEFAULT_MODEL.to_string()),
            base_url: nonempty(ENV_BASE_URL).unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string()),
            default_language: nonempty(ENV_LANGUAGE)
                .unwrap_or_else(|| Self::DEFAULT_LANGUAGE.to_string()),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: Self::DEFAULT_MODEL.to_string(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            default_language: Self::DEFAULT_LANGUAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn restore_var(key: &str, prev: Option<String>) {
        match prev {
            Some(v) => env::set_var(key, v),
            None => env::remove_var(key),
        }
    }

    #[test]
    fn existing_env_wins_over_dotenv() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env"), "ZEENAT_CFG_TEST_A=from_dotenv\n").unwrap();

        env::set_var("ZEENAT_CFG_TEST_A", "from_env");
        load_and_apply(Some(dir.path())).unwrap();
        assert_eq!(env::var("ZEENAT_CFG_TEST_A").as_deref(), Ok("from_env"));
        env::remove_var("ZEENAT_CFG_TEST_A");
    }

    #[test]
    fn dotenv_applied_when_unset() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env"), "ZEENAT_CFG_TEST_B=from_dotenv\n").unwrap();

        env::remove_var("ZEENAT_CFG_TEST_B");
        load_and_apply(Some(dir.path())).unwrap();
        assert_eq!(env::var("ZEENAT_CFG_TEST_B").as_deref(), Ok("from_dotenv"));
        env::remove_var("ZEENAT_CFG_TEST_B");
    }

    #[test]
    fn missing_dotenv_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_and_apply(Some(dir.path())).is_ok());
    }

    // One test owns the shared settings keys; cargo runs tests in parallel
    // and the process environment is global.
    #[test]
    fn settings_defaults_overrides_and_blanks() {
        let prev_model = env::var(ENV_MODEL).ok();
        let prev_base = env::var(ENV_BASE_URL).ok();
        let prev_lang = env::var(ENV_LANGUAGE).ok();
        let prev_key = env::var(ENV_API_KEY).ok();
        for key in [ENV_MODEL, ENV_BASE_URL, ENV_LANGUAGE, ENV_API_KEY] {
            env::remove_var(key);
        }

        let settings = Settings::from_env();
        assert_eq!(settings, Settings::default());
        assert!(settings.api_key.is_none());

        env::set_var(ENV_MODEL, "gemini-custom");
        env::set_var(ENV_LANGUAGE, "en");
        let settings = Settings::from_env();
        assert_eq!(settings.model, "gemini-custom");
        assert_eq!(settings.default_language, "en");

        env::set_var(ENV_MODEL, "   ");
        let settings = Settings::from_env();
        assert_eq!(settings.model, Settings::DEFAULT_MODEL);

        restore_var(ENV_MODEL, prev_model);
        restore_var(ENV_BASE_URL, prev_base);
        restore_var(ENV_LANGUAGE, prev_lang);
        restore_var(ENV_API_KEY, prev_key);
    }
}
