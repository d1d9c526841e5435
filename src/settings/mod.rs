//! Layered settings for the search core.
//!
//! Settings combine default file locations, an optional explicit file, and
//! `DISCOVERY_SEARCH`-prefixed environment variables, then validate into an
//! immutable [`SearchSettings`] that embedders inject into the control.
//! Nothing in the core reads configuration ambiently.

mod raw;
mod resolved;
mod sources;

use std::path::Path;

use anyhow::{Result, anyhow};

use raw::RawSettings;
pub use resolved::{DisplaySettings, SearchSettings, SourceDisplay};

/// Load settings from files and the environment.
///
/// `explicit` forces an additional required configuration file on top of the
/// default locations.
pub fn load(explicit: Option<&Path>) -> Result<SearchSettings> {
    let builder = sources::build_config(explicit)?;
    let raw: RawSettings = builder
        .try_deserialize()
        .map_err(|err| anyhow!("failed to deserialize search settings: {err}"))?;
    raw.resolve()
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::time::Duration;

    use super::*;
    use crate::types::ResourceType;

    #[test]
    fn explicit_file_round_trips() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(
            file,
            "[search]\ndebounce_ms = 120\n\n[resources.feature]\nenabled = false\n"
        )
        .expect("write settings");

        let settings = load(Some(file.path())).expect("settings should load");
        assert_eq!(settings.debounce, Duration::from_millis(120));
        assert!(!settings.is_enabled(ResourceType::Feature));
        assert!(settings.is_enabled(ResourceType::Table));
    }

    #[test]
    fn environment_variables_override_file_values() {
        const ENV_KEY: &str = "DISCOVERY_SEARCH_SEARCH__MAX_SUGGESTIONS";

        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[search]\ndebounce_ms = 150\nmax_suggestions = 2\n")
            .expect("write settings");

        // Environment variables are process-global: no other test reads
        // max_suggestions through load(), and the override is removed before
        // any assertion can bail out.
        unsafe { std::env::set_var(ENV_KEY, "5") };
        let loaded = load(Some(file.path()));
        unsafe { std::env::remove_var(ENV_KEY) };

        let settings = loaded.expect("settings should load");
        assert_eq!(settings.max_suggestions, 5);
        assert_eq!(settings.debounce, Duration::from_millis(150));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("absent.toml");
        assert!(load(Some(&missing)).is_err());
    }
}
