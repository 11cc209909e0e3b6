/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 2/2/26
******************************************************************************/

//! Run configuration.
//!
//! Configuration mirrors the flags an interpreting application exposes:
//! template and input files, a head limit, reset-per-message, strict
//! decoding, verbose tracing, and silent display. Validation happens once at
//! startup; failures are fatal and reported with a usage message.

use fastwire_core::ConfigError;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Configuration for one decode run.
#[derive(Debug, Clone, Default)]
pub struct DriverConfig {
    template_file: Option<PathBuf>,
    input_file: Option<PathBuf>,
    limit: usize,
    reset_on_message: bool,
    strict: bool,
    verbose_decode: bool,
    silent: bool,
}

impl DriverConfig {
    /// Creates a configuration with defaults: no limit, no per-message
    /// reset, strict decoding on, quiet output.
    #[must_use]
    pub fn new() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    /// Sets the XML template registry file (required).
    #[must_use]
    pub fn with_template_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.template_file = Some(path.into());
        self
    }

    /// Sets the FAST-encoded input file (required).
    #[must_use]
    pub fn with_input_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_file = Some(path.into());
        self
    }

    /// Processes only the first `limit` messages. Zero means all.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Resets decoder state before every message.
    #[must_use]
    pub const fn with_reset_on_message(mut self, reset: bool) -> Self {
        self.reset_on_message = reset;
        self
    }

    /// Enables or disables strict conformance to the FAST standard.
    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Enables noisy decoding diagnostics.
    #[must_use]
    pub const fn with_verbose_decode(mut self, verbose: bool) -> Self {
        self.verbose_decode = verbose;
        self
    }

    /// Suppresses interpreted output (messages are still counted).
    #[must_use]
    pub const fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    /// Returns the template registry path, if configured.
    #[must_use]
    pub fn template_file(&self) -> Option<&Path> {
        self.template_file.as_deref()
    }

    /// Returns the input file path, if configured.
    #[must_use]
    pub fn input_file(&self) -> Option<&Path> {
        self.input_file.as_deref()
    }

    /// Returns the message limit (0 = all).
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Returns whether decoder state resets before each message.
    #[must_use]
    pub const fn reset_on_message(&self) -> bool {
        self.reset_on_message
    }

    /// Returns whether strict decoding rules apply.
    #[must_use]
    pub const fn strict(&self) -> bool {
        self.strict
    }

    /// Returns whether noisy decoding diagnostics are enabled.
    #[must_use]
    pub const fn verbose_decode(&self) -> bool {
        self.verbose_decode
    }

    /// Returns whether interpreted output is suppressed.
    #[must_use]
    pub const fn silent(&self) -> bool {
        self.silent
    }

    /// Validates the configuration at startup.
    ///
    /// Both files must be configured and openable for reading. The probe
    /// handles are dropped immediately; the run opens its own.
    ///
    /// # Errors
    /// Returns the first fatal `ConfigError` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let template = self
            .template_file
            .as_deref()
            .ok_or(ConfigError::MissingTemplateFile)?;
        probe_readable(template)?;
        let input = self
            .input_file
            .as_deref()
            .ok_or(ConfigError::MissingInputFile)?;
        probe_readable(input)?;
        Ok(())
    }
}

fn probe_readable(path: &Path) -> Result<(), ConfigError> {
    File::open(path)
        .map(drop)
        .map_err(|err| ConfigError::UnreadableFile {
            path: path.display().to_string(),
            reason: err.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "fastwire-config-{}-{}",
            std::process::id(),
            name
        ));
        let mut file = File::create(&path).unwrap();
        file.write_all(b"x").unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = DriverConfig::new();
        assert!(config.strict());
        assert!(!config.reset_on_message());
        assert!(!config.silent());
        assert_eq!(config.limit(), 0);
    }

    #[test]
    fn test_missing_template_is_fatal() {
        let config = DriverConfig::new();
        assert_eq!(config.validate(), Err(ConfigError::MissingTemplateFile));
    }

    #[test]
    fn test_missing_input_is_fatal() {
        let template = temp_file("templates.xml");
        let config = DriverConfig::new().with_template_file(&template);
        assert_eq!(config.validate(), Err(ConfigError::MissingInputFile));
        std::fs::remove_file(template).unwrap();
    }

    #[test]
    fn test_unreadable_file_is_fatal() {
        let template = temp_file("t.xml");
        let config = DriverConfig::new()
            .with_template_file(&template)
            .with_input_file("/nonexistent/messages.fast");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnreadableFile { .. })
        ));
        std::fs::remove_file(template).unwrap();
    }

    #[test]
    fn test_valid_configuration() {
        let template = temp_file("ok.xml");
        let input = temp_file("ok.fast");
        let config = DriverConfig::new()
            .with_template_file(&template)
            .with_input_file(&input)
            .with_limit(10)
            .with_reset_on_message(true);
        assert!(config.validate().is_ok());
        assert_eq!(config.limit(), 10);
        std::fs::remove_file(template).unwrap();
        std::fs::remove_file(input).unwrap();
    }
}
