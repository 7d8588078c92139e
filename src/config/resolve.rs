//! End-to-end option resolution.
//!
//! Runs, strictly in order: pre-scan of the raw tokens, clap parse, config
//! file selection and load, precedence merge, then message assembly.

use super::loader::{default_config_location, load_config_file};
use super::merge::merge_config;
use super::prescan::scan_used_flags;
use crate::cli::input::{InputSource, assemble_message};
use crate::cli::{Flags, parse_flags};
use crate::error::{CoercionError, ResolveResult};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::debug;

/// Outcome of a successful resolution.
#[derive(Debug, Clone)]
pub struct Resolved {
    /// Final option values.
    pub options: Flags,
    /// Config file that was applied, if any.
    pub config_path: Option<PathBuf>,
    /// Config values that could not be converted; their fields kept the
    /// command-line or default value.
    pub coercion_failures: Vec<CoercionError>,
}

/// One-shot resolver for a single invocation.
#[derive(Debug)]
pub struct Resolver {
    debug: bool,
    default_config: Option<PathBuf>,
    input: Option<InputSource>,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    /// Resolver using `~/.config/promptline/config.yaml` as the fallback config
    /// file and detecting piped stdin at resolve time.
    pub fn new() -> Self {
        Self {
            debug: false,
            default_config: default_config_location(),
            input: None,
        }
    }

    /// Log name mappings, matched flags and applied values at debug level.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Fallback config file used when `--config` is not given. `None` disables
    /// the fallback. A fallback that does not exist is skipped silently.
    pub fn with_default_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.default_config = path;
        self
    }

    /// Use `input` instead of detecting piped stdin.
    pub fn with_input(mut self, input: InputSource) -> Self {
        self.input = Some(input);
        self
    }

    /// Resolve raw tokens (without the program name) into final options.
    pub fn resolve<I, T>(self, tokens: I) -> ResolveResult<Resolved>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let tokens: Vec<OsString> = tokens.into_iter().map(Into::into).collect();
        let scan_view: Vec<String> = tokens
            .iter()
            .map(|token| token.to_string_lossy().into_owned())
            .collect();

        let used = scan_used_flags(&scan_view, self.debug);
        let (mut flags, positional) = parse_flags(tokens)?;

        let config_path = match flags.config.clone() {
            Some(explicit) => Some(explicit),
            None => self.default_config.filter(|path| path.is_file()),
        };

        let mut coercion_failures = Vec::new();
        let mut applied = None;
        if let Some(path) = config_path {
            let file = load_config_file(&path)?;
            coercion_failures = merge_config(&mut flags, &file, &used, self.debug);
            let path = file.path().to_path_buf();
            flags.config = Some(path.clone());
            applied = Some(path);
        } else if self.debug {
            debug!("No config file; using command-line values and defaults");
        }

        let input = self.input.unwrap_or_else(InputSource::detect);
        assemble_message(&mut flags, &positional, input)?;

        Ok(Resolved {
            options: flags,
            config_path: applied,
            coercion_failures,
        })
    }
}
