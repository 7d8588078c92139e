//! Precedence merge of config-file values into parsed flags.
//!
//! For every option with a config key: a command-line value wins if the
//! pre-scan saw the flag, otherwise a value from the file replaces the parsed
//! default. Keys missing from the file leave the field alone, and CLI-only
//! options are never touched.

use super::coerce::assign;
use super::loader::ConfigFileValues;
use super::prescan::UsedFlagSet;
use super::schema::config_options;
use crate::cli::Flags;
use crate::error::CoercionError;
use tracing::{debug, warn};

/// Apply `file` to `flags` for every config-keyed option not in `used`.
///
/// Returns the fields whose file value could not be converted; those fields
/// keep their parsed value.
pub fn merge_config(
    flags: &mut Flags,
    file: &ConfigFileValues,
    used: &UsedFlagSet,
    debug: bool,
) -> Vec<CoercionError> {
    let mut failures = Vec::new();

    for spec in config_options() {
        let Some(key) = spec.config_key else { continue };
        let Some(value) = file.get(key) else { continue };

        if used.contains(key) {
            if debug {
                debug!(config_key = key, "Keeping command-line value over config file");
            }
            continue;
        }

        let Some(slot) = flags.slot_mut(key) else {
            warn!(config_key = key, "No field for config key; skipping");
            continue;
        };
        if debug && slot.kind() != value.kind() {
            debug!(
                config_key = key,
                from = %value.kind(),
                to = %slot.kind(),
                "Converting config value"
            );
        }

        match assign(key, slot, value) {
            Ok(()) => {
                if debug {
                    debug!(config_key = key, value = ?value, "Applied config file value");
                }
            }
            Err(err) => {
                warn!(
                    config_key = key,
                    error = %err,
                    "Type conversion failed; keeping previous value"
                );
                failures.push(err);
            }
        }
    }

    failures
}
