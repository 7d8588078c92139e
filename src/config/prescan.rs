//! Pre-scan of raw command-line tokens.
//!
//! Once clap has applied defaults, a flag left at its default looks exactly
//! like one the user typed with the default value. This pass runs over the raw
//! tokens first and records which config-keyed options were named explicitly,
//! so the merge never lets the config file override them. Presence of the
//! token is what counts, never the parsed value.

use super::schema::{OPTIONS, ValueKind, config_options};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Config keys of options named on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedFlagSet(HashSet<&'static str>);

impl UsedFlagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, config_key: &'static str) -> bool {
        self.0.insert(config_key)
    }

    pub fn contains(&self, config_key: &str) -> bool {
        self.0.contains(config_key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Map every short and long name of a config-keyed option to its config key.
pub fn flag_to_config_key(debug: bool) -> HashMap<String, &'static str> {
    let mut map = HashMap::new();
    for spec in config_options() {
        let Some(key) = spec.config_key else { continue };
        if let Some(long) = spec.long {
            map.insert(long.to_string(), key);
            if debug {
                debug!(flag = long, config_key = key, "Mapped long flag to config key");
            }
        }
        if let Some(short) = spec.short {
            map.insert(short.to_string(), key);
            if debug {
                debug!(flag = %short, config_key = key, "Mapped short flag to config key");
            }
        }
    }
    map
}

/// Option name named by a flag-shaped token, without dashes or `=value`.
///
/// `--name`, `--name=value`, `-n` and `-n=value` all qualify. Anything else,
/// including a lone `-`, yields `None`.
pub fn extract_flag(token: &str) -> Option<&str> {
    let name = if let Some(rest) = token.strip_prefix("--") {
        rest
    } else if token.len() > 1 {
        token.strip_prefix('-')?
    } else {
        return None;
    };

    let name = match name.find('=') {
        Some(i) if i > 0 => &name[..i],
        _ => name,
    };
    (!name.is_empty()).then_some(name)
}

/// Record which config-keyed options the raw tokens name explicitly.
///
/// Never fails: tokens that are not flags, or that name an unknown or CLI-only
/// option, are skipped.
pub fn scan_used_flags<S: AsRef<str>>(tokens: &[S], debug: bool) -> UsedFlagSet {
    let names = flag_to_config_key(debug);
    let mut used = UsedFlagSet::new();

    for token in tokens {
        let Some(flag) = extract_flag(token.as_ref()) else {
            continue;
        };
        if let Some(&key) = names.get(flag) {
            used.insert(key);
            if debug {
                debug!(flag, config_key = key, "CLI flag used");
            }
            continue;
        }

        // `-sr` or `-t0.2`: clustered shorts, possibly ending in an attached value.
        if !token.as_ref().starts_with("--") {
            for short in short_cluster(flag) {
                if let Some(&key) = names.get(short.to_string().as_str()) {
                    used.insert(key);
                    if debug {
                        debug!(flag = %short, config_key = key, "CLI flag used in cluster");
                    }
                }
            }
        }
    }
    used
}

/// Short options named by a cluster such as `sr` or `t0.2`.
///
/// Walks the characters while each is a known short option; a value-taking
/// option ends the cluster since the rest is its value.
fn short_cluster(cluster: &str) -> Vec<char> {
    let mut shorts = Vec::new();
    for c in cluster.chars() {
        let Some(spec) = OPTIONS.iter().find(|spec| spec.short == Some(c)) else {
            break;
        };
        shorts.push(c);
        if spec.kind != ValueKind::Bool {
            break;
        }
    }
    shorts
}
