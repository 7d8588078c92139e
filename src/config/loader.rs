//! Config file loading.
//!
//! Reads a YAML file whose top-level keys are option config keys and decodes
//! each known key into a [`FileValue`]. Keys the option table does not know
//! are ignored, and a null value counts as "not specified".

use super::schema::{OptionSpec, ValueKind, config_options};
use crate::error::{ResolveError, ResolveResult};
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory under `~/.config` holding the default config file.
pub const CONFIG_DIR_NAME: &str = "promptline";

/// File name of the default config file.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// A decoded config value, tagged with the type it had in the file.
#[derive(Debug, Clone, PartialEq)]
pub enum FileValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl FileValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            FileValue::Text(_) => ValueKind::Text,
            FileValue::Integer(_) => ValueKind::Integer,
            FileValue::Float(_) => ValueKind::Float,
            FileValue::Bool(_) => ValueKind::Bool,
        }
    }
}

/// Values decoded from one config file, keyed by config key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigFileValues {
    path: PathBuf,
    values: BTreeMap<&'static str, FileValue>,
}

impl ConfigFileValues {
    /// Decode YAML text. `path` is only used for error context.
    pub fn from_yaml_str(path: &Path, content: &str) -> ResolveResult<Self> {
        Self::from_yaml_slice(path, content.as_bytes())
    }

    fn from_yaml_slice(path: &Path, bytes: &[u8]) -> ResolveResult<Self> {
        let mut values = BTreeMap::new();

        let document: Value = if is_blank_document(bytes) {
            Value::Null
        } else {
            serde_yaml::from_slice(bytes).map_err(|source| ResolveError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?
        };

        let mapping = match document {
            Value::Null => Default::default(),
            Value::Mapping(mapping) => mapping,
            other => {
                // Re-decode as a mapping to get serde_yaml's own type error.
                let source = serde_yaml::from_value::<serde_yaml::Mapping>(other)
                    .err()
                    .unwrap_or_else(|| {
                        serde::de::Error::custom("config file must be a mapping of option keys")
                    });
                return Err(ResolveError::ConfigParse {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        for spec in config_options() {
            let Some(key) = spec.config_key else { continue };
            let Some(raw) = mapping.get(key) else { continue };
            match decode_value(spec, raw) {
                Ok(Some(value)) => {
                    values.insert(key, value);
                }
                Ok(None) => {}
                Err(found) => {
                    return Err(ResolveError::ConfigShape {
                        path: path.to_path_buf(),
                        key,
                        expected: spec.kind,
                        found,
                    });
                }
            }
        }

        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    /// Path the values were read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&FileValue> {
        self.values.get(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Read and decode the config file at `path`.
///
/// A leading `~` is expanded and relative paths are made absolute first.
pub fn load_config_file(path: &Path) -> ResolveResult<ConfigFileValues> {
    let path = expand_path(path);
    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(ResolveError::ConfigNotFound { path });
        }
        Err(source) => return Err(ResolveError::ConfigRead { path, source }),
    };

    let values = ConfigFileValues::from_yaml_slice(&path, &bytes)?;
    debug!(path = %path.display(), keys = values.len(), "Loaded config file");
    Ok(values)
}

/// Conventional config location (`~/.config/promptline/config.yaml`),
/// whether or not it exists.
pub fn default_config_location() -> Option<PathBuf> {
    dirs::home_dir().map(|home| {
        home.join(".config")
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    })
}

/// Expand a leading `~` to the home directory and make the path absolute.
pub fn expand_path(path: &Path) -> PathBuf {
    let expanded = match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    };

    if expanded.is_absolute() {
        expanded
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(&expanded))
            .unwrap_or(expanded)
    }
}

/// Empty, whitespace-only or comment-only content.
fn is_blank_document(bytes: &[u8]) -> bool {
    std::str::from_utf8(bytes).is_ok_and(|content| {
        content.lines().all(|line| {
            let line = line.trim();
            line.is_empty() || line.starts_with('#') || line == "---"
        })
    })
}

/// Decode one raw YAML value for `spec`.
///
/// `Ok(None)` means the key was null. `Err` carries the structural kind found
/// when it cannot fit the declared kind at all. Scalar mismatches are kept as
/// decoded and left to the merge to convert.
fn decode_value(spec: &OptionSpec, raw: &Value) -> Result<Option<FileValue>, ValueKind> {
    let raw = strip_tags(raw);
    if raw.is_null() {
        return Ok(None);
    }

    let value = match spec.kind {
        ValueKind::Text => match scalar_text(raw) {
            Some(text) => FileValue::Text(text),
            None => return Err(structural_kind(raw)),
        },
        ValueKind::Float => match raw {
            Value::Number(n) => match n.as_f64() {
                Some(f) => FileValue::Float(f),
                None => FileValue::Text(n.to_string()),
            },
            _ => decode_scalar(raw)?,
        },
        ValueKind::Integer | ValueKind::Bool => decode_scalar(raw)?,
        ValueKind::Mapping | ValueKind::List => return Err(structural_kind(raw)),
    };
    Ok(Some(value))
}

/// Decode a scalar keeping its YAML type.
fn decode_scalar(raw: &Value) -> Result<FileValue, ValueKind> {
    match raw {
        Value::String(s) => Ok(FileValue::Text(s.clone())),
        Value::Bool(b) => Ok(FileValue::Bool(*b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(FileValue::Integer(i))
            } else if let Some(f) = n.as_f64() {
                Ok(FileValue::Float(f))
            } else {
                Ok(FileValue::Text(n.to_string()))
            }
        }
        other => Err(structural_kind(other)),
    }
}

/// Render a scalar as text, as YAML would when decoding into a string field.
fn scalar_text(raw: &Value) -> Option<String> {
    match raw {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn structural_kind(raw: &Value) -> ValueKind {
    match raw {
        Value::Sequence(_) => ValueKind::List,
        Value::Mapping(_) => ValueKind::Mapping,
        Value::Bool(_) => ValueKind::Bool,
        Value::Number(_) => ValueKind::Float,
        _ => ValueKind::Text,
    }
}

fn strip_tags(raw: &Value) -> &Value {
    match raw {
        Value::Tagged(tagged) => strip_tags(&tagged.value),
        other => other,
    }
}
